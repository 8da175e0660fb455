use std::fmt::Write as _;
use std::io::Write;

use trailhead_core::context::AppConfig;
use trailhead_core::{MarkOutcome, SearchKind, TrailSnapshot};

use crate::CliContext;

pub fn list_stops(ctx: &CliContext) -> String {
    let snapshot = ctx.store.snapshot();
    let mut out = String::new();
    for stop in ctx.store.stops() {
        let marker = if snapshot.is_visited(stop.id.as_str()) { "x" } else { " " };
        let _ = writeln!(out, "[{marker}] {:<12} {:<12} {}", stop.id, stop.label, stop.route);
    }
    out
}

pub fn visit(ctx: &CliContext, stop: &str) -> String {
    match ctx.store.mark_visited(stop) {
        MarkOutcome::Recorded => format!("Visited {stop}\n{}", status(ctx)),
        MarkOutcome::AlreadyVisited => format!("{stop} already visited\n"),
        MarkOutcome::UnknownStop => format!("Unknown stop: {stop}\n"),
    }
}

/// Mark the stop behind a page route, the way the site does on navigation.
pub fn navigate(ctx: &CliContext, route: &str) -> String {
    let Some(stop) = ctx.store.stops().stop_for_route(route) else {
        return format!("{route} is not a trail stop\n");
    };
    let id = stop.id.to_string();
    visit(ctx, &id)
}

pub fn status(ctx: &CliContext) -> String {
    let mut out = format_status(&ctx.store.snapshot());
    if ctx.store.is_persistence_degraded() {
        out.push_str("Warning: progress could not be saved and will be lost on exit\n");
    }
    out
}

pub fn format_status(snapshot: &TrailSnapshot) -> String {
    let mut out = format!(
        "Visited {}/{}",
        snapshot.visited_count(),
        snapshot.total_stop_count()
    );
    if snapshot.is_unlocked() {
        out.push_str(" - Recruiter packet unlocked!\n");
    } else {
        let remaining = snapshot.stops_remaining();
        let _ = writeln!(
            out,
            " - visit {remaining} more stop{} to unlock the recruiter packet",
            if remaining == 1 { "" } else { "s" }
        );
    }
    if let Some(last) = snapshot.last_visit() {
        let local = last.with_timezone(&chrono::Local);
        let _ = writeln!(out, "Last visit: {}", local.format("%Y-%m-%d %H:%M:%S"));
    }
    out
}

pub fn reset(ctx: &CliContext) -> String {
    ctx.store.reset_progress();
    format!("Progress reset\n{}", status(ctx))
}

pub fn search(ctx: &CliContext, query: &str) -> String {
    let Some(content) = &ctx.content else {
        return "No content loaded (set content_dir in the config)\n".to_string();
    };

    let hits = content.search(query, ctx.store.stops());
    if hits.is_empty() {
        return "No results found.\n".to_string();
    }

    let mut out = String::new();
    for hit in hits {
        let kind = match hit.kind {
            SearchKind::Navigation => "page",
            SearchKind::Experience => "experience",
            SearchKind::Project => "project",
            SearchKind::Skill => "skills",
        };
        let _ = write!(out, "{kind:<11} {}", hit.title);
        if let Some(detail) = hit.detail.filter(|d| !d.is_empty()) {
            let _ = write!(out, " ({detail})");
        }
        let _ = writeln!(out, " -> {}", hit.route);
    }
    out
}

pub fn show_config(ctx: &CliContext) -> String {
    let mut out = String::new();
    match AppConfig::config_path() {
        Ok(path) => {
            let _ = writeln!(out, "Config file:    {}", path.display());
        }
        Err(e) => {
            let _ = writeln!(out, "Config file:    unavailable ({e})");
        }
    }
    let _ = writeln!(out, "Progress file:  {}", ctx.progress_path.display());
    let _ = writeln!(
        out,
        "Content dir:    {}",
        ctx.config
            .content_dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "(none)".to_string())
    );
    let _ = writeln!(out, "Unlock after:   {} stops", ctx.config.trail.unlock_threshold);
    let _ = writeln!(out, "Storage key:    {}", ctx.config.trail.storage_key);
    out
}

/// Write the session's settings to the config file, creating it if needed.
pub fn save_config(ctx: &CliContext) -> String {
    match ctx.config.save() {
        Ok(path) => format!("Saved configuration to {}\n", path.display()),
        Err(e) => format!("Failed to save configuration: {e}\n"),
    }
}

pub fn exit() {
    let _ = writeln!(std::io::stdout(), "quitting...");
    let _ = std::io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn ctx_in(dir: &Path) -> CliContext {
        let config = AppConfig {
            progress_file: Some(dir.join("progress.json")),
            ..Default::default()
        };
        CliContext::with_config(config).unwrap()
    }

    #[test]
    fn visit_reports_progress_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ctx_in(dir.path());

        let out = visit(&ctx, "education");
        assert!(out.starts_with("Visited education\nVisited 1/6"));
        assert!(out.contains("visit 2 more stops"));

        let reopened = ctx_in(dir.path());
        assert!(reopened.store.is_visited("education"));
    }

    #[test]
    fn repeat_and_unknown_visits_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ctx_in(dir.path());

        visit(&ctx, "skills");
        assert_eq!(visit(&ctx, "skills"), "skills already visited\n");
        assert_eq!(visit(&ctx, "home"), "Unknown stop: home\n");
    }

    #[test]
    fn navigate_maps_routes_to_stops() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ctx_in(dir.path());

        navigate(&ctx, "/projects#ridgeline");
        assert!(ctx.store.is_visited("projects"));
        assert_eq!(navigate(&ctx, "/outpost"), "/outpost is not a trail stop\n");
    }

    #[test]
    fn status_announces_unlock() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ctx_in(dir.path());
        for stop in ["education", "projects"] {
            visit(&ctx, stop);
        }
        assert!(status(&ctx).contains("visit 1 more stop to unlock"));

        visit(&ctx, "contact");
        assert!(status(&ctx).starts_with("Visited 3/6 - Recruiter packet unlocked!"));
    }

    #[test]
    fn reset_clears_listing() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ctx_in(dir.path());
        visit(&ctx, "interests");
        assert!(list_stops(&ctx).contains("[x] interests"));

        reset(&ctx);
        assert!(list_stops(&ctx).contains("[ ] interests"));
    }

    #[test]
    fn search_without_content_explains_why() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ctx_in(dir.path());
        assert!(search(&ctx, "rust").starts_with("No content loaded"));
    }

    #[test]
    fn other_process_writes_are_seen_after_sync() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ctx_in(dir.path());
        let other = ctx_in(dir.path());

        visit(&other, "experience");
        assert!(!ctx.store.is_visited("experience"));
        assert!(ctx.store.sync_from_storage());
        assert!(ctx.store.is_visited("experience"));
    }
}
