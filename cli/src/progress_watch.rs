use trailhead_core::context::{ProgressEvent, ProgressWatcher};

use crate::CliContext;
use crate::commands;

/// Follow the progress file until Ctrl-C, printing status whenever another
/// process changes it.
pub async fn watch(ctx: &CliContext) -> Result<(), String> {
    let mut watcher = ProgressWatcher::new(&ctx.progress_path)
        .map_err(|e| format!("Failed to start progress watcher: {e}\n"))?;

    println!(
        "Watching {} (Ctrl-C to stop)",
        ctx.progress_path.display()
    );
    print!("{}", commands::status(ctx));

    loop {
        tokio::select! {
            event = watcher.next_event() => match event {
                Some(event) => handle_event(event, ctx),
                None => break,
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    println!("Stopped watching");
    Ok(())
}

fn handle_event(event: ProgressEvent, ctx: &CliContext) {
    match event {
        ProgressEvent::Changed | ProgressEvent::Removed => {
            if ctx.store.sync_from_storage() {
                print!("{}", commands::status(ctx));
            }
        }
        ProgressEvent::Error(message) => {
            tracing::warn!(%message, "Progress watcher error");
        }
    }
}
