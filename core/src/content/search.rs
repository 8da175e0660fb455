//! Command palette search.

use crate::trail::StopSet;

use super::Content;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Navigation,
    Experience,
    Project,
    Skill,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub kind: SearchKind,
    pub title: String,
    /// Secondary line (company, first technologies, ...)
    pub detail: Option<String>,
    /// Where selecting the hit navigates, anchors included
    pub route: String,
}

/// Case-insensitive substring match. Results are grouped navigation first,
/// then experience, projects and skills, each in content order.
pub(super) fn search(content: &Content, stops: &StopSet, query: &str) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let matches = |text: &str| text.to_lowercase().contains(&needle);

    let mut hits = Vec::new();

    for stop in stops {
        if matches(&stop.label) || matches(stop.id.as_str()) {
            hits.push(SearchHit {
                kind: SearchKind::Navigation,
                title: stop.label.clone(),
                detail: None,
                route: stop.route.clone(),
            });
        }
    }

    for exp in content.experience() {
        if matches(&exp.role)
            || matches(&exp.company)
            || exp.technologies.iter().any(|t| matches(t))
        {
            hits.push(SearchHit {
                kind: SearchKind::Experience,
                title: exp.role.clone(),
                detail: Some(exp.company.clone()),
                route: format!("/experience#{}", exp.id),
            });
        }
    }

    for project in content.projects() {
        if matches(&project.title)
            || matches(&project.description)
            || project.technologies.iter().any(|t| matches(t))
        {
            hits.push(SearchHit {
                kind: SearchKind::Project,
                title: project.title.clone(),
                detail: Some(
                    project
                        .technologies
                        .iter()
                        .take(3)
                        .cloned()
                        .collect::<Vec<_>>()
                        .join(", "),
                ),
                route: format!("/projects#{}", project.id),
            });
        }
    }

    for category in &content.skills().categories {
        if matches(&category.name) || category.skills.iter().any(|s| matches(&s.name)) {
            hits.push(SearchHit {
                kind: SearchKind::Skill,
                title: category.name.clone(),
                detail: Some(format!("{} skills", category.skills.len())),
                route: format!("/skills#{}", category.anchor()),
            });
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures::sources;

    fn content() -> Content {
        Content::parse(sources()).unwrap()
    }

    #[test]
    fn empty_query_returns_nothing() {
        assert!(content().search("   ", &StopSet::default()).is_empty());
    }

    #[test]
    fn technology_matches_across_groups() {
        let hits = content().search("rust", &StopSet::default());
        let routes: Vec<&str> = hits.iter().map(|h| h.route.as_str()).collect();
        assert_eq!(routes, ["/experience#harbor", "/projects#ledger", "/skills#systems"]);
    }

    #[test]
    fn navigation_hits_come_first() {
        let hits = content().search("PROJ", &StopSet::default());
        assert_eq!(hits[0].kind, SearchKind::Navigation);
        assert_eq!(hits[0].route, "/projects");
    }

    #[test]
    fn project_detail_lists_first_technologies() {
        let hits = content().search("ridgeline", &StopSet::default());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].detail.as_deref(), Some("React, Node"));
    }

    #[test]
    fn skill_category_route_uses_anchor() {
        let hits = content().search("typescript", &StopSet::default());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, SearchKind::Skill);
        assert_eq!(hits[0].route, "/skills#web-frontend");
    }
}
