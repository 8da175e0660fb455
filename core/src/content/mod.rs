//! Site content: the read-only profile, experience, projects, skills,
//! interests and apps documents the pages render.
//!
//! Content is parsed and checked once at startup. A schema mismatch or
//! inconsistent ids stop the site from starting rather than rendering a
//! half-broken page.

mod error;
mod search;

pub use error::ContentError;
pub use search::{SearchHit, SearchKind};

use std::collections::HashSet;
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

use serde::de::DeserializeOwned;
use trailhead_types::{App, Education, Experience, Interests, Profile, Project, Skills};

use crate::trail::StopSet;

/// The raw JSON documents, one per content file.
#[derive(Debug, Clone, Copy)]
pub struct ContentSources<'a> {
    pub profile: &'a str,
    pub experience: &'a str,
    pub projects: &'a str,
    pub skills: &'a str,
    pub interests: &'a str,
    pub apps: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    profile: Profile,
    experience: Vec<Experience>,
    projects: Vec<Project>,
    skills: Skills,
    interests: Interests,
    apps: Vec<App>,
}

impl Content {
    /// Parse and validate all documents.
    pub fn parse(sources: ContentSources<'_>) -> Result<Self, ContentError> {
        let content = Self {
            profile: parse_document("profile", sources.profile)?,
            experience: parse_document("experience", sources.experience)?,
            projects: parse_document("projects", sources.projects)?,
            skills: parse_document("skills", sources.skills)?,
            interests: parse_document("interests", sources.interests)?,
            apps: parse_document("apps", sources.apps)?,
        };
        content.validate()?;

        tracing::debug!(
            experience = content.experience.len(),
            projects = content.projects.len(),
            apps = content.apps.len(),
            "Content loaded"
        );
        Ok(content)
    }

    /// Load `profile.json`, `experience.json`, `projects.json`,
    /// `skills.json`, `interests.json` and `apps.json` from `dir`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_dir(dir: &Path) -> Result<Self, ContentError> {
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|source| ContentError::Read { path, source })
        };

        let profile = read("profile.json")?;
        let experience = read("experience.json")?;
        let projects = read("projects.json")?;
        let skills = read("skills.json")?;
        let interests = read("interests.json")?;
        let apps = read("apps.json")?;

        Self::parse(ContentSources {
            profile: &profile,
            experience: &experience,
            projects: &projects,
            skills: &skills,
            interests: &interests,
            apps: &apps,
        })
    }

    fn validate(&self) -> Result<(), ContentError> {
        ensure_unique("experience", self.experience.iter().map(|e| e.id.as_str()))?;
        ensure_unique("project", self.projects.iter().map(|p| p.id.as_str()))?;
        ensure_unique(
            "interest",
            self.interests.interests.iter().map(|i| i.id.as_str()),
        )?;
        ensure_unique("app", self.apps.iter().map(|a| a.id.as_str()))?;

        let mut slugs = HashSet::new();
        for app in &self.apps {
            if !slugs.insert(app.slug.as_str()) {
                return Err(ContentError::DuplicateSlug {
                    slug: app.slug.clone(),
                });
            }
            if app.mode.requires_url() && app.url.as_deref().is_none_or(str::is_empty) {
                return Err(ContentError::MissingAppUrl { id: app.id.clone() });
            }
        }
        Ok(())
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn education(&self) -> &Education {
        &self.profile.education
    }

    pub fn experience(&self) -> &[Experience] {
        &self.experience
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }

    pub fn skills(&self) -> &Skills {
        &self.skills
    }

    pub fn interests(&self) -> &Interests {
        &self.interests
    }

    pub fn apps(&self) -> &[App] {
        &self.apps
    }

    pub fn app_by_slug(&self, slug: &str) -> Option<&App> {
        self.apps.iter().find(|app| app.slug == slug)
    }

    /// Command palette search over stops and content items.
    pub fn search(&self, query: &str, stops: &StopSet) -> Vec<SearchHit> {
        search::search(self, stops, query)
    }
}

fn parse_document<T: DeserializeOwned>(
    document: &'static str,
    raw: &str,
) -> Result<T, ContentError> {
    serde_json::from_str(raw).map_err(|source| ContentError::Parse { document, source })
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::ContentSources;

    pub const PROFILE: &str = r#"{
        "name": "Jordan Vale",
        "title": "Software Engineer",
        "tagline": "Building reliable web software",
        "location": "Richmond, VA",
        "email": "jordan@example.com",
        "phone": "555-0100",
        "summary": "Full-stack developer.",
        "github": { "personal": "https://github.com/jvale", "work": "https://github.com/jvale-work" },
        "linkedin": "https://linkedin.com/in/jvale",
        "education": {
            "school": "State University",
            "schoolShort": "SU",
            "degrees": [{ "type": "B.S.", "field": "Computer Science" }],
            "location": "Charlottesville, VA",
            "graduationYear": 2023,
            "graduationDate": "May 2023",
            "gpa": 3.4,
            "coursework": ["Algorithms", "Operating Systems"]
        }
    }"#;

    pub const EXPERIENCE: &str = r#"[
        {
            "id": "harbor",
            "company": "Harbor Analytics",
            "role": "Software Engineer",
            "location": "Remote",
            "dates": "Jul 2023 - Present",
            "startDate": "2023-07",
            "endDate": null,
            "description": ["Built ingestion services"],
            "technologies": ["Rust", "PostgreSQL"]
        },
        {
            "id": "lantern",
            "company": "Lantern Labs",
            "role": "SWE Intern",
            "location": "Arlington, VA",
            "dates": "Jun 2022 - Aug 2022",
            "startDate": "2022-06",
            "endDate": "2022-08",
            "technologies": ["Angular", ".NET"]
        }
    ]"#;

    pub const PROJECTS: &str = r#"[
        {
            "id": "ridgeline",
            "title": "Ridgeline",
            "description": "Trail conditions tracker",
            "technologies": ["React", "Node"],
            "githubUrl": "https://github.com/jvale/ridgeline",
            "demoUrl": null,
            "featured": true,
            "dates": "2023"
        },
        {
            "id": "ledger",
            "title": "Pocket Ledger",
            "description": "Budgeting in the terminal",
            "technologies": ["Rust"],
            "dates": "2022"
        }
    ]"#;

    pub const SKILLS: &str = r#"{
        "categories": [
            {
                "name": "Web Frontend",
                "description": "Client-side work",
                "skills": [{ "name": "React", "icon": "react" }, { "name": "TypeScript", "icon": "ts" }]
            },
            {
                "name": "Systems",
                "description": "Lower level",
                "skills": [{ "name": "Rust", "icon": "rust" }]
            }
        ],
        "highlights": ["Ships end to end"]
    }"#;

    pub const INTERESTS: &str = r#"{
        "interests": [
            {
                "id": "hiking",
                "title": "Hiking",
                "icon": "mountain",
                "description": "Weekend trails",
                "highlights": [{ "title": "AT section", "dates": "2021", "description": "120 miles" }]
            }
        ]
    }"#;

    pub const APPS: &str = r#"[
        { "id": "pomodoro", "slug": "pomodoro", "name": "Pomodoro", "description": "Focus timer", "icon": "timer", "mode": "internal", "url": null },
        { "id": "atlas", "slug": "atlas", "name": "Atlas", "description": "Map viewer", "icon": "map", "mode": "iframe", "url": "https://atlas.example.com" }
    ]"#;

    pub fn sources() -> ContentSources<'static> {
        ContentSources {
            profile: PROFILE,
            experience: EXPERIENCE,
            projects: PROJECTS,
            skills: SKILLS,
            interests: INTERESTS,
            apps: APPS,
        }
    }
}
