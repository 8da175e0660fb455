//! Shared types for Trailhead
//!
//! This crate contains serializable types that are shared between the native
//! side (trailhead-core, trailhead-cli) and the WASM frontend (app-ui): the
//! trail stop identifiers and the typed site content schema.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Trail Stops
// ─────────────────────────────────────────────────────────────────────────────

/// Stable identifier of a trail stop (e.g. `"education"`).
///
/// Persisted progress refers to stops only by this id, so renaming an id
/// orphans previously recorded visits for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopId(String);

impl StopId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for StopId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StopId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for StopId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for StopId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StopId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A site section that counts toward trail progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    pub id: StopId,
    /// Display label (e.g. "Education")
    pub label: String,
    /// Page route the navigation shell maps this stop to (e.g. "/education")
    pub route: String,
}

impl Stop {
    pub fn new(id: &str, label: &str, route: &str) -> Self {
        Self {
            id: StopId::new(id),
            label: label.to_string(),
            route: route.to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Profile & Education
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Degree {
    /// Degree type (e.g. "B.A.")
    #[serde(rename = "type")]
    pub kind: String,
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub school: String,
    pub school_short: String,
    pub degrees: Vec<Degree>,
    pub location: String,
    pub graduation_year: u16,
    pub graduation_date: String,
    pub gpa: f32,
    #[serde(default)]
    pub coursework: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GithubLinks {
    pub personal: String,
    pub work: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub summary: String,
    pub github: GithubLinks,
    pub linkedin: String,
    pub education: Education,
}

// ─────────────────────────────────────────────────────────────────────────────
// Experience & Projects
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub role: String,
    pub location: String,
    /// Human readable date range (e.g. "Jun 2023 - Aug 2023")
    pub dates: String,
    pub start_date: String,
    /// None while the role is current
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl Experience {
    pub fn is_current(&self) -> bool {
        self.end_date.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub long_description: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    /// Image paths shown in the project lightbox
    #[serde(default)]
    pub media: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    pub dates: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Skills & Interests
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub description: String,
    pub skills: Vec<Skill>,
}

impl SkillCategory {
    /// Anchor used by the skills page: lowercase, whitespace runs become `-`
    pub fn anchor(&self) -> String {
        self.name
            .split_whitespace()
            .map(|part| part.to_lowercase())
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub categories: Vec<SkillCategory>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestHighlight {
    pub title: String,
    pub dates: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interest {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<InterestHighlight>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Interests {
    #[serde(default)]
    pub interests: Vec<Interest>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Apps
// ─────────────────────────────────────────────────────────────────────────────

/// How the outpost launches an app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppMode {
    /// Rendered by the site itself
    Internal,
    /// Opens `url` in a new tab
    External,
    /// Embeds `url` in an iframe
    Iframe,
}

impl AppMode {
    /// External and iframe apps cannot launch without a url
    pub fn requires_url(&self) -> bool {
        matches!(self, AppMode::External | AppMode::Iframe)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub mode: AppMode,
    #[serde(default)]
    pub url: Option<String>,
}
