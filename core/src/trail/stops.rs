//! The fixed, ordered set of trail stops.

use std::collections::HashSet;

use trailhead_types::{Stop, StopId};

use super::ConfigError;

/// The stops the site ships with. Order is display order only.
pub fn default_stops() -> Vec<Stop> {
    vec![
        Stop::new("education", "Education", "/education"),
        Stop::new("experience", "Experience", "/experience"),
        Stop::new("projects", "Projects", "/projects"),
        Stop::new("skills", "Skills", "/skills"),
        Stop::new("interests", "Interests", "/interests"),
        Stop::new("contact", "Contact", "/contact"),
    ]
}

/// Validated stop enumeration: non-empty, unique non-blank ids, unique routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopSet {
    stops: Vec<Stop>,
}

impl StopSet {
    pub fn new(stops: Vec<Stop>) -> Result<Self, ConfigError> {
        if stops.is_empty() {
            return Err(ConfigError::NoStops);
        }

        let mut ids = HashSet::new();
        let mut routes = HashSet::new();
        for stop in &stops {
            if stop.id.as_str().trim().is_empty() {
                return Err(ConfigError::BlankStopId);
            }
            if !ids.insert(stop.id.as_str()) {
                return Err(ConfigError::DuplicateStop {
                    id: stop.id.to_string(),
                });
            }
            if !routes.insert(normalize_route(&stop.route)) {
                return Err(ConfigError::DuplicateRoute {
                    route: stop.route.clone(),
                });
            }
        }

        Ok(Self { stops })
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&Stop> {
        self.stops.iter().find(|stop| stop.id == id)
    }

    /// Display position of a stop
    pub fn position(&self, id: &str) -> Option<usize> {
        self.stops.iter().position(|stop| stop.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stop> {
        self.stops.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &StopId> {
        self.stops.iter().map(|stop| &stop.id)
    }

    /// Map a location to the stop whose page it shows. Anchors, query strings
    /// and trailing slashes are ignored.
    pub fn stop_for_route(&self, location: &str) -> Option<&Stop> {
        let wanted = normalize_route(location);
        self.stops
            .iter()
            .find(|stop| normalize_route(&stop.route) == wanted)
    }
}

impl Default for StopSet {
    fn default() -> Self {
        Self {
            stops: default_stops(),
        }
    }
}

impl<'a> IntoIterator for &'a StopSet {
    type Item = &'a Stop;
    type IntoIter = std::slice::Iter<'a, Stop>;

    fn into_iter(self) -> Self::IntoIter {
        self.stops.iter()
    }
}

fn normalize_route(route: &str) -> &str {
    let end = route.find(['#', '?']).unwrap_or(route.len());
    let path = &route[..end];
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_has_six_stops_in_display_order() {
        let stops = StopSet::default();
        let ids: Vec<&str> = stops.ids().map(|id| id.as_str()).collect();
        assert_eq!(
            ids,
            ["education", "experience", "projects", "skills", "interests", "contact"]
        );
        assert_eq!(stops.position("skills"), Some(3));
    }

    #[test]
    fn default_stops_pass_validation() {
        assert_eq!(StopSet::new(default_stops()).unwrap(), StopSet::default());
    }

    #[test]
    fn rejects_empty_blank_and_duplicate_definitions() {
        assert_eq!(StopSet::new(vec![]), Err(ConfigError::NoStops));
        assert_eq!(
            StopSet::new(vec![Stop::new("  ", "Blank", "/blank")]),
            Err(ConfigError::BlankStopId)
        );
        assert_eq!(
            StopSet::new(vec![
                Stop::new("skills", "Skills", "/skills"),
                Stop::new("skills", "Skills again", "/skills-2"),
            ]),
            Err(ConfigError::DuplicateStop {
                id: "skills".to_string()
            })
        );
        assert_eq!(
            StopSet::new(vec![
                Stop::new("a", "A", "/same"),
                Stop::new("b", "B", "/same/"),
            ]),
            Err(ConfigError::DuplicateRoute {
                route: "/same/".to_string()
            })
        );
    }

    #[test]
    fn route_lookup_ignores_anchor_query_and_trailing_slash() {
        let stops = StopSet::default();
        assert_eq!(
            stops.stop_for_route("/projects#trail-map").map(|s| s.id.as_str()),
            Some("projects")
        );
        assert_eq!(
            stops.stop_for_route("/skills/?tab=all").map(|s| s.id.as_str()),
            Some("skills")
        );
        assert!(stops.stop_for_route("/").is_none());
        assert!(stops.stop_for_route("/outpost").is_none());
    }
}
