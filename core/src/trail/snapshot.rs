use chrono::{DateTime, Utc};
use trailhead_types::StopId;

/// Immutable view of trail progress, handed to observers and UI surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailSnapshot {
    pub(crate) visited: Vec<StopId>,
    pub(crate) last_visit: Option<DateTime<Utc>>,
    pub(crate) total: usize,
    pub(crate) threshold: usize,
}

impl TrailSnapshot {
    /// Visited stops in visit order
    pub fn visited(&self) -> &[StopId] {
        &self.visited
    }

    pub fn last_visit(&self) -> Option<DateTime<Utc>> {
        self.last_visit
    }

    pub fn is_visited(&self, stop_id: &str) -> bool {
        self.visited.iter().any(|id| id == stop_id)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn total_stop_count(&self) -> usize {
        self.total
    }

    pub fn unlock_threshold(&self) -> usize {
        self.threshold
    }

    pub fn is_unlocked(&self) -> bool {
        self.visited.len() >= self.threshold
    }

    /// Visits still needed before the recruiter packet unlocks
    pub fn stops_remaining(&self) -> usize {
        self.threshold.saturating_sub(self.visited.len())
    }
}
