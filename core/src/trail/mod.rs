//! Trail progress: which stops a visitor has opened, and whether that
//! unlocks the recruiter packet.
//!
//! Per stop the state only moves `Unvisited -> Visited`; the packet only
//! moves `Locked -> Unlocked`. [`TrailProgressStore::reset_progress`] is the
//! single way back.

mod config;
mod error;
mod record;
mod snapshot;
mod stops;
mod store;


pub use config::{DEFAULT_STORAGE_KEY, DEFAULT_UNLOCK_THRESHOLD, TrailConfig};
pub use error::{ConfigError, RecordError};
pub use record::ProgressRecord;
pub use snapshot::TrailSnapshot;
pub use stops::{StopSet, default_stops};
pub use store::{MarkOutcome, TrailProgressStore, TrailProgressStoreBuilder};
