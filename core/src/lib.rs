pub mod clock;
pub mod content;
#[cfg(not(target_arch = "wasm32"))]
pub mod context;
pub mod notifier;
pub mod storage;
pub mod trail;

// Re-exports for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use content::{Content, ContentError, ContentSources, SearchHit, SearchKind};
pub use notifier::{ChangeCallback, ChangeNotifier, LocalNotifier, NoopNotifier, Subscription};
pub use storage::{MemoryStorage, ProgressStorage, StorageError};
#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
pub use trail::{
    ConfigError, MarkOutcome, ProgressRecord, RecordError, StopSet, TrailConfig,
    TrailProgressStore, TrailSnapshot,
};
pub use trailhead_types::{Stop, StopId};
