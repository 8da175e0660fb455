//! UI Components

pub mod header;
pub mod recruiter_packet;
pub mod search_palette;
pub mod toast;
pub mod trail_progress;

pub use header::Header;
pub use recruiter_packet::RecruiterPacketTrigger;
pub use search_palette::SearchPalette;
pub use toast::{TrailToasts, use_toast_provider};
pub use trail_progress::{TrailMap, TrailProgress};
