//! Clock core: light catalog, grid layout and per-cycle change detection
//!
//! This module is pure and deterministic:
//! - No window, rendering or image decoding
//! - No wall-clock reads (callers pass the time in)
//! - Layout computed once per screen, never resized

pub mod catalog;
pub mod engine;
pub mod layout;
pub mod tick;

pub use catalog::{Light, LightAsset, LightCatalog, LightCategory};
pub use engine::LightClock;
pub use layout::{BackgroundPositions, LayoutEngine, PositionGrid, RowOffsets, ScreenDimensions};
pub use tick::{ChangeRecord, ChangeSet, TickDigits, TickStateTracker};
