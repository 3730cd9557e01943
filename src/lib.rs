//! Light Clock - a full-screen grid of indicator lights that tells the time
//!
//! Core modules:
//! - `clock`: Layout and change detection (catalog, grid geometry, tick tracking)
//! - `renderer`: Headless sprite board driven by per-row change records
//! - `platform`: Display enumeration and light asset metadata
//! - `settings`: Data-driven configuration
//! - `error`: Configuration-time error taxonomy

pub mod clock;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;

pub use clock::{ChangeSet, LightCatalog, LightClock};
pub use error::{ClockError, Result};
pub use settings::Settings;

use glam::IVec2;

/// Clock configuration constants
pub mod consts {
    /// Number of light rows on screen
    pub const ROW_COUNT: usize = 5;
    /// Lights per row: 5-hours, 1-hours, 5-minutes, 1-minutes, seconds blink
    pub const ROW_CAPACITIES: [usize; ROW_COUNT] = [4, 4, 11, 4, 1];
    /// Rows below this index use large lights, the rest small ones
    pub const LARGE_ROW_COUNT: usize = 2;

    /// Asset size (px) at which a large light is drawn unscaled
    pub const LARGE_REFERENCE_SIZE: u32 = 192;
    /// Asset size (px) at which a small light is drawn unscaled
    pub const SMALL_REFERENCE_SIZE: u32 = LARGE_REFERENCE_SIZE / 2;

    /// The 11-light row that gets the zig-zag alignment correction
    pub const FIVE_MINUTE_ROW: usize = 2;
    /// Pixels the "up" slots of the five-minute row are raised by
    pub const FIVE_MINUTE_ROW_OFFSET_UP: i32 = 50;
    /// Pixels the "down" slots of the five-minute row are lowered by
    pub const FIVE_MINUTE_ROW_OFFSET_DOWN: i32 = 50;
    /// Slot indices raised by `FIVE_MINUTE_ROW_OFFSET_UP` (11 never exists; kept as-is)
    pub const FIVE_MINUTE_ROW_UP_SLOTS: [usize; 3] = [3, 7, 11];
    /// Slot indices lowered by `FIVE_MINUTE_ROW_OFFSET_DOWN`
    pub const FIVE_MINUTE_ROW_DOWN_SLOTS: [usize; 3] = [1, 5, 9];

    /// Screen used when no display is configured
    pub const DEFAULT_SCREEN_WIDTH: u32 = 640;
    pub const DEFAULT_SCREEN_HEIGHT: u32 = 480;

    /// Real-time interval between evaluation cycles
    pub const TICK_INTERVAL_MS: u64 = 1000;
}

/// Screen-space position in pixels (origin top-left)
pub type Position = IVec2;

/// Shift a slot center so a sprite of `offset * 2` pixels is centered on it
#[inline]
pub fn center_to_top_left(center: Position, offset: i32) -> Position {
    center - IVec2::splat(offset)
}
