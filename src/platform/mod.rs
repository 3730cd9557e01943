//! Platform abstraction layer
//!
//! Everything the clock needs to know about its surroundings before it can
//! be built:
//! - Which display to fill (exactly one is supported)
//! - How big each light image is

pub mod assets;
pub mod display;

pub use assets::{AssetProbe, ImageDirectory, register_all};
pub use display::{ConfiguredDisplays, DisplaySource, select_single_display};
