//! Clock facade owning the catalog, layout and tick state

use chrono::Timelike;

use super::catalog::{LightCatalog, LightCategory};
use super::layout::{BackgroundPositions, LayoutEngine, PositionGrid, RowOffsets, ScreenDimensions};
use super::tick::{ChangeSet, TickDigits, TickStateTracker};
use crate::error::Result;

/// A light clock for one screen
///
/// Each instance owns its own catalog, grid and previous-cycle digits.
#[derive(Debug)]
pub struct LightClock {
    catalog: LightCatalog,
    layout: LayoutEngine,
    tracker: TickStateTracker,
}

impl LightClock {
    /// Build the clock once the single display and all light images are known
    pub fn new(screen: ScreenDimensions, catalog: LightCatalog, offsets: RowOffsets) -> Result<Self> {
        let layout = LayoutEngine::new(screen, &catalog, offsets)?;
        Ok(Self {
            catalog,
            layout,
            tracker: TickStateTracker::new(),
        })
    }

    pub fn screen(&self) -> ScreenDimensions {
        self.layout.screen()
    }

    pub fn catalog(&self) -> &LightCatalog {
        &self.catalog
    }

    pub fn layout(&self) -> &LayoutEngine {
        &self.layout
    }

    pub fn grid(&self) -> &PositionGrid {
        self.layout.grid()
    }

    /// Scale to draw a category's light images at
    pub fn scale_factor(&self, category: LightCategory) -> Result<f64> {
        self.catalog.scale_factor(category)
    }

    pub fn background_positions(&self) -> &BackgroundPositions {
        self.layout.background_positions()
    }

    /// Advance one cycle and report which rows must be redrawn
    pub fn evaluate<T: Timelike>(&mut self, now: &T) -> ChangeSet {
        self.tracker.evaluate(now, &self.layout)
    }

    pub fn evaluate_digits(&mut self, digits: TickDigits) -> ChangeSet {
        self.tracker.evaluate_digits(digits, &self.layout)
    }

    pub fn last_digits(&self) -> Option<TickDigits> {
        self.tracker.last_digits()
    }
}
