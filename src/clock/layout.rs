//! Screen layout of the light grid
//!
//! The screen is split into five equal-height rows. Each row is split into
//! as many equal-width columns as it has lights, and every light sits at the
//! center of its cell. The five-minute row zig-zags: some of its slots are
//! nudged up or down by a fixed amount so eleven lights fit side by side.
//!
//! Centers are truncated to whole pixels the same way for every slot, so the
//! grid is fully determined by the screen size.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::catalog::{LightCatalog, LightCategory};
use crate::consts::*;
use crate::error::{ClockError, Result};
use crate::{Position, center_to_top_left};

/// Size of the (single) display the clock fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenDimensions {
    pub width: u32,
    pub height: u32,
}

impl ScreenDimensions {
    /// Validated screen size; both sides must be positive
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let screen = Self { width, height };
        screen.validate()?;
        Ok(screen)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ClockError::InvalidScreen {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl Default for ScreenDimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_SCREEN_WIDTH,
            height: DEFAULT_SCREEN_HEIGHT,
        }
    }
}

/// Vertical zig-zag applied to the five-minute row
///
/// Only meaningful for the 11-light row: the slot sets are raw indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowOffsets {
    /// Pixels subtracted from `y` for `FIVE_MINUTE_ROW_UP_SLOTS`
    pub up: i32,
    /// Pixels added to `y` for `FIVE_MINUTE_ROW_DOWN_SLOTS`
    pub down: i32,
}

impl Default for RowOffsets {
    fn default() -> Self {
        Self {
            up: FIVE_MINUTE_ROW_OFFSET_UP,
            down: FIVE_MINUTE_ROW_OFFSET_DOWN,
        }
    }
}

impl RowOffsets {
    /// Vertical adjustment for a slot
    pub fn adjustment(&self, row: usize, slot: usize) -> i32 {
        if row != FIVE_MINUTE_ROW {
            0
        } else if FIVE_MINUTE_ROW_UP_SLOTS.contains(&slot) {
            -self.up
        } else if FIVE_MINUTE_ROW_DOWN_SLOTS.contains(&slot) {
            self.down
        } else {
            0
        }
    }
}

/// Slot centers of every row, in slot order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionGrid {
    rows: [Vec<Position>; ROW_COUNT],
}

impl PositionGrid {
    /// Compute slot centers for a screen
    pub fn compute(screen: ScreenDimensions, offsets: &RowOffsets) -> Self {
        let row_height = screen.height as f64 / ROW_COUNT as f64;

        let rows = std::array::from_fn(|row| {
            let capacity = ROW_CAPACITIES[row];
            let column_width = screen.width as f64 / capacity as f64;
            let y = cell_center(row, row_height);

            (0..capacity)
                .map(|slot| {
                    let x = cell_center(slot, column_width);
                    Position::new(x, y + offsets.adjustment(row, slot))
                })
                .collect()
        });

        Self { rows }
    }

    /// Slot centers of one row
    ///
    /// Panics if `row >= ROW_COUNT`.
    pub fn row(&self, row: usize) -> &[Position] {
        &self.rows[row]
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Position]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Total number of slots
    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Index<usize> for PositionGrid {
    type Output = [Position];

    fn index(&self, row: usize) -> &Self::Output {
        self.row(row)
    }
}

/// Center of the `index`-th cell of size `extent`, truncated to pixels
#[inline]
fn cell_center(index: usize, extent: f64) -> i32 {
    ((index + 1) as f64 * extent) as i32 - (extent / 2.0) as i32
}

/// Static "all lights off" layer, already anchor-corrected
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BackgroundPositions {
    /// Rows 0-1
    pub large: Vec<Position>,
    /// Rows 2-4
    pub small: Vec<Position>,
}

impl BackgroundPositions {
    pub fn for_category(&self, category: LightCategory) -> &[Position] {
        match category {
            LightCategory::Large => &self.large,
            LightCategory::Small => &self.small,
        }
    }
}

/// Fixed light positions for one screen
///
/// Computed once at startup; the clock does not support resizing while running.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    screen: ScreenDimensions,
    grid: PositionGrid,
    /// Center to top-left shift per category (large, small)
    anchor_offsets: [i32; 2],
    background: BackgroundPositions,
}

impl LayoutEngine {
    /// Lay out the grid for `screen` using the catalog's light sizes
    ///
    /// Fails if the screen is empty or a category has no registered light.
    pub fn new(screen: ScreenDimensions, catalog: &LightCatalog, offsets: RowOffsets) -> Result<Self> {
        screen.validate()?;

        let anchor_offsets = [
            catalog.anchor_offset(LightCategory::Large)?,
            catalog.anchor_offset(LightCategory::Small)?,
        ];
        let grid = PositionGrid::compute(screen, &offsets);

        let mut engine = Self {
            screen,
            grid,
            anchor_offsets,
            background: BackgroundPositions::default(),
        };
        engine.background = engine.compute_background();

        log::info!(
            "Laid out {} lights on {}x{} (anchor offsets: large {}px, small {}px)",
            engine.grid.len(),
            screen.width,
            screen.height,
            anchor_offsets[0],
            anchor_offsets[1],
        );
        Ok(engine)
    }

    pub fn screen(&self) -> ScreenDimensions {
        self.screen
    }

    pub fn grid(&self) -> &PositionGrid {
        &self.grid
    }

    /// Center to top-left shift for a category's lights
    pub fn anchor_offset(&self, category: LightCategory) -> i32 {
        match category {
            LightCategory::Large => self.anchor_offsets[0],
            LightCategory::Small => self.anchor_offsets[1],
        }
    }

    /// Top-left placement for a light of `category` centered on `position`
    #[inline]
    pub fn anchor_correct(&self, position: Position, category: LightCategory) -> Position {
        center_to_top_left(position, self.anchor_offset(category))
    }

    /// First `count` slots of a row, anchor-corrected for the row's category
    pub fn lit_positions(&self, row: usize, count: usize) -> Vec<Position> {
        let category = LightCategory::for_row(row);
        self.grid
            .row(row)
            .iter()
            .take(count)
            .map(|&pos| self.anchor_correct(pos, category))
            .collect()
    }

    /// Grey lights under every slot
    pub fn background_positions(&self) -> &BackgroundPositions {
        &self.background
    }

    fn compute_background(&self) -> BackgroundPositions {
        let mut background = BackgroundPositions::default();
        for row in 0..ROW_COUNT {
            let category = LightCategory::for_row(row);
            let corrected = self
                .grid
                .row(row)
                .iter()
                .map(|&pos| self.anchor_correct(pos, category));
            match category {
                LightCategory::Large => background.large.extend(corrected),
                LightCategory::Small => background.small.extend(corrected),
            }
        }
        background
    }
}
