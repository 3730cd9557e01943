//! Sprite board: background lights plus the lit lights of each row

use serde::Serialize;

use crate::Position;
use crate::clock::{BackgroundPositions, ChangeSet, Light, LightCategory};
use crate::consts::*;

/// Draw depth of the grey "off" lights
pub const BACKGROUND_DEPTH: i32 = -2;
/// Draw depth of lit lights
pub const LIGHT_DEPTH: i32 = -1;

/// A light image placed on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sprite {
    pub light: Light,
    /// Top-left corner
    pub position: Position,
    pub depth: i32,
}

/// All sprites currently on screen
#[derive(Debug, Clone)]
pub struct SpriteBoard {
    background: Vec<Sprite>,
    rows: [Vec<Sprite>; ROW_COUNT],
}

impl SpriteBoard {
    /// Place the static grey lights
    pub fn new(positions: &BackgroundPositions) -> Self {
        let background = LightCategory::ALL
            .iter()
            .flat_map(|&category| {
                let light = Light::background(category);
                positions
                    .for_category(category)
                    .iter()
                    .map(move |&position| Sprite {
                        light,
                        position,
                        depth: BACKGROUND_DEPTH,
                    })
            })
            .collect();

        Self {
            background,
            rows: Default::default(),
        }
    }

    /// Replace the lit sprites of every changed row
    ///
    /// Returns the number of rows redrawn.
    pub fn apply(&mut self, changes: &ChangeSet) -> usize {
        let mut redrawn = 0;
        for (row, record) in changes.changed() {
            let Some(light) = Light::for_row(row) else {
                continue;
            };
            let sprites = &mut self.rows[row];
            sprites.clear();
            sprites.extend(record.lit_positions.iter().map(|&position| Sprite {
                light,
                position,
                depth: LIGHT_DEPTH,
            }));
            redrawn += 1;
        }
        redrawn
    }

    pub fn background(&self) -> &[Sprite] {
        &self.background
    }

    /// Lit sprites of a row
    pub fn row(&self, row: usize) -> &[Sprite] {
        &self.rows[row]
    }

    /// Number of lit lights in each row
    pub fn lit_counts(&self) -> [usize; ROW_COUNT] {
        std::array::from_fn(|row| self.rows[row].len())
    }

    /// Every sprite in draw order, background first
    pub fn sprites(&self) -> impl Iterator<Item = &Sprite> {
        self.background.iter().chain(self.rows.iter().flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{LightCatalog, LightClock, RowOffsets, ScreenDimensions, TickDigits};

    fn clock() -> LightClock {
        let mut catalog = LightCatalog::new();
        for light in Light::ALL {
            catalog.register_light(light, 128, 128).unwrap();
        }
        LightClock::new(ScreenDimensions::new(1280, 720).unwrap(), catalog, RowOffsets::default())
            .unwrap()
    }

    #[test]
    fn test_background_layer() {
        let clock = clock();
        let board = SpriteBoard::new(clock.background_positions());
        assert_eq!(board.background().len(), 24);
        assert!(board.background().iter().all(|s| s.depth == BACKGROUND_DEPTH));
        assert_eq!(board.background()[0].light, Light::BigGrey);
        assert_eq!(board.background()[8].light, Light::SmallGrey);
        assert_eq!(board.lit_counts(), [0; ROW_COUNT]);
    }

    #[test]
    fn test_apply_replaces_changed_rows() {
        let mut clock = clock();
        let mut board = SpriteBoard::new(clock.background_positions());

        // 14:23:01
        let redrawn = board.apply(&clock.evaluate_digits(TickDigits::from_hms(14, 23, 1)));
        assert_eq!(redrawn, ROW_COUNT);
        assert_eq!(board.lit_counts(), [2, 4, 4, 3, 1]);
        assert!(board.row(0).iter().all(|s| s.light == Light::BigRed));
        assert!(board.row(2).iter().all(|s| s.light == Light::SmallYellow && s.depth == LIGHT_DEPTH));

        // 14:25:02: five-minute row grows, minutes and seconds drop to zero
        let redrawn = board.apply(&clock.evaluate_digits(TickDigits::from_hms(14, 25, 2)));
        assert_eq!(redrawn, 3);
        assert_eq!(board.lit_counts(), [2, 4, 5, 0, 0]);
        assert_eq!(board.sprites().count(), 24 + 11);
    }

    #[test]
    fn test_unchanged_rows_keep_sprites() {
        let mut clock = clock();
        let mut board = SpriteBoard::new(clock.background_positions());
        board.apply(&clock.evaluate_digits(TickDigits::from_hms(8, 8, 8)));
        let before: Vec<Sprite> = board.row(1).to_vec();

        let redrawn = board.apply(&clock.evaluate_digits(TickDigits::from_hms(8, 8, 9)));
        assert_eq!(redrawn, 1);
        assert_eq!(board.row(1), &before[..]);
    }
}
