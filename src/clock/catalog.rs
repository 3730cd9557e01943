//! Light assets and their per-category scale
//!
//! Every light image of a category must be square and the same size. The
//! first image registered for a category fixes that size; the scale factor
//! derived from it is computed on first use and never recomputed.

use std::cell::OnceCell;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ClockError, Result};

/// Large (hour) or small (minute/second) light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightCategory {
    Large,
    Small,
}

impl LightCategory {
    pub const ALL: [LightCategory; 2] = [LightCategory::Large, LightCategory::Small];

    /// Names containing "big" are large lights, everything else is small
    pub fn from_name(name: &str) -> Self {
        if name.contains("big") {
            LightCategory::Large
        } else {
            LightCategory::Small
        }
    }

    /// Category used for the lights of a row
    #[inline]
    pub fn for_row(row: usize) -> Self {
        if row < LARGE_ROW_COUNT {
            LightCategory::Large
        } else {
            LightCategory::Small
        }
    }

    /// Asset size (px) that maps to a scale of 1.0
    pub fn reference_size(&self) -> u32 {
        match self {
            LightCategory::Large => LARGE_REFERENCE_SIZE,
            LightCategory::Small => SMALL_REFERENCE_SIZE,
        }
    }

    #[inline]
    fn index(&self) -> usize {
        match self {
            LightCategory::Large => 0,
            LightCategory::Small => 1,
        }
    }
}

impl fmt::Display for LightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightCategory::Large => f.write_str("large"),
            LightCategory::Small => f.write_str("small"),
        }
    }
}

/// The light images the clock is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Light {
    BigRed,
    BigGreen,
    SmallYellow,
    SmallRed,
    SmallGreen,
    BigGrey,
    SmallGrey,
}

impl Light {
    /// Load order of the light images
    pub const ALL: [Light; 7] = [
        Light::BigRed,
        Light::BigGreen,
        Light::SmallYellow,
        Light::SmallRed,
        Light::SmallGreen,
        Light::BigGrey,
        Light::SmallGrey,
    ];

    /// Asset name (file stem)
    pub fn name(&self) -> &'static str {
        match self {
            Light::BigRed => "big_red",
            Light::BigGreen => "big_green",
            Light::SmallYellow => "small_yellow",
            Light::SmallRed => "small_red",
            Light::SmallGreen => "small_green",
            Light::BigGrey => "big_grey",
            Light::SmallGrey => "small_grey",
        }
    }

    pub fn category(&self) -> LightCategory {
        LightCategory::from_name(self.name())
    }

    /// "On" light shown in a row
    pub fn for_row(row: usize) -> Option<Self> {
        match row {
            0 => Some(Light::BigRed),
            1 => Some(Light::BigGreen),
            2 => Some(Light::SmallYellow),
            3 => Some(Light::SmallRed),
            4 => Some(Light::SmallGreen),
            _ => None,
        }
    }

    /// "Off" light drawn under every slot of a category
    pub fn background(category: LightCategory) -> Self {
        match category {
            LightCategory::Large => Light::BigGrey,
            LightCategory::Small => Light::SmallGrey,
        }
    }
}

/// A registered light image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightAsset {
    pub name: String,
    pub category: LightCategory,
    pub pixel_size: u32,
}

/// Registry of light images, one fixed size per category
#[derive(Debug, Default)]
pub struct LightCatalog {
    assets: Vec<LightAsset>,
    pixel_sizes: [Option<u32>; 2],
    scale_factors: [OnceCell<f64>; 2],
}

impl LightCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a light image by name and pixel dimensions
    pub fn register(&mut self, name: &str, width: u32, height: u32) -> Result<()> {
        if width != height {
            return Err(ClockError::AssetSizeMismatch {
                name: name.to_string(),
                width,
                height,
            });
        }

        let category = LightCategory::from_name(name);
        let established = self.pixel_sizes[category.index()];
        match established {
            Some(expected) if expected != width => {
                return Err(ClockError::CategoryConsistency {
                    name: name.to_string(),
                    category,
                    expected,
                    actual: width,
                });
            }
            Some(_) => {}
            None => self.pixel_sizes[category.index()] = Some(width),
        }

        log::debug!("Registered {} light '{}' ({}px)", category, name, width);
        self.assets.push(LightAsset {
            name: name.to_string(),
            category,
            pixel_size: width,
        });
        Ok(())
    }

    /// Register one of the clock's own light images
    pub fn register_light(&mut self, light: Light, width: u32, height: u32) -> Result<()> {
        self.register(light.name(), width, height)
    }

    /// Pixel size shared by every image of a category
    pub fn pixel_size(&self, category: LightCategory) -> Option<u32> {
        self.pixel_sizes[category.index()]
    }

    /// Scale that normalizes a category's images to its reference size
    ///
    /// Computed on first call and memoized.
    pub fn scale_factor(&self, category: LightCategory) -> Result<f64> {
        let pixel_size = self
            .pixel_size(category)
            .ok_or(ClockError::UnregisteredCategory(category))?;
        let scale = *self.scale_factors[category.index()].get_or_init(|| {
            let scale = pixel_size as f64 / category.reference_size() as f64;
            log::debug!("Computed {} light scale {:.4}", category, scale);
            scale
        });
        Ok(scale)
    }

    /// Half the scaled light size, floored: the center to top-left shift
    pub fn anchor_offset(&self, category: LightCategory) -> Result<i32> {
        let scale = self.scale_factor(category)?;
        let pixel_size = self
            .pixel_size(category)
            .ok_or(ClockError::UnregisteredCategory(category))?;
        Ok((pixel_size as f64 * scale / 2.0).floor() as i32)
    }

    /// Registered images in registration order
    pub fn assets(&self) -> &[LightAsset] {
        &self.assets
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_name() {
        assert_eq!(LightCategory::from_name("big_red"), LightCategory::Large);
        assert_eq!(LightCategory::from_name("small_grey"), LightCategory::Small);
        assert_eq!(LightCategory::from_name("whatever"), LightCategory::Small);
        for light in Light::ALL {
            let expected = if light.name().starts_with("big") {
                LightCategory::Large
            } else {
                LightCategory::Small
            };
            assert_eq!(light.category(), expected);
        }
    }

    #[test]
    fn test_row_lights_match_row_category() {
        for row in 0..ROW_COUNT {
            let light = Light::for_row(row).unwrap();
            assert_eq!(light.category(), LightCategory::for_row(row));
        }
        assert_eq!(Light::for_row(ROW_COUNT), None);
    }

    #[test]
    fn test_register_rejects_non_square() {
        let mut catalog = LightCatalog::new();
        let err = catalog.register("big_red", 192, 100).unwrap_err();
        assert!(matches!(err, ClockError::AssetSizeMismatch { width: 192, height: 100, .. }));
        assert!(catalog.is_empty());
        assert_eq!(catalog.pixel_size(LightCategory::Large), None);
    }

    #[test]
    fn test_register_rejects_category_size_change() {
        let mut catalog = LightCatalog::new();
        catalog.register("big_red", 192, 192).unwrap();
        let err = catalog.register("big_green", 128, 128).unwrap_err();
        assert!(matches!(
            err,
            ClockError::CategoryConsistency {
                category: LightCategory::Large,
                expected: 192,
                actual: 128,
                ..
            }
        ));
        // Size stays frozen at the first registration
        assert_eq!(catalog.pixel_size(LightCategory::Large), Some(192));
    }

    #[test]
    fn test_categories_are_independent() {
        let mut catalog = LightCatalog::new();
        catalog.register("big_red", 192, 192).unwrap();
        catalog.register("small_red", 64, 64).unwrap();
        catalog.register("small_green", 64, 64).unwrap();
        assert_eq!(catalog.pixel_size(LightCategory::Large), Some(192));
        assert_eq!(catalog.pixel_size(LightCategory::Small), Some(64));
        assert_eq!(catalog.assets().len(), 3);
    }

    #[test]
    fn test_scale_factor() {
        let mut catalog = LightCatalog::new();
        catalog.register("big_red", 96, 96).unwrap();
        catalog.register("small_red", 48, 48).unwrap();
        assert!((catalog.scale_factor(LightCategory::Large).unwrap() - 0.5).abs() < 1e-9);
        assert!((catalog.scale_factor(LightCategory::Small).unwrap() - 0.5).abs() < 1e-9);
        // Memoized value is returned unchanged
        assert_eq!(
            catalog.scale_factor(LightCategory::Large).unwrap(),
            catalog.scale_factor(LightCategory::Large).unwrap()
        );
    }

    #[test]
    fn test_scale_factor_unregistered() {
        let catalog = LightCatalog::new();
        assert!(matches!(
            catalog.scale_factor(LightCategory::Small),
            Err(ClockError::UnregisteredCategory(LightCategory::Small))
        ));
    }

    #[test]
    fn test_anchor_offset() {
        let mut catalog = LightCatalog::new();
        catalog.register("big_red", 192, 192).unwrap();
        catalog.register("small_red", 48, 48).unwrap();
        // 192 * 1.0 / 2
        assert_eq!(catalog.anchor_offset(LightCategory::Large).unwrap(), 96);
        // 48 * 0.5 / 2
        assert_eq!(catalog.anchor_offset(LightCategory::Small).unwrap(), 12);
    }

    #[test]
    fn test_anchor_offset_floors() {
        let mut catalog = LightCatalog::new();
        catalog.register("big_red", 100, 100).unwrap();
        // 100 * (100 / 192) / 2 = 26.04...
        assert_eq!(catalog.anchor_offset(LightCategory::Large).unwrap(), 26);
    }

    #[test]
    fn test_catalogs_do_not_share_state() {
        let mut a = LightCatalog::new();
        a.register("big_red", 192, 192).unwrap();
        let b = LightCatalog::new();
        assert_eq!(b.pixel_size(LightCategory::Large), None);
        assert!(b.scale_factor(LightCategory::Large).is_err());
    }
}
