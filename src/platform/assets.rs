//! Light image metadata
//!
//! Only the image headers are read; decoding and scaling the pixels is the
//! renderer's business.

use std::path::{Path, PathBuf};

use crate::clock::{Light, LightCatalog};
use crate::error::{ClockError, Result};

/// Reports the pixel size of a light image
pub trait AssetProbe {
    fn dimensions(&self, light: Light) -> Result<(u32, u32)>;
}

/// PNG images named after each light in one directory
#[derive(Debug, Clone)]
pub struct ImageDirectory {
    root: PathBuf,
}

impl ImageDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/<light name>.png`
    pub fn path_for(&self, light: Light) -> PathBuf {
        self.root.join(format!("{}.png", light.name()))
    }
}

impl AssetProbe for ImageDirectory {
    fn dimensions(&self, light: Light) -> Result<(u32, u32)> {
        let path = self.path_for(light);
        image::image_dimensions(&path).map_err(|source| ClockError::AssetLoad { path, source })
    }
}

/// Register every light image, in load order
///
/// Stops at the first image that is missing or breaks the size rules.
pub fn register_all(catalog: &mut LightCatalog, probe: &impl AssetProbe) -> Result<()> {
    for light in Light::ALL {
        let (width, height) = probe.dimensions(light)?;
        catalog.register_light(light, width, height)?;
    }
    log::info!("Registered {} light images", Light::ALL.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::LightCategory;

    /// Fixed sizes per category, with an optional odd one out
    struct FixedSizes {
        large: u32,
        small: u32,
        odd: Option<(Light, u32, u32)>,
    }

    impl AssetProbe for FixedSizes {
        fn dimensions(&self, light: Light) -> Result<(u32, u32)> {
            if let Some((odd, w, h)) = self.odd {
                if odd == light {
                    return Ok((w, h));
                }
            }
            Ok(match light.category() {
                LightCategory::Large => (self.large, self.large),
                LightCategory::Small => (self.small, self.small),
            })
        }
    }

    #[test]
    fn test_register_all() {
        let mut catalog = LightCatalog::new();
        let probe = FixedSizes { large: 192, small: 64, odd: None };
        register_all(&mut catalog, &probe).unwrap();
        assert_eq!(catalog.assets().len(), Light::ALL.len());
        assert_eq!(catalog.pixel_size(LightCategory::Small), Some(64));
    }

    #[test]
    fn test_register_all_stops_on_bad_image() {
        let mut catalog = LightCatalog::new();
        let probe = FixedSizes {
            large: 192,
            small: 64,
            odd: Some((Light::SmallGrey, 64, 32)),
        };
        let err = register_all(&mut catalog, &probe).unwrap_err();
        assert!(matches!(err, ClockError::AssetSizeMismatch { .. }));
        assert_eq!(catalog.assets().len(), Light::ALL.len() - 1);
    }

    #[test]
    fn test_missing_image() {
        let dir = ImageDirectory::new("does/not/exist");
        assert_eq!(dir.path_for(Light::BigRed), Path::new("does/not/exist/big_red.png"));
        let err = dir.dimensions(Light::BigRed).unwrap_err();
        assert!(matches!(err, ClockError::AssetLoad { .. }));
    }
}
