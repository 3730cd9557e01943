//! Display enumeration

use crate::clock::ScreenDimensions;
use crate::error::{ClockError, Result};

/// Something that can list the attached displays
pub trait DisplaySource {
    fn displays(&self) -> Vec<ScreenDimensions>;
}

/// Displays taken from settings
#[derive(Debug, Clone, Default)]
pub struct ConfiguredDisplays(pub Vec<ScreenDimensions>);

impl DisplaySource for ConfiguredDisplays {
    fn displays(&self) -> Vec<ScreenDimensions> {
        self.0.clone()
    }
}

/// The only attached display
///
/// The clock is undefined on multi-display setups, so anything other than
/// exactly one display is rejected.
pub fn select_single_display(source: &impl DisplaySource) -> Result<ScreenDimensions> {
    match source.displays().as_slice() {
        [screen] => {
            screen.validate()?;
            log::info!("Using display {}x{}", screen.width, screen.height);
            Ok(*screen)
        }
        displays => Err(ClockError::UnsupportedEnvironment {
            displays: displays.len(),
        }),
    }
}
