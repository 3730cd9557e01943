//! Clock settings
//!
//! Read from a JSON file next to the binary. Every field has a default, so a
//! partial (or missing) file is fine.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clock::{RowOffsets, ScreenDimensions};
use crate::consts::*;
use crate::error::Result;

/// Clock settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding `<light name>.png` images
    pub asset_dir: PathBuf,

    /// Milliseconds between evaluation cycles
    pub tick_interval_ms: u64,

    /// Stop after this many cycles (runs forever when unset)
    pub max_ticks: Option<u64>,

    // === Display ===
    /// Displays the platform reports; exactly one is supported
    pub displays: Vec<ScreenDimensions>,
    /// Window title
    pub window_title: String,

    // === Layout ===
    /// Pixels the raised five-minute lights move up
    pub five_minute_row_offset_up: i32,
    /// Pixels the lowered five-minute lights move down
    pub five_minute_row_offset_down: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("resources"),
            tick_interval_ms: TICK_INTERVAL_MS,
            max_ticks: None,

            displays: vec![ScreenDimensions::default()],
            window_title: "c2k".to_string(),

            five_minute_row_offset_up: FIVE_MINUTE_ROW_OFFSET_UP,
            five_minute_row_offset_down: FIVE_MINUTE_ROW_OFFSET_DOWN,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "light-clock.json";

    /// Five-minute row zig-zag
    pub fn row_offsets(&self) -> RowOffsets {
        RowOffsets {
            up: self.five_minute_row_offset_up,
            down: self.five_minute_row_offset_down,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a file
    pub fn load_from(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read settings, falling back to defaults if the file is missing or invalid
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClockError;

    #[test]
    fn test_defaults_match_fixed_layout() {
        let settings = Settings::default();
        assert_eq!(settings.row_offsets(), RowOffsets::default());
        assert_eq!(settings.tick_interval(), Duration::from_secs(1));
        assert_eq!(settings.displays, vec![ScreenDimensions { width: 640, height: 480 }]);
        assert_eq!(settings.asset_dir, PathBuf::from("resources"));
    }

    #[test]
    fn test_partial_json() {
        let settings = Settings::from_json(
            r#"{ "tick_interval_ms": 250, "displays": [{ "width": 1920, "height": 1080 }] }"#,
        )
        .unwrap();
        assert_eq!(settings.tick_interval_ms, 250);
        assert_eq!(settings.displays[0].width, 1920);
        assert_eq!(settings.five_minute_row_offset_up, 50);
        assert_eq!(settings.max_ticks, None);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(Settings::from_json("{ nope"), Err(ClockError::Json(_))));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("definitely/not/here/light-clock.json");
        assert!(matches!(Settings::load_from(path), Err(ClockError::Io(_))));
        assert_eq!(Settings::load(path), Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("light-clock-test-{}.json", std::process::id()));
        let settings = Settings {
            max_ticks: Some(3),
            five_minute_row_offset_down: 12,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }
}
