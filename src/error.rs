//! Configuration-time errors
//!
//! Every variant is raised while wiring the clock up. Once a `LightClock`
//! exists, evaluating ticks cannot fail.

use std::path::PathBuf;

use thiserror::Error;

use crate::clock::LightCategory;

#[derive(Error, Debug)]
pub enum ClockError {
    #[error("light image '{name}' must be square, got {width}x{height}")]
    AssetSizeMismatch { name: String, width: u32, height: u32 },

    #[error("light image '{name}' is {actual}px but {category} lights are {expected}px")]
    CategoryConsistency {
        name: String,
        category: LightCategory,
        expected: u32,
        actual: u32,
    },

    #[error("only a single screen is supported, found {displays}")]
    UnsupportedEnvironment { displays: usize },

    #[error("no {0} light image has been registered")]
    UnregisteredCategory(LightCategory),

    #[error("invalid screen size {width}x{height}")]
    InvalidScreen { width: u32, height: u32 },

    #[error("failed to read light image {}: {source}", path.display())]
    AssetLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClockError>;
