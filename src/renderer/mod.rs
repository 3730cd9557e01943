//! Headless rendering module
//!
//! Keeps track of which light sprite sits where. Drawing the sprites is left
//! to whatever owns the window.

pub mod board;

pub use board::{BACKGROUND_DEPTH, LIGHT_DEPTH, Sprite, SpriteBoard};
