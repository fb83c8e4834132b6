//! First-person raycaster over a 2D tile grid.
//!
//! Each frame casts one ray per screen column across the player's field of
//! view, projects the first wall hit to a slice height and samples the wall
//! texture with nearest-neighbour scaling. A top-down mini-map with ray trails
//! and sprite markers fills the left half of the canvas.

pub mod config;
pub mod core;
pub mod error;
pub mod render;
pub mod sink;

pub use crate::core::{Player, Sprite, TileMap};
pub use config::SceneConfig;
pub use error::{ConfigError, LoadError, MapError, SinkError};
pub use render::{render, Color, Column, FrameBuffer, RenderSettings, Renderer, TextureAtlas};
pub use sink::ImageSink;
