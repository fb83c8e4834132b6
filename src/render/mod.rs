//! Software rendering: pixels, textures and the raycasting frame pipeline.
//!
//! Re-exports:
//! - `color`: Packed RGBA color codec
//! - `framebuffer`: CPU canvas with clipped writes
//! - `textures`: Wall texture atlas and column resampling
//! - `casters`: Ray marching and projection math
//! - `minimap`: Top-down map overlay
//! - `sprites`: Sprite markers on the mini-map
//! - `render3d`: Frame pipeline and validated `Renderer`
//! - `settings`: Drawing options

pub mod casters;
pub mod color;
pub mod framebuffer;
pub mod minimap;
pub mod render3d;
pub mod settings;
pub mod sprites;
pub mod textures;

pub use color::Color;
pub use framebuffer::FrameBuffer;
pub use render3d::{render, Column, Renderer};
pub use settings::RenderSettings;
pub use textures::TextureAtlas;
