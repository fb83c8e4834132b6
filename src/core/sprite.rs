//! Point sprites placed in the world.
use serde::{Deserialize, Serialize};

/// A sprite is drawn only as a marker on the mini-map; `texture` is kept
/// with it but not sampled.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub x: f32,
    pub y: f32,
    pub texture: usize,
}

impl Sprite {
    pub fn new(x: f32, y: f32, texture: usize) -> Self {
        Self { x, y, texture }
    }
}
