//! Player pose.
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Heading (radians).
    pub a: f32,
    /// Field of view (radians).
    pub fov: f32,
}

impl Player {
    pub fn new(x: f32, y: f32, a: f32, fov: f32) -> Self {
        Self { x, y, a, fov }
    }

    /// Turns the heading by `delta` radians, keeping it in `[0, 2π)`.
    pub fn rotate(&mut self, delta: f32) {
        self.a = (self.a + delta).rem_euclid(TAU);
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(3.456, 2.345, 1.523, PI / 3.0)
    }
}
