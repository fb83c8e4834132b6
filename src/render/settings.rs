use serde::{Deserialize, Serialize};

use crate::render::color::Color;

/// Per-run drawing options.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Canvas color before anything is drawn; columns without a hit keep it.
    pub background: Color,
    /// Mini-map trail left by each cast ray.
    pub ray_color: Color,
    pub show_rays: bool,
    pub sprite_color: Color,
    /// Side of the square sprite marker in pixels.
    pub sprite_marker: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            ray_color: Color::GRAY,
            show_rays: true,
            sprite_color: Color::RED,
            sprite_marker: 6,
        }
    }
}
