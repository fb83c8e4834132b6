//! Scene files.
//!
//! A scene is stored as RON and describes everything the driver needs:
//! canvas size, frame count, textures, map layout, player, sprites and output.

use std::f32::consts::TAU;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::map::DEFAULT_LAYOUT;
use crate::core::{Player, Sprite, TileMap};
use crate::error::{ConfigError, LoadError};
use crate::render::{RenderSettings, TextureAtlas};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Ppm,
    Png,
    /// Needs the `window` feature.
    Window,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: OutputFormat::Ppm, dir: PathBuf::from("frames") }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub width: usize,
    pub height: usize,
    pub frames: usize,
    /// Heading change between frames (radians).
    pub rotation_step: f32,
    /// Texture atlas image. Without one a patterned atlas is generated.
    pub textures: Option<PathBuf>,
    pub procedural_size: usize,
    pub procedural_count: usize,
    pub map: Vec<String>,
    pub player: Player,
    pub sprites: Vec<Sprite>,
    pub render: RenderSettings,
    pub output: OutputConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 512,
            frames: 360,
            rotation_step: TAU / 360.0,
            textures: None,
            procedural_size: 64,
            procedural_count: 6,
            map: DEFAULT_LAYOUT.iter().map(|r| r.to_string()).collect(),
            player: Player::default(),
            sprites: Vec::new(),
            render: RenderSettings::default(),
            output: OutputConfig::default(),
        }
    }
}

impl SceneConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron(&contents)
    }

    pub fn from_ron(s: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(s)?)
    }

    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        let config = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .indentor("  ".to_string());
        Ok(ron::ser::to_string_pretty(self, config)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        fs::write(path, self.to_ron_string()?)?;
        Ok(())
    }

    pub fn tile_map(&self) -> Result<TileMap, LoadError> {
        Ok(TileMap::from_rows(&self.map)?)
    }

    /// Loads the configured atlas, or builds the patterned fallback. A
    /// configured file that fails to decode is an error, never a fallback.
    pub fn texture_atlas(&self) -> Result<TextureAtlas, LoadError> {
        match &self.textures {
            Some(path) => TextureAtlas::load(path),
            None => Ok(TextureAtlas::procedural(self.procedural_size, self.procedural_count)),
        }
    }
}
