//! Core world data (map, player, sprites).
//!
//! Re-exports:
//! - `map`: Tile grid and wall lookups
//! - `player`: Player pose
//! - `sprite`: Point sprites

pub mod map;
pub mod player;
pub mod sprite;

pub use map::TileMap;
pub use player::Player;
pub use sprite::Sprite;
