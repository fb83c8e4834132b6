//! Error types for scene setup and frame output.
//!
//! Everything here is raised before the first frame or while writing a
//! finished frame. Drawing a frame itself cannot fail.

use std::fmt;

/// Reasons a tile map layout is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    Empty,
    Ragged { row: usize, expected: usize, found: usize },
    BadTile { row: usize, col: usize, ch: char },
    OpenBorder { i: usize, j: usize },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Empty => write!(f, "map has no rows"),
            MapError::Ragged { row, expected, found } => {
                write!(f, "map row {row} has {found} cells, expected {expected}")
            }
            MapError::BadTile { row, col, ch } => {
                write!(f, "unknown tile {ch:?} at row {row}, column {col}")
            }
            MapError::OpenBorder { i, j } => {
                write!(f, "border cell ({i}, {j}) is empty; the outer ring must be solid")
            }
        }
    }
}

impl std::error::Error for MapError {}

/// Load-time failures. Any of these aborts render setup.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Decode(image::ImageError),
    Format { width: usize, height: usize, bytes: usize },
    NoTextures,
    MissingTexture { index: usize, count: usize },
    Map(MapError),
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<image::ImageError> for LoadError {
    fn from(e: image::ImageError) -> Self {
        LoadError::Decode(e)
    }
}

impl From<MapError> for LoadError {
    fn from(e: MapError) -> Self {
        LoadError::Map(e)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "IO error: {e}"),
            LoadError::Decode(e) => write!(f, "cannot decode texture atlas: {e}"),
            LoadError::Format { width, height, bytes } => write!(
                f,
                "texture atlas must be N square RGBA textures side by side, got {width}x{height} with {bytes} bytes"
            ),
            LoadError::NoTextures => write!(f, "texture atlas holds no usable textures"),
            LoadError::MissingTexture { index, count } => {
                write!(f, "map uses texture {index} but the atlas has only {count}")
            }
            LoadError::Map(e) => write!(f, "invalid map: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Decode(e) => Some(e),
            LoadError::Map(e) => Some(e),
            _ => None,
        }
    }
}

/// Failures while persisting a finished frame.
#[derive(Debug)]
pub enum SinkError {
    Io(std::io::Error),
    Encode(image::ImageError),
    /// Display backend could not be set up.
    Window(String),
    /// The viewer was closed; no more frames are wanted.
    Closed,
}

impl From<std::io::Error> for SinkError {
    fn from(e: std::io::Error) -> Self {
        SinkError::Io(e)
    }
}

impl From<image::ImageError> for SinkError {
    fn from(e: image::ImageError) -> Self {
        SinkError::Encode(e)
    }
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::Io(e) => write!(f, "IO error: {e}"),
            SinkError::Encode(e) => write!(f, "encode error: {e}"),
            SinkError::Window(e) => write!(f, "window error: {e}"),
            SinkError::Closed => write!(f, "output window closed"),
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SinkError::Io(e) => Some(e),
            SinkError::Encode(e) => Some(e),
            SinkError::Window(_) | SinkError::Closed => None,
        }
    }
}

/// Failures reading or writing a scene file.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Serialize(ron::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::Serialize(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Parse(e) => write!(f, "parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Serialize(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn wrapped_errors_are_exposed_as_source() {
        let sink = SinkError::from(io::Error::new(io::ErrorKind::NotFound, "frames/"));
        assert_eq!(sink.source().map(|e| e.to_string()).as_deref(), Some("frames/"));
        assert!(SinkError::Closed.source().is_none());
        assert!(SinkError::Window("no display".into()).source().is_none());

        let cfg = ConfigError::from(io::Error::new(io::ErrorKind::PermissionDenied, "scene.ron"));
        assert_eq!(cfg.source().map(|e| e.to_string()).as_deref(), Some("scene.ron"));
        let parse = ron::from_str::<u32>("(").unwrap_err();
        assert!(ConfigError::from(parse).source().is_some());
    }

    #[test]
    fn anyhow_chain_reaches_the_io_error() {
        let err = anyhow::Error::new(ConfigError::from(io::Error::new(
            io::ErrorKind::NotFound,
            "missing scene",
        )));
        let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
        assert_eq!(chain, vec!["IO error: missing scene".to_string(), "missing scene".to_string()]);
    }
}
