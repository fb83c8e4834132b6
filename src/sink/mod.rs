//! Frame outputs.
//!
//! - `ppm`: binary PPM files, one per frame
//! - `png`: PNG files, one per frame
//! - `window`: live raylib window (feature `window`)

pub mod png;
pub mod ppm;
#[cfg(feature = "window")]
pub mod window;

use std::path::{Path, PathBuf};

use crate::error::SinkError;
use crate::render::FrameBuffer;

pub use png::PngSink;
pub use ppm::{write_ppm, PpmSink};
#[cfg(feature = "window")]
pub use window::WindowSink;

/// Receives each finished frame.
pub trait ImageSink {
    fn write_frame(&mut self, frame: usize, fb: &FrameBuffer) -> Result<(), SinkError>;
}

/// `<dir>/<frame:05>.<ext>`
pub fn frame_path(dir: &Path, frame: usize, ext: &str) -> PathBuf {
    dir.join(format!("{frame:05}.{ext}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_names_are_zero_padded() {
        let p = frame_path(Path::new("out"), 42, "ppm");
        assert_eq!(p, Path::new("out").join("00042.ppm"));
    }
}
