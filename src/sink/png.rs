use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::SinkError;
use crate::render::FrameBuffer;
use crate::sink::{frame_path, ImageSink};

/// Drops numbered `.png` files (RGB, alpha dropped) into a directory.
pub struct PngSink {
    dir: PathBuf,
}

impl PngSink {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, SinkError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }
}

impl ImageSink for PngSink {
    fn write_frame(&mut self, frame: usize, fb: &FrameBuffer) -> Result<(), SinkError> {
        let path = frame_path(&self.dir, frame, "png");
        image::save_buffer(
            &path,
            &fb.to_rgb_bytes(),
            fb.width() as u32,
            fb.height() as u32,
            image::ColorType::Rgb8,
        )?;
        debug!("wrote {}", path.display());
        Ok(())
    }
}
