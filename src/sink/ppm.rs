use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::error::SinkError;
use crate::render::FrameBuffer;
use crate::sink::{frame_path, ImageSink};

/// Writes `fb` as binary PPM: a `P6` header then one `(r, g, b)` triple per
/// pixel, row-major, top to bottom. Alpha is dropped.
pub fn write_ppm<W: Write>(out: &mut W, fb: &FrameBuffer) -> std::io::Result<()> {
    write!(out, "P6\n{} {}\n255\n", fb.width(), fb.height())?;
    out.write_all(&fb.to_rgb_bytes())
}

/// Drops numbered `.ppm` files into a directory.
pub struct PpmSink {
    dir: PathBuf,
}

impl PpmSink {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, SinkError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }
}

impl ImageSink for PpmSink {
    fn write_frame(&mut self, frame: usize, fb: &FrameBuffer) -> Result<(), SinkError> {
        let path = frame_path(&self.dir, frame, "ppm");
        let mut out = BufWriter::new(File::create(&path)?);
        write_ppm(&mut out, fb)?;
        out.flush()?;
        debug!("wrote {}", path.display());
        Ok(())
    }
}
