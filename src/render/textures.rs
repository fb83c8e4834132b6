//! Wall texture atlas: `count` square textures of `size x size` pixels packed
//! side by side in one image.
use std::ops::Range;
use std::path::Path;

use tracing::info;

use crate::error::LoadError;
use crate::render::color::Color;

#[derive(Clone, Debug)]
pub struct TextureAtlas {
    img_w: usize,
    img_h: usize,
    count: usize,
    size: usize,
    img: Vec<Color>,
}

impl TextureAtlas {
    /// Builds an atlas from raw RGBA8 pixels. Fails unless the buffer holds
    /// exactly four channels per pixel and `width == height * count`.
    pub fn from_rgba(bytes: &[u8], width: usize, height: usize) -> Result<Self, LoadError> {
        let format_err = || LoadError::Format { width, height, bytes: bytes.len() };
        if bytes.len() != width * height * 4 || height == 0 {
            return Err(format_err());
        }
        let count = width / height;
        if width != count * height {
            return Err(format_err());
        }

        let img = bytes
            .chunks_exact(4)
            .map(|px| Color::pack(px[0], px[1], px[2], px[3]))
            .collect();
        Ok(Self { img_w: width, img_h: height, count, size: height, img })
    }

    /// Decodes an image file into an atlas.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let rgba = image::open(path)?.to_rgba8();
        let (w, h) = rgba.dimensions();
        let atlas = Self::from_rgba(rgba.as_raw(), w as usize, h as usize)?;
        info!(
            "loaded texture atlas {}: {} textures of {}px",
            path.display(),
            atlas.count,
            atlas.size
        );
        Ok(atlas)
    }

    /// Patterned fallback atlas for when no texture file is configured.
    pub fn procedural(size: usize, count: usize) -> Self {
        let img_w = size * count;
        let mut img = vec![Color::BLACK; img_w * size];
        for idx in 0..count {
            let base = Self::color_from_index(idx);
            let dark = Self::mix(base, Color::BLACK, 96);
            for j in 0..size {
                for i in 0..size {
                    let c = match idx % 3 {
                        0 => Self::brick(i, j, size, base, dark),
                        1 => Self::checker(i, j, size, base),
                        _ => Self::stripes(i, size, base, dark),
                    };
                    img[idx * size + i + j * img_w] = c;
                }
            }
        }
        Self { img_w, img_h: size, count, size, img }
    }

    #[inline] pub fn count(&self) -> usize { self.count }
    #[inline] pub fn size(&self) -> usize { self.size }
    #[inline] pub fn dimensions(&self) -> (usize, usize) { (self.img_w, self.img_h) }

    /// Pixel `(i, j)` of texture `idx`.
    #[inline]
    pub fn pixel_at(&self, idx: usize, i: usize, j: usize) -> Color {
        debug_assert!(idx < self.count && i < self.size && j < self.size);
        self.img[i + idx * self.size + j * self.img_w]
    }

    /// Column `tex_x` of texture `idx`, nearest-neighbour resampled to
    /// `dest_height` pixels. Row `y` samples source row `y * size / dest_height`.
    pub fn scaled_column(&self, idx: usize, tex_x: usize, dest_height: usize) -> Vec<Color> {
        self.scaled_rows(idx, tex_x, dest_height, 0..dest_height)
    }

    /// The `rows` slice of [`scaled_column`](Self::scaled_column), without
    /// materialising the rest. `rows` must lie within `0..dest_height`.
    pub fn scaled_rows(
        &self,
        idx: usize,
        tex_x: usize,
        dest_height: usize,
        rows: Range<usize>,
    ) -> Vec<Color> {
        debug_assert!(idx < self.count && tex_x < self.size && rows.end <= dest_height);
        let (size, dest) = (self.size as u128, dest_height as u128);
        rows.map(|y| self.pixel_at(idx, tex_x, (y as u128 * size / dest) as usize))
            .collect()
    }

    fn color_from_index(idx: usize) -> Color {
        let k = idx + '1' as usize;
        let r = ((k * 97) % 200 + 40) as u8;
        let g = ((k * 57) % 200 + 40) as u8;
        let b = ((k * 31) % 200 + 40) as u8;
        Color::rgb(r, g, b)
    }

    fn brick(i: usize, j: usize, size: usize, base: Color, mortar: Color) -> Color {
        let course = (size / 8).max(1);
        let offset = if (j / course) % 2 == 0 { 0 } else { size / 4 };
        if j % course == 0 || (i + offset) % (size / 2).max(1) == 0 { mortar } else { base }
    }

    fn checker(i: usize, j: usize, size: usize, base: Color) -> Color {
        let cell = (size / 8).max(1);
        if ((i / cell) + (j / cell)) % 2 == 0 { Self::mix(base, Color::WHITE, 48) } else { base }
    }

    fn stripes(i: usize, size: usize, base: Color, dark: Color) -> Color {
        let band = (size / 4).max(1);
        let t = ((i % band) * 255 / band) as u8;
        Self::mix(base, dark, t)
    }

    #[inline]
    fn mix(a: Color, b: Color, t: u8) -> Color {
        let ta = t as u16;
        let na = 255u16 - ta;
        let mixc = |x: u8, y: u8| -> u8 { (((x as u16) * na + (y as u16) * ta) / 255) as u8 };
        Color::pack(mixc(a.r(), b.r()), mixc(a.g(), b.g()), mixc(a.b(), b.b()), 255)
    }
}
