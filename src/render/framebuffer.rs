use crate::render::color::Color;

/// CPU pixel canvas. Pixel `(x, y)` lives at `x + y * width`.
///
/// All writes clip against the canvas, so callers may pass coordinates that
/// fall outside it.
pub struct FrameBuffer {
    color_buffer: Vec<Color>,
    width: usize,
    height: usize,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        Self {
            color_buffer: vec![background; width * height],
            width,
            height,
        }
    }

    #[inline] pub fn width(&self) -> usize { self.width }
    #[inline] pub fn height(&self) -> usize { self.height }
    #[inline] pub fn pixels(&self) -> &[Color] { &self.color_buffer }

    #[inline]
    pub fn clear(&mut self, color: Color) {
        self.color_buffer.fill(color);
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.width && y < self.height).then(|| x + y * self.width)
    }

    /// Writes one pixel; out-of-canvas coordinates are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.color_buffer[idx] = color;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }

    /// Fills `[x, x + w) x [y, y + h)`, skipping whatever lies off the canvas.
    pub fn draw_rect(&mut self, x: i32, y: i32, w: usize, h: usize, color: Color) {
        let x0 = i64::from(x).clamp(0, self.width as i64) as usize;
        let y0 = i64::from(y).clamp(0, self.height as i64) as usize;
        let x1 = (i64::from(x) + w as i64).clamp(0, self.width as i64) as usize;
        let y1 = (i64::from(y) + h as i64).clamp(0, self.height as i64) as usize;
        for row in y0..y1 {
            let start = row * self.width;
            self.color_buffer[start + x0..start + x1].fill(color);
        }
    }

    /// Copies `column` downward starting at `(x, top)`. Rows off the canvas are skipped.
    pub fn blit_column(&mut self, x: i32, top: i64, column: &[Color]) {
        let Ok(x) = usize::try_from(x) else { return };
        if x >= self.width {
            return;
        }
        let first = (-top).clamp(0, column.len() as i64) as usize;
        let last = (self.height as i64 - top).clamp(0, column.len() as i64) as usize;
        for (k, &color) in column.iter().enumerate().take(last).skip(first) {
            let y = (top + k as i64) as usize;
            self.color_buffer[x + y * self.width] = color;
        }
    }

    /// Packed RGB triples, row-major, alpha dropped.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.color_buffer
            .iter()
            .flat_map(|c| [c.r(), c.g(), c.b()])
            .collect()
    }

    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.color_buffer
            .iter()
            .flat_map(|&c| <[u8; 4]>::from(c))
            .collect()
    }
}
