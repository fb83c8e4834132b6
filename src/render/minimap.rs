//! Top-down map overlay on the left half of the canvas.
use crate::core::TileMap;
use crate::render::framebuffer::FrameBuffer;
use crate::render::textures::TextureAtlas;

/// Size in pixels of one map cell on the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MiniMapLayout {
    pub rect_w: usize,
    pub rect_h: usize,
}

impl MiniMapLayout {
    /// The map is squeezed into the left half of the canvas, full height.
    pub fn new(fb: &FrameBuffer, map: &TileMap) -> Self {
        Self {
            rect_w: fb.width() / (map.width() * 2),
            rect_h: fb.height() / map.height(),
        }
    }

    /// Canvas position of a world coordinate.
    #[inline]
    pub fn to_screen(&self, x: f32, y: f32) -> (i32, i32) {
        ((x * self.rect_w as f32) as i32, (y * self.rect_h as f32) as i32)
    }
}

/// Paints one rectangle per wall cell, colored with the top-left texel of its texture.
pub fn render_map(fb: &mut FrameBuffer, map: &TileMap, atlas: &TextureAtlas, layout: MiniMapLayout) {
    for (i, j, texture) in map.occupied() {
        let xo = (i * layout.rect_w) as i32;
        let yo = (j * layout.rect_h) as i32;
        fb.draw_rect(xo, yo, layout.rect_w, layout.rect_h, atlas.pixel_at(texture, 0, 0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::color::Color;
    use pretty_assertions::assert_eq;

    #[test]
    fn layout_splits_left_half_by_map_size() {
        let fb = FrameBuffer::new(1024, 512, Color::WHITE);
        let layout = MiniMapLayout::new(&fb, &TileMap::default());
        assert_eq!(layout, MiniMapLayout { rect_w: 32, rect_h: 32 });
        assert_eq!(layout.to_screen(1.5, 2.25), (48, 72));
    }

    #[test]
    fn walls_use_their_texture_icon_color() {
        let map = TileMap::from_rows(&["01", "10"]).unwrap();
        let atlas = TextureAtlas::procedural(8, 2);
        let mut fb = FrameBuffer::new(8, 4, Color::WHITE);
        let layout = MiniMapLayout::new(&fb, &map);
        render_map(&mut fb, &map, &atlas, layout);

        assert_eq!(layout, MiniMapLayout { rect_w: 2, rect_h: 2 });
        assert_eq!(fb.get_pixel(0, 0), Some(atlas.pixel_at(0, 0, 0)));
        assert_eq!(fb.get_pixel(3, 1), Some(atlas.pixel_at(1, 0, 0)));
        assert_eq!(fb.get_pixel(1, 3), Some(atlas.pixel_at(1, 0, 0)));
        assert_eq!(fb.get_pixel(2, 3), Some(atlas.pixel_at(0, 0, 0)));
        // Right half belongs to the 3D view and stays untouched.
        assert!((4..8).all(|x| (0..4).all(|y| fb.get_pixel(x, y) == Some(Color::WHITE))));
    }
}
