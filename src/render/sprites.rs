//! Sprite markers on the mini-map.
use crate::core::Sprite;
use crate::render::color::Color;
use crate::render::framebuffer::FrameBuffer;
use crate::render::minimap::MiniMapLayout;

/// Draws a `size x size` square centred on each sprite's mini-map position.
pub fn draw_sprite_markers(
    fb: &mut FrameBuffer,
    sprites: &[Sprite],
    layout: MiniMapLayout,
    size: usize,
    color: Color,
) {
    let half = (size / 2) as i32;
    for sprite in sprites {
        let (sx, sy) = layout.to_screen(sprite.x, sprite.y);
        fb.draw_rect(sx - half, sy - half, size, size, color);
    }
}
