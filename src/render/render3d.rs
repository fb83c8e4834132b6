//! Frame pipeline: mini-map, per-column ray march with textured walls, sprite markers.
use rayon::prelude::*;

use crate::core::{Player, Sprite, TileMap};
use crate::error::LoadError;
use crate::render::casters::{
    cast_ray, column_height, perpendicular_distance, ray_angle, trace_ray, wall_x_texture_coord,
    Intersect, MAX_DISTANCE,
};
use crate::render::framebuffer::FrameBuffer;
use crate::render::minimap::{render_map, MiniMapLayout};
use crate::render::settings::RenderSettings;
use crate::render::sprites::draw_sprite_markers;
use crate::render::textures::TextureAtlas;

/// What one 3D-view column drew.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Column {
    pub hit: Intersect,
    pub angle: f32,
    /// Wall slice height in pixels.
    pub height: usize,
    /// Texel column sampled from the wall texture.
    pub tex_x: usize,
}

/// Draws one frame into `fb`.
///
/// The left half of the canvas gets the mini-map, the right half the 3D view
/// with one ray per pixel column. Returns, per 3D column, the wall slice it
/// drew or `None` when the column was left as background.
pub fn render(
    fb: &mut FrameBuffer,
    map: &TileMap,
    player: &Player,
    atlas: &TextureAtlas,
    sprites: &[Sprite],
    settings: &RenderSettings,
) -> Vec<Option<Column>> {
    fb.clear(settings.background);

    let layout = MiniMapLayout::new(fb, map);
    render_map(fb, map, atlas, layout);

    let columns = fb.width() / 2;
    let canvas_h = fb.height();

    // Rays only read the map, so they are cast in parallel; painting stays in column order.
    let hits: Vec<(f32, Option<Intersect>)> = (0..columns)
        .into_par_iter()
        .map(|i| {
            let angle = ray_angle(player, i, columns);
            (angle, cast_ray(map, player, angle))
        })
        .collect();

    let mut drawn = Vec::with_capacity(columns);
    for (i, (angle, hit)) in hits.into_iter().enumerate() {
        if settings.show_rays {
            let limit = hit.map_or(MAX_DISTANCE, |h| h.distance);
            trace_ray(fb, player, angle, limit, (layout.rect_w, layout.rect_h), settings.ray_color);
        }

        let column = hit.and_then(|hit| {
            let perp = perpendicular_distance(hit.distance, angle, player.a);
            if perp <= 0.0 {
                return None;
            }
            Some(Column {
                hit,
                angle,
                height: column_height(canvas_h, perp),
                tex_x: wall_x_texture_coord(hit.x, hit.y, atlas.size()),
            })
        });

        if let Some(col) = &column {
            let top = (canvas_h / 2) as i64 - (col.height / 2) as i64;
            // Only the rows that land on the canvas are sampled.
            let first = top.saturating_neg().max(0) as usize;
            let last = (canvas_h as i64).saturating_sub(top).max(0) as usize;
            let rows = first.min(col.height)..last.min(col.height);
            let strip = atlas.scaled_rows(col.hit.texture, col.tex_x, col.height, rows.clone());
            fb.blit_column((columns + i) as i32, top + rows.start as i64, &strip);
        }
        drawn.push(column);
    }

    draw_sprite_markers(fb, sprites, layout, settings.sprite_marker, settings.sprite_color);
    drawn
}

/// Validated scene ready to draw frames.
pub struct Renderer {
    map: TileMap,
    atlas: TextureAtlas,
    sprites: Vec<Sprite>,
    settings: RenderSettings,
}

impl Renderer {
    /// Refuses an atlas without usable textures and a map naming textures the atlas lacks.
    pub fn new(
        map: TileMap,
        atlas: TextureAtlas,
        sprites: Vec<Sprite>,
        settings: RenderSettings,
    ) -> Result<Self, LoadError> {
        if atlas.count() == 0 || atlas.size() == 0 {
            return Err(LoadError::NoTextures);
        }
        if let Some(index) = map.max_texture().filter(|&i| i >= atlas.count()) {
            return Err(LoadError::MissingTexture { index, count: atlas.count() });
        }
        Ok(Self { map, atlas, sprites, settings })
    }

    /// Fresh canvas filled with the background color.
    pub fn frame_buffer(&self, width: usize, height: usize) -> FrameBuffer {
        FrameBuffer::new(width, height, self.settings.background)
    }

    pub fn render(&self, fb: &mut FrameBuffer, player: &Player) -> Vec<Option<Column>> {
        render(fb, &self.map, player, &self.atlas, &self.sprites, &self.settings)
    }

    #[inline] pub fn atlas(&self) -> &TextureAtlas { &self.atlas }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::color::Color;
    use pretty_assertions::assert_eq;
    use std::f32::consts::PI;

    fn room() -> TileMap {
        let mut rows = vec!["11111111"];
        rows.extend(["1      1"; 6]);
        rows.push("11111111");
        TileMap::from_rows(&rows).unwrap()
    }

    #[test]
    fn setup_refuses_empty_atlas() {
        let empty = TextureAtlas::from_rgba(&[], 0, 4).unwrap();
        let res = Renderer::new(room(), empty, Vec::new(), RenderSettings::default());
        assert!(matches!(res, Err(LoadError::NoTextures)));
    }

    #[test]
    fn setup_refuses_zero_sized_textures() {
        let flat = TextureAtlas::procedural(0, 6);
        let res = Renderer::new(room(), flat, Vec::new(), RenderSettings::default());
        assert!(matches!(res, Err(LoadError::NoTextures)));
    }

    #[test]
    fn setup_refuses_missing_wall_texture() {
        let atlas = TextureAtlas::procedural(8, 1);
        let res = Renderer::new(room(), atlas, Vec::new(), RenderSettings::default());
        assert!(matches!(res, Err(LoadError::MissingTexture { index: 1, count: 1 })));
    }

    #[test]
    fn wall_column_is_vertically_centred() {
        let atlas = TextureAtlas::procedural(16, 2);
        let renderer = Renderer::new(room(), atlas, Vec::new(), RenderSettings::default()).unwrap();
        let player = Player::new(4.0, 4.0, 0.0, PI / 3.0);
        let mut fb = renderer.frame_buffer(64, 32);
        let drawn = renderer.render(&mut fb, &player);

        assert_eq!(drawn.len(), 32);
        let mid = drawn[16].expect("column facing the wall hits it");
        assert!(mid.height < 32);
        let top = (16 - mid.height / 2) as i32;
        let x = 32 + 16;
        let strip = renderer.atlas().scaled_column(mid.hit.texture, mid.tex_x, mid.height);
        assert_eq!(fb.get_pixel(x, top - 1), Some(Color::WHITE));
        assert_eq!(fb.get_pixel(x, top), Some(strip[0]));
        assert_eq!(fb.get_pixel(x, top + mid.height as i32 - 1), strip.last().copied());
        assert_eq!(fb.get_pixel(x, top + mid.height as i32), Some(Color::WHITE));
    }

    #[test]
    fn wide_fov_near_a_wall_fills_the_canvas_column() {
        let atlas = TextureAtlas::procedural(16, 2);
        let settings = RenderSettings { show_rays: false, ..RenderSettings::default() };
        let player = Player::new(1.02, 4.0, PI, PI - 1e-3);
        let mut fb = FrameBuffer::new(64, 32, Color::WHITE);
        let drawn = render(&mut fb, &room(), &player, &atlas, &[], &settings);

        let (i, col) = drawn
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|c| (i, c)))
            .max_by_key(|(_, c)| c.height)
            .unwrap();
        assert!(col.height > 32);
        let x = (32 + i) as i32;
        let top = 16 - (col.height / 2) as i64;
        let expected = atlas.scaled_rows(
            col.hit.texture,
            col.tex_x,
            col.height,
            (-top) as usize..(32 - top) as usize,
        );
        let painted: Vec<Color> = (0..32).filter_map(|y| fb.get_pixel(x, y)).collect();
        assert_eq!(painted, expected);
    }

    #[test]
    fn open_rays_leave_background() {
        let map = TileMap::from_rows(&["1"]).unwrap();
        let atlas = TextureAtlas::procedural(8, 2);
        let settings = RenderSettings { show_rays: false, ..RenderSettings::default() };
        let player = Player::new(-5.0, -5.0, PI, PI / 3.0);
        let mut fb = FrameBuffer::new(40, 20, Color::BLACK);
        let drawn = render(&mut fb, &map, &player, &atlas, &[], &settings);

        assert!(drawn.iter().all(Option::is_none));
        assert!((20..40).all(|x| (0..20).all(|y| fb.get_pixel(x, y) == Some(Color::WHITE))));
    }

    #[test]
    fn player_inside_wall_draws_nothing_in_3d() {
        let atlas = TextureAtlas::procedural(8, 2);
        let player = Player::new(0.5, 0.5, 0.0, PI / 3.0);
        let mut fb = FrameBuffer::new(32, 16, Color::WHITE);
        let drawn = render(&mut fb, &room(), &player, &atlas, &[], &RenderSettings::default());
        assert!(drawn.iter().all(Option::is_none));
    }

    #[test]
    fn rays_leave_a_trail_on_the_minimap() {
        let atlas = TextureAtlas::procedural(8, 2);
        let player = Player::new(4.0, 4.0, 0.0, PI / 3.0);
        let mut fb = FrameBuffer::new(64, 32, Color::WHITE);
        render(&mut fb, &room(), &player, &atlas, &[], &RenderSettings::default());
        // rect_w = 64 / 16 = 4, rect_h = 32 / 8 = 4; the player sits at (16, 16).
        assert_eq!(fb.get_pixel(16, 16), Some(Color::GRAY));

        let quiet = RenderSettings { show_rays: false, ..RenderSettings::default() };
        render(&mut fb, &room(), &player, &atlas, &[], &quiet);
        assert_eq!(fb.get_pixel(16, 16), Some(Color::WHITE));
    }
}
