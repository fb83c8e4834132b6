//! Ray marching and the projection math behind each wall column.
use crate::core::{Player, TileMap};
use crate::render::color::Color;
use crate::render::framebuffer::FrameBuffer;

/// Rays give up after this many world units.
pub const MAX_DISTANCE: f32 = 20.0;
/// March increment in world units.
pub const STEP: f32 = 0.01;
const MAX_STEPS: usize = (MAX_DISTANCE / STEP) as usize;

/// First wall a ray runs into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersect {
    /// Raw distance along the ray.
    pub distance: f32,
    pub x: f32,
    pub y: f32,
    pub texture: usize,
}

/// Angle of screen column `column` out of `columns`, spread linearly across the FOV.
#[inline]
pub fn ray_angle(player: &Player, column: usize, columns: usize) -> f32 {
    player.a - player.fov / 2.0 + player.fov * column as f32 / columns as f32
}

/// Marches from the player along `angle` and returns the first non-empty tile hit,
/// or `None` when the ray reaches `MAX_DISTANCE` in open space.
pub fn cast_ray(map: &TileMap, player: &Player, angle: f32) -> Option<Intersect> {
    let (sin, cos) = angle.sin_cos();
    (0..MAX_STEPS).find_map(|step| {
        let t = step as f32 * STEP;
        let x = player.x + t * cos;
        let y = player.y + t * sin;
        (!map.is_empty(x, y)).then(|| Intersect {
            distance: t,
            x,
            y,
            texture: map.tile_at(x, y),
        })
    })
}

/// Plots the marched positions of a ray on the mini-map, up to `limit`
/// (inclusive of the step that reaches it).
pub fn trace_ray(
    fb: &mut FrameBuffer,
    player: &Player,
    angle: f32,
    limit: f32,
    cell: (usize, usize),
    color: Color,
) {
    let (sin, cos) = angle.sin_cos();
    let (rect_w, rect_h) = (cell.0 as f32, cell.1 as f32);
    for step in 0..MAX_STEPS {
        let t = step as f32 * STEP;
        if t > limit {
            break;
        }
        let x = player.x + t * cos;
        let y = player.y + t * sin;
        fb.set_pixel((x * rect_w) as i32, (y * rect_h) as i32, color);
    }
}

/// Removes fisheye: projects the ray distance onto the view direction.
#[inline]
pub fn perpendicular_distance(distance: f32, angle: f32, heading: f32) -> f32 {
    distance * (angle - heading).cos()
}

/// On-screen height of a wall slice at perpendicular distance `perp`.
#[inline]
pub fn column_height(canvas_height: usize, perp: f32) -> usize {
    (canvas_height as f32 / perp) as usize
}

/// Horizontal texel of a wall hit at `(x, y)`.
///
/// One of the two offsets from the nearest grid line is close to zero (the
/// axis the ray crossed); the other runs along the wall face and picks the texel.
pub fn wall_x_texture_coord(x: f32, y: f32, size: usize) -> usize {
    let hitx = x - (x + 0.5).floor();
    let hity = y - (y + 0.5).floor();
    let frac = if hity.abs() > hitx.abs() { hity } else { hitx };

    let mut coord = (frac * size as f32) as i64;
    if coord < 0 {
        coord += size as i64;
    }
    debug_assert!(coord >= 0 && (coord as usize) < size, "texel {coord} out of 0..{size}");
    (coord.max(0) as usize).min(size.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn boxed_room() -> TileMap {
        TileMap::from_rows(&["11111", "1   1", "1   1", "1   1", "11111"]).unwrap()
    }

    #[test]
    fn ray_angles_span_the_fov() {
        let p = Player::new(2.5, 2.5, 1.0, PI / 3.0);
        assert!((ray_angle(&p, 0, 100) - (1.0 - PI / 6.0)).abs() < 1e-6);
        assert!((ray_angle(&p, 50, 100) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cast_ray_stops_at_first_wall() {
        let map = boxed_room();
        let p = Player::new(2.5, 2.5, 0.0, PI / 3.0);
        let hit = cast_ray(&map, &p, 0.0).unwrap();
        // Wall tile starts at x = 4.0, 1.5 units away.
        assert!((hit.distance - 1.5).abs() <= STEP + 1e-4);
        assert!(hit.x >= 4.0);
        assert_eq!(hit.texture, 1);

        let up = cast_ray(&map, &p, -FRAC_PI_2).unwrap();
        assert!((up.distance - 1.5).abs() <= STEP + 1e-4);
        assert!(up.y < 1.0);
    }

    #[test]
    fn open_rays_report_no_hit() {
        let map = TileMap::from_rows(&["1"]).unwrap();
        let p = Player::new(-5.0, -5.0, PI, PI / 3.0);
        assert_eq!(cast_ray(&map, &p, PI), None);
    }

    #[test]
    fn player_inside_a_wall_hits_at_zero() {
        let map = boxed_room();
        let p = Player::new(0.5, 0.5, 0.0, PI / 3.0);
        assert_eq!(cast_ray(&map, &p, 0.3).map(|h| h.distance), Some(0.0));
    }

    #[test]
    fn column_height_shrinks_with_distance() {
        let mut last = usize::MAX;
        for k in 1..60 {
            let d = k as f32 * 0.1;
            let h = column_height(512, perpendicular_distance(d, 0.2, 0.0));
            assert!(h < last, "height {h} at distance {d} not below {last}");
            last = h;
        }
    }

    #[test]
    fn perpendicular_distance_removes_fisheye() {
        // A wall one unit ahead seen at an angle: the ray is longer, the plane distance is not.
        let angle = 0.4f32;
        let raw = 1.0 / angle.cos();
        assert!((perpendicular_distance(raw, angle, 0.0) - 1.0).abs() < 1e-6);
        assert!((perpendicular_distance(raw, -angle, 0.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn texture_coord_follows_the_wall_face() {
        // Vertical wall at x = 5: y varies along the face.
        assert_eq!(wall_x_texture_coord(5.0, 3.25, 64), 16);
        assert_eq!(wall_x_texture_coord(5.0, 3.75, 64), 48);
        assert_eq!(wall_x_texture_coord(5.002, 3.25, 64), 16);
        // Horizontal wall at y = 7: x varies along the face.
        assert_eq!(wall_x_texture_coord(2.25, 7.0, 64), 16);
        assert_eq!(wall_x_texture_coord(2.75, 7.0, 64), 48);
        assert_eq!(wall_x_texture_coord(2.75, 6.999, 64), 48);
    }

    #[test]
    fn texture_coord_stays_in_range() {
        for k in 0..1000 {
            let v = k as f32 * 0.0137;
            assert!(wall_x_texture_coord(v, 3.0, 64) < 64);
            assert!(wall_x_texture_coord(3.0, v, 32) < 32);
        }
    }
}
