/// Static star shell around the scene.
///
/// Stars sit between `INNER_RADIUS` and `INNER_RADIUS + DEPTH` from the
/// origin in uniformly random directions. They are drawn as screen-aligned
/// squares whose size shrinks with distance from the camera.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};
use helio_engine::{OrbitCamera, Rng, VectorColor, VectorState};

pub const STAR_COUNT: usize = 10_000;
pub const INNER_RADIUS: f32 = 300.0;
pub const DEPTH: f32 = 60.0;
/// Base star size; each star gets between half and all of it.
pub const SIZE_FACTOR: f32 = 7.0;

/// Pixel half-size of a star of size 1 at distance 1.
const PIXEL_SCALE: f32 = 45.0;
/// Stars smaller than this on screen are skipped.
const MIN_HALF_PX: f32 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec3,
    pub size: f32,
}

#[derive(Debug, Clone, Default)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    pub fn generate(rng: &mut Rng, count: usize) -> Self {
        let stars = (0..count)
            .map(|_| {
                let radius = INNER_RADIUS + DEPTH * rng.next_float();
                let y = rng.range(-1.0, 1.0);
                let theta = rng.range(0.0, TAU);
                let ring = (1.0 - y * y).max(0.0).sqrt();
                let dir = Vec3::new(ring * theta.cos(), y, ring * theta.sin());
                Star {
                    pos: dir * radius,
                    size: SIZE_FACTOR * (0.5 + 0.5 * rng.next_float()),
                }
            })
            .collect();
        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Project every star and emit it as a square. Farther stars fade.
    pub fn draw(&self, camera: &OrbitCamera, vectors: &mut VectorState, color: VectorColor) {
        if color.is_invisible() {
            return;
        }
        let eye = camera.position();
        for star in &self.stars {
            let Some(proj) = camera.project(star.pos) else {
                continue;
            };
            let half = star.size * PIXEL_SCALE / proj.depth.max(1.0);
            if half < MIN_HALF_PX || !on_screen(proj.pos, half, camera.viewport) {
                continue;
            }
            let fade = (INNER_RADIUS / star.pos.distance(eye)).min(1.0);
            vectors.fill_point(proj.pos, half, color.with_alpha(color.a * fade));
        }
    }
}

fn on_screen(pos: Vec2, half: f32, viewport: Vec2) -> bool {
    pos.x + half >= 0.0 && pos.y + half >= 0.0 && pos.x - half <= viewport.x && pos.y - half <= viewport.y
}
