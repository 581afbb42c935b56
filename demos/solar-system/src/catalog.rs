/// Body catalog: the sun and the eight planets, in orbital order.
///
/// Sizes and distances are scene units, not astronomical ones; speeds are
/// radians per animation frame.

use helio_engine::{TextureId, TextureManifest};

use crate::error::CatalogError;
use crate::speeds::{MAX_SPEED, MIN_SPEED};

pub const BODY_COUNT: usize = 8;

/// URL prefix for body textures.
pub const TEXTURE_BASE: &str = "/textures";

/// Extra geometry drawn with a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decoration {
    None,
    /// Flat ring in the orbital plane, centered on the body.
    Ring { inner_radius: f32, outer_radius: f32 },
}

/// Immutable description of one orbiting body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialBodyConfig {
    pub name: &'static str,
    /// Sphere radius.
    pub size: f32,
    /// Orbital radius around the sun.
    pub distance: f32,
    /// Default angular speed, radians per frame.
    pub base_speed: f32,
    pub texture: TextureId,
    /// Slider accent color, 0xRRGGBB.
    pub accent: u32,
    pub decoration: Decoration,
}

impl CelestialBodyConfig {
    /// Distance below the body's center where its name label hangs.
    pub fn label_drop(&self) -> f32 {
        self.size + LABEL_GAP
    }
}

/// Gap between a body's surface and its label.
pub const LABEL_GAP: f32 = 0.4;

/// The central star. Fixed at the origin, never animated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunConfig {
    pub name: &'static str,
    pub size: f32,
    pub texture: TextureId,
    /// Emissive tint, 0xRRGGBB.
    pub emissive_color: u32,
    pub emissive_intensity: f32,
}

pub static SUN: SunConfig = SunConfig {
    name: "Sun",
    size: 2.0,
    texture: TextureId(0),
    emissive_color: 0xffa500,
    emissive_intensity: 1.5,
};

const fn body(
    name: &'static str,
    size: f32,
    distance: f32,
    base_speed: f32,
    texture: u32,
    accent: u32,
) -> CelestialBodyConfig {
    CelestialBodyConfig {
        name,
        size,
        distance,
        base_speed,
        texture: TextureId(texture),
        accent,
        decoration: Decoration::None,
    }
}

pub static CATALOG: [CelestialBodyConfig; BODY_COUNT] = [
    body("Mercury", 0.3, 4.0, 0.02, 1, 0xb0b0b0),
    body("Venus", 0.5, 6.0, 0.015, 2, 0xd98e04),
    body("Earth", 0.55, 8.0, 0.01, 3, 0x0077ff),
    body("Mars", 0.4, 10.0, 0.008, 4, 0xff4500),
    body("Jupiter", 1.1, 13.0, 0.006, 5, 0xdeb887),
    CelestialBodyConfig {
        decoration: Decoration::Ring { inner_radius: 1.3, outer_radius: 2.2 },
        ..body("Saturn", 1.0, 16.0, 0.005, 6, 0xe2c580)
    },
    body("Uranus", 0.7, 19.0, 0.004, 7, 0x7fffd4),
    body("Neptune", 0.7, 22.0, 0.003, 8, 0x4169e1),
];

/// Ring color and opacity.
pub const RING_COLOR: u32 = 0xddddaa;
pub const RING_OPACITY: f32 = 0.5;

/// Catalog index of the body called `name` (exact match).
pub fn index_of(name: &str) -> Option<usize> {
    CATALOG.iter().position(|b| b.name == name)
}

/// Texture manifest: the sun first, then every body in catalog order.
pub fn texture_manifest() -> TextureManifest {
    let names = std::iter::once(SUN.name).chain(CATALOG.iter().map(|b| b.name));
    TextureManifest::from_names(TEXTURE_BASE, names)
}

/// Check the invariants the animator and speed panel rely on.
pub fn validate(catalog: &[CelestialBodyConfig]) -> Result<(), CatalogError> {
    if catalog.len() != BODY_COUNT {
        return Err(CatalogError::WrongCount {
            expected: BODY_COUNT,
            found: catalog.len(),
        });
    }
    for (i, body) in catalog.iter().enumerate() {
        if catalog[..i].iter().any(|other| other.name == body.name) {
            return Err(CatalogError::DuplicateName(body.name));
        }
        if !(body.size > 0.0) {
            return Err(CatalogError::NonPositive { name: body.name, field: "size" });
        }
        if !(body.distance > 0.0) {
            return Err(CatalogError::NonPositive { name: body.name, field: "distance" });
        }
        if !(MIN_SPEED..=MAX_SPEED).contains(&body.base_speed) {
            return Err(CatalogError::SpeedOutOfRange {
                name: body.name,
                speed: body.base_speed,
            });
        }
        if let Decoration::Ring { inner_radius, outer_radius } = body.decoration {
            if inner_radius <= body.size || outer_radius <= inner_radius {
                return Err(CatalogError::BadRing {
                    name: body.name,
                    inner: inner_radius,
                    outer: outer_radius,
                });
            }
        }
    }
    Ok(())
}
