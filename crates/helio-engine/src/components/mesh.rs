use crate::api::types::TextureId;

/// Linear RGB tint in 0..1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SDFColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl SDFColor {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl From<[f32; 3]> for SDFColor {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// A raymarched sphere. The host multiplies `color` with the texture when
/// one is bound, sampling it with an equirectangular mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    /// World units; the renderer scales it by the projection.
    pub radius: f32,
    pub color: SDFColor,
    pub texture: Option<TextureId>,
    /// Phong exponent.
    pub shininess: f32,
    /// Glow multiplier; values above zero push the sphere into HDR.
    pub emissive: f32,
    /// Self-lit bodies such as a star ignore the scene lights.
    pub lit: bool,
}

impl MeshComponent {
    pub fn sphere(radius: f32, color: SDFColor) -> Self {
        Self {
            radius,
            color,
            texture: None,
            shininess: 32.0,
            emissive: 0.0,
            lit: true,
        }
    }

    pub fn with_texture(self, texture: TextureId) -> Self {
        Self { texture: Some(texture), ..self }
    }

    pub fn with_shininess(self, shininess: f32) -> Self {
        Self { shininess, ..self }
    }

    pub fn with_emissive(self, emissive: f32) -> Self {
        Self { emissive, ..self }
    }

    pub fn unlit(self) -> Self {
        Self { lit: false, ..self }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Default for MeshComponent {
    /// Unit white sphere, lit, untextured.
    fn default() -> Self {
        Self::sphere(1.0, SDFColor::WHITE)
    }
}
