use bytemuck::{Pod, Zeroable};

/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// Index of a texture in the game's `TextureManifest`.
/// Written into SDF instances as a float; the host binds the matching image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

impl TextureId {
    /// Sentinel written to the wire when a mesh has no texture.
    pub const NONE_WIRE: f32 = -1.0;

    /// Float form of an optional texture slot.
    pub fn wire(texture: Option<TextureId>) -> f32 {
        texture.map_or(Self::NONE_WIRE, |t| t.0 as f32)
    }
}

/// A game event communicated from Rust to the host page via SharedArrayBuffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}
