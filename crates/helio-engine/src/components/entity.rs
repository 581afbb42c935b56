use glam::Vec3;

use crate::api::types::EntityId;
use crate::components::mesh::MeshComponent;

/// A scene object: a transform plus at most one sphere.
///
/// Orrery scenes are a dozen objects, so one plain struct with optional
/// parts stands in for an ECS.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    /// Lookup name, e.g. the body name.
    pub tag: &'static str,
    /// Inactive entities stay in the scene but are not drawn.
    pub active: bool,
    pub pos: Vec3,
    /// Spin about the world Y axis, radians.
    pub rotation: f32,
    pub mesh: Option<MeshComponent>,
}

impl Entity {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: "",
            active: true,
            pos: Vec3::ZERO,
            rotation: 0.0,
            mesh: None,
        }
    }

    pub fn with_tag(self, tag: &'static str) -> Self {
        Self { tag, ..self }
    }

    pub fn with_pos(self, pos: Vec3) -> Self {
        Self { pos, ..self }
    }

    pub fn with_rotation(self, rotation: f32) -> Self {
        Self { rotation, ..self }
    }

    pub fn with_mesh(self, mesh: MeshComponent) -> Self {
        Self { mesh: Some(mesh), ..self }
    }

    /// Active and carrying a mesh.
    pub fn is_drawable(&self) -> bool {
        self.active && self.mesh.is_some()
    }
}
