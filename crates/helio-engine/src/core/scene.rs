use glam::Vec3;

use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Entity storage for a small, fixed cast of bodies.
///
/// Entities are spawned once at init and moved every frame; nothing is
/// despawned, so a flat Vec with linear lookup is enough.
#[derive(Default)]
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity and return its id.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        self.entities.push(entity);
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Move an entity and set its spin. Returns false for an unknown id.
    pub fn set_transform(&mut self, id: EntityId, pos: Vec3, rotation: f32) -> bool {
        match self.get_mut(id) {
            Some(entity) => {
                entity.pos = pos;
                entity.rotation = rotation;
                true
            }
            None => false,
        }
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Active entities that carry a mesh.
    pub fn visible_count(&self) -> usize {
        self.entities.iter().filter(|e| e.is_drawable()).count()
    }
}
