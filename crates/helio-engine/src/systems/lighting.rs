//! Lights for the SDF sphere pass: a bounded set of point lights plus one
//! ambient term. Scenes restyle them from `Game::render`, and the runner
//! copies them into the shared buffer every frame.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// `[x, y, z, r, g, b, intensity, distance]` on the wire.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PointLight {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
    /// Falloff range in world units; 0 lights the whole scene evenly.
    pub distance: f32,
}

impl PointLight {
    pub fn new(pos: Vec3, color: [f32; 3], intensity: f32) -> Self {
        let [r, g, b] = color;
        Self { x: pos.x, y: pos.y, z: pos.z, r, g, b, intensity, distance: 0.0 }
    }

    pub fn with_distance(self, distance: f32) -> Self {
        Self { distance: distance.max(0.0), ..self }
    }

    pub fn pos(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Point lights capped at the protocol's light capacity, and the ambient term.
///
/// Ambient starts at full white so a scene that never configures lighting
/// still renders its spheres at their base colors.
pub struct LightState {
    lights: Vec<PointLight>,
    capacity: usize,
    ambient: [f32; 3],
}

impl LightState {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lights: Vec::with_capacity(capacity),
            capacity,
            ambient: [1.0; 3],
        }
    }

    /// Adds a light, or returns `false` when the set is already full.
    pub fn push(&mut self, light: PointLight) -> bool {
        if self.lights.len() >= self.capacity {
            log::warn!("light capacity {} reached, light ignored", self.capacity);
            return false;
        }
        self.lights.push(light);
        true
    }

    /// Makes `light` the only light in the scene.
    pub fn set_single(&mut self, light: PointLight) {
        self.lights.clear();
        self.push(light);
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn count(&self) -> usize {
        self.lights.len()
    }

    /// Stores `color * intensity`; the host shader adds it unscaled.
    pub fn set_ambient(&mut self, color: [f32; 3], intensity: f32) {
        self.ambient = color.map(|c| c * intensity);
    }

    pub fn ambient(&self) -> [f32; 3] {
        self.ambient
    }

    /// Lights as consecutive wire records.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.lights)
    }

    pub fn buffer_ptr(&self) -> *const f32 {
        self.as_floats().as_ptr()
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::with_capacity(crate::bridge::protocol::DEFAULT_MAX_LIGHTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::protocol::LIGHT_FLOATS;

    fn sun(intensity: f32) -> PointLight {
        PointLight::new(Vec3::ZERO, [1.0, 1.0, 1.0], intensity)
    }

    #[test]
    fn wire_record_order() {
        let light = PointLight::new(Vec3::new(1.0, 2.0, 3.0), [1.0, 0.5, 0.0], 2.0).with_distance(40.0);
        let mut state = LightState::with_capacity(1);
        assert!(state.push(light));
        assert_eq!(state.as_floats(), &[1.0, 2.0, 3.0, 1.0, 0.5, 0.0, 2.0, 40.0]);
        assert_eq!(state.as_floats().len(), LIGHT_FLOATS);
    }

    #[test]
    fn negative_distance_means_no_falloff() {
        assert_eq!(sun(1.0).with_distance(-4.0).distance, 0.0);
    }

    #[test]
    fn capacity_is_enforced() {
        let mut state = LightState::with_capacity(1);
        assert!(state.push(sun(1.0)));
        assert!(!state.push(sun(2.0)));
        assert_eq!(state.count(), 1);
    }

    #[test]
    fn set_single_replaces_every_light() {
        let mut state = LightState::default();
        state.push(sun(1.0));
        state.push(PointLight::new(Vec3::X, [0.5; 3], 2.0));
        state.set_single(sun(1.4));
        assert_eq!(state.lights(), &[sun(1.4)]);
    }

    #[test]
    fn ambient_starts_white_and_is_premultiplied() {
        let mut state = LightState::default();
        assert_eq!(state.ambient(), [1.0, 1.0, 1.0]);

        state.set_ambient([1.0, 0.5, 0.0], 0.3);
        let [r, g, b] = state.ambient();
        assert!((r - 0.3).abs() < 1e-6);
        assert!((g - 0.15).abs() < 1e-6);
        assert_eq!(b, 0.0);
    }
}
