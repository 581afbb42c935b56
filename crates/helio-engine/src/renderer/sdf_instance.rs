use bytemuck::{Pod, Zeroable};

use crate::api::types::TextureId;
use crate::components::mesh::MeshComponent;
use crate::renderer::camera::Projection;

/// One projected sphere for the host's raymarch pass.
///
/// Layout on the wire, 12 floats:
/// `[x, y, radius, rotation, r, g, b, shininess, emissive, texture, depth, lit]`.
/// `x`/`y`/`radius` are viewport pixels; `texture` is an index or
/// [`TextureId::NONE_WIRE`]; `lit` is 1.0 or 0.0.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SDFInstance {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Spin about the body's own axis; rotates the texture lookup.
    pub rotation: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub shininess: f32,
    pub emissive: f32,
    pub texture: f32,
    pub depth: f32,
    pub lit: f32,
}

impl SDFInstance {
    pub const FLOATS: usize = 12;

    /// Flattens a mesh seen at `proj` into its wire record.
    pub fn projected(mesh: &MeshComponent, rotation: f32, proj: &Projection) -> Self {
        Self {
            x: proj.pos.x,
            y: proj.pos.y,
            radius: mesh.radius() * proj.scale,
            rotation,
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            shininess: mesh.shininess,
            emissive: mesh.emissive,
            texture: TextureId::wire(mesh.texture),
            depth: proj.depth,
            lit: if mesh.lit { 1.0 } else { 0.0 },
        }
    }
}

/// Instances for one frame, capped at the protocol's SDF capacity and kept
/// in painter's order once [`SDFBuffer::sort_far_to_near`] has run.
pub struct SDFBuffer {
    instances: Vec<SDFInstance>,
    capacity: usize,
    overflow: usize,
}

impl SDFBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            capacity,
            overflow: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.overflow = 0;
    }

    /// Appends `instance`, counting it as overflow once the buffer is full.
    pub fn push(&mut self, instance: SDFInstance) {
        if self.instances.len() < self.capacity {
            self.instances.push(instance);
        } else {
            self.overflow += 1;
        }
    }

    /// Larger depth first, so nearer spheres are drawn over farther ones.
    pub fn sort_far_to_near(&mut self) {
        self.instances.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    }

    pub fn instances(&self) -> &[SDFInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Instances rejected since the last clear.
    pub fn overflow(&self) -> usize {
        self.overflow
    }

    pub fn instances_ptr(&self) -> *const f32 {
        bytemuck::cast_slice::<SDFInstance, f32>(&self.instances).as_ptr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::protocol::SDF_INSTANCE_FLOATS;
    use crate::components::mesh::SDFColor;
    use glam::Vec2;

    fn at_depth(depth: f32) -> SDFInstance {
        SDFInstance { depth, ..SDFInstance::default() }
    }

    #[test]
    fn record_size_matches_protocol() {
        assert_eq!(SDFInstance::FLOATS, SDF_INSTANCE_FLOATS);
        assert_eq!(std::mem::size_of::<SDFInstance>(), SDF_INSTANCE_FLOATS * 4);
    }

    #[test]
    fn projected_scales_radius_and_flags() {
        let mesh = MeshComponent::sphere(0.5, SDFColor::new(0.2, 0.4, 0.6)).unlit();
        let proj = Projection { pos: Vec2::new(10.0, 20.0), depth: 30.0, scale: 8.0 };
        let inst = SDFInstance::projected(&mesh, 1.25, &proj);
        assert_eq!((inst.x, inst.y, inst.radius), (10.0, 20.0, 4.0));
        assert_eq!(inst.rotation, 1.25);
        assert_eq!((inst.r, inst.g, inst.b), (0.2, 0.4, 0.6));
        assert_eq!(inst.texture, TextureId::NONE_WIRE);
        assert_eq!(inst.lit, 0.0);
    }

    #[test]
    fn push_beyond_capacity_counts_overflow() {
        let mut buf = SDFBuffer::with_capacity(2);
        for depth in [1.0, 2.0, 3.0] {
            buf.push(at_depth(depth));
        }
        assert_eq!(buf.instance_count(), 2);
        assert_eq!(buf.overflow(), 1);

        buf.clear();
        assert_eq!(buf.instance_count(), 0);
        assert_eq!(buf.overflow(), 0);
    }

    #[test]
    fn sorts_far_to_near() {
        let mut buf = SDFBuffer::with_capacity(4);
        for depth in [5.0, 40.0, 12.0] {
            buf.push(at_depth(depth));
        }
        buf.sort_far_to_near();
        let depths: Vec<f32> = buf.instances().iter().map(|i| i.depth).collect();
        assert_eq!(depths, [40.0, 12.0, 5.0]);
    }
}
