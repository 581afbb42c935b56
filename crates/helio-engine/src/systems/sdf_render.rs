use crate::components::entity::Entity;
use crate::renderer::camera::OrbitCamera;
use crate::renderer::sdf_instance::{SDFBuffer, SDFInstance};

/// Refills `buffer` with every visible sphere, ordered far to near.
///
/// Inactive and meshless entities are skipped, as is anything at or behind
/// the camera plane. The host draws the result in order with no depth buffer.
pub fn build_sdf_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    camera: &OrbitCamera,
    buffer: &mut SDFBuffer,
) {
    buffer.clear();
    let drawable = entities.filter(|e| e.active).filter_map(|e| {
        let mesh = e.mesh.as_ref()?;
        let proj = camera.project(e.pos)?;
        Some(SDFInstance::projected(mesh, e.rotation, &proj))
    });
    for instance in drawable {
        buffer.push(instance);
    }
    if buffer.overflow() > 0 {
        log::warn!("{} spheres over SDF capacity were not drawn", buffer.overflow());
    }
    buffer.sort_far_to_near();
}
