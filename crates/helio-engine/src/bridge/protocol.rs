/// SharedArrayBuffer layout.
/// Must stay in sync with the host's `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 20 floats]
/// [SDF instances: max_sdf_instances × 12 floats]
/// [Lights: max_lights × 8 floats]
/// [Events: max_events × 4 floats]
/// [Vectors: max_vector_vertices × 6 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// The host reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 20;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PROTOCOL_VERSION: usize = 2;
pub const HEADER_VIEWPORT_WIDTH: usize = 3;
pub const HEADER_VIEWPORT_HEIGHT: usize = 4;
pub const HEADER_MAX_SDF_INSTANCES: usize = 5;
pub const HEADER_SDF_INSTANCE_COUNT: usize = 6;
pub const HEADER_MAX_LIGHTS: usize = 7;
pub const HEADER_LIGHT_COUNT: usize = 8;
pub const HEADER_MAX_EVENTS: usize = 9;
pub const HEADER_EVENT_COUNT: usize = 10;
pub const HEADER_MAX_VECTOR_VERTICES: usize = 11;
pub const HEADER_VECTOR_VERTEX_COUNT: usize = 12;
pub const HEADER_BACKGROUND_R: usize = 13;
pub const HEADER_BACKGROUND_G: usize = 14;
pub const HEADER_BACKGROUND_B: usize = 15;
pub const HEADER_AMBIENT_R: usize = 16;
pub const HEADER_AMBIENT_G: usize = 17;
pub const HEADER_AMBIENT_B: usize = 18;
pub const HEADER_RESERVED: usize = 19;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 2.0;

/// Floats per SDF instance: x, y, radius, rotation, r, g, b, shininess,
/// emissive, texture, depth, lit (wire format).
pub const SDF_INSTANCE_FLOATS: usize = 12;

/// Floats per point light: x, y, z, r, g, b, intensity, distance.
pub const LIGHT_FLOATS: usize = 8;

/// Floats per game event: kind, a, b, c (wire format).
pub const EVENT_FLOATS: usize = 4;

/// Floats per vector vertex: x, y, r, g, b, a.
pub const VECTOR_VERTEX_FLOATS: usize = 6;

/// Default light capacity when a game does not override it.
pub const DEFAULT_MAX_LIGHTS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum SDF instances.
    pub max_sdf_instances: usize,
    /// Maximum point lights.
    pub max_lights: usize,
    /// Maximum game events per frame.
    pub max_events: usize,
    /// Maximum vector vertices per frame.
    pub max_vector_vertices: usize,

    /// Size of SDF data section in floats.
    pub sdf_data_floats: usize,
    /// Size of light data section in floats.
    pub light_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,
    /// Size of vector data section in floats.
    pub vector_data_floats: usize,

    /// Offset (in floats) where SDF data begins.
    pub sdf_data_offset: usize,
    /// Offset (in floats) where light data begins.
    pub light_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,
    /// Offset (in floats) where vector data begins.
    pub vector_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        max_sdf_instances: usize,
        max_lights: usize,
        max_events: usize,
        max_vector_vertices: usize,
    ) -> Self {
        let sdf_data_floats = max_sdf_instances * SDF_INSTANCE_FLOATS;
        let light_data_floats = max_lights * LIGHT_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;
        let vector_data_floats = max_vector_vertices * VECTOR_VERTEX_FLOATS;

        let sdf_data_offset = HEADER_FLOATS;
        let light_data_offset = sdf_data_offset + sdf_data_floats;
        let event_data_offset = light_data_offset + light_data_floats;
        let vector_data_offset = event_data_offset + event_data_floats;

        let buffer_total_floats = vector_data_offset + vector_data_floats;

        Self {
            max_sdf_instances,
            max_lights,
            max_events,
            max_vector_vertices,
            sdf_data_floats,
            light_data_floats,
            event_data_floats,
            vector_data_floats,
            sdf_data_offset,
            light_data_offset,
            event_data_offset,
            vector_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_sdf_instances,
            config.max_lights,
            config.max_events,
            config.max_vector_vertices,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let config = GameConfig::default();
        let layout = ProtocolLayout::from_config(&config);

        assert_eq!(layout.max_sdf_instances, config.max_sdf_instances);
        assert_eq!(layout.sdf_data_floats, config.max_sdf_instances * 12);
        assert_eq!(layout.light_data_floats, config.max_lights * 8);
        assert_eq!(layout.event_data_floats, config.max_events * 4);
        assert_eq!(layout.vector_data_floats, config.max_vector_vertices * 6);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn custom_capacities_compute_correctly() {
        let layout = ProtocolLayout::new(16, 2, 64, 1000);
        let expected_total = HEADER_FLOATS + 16 * 12 + 2 * 8 + 64 * 4 + 1000 * 6;
        assert_eq!(layout.buffer_total_floats, expected_total);
        assert_eq!(layout.buffer_total_bytes, expected_total * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(10, 3, 20, 50);

        assert_eq!(layout.sdf_data_offset, HEADER_FLOATS);
        assert_eq!(layout.light_data_offset, layout.sdf_data_offset + layout.sdf_data_floats);
        assert_eq!(layout.event_data_offset, layout.light_data_offset + layout.light_data_floats);
        assert_eq!(layout.vector_data_offset, layout.event_data_offset + layout.event_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.vector_data_offset + layout.vector_data_floats);
    }

    #[test]
    fn header_fields_fit_header() {
        assert_eq!(HEADER_RESERVED, HEADER_FLOATS - 1);
    }
}
