pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{EntityId, TextureId, GameEvent};
pub use components::entity::Entity;
pub use components::mesh::{MeshComponent, SDFColor};
pub use core::rng::Rng;
pub use core::scene::Scene;
pub use core::time::{FixedTimestep, Stepping};
pub use renderer::camera::{OrbitCamera, Projection};
pub use renderer::sdf_instance::{SDFInstance, SDFBuffer};
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::{TextureManifest, TextureDescriptor};
pub use bridge::protocol::ProtocolLayout;
pub use bridge::protocol::{LIGHT_FLOATS, DEFAULT_MAX_LIGHTS};
pub use systems::lighting::{PointLight, LightState};
pub use systems::sdf_render::build_sdf_buffer;

#[cfg(feature = "vectors")]
pub use systems::vector::{VectorState, VectorVertex, VectorColor};
