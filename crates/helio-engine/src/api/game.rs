use glam::{Vec2, Vec3};

use crate::api::types::{EntityId, GameEvent};
use crate::assets::manifest::TextureManifest;
use crate::bridge::protocol::DEFAULT_MAX_LIGHTS;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::core::time::Stepping;
use crate::input::queue::InputQueue;
use crate::renderer::camera::OrbitCamera;
use crate::systems::lighting::LightState;
#[cfg(feature = "vectors")]
use crate::systems::vector::VectorState;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Whether updates follow wall-clock time or the host's frames.
    pub stepping: Stepping,
    /// Initial viewport width in logical pixels.
    pub viewport_width: f32,
    /// Initial viewport height in logical pixels.
    pub viewport_height: f32,
    /// Maximum number of SDF instances (default: 64).
    pub max_sdf_instances: usize,
    /// Maximum number of game events per frame (default: 64).
    pub max_events: usize,
    /// Maximum number of point lights (default: 4).
    pub max_lights: usize,
    /// Maximum number of vector vertices per frame (default: 65536).
    pub max_vector_vertices: usize,
    /// Initial camera eye position, looking at the origin.
    pub camera_eye: Vec3,
    /// Vertical field of view in degrees.
    pub camera_fov_degrees: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            stepping: Stepping::Fixed,
            viewport_width: 800.0,
            viewport_height: 600.0,
            max_sdf_instances: 64,
            max_events: 64,
            max_lights: DEFAULT_MAX_LIGHTS,
            max_vector_vertices: 65536,
            camera_eye: Vec3::new(0.0, 30.0, 50.0),
            camera_fov_degrees: 45.0,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Textures the host should load before drawing. Empty by default.
    fn textures(&self) -> TextureManifest {
        TextureManifest::default()
    }

    /// Setup initial state, spawn entities, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The game loop tick. Runs once per step (see [`Stepping`]) with the
    /// current input.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Per-frame output pass: position entities, draw vectors, emit events.
    /// Runs once per host frame that ran at least one step, and once after init.
    fn render(&mut self, _ctx: &mut EngineContext) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub rng: Rng,
    pub camera: OrbitCamera,
    pub lights: LightState,
    /// Clear color, linear RGB in [0, 1].
    pub background: [f32; 3],
    #[cfg(feature = "vectors")]
    pub vectors: VectorState,
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_seed(&GameConfig::default(), 42)
    }

    /// Create a context sized by `config`, with the RNG seeded from `seed`.
    pub fn with_seed(config: &GameConfig, seed: u64) -> Self {
        Self {
            scene: Scene::new(),
            rng: Rng::new(seed),
            camera: OrbitCamera::looking_at_origin(
                config.camera_eye,
                config.camera_fov_degrees,
                Vec2::new(config.viewport_width, config.viewport_height),
            ),
            lights: LightState::with_capacity(config.max_lights),
            background: [0.0, 0.0, 0.0],
            #[cfg(feature = "vectors")]
            vectors: VectorState::with_capacity(config.max_vector_vertices),
            events: Vec::with_capacity(config.max_events),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (events, vector geometry).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
        #[cfg(feature = "vectors")]
        self.vectors.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut ctx = EngineContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_eq!(a, EntityId(1));
        assert_eq!(b, EntityId(2));
    }

    #[test]
    fn clear_frame_data_drops_events() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(GameEvent::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(ctx.events.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn camera_follows_config_viewport() {
        let config = GameConfig {
            viewport_width: 1024.0,
            viewport_height: 512.0,
            ..GameConfig::default()
        };
        let ctx = EngineContext::with_seed(&config, 7);
        assert!((ctx.camera.aspect() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let config = GameConfig::default();
        let mut a = EngineContext::with_seed(&config, 99);
        let mut b = EngineContext::with_seed(&config, 99);
        for _ in 0..5 {
            assert_eq!(a.rng.next_float(), b.rng.next_float());
        }
    }
}
