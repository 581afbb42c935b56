use helio_engine::bridge::protocol::*;
use helio_engine::{
    build_sdf_buffer, EngineContext, FixedTimestep, Game, InputEvent, InputQueue,
    ProtocolLayout, SDFBuffer, TextureManifest,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game (e.g., `solar-system`) creates a `thread_local!` GameRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    sdf_buffer: SDFBuffer,
    timestep: FixedTimestep,
    layout: ProtocolLayout,
    manifest: TextureManifest,
    header: [f32; HEADER_FLOATS],
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G, seed: u64) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::with_stepping(config.fixed_dt, config.stepping);
        let layout = ProtocolLayout::from_config(&config);
        let manifest = game.textures();

        Self {
            game,
            ctx: EngineContext::with_seed(&config, seed),
            input: InputQueue::new(),
            sdf_buffer: SDFBuffer::with_capacity(config.max_sdf_instances),
            timestep,
            layout,
            manifest,
            header: [0.0; HEADER_FLOATS],
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.ctx.clear_frame_data();
        self.game.init(&mut self.ctx);
        self.rebuild_frame_output();
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one host frame: step the game, then rebuild the output buffers.
    ///
    /// With [`helio_engine::Stepping::PerHostFrame`] every call runs exactly one update.
    /// With fixed stepping, input is seen by the first step only, and a
    /// frame too short for a step leaves input queued for the next one.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // A frame too short for a step keeps last frame's output; the host
        // tells the two apart by the header frame counter.
        let steps = self.timestep.accumulate(dt);
        if steps == 0 {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        let empty = InputQueue::new();
        for step in 0..steps {
            let input = if step == 0 { &self.input } else { &empty };
            self.game.update(&mut self.ctx, input);
        }

        self.input.clear();

        self.rebuild_frame_output();
    }

    fn rebuild_frame_output(&mut self) {
        self.game.render(&mut self.ctx);
        build_sdf_buffer(self.ctx.scene.iter(), &self.ctx.camera, &mut self.sdf_buffer);

        let max_events = self.layout.max_events;
        if self.ctx.events.len() > max_events {
            log::warn!(
                "dropping {} game events over capacity {}",
                self.ctx.events.len() - max_events,
                max_events
            );
            self.ctx.events.truncate(max_events);
        }

        self.write_header();
    }

    fn write_header(&mut self) {
        let light_count = self.light_count();
        let vector_vertex_count = self.vector_vertex_count();
        let h = &mut self.header;
        h[HEADER_LOCK] = 0.0;
        h[HEADER_FRAME_COUNTER] = self.timestep.frame() as f32;
        h[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        h[HEADER_VIEWPORT_WIDTH] = self.ctx.camera.viewport.x;
        h[HEADER_VIEWPORT_HEIGHT] = self.ctx.camera.viewport.y;
        h[HEADER_MAX_SDF_INSTANCES] = self.layout.max_sdf_instances as f32;
        h[HEADER_SDF_INSTANCE_COUNT] = self.sdf_buffer.instance_count() as f32;
        h[HEADER_MAX_LIGHTS] = self.layout.max_lights as f32;
        h[HEADER_LIGHT_COUNT] = light_count as f32;
        h[HEADER_MAX_EVENTS] = self.layout.max_events as f32;
        h[HEADER_EVENT_COUNT] = self.ctx.events.len() as f32;
        h[HEADER_MAX_VECTOR_VERTICES] = self.layout.max_vector_vertices as f32;
        h[HEADER_VECTOR_VERTEX_COUNT] = vector_vertex_count as f32;
        let [r, g, b] = self.ctx.background;
        h[HEADER_BACKGROUND_R] = r;
        h[HEADER_BACKGROUND_G] = g;
        h[HEADER_BACKGROUND_B] = b;
        let [ar, ag, ab] = self.ctx.lights.ambient();
        h[HEADER_AMBIENT_R] = ar;
        h[HEADER_AMBIENT_G] = ag;
        h[HEADER_AMBIENT_B] = ab;
        h[HEADER_RESERVED] = 0.0;
    }

    /// Replace the texture manifest with one supplied by the host.
    /// A malformed manifest is logged and the current one kept.
    pub fn load_manifest(&mut self, json: &str) {
        match TextureManifest::from_json(json) {
            Ok(manifest) => {
                log::info!("texture manifest loaded: {} textures", manifest.textures.len());
                self.manifest = manifest;
            }
            Err(e) => log::warn!("ignoring malformed texture manifest: {e}"),
        }
    }

    /// Texture manifest as JSON for the host's loader.
    pub fn manifest_json(&self) -> String {
        match self.manifest.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::warn!("texture manifest failed to serialize: {e}");
                String::from("{}")
            }
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    /// For host calls that queue work for the game's next update.
    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    // ---- Shared buffer sections ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn header(&self) -> &[f32; HEADER_FLOATS] {
        &self.header
    }

    pub fn sdf_instances_ptr(&self) -> *const f32 {
        self.sdf_buffer.instances_ptr()
    }

    pub fn sdf_instance_count(&self) -> u32 {
        self.sdf_buffer.instance_count() as u32
    }

    pub fn sdf_buffer(&self) -> &SDFBuffer {
        &self.sdf_buffer
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count().min(self.layout.max_lights) as u32
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.ctx.vectors.buffer_ptr()
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertex_count(&self) -> u32 {
        self.ctx.vectors.vertex_count() as u32
    }

    #[cfg(not(feature = "vectors"))]
    pub fn vector_vertex_count(&self) -> u32 {
        0
    }

    // ---- Capacities ----

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
