/// Solar System: interactive orrery with circular orbits.
///
/// SDF spheres for the sun and planets, vectors for orbit paths, Saturn's
/// ring and the starfield. Drag to rotate the camera, wheel to zoom.

use glam::{Vec2, Vec3};
use helio_engine::*;

use crate::catalog::{self, Decoration, BODY_COUNT, CATALOG, RING_COLOR, RING_OPACITY, SUN};
use crate::composer::{BodyFrame, Composition, SceneComposer};
use crate::controls::{rgb, ThemePalette};
use crate::orbit::{circle_xz, ORBIT_COLOR, ORBIT_OPACITY};
use crate::panel::{slider_label, LayoutMode, PanelLayout, PanelView};
use crate::speeds::index_from_wire;
use crate::starfield::{Starfield, STAR_COUNT};

// ── Custom event kinds from the overlay ──────────────────────────────

pub const CUSTOM_SET_SPEED: u32 = 1;
pub const CUSTOM_TOGGLE_PAUSE: u32 = 2;
pub const CUSTOM_TOGGLE_THEME: u32 = 3;
pub const CUSTOM_TOGGLE_ORBITS: u32 = 4;
pub const CUSTOM_RESET: u32 = 5;
pub const CUSTOM_TOGGLE_PANEL: u32 = 6;
pub const CUSTOM_RESET_VIEW: u32 = 7;
pub const CUSTOM_ZOOM: u32 = 8;

// ── Game event kinds to the overlay ──────────────────────────────────

pub const EVENT_UI_STATE: f32 = 1.0;
pub const EVENT_SPEED: f32 = 2.0;
pub const EVENT_LAYOUT: f32 = 3.0;
pub const EVENT_LABEL: f32 = 4.0;
pub const EVENT_CHROME: f32 = 5.0;

// ── Keyboard (DOM keyCode) ───────────────────────────────────────────

pub const KEY_SPACE: u32 = 32;
pub const KEY_O: u32 = 79;
pub const KEY_R: u32 = 82;
pub const KEY_T: u32 = 84;

// ── Drawing ──────────────────────────────────────────────────────────

const ORBIT_LINE_WIDTH: f32 = 1.0;
const RING_SEGMENTS: usize = 64;
const PLANET_SHININESS: f32 = 16.0;
const VIEWPORT_W: f32 = 1280.0;
const VIEWPORT_H: f32 = 720.0;

fn flag(on: bool) -> f32 {
    if on {
        1.0
    } else {
        0.0
    }
}

fn vector_color(hex: u32, alpha: f32) -> VectorColor {
    let [r, g, b] = rgb(hex);
    VectorColor::new(r, g, b, alpha)
}

pub struct SolarSystem {
    composer: SceneComposer,
    starfield: Starfield,
    layout: PanelLayout,
    planet_ids: [Option<EntityId>; BODY_COUNT],
    /// Last pointer position while dragging.
    drag: Option<Vec2>,
    /// Name-keyed speed edits from the host, applied at the next update.
    named_edits: Vec<(String, f32)>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            composer: SceneComposer::new([0.0; BODY_COUNT]),
            starfield: Starfield::default(),
            layout: PanelLayout::for_width(VIEWPORT_W),
            planet_ids: [None; BODY_COUNT],
            drag: None,
            named_edits: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn composer(&self) -> &SceneComposer {
        &self.composer
    }

    #[cfg(test)]
    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    /// Queue a speed edit addressed by body name. Like every other input it
    /// takes effect in the next update.
    pub fn queue_speed_edit(&mut self, name: &str, speed: f32) {
        self.named_edits.push((name.to_string(), speed));
    }

    fn apply_named_edits(&mut self) {
        for (name, speed) in std::mem::take(&mut self.named_edits) {
            match self.composer.set_speed_by_name(&name, speed) {
                Ok(stored) => log::debug!("{}", slider_label(&name, stored)),
                Err(e) => log::warn!("speed edit rejected: {e}"),
            }
        }
    }

    /// Overlay description for the host, as JSON.
    pub fn panel_json(&self) -> String {
        let view = PanelView::new(self.layout, self.composer.ui(), self.composer.speeds());
        match view.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::warn!("panel view failed to serialize: {e}");
                String::from("{}")
            }
        }
    }

    // ── Input ──────────────────────────────────────────────────────

    fn handle_custom(&mut self, ctx: &mut EngineContext, kind: u32, a: f32, b: f32) {
        match kind {
            CUSTOM_SET_SPEED => {
                match index_from_wire(a).and_then(|i| self.composer.set_speed(i, b).map(|s| (i, s))) {
                    Ok((i, speed)) => log::debug!("{}", slider_label(CATALOG[i].name, speed)),
                    Err(e) => log::warn!("speed edit rejected: {e}"),
                }
            }
            CUSTOM_TOGGLE_PAUSE => self.composer.toggle_pause(),
            CUSTOM_TOGGLE_THEME => self.composer.toggle_theme(),
            CUSTOM_TOGGLE_ORBITS => self.composer.toggle_orbits(),
            CUSTOM_RESET => {
                self.composer.reset();
                log::info!("reset to catalog speeds");
            }
            CUSTOM_TOGGLE_PANEL => self.layout.toggle(),
            CUSTOM_RESET_VIEW => ctx.camera.reset(),
            CUSTOM_ZOOM => ctx.camera.zoom(a),
            other => log::warn!("unknown custom event kind {other}"),
        }
    }

    fn handle_key(&mut self, key_code: u32) {
        match key_code {
            KEY_SPACE => self.composer.toggle_pause(),
            KEY_O => self.composer.toggle_orbits(),
            KEY_T => self.composer.toggle_theme(),
            KEY_R => {
                self.composer.reset();
                log::info!("reset to catalog speeds");
            }
            _ => {}
        }
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, event: &InputEvent) {
        match *event {
            InputEvent::Custom { kind, a, b, .. } => self.handle_custom(ctx, kind, a, b),
            InputEvent::KeyDown { key_code } => self.handle_key(key_code),
            InputEvent::PointerDown { x, y } => self.drag = Some(Vec2::new(x, y)),
            InputEvent::PointerMove { x, y } => {
                if let Some(last) = self.drag {
                    let pos = Vec2::new(x, y);
                    let delta = pos - last;
                    ctx.camera.orbit(delta.x, delta.y);
                    self.drag = Some(pos);
                }
            }
            InputEvent::PointerUp { .. } => self.drag = None,
            InputEvent::Resize { width, height } => {
                ctx.camera.resize(width, height);
                if self.layout.resize(width) {
                    log::info!("panel layout: {:?}", self.layout.mode);
                }
            }
            InputEvent::KeyUp { .. } => {}
        }
    }

    // ── Output ─────────────────────────────────────────────────────

    fn apply_palette(ctx: &mut EngineContext, palette: &ThemePalette) {
        ctx.background = rgb(palette.background);
        ctx.lights.set_ambient(rgb(palette.ambient_color), palette.ambient_intensity);
        ctx.lights.set_single(PointLight::new(
            Vec3::ZERO,
            rgb(palette.light_color),
            palette.light_intensity,
        ));
    }

    fn place_bodies(&self, ctx: &mut EngineContext, frame: &Composition) {
        for body in &frame.bodies {
            if let Some(id) = self.planet_ids[body.index] {
                ctx.scene.set_transform(id, body.position, body.spin);
            }
        }
    }

    fn draw_vectors(&self, ctx: &mut EngineContext, frame: &Composition) {
        let palette = frame.palette;
        self.starfield.draw(
            &ctx.camera,
            &mut ctx.vectors,
            vector_color(palette.star_color, palette.star_alpha),
        );

        let orbit_color = vector_color(ORBIT_COLOR, ORBIT_OPACITY);
        for body in &frame.bodies {
            if let Some(orbit) = body.orbit {
                stroke_world_polyline(&ctx.camera, &mut ctx.vectors, orbit, orbit_color);
            }
        }

        let ring_color = vector_color(RING_COLOR, RING_OPACITY);
        for body in &frame.bodies {
            if let Decoration::Ring { inner_radius, outer_radius } = body.config.decoration {
                fill_world_ring(
                    &ctx.camera,
                    &mut ctx.vectors,
                    body.position,
                    inner_radius,
                    outer_radius,
                    ring_color,
                );
            }
        }
    }

    fn emit_state(&self, ctx: &mut EngineContext, frame: &Composition) {
        let ui = frame.ui;
        ctx.emit_event(GameEvent::new(
            EVENT_UI_STATE,
            flag(ui.paused),
            ui.theme.wire(),
            flag(ui.show_orbits),
        ));

        for (i, (_, speed)) in self.composer.speeds().iter().enumerate() {
            ctx.emit_event(GameEvent::new(EVENT_SPEED, i as f32, speed, 0.0));
        }

        ctx.emit_event(GameEvent::new(
            EVENT_LAYOUT,
            flag(self.layout.mode == LayoutMode::Mobile),
            flag(self.layout.visible()),
            0.0,
        ));

        let palette = frame.palette;
        ctx.emit_event(GameEvent::new(
            EVENT_CHROME,
            palette.chrome_background as f32,
            palette.chrome_alpha,
            palette.chrome_text as f32,
        ));

        for body in &frame.bodies {
            emit_label(ctx, body);
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn emit_label(ctx: &mut EngineContext, body: &BodyFrame) {
    if let Some(proj) = ctx.camera.project(body.label_anchor) {
        ctx.emit_event(GameEvent::new(EVENT_LABEL, body.index as f32, proj.pos.x, proj.pos.y));
    }
}

/// Stroke a world-space polyline. Points behind the camera split it into runs.
fn stroke_world_polyline(
    camera: &OrbitCamera,
    vectors: &mut VectorState,
    points: &[Vec3],
    color: VectorColor,
) {
    let mut run: Vec<Vec2> = Vec::with_capacity(points.len());
    for p in points {
        match camera.project(*p) {
            Some(proj) => run.push(proj.pos),
            None => {
                vectors.stroke_polyline(&run, ORBIT_LINE_WIDTH, color);
                run.clear();
            }
        }
    }
    vectors.stroke_polyline(&run, ORBIT_LINE_WIDTH, color);
}

/// Fill a flat ring in the XZ plane around `center`. Skipped when any
/// outline point is behind the camera.
fn fill_world_ring(
    camera: &OrbitCamera,
    vectors: &mut VectorState,
    center: Vec3,
    inner_radius: f32,
    outer_radius: f32,
    color: VectorColor,
) {
    let project = |radius: f32| -> Option<Vec<Vec2>> {
        let mut outline = circle_xz(center, radius, RING_SEGMENTS);
        outline.pop();
        outline.iter().map(|p| camera.project(*p).map(|proj| proj.pos)).collect()
    };
    if let (Some(outer), Some(inner)) = (project(outer_radius), project(inner_radius)) {
        vectors.fill_annulus(&outer, &inner, color);
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            fixed_dt: 1.0 / 60.0,
            // Speeds are radians per rendered frame.
            stepping: Stepping::PerHostFrame,
            viewport_width: VIEWPORT_W,
            viewport_height: VIEWPORT_H,
            max_sdf_instances: 16,
            max_events: 64,
            max_lights: 1,
            max_vector_vertices: 98_304,
            camera_eye: Vec3::new(0.0, 30.0, 50.0),
            camera_fov_degrees: 45.0,
        }
    }

    fn textures(&self) -> TextureManifest {
        catalog::texture_manifest()
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        if let Err(e) = catalog::validate(&CATALOG) {
            log::warn!("body catalog is inconsistent: {e}");
        }

        self.composer = SceneComposer::with_random_phases(&mut ctx.rng);
        self.starfield = Starfield::generate(&mut ctx.rng, STAR_COUNT);
        self.layout = PanelLayout::for_width(ctx.camera.viewport.x);

        // ── Spawn Sun ────────────────────────────────────────────────
        let sun_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(sun_id)
                .with_tag(SUN.name)
                .with_pos(Vec3::ZERO)
                .with_mesh(
                    MeshComponent::sphere(SUN.size, SDFColor::from(rgb(SUN.emissive_color)))
                        .with_texture(SUN.texture)
                        .with_emissive(SUN.emissive_intensity)
                        .unlit(),
                ),
        );

        // ── Spawn planets ────────────────────────────────────────────
        let frame = self.composer.compose();
        for body in &frame.bodies {
            let id = ctx.next_id();
            self.planet_ids[body.index] = Some(ctx.scene.spawn(
                Entity::new(id)
                    .with_tag(body.config.name)
                    .with_pos(body.position)
                    .with_rotation(body.spin)
                    .with_mesh(
                        MeshComponent::sphere(body.config.size, SDFColor::WHITE)
                            .with_texture(body.config.texture)
                            .with_shininess(PLANET_SHININESS),
                    ),
            ));
        }

        log::info!(
            "{} bodies, {} orbits, {} stars",
            ctx.scene.len(),
            frame.orbit_count(),
            self.starfield.len()
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        self.apply_named_edits();
        for event in input.iter() {
            self.handle_input(ctx, event);
        }
        self.composer.advance();
    }

    fn render(&mut self, ctx: &mut EngineContext) {
        let frame = self.composer.compose();
        Self::apply_palette(ctx, frame.palette);
        self.place_bodies(ctx, &frame);
        self.draw_vectors(ctx, &frame);
        self.emit_state(ctx, &frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{Theme, UiState};
    use crate::speeds::{SpeedMap, MAX_SPEED};

    fn started() -> (SolarSystem, EngineContext) {
        let config = SolarSystem::new().config();
        let mut ctx = EngineContext::with_seed(&config, 42);
        let mut game = SolarSystem::new();
        game.init(&mut ctx);
        (game, ctx)
    }

    fn step(game: &mut SolarSystem, ctx: &mut EngineContext, events: &[InputEvent]) {
        let mut input = InputQueue::new();
        for e in events {
            input.push(*e);
        }
        ctx.clear_frame_data();
        game.update(ctx, &input);
        game.render(ctx);
    }

    fn custom(kind: u32, a: f32, b: f32) -> InputEvent {
        InputEvent::Custom { kind, a, b, c: 0.0 }
    }

    fn events_of(ctx: &EngineContext, kind: f32) -> Vec<GameEvent> {
        ctx.events.iter().copied().filter(|e| e.kind == kind).collect()
    }

    #[test]
    fn init_spawns_sun_and_planets() {
        let (_, ctx) = started();
        assert_eq!(ctx.scene.len(), BODY_COUNT + 1);
        assert!(ctx.scene.find_by_tag("Sun").is_some());
        let saturn = ctx.scene.find_by_tag("Saturn").unwrap();
        assert_eq!(saturn.mesh.unwrap().texture, Some(TextureId(6)));
    }

    #[test]
    fn set_speed_event_updates_map() {
        let (mut game, mut ctx) = started();
        step(&mut game, &mut ctx, &[custom(CUSTOM_SET_SPEED, 2.0, 0.03)]);
        assert_eq!(game.composer().speeds().by_name("Earth"), Some(0.03));
        let speed = events_of(&ctx, EVENT_SPEED)[2];
        assert_eq!((speed.a, speed.b), (2.0, 0.03));
    }

    #[test]
    fn named_speed_edits_apply_on_next_update() {
        let (mut game, mut ctx) = started();
        game.queue_speed_edit("Mars", 0.011);
        game.queue_speed_edit("Pluto", 0.02);
        game.queue_speed_edit("Venus", f32::NAN);
        assert_eq!(*game.composer().speeds(), SpeedMap::defaults());

        step(&mut game, &mut ctx, &[]);
        let mut expected = SpeedMap::defaults();
        expected.set(3, 0.011).unwrap();
        assert_eq!(*game.composer().speeds(), expected);
        assert_eq!(events_of(&ctx, EVENT_SPEED)[3].b, 0.011);

        // Applied once, not replayed.
        game.queue_speed_edit("Mars", 0.2);
        step(&mut game, &mut ctx, &[]);
        assert_eq!(game.composer().speeds().get(3), Some(MAX_SPEED));
    }

    #[test]
    fn each_host_frame_advances_earth_by_its_speed() {
        let earth = CATALOG[2].base_speed;
        for hz in [30.0_f32, 60.0, 120.0, 144.0] {
            let mut runner = helio_web::GameRunner::new(SolarSystem::new(), 5);
            runner.init();
            let angle = |r: &helio_web::GameRunner<SolarSystem>| {
                r.game().composer().animator(2).map(|a| a.angle()).unwrap_or(f32::NAN)
            };
            for frame in 0..12 {
                let before = angle(&runner);
                runner.tick(1.0 / hz);
                let moved = (angle(&runner) - before).rem_euclid(std::f32::consts::TAU);
                assert!(
                    (moved - earth).abs() < 1e-5,
                    "{hz} Hz, frame {frame}: moved {moved}"
                );
            }
        }
    }

    #[test]
    fn bad_speed_events_are_ignored() {
        let (mut game, mut ctx) = started();
        step(
            &mut game,
            &mut ctx,
            &[
                custom(CUSTOM_SET_SPEED, 8.0, 0.01),
                custom(CUSTOM_SET_SPEED, 1.5, 0.01),
                custom(CUSTOM_SET_SPEED, 0.0, f32::NAN),
            ],
        );
        assert_eq!(*game.composer().speeds(), SpeedMap::defaults());
    }

    #[test]
    fn pause_freezes_planets() {
        let (mut game, mut ctx) = started();
        step(&mut game, &mut ctx, &[custom(CUSTOM_TOGGLE_PAUSE, 0.0, 0.0)]);
        let before: Vec<Vec3> = CATALOG
            .iter()
            .map(|b| ctx.scene.find_by_tag(b.name).unwrap().pos)
            .collect();
        for _ in 0..20 {
            step(&mut game, &mut ctx, &[]);
        }
        let after: Vec<Vec3> = CATALOG
            .iter()
            .map(|b| ctx.scene.find_by_tag(b.name).unwrap().pos)
            .collect();
        assert_eq!(before, after);
        assert_eq!(events_of(&ctx, EVENT_UI_STATE)[0].a, 1.0);
    }

    #[test]
    fn running_moves_planets_along_orbits() {
        let (mut game, mut ctx) = started();
        let earth_before = ctx.scene.find_by_tag("Earth").unwrap().pos;
        step(&mut game, &mut ctx, &[]);
        let earth_after = ctx.scene.find_by_tag("Earth").unwrap().pos;
        assert_ne!(earth_before, earth_after);
        assert!((earth_after.length() - 8.0).abs() < 1e-4);
    }

    #[test]
    fn keyboard_shortcuts() {
        let (mut game, mut ctx) = started();
        step(
            &mut game,
            &mut ctx,
            &[
                InputEvent::KeyDown { key_code: KEY_SPACE },
                InputEvent::KeyDown { key_code: KEY_O },
                InputEvent::KeyDown { key_code: KEY_T },
            ],
        );
        let ui = *game.composer().ui();
        assert!(ui.paused);
        assert!(!ui.show_orbits);
        assert_eq!(ui.theme, Theme::Light);

        step(&mut game, &mut ctx, &[InputEvent::KeyDown { key_code: KEY_R }]);
        assert_eq!(*game.composer().ui(), UiState::default());
    }

    #[test]
    fn reset_event_restores_defaults() {
        let (mut game, mut ctx) = started();
        step(
            &mut game,
            &mut ctx,
            &[
                custom(CUSTOM_SET_SPEED, 0.0, 0.0),
                custom(CUSTOM_TOGGLE_THEME, 0.0, 0.0),
                custom(CUSTOM_TOGGLE_ORBITS, 0.0, 0.0),
            ],
        );
        step(&mut game, &mut ctx, &[custom(CUSTOM_RESET, 0.0, 0.0)]);
        assert_eq!(*game.composer().speeds(), SpeedMap::defaults());
        assert_eq!(*game.composer().ui(), UiState::default());
        let state = events_of(&ctx, EVENT_UI_STATE)[0];
        assert_eq!((state.a, state.b, state.c), (0.0, 0.0, 1.0));
    }

    #[test]
    fn hiding_orbits_shrinks_vector_output() {
        let (mut game, mut ctx) = started();
        step(&mut game, &mut ctx, &[custom(CUSTOM_TOGGLE_PAUSE, 0.0, 0.0)]);
        let with_orbits = ctx.vectors.vertex_count();
        step(&mut game, &mut ctx, &[custom(CUSTOM_TOGGLE_ORBITS, 0.0, 0.0)]);
        assert!(ctx.vectors.vertex_count() < with_orbits);
    }

    #[test]
    fn theme_drives_background_and_light() {
        let (mut game, mut ctx) = started();
        step(&mut game, &mut ctx, &[]);
        assert_eq!(ctx.background, [0.0, 0.0, 0.0]);
        step(&mut game, &mut ctx, &[custom(CUSTOM_TOGGLE_THEME, 0.0, 0.0)]);
        assert_eq!(ctx.background, rgb(0xeef1f6));
        assert_eq!(ctx.lights.count(), 1);
        let chrome = events_of(&ctx, EVENT_CHROME)[0];
        assert_eq!(chrome.c, 0x1a1a1a as f32);
        assert_eq!(chrome.b, 0.85);
    }

    #[test]
    fn resize_across_breakpoint_keeps_state() {
        let (mut game, mut ctx) = started();
        step(&mut game, &mut ctx, &[custom(CUSTOM_SET_SPEED, 1.0, 0.04)]);
        let speeds = *game.composer().speeds();
        let ui = *game.composer().ui();

        step(&mut game, &mut ctx, &[InputEvent::Resize { width: 500.0, height: 800.0 }]);
        assert_eq!(game.layout().mode, LayoutMode::Mobile);
        assert_eq!(*game.composer().speeds(), speeds);
        assert_eq!(*game.composer().ui(), ui);
        let layout = events_of(&ctx, EVENT_LAYOUT)[0];
        assert_eq!((layout.a, layout.b), (1.0, 0.0));

        step(&mut game, &mut ctx, &[custom(CUSTOM_TOGGLE_PANEL, 0.0, 0.0)]);
        assert_eq!(events_of(&ctx, EVENT_LAYOUT)[0].b, 1.0);

        step(&mut game, &mut ctx, &[InputEvent::Resize { width: 1024.0, height: 800.0 }]);
        assert_eq!(game.layout().mode, LayoutMode::Desktop);
        assert_eq!(ctx.camera.viewport, Vec2::new(1024.0, 800.0));
    }

    #[test]
    fn labels_reported_for_visible_bodies() {
        let (mut game, mut ctx) = started();
        step(&mut game, &mut ctx, &[]);
        let labels = events_of(&ctx, EVENT_LABEL);
        assert_eq!(labels.len(), BODY_COUNT);
        for (i, label) in labels.iter().enumerate() {
            assert_eq!(label.a, i as f32);
        }
    }

    #[test]
    fn drag_rotates_camera() {
        let (mut game, mut ctx) = started();
        let eye = ctx.camera.position();
        step(
            &mut game,
            &mut ctx,
            &[
                InputEvent::PointerDown { x: 100.0, y: 100.0 },
                InputEvent::PointerMove { x: 160.0, y: 100.0 },
                InputEvent::PointerUp { x: 160.0, y: 100.0 },
            ],
        );
        assert_ne!(ctx.camera.position(), eye);

        let eye = ctx.camera.position();
        step(&mut game, &mut ctx, &[InputEvent::PointerMove { x: 300.0, y: 300.0 }]);
        assert_eq!(ctx.camera.position(), eye);

        step(&mut game, &mut ctx, &[custom(CUSTOM_RESET_VIEW, 0.0, 0.0)]);
        assert!((ctx.camera.position() - Vec3::new(0.0, 30.0, 50.0)).length() < 1e-3);
    }

    #[test]
    fn zoom_moves_camera_closer() {
        let (mut game, mut ctx) = started();
        let before = ctx.camera.distance;
        step(&mut game, &mut ctx, &[custom(CUSTOM_ZOOM, 1.0, 0.0)]);
        assert!(ctx.camera.distance < before);
    }

    #[test]
    fn panel_json_reflects_state() {
        let (mut game, mut ctx) = started();
        step(&mut game, &mut ctx, &[custom(CUSTOM_TOGGLE_PAUSE, 0.0, 0.0)]);
        let json = game.panel_json();
        assert!(json.contains("▶ Resume"));
        assert!(json.contains("Earth: 0.010"));
    }
}
