pub mod runner;
pub mod viewport;

pub use helio_engine::InputEvent;
pub use runner::GameRunner;
pub use viewport::{window_size, ResizeListener};

/// Seed for the engine RNG, taken from the wall clock.
pub fn clock_seed() -> u64 {
    js_sys::Date::now() as u64
}

/// Generates the `#[wasm_bindgen]` surface for one game type.
///
/// The runner and the resize listener live in `thread_local!` slots, since
/// wasm-bindgen cannot export a generic struct. The host reads counts,
/// capacities and colors from the header and uses the section pointers
/// only to locate data inside wasm memory.
///
/// The calling crate needs `wasm_bindgen::prelude::*` in scope. The generated
/// `with_runner` helper is visible to it, so extra exports can reach the game:
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// helio_web::export_game!(Orrery, "orrery", vectors);
///
/// #[wasm_bindgen]
/// pub fn get_panel_state() -> String {
///     with_runner(|r| r.game().panel_json())
/// }
/// ```
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        thread_local! {
            static RUNNER: ::std::cell::RefCell<Option<$crate::GameRunner<$game_type>>> =
                ::std::cell::RefCell::new(None);
            static RESIZE: ::std::cell::RefCell<Option<$crate::ResizeListener>> =
                ::std::cell::RefCell::new(None);
        }

        /// Runs `f` against the live runner. Panics before `game_init`.
        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut slot = cell.borrow_mut();
                let runner = slot
                    .as_mut()
                    .expect(concat!($game_name, ": game_init() must run first"));
                f(runner)
            })
        }

        /// Input arriving outside a session is dropped.
        fn push_input(event: $crate::InputEvent) {
            RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
                Some(runner) => runner.push_input(event),
                None => log::debug!("{}: input without a session: {:?}", $game_name, event),
            });
        }

        // ---- Lifecycle ----

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let mut runner =
                $crate::GameRunner::new(<$game_type>::new(), $crate::clock_seed());
            runner.init();
            RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));

            if let Some((width, height)) = $crate::window_size() {
                push_input($crate::InputEvent::Resize { width, height });
            }
            let listener = $crate::ResizeListener::attach(|width, height| {
                push_input($crate::InputEvent::Resize { width, height });
            });
            match listener {
                Ok(listener) => RESIZE.with(|cell| *cell.borrow_mut() = Some(listener)),
                Err(e) => log::warn!("{}: resize listener unavailable: {:?}", $game_name, e),
            }

            log::info!("{}: initialized", $game_name);
        }

        /// Detaches the resize listener, then drops the game.
        #[wasm_bindgen]
        pub fn game_teardown() {
            RESIZE.with(|cell| cell.borrow_mut().take());
            RUNNER.with(|cell| cell.borrow_mut().take());
            log::info!("{}: torn down", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        // ---- Input ----

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32) {
            push_input($crate::InputEvent::PointerDown { x, y });
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32) {
            push_input($crate::InputEvent::PointerUp { x, y });
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            push_input($crate::InputEvent::PointerMove { x, y });
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            push_input($crate::InputEvent::KeyDown { key_code });
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            push_input($crate::InputEvent::KeyUp { key_code });
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            push_input($crate::InputEvent::Custom { kind, a, b, c });
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32) {
            push_input($crate::InputEvent::Resize { width, height });
        }

        // ---- Textures ----

        #[wasm_bindgen]
        pub fn game_load_manifest(json: &str) {
            with_runner(|r| r.load_manifest(json));
        }

        #[wasm_bindgen]
        pub fn get_texture_manifest() -> String {
            with_runner(|r| r.manifest_json())
        }

        // ---- Shared buffer ----

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }

        #[wasm_bindgen]
        pub fn get_header_ptr() -> *const f32 {
            with_runner(|r| r.header_ptr())
        }

        #[wasm_bindgen]
        pub fn get_sdf_instances_ptr() -> *const f32 {
            with_runner(|r| r.sdf_instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_lights_ptr() -> *const f32 {
            with_runner(|r| r.lights_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }
    };

    ($game_type:ty, $game_name:literal, vectors) => {
        $crate::export_game!($game_type, $game_name);

        #[wasm_bindgen]
        pub fn get_vector_vertices_ptr() -> *const f32 {
            with_runner(|r| r.vector_vertices_ptr())
        }
    };
}
