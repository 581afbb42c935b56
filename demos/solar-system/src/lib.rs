use wasm_bindgen::prelude::*;

mod animator;
mod catalog;
mod composer;
mod controls;
mod error;
mod game;
mod orbit;
mod panel;
mod speeds;
mod starfield;
use game::SolarSystem;

helio_web::export_game!(SolarSystem, "solar-system", vectors);

/// Speed panel, pause label and layout as JSON for the overlay.
#[wasm_bindgen]
pub fn get_panel_state() -> String {
    with_runner(|r| r.game().panel_json())
}

/// Set one body's orbital speed by name, e.g. `set_body_speed("Mars", 0.02)`.
/// Applied at the next tick; unknown names and non-finite speeds are logged
/// and ignored.
#[wasm_bindgen]
pub fn set_body_speed(name: &str, speed: f32) {
    with_runner(|r| r.game_mut().queue_speed_edit(name, speed));
}
