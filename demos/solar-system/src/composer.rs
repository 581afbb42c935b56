/// Scene composer: owns the speed map, the UI state and one animator per
/// body, and turns them into a `Composition` each frame.
///
/// All UI edits land here. `advance` is the only per-frame mutation;
/// `compose` is a pure read.

use std::f32::consts::TAU;

use glam::Vec3;
use helio_engine::Rng;

use crate::animator::BodyAnimator;
use crate::catalog::{CelestialBodyConfig, SunConfig, BODY_COUNT, CATALOG, SUN};
use crate::controls::{ThemePalette, UiState};
use crate::error::ControlResult;
use crate::orbit::orbit_path;
use crate::speeds::SpeedMap;

/// One body as it should appear this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyFrame<'a> {
    pub index: usize,
    pub config: &'static CelestialBodyConfig,
    pub position: Vec3,
    pub spin: f32,
    /// Present only while orbits are shown.
    pub orbit: Option<&'a [Vec3]>,
    /// World point the name label hangs from.
    pub label_anchor: Vec3,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition<'a> {
    pub ui: UiState,
    pub palette: &'static ThemePalette,
    pub sun: &'static SunConfig,
    pub bodies: Vec<BodyFrame<'a>>,
}

impl Composition<'_> {
    pub fn orbit_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.orbit.is_some()).count()
    }
}

pub struct SceneComposer {
    speeds: SpeedMap,
    ui: UiState,
    animators: Vec<BodyAnimator>,
    orbits: Vec<Vec<Vec3>>,
}

impl SceneComposer {
    /// Bodies start at the given angles; everything else at defaults.
    pub fn new(initial_angles: [f32; BODY_COUNT]) -> Self {
        Self {
            speeds: SpeedMap::defaults(),
            ui: UiState::default(),
            animators: CATALOG
                .iter()
                .zip(initial_angles)
                .map(|(body, angle)| BodyAnimator::new(body.distance, angle))
                .collect(),
            orbits: CATALOG.iter().map(|body| orbit_path(body.distance)).collect(),
        }
    }

    /// Bodies start at random angles in [0, 2π).
    pub fn with_random_phases(rng: &mut Rng) -> Self {
        let mut angles = [0.0; BODY_COUNT];
        for angle in &mut angles {
            *angle = rng.range(0.0, TAU);
        }
        Self::new(angles)
    }

    pub fn speeds(&self) -> &SpeedMap {
        &self.speeds
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    #[cfg(test)]
    pub fn animator(&self, index: usize) -> Option<&BodyAnimator> {
        self.animators.get(index)
    }

    pub fn set_speed(&mut self, index: usize, speed: f32) -> ControlResult<f32> {
        self.speeds.set(index, speed)
    }

    pub fn set_speed_by_name(&mut self, name: &str, speed: f32) -> ControlResult<f32> {
        self.speeds.set_by_name(name, speed)
    }

    pub fn toggle_pause(&mut self) {
        self.ui.toggle_pause();
    }

    pub fn toggle_theme(&mut self) {
        self.ui.toggle_theme();
    }

    pub fn toggle_orbits(&mut self) {
        self.ui.toggle_orbits();
    }

    /// Catalog speeds, running, dark theme, orbits shown. Angles are kept.
    pub fn reset(&mut self) {
        self.speeds.reset();
        self.ui = UiState::default();
    }

    /// One animation frame for every body.
    pub fn advance(&mut self) {
        let paused = self.ui.paused;
        for (i, animator) in self.animators.iter_mut().enumerate() {
            let speed = self.speeds.get(i).unwrap_or(0.0);
            animator.advance(speed, paused);
        }
    }

    pub fn compose(&self) -> Composition<'_> {
        let bodies = CATALOG
            .iter()
            .zip(&self.animators)
            .zip(&self.orbits)
            .enumerate()
            .map(|(index, ((config, animator), orbit))| {
                let position = animator.position();
                BodyFrame {
                    index,
                    config,
                    position,
                    spin: animator.spin(),
                    orbit: self.ui.show_orbits.then_some(orbit.as_slice()),
                    label_anchor: position - Vec3::Y * config.label_drop(),
                }
            })
            .collect();
        Composition {
            ui: self.ui,
            palette: self.ui.theme.palette(),
            sun: &SUN,
            bodies,
        }
    }
}
