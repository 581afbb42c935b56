/// Speed panel presentation: responsive layout and slider descriptions.
///
/// Nothing here feeds back into the animation. The host renders the panel
/// from `PanelView`.

use serde::Serialize;

use crate::catalog::CATALOG;
use crate::controls::UiState;
use crate::speeds::{SpeedMap, MAX_SPEED, MIN_SPEED, SPEED_STEP};

/// Widest viewport, in logical pixels, that still gets the mobile layout.
pub const MOBILE_BREAKPOINT: f32 = 600.0;

pub const PANEL_TITLE: &str = "Adjust Orbital Speeds";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    Desktop,
    Mobile,
}

impl LayoutMode {
    pub fn for_width(width: f32) -> Self {
        if width <= MOBILE_BREAKPOINT {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }
}

/// Desktop always shows the panel; mobile hides it behind a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelLayout {
    pub mode: LayoutMode,
    pub open: bool,
}

impl PanelLayout {
    pub fn for_width(width: f32) -> Self {
        let mode = LayoutMode::for_width(width);
        Self {
            mode,
            open: mode == LayoutMode::Desktop,
        }
    }

    /// Apply a new viewport width. Crossing the breakpoint resets `open`;
    /// returns whether the mode changed.
    pub fn resize(&mut self, width: f32) -> bool {
        let mode = LayoutMode::for_width(width);
        if mode == self.mode {
            return false;
        }
        *self = Self::for_width(width);
        true
    }

    /// Show/hide toggle. Only meaningful on mobile.
    pub fn toggle(&mut self) {
        if self.mode == LayoutMode::Mobile {
            self.open = !self.open;
        }
    }

    pub fn visible(&self) -> bool {
        self.mode == LayoutMode::Desktop || self.open
    }
}

/// `"<Name>: <speed with 3 decimals>"`.
pub fn slider_label(name: &str, speed: f32) -> String {
    format!("{name}: {speed:.3}")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderSpec {
    pub name: &'static str,
    pub label: String,
    pub value: f32,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    /// CSS color, "#rrggbb".
    pub accent: String,
}

/// Everything the host needs to draw the overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub title: &'static str,
    pub layout: PanelLayout,
    pub visible: bool,
    pub pause_label: &'static str,
    pub sliders: Vec<SliderSpec>,
}

impl PanelView {
    pub fn new(layout: PanelLayout, ui: &UiState, speeds: &SpeedMap) -> Self {
        let sliders = CATALOG
            .iter()
            .zip(speeds.iter())
            .map(|(body, (name, value))| SliderSpec {
                name,
                label: slider_label(name, value),
                value,
                min: MIN_SPEED,
                max: MAX_SPEED,
                step: SPEED_STEP,
                accent: format!("#{:06x}", body.accent),
            })
            .collect();
        Self {
            title: PANEL_TITLE,
            layout,
            visible: layout.visible(),
            pause_label: ui.pause_label(),
            sliders,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
