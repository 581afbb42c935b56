/// Pause, theme and orbit-visibility state, plus the theme palettes.

pub const PAUSE_LABEL: &str = "⏸ Pause";
pub const RESUME_LABEL: &str = "▶ Resume";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn palette(self) -> &'static ThemePalette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }

    /// 0 = dark, 1 = light.
    pub fn wire(self) -> f32 {
        match self {
            Theme::Dark => 0.0,
            Theme::Light => 1.0,
        }
    }
}

/// Colors and light levels for one theme. Colors are 0xRRGGBB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemePalette {
    pub background: u32,
    pub ambient_color: u32,
    pub ambient_intensity: f32,
    pub light_color: u32,
    pub light_intensity: f32,
    pub chrome_background: u32,
    pub chrome_alpha: f32,
    pub chrome_text: u32,
    pub star_color: u32,
    pub star_alpha: f32,
}

pub const DARK: ThemePalette = ThemePalette {
    background: 0x000000,
    ambient_color: 0xffffff,
    ambient_intensity: 0.3,
    light_color: 0xffffff,
    light_intensity: 2.0,
    chrome_background: 0x000000,
    chrome_alpha: 0.65,
    chrome_text: 0xffffff,
    star_color: 0xffffff,
    star_alpha: 1.0,
};

pub const LIGHT: ThemePalette = ThemePalette {
    background: 0xeef1f6,
    ambient_color: 0xffffff,
    ambient_intensity: 0.7,
    light_color: 0xfff4e0,
    light_intensity: 1.4,
    chrome_background: 0xffffff,
    chrome_alpha: 0.85,
    chrome_text: 0x1a1a1a,
    star_color: 0x1a1a1a,
    star_alpha: 0.25,
};

/// 0xRRGGBB to linear [r, g, b] in [0, 1].
pub const fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// UI-owned state that parameterizes the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    pub paused: bool,
    pub theme: Theme,
    pub show_orbits: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            paused: false,
            theme: Theme::Dark,
            show_orbits: true,
        }
    }
}

impl UiState {
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn toggle_orbits(&mut self) {
        self.show_orbits = !self.show_orbits;
    }

    pub fn pause_label(&self) -> &'static str {
        if self.paused {
            RESUME_LABEL
        } else {
            PAUSE_LABEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let ui = UiState::default();
        assert!(!ui.paused);
        assert_eq!(ui.theme, Theme::Dark);
        assert!(ui.show_orbits);
    }

    #[test]
    fn pause_label_follows_state() {
        let mut ui = UiState::default();
        assert_eq!(ui.pause_label(), "⏸ Pause");
        ui.toggle_pause();
        assert_eq!(ui.pause_label(), "▶ Resume");
        ui.toggle_pause();
        assert!(!ui.paused);
    }

    #[test]
    fn toggles_are_independent() {
        let mut ui = UiState::default();
        ui.toggle_theme();
        assert_eq!(ui.theme, Theme::Light);
        assert!(!ui.paused);
        assert!(ui.show_orbits);
        ui.toggle_orbits();
        assert!(!ui.show_orbits);
        assert_eq!(ui.theme, Theme::Light);
    }

    #[test]
    fn palettes_differ_where_it_matters() {
        assert_eq!(rgb(Theme::Dark.palette().background), [0.0, 0.0, 0.0]);
        assert!(Theme::Light.palette().ambient_intensity > Theme::Dark.palette().ambient_intensity);
        assert!(Theme::Light.palette().star_alpha < Theme::Dark.palette().star_alpha);
    }

    #[test]
    fn rgb_unpacks_channels() {
        let [r, g, b] = rgb(0xff8000);
        assert_eq!(r, 1.0);
        assert!((g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(b, 0.0);
    }
}
