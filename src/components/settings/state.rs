use std::time::Duration;

use crate::components::{PostMatchConfig, RealTimeConfig};
use crate::telemetry::KeyHeatConfig;

#[derive(serde::Deserialize, serde::Serialize, Clone, PartialEq, Debug)]
#[serde(default)]
pub struct Settings {
    pub scale: f32,
    pub font_size: f32,
    pub player_id: String,
    pub sample_interval_ms: u64,
    pub decay_interval_ms: u64,
    pub analysis_interval_ms: u64,
    pub trail_length: usize,
    pub timeline_length: usize,
    pub key_heat: KeyHeatConfig,
    pub pressure_threshold: u32,
    pub paused: bool,
    #[serde(skip)]
    show_window: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scale: 1.2,
            font_size: 15.0,
            player_id: "Player A".to_owned(),
            sample_interval_ms: 1200,
            decay_interval_ms: 300,
            analysis_interval_ms: 1500,
            trail_length: 50,
            timeline_length: 100,
            key_heat: KeyHeatConfig::default(),
            pressure_threshold: 110,
            paused: false,
            show_window: false,
        }
    }
}

impl Settings {
    pub fn show(&mut self) {
        self.show_window = true;
    }

    pub fn is_visible(&self) -> bool {
        self.show_window
    }

    pub fn hide(&mut self) {
        self.show_window = false;
    }

    /// Restores sampling and analysis defaults, keeping the display settings.
    pub fn reset_sampling(&mut self) {
        *self = Self {
            scale: self.scale,
            font_size: self.font_size,
            show_window: self.show_window,
            ..Default::default()
        };
    }

    /// Pulls every value back into the range the settings window allows.
    /// Persisted state from older builds may hold anything.
    pub fn sanitized(mut self) -> Self {
        self.scale = self.scale.clamp(0.5, 2.0);
        self.font_size = self.font_size.clamp(8.0, 32.0);
        self.sample_interval_ms = self.sample_interval_ms.clamp(100, 10_000);
        self.decay_interval_ms = self.decay_interval_ms.clamp(50, 5_000);
        self.analysis_interval_ms = self.analysis_interval_ms.clamp(100, 10_000);
        self.trail_length = self.trail_length.clamp(10, 500);
        self.timeline_length = self.timeline_length.clamp(10, 1_000);
        self.key_heat.cap = self.key_heat.cap.clamp(1, 500);
        self.key_heat.press_step = self.key_heat.press_step.clamp(1, self.key_heat.cap);
        self.key_heat.decay_step = self.key_heat.decay_step.clamp(1, self.key_heat.cap);
        self.pressure_threshold = self.pressure_threshold.clamp(60, 220);
        self
    }

    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms)
    }

    pub fn decay_interval(&self) -> Duration {
        Duration::from_millis(self.decay_interval_ms)
    }

    pub fn analysis_interval(&self) -> Duration {
        Duration::from_millis(self.analysis_interval_ms)
    }

    pub fn realtime_config(&self) -> RealTimeConfig {
        RealTimeConfig {
            trail_length: self.trail_length,
            key_heat: self.key_heat,
        }
    }

    pub fn post_match_config(&self) -> PostMatchConfig {
        PostMatchConfig {
            timeline_length: self.timeline_length,
            pressure_threshold: self.pressure_threshold,
        }
    }

    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_pixels_per_point(self.scale);

        let mut style = (*ctx.style()).clone();
        style.text_styles = [
            (
                egui::TextStyle::Heading,
                egui::FontId::new(self.font_size + 4.0, egui::FontFamily::Proportional),
            ),
            (
                egui::TextStyle::Body,
                egui::FontId::new(self.font_size, egui::FontFamily::Proportional),
            ),
            (
                egui::TextStyle::Monospace,
                egui::FontId::new(self.font_size, egui::FontFamily::Monospace),
            ),
            (
                egui::TextStyle::Button,
                egui::FontId::new(self.font_size, egui::FontFamily::Proportional),
            ),
            (
                egui::TextStyle::Small,
                egui::FontId::new(self.font_size - 2.0, egui::FontFamily::Proportional),
            ),
        ]
        .into();
        ctx.set_style(style);
    }
}
