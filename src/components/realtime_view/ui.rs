use egui::{Color32, RichText};
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints, Points};

use super::state::RealTimeView;
use crate::components::heatmap::key_heatmap;
use crate::components::palette::{
    emotion_color, face_color, heart_rate_color, workload_color, ACCENT, ON_BADGE, PANEL_BG,
    PANEL_TEXT,
};
use crate::telemetry::{Point, RollingSeries, AXIS_MAX};

impl RealTimeView {
    pub fn show(&self, ui: &mut egui::Ui) {
        let keyboard_height = (ui.available_height() * 0.3).max(120.0);

        ui.columns(2, |columns| {
            self.player_panel(&mut columns[0]);
            self.trail_panel(&mut columns[1], keyboard_height);
        });

        ui.add_space(8.0);
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.strong("Keyboard heat");
                ui.label(format!("{} presses", self.key_heat.total_presses()));
                if let Some(key) = self.key_heat.last_pressed() {
                    ui.label(format!("last: {}", key.label()));
                }
            });
            key_heatmap(ui, &self.key_heat, keyboard_height);
        });
    }

    fn player_panel(&self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.heading("Player status");

            placeholder(ui, "Live camera feed", 180.0);

            let id = self.player_id.as_deref().unwrap_or("Unknown player");
            ui.label(RichText::new(format!("ID: {id}")).strong().color(PANEL_TEXT));

            let face = if self.face_detected { "OK" } else { "Lost" };
            ui.label(
                RichText::new(format!("Face detection: {face}"))
                    .strong()
                    .color(face_color(self.face_detected)),
            );

            ui.add_space(8.0);
            badge(ui, format!("Emotion: {}", self.emotion.label()), emotion_color(self.emotion));
            ui.label(
                RichText::new(format!("Heart rate: {} bpm", self.heart_rate))
                    .strong()
                    .color(heart_rate_color(self.heart_rate)),
            );
            badge(ui, format!("Workload: {}", self.workload.label()), workload_color(self.workload));

            ui.add_space(4.0);
            ui.small(format!("{} samples received", self.samples_seen()));
        });
    }

    fn trail_panel(&self, ui: &mut egui::Ui, height: f32) {
        placeholder(ui, "Match screen", height * 0.8);

        Plot::new("mouse_gaze_trails")
            .height(height * 1.4)
            .legend(Legend::default())
            .include_x(0.0)
            .include_x(AXIS_MAX)
            .include_y(0.0)
            .include_y(AXIS_MAX)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(trail_points(&self.mouse_trail)).name("Mouse"));
                plot_ui.line(
                    Line::new(trail_points(&self.gaze_trail))
                        .name("Gaze")
                        .color(ACCENT)
                        .width(3.0)
                        .style(LineStyle::dotted_dense()),
                );
                if !self.clicks.is_empty() {
                    plot_ui.points(
                        Points::new(trail_points(&self.clicks))
                            .name("Clicks")
                            .radius(4.0)
                            .color(Color32::from_rgb(244, 67, 54)),
                    );
                }
            });
    }
}

fn trail_points(series: &RollingSeries<Point>) -> PlotPoints {
    series.iter().map(|p| p.to_array()).collect()
}

fn badge(ui: &mut egui::Ui, text: String, fill: Color32) {
    egui::Frame::none()
        .fill(fill)
        .inner_margin(6.0)
        .rounding(4.0)
        .show(ui, |ui| {
            ui.label(RichText::new(text).strong().color(ON_BADGE));
        });
}

pub(crate) fn placeholder(ui: &mut egui::Ui, text: &str, height: f32) {
    egui::Frame::none()
        .fill(PANEL_BG)
        .stroke(egui::Stroke::new(1.0, ACCENT))
        .show(ui, |ui| {
            ui.set_min_height(height);
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new(text).color(PANEL_TEXT));
            });
        });
}
