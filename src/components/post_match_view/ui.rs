use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, Legend, Line, LineStyle, Plot, PlotPoints};

use super::state::PostMatchView;
use crate::components::heatmap::intensity_heatmap;
use crate::components::palette::ACCENT;
use crate::components::realtime_view::placeholder;
use crate::telemetry::ATTENTION_REGIONS;

const RADAR_MAX: f64 = 100.0;

impl PostMatchView {
    pub fn show(&self, ui: &mut egui::Ui) {
        let row_height = (ui.available_height() * 0.3).max(140.0);

        ui.columns(3, |columns| {
            self.identity_panel(&mut columns[0]);
            self.timeline_chart(&mut columns[1], row_height);
            self.radar_chart(&mut columns[2], row_height);
        });

        ui.add_space(8.0);
        ui.columns(3, |columns| {
            self.attention_chart(&mut columns[0], row_height);
            columns[1].group(|ui| {
                ui.strong("Gaze heatmap");
                intensity_heatmap(ui, &self.gaze_grid, row_height);
                let (row, col) = self.gaze_grid.hottest();
                ui.small(format!(
                    "hotspot r{row} c{col}, peak {:.2}, mean {:.2}",
                    self.gaze_grid.max(),
                    self.gaze_grid.mean()
                ));
            });
            columns[2].group(|ui| {
                ui.strong("Keyboard heatmap");
                intensity_heatmap(ui, &self.keyboard_grid, row_height);
            });
        });

        ui.add_space(8.0);
        self.report_panel(ui);
    }

    fn identity_panel(&self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.heading("Face and basic metrics");
            placeholder(ui, "3D/2D face model", 120.0);
            ui.label("Verification: passed");
            match self.average_heart_rate() {
                Some(avg) => ui.label(format!("Average heart rate: {avg:.0} bpm")),
                None => ui.label("Average heart rate: --"),
            };
            if let Some(peak) = self.peak_heart_rate() {
                ui.label(format!("Peak heart rate: {peak:.0} bpm"));
            }
            ui.label(format!("Main focus: {}", self.focus_region()));
        });
    }

    fn timeline_chart(&self, ui: &mut egui::Ui, height: f32) {
        ui.strong("Heart rate and workload");
        let heart_rate: PlotPoints = self.heart_rate.iter().copied().collect();
        let workload: PlotPoints = self.workload.iter().copied().collect();
        Plot::new("post_match_timeline")
            .height(height)
            .legend(Legend::default())
            .x_axis_label("Time")
            .y_axis_label("Intensity")
            .include_y(0.0)
            .include_y(160.0)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(heart_rate).name("Heart rate"));
                plot_ui.line(Line::new(workload).name("Workload"));
            });
    }

    fn radar_chart(&self, ui: &mut egui::Ui, height: f32) {
        ui.strong("Mouse trajectory density");
        let outline: PlotPoints = self
            .radial
            .iter()
            .map(|&(angle, radius)| polar(angle, radius))
            .collect();
        Plot::new("post_match_radar")
            .height(height)
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .include_x(-RADAR_MAX)
            .include_x(RADAR_MAX)
            .include_y(-RADAR_MAX)
            .include_y(RADAR_MAX)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                for ring in [25.0, 50.0, 75.0, RADAR_MAX] {
                    let circle: PlotPoints =
                        (0..=72).map(|i| polar(i as f64 * 5.0, ring)).collect();
                    plot_ui.line(
                        Line::new(circle)
                            .color(Color32::from_gray(90))
                            .style(LineStyle::dashed_dense()),
                    );
                }
                plot_ui.line(Line::new(outline).name("Trajectory").color(ACCENT).width(2.0));
            });
    }

    fn attention_chart(&self, ui: &mut egui::Ui, height: f32) {
        ui.strong("Gaze attention split");
        let bars: Vec<Bar> = self
            .attention
            .iter()
            .zip(ATTENTION_REGIONS)
            .enumerate()
            .map(|(i, (&value, name))| Bar::new(i as f64, value).name(name).width(0.6))
            .collect();
        Plot::new("post_match_attention")
            .height(height)
            .include_y(0.0)
            .include_y(10.0)
            .x_axis_formatter(|mark, _range| {
                ATTENTION_REGIONS
                    .get(mark.value.round() as usize)
                    .filter(|_| mark.value >= 0.0 && mark.value.fract() == 0.0)
                    .map(|name| (*name).to_owned())
                    .unwrap_or_default()
            })
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).name("Attention").color(ACCENT));
            });
    }

    fn report_panel(&self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.heading("Post-match brief");
            ui.label(RichText::new(&self.report.summary).strong());
            ui.columns(3, |columns| {
                report_section(&mut columns[0], "Strengths", &self.report.advantages);
                report_section(&mut columns[1], "Needs work", &self.report.issues);
                report_section(&mut columns[2], "Advice", &self.report.advice);
            });
        });
    }
}

fn report_section(ui: &mut egui::Ui, title: &str, body: &str) {
    ui.strong(title);
    egui::ScrollArea::vertical()
        .id_salt(title)
        .max_height(90.0)
        .show(ui, |ui| {
            ui.label(body);
        });
}

/// Compass-style polar to plot coordinates: 0° points up, angles run clockwise.
fn polar(angle_deg: f64, radius: f64) -> [f64; 2] {
    let theta = angle_deg.to_radians();
    [radius * theta.sin(), radius * theta.cos()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_zero_points_up_and_ninety_right() {
        let [x, y] = polar(0.0, 10.0);
        assert!(x.abs() < 1e-9 && (y - 10.0).abs() < 1e-9);
        let [x, y] = polar(90.0, 10.0);
        assert!((x - 10.0).abs() < 1e-9 && y.abs() < 1e-9);
    }
}
