use super::state::Settings;

/// Returns `true` when a value that affects the views changed this frame.
pub fn show_settings_window(ctx: &egui::Context, settings: &mut Settings) -> bool {
    if !settings.is_visible() {
        return false;
    }

    let before = settings.clone();

    egui::Window::new("⚙ Settings")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("UI Scale:");
                ui.add(egui::Slider::new(&mut settings.scale, 0.5..=2.0).step_by(0.1));
            });

            ui.horizontal(|ui| {
                ui.label("Font Size:");
                ui.add(egui::Slider::new(&mut settings.font_size, 8.0..=32.0).step_by(1.0));
            });

            ui.separator();
            ui.heading("Sampling");

            ui.horizontal(|ui| {
                ui.label("Player:");
                ui.text_edit_singleline(&mut settings.player_id);
            });
            ui.horizontal(|ui| {
                ui.label("Sample interval:");
                ui.add(
                    egui::Slider::new(&mut settings.sample_interval_ms, 100..=10_000).suffix(" ms"),
                );
            });
            ui.horizontal(|ui| {
                ui.label("Analysis interval:");
                ui.add(
                    egui::Slider::new(&mut settings.analysis_interval_ms, 100..=10_000)
                        .suffix(" ms"),
                );
            });
            ui.horizontal(|ui| {
                ui.label("Trail length:");
                ui.add(egui::Slider::new(&mut settings.trail_length, 10..=500));
            });
            ui.horizontal(|ui| {
                ui.label("Timeline length:");
                ui.add(egui::Slider::new(&mut settings.timeline_length, 10..=1_000));
            });

            ui.separator();
            ui.heading("Key heat");

            ui.horizontal(|ui| {
                ui.label("Decay interval:");
                ui.add(
                    egui::Slider::new(&mut settings.decay_interval_ms, 50..=5_000).suffix(" ms"),
                );
            });
            ui.horizontal(|ui| {
                ui.label("Cap:");
                ui.add(egui::Slider::new(&mut settings.key_heat.cap, 1..=500));
            });
            let cap = settings.key_heat.cap;
            ui.horizontal(|ui| {
                ui.label("Press step:");
                ui.add(egui::Slider::new(&mut settings.key_heat.press_step, 1..=cap));
            });
            ui.horizontal(|ui| {
                ui.label("Decay step:");
                ui.add(egui::Slider::new(&mut settings.key_heat.decay_step, 1..=cap));
            });

            ui.separator();
            ui.horizontal(|ui| {
                ui.label("Pressure threshold:");
                ui.add(
                    egui::Slider::new(&mut settings.pressure_threshold, 60..=220).suffix(" bpm"),
                );
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Reset").clicked() {
                    settings.reset_sampling();
                }
                if ui.button("Close").clicked() {
                    settings.hide();
                }
            });
        });

    *settings = settings.clone().sanitized();
    *settings != before
}
