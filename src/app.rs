use crate::components::{show_settings_window, Settings};
use crate::dashboard::Dashboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
pub enum Tab {
    #[default]
    RealTime,
    PostMatch,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::RealTime => "Real-time monitoring",
            Tab::PostMatch => "Post-match analysis",
        }
    }
}

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PlayerScopeApp {
    settings: Settings,
    active_tab: Tab,
    #[serde(skip)]
    dashboard: Option<Dashboard>,
}

impl Default for PlayerScopeApp {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            active_tab: Tab::default(),
            dashboard: None,
        }
    }
}

impl PlayerScopeApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        // Load previous app state (if any).
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        app.settings = app.settings.clone().sanitized();
        app
    }

    fn dashboard(&mut self) -> &mut Dashboard {
        let settings = &self.settings;
        self.dashboard
            .get_or_insert_with(|| Dashboard::simulated(settings))
    }
}

impl eframe::App for PlayerScopeApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.settings.apply(ctx);
        let now = ctx.input(|i| i.time);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.add_space(16.0);
                for tab in [Tab::RealTime, Tab::PostMatch] {
                    ui.selectable_value(&mut self.active_tab, tab, tab.title());
                }

                ui.add_space(16.0);
                let pause_label = if self.settings.paused { "▶ Resume" } else { "⏸ Pause" };
                if ui.button(pause_label).clicked() {
                    self.settings.paused = !self.settings.paused;
                    let settings = self.settings.clone();
                    self.dashboard().apply_settings(&settings);
                }

                ui.add_space(16.0);
                egui::widgets::global_theme_preference_buttons(ui);

                ui.add_space(16.0);
                if ui.button("⚙").clicked() {
                    self.settings.show();
                }
            });
        });

        if show_settings_window(ctx, &mut self.settings) {
            let settings = self.settings.clone();
            self.dashboard().apply_settings(&settings);
        }

        let active_tab = self.active_tab;
        let dashboard = self.dashboard();
        dashboard.step(now);
        let wakeup = dashboard.next_wakeup(now);

        egui::CentralPanel::default().show(ctx, |ui| match active_tab {
            Tab::RealTime => dashboard.realtime.show(ui),
            Tab::PostMatch => dashboard.post_match.show(ui),
        });

        ctx.request_repaint_after(wakeup);
    }
}
