use log::{debug, info};

use crate::telemetry::{Emotion, KeyHeat, KeyHeatConfig, Point, RollingSeries, Sample, Workload};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RealTimeConfig {
    /// Points kept in the mouse, gaze and click trails.
    pub trail_length: usize,
    pub key_heat: KeyHeatConfig,
}

impl Default for RealTimeConfig {
    fn default() -> Self {
        Self {
            trail_length: 50,
            key_heat: KeyHeatConfig::default(),
        }
    }
}

/// Live monitoring state for one player.
#[derive(Debug)]
pub struct RealTimeView {
    pub player_id: Option<String>,
    pub emotion: Emotion,
    pub heart_rate: u32,
    pub workload: Workload,
    pub face_detected: bool,
    pub mouse_trail: RollingSeries<Point>,
    pub gaze_trail: RollingSeries<Point>,
    pub clicks: RollingSeries<Point>,
    pub key_heat: KeyHeat,
    samples_seen: u64,
}

impl Default for RealTimeView {
    fn default() -> Self {
        Self::new(RealTimeConfig::default())
    }
}

impl RealTimeView {
    pub fn new(config: RealTimeConfig) -> Self {
        info!("real-time view: trail {} points, key heat {:?}", config.trail_length, config.key_heat);
        Self {
            player_id: None,
            emotion: Emotion::Calm,
            heart_rate: 72,
            workload: Workload::Medium,
            face_detected: false,
            mouse_trail: RollingSeries::new(config.trail_length),
            gaze_trail: RollingSeries::new(config.trail_length),
            clicks: RollingSeries::new(config.trail_length),
            key_heat: KeyHeat::new(config.key_heat),
            samples_seen: 0,
        }
    }

    /// Applies new tuning without dropping collected data.
    pub fn reconfigure(&mut self, config: RealTimeConfig) {
        self.mouse_trail.set_capacity(config.trail_length);
        self.gaze_trail.set_capacity(config.trail_length);
        self.clicks.set_capacity(config.trail_length);
        self.key_heat.set_config(config.key_heat);
    }

    /// Folds one sample into the view. Scalars are last-write-wins; a missing
    /// emotion keeps the previous one. Coordinates are taken as given.
    pub fn update(&mut self, sample: Sample) {
        let Sample {
            player_id,
            emotion,
            heart_rate,
            workload,
            face_detected,
            mouse,
            mouse_clicked,
            gaze,
            pressed_keys,
        } = sample;

        self.player_id = Some(player_id);
        if let Some(emotion) = emotion {
            self.emotion = emotion;
        }
        self.heart_rate = heart_rate;
        self.workload = workload;
        self.face_detected = face_detected;

        self.mouse_trail.push(mouse);
        self.gaze_trail.push(gaze);
        if mouse_clicked {
            self.clicks.push(mouse);
        }

        for key in pressed_keys {
            self.key_heat.press(key);
        }

        self.samples_seen += 1;
        debug!(
            "sample #{}: {} bpm, {:?}, {:?}, face {}",
            self.samples_seen, heart_rate, self.emotion, workload, face_detected
        );
    }

    pub fn decay_tick(&mut self) {
        if !self.key_heat.is_cold() {
            self.key_heat.decay();
        }
    }

    pub fn samples_seen(&self) -> u64 {
        self.samples_seen
    }
}
