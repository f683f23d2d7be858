use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::{
    Emotion, IntensityGrid, KeyPos, Point, Sample, Workload, AXIS_MAX, KEY_COLS, KEY_ROWS,
};

pub const ATTENTION_REGIONS: [&str; 5] = ["Minimap", "Skill bar", "Battlefield", "Resources", "Inventory"];
pub const GAZE_GRID_ROWS: usize = 6;
pub const GAZE_GRID_COLS: usize = 8;
/// Spokes of the radial trajectory chart, 0° through 360° inclusive.
pub const RADIAL_SPOKES: usize = 9;
pub const RADIAL_STEP_DEG: f64 = 45.0;

/// One post-match aggregate update.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisFrame {
    pub heart_rate: u32,
    pub workload: f64,
    /// `(angle_deg, radius)` pairs.
    pub radial: Vec<(f64, f64)>,
    pub attention: [f64; ATTENTION_REGIONS.len()],
    pub gaze_grid: IntensityGrid,
    pub keyboard_grid: IntensityGrid,
}

/// Anything that can feed the dashboard.
pub trait TelemetrySource {
    fn next_sample(&mut self) -> Sample;

    fn next_analysis(&mut self) -> AnalysisFrame;

    /// Renames the player attached to future samples. Sources that read the
    /// identity from the device ignore this.
    fn set_player(&mut self, _player_id: &str) {}
}

/// Random telemetry for demos.
#[derive(Debug)]
pub struct SimulatedSource<R = StdRng> {
    rng: R,
    player_id: String,
}

impl SimulatedSource<StdRng> {
    pub fn from_entropy(player_id: impl Into<String>) -> Self {
        Self::new(StdRng::from_os_rng(), player_id)
    }

    pub fn seeded(seed: u64, player_id: impl Into<String>) -> Self {
        Self::new(StdRng::seed_from_u64(seed), player_id)
    }
}

impl<R: Rng> SimulatedSource<R> {
    pub fn new(rng: R, player_id: impl Into<String>) -> Self {
        Self {
            rng,
            player_id: player_id.into(),
        }
    }

    fn random_keys(&mut self) -> BTreeSet<KeyPos> {
        let count = self.rng.random_range(0..=3);
        (0..count)
            .filter_map(|_| {
                let row = self.rng.random_range(0..KEY_ROWS);
                let col = self.rng.random_range(0..KEY_COLS);
                KeyPos::new(row, col)
            })
            .collect()
    }

    fn random_grid(&mut self, rows: usize, cols: usize) -> IntensityGrid {
        IntensityGrid::from_fn(rows, cols, |_, _| self.rng.random_range(0..100) as f64 / 100.0)
    }
}

impl<R: Rng> TelemetrySource for SimulatedSource<R> {
    fn next_sample(&mut self) -> Sample {
        let x = self.rng.random_range(0..100) as f64;
        let y = self.rng.random_range(0..100) as f64;
        Sample {
            player_id: self.player_id.clone(),
            emotion: Emotion::ALL.choose(&mut self.rng).copied(),
            heart_rate: self.rng.random_range(60..140),
            workload: Workload::ALL
                .choose(&mut self.rng)
                .copied()
                .unwrap_or_default(),
            face_detected: self.rng.random_bool(0.8),
            mouse: Point::new(x, y),
            mouse_clicked: self.rng.random_bool(0.2),
            gaze: Point::new((x + 10.0) % AXIS_MAX, (y + 15.0) % AXIS_MAX),
            pressed_keys: self.random_keys(),
        }
    }

    fn next_analysis(&mut self) -> AnalysisFrame {
        let radial = (0..RADIAL_SPOKES)
            .map(|i| {
                let radius = 20.0 + self.rng.random_range(0..80) as f64;
                (i as f64 * RADIAL_STEP_DEG, radius)
            })
            .collect();
        let mut attention = [0.0; ATTENTION_REGIONS.len()];
        for value in &mut attention {
            *value = self.rng.random_range(2..10) as f64;
        }
        AnalysisFrame {
            heart_rate: 70 + self.rng.random_range(0..60),
            workload: self.rng.random_range(40..120) as f64,
            radial,
            attention,
            gaze_grid: self.random_grid(GAZE_GRID_ROWS, GAZE_GRID_COLS),
            keyboard_grid: self.random_grid(KEY_ROWS, KEY_COLS),
        }
    }

    fn set_player(&mut self, player_id: &str) {
        self.player_id = player_id.to_owned();
    }
}
