use std::collections::BTreeSet;

use super::KeyPos;

/// Upper bound of the normalized screen space used for mouse and gaze points.
pub const AXIS_MAX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamps both axes into `0..=AXIS_MAX`. NaN collapses to 0.
    pub fn clamped(self) -> Self {
        let clamp = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, AXIS_MAX) };
        Self {
            x: clamp(self.x),
            y: clamp(self.y),
        }
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Emotion {
    #[default]
    Calm,
    Happy,
    Sad,
    Surprised,
    Fearful,
    Angry,
    Contemptuous,
    Disgusted,
}

impl Emotion {
    pub const ALL: [Emotion; 8] = [
        Emotion::Calm,
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Surprised,
        Emotion::Fearful,
        Emotion::Angry,
        Emotion::Contemptuous,
        Emotion::Disgusted,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Calm => "Calm",
            Emotion::Happy => "Happy",
            Emotion::Sad => "Sad",
            Emotion::Surprised => "Surprised",
            Emotion::Fearful => "Fearful",
            Emotion::Angry => "Angry",
            Emotion::Contemptuous => "Contemptuous",
            Emotion::Disgusted => "Disgusted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Workload {
    Low,
    #[default]
    Medium,
    High,
}

impl Workload {
    pub const ALL: [Workload; 3] = [Workload::Low, Workload::Medium, Workload::High];

    pub fn label(&self) -> &'static str {
        match self {
            Workload::Low => "Low",
            Workload::Medium => "Medium",
            Workload::High => "High",
        }
    }
}

/// One tick of real-time player telemetry.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub player_id: String,
    /// `None` when the classifier produced nothing this tick.
    pub emotion: Option<Emotion>,
    pub heart_rate: u32,
    pub workload: Workload,
    pub face_detected: bool,
    pub mouse: Point,
    pub mouse_clicked: bool,
    pub gaze: Point,
    pub pressed_keys: BTreeSet<KeyPos>,
}

impl Default for Sample {
    fn default() -> Self {
        Self {
            player_id: String::new(),
            emotion: None,
            heart_rate: 72,
            workload: Workload::default(),
            face_detected: false,
            mouse: Point::default(),
            mouse_clicked: false,
            gaze: Point::default(),
            pressed_keys: BTreeSet::new(),
        }
    }
}

impl Sample {
    /// Copy of the sample with mouse and gaze clamped into the screen space.
    pub fn clamped(mut self) -> Self {
        self.mouse = self.mouse.clamped();
        self.gaze = self.gaze.clamped();
        self
    }

    pub fn is_in_range(&self) -> bool {
        self.mouse == self.mouse.clamped() && self.gaze == self.gaze.clamped()
    }
}
