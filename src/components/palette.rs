use egui::Color32;

use crate::telemetry::{Emotion, Workload};

pub const PANEL_BG: Color32 = Color32::from_rgb(11, 26, 46);
pub const PANEL_TEXT: Color32 = Color32::from_rgb(153, 204, 255);
pub const ACCENT: Color32 = Color32::from_rgb(30, 144, 255);
pub const ON_BADGE: Color32 = Color32::from_rgb(2, 26, 47);

const GOOD: Color32 = Color32::from_rgb(76, 175, 80);
const WARN: Color32 = Color32::from_rgb(255, 193, 7);
const ALERT: Color32 = Color32::from_rgb(244, 67, 54);

pub fn emotion_color(emotion: Emotion) -> Color32 {
    match emotion {
        Emotion::Calm => Color32::from_rgb(173, 216, 230),
        Emotion::Happy => Color32::from_rgb(255, 223, 0),
        Emotion::Sad => Color32::from_rgb(96, 125, 139),
        Emotion::Surprised => Color32::from_rgb(255, 152, 0),
        Emotion::Fearful => Color32::from_rgb(156, 39, 176),
        Emotion::Angry => Color32::from_rgb(229, 57, 53),
        Emotion::Contemptuous => Color32::from_rgb(143, 188, 143),
        Emotion::Disgusted => Color32::from_rgb(85, 107, 47),
    }
}

pub fn workload_color(workload: Workload) -> Color32 {
    match workload {
        Workload::Low => GOOD,
        Workload::Medium => WARN,
        Workload::High => ALERT,
    }
}

pub fn heart_rate_color(bpm: u32) -> Color32 {
    match bpm {
        0..=89 => GOOD,
        90..=109 => WARN,
        _ => ALERT,
    }
}

pub fn face_color(detected: bool) -> Color32 {
    if detected {
        Color32::from_rgb(139, 195, 74)
    } else {
        ALERT
    }
}

/// Teal-blue to magenta ramp for a ratio in `0.0..=1.0`; out-of-range input is clamped.
pub fn heat_color(ratio: f64) -> Color32 {
    let v = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    let r = (v * 255.0) as u8;
    let g = ((1.0 - v) * 120.0) as u8;
    let b = 255 - g / 2;
    Color32::from_rgba_unmultiplied(r, g, b, 210)
}
