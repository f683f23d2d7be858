use log::{debug, info};

use crate::telemetry::{
    AnalysisFrame, IntensityGrid, RollingSeries, ATTENTION_REGIONS, GAZE_GRID_COLS,
    GAZE_GRID_ROWS, KEY_COLS, KEY_ROWS,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostMatchConfig {
    /// Points kept in the heart-rate and workload timelines.
    pub timeline_length: usize,
    /// Heart rate above which the report switches to its high-pressure variant.
    pub pressure_threshold: u32,
}

impl Default for PostMatchConfig {
    fn default() -> Self {
        Self {
            timeline_length: 100,
            pressure_threshold: 110,
        }
    }
}

pub const HIGH_PRESSURE_SUMMARY: &str = "Overall: heavy pressure late in the match";
pub const CONTROLLED_SUMMARY: &str = "Overall: well controlled";

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub summary: String,
    pub advantages: String,
    pub issues: String,
    pub advice: String,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            summary: "Overall: generating...".to_owned(),
            advantages: String::new(),
            issues: String::new(),
            advice: String::new(),
        }
    }
}

impl Report {
    /// Builds the report from the latest heart rate.
    pub fn for_heart_rate(heart_rate: u32, threshold: u32) -> Self {
        let advantages = "Emotional stability: the emotion curve stays flat and heart-rate swings are contained.\n\
                          Efficient input: frequently used keys are tightly clustered."
            .to_owned();

        if heart_rate > threshold {
            Self {
                summary: HIGH_PRESSURE_SUMMARY.to_owned(),
                advantages,
                issues: "Stress resistance: heart rate climbs quickly after a lost fight.\n\
                         Attention split: too little time spent on the wider battlefield."
                    .to_owned(),
                advice: "Breathing drills between rounds and high-pressure scrim practice.\n\
                         Field-of-view exercises to track more targets at once."
                    .to_owned(),
            }
        } else {
            Self {
                summary: CONTROLLED_SUMMARY.to_owned(),
                advantages,
                issues: "Attention split: the battlefield could use more coverage.".to_owned(),
                advice: "Keep the current routine; add field-of-view exercises to track more targets at once."
                    .to_owned(),
            }
        }
    }
}

/// Post-match analysis state. Everything except the timelines is replaced on each refresh.
#[derive(Debug)]
pub struct PostMatchView {
    pub heart_rate: RollingSeries<[f64; 2]>,
    pub workload: RollingSeries<[f64; 2]>,
    /// `(angle_deg, radius)` samples of mouse trajectory density.
    pub radial: Vec<(f64, f64)>,
    pub attention: [f64; ATTENTION_REGIONS.len()],
    pub gaze_grid: IntensityGrid,
    pub keyboard_grid: IntensityGrid,
    pub report: Report,
    pressure_threshold: u32,
    ticks: u64,
}

impl Default for PostMatchView {
    fn default() -> Self {
        Self::new(PostMatchConfig::default())
    }
}

impl PostMatchView {
    pub fn new(config: PostMatchConfig) -> Self {
        info!(
            "post-match view: timeline {} points, pressure above {} bpm",
            config.timeline_length, config.pressure_threshold
        );
        Self {
            heart_rate: RollingSeries::new(config.timeline_length),
            workload: RollingSeries::new(config.timeline_length),
            radial: Vec::new(),
            attention: [5.0, 7.0, 3.0, 9.0, 4.0],
            gaze_grid: IntensityGrid::new(GAZE_GRID_ROWS, GAZE_GRID_COLS),
            keyboard_grid: IntensityGrid::new(KEY_ROWS, KEY_COLS),
            report: Report::default(),
            pressure_threshold: config.pressure_threshold,
            ticks: 0,
        }
    }

    pub fn reconfigure(&mut self, config: PostMatchConfig) {
        self.heart_rate.set_capacity(config.timeline_length);
        self.workload.set_capacity(config.timeline_length);
        self.pressure_threshold = config.pressure_threshold;
    }

    pub fn refresh(&mut self, frame: AnalysisFrame) {
        let AnalysisFrame {
            heart_rate,
            workload,
            radial,
            attention,
            gaze_grid,
            keyboard_grid,
        } = frame;

        let x = self.ticks as f64;
        self.heart_rate.push([x, heart_rate as f64]);
        self.workload.push([x, workload]);
        self.ticks += 1;

        self.radial = radial;
        self.attention = attention;
        self.gaze_grid = gaze_grid;
        self.keyboard_grid = keyboard_grid;
        self.report = Report::for_heart_rate(heart_rate, self.pressure_threshold);

        debug!("analysis tick {}: {} bpm, workload {:.0}", self.ticks, heart_rate, workload);
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Mean heart rate over the timeline window.
    pub fn average_heart_rate(&self) -> Option<f64> {
        if self.heart_rate.is_empty() {
            return None;
        }
        let sum: f64 = self.heart_rate.iter().map(|p| p[1]).sum();
        Some(sum / self.heart_rate.len() as f64)
    }

    pub fn peak_heart_rate(&self) -> Option<f64> {
        self.heart_rate.iter().map(|p| p[1]).reduce(f64::max)
    }

    /// Region that drew the most attention in the latest frame.
    pub fn focus_region(&self) -> &'static str {
        let idx = self
            .attention
            .iter()
            .enumerate()
            .fold(0, |best, (i, &v)| if v > self.attention[best] { i } else { best });
        ATTENTION_REGIONS[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(heart_rate: u32) -> AnalysisFrame {
        AnalysisFrame {
            heart_rate,
            workload: 80.0,
            radial: (0..9).map(|i| (i as f64 * 45.0, 50.0)).collect(),
            attention: [2.0, 3.0, 9.0, 4.0, 5.0],
            gaze_grid: IntensityGrid::new(GAZE_GRID_ROWS, GAZE_GRID_COLS),
            keyboard_grid: IntensityGrid::new(KEY_ROWS, KEY_COLS),
        }
    }

    #[test]
    fn high_heart_rate_selects_pressure_report() {
        let mut view = PostMatchView::default();
        view.refresh(frame(120));
        assert_eq!(view.report.summary, HIGH_PRESSURE_SUMMARY);

        view.refresh(frame(110));
        assert_eq!(view.report.summary, CONTROLLED_SUMMARY);
    }

    #[test]
    fn timeline_is_bounded_and_keeps_advancing() {
        let mut view = PostMatchView::default();
        for i in 0..250 {
            view.refresh(frame(70 + i % 50));
        }
        assert_eq!(view.heart_rate.len(), 100);
        assert_eq!(view.workload.len(), 100);
        assert_eq!(view.heart_rate.iter().next().map(|p| p[0]), Some(150.0));
        assert_eq!(view.heart_rate.last().map(|p| p[0]), Some(249.0));
        assert_eq!(view.ticks(), 250);
    }

    #[test]
    fn datasets_are_replaced_wholesale() {
        let mut view = PostMatchView::default();
        view.refresh(frame(90));
        let mut next = frame(95);
        next.radial = vec![(0.0, 99.0); 9];
        next.gaze_grid.set(0, 0, 1.0);
        view.refresh(next);

        assert!(view.radial.iter().all(|&(_, r)| r == 99.0));
        assert_eq!(view.gaze_grid.get(0, 0), Some(1.0));
        assert_eq!(view.focus_region(), "Battlefield");
    }

    #[test]
    fn averages_cover_window() {
        let mut view = PostMatchView::new(PostMatchConfig {
            timeline_length: 2,
            ..Default::default()
        });
        assert_eq!(view.average_heart_rate(), None);
        view.refresh(frame(60));
        view.refresh(frame(80));
        view.refresh(frame(100));
        assert_eq!(view.average_heart_rate(), Some(90.0));
        assert_eq!(view.peak_heart_rate(), Some(100.0));
    }

    #[test]
    fn threshold_is_configurable() {
        let mut view = PostMatchView::default();
        view.reconfigure(PostMatchConfig {
            timeline_length: 100,
            pressure_threshold: 90,
        });
        view.refresh(frame(100));
        assert_eq!(view.report.summary, HIGH_PRESSURE_SUMMARY);
    }
}
