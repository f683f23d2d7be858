use std::collections::VecDeque;

use playerscope::components::{Settings, CONTROLLED_SUMMARY, HIGH_PRESSURE_SUMMARY};
use playerscope::telemetry::{
    AnalysisFrame, IntensityGrid, KeyHeat, KeyHeatConfig, KeyPos, Point, RollingSeries, Sample,
    SimulatedSource, TelemetrySource,
};
use playerscope::Dashboard;

/// Replays prepared samples and frames, then repeats the last one.
struct Scripted {
    samples: VecDeque<Sample>,
    frames: VecDeque<AnalysisFrame>,
}

impl Scripted {
    fn new(samples: Vec<Sample>, frames: Vec<AnalysisFrame>) -> Self {
        Self {
            samples: samples.into(),
            frames: frames.into(),
        }
    }
}

impl TelemetrySource for Scripted {
    fn next_sample(&mut self) -> Sample {
        match self.samples.len() {
            0 => Sample::default(),
            1 => self.samples[0].clone(),
            _ => self.samples.pop_front().unwrap(),
        }
    }

    fn next_analysis(&mut self) -> AnalysisFrame {
        match self.frames.len() {
            0 => frame(80),
            1 => self.frames[0].clone(),
            _ => self.frames.pop_front().unwrap(),
        }
    }
}

fn frame(heart_rate: u32) -> AnalysisFrame {
    AnalysisFrame {
        heart_rate,
        workload: 60.0,
        radial: (0..9).map(|i| (i as f64 * 45.0, 40.0)).collect(),
        attention: [5.0; 5],
        gaze_grid: IntensityGrid::new(6, 8),
        keyboard_grid: IntensityGrid::new(4, 10),
    }
}

fn sample_at(i: u32) -> Sample {
    Sample {
        player_id: "Player A".to_owned(),
        heart_rate: 60 + i,
        mouse: Point::new(i as f64, i as f64),
        gaze: Point::new(i as f64, 0.0),
        ..Default::default()
    }
}

#[test]
fn rolling_series_scenario() {
    let mut series = RollingSeries::new(3);
    for p in [(1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)] {
        series.push(Point::from(p));
    }
    assert_eq!(
        series.as_vec(),
        vec![Point::new(2.0, 2.0), Point::new(3.0, 3.0), Point::new(4.0, 4.0)]
    );
}

#[test]
fn key_heat_scenario() {
    let mut heat = KeyHeat::new(KeyHeatConfig {
        cap: 50,
        press_step: 5,
        decay_step: 1,
    });
    let key = KeyPos::from_label("E").unwrap();
    for _ in 0..3 {
        heat.press(key);
    }
    assert_eq!(heat.heat(key), 15);
    for _ in 0..20 {
        heat.decay();
    }
    assert_eq!(heat.heat(key), 0);
}

#[test]
fn samples_flow_on_the_sample_interval() {
    let settings = Settings::default();
    let samples = (1..=10).map(sample_at).collect();
    let mut dashboard = Dashboard::new(Scripted::new(samples, vec![]), &settings);

    // First step arms the tickers.
    dashboard.step(0.0);
    assert_eq!(dashboard.realtime.samples_seen(), 0);

    let mut now = 0.0;
    for _ in 0..5 {
        now += 1.25;
        dashboard.step(now);
    }
    assert_eq!(dashboard.realtime.samples_seen(), 5);
    assert_eq!(dashboard.realtime.heart_rate, 65);
    assert_eq!(dashboard.realtime.mouse_trail.len(), 5);
}

#[test]
fn trail_never_exceeds_configured_length() {
    let mut settings = Settings::default();
    settings.trail_length = 10;
    let samples = (0..40).map(sample_at).collect();
    let mut dashboard = Dashboard::new(Scripted::new(samples, vec![]), &settings);
    dashboard.step(0.0);
    for i in 1..=40 {
        dashboard.step(i as f64 * 1.25);
        assert!(dashboard.realtime.mouse_trail.len() <= 10);
    }
    let xs: Vec<_> = dashboard.realtime.mouse_trail.iter().map(|p| p.x).collect();
    let expected: Vec<_> = (30..40).map(|i| i as f64).collect();
    assert_eq!(xs, expected);
}

#[test]
fn pressure_report_follows_latest_frame() {
    let settings = Settings::default();
    let mut dashboard = Dashboard::new(Scripted::new(vec![], vec![frame(120), frame(90)]), &settings);
    dashboard.step(0.0);

    dashboard.step(1.5);
    assert_eq!(dashboard.post_match.report.summary, HIGH_PRESSURE_SUMMARY);

    dashboard.step(3.0);
    assert_eq!(dashboard.post_match.report.summary, CONTROLLED_SUMMARY);
}

#[test]
fn pausing_stops_sampling_but_not_decay() {
    let mut settings = Settings::default();
    let key = KeyPos::from_label("Q").unwrap();
    let pressing = Sample {
        pressed_keys: [key].into_iter().collect(),
        ..sample_at(1)
    };
    let mut dashboard = Dashboard::new(Scripted::new(vec![pressing], vec![]), &settings);
    dashboard.step(0.0);
    dashboard.step(1.25);
    assert!(dashboard.realtime.key_heat.heat(key) > 0);

    settings.paused = true;
    dashboard.apply_settings(&settings);
    let mut now = 1.25;
    for _ in 0..20 {
        now += 0.3;
        dashboard.step(now);
    }
    assert_eq!(dashboard.realtime.samples_seen(), 1);
    assert_eq!(dashboard.realtime.key_heat.heat(key), 0);
}

#[test]
fn externally_queued_samples_are_clamped() {
    let settings = Settings::default();
    let mut dashboard = Dashboard::new(SimulatedSource::seeded(1, "Player A"), &settings);
    dashboard.inbox_mut().push(Sample {
        mouse: Point::new(180.0, -20.0),
        ..Default::default()
    });
    dashboard.step(0.0);
    assert_eq!(dashboard.realtime.mouse_trail.last(), Some(&Point::new(100.0, 0.0)));
}

#[test]
fn wakeup_tracks_the_nearest_ticker() {
    let settings = Settings::default();
    let mut dashboard = Dashboard::new(SimulatedSource::seeded(2, "Player A"), &settings);
    dashboard.step(10.0);
    let wakeup = dashboard.next_wakeup(10.1).as_secs_f64();
    assert!((wakeup - 0.2).abs() < 1e-6, "wakeup {wakeup}");
}

#[test]
fn simulated_run_keeps_invariants() {
    let settings = Settings::default();
    let mut dashboard = Dashboard::new(SimulatedSource::seeded(42, "Player A"), &settings);
    let cap = settings.key_heat.cap;
    let mut now = 0.0;
    for _ in 0..2_000 {
        now += 0.1;
        dashboard.step(now);
        assert!(dashboard.realtime.mouse_trail.len() <= settings.trail_length);
        assert!(dashboard.post_match.heart_rate.len() <= settings.timeline_length);
        assert!(KeyPos::all().all(|k| dashboard.realtime.key_heat.heat(k) <= cap));
    }
    assert!(dashboard.realtime.samples_seen() > 100);
    assert_eq!(dashboard.post_match.radial.len(), 9);
}
