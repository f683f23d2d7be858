use std::time::Duration;

use log::{debug, info};

use crate::components::{PostMatchView, RealTimeView, Settings};
use crate::telemetry::{SampleInbox, SimulatedSource, TelemetrySource, Ticker};

/// The scheduled work of the dashboard: one ticker per recurring task and the
/// two views they feed. Driven from the UI thread once per frame.
pub struct Dashboard<S = SimulatedSource> {
    source: S,
    inbox: SampleInbox,
    pub realtime: RealTimeView,
    pub post_match: PostMatchView,
    sample_ticker: Ticker,
    decay_ticker: Ticker,
    analysis_ticker: Ticker,
    paused: bool,
}

impl Dashboard<SimulatedSource> {
    pub fn simulated(settings: &Settings) -> Self {
        Self::new(SimulatedSource::from_entropy(settings.player_id.clone()), settings)
    }
}

impl<S: TelemetrySource> Dashboard<S> {
    pub fn new(source: S, settings: &Settings) -> Self {
        info!(
            "dashboard: samples every {:?}, decay every {:?}, analysis every {:?}",
            settings.sample_interval(),
            settings.decay_interval(),
            settings.analysis_interval()
        );
        Self {
            source,
            inbox: SampleInbox::default(),
            realtime: RealTimeView::new(settings.realtime_config()),
            post_match: PostMatchView::new(settings.post_match_config()),
            sample_ticker: Ticker::new(settings.sample_interval()),
            decay_ticker: Ticker::new(settings.decay_interval()),
            analysis_ticker: Ticker::new(settings.analysis_interval()),
            paused: settings.paused,
        }
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.sample_ticker.set_interval(settings.sample_interval());
        self.decay_ticker.set_interval(settings.decay_interval());
        self.analysis_ticker.set_interval(settings.analysis_interval());
        self.realtime.reconfigure(settings.realtime_config());
        self.post_match.reconfigure(settings.post_match_config());
        self.source.set_player(&settings.player_id);
        self.paused = settings.paused;
        info!("settings applied: {:?}", settings);
    }

    pub fn inbox_mut(&mut self) -> &mut SampleInbox {
        &mut self.inbox
    }

    /// Runs whatever is due at `now` (seconds).
    pub fn step(&mut self, now: f64) {
        let sample_due = self.sample_ticker.poll(now);
        let decay_due = self.decay_ticker.poll(now);
        let analysis_due = self.analysis_ticker.poll(now);

        if !self.paused {
            if sample_due {
                let sample = self.source.next_sample();
                self.inbox.push(sample);
            }
            if analysis_due {
                let frame = self.source.next_analysis();
                self.post_match.refresh(frame);
                debug!("frame {now:.2}s: post-match refreshed");
            }
        }

        for sample in self.inbox.drain() {
            self.realtime.update(sample);
        }
        // Decay keeps running while paused so the grid cools down.
        if decay_due {
            self.realtime.decay_tick();
        }
    }

    /// Time until the next scheduled task, for `request_repaint_after`.
    pub fn next_wakeup(&self, now: f64) -> Duration {
        [
            &self.sample_ticker,
            &self.decay_ticker,
            &self.analysis_ticker,
        ]
        .iter()
        .map(|t| t.time_until_due(now))
        .min()
        .unwrap_or_default()
    }
}
