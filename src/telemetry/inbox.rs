use log::warn;

use super::{RollingSeries, Sample};

/// Bounded hand-off between a sample source and the real-time view.
///
/// Samples are clamped into screen space on entry. When the producer runs
/// ahead of the render loop the oldest queued sample is dropped.
#[derive(Debug)]
pub struct SampleInbox {
    queue: RollingSeries<Sample>,
    dropped: u64,
}

impl Default for SampleInbox {
    fn default() -> Self {
        Self::new(8)
    }
}

impl SampleInbox {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: RollingSeries::new(capacity),
            dropped: 0,
        }
    }

    /// Queues a sample. Returns `true` if an older sample had to be dropped.
    pub fn push(&mut self, sample: Sample) -> bool {
        if !sample.is_in_range() {
            warn!(
                "clamping out-of-range sample from {}: mouse {:?} gaze {:?}",
                sample.player_id, sample.mouse, sample.gaze
            );
        }
        let dropped = self.queue.push(sample.clamped()).is_some();
        if dropped {
            self.dropped += 1;
            warn!("sample inbox full, dropped oldest ({} total)", self.dropped);
        }
        dropped
    }

    /// Takes every queued sample, oldest first.
    pub fn drain(&mut self) -> Vec<Sample> {
        self.queue.drain()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}
