//! Virtual playback clock and sample lookup
//!
//! The clock is the only mutable core state: one tick per rendered frame
//! advances it by dt scaled with the playback speed. The speed is an
//! artistic factor, not a physical rate. Once the time passes the horizon
//! the clock is stopped for good and further ticks do nothing.

use super::states::{Sample, TimeSeries};

#[derive(Debug, Clone)]
pub struct PlaybackClock {
    pub time: f64, // current virtual time
    pub speed_factor: f64, // increment scale per tick
    pub horizon: f64, // playback ends past this time
    stopped: bool,
}

impl PlaybackClock {
    /// New running clock at virtual time zero
    pub fn new(speed_factor: f64, horizon: f64) -> Self {
        Self {
            time: 0.0,
            speed_factor,
            horizon,
            stopped: false,
        }
    }

    /// Advance by dt * speed_factor. Transitions to Stopped on the first
    /// tick whose post-increment time exceeds the horizon; Stopped is
    /// terminal and later ticks are no-ops.
    pub fn tick(&mut self, dt: f64) {
        if self.stopped {
            return;
        }
        self.time += dt * self.speed_factor;
        if self.time > self.horizon {
            self.stopped = true;
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

/// Resolve the sample a series shows at `virtual_time`.
///
/// Nearest-past-sample policy: index = floor(virtual_time / dt), and the
/// sample is returned only when that index lands inside the series. Past
/// the end (or before t = 0) the series is simply not shown this tick —
/// no extrapolation, no error. There is no interpolation either; smooth
/// marker motion comes from dt being small against the playback speed.
pub fn lookup_sample(series: &TimeSeries, virtual_time: f64, dt: f64) -> Option<Sample> {
    let index = (virtual_time / dt).floor();
    if index < 0.0 || index >= series.len() as f64 {
        return None;
    }
    Some(series.samples[index as usize])
}
