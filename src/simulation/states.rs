//! Core state types for the oscillator simulation.
//!
//! Defines the phase-space and trajectory structs:
//! - `InitialCondition` — one (q, p) pair per requested trajectory
//! - `Sample` — one (t, q) pair of a trajectory
//! - `TimeSeries` — the full precomputed trajectory of one initial condition
//!
//! A `TimeSeries` is produced once by an integrator and read-only afterward.

#[derive(Debug, Clone, Copy)]
pub struct InitialCondition {
    pub q: f64, // initial position
    pub p: f64, // initial momentum
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub t: f64, // time stamp, t = i * dt
    pub q: f64, // position at that step
}

/// Ordered, equally spaced (t, q) samples for one initial condition.
/// Length is always `Parameters::steps()`; t values are strictly increasing.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    pub samples: Vec<Sample>,
}

impl TimeSeries {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            samples: Vec::with_capacity(n),
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
