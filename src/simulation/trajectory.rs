//! Build one trajectory per initial condition
//!
//! The two engines share the same input/output contract, so the choice is a
//! plain tagged variant dispatched per condition. Conditions are independent
//! (each build only reads `Parameters` and one `InitialCondition`), so the
//! batch is mapped in parallel and collected back in input order.

use rayon::prelude::*;

use super::cpt::cpt_series;
use super::error::SimResult;
use super::forces::{AnharmonicOscillator, ForceSet};
use super::integrator::symplectic_euler_series;
use super::params::Parameters;
use super::states::{InitialCondition, TimeSeries};

/// Which trajectory engine to run for a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorMode {
    /// Semi-implicit Euler on the true equations of motion
    Direct,
    /// First-order canonical perturbation theory, sample-independent
    Cpt,
}

/// One built trajectory: the series plus its display identity.
/// Input order defines both, so series i keeps the label and hue of
/// initial condition i.
#[derive(Debug, Clone)]
pub struct Trajectory {
    pub label: String, // legend text, "q(0)=…, p(0)=…"
    pub hue: f32, // display hue in degrees, index * 90 mod 360
    pub series: TimeSeries,
}

/// Build one `TimeSeries` per initial condition, in input order.
///
/// Pure and deterministic: identical inputs give identical output. A single
/// out-of-domain condition fails the whole batch — a partial set would
/// misrepresent the direct-vs-CPT comparison this exists to draw.
pub fn build_trajectories(
    initial_conditions: &[InitialCondition],
    params: &Parameters,
    mode: IntegratorMode,
) -> SimResult<Vec<Trajectory>> {
    initial_conditions
        .par_iter()
        .enumerate()
        .map(|(index, ic)| {
            let series = build_one(*ic, params, mode)?;
            Ok(Trajectory {
                label: format!("q(0)={}, p(0)={}", ic.q, ic.p),
                hue: (index as f32 * 90.0) % 360.0,
                series,
            })
        })
        .collect()
}

fn build_one(ic: InitialCondition, params: &Parameters, mode: IntegratorMode) -> SimResult<TimeSeries> {
    match mode {
        IntegratorMode::Direct => {
            let forces = ForceSet::new().with(AnharmonicOscillator::from_params(params));
            Ok(symplectic_euler_series(ic.q, ic.p, &forces, params))
        }
        IntegratorMode::Cpt => cpt_series(ic, params),
    }
}
