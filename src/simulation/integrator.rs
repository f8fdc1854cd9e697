//! Fixed-step direct integration of the true equations of motion
//!
//! Semi-implicit (symplectic) Euler: the momentum is kicked with the force
//! at the current position, then the position drifts with the new momentum.
//! First order, one force evaluation per step, bounded long-term energy
//! error on conservative systems

use super::forces::ForceSet;
use super::params::Parameters;
use super::states::{Sample, TimeSeries};

/// Integrate one initial condition with fixed step `params.dt` over
/// `params.steps()` steps and return the full series.
///
/// Sample convention: the (t, q) pair recorded at step i carries the
/// pre-update time stamp t = i * dt and the post-update position. The
/// momentum update precedes the position update; both orderings together
/// are the literal numerical contract of this engine and changing either
/// changes the output.
pub fn symplectic_euler_series(
    q_init: f64,
    p_init: f64,
    forces: &ForceSet,
    params: &Parameters,
) -> TimeSeries {
    let dt = params.dt; // time step dt
    let m = params.m; // mass, for the drift p/m

    let steps = params.steps();
    let mut series = TimeSeries::with_capacity(steps);

    // Current phase-space state, advanced in place
    let mut q = q_init;
    let mut p = p_init;

    for i in 0..steps {
        let t = i as f64 * dt;

        // Force at the current position
        let f = forces.total_force(t, q);

        // Kick: p_n+1 = p_n + F(q_n) dt
        p += f * dt;

        // Drift: q_n+1 = q_n + (p_n+1 / m) dt
        q += (p / m) * dt;

        // Record after the update, stamped with this step's time
        series.samples.push(Sample { t, q });
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::forces::AnharmonicOscillator;

    fn test_params() -> Parameters {
        Parameters {
            m: 1.0,
            omega: 1.0,
            epsilon: 0.1,
            q0: 1.0,
            dt: 0.01,
            t_max: 1.0,
            x_min: 0.0,
            x_max: 1.0,
            y_min: -2.0,
            y_max: 2.0,
        }
    }

    #[test]
    fn first_sample_is_post_update() {
        let params = test_params();
        let forces = ForceSet::new().with(AnharmonicOscillator::from_params(&params));
        let series = symplectic_euler_series(1.0, 0.0, &forces, &params);

        // One kick-drift pair has already happened at t = 0
        let f0 = -1.0 * 1.0 * 1.0 * 1.0 * (1.0 + 1.5 * 0.1 * (1.0 / 1.0));
        let p1 = f0 * 0.01;
        let q1 = 1.0 + (p1 / 1.0) * 0.01;

        assert_eq!(series.samples[0].t, 0.0);
        assert_eq!(series.samples[0].q, q1);
    }

    #[test]
    fn non_finite_values_propagate() {
        let mut params = test_params();
        // Wildly unstable step size: the state blows up instead of erroring
        params.dt = 1.0e6;
        params.t_max = 1.0e7;
        let forces = ForceSet::new().with(AnharmonicOscillator::from_params(&params));
        let series = symplectic_euler_series(1.0, 0.0, &forces, &params);

        assert_eq!(series.len(), 10);
        assert!(
            series.samples.iter().any(|s| !s.q.is_finite()),
            "expected the blow-up to reach non-finite positions"
        );
    }
}
