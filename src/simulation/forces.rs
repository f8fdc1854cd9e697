//! Force contributors for the direct equations of motion
//!
//! Defines the scalar force trait, the summing `ForceSet`, and the
//! weakly anharmonic oscillator force used by the direct integrator

use crate::simulation::params::Parameters;

/// Collection of force terms acting on the oscillator
/// Each term implements [`Force`] and their contributions are summed
/// into a single scalar force
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Total force at time `t` and position `q`: the sum of all terms
    pub fn total_force(&self, t: f64, q: f64) -> f64 {
        let mut f = 0.0;
        for term in &self.terms {
            f += term.force(t, q);
        }
        f
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for scalar force sources on the 1-DOF oscillator
pub trait Force {
    fn force(&self, t: f64, q: f64) -> f64;
}

/// Harmonic restoring force with a cubic perturbation:
/// F = -m omega^2 q (1 + (3/2) epsilon q / q0)
///
/// No clamping: with unstable parameters q and p grow without bound and the
/// resulting non-finite values are recorded as-is
pub struct AnharmonicOscillator {
    pub m: f64, // mass
    pub omega: f64, // angular frequency
    pub epsilon: f64, // perturbation strength
    pub q0: f64, // reference amplitude
}

impl AnharmonicOscillator {
    pub fn from_params(p: &Parameters) -> Self {
        Self {
            m: p.m,
            omega: p.omega,
            epsilon: p.epsilon,
            q0: p.q0,
        }
    }
}

impl Force for AnharmonicOscillator {
    fn force(&self, _t: f64, q: f64) -> f64 {
        // Harmonic part: -m omega^2 q
        // Cubic correction: the same, scaled by (3/2) epsilon (q / q0)
        -self.m * self.omega * self.omega * q * (1.0 + 1.5 * self.epsilon * (q / self.q0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harmonic_limit_at_zero_epsilon() {
        let f = AnharmonicOscillator {
            m: 1.0,
            omega: 2.0,
            epsilon: 0.0,
            q0: 1.0,
        };
        assert_eq!(f.force(0.0, 0.5), -2.0);
    }

    #[test]
    fn force_set_sums_terms() {
        struct Constant(f64);
        impl Force for Constant {
            fn force(&self, _t: f64, _q: f64) -> f64 {
                self.0
            }
        }

        let set = ForceSet::new().with(Constant(1.0)).with(Constant(2.5));
        assert_eq!(set.total_force(0.0, 0.0), 3.5);
    }
}
