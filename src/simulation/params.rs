//! Physical and numerical parameters for the oscillator
//!
//! `Parameters` holds runtime settings:
//! - oscillator constants (`m`, `omega`, `epsilon`, `q0`),
//! - integration step size and time horizon,
//! - plot bounds consumed by the viewer

#[derive(Debug, Clone)]
pub struct Parameters {
    pub m: f64, // mass
    pub omega: f64, // angular frequency
    pub epsilon: f64, // perturbation strength (small, signed)
    pub q0: f64, // reference amplitude of the cubic term
    pub dt: f64, // time step size
    pub t_max: f64, // time horizon
    pub x_min: f64, // plot bounds, time axis
    pub x_max: f64,
    pub y_min: f64, // plot bounds, position axis
    pub y_max: f64,
}

impl Parameters {
    /// Number of samples every series carries: floor(t_max / dt)
    pub fn steps(&self) -> usize {
        (self.t_max / self.dt).floor() as usize
    }
}
