//! Configuration types for loading scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! playback scenario. A scenario consists of:
//!
//! - [`EngineConfig`]           – engine options (trajectory mode, playback speed)
//! - [`ParametersConfig`]       – numerical parameters and physical constants
//! - [`InitialConditionConfig`] – initial state for each trajectory
//! - [`ScenarioConfig`]         – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   mode: "direct"          # or "cpt"
//!   speed_factor: 0.2       # animation speed scale
//!
//! parameters:
//!   m: 1.0                  # mass
//!   omega: 1.0              # angular frequency
//!   epsilon: 0.1            # perturbation strength
//!   q0: 1.0                 # reference amplitude
//!   dt: 0.01                # fixed step size
//!   t_max: 60.0             # time horizon
//!   x_min: 0.0              # plot bounds
//!   x_max: 60.0
//!   y_min: -3.5
//!   y_max: 2.0
//!
//! initial_conditions:
//!   - { q: 0.2, p: 0.0 }
//!   - { q: 0.6, p: 0.0 }
//!   - { q: 1.0, p: 0.0 }
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation.

use serde::Deserialize;

/// Which trajectory engine the scenario runs
/// `mode: "direct"` or `mode: "cpt"`
#[derive(Deserialize, Debug, Clone)]
pub enum ModeConfig {
    #[serde(rename = "direct")] // Semi-implicit Euler on the true equations of motion
    Direct,

    #[serde(rename = "cpt")] // First-order canonical perturbation theory
    Cpt,
}

/// High-level engine configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub mode: ModeConfig, // trajectory engine used for the batch
    pub speed_factor: Option<f64>, // playback speed, defaults to 0.2
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub m: f64,       // mass
    pub omega: f64,   // angular frequency
    pub epsilon: f64, // perturbation strength (small, signed)
    pub q0: f64,      // reference amplitude of the cubic term
    pub dt: f64,      // fixed step size
    pub t_max: f64,   // time horizon
    pub x_min: f64,   // plot bounds, time axis
    pub x_max: f64,
    pub y_min: f64,   // plot bounds, position axis
    pub y_max: f64,
}

/// Configuration for a single trajectory's initial state
#[derive(Deserialize, Debug)]
pub struct InitialConditionConfig {
    pub q: f64, // initial position
    pub p: f64, // initial momentum
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // engine-level configuration (mode, speed)
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub initial_conditions: Vec<InitialConditionConfig>, // one trajectory each, order fixes color
}
