//! Build fully-initialized scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! consumed by the viewer:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - the precomputed trajectories, one per initial condition
//! - a fresh `PlaybackClock` at virtual time zero
//!
//! The scenario is inserted into Bevy as a `Resource`; the viewer systems
//! read the trajectories and tick the clock, nothing else is mutated.

use bevy::prelude::Resource;

use crate::configuration::config::{InitialConditionConfig, ModeConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::error::SimResult;
use crate::simulation::params::Parameters;
use crate::simulation::playback::PlaybackClock;
use crate::simulation::states::InitialCondition;
use crate::simulation::trajectory::{build_trajectories, IntegratorMode, Trajectory};

/// Default animation speed when the config leaves it out
const DEFAULT_SPEED_FACTOR: f64 = 0.2;

/// Bevy resource holding a fully-initialized playback scenario
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub trajectories: Vec<Trajectory>,
    pub clock: PlaybackClock,
}

impl Scenario {
    /// Map the config to runtime types and build every trajectory up front.
    /// Fails if any initial condition is outside the CPT domain.
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            m: p_cfg.m,
            omega: p_cfg.omega,
            epsilon: p_cfg.epsilon,
            q0: p_cfg.q0,
            dt: p_cfg.dt,
            t_max: p_cfg.t_max,
            x_min: p_cfg.x_min,
            x_max: p_cfg.x_max,
            y_min: p_cfg.y_min,
            y_max: p_cfg.y_max,
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            mode: match e_cfg.mode {
                ModeConfig::Direct => IntegratorMode::Direct,
                ModeConfig::Cpt => IntegratorMode::Cpt,
            },
            speed_factor: e_cfg.speed_factor.unwrap_or(DEFAULT_SPEED_FACTOR),
        };

        // Initial conditions: map config -> runtime, order preserved
        let initial_conditions: Vec<InitialCondition> = cfg
            .initial_conditions
            .iter()
            .map(|ic: &InitialConditionConfig| InitialCondition { q: ic.q, p: ic.p })
            .collect();

        // All series are computed here, before the first frame
        let trajectories = build_trajectories(&initial_conditions, &parameters, engine.mode)?;

        // Playback starts at virtual time zero and runs to the horizon
        let clock = PlaybackClock::new(engine.speed_factor, parameters.t_max);

        Ok(Self {
            engine,
            parameters,
            trajectories,
            clock,
        })
    }
}
