pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{InitialCondition, Sample, TimeSeries};
pub use simulation::params::Parameters;
pub use simulation::error::{SimError, SimResult};
pub use simulation::forces::{Force, ForceSet, AnharmonicOscillator};
pub use simulation::integrator::symplectic_euler_series;
pub use simulation::perturbation::{
    correction_term, second_correction_term, d_correction_dp, d_second_correction_dp,
};
pub use simulation::cpt::{cpt_series, to_action_angle};
pub use simulation::trajectory::{build_trajectories, IntegratorMode, Trajectory};
pub use simulation::playback::{lookup_sample, PlaybackClock};
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    EngineConfig, InitialConditionConfig, ModeConfig, ParametersConfig, ScenarioConfig,
};

pub use visualization::ahosim_vis2d::run_2d;

pub use benchmark::benchmark::{bench_batch, bench_cpt, bench_direct};
