pub mod states;
pub mod params;
pub mod error;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod perturbation;
pub mod cpt;
pub mod trajectory;
pub mod playback;
pub mod scenario;
