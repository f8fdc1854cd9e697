//! High-level runtime engine settings
//!
//! Selects the trajectory engine (direct or CPT) and the playback speed
//! used when building and running a `Scenario`

use crate::simulation::trajectory::IntegratorMode;

#[derive(Debug, Clone)]
pub struct Engine {
    pub mode: IntegratorMode, // direct or cpt
    pub speed_factor: f64, // animation speed, artistic scale not a physical rate
}
