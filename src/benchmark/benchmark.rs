use std::time::Instant;

use crate::simulation::forces::{AnharmonicOscillator, ForceSet};
use crate::simulation::integrator::symplectic_euler_series;
use crate::simulation::params::Parameters;
use crate::simulation::states::InitialCondition;
use crate::simulation::trajectory::{build_trajectories, IntegratorMode};

/// Reference parameters, horizon overridden per run
fn bench_params(t_max: f64) -> Parameters {
    Parameters {
        m: 1.0,
        omega: 1.0,
        epsilon: 0.1,
        q0: 1.0,
        dt: 0.01,
        t_max,
        x_min: 0.0,
        x_max: t_max,
        y_min: -3.5,
        y_max: 2.0,
    }
}

pub fn bench_direct() {
    // Different horizons to test, in steps of 0.01
    let horizons = [60.0, 600.0, 6000.0, 60000.0];

    println!("direct: semi-implicit Euler, single condition");
    for t_max in horizons {
        let params = bench_params(t_max);
        let forces = ForceSet::new().with(AnharmonicOscillator::from_params(&params));

        let start = Instant::now();
        let series = symplectic_euler_series(1.0, 0.0, &forces, &params);
        let elapsed = start.elapsed();

        println!(
            "  steps = {:>8}  time = {:>10.3?}  ({:.1} Msteps/s)",
            series.len(),
            elapsed,
            series.len() as f64 / elapsed.as_secs_f64() / 1.0e6,
        );
    }
}

pub fn bench_cpt() {
    let horizons = [60.0, 600.0, 6000.0, 60000.0];

    println!("cpt: per-sample perturbative evaluation, single condition");
    for t_max in horizons {
        let params = bench_params(t_max);
        let ic = InitialCondition { q: 1.0, p: 0.0 };

        let start = Instant::now();
        let trajectories = build_trajectories(&[ic], &params, IntegratorMode::Cpt)
            .expect("in-domain condition");
        let elapsed = start.elapsed();

        let steps = trajectories[0].series.len();
        println!(
            "  steps = {:>8}  time = {:>10.3?}  ({:.1} Msteps/s)",
            steps,
            elapsed,
            steps as f64 / elapsed.as_secs_f64() / 1.0e6,
        );
    }
}

pub fn bench_batch() {
    // Growing batch sizes, all conditions inside the CPT domain
    let ns = [4, 16, 64, 256];

    println!("batch: parallel build over n conditions, 6000 steps each");
    for n in ns {
        let params = bench_params(60.0);
        let ics: Vec<InitialCondition> = (0..n)
            .map(|i| InitialCondition {
                q: (i + 1) as f64 / (n + 1) as f64,
                p: 0.0,
            })
            .collect();

        for mode in [IntegratorMode::Direct, IntegratorMode::Cpt] {
            let start = Instant::now();
            let trajectories =
                build_trajectories(&ics, &params, mode).expect("in-domain conditions");
            let elapsed = start.elapsed();

            println!(
                "  n = {:>4}  mode = {:?}  series = {}  time = {:>10.3?}",
                n,
                mode,
                trajectories.len(),
                elapsed,
            );
        }
    }
}
