//! First-order generating-function correction terms
//!
//! Pure functions of the free-motion phase point (Q, P) and elapsed time t.
//! The generating function is W = S0 + epsilon (C1 + D1) with
//! S0 = Q P - omega P t the identity piece; position follows from dW/dP,
//! so the evaluator exposes both the correction terms and their partial
//! derivatives with respect to the action P.
//!
//! Contract: P > 0 (square-root and division domain). The caller converts
//! initial conditions before evaluating, so a non-positive action here is a
//! caller bug and asserted, not signalled.

use super::params::Parameters;

/// First correction term C1(Q, P) =
/// -(3/8) sqrt(P / (2 m omega)) (cos Q - (1/9) cos 3Q)
pub fn correction_term(params: &Parameters, q_angle: f64, p_action: f64) -> f64 {
    debug_assert!(p_action > 0.0, "action must be positive, got {p_action}");
    let r = (p_action / (2.0 * params.m * params.omega)).sqrt();
    -(3.0 / 8.0) * r * (q_angle.cos() - (1.0 / 9.0) * (3.0 * q_angle).cos())
}

/// Secular correction term D1(Q, P, t) =
/// (3/4) sqrt(P / (2 m omega)) (cos Q + (1/3) cos 3Q) t
pub fn second_correction_term(params: &Parameters, q_angle: f64, p_action: f64, t: f64) -> f64 {
    debug_assert!(p_action > 0.0, "action must be positive, got {p_action}");
    let r = (p_action / (2.0 * params.m * params.omega)).sqrt();
    (3.0 / 4.0) * r * (q_angle.cos() + (1.0 / 3.0) * (3.0 * q_angle).cos()) * t
}

/// dC1/dP = (3/16) / sqrt(2 m omega P) (cos Q - (1/9) cos 3Q)
pub fn d_correction_dp(params: &Parameters, q_angle: f64, p_action: f64) -> f64 {
    debug_assert!(p_action > 0.0, "action must be positive, got {p_action}");
    let s = (2.0 * params.m * params.omega * p_action).sqrt().recip();
    (3.0 / 16.0) * s * (q_angle.cos() - (1.0 / 9.0) * (3.0 * q_angle).cos())
}

/// dD1/dP = (3/8) / sqrt(2 m omega P) (cos Q + (1/3) cos 3Q) t
pub fn d_second_correction_dp(params: &Parameters, q_angle: f64, p_action: f64, t: f64) -> f64 {
    debug_assert!(p_action > 0.0, "action must be positive, got {p_action}");
    let s = (2.0 * params.m * params.omega * p_action).sqrt().recip();
    (3.0 / 8.0) * s * (q_angle.cos() + (1.0 / 3.0) * (3.0 * q_angle).cos()) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_params() -> Parameters {
        Parameters {
            m: 1.0,
            omega: 1.0,
            epsilon: 0.1,
            q0: 1.0,
            dt: 0.01,
            t_max: 60.0,
            x_min: 0.0,
            x_max: 60.0,
            y_min: -3.5,
            y_max: 2.0,
        }
    }

    /// Central finite difference of f at p
    fn ddp(f: impl Fn(f64) -> f64, p: f64) -> f64 {
        let h = 1e-7;
        (f(p + h) - f(p - h)) / (2.0 * h)
    }

    #[test]
    fn d_correction_dp_matches_finite_difference() {
        let params = test_params();
        for q_angle in [0.0, 0.7, 2.4] {
            let analytic = d_correction_dp(&params, q_angle, 0.5);
            let numeric = ddp(|p| correction_term(&params, q_angle, p), 0.5);
            assert!(
                (analytic - numeric).abs() < 1e-6,
                "dC1/dP mismatch at Q = {q_angle}: {analytic} vs {numeric}"
            );
        }
    }

    #[test]
    fn d_second_correction_dp_matches_finite_difference() {
        let params = test_params();
        let t = 3.0;
        for q_angle in [0.3, 1.9] {
            let analytic = d_second_correction_dp(&params, q_angle, 0.5, t);
            let numeric = ddp(|p| second_correction_term(&params, q_angle, p, t), 0.5);
            assert!(
                (analytic - numeric).abs() < 1e-6,
                "dD1/dP mismatch at Q = {q_angle}: {analytic} vs {numeric}"
            );
        }
    }

    #[test]
    fn second_term_is_linear_in_time() {
        let params = test_params();
        let at_1 = second_correction_term(&params, 0.4, 0.5, 1.0);
        let at_5 = second_correction_term(&params, 0.4, 0.5, 5.0);
        assert!((at_5 - 5.0 * at_1).abs() < 1e-12);
    }

    #[test]
    fn referentially_transparent() {
        let params = test_params();
        let a = correction_term(&params, 1.1, 0.25);
        let b = correction_term(&params, 1.1, 0.25);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
