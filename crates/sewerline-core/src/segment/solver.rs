/// Wetted-angle solver.
///
/// Manning's equation for a circular segment, with diameter in meters and
/// flow in m3/s, reduces to a transcendental equation in the wetted angle θ.
/// It is solved by the fixed-point relation of the reference spreadsheet:
///
/// ```text
/// E  = n * Q / (S^0.5 * D^(8/3))
/// ε  = 8 * (E^3 / 4)^0.2
/// θ' = ε * θ^0.4 + sin(θ)
/// ```
///
/// seeded at π and applied at most `MAX_ITERATIONS` times. The last iterate
/// is the result; the residual only reports convergence.
///
/// Nothing here is guarded: non-positive slope or diameter yield
/// NaN/Infinity, which propagate to the caller.
use serde::Serialize;
use tracing::{debug, trace};

use super::constants::{
    ANGLE_EXPONENT, COEFFICIENT_EXPONENT, COEFFICIENT_SCALE, CONVERGENCE_TOLERANCE,
    DIAMETER_EXPONENT, INITIAL_ANGLE, MAX_ITERATIONS, PER_THOUSAND,
};

/// Outcome of the fixed-point iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AngleSolution {
    /// Last iterate [rad].
    pub angle: f64,
    /// Number of applications of the relation.
    pub iterations: usize,
    /// |θ_n - θ_{n-1}| of the last application.
    pub residual: f64,
    /// `true` when the loop exited on the tolerance rather than the cap.
    pub converged: bool,
}

/// Section factor E [-] for a design flow in l/s and a diameter in mm.
pub fn section_factor(design_flow: f64, slope: f64, diameter_mm: f64, manning_n: f64) -> f64 {
    (manning_n * design_flow / PER_THOUSAND)
        / (slope.powf(0.5) * (diameter_mm / PER_THOUSAND).powf(DIAMETER_EXPONENT))
}

/// Coefficient ε of the fixed-point relation.
pub fn iteration_coefficient(section_factor: f64) -> f64 {
    COEFFICIENT_SCALE * (section_factor.powf(3.0) / 4.0).powf(COEFFICIENT_EXPONENT)
}

/// One application of the fixed-point relation.
pub fn next_angle(coefficient: f64, angle: f64) -> f64 {
    coefficient * angle.powf(ANGLE_EXPONENT) + angle.sin()
}

/// Wetted angle [rad] for a design flow [l/s], slope [m/m] and diameter [mm].
pub fn solve_angle(design_flow: f64, slope: f64, diameter_mm: f64, manning_n: f64) -> f64 {
    solve_angle_traced(design_flow, slope, diameter_mm, manning_n).angle
}

/// Same as [`solve_angle`], also reporting iteration count and residual.
pub fn solve_angle_traced(
    design_flow: f64,
    slope: f64,
    diameter_mm: f64,
    manning_n: f64,
) -> AngleSolution {
    let e = section_factor(design_flow, slope, diameter_mm, manning_n);
    iterate(iteration_coefficient(e))
}

/// Run the bounded fixed-point loop for a given coefficient ε.
pub fn iterate(coefficient: f64) -> AngleSolution {
    let mut angle = INITIAL_ANGLE;
    let mut residual = f64::NAN;
    let mut iterations = 0;

    for _ in 0..MAX_ITERATIONS {
        let next = next_angle(coefficient, angle);
        residual = (next - angle).abs();
        angle = next;
        iterations += 1;
        trace!(iteration = iterations, angle, residual, "angle iterate");
        if residual < CONVERGENCE_TOLERANCE {
            break;
        }
    }

    let converged = residual < CONVERGENCE_TOLERANCE;
    if !converged {
        debug!(
            coefficient,
            angle, residual, "angle solver stopped at the iteration cap"
        );
    }

    AngleSolution {
        angle,
        iterations,
        residual,
        converged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::TAU;

    #[test]
    fn section_factor_known_value() {
        // 1.5 l/s, S = 0.005, D = 150 mm, n = 0.013
        let e = section_factor(1.5, 0.005, 150.0, 0.013);
        assert_abs_diff_eq!(e, 0.043414977976, epsilon = 1e-10);
        assert_abs_diff_eq!(iteration_coefficient(e), 0.923127608291, epsilon = 1e-10);
    }

    #[test]
    fn minimum_flow_row() {
        let s = solve_angle_traced(1.5, 0.005, 150.0, 0.013);
        assert_abs_diff_eq!(s.angle, 2.104163964834, epsilon = 1e-9);
        assert!(s.converged);
        assert!(s.iterations <= MAX_ITERATIONS);
    }

    #[test]
    fn converged_angle_is_a_fixed_point() {
        let s = solve_angle_traced(3.0, 0.005, 200.0, 0.013);
        assert!(s.converged);
        let e = iteration_coefficient(section_factor(3.0, 0.005, 200.0, 0.013));
        assert!((next_angle(e, s.angle) - s.angle).abs() < 1e-7);
    }

    #[test]
    fn stops_early_once_converged() {
        let s = solve_angle_traced(1.5, 0.02, 150.0, 0.013);
        assert!(s.converged);
        assert!(s.iterations < MAX_ITERATIONS);
    }

    #[test]
    fn cap_bounds_the_iteration() {
        // Far beyond a full pipe: the iterates keep drifting.
        let s = solve_angle_traced(36.0, 0.005, 150.0, 0.013);
        assert_eq!(s.iterations, MAX_ITERATIONS);
        assert!(!s.converged);
        assert!(s.angle > TAU);
    }

    #[test]
    fn returns_last_iterate_not_residual() {
        let s = solve_angle_traced(1.5, 0.005, 150.0, 0.013);
        assert_eq!(solve_angle(1.5, 0.005, 150.0, 0.013), s.angle);
        assert!(s.angle > 1.0);
        assert!(s.residual < 1e-8);
    }

    #[test]
    fn zero_flow_degenerates_without_nan() {
        let s = solve_angle_traced(0.0, 0.005, 150.0, 0.013);
        assert!(s.angle.is_finite());
        assert!(s.angle >= 0.0 && s.angle < 1e-15);
        assert!(s.converged);
        assert_eq!(s.iterations, 2);
    }

    #[test]
    fn zero_slope_propagates_nan() {
        let s = solve_angle_traced(1.5, 0.0, 150.0, 0.013);
        assert!(s.angle.is_nan());
        assert!(!s.converged);
    }

    #[test]
    fn zero_diameter_does_not_panic() {
        let angle = solve_angle(1.5, 0.005, 0.0, 0.013);
        assert!(!angle.is_finite());
    }

    #[test]
    fn angle_grows_with_flow() {
        let low = solve_angle(1.5, 0.005, 300.0, 0.013);
        let high = solve_angle(5.0, 0.005, 300.0, 0.013);
        assert!(high > low);
    }
}
