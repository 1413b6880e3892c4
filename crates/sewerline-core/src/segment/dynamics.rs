/// Shear and velocity of the flow.
use super::constants::{GRAVITY, RADIUS_EXPONENT, WATER_DENSITY};

/// Tractive force on the pipe invert [Pa].
///
/// Uses a unit weight of 1000 * 10 N/m3, the production value of the
/// reference formulation.
pub fn tractive_force(hydraulic_radius: f64, slope: f64) -> f64 {
    WATER_DENSITY * hydraulic_radius * slope * GRAVITY
}

/// Mean velocity from Manning's equation [m/s].
///
/// Exactly 0 for a non-positive hydraulic radius, so an empty or over-full
/// section never raises a fractional power of zero or a negative base.
pub fn velocity(hydraulic_radius: f64, slope: f64, manning_n: f64) -> f64 {
    if hydraulic_radius <= 0.0 {
        return 0.0;
    }
    hydraulic_radius.powf(RADIUS_EXPONENT) * slope.powf(0.5) / manning_n
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn tractive_force_uses_ten_thousand() {
        assert_abs_diff_eq!(tractive_force(0.05, 0.005), 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(
            tractive_force(0.022153648510573, 0.005),
            1.107682425529,
            epsilon = 1e-11
        );
    }

    #[test]
    fn tractive_force_zero_radius() {
        assert_eq!(tractive_force(0.0, 0.005), 0.0);
    }

    #[test]
    fn velocity_known_value() {
        assert_abs_diff_eq!(
            velocity(0.022153648510573, 0.005, 0.013),
            0.429047284041,
            epsilon = 1e-11
        );
    }

    #[test]
    fn velocity_guard_for_non_positive_radius() {
        assert_eq!(velocity(0.0, 0.005, 0.013), 0.0);
        assert_eq!(velocity(-0.01, 0.005, 0.013), 0.0);
    }

    #[test]
    fn velocity_nan_radius_propagates() {
        assert!(velocity(f64::NAN, 0.005, 0.013).is_nan());
    }

    #[test]
    fn velocity_rises_with_slope() {
        assert!(velocity(0.03, 0.01, 0.013) > velocity(0.03, 0.005, 0.013));
    }
}
