/// Closed-form section geometry of a partially-filled circular pipe.
///
/// All functions take the wetted angle θ [rad] and the diameter [mm].
/// Area, perimeter and hydraulic radius are 0 for an over-full angle
/// (`θ > 2π`); the wetted depth is computed only when `θ <= 2π`. The two
/// guards agree at 2π and differ only for NaN, where depth reads 0.
use super::constants::{FULL_ANGLE, PER_THOUSAND};

fn over_full(angle: f64) -> bool {
    angle > FULL_ANGLE
}

/// Wetted area [m2].
pub fn wetted_area(angle: f64, diameter_mm: f64) -> f64 {
    if over_full(angle) {
        return 0.0;
    }
    let d = diameter_mm / PER_THOUSAND;
    d.powi(2) / 8.0 * (angle - angle.sin())
}

/// Wetted perimeter [m].
pub fn wetted_perimeter(angle: f64, diameter_mm: f64) -> f64 {
    if over_full(angle) {
        return 0.0;
    }
    angle / 2.0 * diameter_mm / PER_THOUSAND
}

/// Hydraulic radius [m]. NaN at θ = 0.
pub fn hydraulic_radius(angle: f64, diameter_mm: f64) -> f64 {
    if over_full(angle) {
        return 0.0;
    }
    (diameter_mm / PER_THOUSAND / 4.0) * (angle - angle.sin()) / angle
}

/// Wetted depth [m].
pub fn wetted_depth(angle: f64, diameter_mm: f64) -> f64 {
    if angle <= FULL_ANGLE {
        (1.0 - (angle / 2.0).cos()) * diameter_mm / PER_THOUSAND / 2.0
    } else {
        0.0
    }
}

/// Depth ratio y/D [-].
pub fn depth_ratio(wetted_depth: f64, diameter_mm: f64) -> f64 {
    wetted_depth / (diameter_mm / PER_THOUSAND)
}
