/// Segment numerical constants and model contract.
///
/// Centralises all fixed values used by the demand, solver, geometry and
/// verification steps. Values follow the reference spreadsheet formulation.
use std::f64::consts::{PI, TAU};

// -- Unit conversions --

/// Seconds per day, converts daily liters to liters per second.
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Millimeters per meter (diameter) and liters per cubic meter (flow).
pub const PER_THOUSAND: f64 = 1000.0;

// -- Angle solver --

/// Seed of the fixed-point iteration: the half-full section.
pub const INITIAL_ANGLE: f64 = PI;

/// Maximum number of applications of the fixed-point relation.
pub const MAX_ITERATIONS: usize = 15;

/// Early exit once two successive iterates differ by less than this.
pub const CONVERGENCE_TOLERANCE: f64 = 1e-8;

/// Exponent applied to the iterate in the fixed-point relation.
pub const ANGLE_EXPONENT: f64 = 0.4;

/// Exponent of the diameter in the section factor: D^(8/3).
pub const DIAMETER_EXPONENT: f64 = 8.0 / 3.0;

/// Multiplier of the iteration coefficient: 8 * (E^3 / 4)^0.2.
pub const COEFFICIENT_SCALE: f64 = 8.0;

/// Exponent of the iteration coefficient.
pub const COEFFICIENT_EXPONENT: f64 = 0.2;

// -- Geometry --

/// A full section. Angles above this are over-full.
pub const FULL_ANGLE: f64 = TAU;

// -- Flow dynamics --

/// Density of water [kg/m3].
pub const WATER_DENSITY: f64 = 1000.0;

/// Gravity as folded into the production tractive-force formula [m/s2].
///
/// Together with `WATER_DENSITY` this gives a unit weight of 10000 N/m3.
/// An exploratory analysis used 9800 instead; the production value is kept.
pub const GRAVITY: f64 = 10.0;

/// Exponent of the hydraulic radius in Manning's velocity.
pub const RADIUS_EXPONENT: f64 = 2.0 / 3.0;

// -- Model contract constants --

/// Parameter names in order, as used by parameter maps.
pub const PARAM_NAMES: &[&str] = &[
    "consumptionPerCapita",
    "occupancyRate",
    "returnCoefficient",
    "peakDayFactor",
    "peakHourFactor",
    "dwellingCount",
    "manningCoefficient",
    "minTractiveForce",
    "maxDepthRatio",
    "minDesignFlow",
    "slope",
    "diameter",
];

/// Number of fields in a parameter set.
pub const N_PARAMS: usize = 12;

// -- Plausibility ranges --

/// Typical range of a parameter: (min, max), inclusive.
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// `true` when `value` lies outside the range. NaN is never outside.
    pub fn excludes(&self, value: f64) -> bool {
        value < self.min || value > self.max
    }
}

/// Per-capita water consumption [l/person/day].
pub const CONSUMPTION_BOUNDS: Bounds = Bounds {
    min: 50.0,
    max: 500.0,
};

/// Occupancy rate [persons/dwelling].
pub const OCCUPANCY_BOUNDS: Bounds = Bounds {
    min: 1.0,
    max: 10.0,
};

/// Return coefficient [-]. Violations are errors, not warnings.
pub const RETURN_COEFFICIENT_BOUNDS: Bounds = Bounds { min: 0.5, max: 1.0 };

/// Slope [m/m].
pub const SLOPE_BOUNDS: Bounds = Bounds {
    min: 0.001,
    max: 0.1,
};

/// Diameter [mm].
pub const DIAMETER_BOUNDS: Bounds = Bounds {
    min: 100.0,
    max: 1000.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_names_match_count() {
        assert_eq!(PARAM_NAMES.len(), N_PARAMS);
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(!RETURN_COEFFICIENT_BOUNDS.excludes(0.5));
        assert!(!RETURN_COEFFICIENT_BOUNDS.excludes(1.0));
        assert!(RETURN_COEFFICIENT_BOUNDS.excludes(1.2));
        assert!(RETURN_COEFFICIENT_BOUNDS.excludes(0.4));
    }

    #[test]
    fn nan_is_never_outside() {
        assert!(!SLOPE_BOUNDS.excludes(f64::NAN));
    }
}
