/// Plausibility check of a parameter set.
///
/// Independent of the computation: it never gates `compute_all`, and an
/// implausible set still computes. Only an out-of-range return coefficient
/// is an error; every other finding is a warning.
use serde::Serialize;

use super::constants::{
    Bounds, CONSUMPTION_BOUNDS, DIAMETER_BOUNDS, OCCUPANCY_BOUNDS, RETURN_COEFFICIENT_BOUNDS,
    SLOPE_BOUNDS,
};
use super::params::ParameterSet;

/// Outcome of [`validate`]. Messages keep the order the checks run in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Validation {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// No errors and no warnings.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

fn check(bounds: &Bounds, value: f64) -> bool {
    bounds.excludes(value)
}

/// Check typical engineering ranges.
pub fn validate(params: &ParameterSet) -> Validation {
    let mut v = Validation::default();

    if check(&CONSUMPTION_BOUNDS, params.consumption_per_capita) {
        v.add_warning(format!(
            "per-capita consumption {} is outside the typical range ({}-{} l/person/day)",
            params.consumption_per_capita, CONSUMPTION_BOUNDS.min, CONSUMPTION_BOUNDS.max
        ));
    }

    if check(&OCCUPANCY_BOUNDS, params.occupancy_rate) {
        v.add_warning(format!(
            "occupancy rate {} is outside the typical range ({}-{} persons/dwelling)",
            params.occupancy_rate, OCCUPANCY_BOUNDS.min, OCCUPANCY_BOUNDS.max
        ));
    }

    if check(&RETURN_COEFFICIENT_BOUNDS, params.return_coefficient) {
        v.add_error(format!(
            "return coefficient {} must lie between {} and {}",
            params.return_coefficient,
            RETURN_COEFFICIENT_BOUNDS.min,
            RETURN_COEFFICIENT_BOUNDS.max
        ));
    }

    if check(&SLOPE_BOUNDS, params.slope) {
        v.add_warning(format!(
            "slope {} is outside the typical range ({}% to {}%)",
            params.slope,
            SLOPE_BOUNDS.min * 100.0,
            SLOPE_BOUNDS.max * 100.0
        ));
    }

    if check(&DIAMETER_BOUNDS, params.diameter) {
        v.add_warning(format!(
            "diameter {} is outside the typical range ({}-{} mm)",
            params.diameter, DIAMETER_BOUNDS.min, DIAMETER_BOUNDS.max
        ));
    }

    v.valid = v.errors.is_empty();
    v
}
