/// Design wastewater flow from demographic inputs.
use super::constants::SECONDS_PER_DAY;
use super::params::ParameterSet;

/// Estimated peak flow [l/s].
///
/// Daily per-capita consumption, scaled by occupancy, return coefficient
/// and both peak factors, converted to l/s and multiplied by dwellings.
/// Zero inputs yield zero flow.
pub fn estimate_flow(params: &ParameterSet) -> f64 {
    (params.consumption_per_capita
        * params.occupancy_rate
        * params.return_coefficient
        * params.peak_day_factor
        * params.peak_hour_factor
        / SECONDS_PER_DAY)
        * params.dwelling_count
}

/// Design flow [l/s]: the estimate, floored at the regulatory minimum.
pub fn design_flow(params: &ParameterSet) -> f64 {
    estimate_flow(params).max(params.min_design_flow)
}
