/// Segment orchestration functions.
///
/// - `compute_all()`: merge a partial parameter map over the defaults and
///   evaluate one segment
/// - `compute()`: evaluate one fully-defaulted parameter set
/// - `compute_batch()` / `sweep()`: evaluate independent segments together
///
/// Steps run in strict sequence: demand -> angle -> geometry -> dynamics ->
/// verification. Nothing is cached; every call recomputes from scratch.
use tracing::debug;

use super::demand;
use super::dynamics;
use super::geometry;
use super::outputs::{Batch, Computation, ResultRecord, SolverDiagnostics};
use super::params::{ParamField, ParameterSet, PartialParameters};
use super::solver;
use super::verification;

/// Evaluate one segment from caller-supplied parameters.
///
/// Unsupplied fields take `ParameterSet::DEFAULT`. Implausible inputs are
/// not rejected; run `validate` separately for diagnostics.
pub fn compute_all(partial: &PartialParameters) -> Computation {
    compute(&partial.resolve())
}

/// Evaluate one segment.
pub fn compute(params: &ParameterSet) -> Computation {
    // 1. Demand
    let estimated_flow = demand::estimate_flow(params);
    let design_flow = demand::design_flow(params);

    // 2. Wetted angle
    let e = solver::section_factor(
        design_flow,
        params.slope,
        params.diameter,
        params.manning_coefficient,
    );
    let coefficient = solver::iteration_coefficient(e);
    let solution = solver::iterate(coefficient);
    let angle = solution.angle;

    // 3. Section geometry
    let wetted_area = geometry::wetted_area(angle, params.diameter);
    let wetted_perimeter = geometry::wetted_perimeter(angle, params.diameter);
    let hydraulic_radius = geometry::hydraulic_radius(angle, params.diameter);
    let wetted_depth = geometry::wetted_depth(angle, params.diameter);
    let depth_ratio = geometry::depth_ratio(wetted_depth, params.diameter);

    // 4. Flow dynamics
    let tractive_force = dynamics::tractive_force(hydraulic_radius, params.slope);
    let velocity = dynamics::velocity(hydraulic_radius, params.slope, params.manning_coefficient);

    let results = ResultRecord {
        estimated_flow,
        design_flow,
        wetted_angle: angle,
        wetted_area,
        wetted_perimeter,
        hydraulic_radius,
        wetted_depth,
        depth_ratio,
        tractive_force,
        velocity,
    };

    // 5. Verification
    let verification = verification::verify(&results, params);

    debug!(
        design_flow,
        angle,
        depth_ratio,
        tractive_force,
        overall_ok = verification.overall_ok,
        "segment computed"
    );

    Computation {
        params: *params,
        results,
        verification,
        solver: SolverDiagnostics::new(&solution, e, coefficient),
    }
}

/// Evaluate independent segments, one per parameter set.
pub fn compute_batch(rows: &[ParameterSet]) -> Batch {
    let mut batch = Batch::with_capacity(rows.len());
    for params in rows {
        batch.push(&compute(params));
    }
    batch
}

/// Evaluate `base` once per value of `field`.
pub fn sweep(base: &ParameterSet, field: ParamField, values: &[f64]) -> Batch {
    let rows: Vec<ParameterSet> = values
        .iter()
        .map(|&value| base.with_field(field, value))
        .collect();
    compute_batch(&rows)
}

/// `steps` evenly spaced values from `start` to `stop`, both included.
pub fn linspace(start: f64, stop: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (steps - 1) as f64;
            (0..steps)
                .map(|i| {
                    if i == steps - 1 {
                        stop
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}
