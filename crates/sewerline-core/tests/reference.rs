//! End-to-end behavior of `compute_all` and `validate` on reference segments.

use approx::assert_abs_diff_eq;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::TAU;

use sewerline_core::{
    compute, compute_all, validate, ParamField, ParameterSet, PartialParameters,
};

fn partial(pairs: &[(ParamField, f64)]) -> PartialParameters {
    let mut p = PartialParameters::default();
    for &(field, value) in pairs {
        p.set(field, value);
    }
    p
}

fn sheet_segment() -> PartialParameters {
    partial(&[
        (ParamField::ConsumptionPerCapita, 200.0),
        (ParamField::OccupancyRate, 5.0),
        (ParamField::ReturnCoefficient, 0.8),
        (ParamField::PeakDayFactor, 1.2),
        (ParamField::PeakHourFactor, 1.5),
        (ParamField::DwellingCount, 2170.0),
        (ParamField::ManningCoefficient, 0.013),
        (ParamField::Slope, 0.005),
        (ParamField::Diameter, 150.0),
    ])
}

#[test]
fn identical_inputs_give_identical_results() {
    let p = sheet_segment();
    let a = compute_all(&p);
    let b = compute_all(&p);
    assert_eq!(a.results, b.results);
    assert_eq!(a.verification, b.verification);
    assert_eq!(a.solver.iterations, b.solver.iterations);

    let d = compute_all(&PartialParameters::default());
    let e = compute_all(&PartialParameters::default());
    assert_eq!(d.results.to_array(), e.results.to_array());
}

#[test]
fn minimum_flow_sheet_row() {
    // The sheet's first CH row: the design flow is the 1.5 l/s minimum.
    let p = partial(&[
        (ParamField::DwellingCount, 1.0),
        (ParamField::ConsumptionPerCapita, 0.001),
        (ParamField::OccupancyRate, 1.0),
        (ParamField::ReturnCoefficient, 0.1),
        (ParamField::MinDesignFlow, 1.5),
        (ParamField::Diameter, 150.0),
        (ParamField::Slope, 0.005),
        (ParamField::ManningCoefficient, 0.013),
    ]);
    let r = compute_all(&p).results;
    assert_eq!(r.design_flow, 1.5);
    assert_abs_diff_eq!(r.wetted_angle, 2.104163964834, epsilon = 1e-6);
    assert_abs_diff_eq!(r.wetted_area, 0.003496118166, epsilon = 1e-6);
    assert_abs_diff_eq!(r.wetted_perimeter, 0.157812297363, epsilon = 1e-6);
    assert_abs_diff_eq!(r.hydraulic_radius, 0.022153648511, epsilon = 1e-6);
    assert_abs_diff_eq!(r.wetted_depth, 0.037817699183, epsilon = 1e-6);
    assert_abs_diff_eq!(r.depth_ratio, 0.252117994553, epsilon = 1e-6);
    assert_abs_diff_eq!(r.tractive_force, 1.107682425529, epsilon = 1e-6);
    assert_abs_diff_eq!(r.velocity, 0.429047284041, epsilon = 1e-6);
}

#[test]
fn sheet_segment_is_over_full() {
    let c = compute_all(&sheet_segment());
    let r = c.results;
    assert_abs_diff_eq!(r.design_flow, 36.166666666667, epsilon = 1e-9);
    assert!(r.wetted_angle > TAU);
    assert_eq!(r.wetted_area, 0.0);
    assert_eq!(r.wetted_perimeter, 0.0);
    assert_eq!(r.hydraulic_radius, 0.0);
    assert_eq!(r.depth_ratio, 0.0);
    assert_eq!(r.velocity, 0.0);
    assert!(c.verification.depth_ok);
    assert!(!c.verification.tractive_ok);
    assert!(!c.verification.overall_ok);
    assert!(!c.solver.converged);
}

#[test]
fn small_community_takes_minimum_design_flow() {
    let c = compute_all(&partial(&[(ParamField::DwellingCount, 10.0)]));
    assert!(c.results.estimated_flow < 1.5);
    assert_eq!(c.results.design_flow, c.params.min_design_flow);
    assert_eq!(c.results.design_flow, 1.5);
}

#[test]
fn zero_flow_is_finite() {
    let c = compute_all(&partial(&[
        (ParamField::DwellingCount, 0.0),
        (ParamField::MinDesignFlow, 0.0),
    ]));
    let r = c.results;
    assert_eq!(r.design_flow, 0.0);
    assert_eq!(r.depth_ratio, 0.0);
    assert_eq!(r.velocity, 0.0);
    assert!(r.wetted_angle.is_finite());
    assert!(!c.verification.tractive_ok);
}

#[test]
fn non_positive_slope_propagates_nan() {
    let c = compute_all(&partial(&[(ParamField::Slope, 0.0)]));
    assert!(c.results.wetted_angle.is_nan());
    assert!(c.results.wetted_area.is_nan());
    assert!(c.results.tractive_force.is_nan());
    assert!(c.results.velocity.is_nan());
    assert!(!c.verification.overall_ok);
}

#[test]
fn verdict_is_conjunction_of_criteria() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..500 {
        let p = ParameterSet {
            consumption_per_capita: rng.gen_range(50.0..500.0),
            occupancy_rate: rng.gen_range(1.0..10.0),
            return_coefficient: rng.gen_range(0.5..1.0),
            peak_day_factor: rng.gen_range(1.0..1.5),
            peak_hour_factor: rng.gen_range(1.0..2.0),
            dwelling_count: rng.gen_range(1.0..2000.0),
            manning_coefficient: rng.gen_range(0.010..0.016),
            min_tractive_force: rng.gen_range(0.5..2.0),
            max_depth_ratio: rng.gen_range(0.5..0.9),
            min_design_flow: rng.gen_range(0.5..3.0),
            slope: rng.gen_range(0.001..0.1),
            diameter: rng.gen_range(100.0..1000.0),
        };
        let c = compute(&p);
        let v = c.verification;
        assert_eq!(v.overall_ok, v.depth_ok && v.tractive_ok);
        assert_eq!(v.depth_ok, c.results.depth_ratio <= p.max_depth_ratio);
        assert_eq!(v.tractive_ok, c.results.tractive_force >= p.min_tractive_force);
        assert!(c.solver.iterations <= 15);
    }
}

#[test]
fn invalid_parameters_still_compute() {
    let p = partial(&[
        (ParamField::ReturnCoefficient, 1.2),
        (ParamField::Slope, 0.2),
    ]);
    let v = validate(&p.resolve());
    assert!(!v.valid);
    assert_eq!(v.errors.len(), 1);
    assert_eq!(v.warnings.len(), 1);

    let c = compute_all(&p);
    assert_eq!(c.params.return_coefficient, 1.2);
    assert!(c.results.design_flow > 0.0);
    assert!(c.results.wetted_angle.is_finite());
}

#[test]
fn json_parameters_drive_the_computation() {
    let p = PartialParameters::from_json_str(r#"{"dwellingCount": 10, "slope": "0.005"}"#).unwrap();
    let c = compute_all(&p);
    assert_eq!(c.results.design_flow, 1.5);
    assert_eq!(c.params.slope, 0.005);
}
