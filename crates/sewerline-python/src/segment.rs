use numpy::{PyReadonlyArray1, PyReadonlyArray2};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::convert::{contiguous_slice, params_to_dict, partial_from_dict, rows_from_array};

use sewerline_core::segment::constants::PARAM_NAMES;
use sewerline_core::{compute_all as core_compute_all, compute_batch as core_compute_batch};
use sewerline_core::{sweep as core_sweep, validate as core_validate};
use sewerline_core::{ParamField, ParameterSet};

// ---------------------------------------------------------------------------
// Typed pyclass result objects
// ---------------------------------------------------------------------------

define_series_result! {
    /// Batch results with typed numpy array attributes, one entry per row.
    pub struct BatchResult {
        estimated_flow, design_flow, wetted_angle, wetted_area, wetted_perimeter,
        hydraulic_radius, wetted_depth, depth_ratio, tractive_force, velocity,
    }
}

// ---------------------------------------------------------------------------
// Dict-returning functions
// ---------------------------------------------------------------------------

/// Evaluate one segment. Unsupplied parameters take their defaults.
#[pyfunction]
#[pyo3(signature = (params=None))]
fn compute_all<'py>(
    py: Python<'py>,
    params: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, PyDict>> {
    let partial = partial_from_dict(params)?;
    let c = core_compute_all(&partial);

    let results = record_to_dict!(
        py, c.results,
        estimated_flow, design_flow, wetted_angle, wetted_area, wetted_perimeter,
        hydraulic_radius, wetted_depth, depth_ratio, tractive_force, velocity,
    );
    let verification = record_to_dict!(py, c.verification, depth_ok, tractive_ok, overall_ok);
    let solver = record_to_dict!(
        py, c.solver,
        iterations, residual, converged, section_factor, iteration_coefficient,
    );

    let dict = PyDict::new(py);
    dict.set_item("params", params_to_dict(py, &c.params)?)?;
    dict.set_item("results", results)?;
    dict.set_item("verification", verification)?;
    dict.set_item("solver", solver)?;
    Ok(dict)
}

/// Plausibility check. Never raises for out-of-range values.
#[pyfunction]
#[pyo3(signature = (params=None))]
fn validate<'py>(
    py: Python<'py>,
    params: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, PyDict>> {
    let partial = partial_from_dict(params)?;
    let v = core_validate(&partial.resolve());

    let dict = PyDict::new(py);
    dict.set_item("valid", v.valid)?;
    dict.set_item("errors", v.errors)?;
    dict.set_item("warnings", v.warnings)?;
    Ok(dict)
}

/// Evaluate independent segments given as an (n, 12) array.
#[pyfunction]
fn compute_batch<'py>(py: Python<'py>, rows: PyReadonlyArray2<'py, f64>) -> PyResult<BatchResult> {
    let rows = rows_from_array(&rows)?;
    Ok(BatchResult::from_batch(py, core_compute_batch(&rows)))
}

/// Vary one parameter over `values`, all others from `params` or defaults.
#[pyfunction]
#[pyo3(signature = (field, values, params=None))]
fn sweep<'py>(
    py: Python<'py>,
    field: &str,
    values: PyReadonlyArray1<'py, f64>,
    params: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, PyDict>> {
    let field = field
        .parse::<ParamField>()
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
    let base = partial_from_dict(params)?.resolve();
    let values = contiguous_slice(&values)?;

    let batch = core_sweep(&base, field, values);
    let overall_ok: Vec<bool> = batch.verification.iter().map(|v| v.overall_ok).collect();

    let dict = series_to_dict!(
        py, batch.results,
        estimated_flow, design_flow, wetted_angle, wetted_area, wetted_perimeter,
        hydraulic_radius, wetted_depth, depth_ratio, tractive_force, velocity,
    );
    dict.set_item("overall_ok", numpy::PyArray1::from_vec(py, overall_ok))?;
    Ok(dict)
}

/// Parameter names in array-column order.
#[pyfunction]
fn parameter_names() -> Vec<&'static str> {
    PARAM_NAMES.to_vec()
}

/// The system default parameters.
#[pyfunction]
fn defaults(py: Python<'_>) -> PyResult<Bound<'_, PyDict>> {
    params_to_dict(py, &ParameterSet::DEFAULT)
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "segment")?;
    m.add_function(wrap_pyfunction!(compute_all, &m)?)?;
    m.add_function(wrap_pyfunction!(validate, &m)?)?;
    m.add_function(wrap_pyfunction!(compute_batch, &m)?)?;
    m.add_function(wrap_pyfunction!(sweep, &m)?)?;
    m.add_function(wrap_pyfunction!(parameter_names, &m)?)?;
    m.add_function(wrap_pyfunction!(defaults, &m)?)?;
    m.add_class::<BatchResult>()?;
    parent.add_submodule(&m)?;
    Ok(())
}
