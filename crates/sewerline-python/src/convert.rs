use numpy::{PyReadonlyArray1, PyReadonlyArray2};
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict};

use sewerline_core::segment::params::coerce_text;
use sewerline_core::{ModelParams, ParamField, ParameterSet, PartialParameters};

fn value_error(e: impl std::fmt::Display) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(e.to_string())
}

/// Validate that a numpy array is C-contiguous and return its slice.
pub fn contiguous_slice<'py>(arr: &'py PyReadonlyArray1<'py, f64>) -> PyResult<&'py [f64]> {
    arr.as_slice().map_err(|_| {
        pyo3::exceptions::PyValueError::new_err("array must be C-contiguous")
    })
}

/// Coerce a Python value like form input: numbers pass, numeric text is
/// parsed, anything else (None, bool, other text) becomes 0.
fn coerce_value(value: &Bound<'_, PyAny>) -> f64 {
    if value.is_instance_of::<PyBool>() {
        return 0.0;
    }
    if let Ok(x) = value.extract::<f64>() {
        return x;
    }
    match value.extract::<String>() {
        Ok(text) => coerce_text(&text),
        Err(_) => 0.0,
    }
}

/// Build partial parameters from an optional dict keyed by parameter name.
pub fn partial_from_dict(params: Option<&Bound<'_, PyDict>>) -> PyResult<PartialParameters> {
    let mut partial = PartialParameters::default();
    if let Some(dict) = params {
        for (key, value) in dict.iter() {
            let name: String = key.extract()?;
            let field = name.parse::<ParamField>().map_err(value_error)?;
            partial.set(field, coerce_value(&value));
        }
    }
    Ok(partial)
}

/// Convert a parameter set into a dict keyed by parameter name.
pub fn params_to_dict<'py>(py: Python<'py>, params: &ParameterSet) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    for field in ParamField::ALL {
        dict.set_item(field.name(), params.get(field))?;
    }
    Ok(dict)
}

/// One parameter set per row of an (n, 12) array, columns in `parameter_names()` order.
pub fn rows_from_array(arr: &PyReadonlyArray2<'_, f64>) -> PyResult<Vec<ParameterSet>> {
    let view = arr.as_array();
    if view.ncols() != ParameterSet::N_PARAMS {
        return Err(pyo3::exceptions::PyValueError::new_err(format!(
            "rows must have {} columns, got {}",
            ParameterSet::N_PARAMS,
            view.ncols()
        )));
    }
    view.rows()
        .into_iter()
        .map(|row| ParameterSet::from_array(&row.to_vec()).map_err(value_error))
        .collect()
}
