/// Generate a frozen `#[pyclass]` holding one numpy array per record field,
/// plus the three verdict columns of a batch.
///
/// Also generates a `from_batch()` method that moves the columns out of a
/// core `Batch`.
macro_rules! define_series_result {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($field:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[pyo3::pyclass(frozen)]
        $vis struct $name {
            $(
                #[pyo3(get)]
                pub $field: Py<numpy::PyArray1<f64>>,
            )+
            #[pyo3(get)]
            pub depth_ok: Py<numpy::PyArray1<bool>>,
            #[pyo3(get)]
            pub tractive_ok: Py<numpy::PyArray1<bool>>,
            #[pyo3(get)]
            pub overall_ok: Py<numpy::PyArray1<bool>>,
        }

        impl $name {
            pub fn from_batch(py: pyo3::Python<'_>, batch: sewerline_core::Batch) -> Self {
                let verdicts = &batch.verification;
                let depth_ok = verdicts.iter().map(|v| v.depth_ok).collect::<Vec<bool>>();
                let tractive_ok = verdicts.iter().map(|v| v.tractive_ok).collect::<Vec<bool>>();
                let overall_ok = verdicts.iter().map(|v| v.overall_ok).collect::<Vec<bool>>();
                Self {
                    $(
                        $field: numpy::PyArray1::from_vec(py, batch.results.$field).unbind(),
                    )+
                    depth_ok: numpy::PyArray1::from_vec(py, depth_ok).unbind(),
                    tractive_ok: numpy::PyArray1::from_vec(py, tractive_ok).unbind(),
                    overall_ok: numpy::PyArray1::from_vec(py, overall_ok).unbind(),
                }
            }
        }
    };
}

/// Convert a `ResultRecordSeries` into a `PyDict` of numpy arrays.
macro_rules! series_to_dict {
    ($py:expr, $series:expr, $($field:ident),+ $(,)?) => {{
        let dict = pyo3::types::PyDict::new($py);
        $(
            dict.set_item(stringify!($field), numpy::PyArray1::from_vec($py, $series.$field))?;
        )+
        dict
    }};
}

/// Convert a single record struct into a `PyDict`.
macro_rules! record_to_dict {
    ($py:expr, $r:expr, $($field:ident),+ $(,)?) => {{
        let dict = pyo3::types::PyDict::new($py);
        $(
            dict.set_item(stringify!($field), $r.$field)?;
        )+
        dict
    }};
}
