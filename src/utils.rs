//! Python argument extraction shared by the PyO3 bindings.
#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArray1;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

/// Copy the Python argument `name` into a `Vec<f64>`.
///
/// Accepts a 1-D float64 numpy array (any strides), anything exposing
/// `to_numpy()` (e.g. a pandas Series), or a plain sequence of floats.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_vec<'py>(
    _py: Python<'py>, raw_data: &Bound<'py, PyAny>, name: &str,
) -> PyResult<Vec<f64>> {
    if let Ok(arr) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        return Ok(arr.as_array().to_vec());
    }
    if let Ok(converted) = raw_data.call_method0("to_numpy") {
        if let Ok(arr) = converted.extract::<PyReadonlyArray1<f64>>() {
            return Ok(arr.as_array().to_vec());
        }
    }
    raw_data.extract::<Vec<f64>>().map_err(|_| {
        PyTypeError::new_err(format!(
            "{name} must be a 1-D float64 numpy array, pandas Series, or sequence of floats"
        ))
    })
}
