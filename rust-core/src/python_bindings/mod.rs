//! PyO3 bindings for Python integration

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use crate::bands::{BAND_COUNT, MAGNITUDE_LEN};
use crate::error::BandError;

mod analyzer_bindings;
mod window_bindings;

impl From<BandError> for PyErr {
    fn from(err: BandError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Python module definition
#[pymodule]
fn band_levels(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<analyzer_bindings::PyBandAnalyzer>()?;
    m.add_class::<window_bindings::PyWindowType>()?;

    m.add_function(wrap_pyfunction!(analyzer_bindings::compute_bands, m)?)?;
    m.add_function(wrap_pyfunction!(analyzer_bindings::band_ranges, m)?)?;
    m.add_function(wrap_pyfunction!(window_bindings::generate_window, m)?)?;

    m.add("BAND_COUNT", BAND_COUNT)?;
    m.add("MAGNITUDE_LEN", MAGNITUDE_LEN)?;

    Ok(())
}
