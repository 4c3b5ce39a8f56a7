//! Python bindings for window generation

use pyo3::prelude::*;
use numpy::PyArray1;
use crate::spectrum::windowing::{self, WindowType};

/// Window type enum exposed to Python
#[pyclass(name = "WindowType")]
#[derive(Clone)]
pub enum PyWindowType {
    Rectangular,
    Triangle,
    Hamming,
    Hann,
    Blackman,
    BlackmanHarris,
}

impl From<PyWindowType> for WindowType {
    fn from(py_win: PyWindowType) -> Self {
        match py_win {
            PyWindowType::Rectangular => WindowType::Rectangular,
            PyWindowType::Triangle => WindowType::Triangle,
            PyWindowType::Hamming => WindowType::Hamming,
            PyWindowType::Hann => WindowType::Hann,
            PyWindowType::Blackman => WindowType::Blackman,
            PyWindowType::BlackmanHarris => WindowType::BlackmanHarris,
        }
    }
}

/// Generate window coefficients
///
/// Args:
///     length: Number of samples
///     window_type: Window type (default: BlackmanHarris, what the band weights expect)
#[pyfunction]
#[pyo3(signature = (length, window_type=PyWindowType::BlackmanHarris))]
pub fn generate_window<'py>(
    py: Python<'py>,
    length: usize,
    window_type: PyWindowType,
) -> &'py PyArray1<f64> {
    PyArray1::from_vec(py, windowing::generate_window(window_type.into(), length))
}
