//! Python bindings for band analysis

use pyo3::prelude::*;
use numpy::{PyArray1, PyReadonlyArray1};
use crate::bands::{BandLayout, SmootherConfig, SpectrumBander};
use crate::spectrum::{AnalyzerConfig, BandAnalyzer};

/// Band analyzer exposed to Python
#[pyclass(name = "BandAnalyzer")]
pub struct PyBandAnalyzer {
    analyzer: BandAnalyzer,
}

#[pymethods]
impl PyBandAnalyzer {
    /// Create a new band analyzer
    ///
    /// Args:
    ///     default_decay: Decay rate a band restarts from after rising
    ///     decay_growth: Factor applied to the decay rate on every falling frame
    #[new]
    #[pyo3(signature = (default_decay=0.005, decay_growth=1.2))]
    fn new(default_decay: f64, decay_growth: f64) -> PyResult<Self> {
        let config = AnalyzerConfig {
            smoothing: SmootherConfig {
                default_decay,
                decay_growth,
            },
        };

        Ok(Self {
            analyzer: BandAnalyzer::new(config)?,
        })
    }

    /// Process one frame of spectrum data
    ///
    /// Args:
    ///     magnitudes: 512 spectrum magnitudes as numpy array
    ///
    /// Returns:
    ///     Smoothed band levels as numpy array of length 8
    fn tick<'py>(
        &mut self,
        py: Python<'py>,
        magnitudes: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let smoothed = self.analyzer.tick(magnitudes.as_slice()?)?;
        Ok(PyArray1::from_slice(py, smoothed))
    }

    /// Raw band values from the last frame
    fn bands<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        PyArray1::from_slice(py, self.analyzer.bands())
    }

    /// Smoothed band levels
    fn smoothed<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        PyArray1::from_slice(py, self.analyzer.smoothed())
    }

    /// Current per-band decay rates
    fn decay_rates<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        PyArray1::from_slice(py, self.analyzer.decay_rates())
    }

    /// Update smoothing parameters, keeping current levels
    #[pyo3(signature = (default_decay=None, decay_growth=None))]
    fn update_config(
        &mut self,
        default_decay: Option<f64>,
        decay_growth: Option<f64>,
    ) -> PyResult<()> {
        let mut config = *self.analyzer.config();

        if let Some(decay) = default_decay {
            config.smoothing.default_decay = decay;
        }
        if let Some(growth) = decay_growth {
            config.smoothing.decay_growth = growth;
        }

        Ok(self.analyzer.update_config(config)?)
    }

    fn reset(&mut self) {
        self.analyzer.reset();
    }

    /// Number of frames processed since creation or reset
    fn ticks(&self) -> u64 {
        self.analyzer.ticks()
    }

    fn get_default_decay(&self) -> f64 {
        self.analyzer.config().smoothing.default_decay
    }

    fn get_decay_growth(&self) -> f64 {
        self.analyzer.config().smoothing.decay_growth
    }
}

/// Compute unsmoothed band values for one spectrum
///
/// Args:
///     magnitudes: 512 spectrum magnitudes as numpy array
#[pyfunction]
pub fn compute_bands<'py>(
    py: Python<'py>,
    magnitudes: PyReadonlyArray1<f64>,
) -> PyResult<&'py PyArray1<f64>> {
    let bands = SpectrumBander::new().compute_bands(magnitudes.as_slice()?)?;
    Ok(PyArray1::from_slice(py, &bands))
}

/// Half-open bin ranges of the 8 bands
#[pyfunction]
pub fn band_ranges() -> Vec<(usize, usize)> {
    BandLayout::standard().ranges().to_vec()
}
