//! Band Levels - spectrum to visualizer band conversion
//!
//! Folds a 512-bin magnitude spectrum into 8 exponentially widening bands
//! and smooths them so they rise instantly and fall with accelerating decay.
//! The FFT is the host's job; see `spectrum::windowing` for the window the
//! band weights expect.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod bands;
pub mod error;
pub mod spectrum;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use bands::{
    compute_bands, BandLayout, BandSmoother, SmootherConfig, SpectrumBander, BAND_COUNT,
    MAGNITUDE_LEN,
};
pub use error::BandError;
pub use spectrum::{AnalyzerConfig, BandAnalyzer, WindowType};
