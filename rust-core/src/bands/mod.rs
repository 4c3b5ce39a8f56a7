//! Spectrum banding and band smoothing

pub mod layout;
pub mod bander;
pub mod smoother;

pub use layout::{BandLayout, BAND_COUNT, MAGNITUDE_LEN};
pub use bander::{compute_bands, SpectrumBander};
pub use smoother::{smooth_bands, BandSmoother, SmootherConfig, SmootherState};
