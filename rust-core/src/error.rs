//! Error type shared by the banding, smoothing and layout code

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BandError {
    #[error("Magnitude buffer must hold exactly {expected} bins (got {actual})")]
    MagnitudeLength { expected: usize, actual: usize },

    #[error("Default decay must be finite and non-negative (got {0})")]
    InvalidDecay(f64),

    #[error("Decay growth must be finite and non-negative (got {0})")]
    InvalidGrowth(f64),

    #[error("Band index {0} out of range (expected 0..8)")]
    BandIndex(usize),
}
