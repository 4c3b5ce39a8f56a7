//! Spectrum to band conversion
//!
//! Every bin is weighted by its absolute position in the buffer
//! (`magnitude[k] * (k + 1)`), and each band's weighted sum is divided by
//! the running count of bins consumed so far rather than by the band's own
//! width. Later bands therefore carry both larger weights and larger
//! divisors. The result is scaled by 10.

use super::layout::{BandLayout, BAND_COUNT, MAGNITUDE_LEN};
use crate::error::BandError;

/// Output gain applied to every band
pub const BAND_SCALE: f64 = 10.0;

/// Converts a 512-bin magnitude spectrum into 8 band values
#[derive(Debug, Clone, Copy, Default)]
pub struct SpectrumBander {
    layout: BandLayout,
}

impl SpectrumBander {
    pub const fn new() -> Self {
        Self {
            layout: BandLayout::standard(),
        }
    }

    pub fn layout(&self) -> &BandLayout {
        &self.layout
    }

    /// Compute band values from a magnitude slice
    ///
    /// # Arguments
    /// * `magnitudes` - Exactly 512 spectrum magnitudes
    ///
    /// # Returns
    /// 8 band values, or `BandError::MagnitudeLength` for any other length
    pub fn compute_bands(&self, magnitudes: &[f64]) -> Result<[f64; BAND_COUNT], BandError> {
        let magnitudes: &[f64; MAGNITUDE_LEN] =
            magnitudes.try_into().map_err(|_| BandError::MagnitudeLength {
                expected: MAGNITUDE_LEN,
                actual: magnitudes.len(),
            })?;

        Ok(self.compute_bands_array(magnitudes))
    }

    /// Compute band values from a fixed-size buffer (cannot fail)
    pub fn compute_bands_array(&self, magnitudes: &[f64; MAGNITUDE_LEN]) -> [f64; BAND_COUNT] {
        let mut bands = [0.0; BAND_COUNT];

        for (band, &(start, end)) in bands.iter_mut().zip(self.layout.ranges().iter()) {
            let weighted: f64 = magnitudes[start..end]
                .iter()
                .enumerate()
                .map(|(offset, &mag)| mag * (start + offset + 1) as f64)
                .sum();

            // `end` is the number of bins consumed so far
            *band = weighted / end as f64 * BAND_SCALE;
        }

        bands
    }
}

/// Compute band values with the standard layout
pub fn compute_bands(magnitudes: &[f64]) -> Result<[f64; BAND_COUNT], BandError> {
    SpectrumBander::new().compute_bands(magnitudes)
}
