//! Fixed partition of the 512-bin spectrum into 8 bands
//!
//! Band i (1-indexed) spans 2^i bins. The doubling only accounts for
//! 510 bins, so the last band also takes the 2 bins left at the top.

use crate::error::BandError;

/// Number of output bands
pub const BAND_COUNT: usize = 8;

/// Number of spectrum bins consumed per tick
pub const MAGNITUDE_LEN: usize = 512;

/// Bins not covered by the 2^i sequence, absorbed by the last band
pub const LEFTOVER_BINS: usize = MAGNITUDE_LEN - ((1 << (BAND_COUNT + 1)) - 2);

/// Half-open bin ranges `[start, end)` for every band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandLayout {
    ranges: [(usize, usize); BAND_COUNT],
}

impl BandLayout {
    /// Exponential layout used by the bander
    pub const fn standard() -> Self {
        let mut ranges = [(0, 0); BAND_COUNT];
        let mut start = 0;
        let mut band = 0;

        while band < BAND_COUNT {
            let mut count = 1 << (band + 1);
            if band == BAND_COUNT - 1 {
                count += LEFTOVER_BINS;
            }
            ranges[band] = (start, start + count);
            start += count;
            band += 1;
        }

        Self { ranges }
    }

    /// All band ranges in order
    pub fn ranges(&self) -> &[(usize, usize); BAND_COUNT] {
        &self.ranges
    }

    /// Bin range of a single band
    pub fn range(&self, band: usize) -> Result<(usize, usize), BandError> {
        self.ranges
            .get(band)
            .copied()
            .ok_or(BandError::BandIndex(band))
    }

    /// Number of bins in a band
    pub fn bin_count(&self, band: usize) -> Result<usize, BandError> {
        let (start, end) = self.range(band)?;
        Ok(end - start)
    }

    /// Bins consumed once `band` has been processed.
    ///
    /// This is the divisor the bander uses for that band.
    pub fn cumulative_bins(&self, band: usize) -> Result<usize, BandError> {
        self.range(band).map(|(_, end)| end)
    }

    /// Width of one bin in Hz
    ///
    /// The 512 bins span DC up to Nyquist.
    pub fn bin_width_hz(sample_rate: f64) -> f64 {
        sample_rate / 2.0 / MAGNITUDE_LEN as f64
    }

    /// Frequency span `[low, high)` of a band in Hz
    ///
    /// # Arguments
    /// * `band` - Band index (0-based)
    /// * `sample_rate` - Sample rate of the audio the spectrum came from
    pub fn frequency_range_hz(
        &self,
        band: usize,
        sample_rate: f64,
    ) -> Result<(f64, f64), BandError> {
        let (start, end) = self.range(band)?;
        let width = Self::bin_width_hz(sample_rate);
        Ok((start as f64 * width, end as f64 * width))
    }
}

impl Default for BandLayout {
    fn default() -> Self {
        Self::standard()
    }
}
