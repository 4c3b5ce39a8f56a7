//! Per-source band analyzer
//!
//! Owns everything one audio source needs between frames: the last
//! magnitude buffer, the raw band values and the smoother state. The host
//! drives it by calling `tick` from its own frame or timer loop. Several
//! sources are handled by several analyzers; they share nothing.

use crate::bands::{BandSmoother, SmootherConfig, SpectrumBander, BAND_COUNT, MAGNITUDE_LEN};
use crate::error::BandError;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Band analyzer configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Decay parameters for the smoothed output
    pub smoothing: SmootherConfig,
}

/// Turns one magnitude spectrum per tick into 8 smoothed band levels
#[derive(Debug, Clone)]
pub struct BandAnalyzer {
    config: AnalyzerConfig,
    bander: SpectrumBander,
    smoother: BandSmoother,

    /// Magnitudes from the last successful tick
    magnitudes: Box<[f64; MAGNITUDE_LEN]>,

    /// Raw band values from the last successful tick
    bands: [f64; BAND_COUNT],

    ticks: u64,
}

impl BandAnalyzer {
    /// Create new band analyzer
    pub fn new(config: AnalyzerConfig) -> Result<Self, BandError> {
        let smoother = BandSmoother::new(config.smoothing)?;

        debug!(
            default_decay = config.smoothing.default_decay,
            decay_growth = config.smoothing.decay_growth,
            "band analyzer created"
        );

        Ok(Self {
            config,
            bander: SpectrumBander::new(),
            smoother,
            magnitudes: Box::new([0.0; MAGNITUDE_LEN]),
            bands: [0.0; BAND_COUNT],
            ticks: 0,
        })
    }

    /// Process one frame of spectrum data
    ///
    /// # Arguments
    /// * `magnitudes` - Exactly 512 magnitudes, ideally from a
    ///   Blackman-Harris windowed FFT
    ///
    /// # Returns
    /// Smoothed band levels. A wrong-length buffer is rejected and leaves
    /// the analyzer untouched.
    pub fn tick(&mut self, magnitudes: &[f64]) -> Result<&[f64; BAND_COUNT], BandError> {
        let Ok(magnitudes) = <&[f64; MAGNITUDE_LEN]>::try_from(magnitudes) else {
            warn!(
                expected = MAGNITUDE_LEN,
                actual = magnitudes.len(),
                "rejected magnitude buffer"
            );
            return Err(BandError::MagnitudeLength {
                expected: MAGNITUDE_LEN,
                actual: magnitudes.len(),
            });
        };

        Ok(self.tick_array(magnitudes))
    }

    /// Process one frame from a fixed-size buffer (cannot fail)
    pub fn tick_array(&mut self, magnitudes: &[f64; MAGNITUDE_LEN]) -> &[f64; BAND_COUNT] {
        self.magnitudes.copy_from_slice(magnitudes);
        self.bands = self.bander.compute_bands_array(&self.magnitudes);
        self.smoother.smooth(&self.bands);
        self.ticks += 1;

        trace!(tick = self.ticks, bands = ?self.bands, "band analyzer tick");

        self.smoother.smoothed()
    }

    /// Update configuration
    ///
    /// Smoothed levels and in-flight decay rates are kept.
    pub fn update_config(&mut self, config: AnalyzerConfig) -> Result<(), BandError> {
        self.smoother.set_config(config.smoothing)?;
        self.config = config;

        debug!(
            default_decay = config.smoothing.default_decay,
            decay_growth = config.smoothing.decay_growth,
            "band analyzer reconfigured"
        );

        Ok(())
    }

    /// Clear all per-frame state, keeping the configuration
    pub fn reset(&mut self) {
        self.magnitudes.fill(0.0);
        self.bands = [0.0; BAND_COUNT];
        self.smoother.reset();
        self.ticks = 0;
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn magnitudes(&self) -> &[f64; MAGNITUDE_LEN] {
        &self.magnitudes
    }

    pub fn bands(&self) -> &[f64; BAND_COUNT] {
        &self.bands
    }

    pub fn smoothed(&self) -> &[f64; BAND_COUNT] {
        self.smoother.smoothed()
    }

    pub fn decay_rates(&self) -> &[f64; BAND_COUNT] {
        self.smoother.decay_rates()
    }

    /// Number of successful ticks since creation or the last reset
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Default for BandAnalyzer {
    fn default() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            bander: SpectrumBander::new(),
            smoother: BandSmoother::default(),
            magnitudes: Box::new([0.0; MAGNITUDE_LEN]),
            bands: [0.0; BAND_COUNT],
            ticks: 0,
        }
    }
}
