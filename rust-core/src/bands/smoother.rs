//! Rise-instantly, fall-gradually band smoothing
//!
//! A band that goes up snaps to the new value and its decay rate resets.
//! A band that goes down loses `decay_rate` per tick while the rate is
//! multiplied by `decay_growth`, so falls speed up the longer they last.
//! Nothing clamps the fall: a smoothed value can drop below its band value,
//! or below zero, until the next rise catches it.

use super::layout::BAND_COUNT;
use crate::error::BandError;
use serde::{Deserialize, Serialize};

/// Smoothing parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmootherConfig {
    /// Decay rate a band restarts from after every rise
    pub default_decay: f64,

    /// Factor applied to the decay rate on each falling tick
    pub decay_growth: f64,
}

impl Default for SmootherConfig {
    fn default() -> Self {
        Self {
            default_decay: 0.005,
            decay_growth: 1.2,
        }
    }
}

impl SmootherConfig {
    pub fn validate(&self) -> Result<(), BandError> {
        if !self.default_decay.is_finite() || self.default_decay < 0.0 {
            return Err(BandError::InvalidDecay(self.default_decay));
        }
        if !self.decay_growth.is_finite() || self.decay_growth < 0.0 {
            return Err(BandError::InvalidGrowth(self.decay_growth));
        }
        Ok(())
    }
}

/// Per-band state carried between ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmootherState {
    pub smoothed: [f64; BAND_COUNT],
    pub decay_rate: [f64; BAND_COUNT],
}

impl SmootherState {
    /// Zeroed levels with every decay rate at `default_decay`
    pub fn new(default_decay: f64) -> Self {
        Self {
            smoothed: [0.0; BAND_COUNT],
            decay_rate: [default_decay; BAND_COUNT],
        }
    }
}

/// Apply one smoothing tick to `state`
///
/// # Arguments
/// * `band_values` - Raw band values for this tick
/// * `state` - Smoothed values and decay rates, updated in place
/// * `default_decay` - Rate a band resets to when it rises
/// * `decay_growth` - Multiplier for the rate of a falling band
pub fn smooth_bands(
    band_values: &[f64; BAND_COUNT],
    state: &mut SmootherState,
    default_decay: f64,
    decay_growth: f64,
) {
    let bands = state
        .smoothed
        .iter_mut()
        .zip(state.decay_rate.iter_mut())
        .zip(band_values.iter());

    for ((smoothed, rate), &value) in bands {
        if *smoothed < value {
            *smoothed = value;
            *rate = default_decay;
        } else if *smoothed > value {
            *smoothed -= *rate;
            *rate *= decay_growth;
        }
    }
}

/// Band smoother owning its state across ticks
#[derive(Debug, Clone)]
pub struct BandSmoother {
    config: SmootherConfig,
    state: SmootherState,
}

impl BandSmoother {
    pub fn new(config: SmootherConfig) -> Result<Self, BandError> {
        config.validate()?;
        Ok(Self {
            config,
            state: SmootherState::new(config.default_decay),
        })
    }

    /// Start from an explicit state instead of zeroed levels
    pub fn with_state(config: SmootherConfig, state: SmootherState) -> Result<Self, BandError> {
        config.validate()?;
        Ok(Self { config, state })
    }

    /// Smooth one tick of band values and return the updated levels
    pub fn smooth(&mut self, band_values: &[f64; BAND_COUNT]) -> &[f64; BAND_COUNT] {
        smooth_bands(
            band_values,
            &mut self.state,
            self.config.default_decay,
            self.config.decay_growth,
        );
        &self.state.smoothed
    }

    /// Replace the parameters.
    ///
    /// Rates of bands that are currently falling keep growing from where
    /// they are; the new default decay takes effect on the next rise.
    pub fn set_config(&mut self, config: SmootherConfig) -> Result<(), BandError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.state = SmootherState::new(self.config.default_decay);
    }

    pub fn config(&self) -> &SmootherConfig {
        &self.config
    }

    pub fn state(&self) -> &SmootherState {
        &self.state
    }

    pub fn smoothed(&self) -> &[f64; BAND_COUNT] {
        &self.state.smoothed
    }

    pub fn decay_rates(&self) -> &[f64; BAND_COUNT] {
        &self.state.decay_rate
    }
}

impl Default for BandSmoother {
    fn default() -> Self {
        let config = SmootherConfig::default();
        Self {
            config,
            state: SmootherState::new(config.default_decay),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unit_config() -> SmootherConfig {
        SmootherConfig {
            default_decay: 1.0,
            decay_growth: 2.0,
        }
    }

    #[test]
    fn test_rise_snaps_and_resets_rate() {
        let state = SmootherState {
            smoothed: [0.0; BAND_COUNT],
            decay_rate: [64.0; BAND_COUNT],
        };
        let mut smoother = BandSmoother::with_state(unit_config(), state).unwrap();

        let bands = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let smoothed = *smoother.smooth(&bands);

        assert_eq!(smoothed, bands);
        assert_eq!(smoother.decay_rates(), &[1.0; BAND_COUNT]);
    }

    #[test]
    fn test_accelerating_fall_overshoots_below_zero() {
        let mut smoother = BandSmoother::new(unit_config()).unwrap();
        smoother.smooth(&[10.0; BAND_COUNT]);

        let silence = [0.0; BAND_COUNT];
        let expected = [(9.0, 2.0), (7.0, 4.0), (3.0, 8.0), (-5.0, 16.0)];

        for (smoothed, rate) in expected {
            smoother.smooth(&silence);
            assert_eq!(smoother.smoothed()[0], smoothed);
            assert_eq!(smoother.decay_rates()[0], rate);
        }
    }

    #[test]
    fn test_rise_after_overshoot_snaps_back() {
        let mut smoother = BandSmoother::new(unit_config()).unwrap();
        smoother.smooth(&[2.0; BAND_COUNT]);
        smoother.smooth(&[1.5; BAND_COUNT]); // 1.0, rate 2
        smoother.smooth(&[1.5; BAND_COUNT]); // rises again

        assert_eq!(smoother.smoothed(), &[1.5; BAND_COUNT]);
        assert_eq!(smoother.decay_rates(), &[1.0; BAND_COUNT]);
    }

    #[test]
    fn test_equal_value_is_a_no_op() {
        let mut smoother = BandSmoother::new(unit_config()).unwrap();
        smoother.smooth(&[4.0; BAND_COUNT]);
        smoother.smooth(&[3.0; BAND_COUNT]);
        let before = *smoother.state();

        // 4.0 - 1.0 = 3.0, so the band now equals the smoothed value
        for _ in 0..5 {
            smoother.smooth(&[3.0; BAND_COUNT]);
        }

        assert_eq!(smoother.state(), &before);
        assert_eq!(smoother.decay_rates(), &[2.0; BAND_COUNT]);
    }

    #[test]
    fn test_bands_are_independent() {
        let mut smoother = BandSmoother::new(unit_config()).unwrap();
        smoother.smooth(&[5.0, 0.0, 5.0, 0.0, 5.0, 0.0, 5.0, 0.0]);
        smoother.smooth(&[0.0, 3.0, 0.0, 3.0, 5.0, 0.0, 6.0, 0.0]);

        assert_eq!(
            smoother.smoothed(),
            &[4.0, 3.0, 4.0, 3.0, 5.0, 0.0, 6.0, 0.0]
        );
        assert_eq!(
            smoother.decay_rates(),
            &[2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0]
        );
    }

    #[test]
    fn test_free_function_matches_smoother() {
        let config = SmootherConfig::default();
        let mut state = SmootherState::new(config.default_decay);
        let mut smoother = BandSmoother::new(config).unwrap();

        let ticks = [[1.0; BAND_COUNT], [0.5; BAND_COUNT], [0.2; BAND_COUNT]];
        for bands in &ticks {
            smooth_bands(bands, &mut state, config.default_decay, config.decay_growth);
            smoother.smooth(bands);
        }

        assert_eq!(&state, smoother.state());
    }

    #[test]
    fn test_set_config_keeps_falling_rates() {
        let mut smoother = BandSmoother::new(unit_config()).unwrap();
        smoother.smooth(&[10.0; BAND_COUNT]);
        smoother.smooth(&[0.0; BAND_COUNT]);

        smoother
            .set_config(SmootherConfig {
                default_decay: 0.5,
                decay_growth: 3.0,
            })
            .unwrap();

        smoother.smooth(&[0.0; BAND_COUNT]);
        assert_eq!(smoother.smoothed()[0], 7.0);
        assert_eq!(smoother.decay_rates()[0], 6.0);

        smoother.smooth(&[20.0; BAND_COUNT]);
        assert_eq!(smoother.decay_rates()[0], 0.5);
    }

    #[test]
    fn test_reset() {
        let mut smoother = BandSmoother::default();
        smoother.smooth(&[3.0; BAND_COUNT]);
        smoother.smooth(&[0.0; BAND_COUNT]);
        smoother.reset();

        assert_eq!(smoother.state(), &SmootherState::new(0.005));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let bad_decay = SmootherConfig {
            default_decay: -0.1,
            ..SmootherConfig::default()
        };
        assert_eq!(
            BandSmoother::new(bad_decay).unwrap_err(),
            BandError::InvalidDecay(-0.1)
        );

        let bad_growth = SmootherConfig {
            decay_growth: f64::NAN,
            ..SmootherConfig::default()
        };
        assert!(matches!(
            BandSmoother::new(bad_growth),
            Err(BandError::InvalidGrowth(_))
        ));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: SmootherConfig = serde_json::from_str(r#"{"decay_growth": 1.5}"#).unwrap();
        assert_eq!(config.default_decay, 0.005);
        assert_eq!(config.decay_growth, 1.5);
    }

    proptest! {
        #[test]
        fn prop_rise_snaps_exactly(start in 0.0f64..100.0, bump in 0.001f64..100.0) {
            let mut smoother = BandSmoother::default();
            smoother.smooth(&[start; BAND_COUNT]);
            smoother.smooth(&[start * 0.5; BAND_COUNT]);

            let target = start + bump;
            smoother.smooth(&[target; BAND_COUNT]);

            prop_assert_eq!(smoother.smoothed(), &[target; BAND_COUNT]);
            prop_assert_eq!(smoother.decay_rates(), &[0.005; BAND_COUNT]);
        }

        #[test]
        fn prop_decay_rate_never_shrinks_while_falling(
            peak in 1.0f64..1000.0,
            growth in 1.0f64..3.0,
            ticks in 1usize..40,
        ) {
            let config = SmootherConfig { default_decay: 0.01, decay_growth: growth };
            let mut smoother = BandSmoother::new(config).unwrap();
            smoother.smooth(&[peak; BAND_COUNT]);

            let mut last_rate = smoother.decay_rates()[0];
            let mut last_level = smoother.smoothed()[0];
            for _ in 0..ticks {
                if last_level <= 0.0 {
                    break;
                }
                smoother.smooth(&[0.0; BAND_COUNT]);
                prop_assert!(smoother.decay_rates()[0] >= last_rate);
                prop_assert!(smoother.smoothed()[0] < last_level);
                last_rate = smoother.decay_rates()[0];
                last_level = smoother.smoothed()[0];
            }
        }
    }
}
