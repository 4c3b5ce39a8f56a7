//! Window functions for the FFT that feeds the analyzer
//!
//! The analyzer never computes an FFT itself. Its band weights were tuned
//! against magnitudes taken through a Blackman-Harris window, so hosts that
//! run their own FFT should use `EXPECTED_INPUT_WINDOW` to stay comparable.

use std::f64::consts::PI;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowType {
    /// w[n] = 1
    Rectangular,

    /// w[n] = 1 - |2n/(M-1) - 1|
    Triangle,

    /// w[n] = 0.54 - 0.46*cos(2πn/(M-1))
    Hamming,

    /// w[n] = 0.5 - 0.5*cos(2πn/(M-1))
    Hann,

    /// w[n] = 0.42 - 0.5*cos(2πn/(M-1)) + 0.08*cos(4πn/(M-1))
    Blackman,

    /// 4-term Blackman-Harris, sidelobes around -92 dB
    BlackmanHarris,
}

/// Window the band weights assume
pub const EXPECTED_INPUT_WINDOW: WindowType = WindowType::BlackmanHarris;

const BLACKMAN_HARRIS: [f64; 4] = [0.35875, 0.48829, 0.14128, 0.01168];

/// Generate window coefficients
///
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (M)
///
/// # Returns
/// Vector of window coefficients w[n] for n = 0..M-1
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f64> {
    if length <= 1 {
        return vec![1.0; length];
    }

    let span = (length - 1) as f64;

    (0..length)
        .map(|n| {
            let x = n as f64 / span;
            let angle = 2.0 * PI * x;
            match window_type {
                WindowType::Rectangular => 1.0,
                WindowType::Triangle => 1.0 - (2.0 * x - 1.0).abs(),
                WindowType::Hamming => 0.54 - 0.46 * angle.cos(),
                WindowType::Hann => 0.5 - 0.5 * angle.cos(),
                WindowType::Blackman => 0.42 - 0.5 * angle.cos() + 0.08 * (2.0 * angle).cos(),
                WindowType::BlackmanHarris => {
                    let [a0, a1, a2, a3] = BLACKMAN_HARRIS;
                    a0 - a1 * angle.cos() + a2 * (2.0 * angle).cos() - a3 * (3.0 * angle).cos()
                }
            }
        })
        .collect()
}

/// Apply window to signal
pub fn apply_window(signal: &[f64], window_type: WindowType) -> Vec<f64> {
    let window = generate_window(window_type, signal.len());

    signal
        .iter()
        .zip(window.iter())
        .map(|(&s, &w)| s * w)
        .collect()
}

/// Apply window in-place
pub fn apply_window_inplace(signal: &mut [f64], window_type: WindowType) {
    let window = generate_window(window_type, signal.len());

    for (s, w) in signal.iter_mut().zip(window.iter()) {
        *s *= w;
    }
}

/// Amplitude correction factor for a window
///
/// Multiply FFT magnitudes by this to undo the window's coherent gain.
pub fn window_correction_factor(window_type: WindowType, length: usize) -> f64 {
    let window = generate_window(window_type, length);
    let sum: f64 = window.iter().sum();
    length as f64 / sum
}
