//! Per-frame analysis driven by the host, plus the windows its input expects

pub mod analysis;
pub mod windowing;

pub use analysis::{AnalyzerConfig, BandAnalyzer};
pub use windowing::{apply_window, generate_window, WindowType, EXPECTED_INPUT_WINDOW};
