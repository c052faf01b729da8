pub mod suffix;
pub mod synthesizer;
