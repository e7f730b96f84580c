/// Command-line interface
pub mod cli;
/// Constants and generator configuration
pub mod configuration;
/// Error types
pub mod error;
/// PNG preview export
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Input overrides
pub mod prefill;
/// Progress display
pub mod progress;
/// Tileset file loading
pub mod tileset;
/// Text rendering of layouts
pub mod visualization;
