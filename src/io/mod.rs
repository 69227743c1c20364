//! Input/output operations and error handling

/// Argument parsing, validation and run orchestration
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error taxonomy and exit codes
pub mod error;
/// Image decoding and PNG export
pub mod image;
/// Per-tile progress display
pub mod progress;
