//! Tool constants and runtime configuration defaults

// Tiling
/// Edge length in pixels used when no tile size argument is given
pub const DEFAULT_TILE_SIZE: u32 = 128;

// Output settings
/// Suffix appended to the input file stem
pub const OUTPUT_SUFFIX: &str = "_flipped";
/// Extension of the written file; the encoder is always PNG
pub const OUTPUT_EXTENSION: &str = "png";

// Progress bar display settings
/// Width of the tile progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Images with fewer tiles than this finish too quickly to warrant a bar
pub const MIN_TILES_FOR_PROGRESS: usize = 64;

// Usage text shown when the tool is invoked without arguments
/// Generic invocation line
pub const USAGE_LINE: &str = "usage: tileflip <insert_file_path> <optional tile size>";
/// Example invocation line
pub const EXAMPLE_LINE: &str = "example: tileflip pacman.png";

/// Note describing the default tile size
pub fn default_tile_size_line() -> String {
    format!("default tile size: {DEFAULT_TILE_SIZE}px by {DEFAULT_TILE_SIZE}px")
}

// Process exit codes
/// Argument validation failed before any file was read
pub const EXIT_USAGE_ERROR: u8 = 2;
/// Decoding, encoding or filesystem access failed
pub const EXIT_FAILURE: u8 = 1;
