//! Anti-diagonal flipping of square tiles in texture tilesets
//!
//! Each whole tile of an image is transposed in place on its grid cell, so a
//! tileset and its flipped counterpart together cover every orientation a
//! renderer needs. Pixels outside the whole-tile grid are left transparent.

#![forbid(unsafe_code)]

/// Whole-image flip driver
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Tile geometry and per-tile pixel operations
pub mod spatial;

pub use algorithm::{FlipOutcome, TileFlipper};
pub use io::error::{FlipError, Result};
pub use spatial::{PixelTile, TileGrid, TilePosition, TileSize};
