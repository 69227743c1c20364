//! Spatial data structures for tiled images
//!
//! This module contains:
//! - Tile size validation and grid geometry
//! - Tile extraction, flipping and pasting

/// Tile size, grid dimensions and tile positions
pub mod grid;
/// Owned pixel tiles and the anti-diagonal flip
pub mod tiles;

pub use grid::{TileGrid, TilePosition, TileSize};
pub use tiles::PixelTile;
