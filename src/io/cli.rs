//! Command-line interface for flipping the tiles of a single image

use crate::algorithm::TileFlipper;
use crate::io::configuration::{
    EXAMPLE_LINE, OUTPUT_EXTENSION, OUTPUT_SUFFIX, USAGE_LINE, default_tile_size_line,
};
use crate::io::error::{FlipError, Result, invalid_parameter};
use crate::io::image::{load_rgba, save_png};
use crate::io::progress::ProgressManager;
use crate::spatial::{TileGrid, TileSize};
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "tileflip")]
#[command(
    author,
    version,
    about = "Flip every square tile of a tileset across its anti-diagonal"
)]
/// Positional command-line arguments
pub struct Cli {
    /// Image file whose tiles are flipped
    #[arg(value_name = "FILEPATH", allow_hyphen_values = true)]
    pub filepath: Option<PathBuf>,

    /// Edge length of each square tile in pixels [default: 128]
    #[arg(
        value_name = "TILE_SIZE",
        allow_hyphen_values = true,
        allow_negative_numbers = true
    )]
    pub tile_size: Option<String>,
}

impl Cli {
    /// Validate the arguments into a request
    ///
    /// Returns `Ok(None)` when no file path was given, which asks for usage
    /// text rather than processing. No file contents are read here.
    ///
    /// # Errors
    ///
    /// Returns `FlipError::MissingInput` if the path is not an existing
    /// regular file, or `FlipError::InvalidTileSize` if the tile size is not
    /// a positive integer
    pub fn request(&self) -> Result<Option<FlipRequest>> {
        let Some(ref filepath) = self.filepath else {
            return Ok(None);
        };

        if !filepath.is_file() {
            return Err(FlipError::MissingInput {
                path: filepath.clone(),
            });
        }

        let tile_size = TileSize::parse(self.tile_size.as_deref())?;

        Ok(Some(FlipRequest {
            input: filepath.clone(),
            tile_size,
        }))
    }
}

/// Validated input path and tile size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipRequest {
    /// Existing image file to read
    pub input: PathBuf,
    /// Edge length of the tiles to flip
    pub tile_size: TileSize,
}

impl FlipRequest {
    /// Path the flipped image is written to
    ///
    /// # Errors
    ///
    /// Returns an error if the input path has no file name
    pub fn output_path(&self) -> Result<PathBuf> {
        output_path_for(&self.input)
    }
}

/// Derive `<stem>_flipped.png` in the same directory as `input_path`
///
/// # Errors
///
/// Returns an error if the input path has no file name
pub fn output_path_for(input_path: &Path) -> Result<PathBuf> {
    let stem = input_path.file_stem().ok_or_else(|| {
        invalid_parameter(
            "filepath",
            &input_path.display(),
            &"path has no file name",
        )
    })?;
    let mut output_name = stem.to_os_string();
    output_name.push(OUTPUT_SUFFIX);
    output_name.push(".");
    output_name.push(OUTPUT_EXTENSION);

    if let Some(parent) = input_path.parent() {
        Ok(parent.join(output_name))
    } else {
        Ok(PathBuf::from(output_name))
    }
}

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No arguments were given, so usage text was printed
    UsageShown,
    /// The flipped image was written
    Flipped {
        /// Path of the written PNG
        output: PathBuf,
        /// Number of tiles flipped
        tiles: usize,
    },
}

/// Orchestrates validation, flipping and export for one invocation
pub struct FileProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self {
            cli,
            progress_manager: ProgressManager::new(),
        }
    }

    /// Create a file processor with a specific progress display
    pub const fn with_progress_manager(cli: Cli, progress_manager: ProgressManager) -> Self {
        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the tool according to the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation fails, the image cannot be
    /// decoded or the output cannot be written. Validation errors occur
    /// before any file is read.
    pub fn process(&mut self) -> Result<RunOutcome> {
        let Some(request) = self.cli.request()? else {
            print_usage();
            return Ok(RunOutcome::UsageShown);
        };

        let output = request.output_path()?;
        let source = load_rgba(&request.input)?;

        let flipper = TileFlipper::new(request.tile_size);
        let (width, height) = source.dimensions();
        let tile_count = TileGrid::for_dimensions(width, height, request.tile_size).tile_count();

        self.progress_manager.initialize(&request.input, tile_count);
        let progress = &self.progress_manager;
        let outcome = flipper.flip_with_progress(&source, |_position| progress.advance());
        self.progress_manager.finish();

        save_png(&outcome.image, &output)?;

        info!(
            "Wrote '{}' ({} tiles of {}px)",
            output.display(),
            outcome.tiles_flipped,
            request.tile_size
        );

        Ok(RunOutcome::Flipped {
            output,
            tiles: outcome.tiles_flipped,
        })
    }
}

// Usage goes to stdout, matching the informational exit path
#[allow(clippy::print_stdout)]
fn print_usage() {
    println!("{USAGE_LINE}");
    println!("{EXAMPLE_LINE}");
    println!("{}", default_tile_size_line());
}
