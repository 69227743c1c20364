//! Terminal progress display for per-tile processing

use crate::io::configuration::{MIN_TILES_FOR_PROGRESS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static TILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} tiles"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many tiles of one image have been flipped
///
/// The bar draws to stderr and stays hidden when stderr is not a terminal.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    visible: bool,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager that draws to stderr
    pub const fn new() -> Self {
        Self {
            bar: None,
            visible: true,
        }
    }

    /// Create a progress manager that never draws anything
    pub const fn hidden() -> Self {
        Self {
            bar: None,
            visible: false,
        }
    }

    /// Prepare a bar for `tile_count` tiles of the image at `path`
    ///
    /// Small images finish instantly, so no bar is created for them.
    pub fn initialize(&mut self, path: &Path, tile_count: usize) {
        if !self.visible || tile_count < MIN_TILES_FOR_PROGRESS {
            self.bar = None;
            return;
        }

        let bar = ProgressBar::with_draw_target(
            Some(tile_count as u64),
            ProgressDrawTarget::stderr(),
        );
        bar.set_style(TILE_STYLE.clone());
        bar.set_prefix(
            path.file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        );
        self.bar = Some(bar);
    }

    /// Record one finished tile
    pub fn advance(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Tiles recorded so far, zero when no bar is active
    pub fn position(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Clear the bar from the terminal
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
