//! Progress display for batch runs

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static GENERATION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch abstraction runs
///
/// Files are processed serially, so a single generation bar tracks the
/// active file; a batch bar above it appears once the file count grows
/// beyond a handful.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    generation_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            generation_bar: None,
        }
    }

    /// Initialize the display for a batch of `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Configure the generation bar for a new file
    pub fn start_file(&mut self, path: &Path, generations: usize) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let bar = ProgressBar::new(generations as u64);
        bar.set_style(GENERATION_STYLE.clone());
        bar.set_message(display_name);

        if let Some(previous) = self.generation_bar.replace(self.multi_progress.add(bar)) {
            previous.finish_and_clear();
        }
    }

    /// Report the current generation of the active file
    pub fn update_generation(&self, generation: usize) {
        if let Some(ref bar) = self.generation_bar {
            bar.set_position(generation as u64);
        }
    }

    /// Mark the active file as completed
    pub fn complete_file(&mut self) {
        if let Some(bar) = self.generation_bar.take() {
            bar.finish_and_clear();
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }
}
