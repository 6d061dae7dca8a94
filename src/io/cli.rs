//! Command-line interface and batch file processing

use crate::algorithm::executor::{AbstractionConfig, Abstractor};
use crate::io::configuration::{
    DEFAULT_BACKGROUND_FRACTION, DEFAULT_CUT_ATTEMPTS, DEFAULT_GENERATIONS, DEFAULT_PALETTE_GRAIN,
    DEFAULT_SAMPLE_CAP, DEFAULT_SEED, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, target_error};
use crate::io::image::{export_rgb_image, load_rgb_image};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mondrify")]
#[command(
    author,
    version,
    about = "Render images as Mondrian-style rectangular abstractions"
)]
/// Command-line arguments for the abstraction tool
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible abstraction
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of split generations to run
    #[arg(short, long, default_value_t = DEFAULT_GENERATIONS)]
    pub generations: usize,

    /// Randomized cut attempts per axis at each split
    #[arg(short, long, default_value_t = DEFAULT_CUT_ATTEMPTS)]
    pub cuts: usize,

    /// Fraction of regions rendered as white background
    #[arg(short, long, default_value_t = DEFAULT_BACKGROUND_FRACTION)]
    pub white: f64,

    /// Rounding step for palette simplification
    #[arg(long, default_value_t = DEFAULT_PALETTE_GRAIN)]
    pub grain: f64,

    /// Maximum pixels sampled per region
    #[arg(long, default_value_t = DEFAULT_SAMPLE_CAP)]
    pub samples: usize,

    /// Border width in pixels (default derived from image size)
    #[arg(short, long)]
    pub border: Option<u32>,

    /// Minimum region edge in pixels (default derived from image size)
    #[arg(long)]
    pub min_edge: Option<u32>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Engine configuration for one image, CLI knobs over derived defaults
    pub fn config_for(&self, width: u32, height: u32) -> AbstractionConfig {
        let mut config = AbstractionConfig::for_canvas(width, height);
        config.cut_attempts = self.cuts;
        config.generations = self.generations;
        config.background_fraction = self.white;
        config.palette_grain = self.grain;
        config.sample_cap = self.samples;
        if let Some(border) = self.border {
            config.border_width = border;
        }
        if let Some(min_edge) = self.min_edge {
            config.split_margin = min_edge;
        }
        config
    }
}

/// Check whether a path carries a supported image extension
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            let lowered = ext.to_ascii_lowercase();
            matches!(lowered.as_str(), "png" | "jpg" | "jpeg")
        })
}

/// Output path for an input image: same directory, suffixed stem, PNG
///
/// The abstraction is always written as PNG regardless of the input format.
pub fn output_path_for(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!("{}{}.png", stem.to_string_lossy(), OUTPUT_SUFFIX);

    input_path.parent().map_or_else(
        || PathBuf::from(&output_name),
        |parent| parent.join(&output_name),
    )
}

/// Orchestrates batch processing of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_supported_image(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(target_error("Target file must be a PNG or JPEG image"))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if is_supported_image(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(target_error(
                "Target must be a PNG or JPEG file or a directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = output_path_for(input_path);
        if output_path.exists() {
            // Allow print for user feedback on skipped files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        let output_path = output_path_for(input_path);
        let mut buffer = load_rgb_image(input_path)?;
        let (width, height) = buffer.dimensions();

        let config = self.cli.config_for(width, height);
        let mut abstractor = Abstractor::new(config, width, height, self.cli.seed)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(input_path, self.cli.generations);
        }

        loop {
            let more = abstractor.step(&buffer)?;
            if let Some(ref pm) = self.progress_manager {
                pm.update_generation(abstractor.generation());
            }
            if !more {
                break;
            }
        }

        abstractor.finalize(&mut buffer)?;

        export_rgb_image(
            &buffer,
            output_path
                .to_str()
                .ok_or_else(|| target_error("Invalid output path"))?,
        )?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }
}
