//! Pipeline executor and configuration

use crate::algorithm::builder::advance_generation;
use crate::io::configuration::{
    BORDER_WIDTH_DIVISOR, DEFAULT_BACKGROUND_FRACTION, DEFAULT_CUT_ATTEMPTS, DEFAULT_GENERATIONS,
    DEFAULT_PALETTE_GRAIN, DEFAULT_SAMPLE_CAP, MAX_PALETTE_GRAIN, MIN_EDGE_DIVISOR,
};
use crate::io::error::{AbstractionError, Result, invalid_parameter};
use crate::render::border::render_borders;
use crate::render::recolor::recolor_partition;
use crate::spatial::{Partition, Region};
use image::RgbImage;
use rand::{SeedableRng, rngs::StdRng};

/// Border thickness derived from canvas size
///
/// The short side divided by 200, so small images get hairline borders and
/// large ones scale up proportionally.
pub const fn derived_border_width(width: u32, height: u32) -> u32 {
    let short_side = if width < height { width } else { height };
    short_side / BORDER_WIDTH_DIVISOR
}

/// Minimum region edge derived from canvas size
///
/// A tenth of the short side, but never less than twice the border width so
/// borders cannot swallow a region.
pub const fn derived_split_margin(width: u32, height: u32) -> u32 {
    let short_side = if width < height { width } else { height };
    let edge = short_side / MIN_EDGE_DIVISOR;
    let border_space = 2 * derived_border_width(width, height);
    if edge > border_space { edge } else { border_space }
}

/// Engine parameters controlling the partition search and the render passes
#[derive(Clone, Copy, Debug)]
pub struct AbstractionConfig {
    /// Randomized cut positions tried per admissible axis
    pub cut_attempts: usize,
    /// Number of generation steps to run
    pub generations: usize,
    /// Fraction of regions flattened to the background color, in `[0, 1]`
    pub background_fraction: f64,
    /// Rounding step for palette quantization, in `(0, 127]`
    pub palette_grain: f64,
    /// Ceiling on pixels sampled per region
    pub sample_cap: usize,
    /// Minimum distance from a region edge to any cut
    pub split_margin: u32,
    /// Extra border lines painted inward beyond the edge line itself
    pub border_width: u32,
}

impl AbstractionConfig {
    /// Defaults for a canvas of the given size, margins derived from it
    pub const fn for_canvas(width: u32, height: u32) -> Self {
        Self {
            cut_attempts: DEFAULT_CUT_ATTEMPTS,
            generations: DEFAULT_GENERATIONS,
            background_fraction: DEFAULT_BACKGROUND_FRACTION,
            palette_grain: DEFAULT_PALETTE_GRAIN,
            sample_cap: DEFAULT_SAMPLE_CAP,
            split_margin: derived_split_margin(width, height),
            border_width: derived_border_width(width, height),
        }
    }

    /// Reject degenerate parameter values
    ///
    /// Runs before any buffer mutation so an invalid configuration never
    /// produces a partially processed image.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - `cut_attempts`, `generations`, or `sample_cap` is zero
    /// - `background_fraction` lies outside `[0, 1]`
    /// - `palette_grain` lies outside `(0, 127]` or is not finite
    pub fn validate(&self) -> Result<()> {
        if self.cut_attempts == 0 {
            return Err(invalid_parameter(
                "cut_attempts",
                &self.cut_attempts,
                &"must be positive",
            ));
        }
        if self.generations == 0 {
            return Err(invalid_parameter(
                "generations",
                &self.generations,
                &"must be positive",
            ));
        }
        if self.sample_cap == 0 {
            return Err(invalid_parameter(
                "sample_cap",
                &self.sample_cap,
                &"must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&self.background_fraction) {
            return Err(invalid_parameter(
                "background_fraction",
                &self.background_fraction,
                &"must lie in [0, 1]",
            ));
        }
        if !self.palette_grain.is_finite()
            || self.palette_grain <= 0.0
            || self.palette_grain > MAX_PALETTE_GRAIN
        {
            return Err(invalid_parameter(
                "palette_grain",
                &self.palette_grain,
                &format!("must lie in (0, {MAX_PALETTE_GRAIN}]"),
            ));
        }
        Ok(())
    }
}

/// Abstraction pipeline executor
///
/// Owns the validated configuration, the seeded random source, and the
/// growing partition. The generator is threaded through every stochastic
/// call in a fixed order, so a seed fully determines the output buffer.
pub struct Abstractor {
    config: AbstractionConfig,
    rng: StdRng,
    partition: Partition,
    generation: usize,
}

impl Abstractor {
    /// Create an executor for a `width` x `height` canvas
    ///
    /// Validates the configuration up front and initializes the partition to
    /// the single canvas region.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration fails validation
    /// - Either canvas dimension is zero
    pub fn new(config: AbstractionConfig, width: u32, height: u32, seed: u64) -> Result<Self> {
        config.validate()?;

        let canvas = Region::covering(width, height).ok_or_else(|| {
            AbstractionError::InvalidSourceData {
                reason: format!("canvas dimensions {width}x{height} must both be positive"),
            }
        })?;

        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            partition: Partition::new(canvas),
            generation: 0,
        })
    }

    /// Access the engine configuration
    pub const fn config(&self) -> &AbstractionConfig {
        &self.config
    }

    /// Access the current partition
    pub const fn partition(&self) -> &Partition {
        &self.partition
    }

    /// Number of generation steps executed so far
    pub const fn generation(&self) -> usize {
        self.generation
    }

    /// Execute a single generation step
    ///
    /// Returns whether further steps remain; the call after the final
    /// generation is a no-op returning `false`.
    ///
    /// # Errors
    ///
    /// Propagates generation-step failures (a region escaping the buffer).
    pub fn step(&mut self, buffer: &RgbImage) -> Result<bool> {
        if self.generation >= self.config.generations {
            return Ok(false);
        }

        self.generation += 1;
        advance_generation(buffer, &mut self.partition, &self.config, &mut self.rng)?;
        Ok(self.generation < self.config.generations)
    }

    /// Flatten region colors and paint borders into the buffer
    ///
    /// # Errors
    ///
    /// Propagates render failures (a region escaping the buffer).
    pub fn finalize(&mut self, buffer: &mut RgbImage) -> Result<()> {
        recolor_partition(
            buffer,
            &self.partition,
            self.config.background_fraction,
            self.config.palette_grain,
            self.config.sample_cap,
            &mut self.rng,
        )?;
        render_borders(buffer, &self.partition, self.config.border_width)
    }

    /// Run the complete pipeline: all generations, then recolor and borders
    ///
    /// # Errors
    ///
    /// Propagates the first step or render failure.
    pub fn run(&mut self, buffer: &mut RgbImage) -> Result<()> {
        while self.step(buffer)? {}
        self.finalize(buffer)
    }
}
