//! Engine constants and runtime configuration defaults

use image::Rgb;

// Default values for configurable parameters
/// Fixed seed for reproducible abstraction
pub const DEFAULT_SEED: u64 = 42;

/// Default number of split generations
pub const DEFAULT_GENERATIONS: usize = 50;

/// Default number of randomized cut attempts per admissible axis
pub const DEFAULT_CUT_ATTEMPTS: usize = 100;

/// Default fraction of regions flattened to the background color
pub const DEFAULT_BACKGROUND_FRACTION: f64 = 0.1;

/// Default rounding step for palette quantization
pub const DEFAULT_PALETTE_GRAIN: f64 = 32.0;

/// Default ceiling on pixels sampled per region
pub const DEFAULT_SAMPLE_CAP: usize = 100;

// Validation bounds
/// Largest accepted palette grain (half the channel range)
pub const MAX_PALETTE_GRAIN: f64 = 127.0;

// Size-derived parameter divisors
/// Border width is the short canvas side divided by this
pub const BORDER_WIDTH_DIVISOR: u32 = 200;

/// Minimum region edge is the short canvas side divided by this
pub const MIN_EDGE_DIVISOR: u32 = 10;

// Fixed render colors
/// Fill color for background regions
pub const BACKGROUND_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Paint color for internal borders
pub const BORDER_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_mondrian";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
