//! Generation loop growing the partition one split at a time

use crate::algorithm::executor::AbstractionConfig;
use crate::algorithm::splitter::best_split;
use crate::io::error::{AbstractionError, Result};
use crate::spatial::{Partition, Region};
use image::RgbImage;
use rand::{Rng, rngs::StdRng};

/// Run one generation step against the partition
///
/// Picks one region index uniformly at random, searches for its best
/// bisection, and on success replaces the region in place with the two
/// halves. A region too small to split leaves the partition unchanged; the
/// step still counts and still consumes the index draw. Returns whether the
/// step split anything.
///
/// The partition stays a valid cover of its canvas after every step, and the
/// region count grows by at most one.
///
/// # Errors
///
/// Propagates split-search failures (zero sample cap or a region escaping
/// the buffer).
pub fn advance_generation(
    buffer: &RgbImage,
    partition: &mut Partition,
    config: &AbstractionConfig,
    rng: &mut StdRng,
) -> Result<bool> {
    if partition.is_empty() {
        return Ok(false);
    }

    let index = rng.random_range(0..partition.len());
    let Some(region) = partition.get(index) else {
        return Ok(false);
    };

    match best_split(
        buffer,
        region,
        config.cut_attempts,
        config.split_margin,
        config.sample_cap,
        rng,
    )? {
        Some(halves) => Ok(partition.replace_with_pair(index, halves)),
        None => Ok(false),
    }
}

/// Build the full partition for a buffer by running every generation
///
/// Starts from the single region covering the canvas and performs exactly
/// `config.generations` steps regardless of how many are no-ops. The same
/// configuration and RNG stream always yield the same partition.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration fails validation (checked before any work)
/// - The buffer has a zero dimension
/// - A generation step fails
pub fn build_partition(
    buffer: &RgbImage,
    config: &AbstractionConfig,
    rng: &mut StdRng,
) -> Result<Partition> {
    config.validate()?;

    let canvas = Region::covering(buffer.width(), buffer.height()).ok_or_else(|| {
        AbstractionError::InvalidSourceData {
            reason: "image has a zero dimension".to_string(),
        }
    })?;

    let mut partition = Partition::new(canvas);
    for _ in 0..config.generations {
        advance_generation(buffer, &mut partition, config, rng)?;
    }

    Ok(partition)
}
