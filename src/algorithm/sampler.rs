//! Stochastic mean-color estimation over regions

use crate::io::error::{Result, invalid_parameter, region_out_of_bounds};
use crate::math::color::EstimatedColor;
use crate::spatial::Region;
use image::RgbImage;
use rand::{Rng, rngs::StdRng};

/// Estimate the mean color of a region from a bounded random sample
///
/// Draws `min(area, sample_cap)` coordinates independently and uniformly
/// with replacement from the region (x before y on every draw), reads each
/// pixel, and returns the per-channel arithmetic mean unrounded. The result
/// is an unbiased statistical estimate of the region mean whenever the area
/// exceeds the cap, and the exact value for a single-pixel region. Output
/// depends only on the RNG draws consumed, so identical generator state
/// reproduces identical estimates.
///
/// # Errors
///
/// Returns an error if:
/// - `sample_cap` is zero
/// - The region reaches outside the buffer, which indicates a partition
///   maintenance bug
pub fn estimate_region_color(
    buffer: &RgbImage,
    region: Region,
    sample_cap: usize,
    rng: &mut StdRng,
) -> Result<EstimatedColor> {
    if sample_cap == 0 {
        return Err(invalid_parameter(
            "sample_cap",
            &sample_cap,
            &"must be positive",
        ));
    }

    let dimensions = (buffer.width(), buffer.height());
    if !region.fits_within(dimensions.0, dimensions.1) {
        return Err(region_out_of_bounds(region.bounds(), dimensions));
    }

    let draws = region.area().min(sample_cap as u64);
    let mut sums = [0.0f64; 3];

    for _ in 0..draws {
        let x = rng.random_range(region.min_x..=region.max_x);
        let y = rng.random_range(region.min_y..=region.max_y);
        let pixel = buffer
            .get_pixel_checked(x, y)
            .ok_or_else(|| region_out_of_bounds(region.bounds(), dimensions))?;
        sums[0] += f64::from(pixel.0[0]);
        sums[1] += f64::from(pixel.0[1]);
        sums[2] += f64::from(pixel.0[2]);
    }

    let count = draws as f64;
    Ok([sums[0] / count, sums[1] / count, sums[2] / count])
}
