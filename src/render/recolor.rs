//! Region flattening to background and palette colors

use crate::algorithm::sampler::estimate_region_color;
use crate::io::configuration::BACKGROUND_COLOR;
use crate::io::error::{Result, region_out_of_bounds};
use crate::math::color::quantize;
use crate::spatial::{Partition, Region};
use image::{Rgb, RgbImage};
use rand::rngs::StdRng;

/// Flatten every region of the partition into the buffer
///
/// The first `floor(background_fraction * region_count)` regions in
/// partition order become pure background white. This is a positional rule,
/// not a brightest-regions rule: whichever regions happen to sit at the
/// front of the insertion order are whitened. Every other region is filled
/// with its estimated mean color quantized to multiples of `palette_grain`.
///
/// All colors are computed before any pixel is written, and since the
/// regions partition the canvas every pixel is overwritten exactly once.
///
/// # Errors
///
/// Propagates sampling failures and write failures from a region escaping
/// the buffer.
pub fn recolor_partition(
    buffer: &mut RgbImage,
    partition: &Partition,
    background_fraction: f64,
    palette_grain: f64,
    sample_cap: usize,
    rng: &mut StdRng,
) -> Result<()> {
    let whitened = (background_fraction * partition.len() as f64).floor() as usize;

    let mut fills: Vec<(Region, Rgb<u8>)> = Vec::with_capacity(partition.len());
    for (index, &region) in partition.regions().iter().enumerate() {
        let color = if index < whitened {
            BACKGROUND_COLOR
        } else {
            let estimate = estimate_region_color(buffer, region, sample_cap, rng)?;
            quantize(estimate, palette_grain)
        };
        fills.push((region, color));
    }

    for (region, color) in fills {
        fill_region(buffer, region, color)?;
    }

    Ok(())
}

/// Overwrite every pixel of a region with one flat color
fn fill_region(buffer: &mut RgbImage, region: Region, color: Rgb<u8>) -> Result<()> {
    let dimensions = (buffer.width(), buffer.height());
    for y in region.min_y..=region.max_y {
        for x in region.min_x..=region.max_x {
            let pixel = buffer
                .get_pixel_mut_checked(x, y)
                .ok_or_else(|| region_out_of_bounds(region.bounds(), dimensions))?;
            *pixel = color;
        }
    }
    Ok(())
}
