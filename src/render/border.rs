//! Black border painting along internal region edges

use crate::io::configuration::BORDER_COLOR;
use crate::io::error::{Result, region_out_of_bounds};
use crate::spatial::{Partition, Region};
use image::RgbImage;

/// Paint borders along every internal region edge
///
/// Each region paints `border_width + 1` lines per side: the edge line
/// itself plus `border_width` lines extending inward, clamped to the
/// region's own bounds. A side lying on the outer canvas boundary is never
/// painted, so the image frame stays border-free. Regions sharing an edge
/// both paint it; the overwrite is idempotent under the single border color.
///
/// # Errors
///
/// Returns an error if a region escapes the buffer, which indicates a
/// partition maintenance bug.
pub fn render_borders(
    buffer: &mut RgbImage,
    partition: &Partition,
    border_width: u32,
) -> Result<()> {
    let dimensions = (buffer.width(), buffer.height());
    for &region in partition.regions() {
        paint_internal_sides(buffer, region, border_width, dimensions)?;
    }
    Ok(())
}

/// Paint the sides of one region that do not touch the canvas boundary
fn paint_internal_sides(
    buffer: &mut RgbImage,
    region: Region,
    border_width: u32,
    dimensions: (u32, u32),
) -> Result<()> {
    let (width, height) = dimensions;

    if region.min_x > 0 {
        let inner = region.min_x.saturating_add(border_width).min(region.max_x);
        paint_span(
            buffer,
            (region.min_x, inner),
            (region.min_y, region.max_y),
            region,
            dimensions,
        )?;
    }

    if region.max_x < width.saturating_sub(1) {
        let inner = region.max_x.saturating_sub(border_width).max(region.min_x);
        paint_span(
            buffer,
            (inner, region.max_x),
            (region.min_y, region.max_y),
            region,
            dimensions,
        )?;
    }

    if region.min_y > 0 {
        let inner = region.min_y.saturating_add(border_width).min(region.max_y);
        paint_span(
            buffer,
            (region.min_x, region.max_x),
            (region.min_y, inner),
            region,
            dimensions,
        )?;
    }

    if region.max_y < height.saturating_sub(1) {
        let inner = region.max_y.saturating_sub(border_width).max(region.min_y);
        paint_span(
            buffer,
            (region.min_x, region.max_x),
            (inner, region.max_y),
            region,
            dimensions,
        )?;
    }

    Ok(())
}

/// Paint one inclusive rectangular span with the border color
fn paint_span(
    buffer: &mut RgbImage,
    (x_start, x_end): (u32, u32),
    (y_start, y_end): (u32, u32),
    region: Region,
    dimensions: (u32, u32),
) -> Result<()> {
    for y in y_start..=y_end {
        for x in x_start..=x_end {
            let pixel = buffer
                .get_pixel_mut_checked(x, y)
                .ok_or_else(|| region_out_of_bounds(region.bounds(), dimensions))?;
            *pixel = BORDER_COLOR;
        }
    }
    Ok(())
}
