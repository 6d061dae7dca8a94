//! Randomized bisection search scored by color contrast

use crate::algorithm::sampler::estimate_region_color;
use crate::io::error::Result;
use crate::math::color::squared_distance;
use crate::spatial::Region;
use image::RgbImage;
use rand::{Rng, rngs::StdRng};

/// Check whether an axis admits a cut under the symmetric margin
///
/// Evaluates `min + margin < max - margin` without underflow. When it holds,
/// at least one cut position leaves both halves wider than the margin.
const fn admits_cut(min: u32, max: u32, margin: u32) -> bool {
    min as u64 + 2 * (margin as u64) < max as u64
}

/// Find the bisection of `region` with the greatest color contrast
///
/// Candidate generation runs axis by axis, columns first: each admissible
/// axis contributes `cut_attempts` positions drawn uniformly from the range
/// where both halves stay wider than `split_margin`. All positions are drawn
/// before any scoring, so the RNG stream has a fixed shape. Each candidate
/// pair is then scored by the squared Euclidean distance between the halves'
/// estimated mean colors; the maximum wins and ties keep the candidate
/// encountered first.
///
/// Returns `Ok(None)` when neither axis admits a cut. That is the normal
/// terminal state for small regions, not an error. A returned pair exactly
/// partitions the input region and both halves have positive area.
///
/// # Errors
///
/// Propagates sampling failures, which only arise from a zero `sample_cap`
/// or a region escaping the buffer.
pub fn best_split(
    buffer: &RgbImage,
    region: Region,
    cut_attempts: usize,
    split_margin: u32,
    sample_cap: usize,
    rng: &mut StdRng,
) -> Result<Option<(Region, Region)>> {
    let mut candidates: Vec<(Region, Region)> = Vec::new();

    if admits_cut(region.min_x, region.max_x, split_margin) {
        let lower = region.min_x + split_margin;
        let upper = region.max_x - split_margin - 1;
        for _ in 0..cut_attempts {
            let cut = rng.random_range(lower..=upper);
            if let Some(halves) = region.split_at_column(cut) {
                candidates.push(halves);
            }
        }
    }

    if admits_cut(region.min_y, region.max_y, split_margin) {
        let lower = region.min_y + split_margin;
        let upper = region.max_y - split_margin - 1;
        for _ in 0..cut_attempts {
            let cut = rng.random_range(lower..=upper);
            if let Some(halves) = region.split_at_row(cut) {
                candidates.push(halves);
            }
        }
    }

    let mut best: Option<(f64, (Region, Region))> = None;
    for halves in candidates {
        let first = estimate_region_color(buffer, halves.0, sample_cap, rng)?;
        let second = estimate_region_color(buffer, halves.1, sample_cap, rng)?;
        let score = squared_distance(first, second);

        let improves = match &best {
            Some((best_score, _)) => score > *best_score,
            None => true,
        };
        if improves {
            best = Some((score, halves));
        }
    }

    Ok(best.map(|(_, halves)| halves))
}
