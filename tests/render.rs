//! Validates recoloring rules, border placement, and the end-to-end pipeline

use image::{Rgb, RgbImage};
use mondrify::algorithm::executor::{AbstractionConfig, Abstractor};
use mondrify::render::border::render_borders;
use mondrify::render::recolor::recolor_partition;
use mondrify::spatial::{Partition, Region};
use rand::{SeedableRng, rngs::StdRng};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

fn column_split_partition(width: u32, height: u32, cut: u32) -> Partition {
    let canvas = Region::covering(width, height).unwrap();
    let mut partition = Partition::new(canvas);
    let halves = canvas.split_at_column(cut).unwrap();
    assert!(partition.replace_with_pair(0, halves));
    partition
}

#[test]
fn test_recolor_whitens_a_positional_prefix() {
    // The left region is the darkest but sits first in partition order, so a
    // 0.5 fraction whitens it and not the brighter right region
    let mut buffer = RgbImage::from_fn(4, 4, |x, _| {
        if x < 2 { Rgb([0, 0, 0]) } else { Rgb([200, 0, 0]) }
    });
    let partition = column_split_partition(4, 4, 1);

    let mut rng = StdRng::seed_from_u64(8);
    recolor_partition(&mut buffer, &partition, 0.5, 32.0, 100, &mut rng).unwrap();

    assert_eq!(*buffer.get_pixel(0, 0), WHITE);
    assert_eq!(*buffer.get_pixel(1, 3), WHITE);
    // 200 rounds to the nearest multiple of 32
    assert_eq!(*buffer.get_pixel(2, 0), Rgb([192, 0, 0]));
    assert_eq!(*buffer.get_pixel(3, 3), Rgb([192, 0, 0]));
}

#[test]
fn test_recolor_whitens_everything_at_full_fraction() {
    let mut buffer = RgbImage::from_pixel(6, 6, Rgb([40, 80, 120]));
    let partition = column_split_partition(6, 6, 2);

    let mut rng = StdRng::seed_from_u64(8);
    recolor_partition(&mut buffer, &partition, 1.0, 32.0, 100, &mut rng).unwrap();

    for pixel in buffer.pixels() {
        assert_eq!(*pixel, WHITE);
    }
}

#[test]
fn test_recolor_background_count_is_floored() {
    // Three regions at fraction 0.5 whiten floor(1.5) = 1 region
    let canvas = Region::covering(6, 6).unwrap();
    let mut partition = Partition::new(canvas);
    let halves = canvas.split_at_column(1).unwrap();
    assert!(partition.replace_with_pair(0, halves));
    let right_halves = halves.1.split_at_column(3).unwrap();
    assert!(partition.replace_with_pair(1, right_halves));
    assert_eq!(partition.len(), 3);

    let mut buffer = RgbImage::from_pixel(6, 6, Rgb([10, 10, 10]));
    let mut rng = StdRng::seed_from_u64(8);
    recolor_partition(&mut buffer, &partition, 0.5, 32.0, 100, &mut rng).unwrap();

    // First region white, the rest quantized down to black
    assert_eq!(*buffer.get_pixel(0, 0), WHITE);
    assert_eq!(*buffer.get_pixel(2, 0), BLACK);
    assert_eq!(*buffer.get_pixel(5, 5), BLACK);
}

#[test]
fn test_borders_never_touch_the_canvas_boundary() {
    // A single region has all four sides on the outer boundary: nothing may
    // be painted no matter the width
    let mut buffer = RgbImage::from_pixel(10, 10, Rgb([50, 60, 70]));
    let partition = Partition::new(Region::covering(10, 10).unwrap());

    render_borders(&mut buffer, &partition, 3).unwrap();

    for pixel in buffer.pixels() {
        assert_eq!(*pixel, Rgb([50, 60, 70]));
    }
}

#[test]
fn test_zero_width_border_paints_single_edge_lines() {
    let mut buffer = RgbImage::from_pixel(4, 4, Rgb([200, 200, 200]));
    let partition = column_split_partition(4, 4, 1);

    render_borders(&mut buffer, &partition, 0).unwrap();

    for y in 0..4 {
        assert_eq!(*buffer.get_pixel(0, y), Rgb([200, 200, 200]));
        assert_eq!(*buffer.get_pixel(1, y), BLACK);
        assert_eq!(*buffer.get_pixel(2, y), BLACK);
        assert_eq!(*buffer.get_pixel(3, y), Rgb([200, 200, 200]));
    }
}

#[test]
fn test_border_width_extends_inward_from_the_edge() {
    let mut buffer = RgbImage::from_pixel(8, 8, Rgb([200, 200, 200]));
    let partition = column_split_partition(8, 8, 3);

    render_borders(&mut buffer, &partition, 1).unwrap();

    for y in 0..8 {
        assert_eq!(*buffer.get_pixel(1, y), Rgb([200, 200, 200]));
        // Edge pixel plus one pixel inward on both sides of the cut
        assert_eq!(*buffer.get_pixel(2, y), BLACK);
        assert_eq!(*buffer.get_pixel(3, y), BLACK);
        assert_eq!(*buffer.get_pixel(4, y), BLACK);
        assert_eq!(*buffer.get_pixel(5, y), BLACK);
        assert_eq!(*buffer.get_pixel(6, y), Rgb([200, 200, 200]));
    }
}

#[test]
fn test_end_to_end_split_into_two_flat_halves() {
    // Margin 1 on a 4x4 canvas forces the single midpoint cut; the column
    // cut wins on contrast, recoloring flattens both halves, and the border
    // pass paints the cut line
    let mut buffer = RgbImage::from_fn(4, 4, |x, _| {
        if x < 2 { Rgb([200, 0, 0]) } else { Rgb([0, 0, 200]) }
    });

    let config = AbstractionConfig {
        cut_attempts: 1,
        generations: 1,
        background_fraction: 0.0,
        palette_grain: 100.0,
        sample_cap: 100,
        split_margin: 1,
        border_width: 0,
    };
    let mut abstractor = Abstractor::new(config, 4, 4, 21).unwrap();
    abstractor.run(&mut buffer).unwrap();

    assert_eq!(abstractor.partition().regions().len(), 2);
    for y in 0..4 {
        assert_eq!(*buffer.get_pixel(0, y), Rgb([200, 0, 0]));
        assert_eq!(*buffer.get_pixel(1, y), BLACK);
        assert_eq!(*buffer.get_pixel(2, y), BLACK);
        assert_eq!(*buffer.get_pixel(3, y), Rgb([0, 0, 200]));
    }
}
