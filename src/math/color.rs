//! Color distance and palette quantization
//!
//! Channel values stay fractional while averaged and are rounded to `u8`
//! only at the point of writing back into the pixel buffer.

use image::Rgb;

/// Per-channel mean of sampled pixel values, fractional and unrounded
pub type EstimatedColor = [f64; 3];

/// Squared Euclidean distance between two estimated colors
///
/// The split search only compares distances, so the square root is never
/// taken.
pub fn squared_distance(a: EstimatedColor, b: EstimatedColor) -> f64 {
    let dr = a[0] - b[0];
    let dg = a[1] - b[1];
    let db = a[2] - b[2];
    db.mul_add(db, dr.mul_add(dr, dg * dg))
}

/// Round one channel to the nearest multiple of `grain`, clamped to `[0, 255]`
///
/// A grain of 32 maps 130 to 128 and 250 to 256, which clamps to 255.
pub fn quantize_channel(value: f64, grain: f64) -> u8 {
    let rounded = (value / grain).round() * grain;
    rounded.round().clamp(0.0, 255.0) as u8
}

/// Quantize an estimated color to the restricted palette of `grain` multiples
pub fn quantize(color: EstimatedColor, grain: f64) -> Rgb<u8> {
    Rgb([
        quantize_channel(color[0], grain),
        quantize_channel(color[1], grain),
        quantize_channel(color[2], grain),
    ])
}
