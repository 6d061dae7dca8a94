//! Flat-fill recoloring and border painting over a finished partition

/// Black border painting along internal region edges
pub mod border;
/// Region flattening to background and palette colors
pub mod recolor;
