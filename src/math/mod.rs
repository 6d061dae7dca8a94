//! Mathematical utilities for the engine

/// Color distance and palette quantization
pub mod color;
