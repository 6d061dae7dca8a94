//! Spatial data structures for the canvas partition
//!
//! This module contains the geometric building blocks of the engine:
//! - Inclusive-bound rectangular regions and their bisections
//! - The ordered partition covering the whole canvas

/// Ordered region collections covering the canvas
pub mod partition;
/// Axis-aligned rectangles with inclusive pixel bounds
pub mod region;

pub use partition::Partition;
pub use region::Region;
