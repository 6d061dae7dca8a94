//! Partitioning engine: pixel sampling, split search, and the pipeline executor

/// Generation loop growing the partition one split at a time
pub mod builder;
/// Pipeline executor and configuration
pub mod executor;
/// Stochastic mean-color estimation over regions
pub mod sampler;
/// Randomized bisection search scored by color contrast
pub mod splitter;
