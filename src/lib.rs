#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Command-line runner shared by the binary.
pub mod app;
/// Selection configuration types.
pub mod config;
/// Centralized default parameters.
pub mod constants;
/// Sampling without replacement.
pub mod sampler;
/// Listing, sampling, and relocation pipeline.
pub mod selection;
/// Input transports used by the pipeline (filesystem only).
pub mod transport;
/// Shared type aliases.
pub mod types;

mod errors;

pub use config::SelectionConfig;
pub use errors::SelectionError;
pub use sampler::sample_without_replacement;
pub use selection::{SelectionReport, run_selection, select_and_move};
pub use types::{EntryName, NameSuffix};
