use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::constants::selection::{
    DEFAULT_SAMPLE_COUNT, DEFAULT_SOURCE_DIR, DEFAULT_SUFFIX, DEFAULT_TARGET_DIR,
};
use crate::types::NameSuffix;

/// Parameters for one selection run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Directory whose direct entries are candidates.
    pub source_dir: PathBuf,
    /// Directory the sampled entries are moved into (created one level deep if absent).
    pub target_dir: PathBuf,
    /// Number of entries to move.
    pub count: usize,
    /// Case-sensitive suffix a candidate name must end with.
    pub suffix: NameSuffix,
    /// RNG seed; `None` draws from the thread-local generator.
    pub seed: Option<u64>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
            count: DEFAULT_SAMPLE_COUNT,
            suffix: DEFAULT_SUFFIX.to_string(),
            seed: None,
        }
    }
}

impl SelectionConfig {
    /// Create a config for explicit source and target directories, keeping the default count and suffix.
    pub fn new(source_dir: impl Into<PathBuf>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            target_dir: target_dir.into(),
            ..Self::default()
        }
    }

    /// Override the number of entries to move.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Override the name suffix filter.
    pub fn with_suffix(mut self, suffix: impl Into<NameSuffix>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Fix the RNG seed so the same directory listing yields the same selection.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the RNG described by `seed`.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}
