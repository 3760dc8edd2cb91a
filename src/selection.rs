use std::fmt;
use std::path::PathBuf;

use rand::Rng;
use tracing::info;

use crate::config::SelectionConfig;
use crate::errors::SelectionError;
use crate::sampler::sample_without_replacement;
use crate::transport::fs::{ensure_dir, has_suffix, list_entry_names, relocate};
use crate::types::EntryName;

/// Outcome of a completed selection run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionReport {
    /// Names moved into the target directory, in the order they were moved.
    pub moved: Vec<EntryName>,
    /// Directory the entries were moved into.
    pub target_dir: PathBuf,
    /// Whether the target directory was created by this run.
    pub created_target: bool,
}

impl SelectionReport {
    /// Number of entries moved.
    pub fn moved_count(&self) -> usize {
        self.moved.len()
    }
}

impl fmt::Display for SelectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Moved {} files.", self.moved_count())
    }
}

/// Move a random sample of suffix-matching entries from the source to the target directory.
///
/// Steps run in this order: list the source, filter by suffix, sample, create
/// the target if absent, then move each sampled entry. Target creation comes
/// after sampling so that a missing or non-directory source and a short
/// population leave both directories untouched, including an absent target.
/// The first failed move aborts the run; entries already moved stay where they are.
pub fn select_and_move<R>(
    config: &SelectionConfig,
    rng: &mut R,
) -> Result<SelectionReport, SelectionError>
where
    R: Rng + ?Sized,
{
    let candidates: Vec<EntryName> = list_entry_names(&config.source_dir)?
        .into_iter()
        .filter(|name| has_suffix(name, &config.suffix))
        .collect();
    let selected = sample_without_replacement(&candidates, config.count, rng)?;

    let created_target = ensure_dir(&config.target_dir)?;
    for name in &selected {
        relocate(&config.source_dir, &config.target_dir, name)?;
    }

    info!(
        source = %config.source_dir.display(),
        target = %config.target_dir.display(),
        candidates = candidates.len(),
        moved = selected.len(),
        "selection complete"
    );
    Ok(SelectionReport {
        moved: selected,
        target_dir: config.target_dir.clone(),
        created_target,
    })
}

/// Run [`select_and_move`] with the RNG described by `config.seed`.
pub fn run_selection(config: &SelectionConfig) -> Result<SelectionReport, SelectionError> {
    let mut rng = config.rng();
    select_and_move(config, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::selection_tests::FIXED_SEED;
    use std::ffi::OsString;
    use std::fs;
    use tempfile::tempdir;

    fn report_with(count: usize) -> SelectionReport {
        SelectionReport {
            moved: (0..count)
                .map(|idx| OsString::from(format!("{idx}.jpg")))
                .collect(),
            target_dir: PathBuf::from("selected"),
            created_target: false,
        }
    }

    #[test]
    fn report_renders_moved_count() {
        assert_eq!(report_with(10).to_string(), "Moved 10 files.");
        assert_eq!(report_with(0).to_string(), "Moved 0 files.");
    }

    #[test]
    fn zero_count_creates_target_and_moves_nothing() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("train");
        let target = temp.path().join("selected");
        fs::create_dir(&source).unwrap();
        fs::write(source.join("a.jpg"), b"a").unwrap();

        let config = SelectionConfig::new(&source, &target)
            .with_count(0)
            .with_seed(FIXED_SEED);
        let report = run_selection(&config).unwrap();
        assert_eq!(report.moved_count(), 0);
        assert!(report.created_target);
        assert!(target.is_dir());
        assert!(source.join("a.jpg").exists());
    }

    #[test]
    fn existing_target_is_reused() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("train");
        let target = temp.path().join("selected");
        fs::create_dir(&source).unwrap();
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep.txt"), b"keep").unwrap();
        fs::write(source.join("a.jpg"), b"a").unwrap();

        let config = SelectionConfig::new(&source, &target)
            .with_count(1)
            .with_seed(FIXED_SEED);
        let report = run_selection(&config).unwrap();
        assert!(!report.created_target);
        assert_eq!(report.moved, vec![OsString::from("a.jpg")]);
        assert!(target.join("keep.txt").exists());
        assert!(target.join("a.jpg").exists());
    }
}
