//! Grouping of benchmark files by suffix.
//!
//! A run is either a set of `{basename}.csv` files (one group) or a family of
//! `{basename}_{suffix}.csv` files, one group per suffix.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Label used for the group of unsuffixed `{basename}.csv` files.
pub const SINGLE_SUFFIX_LABEL: &str = "None";

/// Suffix identifying one join group.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suffix {
    /// Every basename had a plain `{basename}.csv` file.
    Single,
    /// Files named `{basename}_{tag}.csv`.
    Tagged(String),
}

impl Suffix {
    /// Text used in output file names.
    pub fn label(&self) -> &str {
        match self {
            Self::Single => SINGLE_SUFFIX_LABEL,
            Self::Tagged(tag) => tag,
        }
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Files joined together for one suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup {
    pub suffix: Suffix,
    /// `(basename, path)` pairs in command-line order.
    pub files: Vec<(String, PathBuf)>,
}

/// All join groups of a run, ordered by suffix.
pub type FileGroups = Vec<FileGroup>;

/// Resolves basenames into join groups.
///
/// If `{basename}.csv` exists for every basename the result is a single
/// [`Suffix::Single`] group, regardless of any suffixed siblings. Otherwise
/// suffixes are discovered from the first basename's `{basename}_{suffix}.csv`
/// files and every other basename must provide the same suffixes.
pub fn group_files(basenames: &[String]) -> Result<FileGroups> {
    let Some(reference) = basenames.first() else {
        return Err(IngestError::FileGrouping {
            reason: "no basenames given".to_string(),
        });
    };

    let single: Vec<(String, PathBuf)> = basenames
        .iter()
        .map(|base| (base.clone(), PathBuf::from(format!("{base}.csv"))))
        .collect();
    if single.iter().all(|(_, path)| path.is_file()) {
        debug!(file_count = single.len(), "using single-file group");
        return Ok(vec![FileGroup {
            suffix: Suffix::Single,
            files: single,
        }]);
    }

    let suffixes = discover_suffixes(reference)?;
    if suffixes.is_empty() {
        return Err(IngestError::FileGrouping {
            reason: format!(
                "no input files for '{reference}': expected {reference}.csv or {reference}_<suffix>.csv"
            ),
        });
    }
    debug!(
        reference = %reference,
        suffix_count = suffixes.len(),
        "discovered suffixes"
    );

    let mut groups = Vec::with_capacity(suffixes.len());
    for suffix in suffixes {
        let mut files = Vec::with_capacity(basenames.len());
        for base in basenames {
            let path = suffixed_path(base, &suffix);
            if !path.is_file() {
                return Err(IngestError::MissingSuffixFile {
                    path,
                    suffix,
                    reference: reference.clone(),
                });
            }
            files.push((base.clone(), path));
        }
        groups.push(FileGroup {
            suffix: Suffix::Tagged(suffix),
            files,
        });
    }
    Ok(groups)
}

fn suffixed_path(basename: &str, suffix: &str) -> PathBuf {
    PathBuf::from(format!("{basename}_{suffix}.csv"))
}

/// Lists the suffixes of `{basename}_{suffix}.csv` files next to `basename`.
fn discover_suffixes(basename: &str) -> Result<BTreeSet<String>> {
    let (dir, stem) = split_basename(basename)?;
    let pattern = Regex::new(&format!(
        r"^{}_([A-Za-z0-9+-]+)\.csv$",
        regex::escape(stem)
    ))
    .map_err(|e| IngestError::FileGrouping {
        reason: format!("invalid basename pattern '{basename}': {e}"),
    })?;

    let entries = std::fs::read_dir(&dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.clone(),
        source: e,
    })?;

    let mut suffixes = BTreeSet::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.clone(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        match pattern.captures(name).and_then(|caps| caps.get(1)) {
            Some(suffix) => {
                suffixes.insert(suffix.as_str().to_string());
            }
            None if name.starts_with(&format!("{stem}_")) => {
                debug!(file = %name, "skipping file with unsupported suffix");
            }
            None => {}
        }
    }
    Ok(suffixes)
}

/// Splits `runs/a` into the directory to scan and the file stem.
fn split_basename(basename: &str) -> Result<(PathBuf, &str)> {
    let path = Path::new(basename);
    let stem = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| IngestError::FileGrouping {
            reason: format!("basename '{basename}' has no file name"),
        })?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_label() {
        assert_eq!(Suffix::Single.label(), "None");
        assert_eq!(Suffix::Tagged("lan".to_string()).to_string(), "lan");
    }

    #[test]
    fn test_split_basename_plain() {
        let (dir, stem) = split_basename("bench").unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(stem, "bench");
    }

    #[test]
    fn test_split_basename_with_dir() {
        let (dir, stem) = split_basename("runs/2024/bench").unwrap();
        assert_eq!(dir, PathBuf::from("runs/2024"));
        assert_eq!(stem, "bench");
    }

    #[test]
    fn test_group_files_empty() {
        let result = group_files(&[]);
        assert!(matches!(result, Err(IngestError::FileGrouping { .. })));
    }
}
