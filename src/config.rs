//! Defaults and output path layout.

use crate::error::{Result, UniqueIntError};
use std::path::{Path, PathBuf};

/// Directory results are written to when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "sample_results";

/// Appended to the input file stem to name the results file.
pub const RESULTS_SUFFIX: &str = "_results.txt";

/// Inputs at least this large are memory mapped instead of read (64 KB).
pub const MMAP_THRESHOLD: u64 = 64 * 1024;

/// Output buffer size (256 KB). At most 2047 short lines are ever written.
pub const OUTPUT_BUFFER: usize = 256 * 1024;

/// Where a run writes its results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub output_dir: PathBuf,
    pub suffix: String,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

impl OutputLayout {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
            suffix: RESULTS_SUFFIX.to_string(),
        }
    }

    /// Output path for `input`: its file name minus the extension, plus
    /// the suffix, inside the output directory.
    ///
    /// ```
    /// use uniqint::config::OutputLayout;
    /// use std::path::Path;
    ///
    /// let layout = OutputLayout::new("out");
    /// let path = layout.output_path(Path::new("data/numbers.txt")).unwrap();
    /// assert_eq!(path, Path::new("out/numbers_results.txt"));
    /// ```
    pub fn output_path(&self, input: &Path) -> Result<PathBuf> {
        let stem = input
            .file_stem()
            .ok_or_else(|| UniqueIntError::InvalidInputPath(input.to_path_buf()))?;
        let mut name = stem.to_os_string();
        name.push(&self.suffix);
        Ok(self.output_dir.join(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = OutputLayout::default();
        let path = layout.output_path(Path::new("small_sample.txt")).unwrap();
        assert_eq!(path, Path::new("sample_results/small_sample_results.txt"));
    }

    #[test]
    fn test_only_last_extension_stripped() {
        let layout = OutputLayout::new("out");
        let path = layout.output_path(Path::new("/tmp/a.b.txt")).unwrap();
        assert_eq!(path, Path::new("out/a.b_results.txt"));
    }

    #[test]
    fn test_no_extension() {
        let layout = OutputLayout::new("out");
        let path = layout.output_path(Path::new("numbers")).unwrap();
        assert_eq!(path, Path::new("out/numbers_results.txt"));
    }

    #[test]
    fn test_no_file_name() {
        let layout = OutputLayout::new("out");
        assert!(matches!(
            layout.output_path(Path::new("/")),
            Err(UniqueIntError::InvalidInputPath(_))
        ));
    }
}
