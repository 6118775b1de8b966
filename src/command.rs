//! The uniqint pipeline: input file → scan → collector → sorted output.
//!
//! Small inputs are read into memory; inputs of at least
//! [`MMAP_THRESHOLD`] bytes are memory mapped. Either way the whole input is
//! visible at once, and only the unique set is built on top of it.

use crate::collector::{UniqueSortedCollector, ValueRange};
use crate::config::{OutputLayout, MMAP_THRESHOLD};
use crate::error::{Result, UniqueIntError};
use crate::output::IntWriter;
use crate::scan::{scan_bytes, ScanStats};
use memmap2::Mmap;
use std::fmt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Temporary results file in `dir`, created with the mode a plain
/// `File::create` would give (0o666 less the umask), not tempfile's 0o600.
fn results_tempfile(dir: &Path) -> Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    Ok(builder.tempfile_in(dir)?)
}

/// Statistics from one run.
#[derive(Debug, Default, Clone)]
pub struct UniqueIntStats {
    pub scan: ScanStats,
    pub unique_values: usize,
    pub used_mmap: bool,
}

impl fmt::Display for UniqueIntStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lines: {}, Unique: {}, Duplicates: {}, Out of range: {}, \
             Malformed tokens: {}, Rejected lines: {}, Blank lines: {}, Mmap: {}",
            self.scan.lines_read,
            self.unique_values,
            self.scan.duplicates,
            self.scan.out_of_range,
            self.scan.malformed_tokens,
            self.scan.rejected_lines,
            self.scan.blank_lines,
            if self.used_mmap { "yes" } else { "no" }
        )
    }
}

/// Result of [`UniqueIntCommand::run_to_dir`].
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    pub output_path: PathBuf,
    pub stats: UniqueIntStats,
}

/// Extracts unique in-range integers from a file and writes them sorted.
#[derive(Debug, Clone, Default)]
pub struct UniqueIntCommand {
    range: ValueRange,
}

impl UniqueIntCommand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retain values within `range` instead of `[-1023, 1023]`.
    pub fn with_range(mut self, range: ValueRange) -> Self {
        self.range = range;
        self
    }

    /// Run on a file, writing the sorted values to `output`.
    pub fn run<P: AsRef<Path>, W: Write>(
        &self,
        input_path: P,
        output: &mut W,
    ) -> Result<UniqueIntStats> {
        let (collector, stats) = self.collect_path(input_path.as_ref())?;
        self.emit(collector, stats, output)
    }

    /// Run on any readable source.
    pub fn run_reader<R: Read, W: Write>(
        &self,
        mut reader: R,
        output: &mut W,
    ) -> Result<UniqueIntStats> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;

        let (collector, stats) = self.collect_bytes(&data, false);
        self.emit(collector, stats, output)
    }

    /// Run on a file, writing to the path `layout` derives from it.
    ///
    /// The output is written to a temporary file in the output directory
    /// and renamed into place once complete, so a failed run leaves no
    /// partial results file. The output directory must already exist.
    pub fn run_to_dir<P: AsRef<Path>>(
        &self,
        input_path: P,
        layout: &OutputLayout,
    ) -> Result<ProcessOutcome> {
        let input_path = input_path.as_ref();
        let output_path = layout.output_path(input_path)?;

        // Everything that can fail on the input happens before any file
        // is created.
        let (collector, stats) = self.collect_path(input_path)?;

        let mut tmp = results_tempfile(&layout.output_dir)?;
        let stats = self.emit(collector, stats, tmp.as_file_mut())?;
        tmp.persist(&output_path)?;

        Ok(ProcessOutcome { output_path, stats })
    }

    fn collect_path(&self, path: &Path) -> Result<(UniqueSortedCollector, UniqueIntStats)> {
        let mut file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => UniqueIntError::InputNotFound(path.to_path_buf()),
            _ => UniqueIntError::Io(e),
        })?;
        let file_size = file.metadata()?.len();

        if file_size >= MMAP_THRESHOLD {
            // SAFETY: the map is read-only and dropped before this returns.
            let mmap = unsafe { Mmap::map(&file)? };
            Ok(self.collect_bytes(&mmap, true))
        } else {
            let mut data = Vec::with_capacity(file_size as usize);
            file.read_to_end(&mut data)?;
            Ok(self.collect_bytes(&data, false))
        }
    }

    fn collect_bytes(
        &self,
        data: &[u8],
        used_mmap: bool,
    ) -> (UniqueSortedCollector, UniqueIntStats) {
        let mut collector = UniqueSortedCollector::with_range(self.range);
        let scan = scan_bytes(data, &mut collector);
        let stats = UniqueIntStats {
            scan,
            unique_values: collector.len(),
            used_mmap,
        };
        (collector, stats)
    }

    fn emit<W: Write>(
        &self,
        collector: UniqueSortedCollector,
        stats: UniqueIntStats,
        output: &mut W,
    ) -> Result<UniqueIntStats> {
        let sorted = collector.into_sorted();
        let mut writer = IntWriter::new(output);
        writer.write_values(&sorted)?;
        writer.flush()?;
        Ok(stats)
    }
}
