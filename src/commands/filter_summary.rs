use crate::error::NanolyseError;
use crate::utils::compression::decompressed;
use anyhow::{Context, Result};
use log::{error, info};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

pub const READ_ID_COLUMN: &str = "read_id";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SummaryStats {
    pub seen: u64,
    pub kept: u64,
    pub dropped: u64,
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Index of the `read_id` column. The match is exact: no trimming of the
/// name, no case folding.
pub fn read_id_column(header: &str) -> Option<usize> {
    strip_line_ending(header)
        .split('\t')
        .position(|name| name == READ_ID_COLUMN)
}

/// A summary table whose header has been read and whose `read_id` column
/// is known. Opening one is cheap, so callers do it before any reads are
/// filtered and a bad header fails the run up front.
pub struct SummaryTable<R> {
    reader: R,
    header: String,
    column: usize,
    source: PathBuf,
}

impl SummaryTable<BufReader<Box<dyn Read>>> {
    /// Open a plain or compressed summary file and locate its `read_id` column.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open summary file {}", path.display()))?;
        Self::from_reader(BufReader::new(decompressed(file)?), path)
    }
}

impl<R: BufRead> SummaryTable<R> {
    pub fn from_reader(mut reader: R, source: &Path) -> Result<Self> {
        let mut header = String::new();
        reader
            .read_line(&mut header)
            .with_context(|| format!("Failed to read header of {}", source.display()))?;

        let column = match read_id_column(&header) {
            Some(column) => column,
            None => {
                error!(
                    "Column '{}' not found in header of {}",
                    READ_ID_COLUMN,
                    source.display()
                );
                return Err(NanolyseError::MissingReadIdColumn {
                    path: source.to_path_buf(),
                }
                .into());
            }
        };

        Ok(Self {
            reader,
            header,
            column,
            source: source.to_path_buf(),
        })
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Copy the header and every row whose `read_id` is not in `removed`.
    ///
    /// Kept lines are written back byte for byte. Blank lines are dropped
    /// from the output and not counted; a row too short to have a `read_id`
    /// field is kept.
    pub fn filter_into<W: Write>(
        mut self,
        output: &mut W,
        removed: &HashSet<String>,
    ) -> Result<SummaryStats> {
        output.write_all(self.header.as_bytes())?;

        let mut stats = SummaryStats::default();
        let mut line = String::new();
        loop {
            line.clear();
            let bytes = self.reader.read_line(&mut line).with_context(|| {
                format!(
                    "Failed to read row {} of {}",
                    stats.seen + 1,
                    self.source.display()
                )
            })?;
            if bytes == 0 {
                break;
            }

            let row = strip_line_ending(&line);
            if row.is_empty() {
                continue;
            }

            stats.seen += 1;
            let is_removed = row
                .split('\t')
                .nth(self.column)
                .map_or(false, |read_id| removed.contains(read_id));

            if is_removed {
                stats.dropped += 1;
            } else {
                output.write_all(line.as_bytes())?;
                stats.kept += 1;
            }
        }

        output.flush()?;
        Ok(stats)
    }
}

/// Filter `table` into `summary_out`.
///
/// The output is staged in a temporary file next to `summary_out` and only
/// moved into place once the whole table has been written, so a failed run
/// never leaves a truncated summary behind.
pub fn run<R: BufRead>(
    table: SummaryTable<R>,
    summary_out: &Path,
    removed: &HashSet<String>,
) -> Result<SummaryStats> {
    let summary_in = table.source().to_path_buf();

    let out_dir = match summary_out.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let staged = tempfile::NamedTempFile::new_in(out_dir).with_context(|| {
        format!("Failed to create temporary file in {}", out_dir.display())
    })?;
    let mut writer = BufWriter::new(staged);

    let stats = table.filter_into(&mut writer, removed)?;

    let staged = writer
        .into_inner()
        .map_err(|e| e.into_error())
        .context("Failed to flush filtered summary")?;
    staged
        .persist(summary_out)
        .with_context(|| format!("Failed to write {}", summary_out.display()))?;

    eprintln!(
        "NanoLyse: kept {} of {} summary rows.",
        stats.kept, stats.seen
    );
    info!(
        "Summary {}: {} rows seen, {} kept, {} removed; written to {}",
        summary_in.display(),
        stats.seen,
        stats.kept,
        stats.dropped,
        summary_out.display()
    );

    Ok(stats)
}
