use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Seek, SeekFrom, Write};

/// Append-only list of removed read identifiers, spooled to an anonymous
/// temporary file so long runs do not hold every id in memory twice.
///
/// The file has no name on disk and disappears when this value (or the
/// reader built from it) is dropped.
pub struct RemovedIds {
    writer: BufWriter<File>,
    len: u64,
}

impl RemovedIds {
    pub fn new() -> Result<Self> {
        let file = tempfile::tempfile().context("Failed to create scratch file for read ids")?;
        Ok(Self {
            writer: BufWriter::new(file),
            len: 0,
        })
    }

    pub fn push(&mut self, read_id: &str) -> Result<()> {
        writeln!(self.writer, "{}", read_id).context("Failed to record removed read id")?;
        self.len += 1;
        Ok(())
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Consume the scratch file and return the distinct ids it holds.
    pub fn into_set(self) -> Result<HashSet<String>> {
        let mut file = self
            .writer
            .into_inner()
            .map_err(|e| e.into_error())
            .context("Failed to flush scratch file")?;
        file.seek(SeekFrom::Start(0))?;

        let mut ids = HashSet::with_capacity(self.len as usize);
        for line in BufReader::new(file).lines() {
            let line = line.context("Failed to read back removed read ids")?;
            if !line.is_empty() {
                ids.insert(line);
            }
        }
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_read_back() {
        let mut removed = RemovedIds::new().unwrap();
        assert!(removed.is_empty());

        removed.push("read_a").unwrap();
        removed.push("read_b").unwrap();
        removed.push("read_a").unwrap();
        assert_eq!(removed.len(), 3);

        let ids = removed.into_set().unwrap();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("read_a"));
        assert!(ids.contains("read_b"));
    }

    #[test]
    fn test_empty_set() {
        let removed = RemovedIds::new().unwrap();
        assert!(removed.into_set().unwrap().is_empty());
    }
}
