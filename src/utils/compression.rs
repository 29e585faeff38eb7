use anyhow::{Context, Result};
use log::debug;
use std::io::{Cursor, Read};

// Longest magic number niffler sniffs for (xz).
const MAGIC_LEN: usize = 5;

/// Wrap `input` in the decompressor matching its leading bytes.
///
/// niffler refuses streams shorter than its magic numbers, so those are
/// handed back untouched; an empty stdin is a valid, empty FASTQ.
pub fn decompressed<R: Read + Send + 'static>(mut input: R) -> Result<Box<dyn Read>> {
    let mut head = Vec::with_capacity(MAGIC_LEN);
    (&mut input)
        .take(MAGIC_LEN as u64)
        .read_to_end(&mut head)
        .context("Failed to read input header")?;

    let too_short = head.len() < MAGIC_LEN;
    let rewound = Cursor::new(head).chain(input);
    if too_short {
        return Ok(Box::new(rewound));
    }

    let (reader, format) =
        niffler::get_reader(Box::new(rewound)).context("Failed to detect input compression")?;
    debug!("Input compression: {:?}", format);
    let reader: Box<dyn Read> = reader;
    Ok(reader)
}
