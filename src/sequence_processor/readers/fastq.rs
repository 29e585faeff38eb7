use crate::sequence_processor::core::*;
use crate::utils::compression::decompressed;
use anyhow::{Context, Result};
use bio::io::fastq::{self, FastqRead};
use std::io::{BufReader, Read};

const PROGRESS_INTERVAL: u64 = 1000;

pub struct FastqReader {
    reader: fastq::Reader<BufReader<Box<dyn Read>>>,
}

impl FastqReader {
    /// Read FASTQ from any stream (typically stdin), gzip/bzip2/xz or plain.
    pub fn from_reader<R: Read + Send + 'static>(input: R) -> Result<Self> {
        let inner_reader = decompressed(input)?;
        Ok(Self {
            reader: fastq::Reader::from_bufread(BufReader::with_capacity(
                1024 * 1024,
                inner_reader,
            )),
        })
    }
}

impl SequenceReader for FastqReader {
    fn read_sequences<P: SequenceProcessor>(&mut self, processor: &mut P) -> Result<ProcessingStats> {
        let mut stats = ProcessingStats::default();
        let mut record = fastq::Record::new();

        loop {
            self.reader
                .read(&mut record)
                .with_context(|| format!("Malformed FASTQ after record {}", stats.processed))?;
            if record.is_empty() {
                break;
            }

            let sequence = Sequence::from(&record);
            let outcome = processor
                .process_sequence(&sequence)
                .with_context(|| format!("Failed to process read {}", sequence.id))?;
            stats.record(outcome);

            if stats.processed % PROGRESS_INTERVAL == 0 {
                processor.update_progress(&stats);
            }
        }

        processor.update_progress(&stats);
        processor.finalize(&stats)?;
        Ok(stats)
    }
}
