use super::processor::SequenceProcessor;
use super::stats::ProcessingStats;
use anyhow::Result;

pub trait SequenceReader {
    /// Feed every record to `processor`, in input order, then finalize it.
    fn read_sequences<P: SequenceProcessor>(&mut self, processor: &mut P) -> Result<ProcessingStats>;
}
