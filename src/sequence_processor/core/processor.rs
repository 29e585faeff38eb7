use super::sequence::Sequence;
use super::stats::ProcessingStats;
use anyhow::Result;

/// What a processor did with a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Kept,
    Removed,
}

pub trait SequenceProcessor {
    fn process_sequence(&mut self, sequence: &Sequence) -> Result<Outcome>;
    fn update_progress(&mut self, stats: &ProcessingStats);
    fn finalize(&mut self, _stats: &ProcessingStats) -> Result<()> {
        Ok(())
    }
}
