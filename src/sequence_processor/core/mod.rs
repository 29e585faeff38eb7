pub(crate) mod processor;
pub(crate) mod sequence;
pub(crate) mod stats;
mod reader;

pub use processor::{Outcome, SequenceProcessor};
pub use reader::SequenceReader;
pub use sequence::Sequence;
pub use stats::ProcessingStats;
