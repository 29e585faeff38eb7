pub mod core;
pub mod readers;

// Re-export commonly used items
pub use self::core::{Outcome, ProcessingStats, Sequence, SequenceProcessor, SequenceReader};
pub use readers::FastqReader;
