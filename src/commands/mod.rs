pub mod filter_reads;
pub mod filter_summary;

pub use filter_reads::run;
