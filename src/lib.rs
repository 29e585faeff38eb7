pub mod aligner;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod sequence_processor;
pub mod utils;

pub use aligner::{AlignerPreset, ContaminantIndex, HitDetector};
pub use error::NanolyseError;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
