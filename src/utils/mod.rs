pub mod compression;
pub mod logging;
pub(crate) mod progress_bar_builder;
pub mod removed_ids;
