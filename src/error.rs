use std::path::PathBuf;
use thiserror::Error;

/// Fatal, user-facing conditions. Everything else travels as a plain
/// `anyhow::Error` with context attached.
#[derive(Debug, Error)]
pub enum NanolyseError {
    #[error("Could not find reference fasta for lambda genome. Looked in: {}", format_candidates(.searched))]
    ReferenceNotFound { searched: Vec<PathBuf> },

    #[error("Failed to load/build index from {}: {message}", .reference.display())]
    IndexBuild { reference: PathBuf, message: String },

    #[error("Alignment failed: {0}")]
    Alignment(String),

    #[error("Unknown minimap2 preset '{0}'")]
    UnknownPreset(String),

    #[error("Column 'read_id' not found in header of {}", .path.display())]
    MissingReadIdColumn { path: PathBuf },

    #[error("--summary_in and --summary_out have to be used together")]
    UnpairedSummaryArgs,
}

fn format_candidates(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "<no candidates>".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
