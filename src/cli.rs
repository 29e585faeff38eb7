use crate::error::NanolyseError;
use clap::{Arg, ArgAction, CommandFactory, FromArgMatches, Parser};
use std::path::{Path, PathBuf};

const EXAMPLES: &str = "EXAMPLES:
    gunzip -c reads.fastq.gz | NanoLyse | gzip > reads_without_lambda.fastq.gz
    gunzip -c reads.fastq.gz | NanoLyse | NanoFilt -q 12 | gzip > filtered_reads_without_lambda.fastq.gz
    gunzip -c reads.fastq.gz | NanoLyse --reference mygenome.fa.gz | gzip > reads_without_mygenome.fastq.gz
    NanoLyse --summary_in sequencing_summary.txt --summary_out summary_without_lambda.txt < reads.fastq > clean.fastq";

/// Remove reads mapping to the lambda genome. Reads fastq from stdin and writes to stdout.
#[derive(Parser, Debug, Clone)]
#[command(name = "NanoLyse", version, long_about = None, after_help = EXAMPLES)]
#[command(disable_version_flag = true)]
pub struct Args {
    /// Specify a reference fasta file against which to filter.
    #[arg(short = 'r', long = "reference")]
    pub reference: Option<PathBuf>,

    /// Sequencing summary file from which reads mapping to the reference are removed.
    #[arg(long = "summary_in")]
    pub summary_in: Option<PathBuf>,

    /// Output file for the filtered sequencing summary.
    #[arg(long = "summary_out")]
    pub summary_out: Option<PathBuf>,

    /// Specify the path and filename for the log file. [default: NanoLyse.log]
    #[arg(long = "logfile")]
    pub logfile: Option<PathBuf>,
}

impl Args {
    /// Parse the process arguments, with `-v/--version` instead of clap's `-V`.
    pub fn parse_cli() -> Self {
        Self::parse_from_iter(std::env::args_os())
    }

    pub fn parse_from_iter<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from_iter(args).unwrap_or_else(|e| e.exit())
    }

    pub fn try_parse_from_iter<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::command()
            .arg(
                Arg::new("version")
                    .short('v')
                    .long("version")
                    .action(ArgAction::Version)
                    .help("Print version and exit."),
            )
            .try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }

    /// The summary input/output pair, if summary filtering was requested.
    pub fn summary_paths(&self) -> Result<Option<(&Path, &Path)>, NanolyseError> {
        match (&self.summary_in, &self.summary_out) {
            (Some(summary_in), Some(summary_out)) => {
                Ok(Some((summary_in.as_path(), summary_out.as_path())))
            }
            (None, None) => Ok(None),
            _ => Err(NanolyseError::UnpairedSummaryArgs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from_iter(["NanoLyse"]).unwrap();
        assert!(args.reference.is_none());
        assert!(args.logfile.is_none());
        assert!(args.summary_paths().unwrap().is_none());
    }

    #[test]
    fn test_reference_short_and_long() {
        let short = Args::try_parse_from_iter(["NanoLyse", "-r", "lambda.fa"]).unwrap();
        let long = Args::try_parse_from_iter(["NanoLyse", "--reference", "lambda.fa"]).unwrap();
        assert_eq!(short.reference, Some(PathBuf::from("lambda.fa")));
        assert_eq!(long.reference, short.reference);
    }

    #[test]
    fn test_summary_flags_must_be_paired() {
        let both = Args::try_parse_from_iter([
            "NanoLyse",
            "--summary_in",
            "in.txt",
            "--summary_out",
            "out.txt",
        ])
        .unwrap();
        let (summary_in, summary_out) = both.summary_paths().unwrap().unwrap();
        assert_eq!(summary_in, Path::new("in.txt"));
        assert_eq!(summary_out, Path::new("out.txt"));

        let only_in = Args::try_parse_from_iter(["NanoLyse", "--summary_in", "in.txt"]).unwrap();
        assert!(matches!(
            only_in.summary_paths(),
            Err(NanolyseError::UnpairedSummaryArgs)
        ));

        let only_out =
            Args::try_parse_from_iter(["NanoLyse", "--summary_out", "out.txt"]).unwrap();
        assert!(only_out.summary_paths().is_err());
    }

    #[test]
    fn test_version_flag() {
        let err = Args::try_parse_from_iter(["NanoLyse", "-v"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
