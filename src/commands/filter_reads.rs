use crate::aligner::{AlignerPreset, ContaminantIndex, HitDetector};
use crate::cli::Args;
use crate::commands::filter_summary::{self, SummaryTable};
use crate::config::Config;
use crate::sequence_processor::{
    FastqReader, Outcome, ProcessingStats, Sequence, SequenceProcessor, SequenceReader,
};
use crate::utils::progress_bar_builder::{ProgressBarBuilder, READ_COUNTER_TEMPLATE};
use crate::utils::removed_ids::RemovedIds;
use anyhow::{Context, Result};
use bio::io::fastq;
use indicatif::ProgressBar;
use log::info;
use std::io::{self, Read, Write};

/// Writes every read without a hit and counts the rest.
pub struct ReadFilter<'a, D: HitDetector, W: Write> {
    detector: &'a D,
    writer: fastq::Writer<W>,
    removed: Option<&'a mut RemovedIds>,
    progress: ProgressBar,
}

impl<'a, D: HitDetector, W: Write> ReadFilter<'a, D, W> {
    pub fn new(
        detector: &'a D,
        output: W,
        removed: Option<&'a mut RemovedIds>,
        progress: ProgressBar,
    ) -> Self {
        Self {
            detector,
            writer: fastq::Writer::new(output),
            removed,
            progress,
        }
    }
}

impl<D: HitDetector, W: Write> SequenceProcessor for ReadFilter<'_, D, W> {
    fn process_sequence(&mut self, sequence: &Sequence) -> Result<Outcome> {
        if self.detector.has_hit(&sequence.data)? {
            if let Some(removed) = self.removed.as_deref_mut() {
                removed.push(&sequence.id)?;
            }
            return Ok(Outcome::Removed);
        }

        self.writer
            .write(
                &sequence.id,
                sequence.desc.as_deref(),
                &sequence.data,
                &sequence.quality,
            )
            .context("Failed to write FASTQ record")?;
        Ok(Outcome::Kept)
    }

    fn update_progress(&mut self, stats: &ProcessingStats) {
        self.progress.set_position(stats.processed);
        self.progress
            .set_message(format!("{} removed,", stats.removed));
    }

    fn finalize(&mut self, stats: &ProcessingStats) -> Result<()> {
        self.writer.flush().context("Failed to flush FASTQ output")?;
        self.progress.finish_and_clear();
        info!(
            "Processed {} reads: {} kept, {} removed",
            stats.processed, stats.kept, stats.removed
        );
        Ok(())
    }
}

/// Stream FASTQ from `input` to `output`, dropping reads `detector` hits.
pub fn filter_stream<R, W, D>(
    input: R,
    output: W,
    detector: &D,
    removed: Option<&mut RemovedIds>,
    progress: ProgressBar,
) -> Result<ProcessingStats>
where
    R: Read + Send + 'static,
    W: Write,
    D: HitDetector,
{
    let mut reader = FastqReader::from_reader(input)?;
    let mut filter = ReadFilter::new(detector, output, removed, progress);
    reader.read_sequences(&mut filter)
}

pub fn run(args: &Args, config: &Config) -> Result<()> {
    // Flags, summary header, preset and reference are all checked before the
    // index build and before stdin is touched.
    let summary = match args.summary_paths()? {
        Some((summary_in, summary_out)) => Some((SummaryTable::open(summary_in)?, summary_out)),
        None => None,
    };
    let preset: AlignerPreset = config.preset.parse()?;
    let reference = config.resolve_reference(args.reference.as_deref())?;
    info!("Using reference {} with preset {}", reference.display(), preset);

    let index = ContaminantIndex::build(&reference, preset)?;

    let mut removed = if summary.is_some() {
        Some(RemovedIds::new()?)
    } else {
        None
    };

    let progress = ProgressBarBuilder::new("Filtering")
        .with_template(READ_COUNTER_TEMPLATE)
        .with_tick()
        .build()?;
    let stats = filter_stream(
        io::stdin(),
        io::stdout().lock(),
        &index,
        removed.as_mut(),
        progress,
    )?;

    eprintln!("NanoLyse: removed {} reads.", stats.removed);
    info!("NanoLyse: removed {} reads.", stats.removed);

    if let (Some((table, summary_out)), Some(removed)) = (summary, removed) {
        let ids = removed.into_set()?;
        filter_summary::run(table, summary_out, &ids)?;
    }

    Ok(())
}
