pub mod header;
pub mod options;

pub use header::{HeaderPlan, HEADER_DELIMITER, MISSING_VALUE};
pub use options::AnnotateOptions;

use crate::metadata::MetadataTable;
use crate::sequence::{FastaReader, SequenceRecord};
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::{Context, Result};
use bio::io::fasta;
use indicatif::ProgressBar;
use log::{debug, info};
use std::fs::File;
use std::io::{self, Write};
use std::time::Duration;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationStats {
    pub records: u64,
    pub annotated: u64,
    pub unmatched: u64,
}

/// Rewrite the headers of `options.sequences` using metadata and write the
/// result to `options.output`. Unmatched records are reported on stdout.
pub fn annotate(options: &AnnotateOptions) -> Result<AnnotationStats> {
    let table = MetadataTable::from_path(&options.metadata, &options.id_column)?;
    info!(
        "Loaded {} metadata rows keyed by '{}' from {}",
        table.len(),
        table.id_column(),
        options.metadata.display()
    );

    let plan = HeaderPlan::new(&options.header_columns, &table);
    for column in plan.missing_columns() {
        debug!("column '{}' not in metadata, using {}", column, MISSING_VALUE);
    }

    let records = FastaReader::from_path(&options.sequences)?;

    let file = File::create(&options.output)
        .with_context(|| format!("failed to create output file {}", options.output.display()))?;
    let mut writer = fasta::Writer::new(file);

    let progress = ProgressBarBuilder::new(format!("Annotating {}", options.sequences.display()))
        .with_template("{spinner:.green} [{elapsed_precise}] {msg}: {pos} records ({per_sec})")
        .with_tick(Duration::from_millis(200))
        .hidden(!options.show_progress)
        .build()?;

    let stats = {
        let mut stdout = io::stdout().lock();
        annotate_records(records, &table, &plan, &mut writer, &mut stdout, &progress)
    };
    progress.finish_and_clear();
    let stats = stats.with_context(|| format!("failed to annotate {}", options.sequences.display()))?;

    writer
        .flush()
        .with_context(|| format!("failed to write {}", options.output.display()))?;

    Ok(stats)
}

/// Core loop: one output record per input record, in input order.
pub fn annotate_records<I, W, O>(
    records: I,
    table: &MetadataTable,
    plan: &HeaderPlan,
    writer: &mut fasta::Writer<W>,
    warnings: &mut O,
    progress: &ProgressBar,
) -> Result<AnnotationStats>
where
    I: IntoIterator<Item = Result<SequenceRecord>>,
    W: Write,
    O: Write,
{
    let mut stats = AnnotationStats::default();

    for record in records {
        let record = record?;
        stats.records += 1;

        match table.row(&record.id) {
            Some(row) => {
                let header = plan.render(&record.id, row);
                writer.write(&header, None, &record.seq)?;
                stats.annotated += 1;
            }
            None => {
                progress.suspend(|| {
                    writeln!(
                        warnings,
                        "Warning: {} not found in metadata. Keeping original header.",
                        record.id
                    )
                })?;
                writer.write(&record.description, None, &record.seq)?;
                stats.unmatched += 1;
            }
        }

        progress.inc(1);
    }

    Ok(stats)
}
