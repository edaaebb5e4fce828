use crate::annotate::{annotate, AnnotateOptions};
use crate::cli::Args;
use anyhow::Result;
use log::{info, warn};

pub fn run(args: Args) -> Result<()> {
    let options = AnnotateOptions::new(
        args.sequences,
        args.metadata,
        args.metadata_id_columns,
        args.header,
        args.output_sequences,
    )
    .with_progress(true);

    let stats = annotate(&options)?;

    info!(
        "Wrote {} records to {} ({} annotated, {} kept original header)",
        stats.records,
        options.output.display(),
        stats.annotated,
        stats.unmatched
    );
    if stats.records > 0 && stats.annotated == 0 {
        warn!(
            "no sequence identifiers matched metadata column '{}'",
            options.id_column
        );
    }

    Ok(())
}
