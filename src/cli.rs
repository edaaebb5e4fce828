use clap::Parser;
use std::path::PathBuf;

/// Annotate FASTA headers with metadata
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input FASTA file (plain or compressed)
    #[arg(long)]
    pub sequences: PathBuf,

    /// Input metadata TSV file
    #[arg(long)]
    pub metadata: PathBuf,

    /// Column in metadata that matches sequence IDs
    #[arg(long = "metadata-id-columns")]
    pub metadata_id_columns: String,

    /// Comma-separated list of columns to add to header
    #[arg(long, value_delimiter = ',', required = true)]
    pub header: Vec<String>,

    /// Output FASTA file with annotated headers
    #[arg(long = "output_sequences", alias = "output-sequences")]
    pub output_sequences: PathBuf,
}
