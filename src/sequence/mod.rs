pub mod reader;

pub use reader::FastaReader;

/// One FASTA record as read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// First whitespace-delimited token of the header.
    pub id: String,
    /// Full header line without the leading `>` or trailing whitespace.
    pub description: String,
    pub seq: Vec<u8>,
}

impl SequenceRecord {
    pub fn from_header(header: &str, seq: Vec<u8>) -> Self {
        let description = header.trim_end().to_string();
        let id = description
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string();
        SequenceRecord {
            id,
            description,
            seq,
        }
    }
}
