use super::SequenceRecord;
use crate::utils::input::open_input;
use anyhow::{bail, Context, Result};
use std::io::BufRead;
use std::path::Path;

/// Streaming FASTA parser that keeps the original header text intact.
pub struct FastaReader<R: BufRead> {
    reader: R,
    line: String,
    line_number: usize,
    pending_header: Option<String>,
    finished: bool,
}

impl FastaReader<Box<dyn BufRead>> {
    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(FastaReader::new(open_input(path)?))
    }
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        FastaReader {
            reader,
            line: String::new(),
            line_number: 0,
            pending_header: None,
            finished: false,
        }
    }

    /// Returns false at end of input.
    fn read_line(&mut self) -> Result<bool> {
        self.line.clear();
        let n = self
            .reader
            .read_line(&mut self.line)
            .with_context(|| format!("failed to read FASTA line {}", self.line_number + 1))?;
        if n > 0 {
            self.line_number += 1;
        }
        Ok(n > 0)
    }

    fn first_header(&mut self) -> Result<Option<String>> {
        while self.read_line()? {
            if let Some(header) = self.line.strip_prefix('>') {
                return Ok(Some(header.to_string()));
            }
            if !self.line.trim().is_empty() {
                bail!(
                    "malformed FASTA: expected '>' at line {}, found {:?}",
                    self.line_number,
                    self.line.trim_end()
                );
            }
        }
        Ok(None)
    }

    fn read_record(&mut self) -> Result<Option<SequenceRecord>> {
        let header = match self.pending_header.take() {
            Some(header) => header,
            None => match self.first_header()? {
                Some(header) => header,
                None => return Ok(None),
            },
        };

        let mut seq = Vec::new();
        while self.read_line()? {
            if let Some(next) = self.line.strip_prefix('>') {
                self.pending_header = Some(next.to_string());
                break;
            }
            seq.extend_from_slice(self.line.trim_end().as_bytes());
        }

        Ok(Some(SequenceRecord::from_header(&header, seq)))
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<SequenceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
