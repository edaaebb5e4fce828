use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

const READ_BUFFER_SIZE: usize = 1024 * 1024;

/// Open a text input, decompressing gzip/bzip2/xz/zstd transparently.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    let file =
        File::open(path).with_context(|| format!("failed to open input file {}", path.display()))?;

    let inner: Box<dyn Read> = match niffler::get_reader(Box::new(file)) {
        Ok((reader, _compression)) => reader,
        // Files shorter than a magic number cannot be compressed.
        Err(niffler::Error::FileTooShort) => Box::new(
            File::open(path)
                .with_context(|| format!("failed to reopen input file {}", path.display()))?,
        ),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to decode {}", path.display()));
        }
    };

    Ok(Box::new(BufReader::with_capacity(READ_BUFFER_SIZE, inner)))
}
