use std::fs;
use std::path::Path;
use std::process::{Command, Output};

pub fn write_file(path: &Path, contents: &str) {
    fs::write(path, contents)
        .unwrap_or_else(|e| panic!("failed to write {}: {}", path.display(), e));
}

pub fn run_annotate(
    sequences: &Path,
    metadata: &Path,
    id_column: &str,
    header: &str,
    output: &Path,
) -> Output {
    Command::new(env!("CARGO_BIN_EXE_annotate-headers"))
        .arg("--sequences")
        .arg(sequences)
        .arg("--metadata")
        .arg(metadata)
        .args(["--metadata-id-columns", id_column, "--header", header])
        .arg("--output_sequences")
        .arg(output)
        .output()
        .expect("annotate-headers should run")
}
