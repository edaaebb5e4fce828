use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct AnnotateOptions {
    pub sequences: PathBuf,
    pub metadata: PathBuf,
    pub id_column: String,
    pub header_columns: Vec<String>,
    pub output: PathBuf,
    pub show_progress: bool,
}

impl AnnotateOptions {
    pub fn new(
        sequences: impl Into<PathBuf>,
        metadata: impl Into<PathBuf>,
        id_column: impl Into<String>,
        header_columns: Vec<String>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            sequences: sequences.into(),
            metadata: metadata.into(),
            id_column: id_column.into(),
            header_columns,
            output: output.into(),
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}
