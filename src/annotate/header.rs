use crate::metadata::MetadataTable;

pub const HEADER_DELIMITER: char = '|';
pub const MISSING_VALUE: &str = "NA";

/// Requested header columns resolved against the metadata schema once,
/// before any record is streamed.
#[derive(Debug, Clone)]
pub struct HeaderPlan {
    columns: Vec<(String, Option<usize>)>,
}

impl HeaderPlan {
    pub fn new(header_columns: &[String], table: &MetadataTable) -> Self {
        let columns = header_columns
            .iter()
            .map(|name| (name.clone(), table.value_column_index(name)))
            .collect();
        HeaderPlan { columns }
    }

    /// Requested columns with no value to emit (absent from the schema, or the
    /// id column itself); these render as `NA`.
    pub fn missing_columns(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|(_, index)| index.is_none())
            .map(|(name, _)| name.as_str())
    }

    pub fn render(&self, id: &str, row: &[String]) -> String {
        let mut header = String::from(id);
        for (_, index) in &self.columns {
            header.push(HEADER_DELIMITER);
            match index {
                Some(i) => header.push_str(&row[*i]),
                None => header.push_str(MISSING_VALUE),
            }
        }
        header
    }
}
