use crate::utils::input::open_input;
use anyhow::{bail, Context, Result};
use log::{debug, warn};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Tab-separated metadata indexed by one identifier column.
#[derive(Debug)]
pub struct MetadataTable {
    columns: Vec<String>,
    id_column: usize,
    rows: HashMap<String, Vec<String>>,
}

impl MetadataTable {
    pub fn from_path(path: &Path, id_column: &str) -> Result<Self> {
        let reader = open_input(path)?;
        Self::from_reader(reader, id_column)
            .with_context(|| format!("failed to load metadata from {}", path.display()))
    }

    pub fn from_reader<R: Read>(reader: R, id_column: &str) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns: Vec<String> = rdr
            .headers()
            .context("failed to read metadata header row")?
            .iter()
            .map(str::to_string)
            .collect();

        let Some(id_index) = columns.iter().position(|c| c == id_column) else {
            bail!(
                "id column '{}' not found in metadata (available columns: {})",
                id_column,
                columns.join(", ")
            );
        };

        let mut rows = HashMap::new();
        let mut duplicates = 0usize;
        for result in rdr.records() {
            let record = result.context("failed to parse metadata row")?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            if record.len() > columns.len() {
                bail!(
                    "metadata line {} has {} fields but the header has {}",
                    line,
                    record.len(),
                    columns.len()
                );
            }

            let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
            cells.resize(columns.len(), String::new());

            let key = cells[id_index].clone();
            if rows.insert(key, cells).is_some() {
                debug!("duplicate metadata identifier at line {}", line);
                duplicates += 1;
            }
        }

        if duplicates > 0 {
            warn!(
                "{} duplicate identifiers in metadata column '{}'; keeping the last occurrence",
                duplicates, id_column
            );
        }

        Ok(MetadataTable {
            columns,
            id_column: id_index,
            rows,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn id_column(&self) -> &str {
        &self.columns[self.id_column]
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Index of a column that can be emitted as a header value. The id column
    /// is the lookup key and is not one of them.
    pub fn value_column_index(&self, name: &str) -> Option<usize> {
        self.column_index(name).filter(|&i| i != self.id_column)
    }

    /// Full row for `id`, one cell per column.
    pub fn row(&self, id: &str) -> Option<&[String]> {
        self.rows.get(id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(text: &str, id_column: &str) -> Result<MetadataTable> {
        MetadataTable::from_reader(text.as_bytes(), id_column)
    }

    fn cell<'a>(table: &'a MetadataTable, id: &str, column: &str) -> Option<&'a str> {
        let index = table.column_index(column)?;
        table.row(id).map(|row| row[index].as_str())
    }

    #[test]
    fn test_lookup_by_id_column() {
        let table = load("id\tcountry\tyear\nS1\tUSA\t2020\nS2\tPeru\t2019\n", "id").unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.id_column(), "id");
        assert_eq!(table.columns(), ["id", "country", "year"]);
        assert_eq!(cell(&table, "S1", "country"), Some("USA"));
        assert_eq!(cell(&table, "S2", "year"), Some("2019"));
        assert_eq!(cell(&table, "S3", "country"), None);
        assert_eq!(cell(&table, "S1", "host"), None);
    }

    #[test]
    fn test_id_column_is_not_a_value_column() {
        let table = load("country\tstrain\nUSA\tS1\n", "strain").unwrap();

        assert_eq!(table.column_index("strain"), Some(1));
        assert_eq!(table.value_column_index("strain"), None);
        assert_eq!(table.value_column_index("country"), Some(0));
        assert_eq!(table.value_column_index("host"), None);
        assert_eq!(cell(&table, "S1", "country"), Some("USA"));
    }

    #[test]
    fn test_keys_match_exactly() {
        let table = load("id\tcountry\n S1 \tUSA\nS2\tPeru\n", "id").unwrap();

        assert!(table.row("S1").is_none());
        assert!(table.row(" S1 ").is_some());
        assert!(table.row("S2").is_some());
    }

    #[test]
    fn test_missing_id_column() {
        let err = load("id\tcountry\nS1\tUSA\n", "strain").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'strain'"));
        assert!(msg.contains("id, country"));
    }

    #[test]
    fn test_empty_file_has_no_id_column() {
        assert!(load("", "id").is_err());
    }

    #[test]
    fn test_header_only_table() {
        let table = load("id\tcountry\n", "id").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = load("id\tcountry\tyear\nS1\tUSA\n", "id").unwrap();
        assert_eq!(cell(&table, "S1", "country"), Some("USA"));
        assert_eq!(cell(&table, "S1", "year"), Some(""));
    }

    #[test]
    fn test_long_rows_are_rejected() {
        let err = load("id\tcountry\nS1\tUSA\textra\n", "id").unwrap_err();
        assert!(err.to_string().contains("3 fields"));
    }

    #[test]
    fn test_duplicate_ids_keep_last_row() {
        let table = load("id\tcountry\nS1\tUSA\nS1\tChile\n", "id").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(cell(&table, "S1", "country"), Some("Chile"));
    }

    #[test]
    fn test_values_kept_verbatim() {
        let table = load("id\tdepth\nS1\t007.50\n", "id").unwrap();
        assert_eq!(cell(&table, "S1", "depth"), Some("007.50"));
    }
}
