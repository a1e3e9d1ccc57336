//! CSV loading for move tables and other data tables

use crate::error::{Error, Result};
use crate::move_table::{entry_from_fields, MoveTable};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// One data row of a CSV file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    /// 1-based line number in the source file
    pub line: usize,
    /// Raw field values
    pub fields: Vec<String>,
}

impl SourceRow {
    /// Get a field by index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }
}

/// Rows of one CSV file together with where they came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTable {
    /// Source file path
    pub path: PathBuf,
    /// Data rows, header excluded
    pub rows: Vec<SourceRow>,
}

impl DataTable {
    /// Get a field that every row is expected to have
    pub fn require<'r>(&self, row: &'r SourceRow, index: usize) -> Result<&'r str> {
        row.get(index).ok_or_else(|| Error::MalformedSourceRow {
            path: self.path.clone(),
            line: row.line,
            fields: row.fields.len(),
            expected: index + 1,
        })
    }

    /// Collect one column, failing on the first row that lacks it
    pub fn column(&self, index: usize) -> Result<Vec<String>> {
        self.rows
            .iter()
            .map(|row| self.require(row, index).map(str::to_string))
            .collect()
    }
}

/// Read every data row of a CSV file, skipping the header row
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<DataTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    read_records(BufReader::new(file), path)
}

/// Read CSV rows from a string (useful for testing)
pub fn read_table_str(content: &str, source_name: &str) -> Result<DataTable> {
    read_records(content.as_bytes(), Path::new(source_name))
}

/// Load a move table from a CSV file with an `id,name,...` layout
pub fn load_move_table<P: AsRef<Path>>(path: P) -> Result<MoveTable> {
    let table = build_move_table(read_table(path)?)?;
    log::debug!(
        "loaded {} moves from {}",
        table.len(),
        table.source_path().display()
    );
    Ok(table)
}

/// Parse a move table from CSV text (useful for testing)
pub fn parse_move_table_str(content: &str, source_name: &str) -> Result<MoveTable> {
    build_move_table(read_table_str(content, source_name)?)
}

fn build_move_table(data: DataTable) -> Result<MoveTable> {
    let entries = data
        .rows
        .iter()
        .map(|row| entry_from_fields(row.fields.as_slice(), &data.path, row.line))
        .collect::<Result<Vec<_>>>()?;

    Ok(MoveTable::new(entries, data.path))
}

fn read_records<R: Read>(reader: R, path: &Path) -> Result<DataTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // Short rows are reported by the caller, not the csv crate
        .from_reader(reader);

    let mut rows = Vec::new();
    for (row_idx, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| Error::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;

        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(row_idx + 2);

        if record.iter().all(|field| field.trim().is_empty()) {
            log::warn!("skipping blank row {} in {}", line, path.display());
            continue;
        }

        rows.push(SourceRow {
            line,
            fields: record.iter().map(str::to_string).collect(),
        });
    }

    Ok(DataTable {
        path: path.to_path_buf(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_table() {
        let csv = "id,name,type,power\n1,Tackle,Normal,40\n2,Growl,Normal,0\n9,Fire Spin,Fire,35\n";
        let table = parse_move_table_str(csv, "moves.csv").unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.lookup("fire spin"), Some("9"));
        assert_eq!(table.source_path(), Path::new("moves.csv"));
    }

    #[test]
    fn test_header_row_is_not_a_move() {
        let csv = "id,name\n1,Tackle\n";
        let table = parse_move_table_str(csv, "moves.csv").unwrap();
        assert_eq!(table.lookup("name"), None);
    }

    #[test]
    fn test_short_row_reports_line() {
        let csv = "id,name\n1,Tackle\n2\n";
        match parse_move_table_str(csv, "moves.csv") {
            Err(Error::MalformedSourceRow { line, fields, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(fields, 1);
            }
            other => panic!("expected MalformedSourceRow, got {:?}", other),
        }
    }

    #[test]
    fn test_quoted_names() {
        let csv = "id,name\n5,\"Double-Edge, Alt\"\n";
        let table = parse_move_table_str(csv, "moves.csv").unwrap();
        assert_eq!(table.lookup("double-edge, alt"), Some("5"));
    }

    #[test]
    fn test_blank_rows_skipped() {
        let data = read_table_str("id,name\n1,Tackle\n,\n2,Growl\n", "moves.csv").unwrap();
        assert_eq!(data.rows.len(), 2);
        assert_eq!(data.rows[1].get(1), Some("Growl"));
        assert_eq!(data.rows[1].line, 4);
    }

    #[test]
    fn test_column_requires_every_row() {
        let data = read_table_str("id,name,area\n1,Route 1,4;16\n2,Route 2\n", "areas.csv").unwrap();
        assert_eq!(data.column(1).unwrap(), vec!["Route 1", "Route 2"]);

        match data.column(2) {
            Err(Error::MalformedSourceRow { line, expected, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(expected, 3);
            }
            other => panic!("expected MalformedSourceRow, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "moveset_core_loader_test_moves_{}.csv",
            std::process::id()
        ));
        std::fs::write(&path, "id,name\n33,Tackle\n45,Growl\n").unwrap();

        let table = load_move_table(&path).unwrap();
        assert_eq!(table.lookup("GROWL"), Some("45"));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let result = load_move_table("/nonexistent/moves.csv");
        assert!(matches!(result, Err(Error::FileRead { .. })));
    }
}
