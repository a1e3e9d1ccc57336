//! Move table: the canonical move-name to move-ID mapping

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One row of the move table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Move ID, kept exactly as it appears in the source
    pub id: String,
    /// Canonical display name
    pub name: String,
}

impl MoveEntry {
    /// Create a new entry
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Ordered move entries with a case-folded name index
///
/// When two entries share a name (ignoring case) the first one loaded wins
/// and the later one is unreachable through [`MoveTable::lookup`].
#[derive(Debug, Clone, Default)]
pub struct MoveTable {
    entries: Vec<MoveEntry>,
    index: HashMap<String, usize>,
    source_path: PathBuf,
}

impl MoveTable {
    /// Build a table from entries, in load order
    pub fn new(entries: Vec<MoveEntry>, source_path: PathBuf) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            index.entry(fold(&entry.name)).or_insert(i);
        }

        Self {
            entries,
            index,
            source_path,
        }
    }

    /// Build a table from raw rows, consuming the first two fields of each
    ///
    /// A row with fewer than two fields is a fatal load error.
    pub fn from_rows<I, R, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let source = PathBuf::from("<memory>");
        let mut entries = Vec::new();

        for (i, row) in rows.into_iter().enumerate() {
            entries.push(entry_from_fields(row.as_ref(), &source, i + 1)?);
        }

        Ok(Self::new(entries, source))
    }

    /// Find the ID for a move name, ignoring letter case
    ///
    /// The name must match exactly otherwise; callers trim it beforehand.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.index
            .get(&fold(name))
            .map(|&i| self.entries[i].id.as_str())
    }

    /// All entries in load order
    pub fn entries(&self) -> &[MoveEntry] {
        &self.entries
    }

    /// Number of entries, including unreachable duplicates
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Where the table was loaded from
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }
}

/// Turn one source row into an entry, keeping only the id and name fields
pub(crate) fn entry_from_fields<S: AsRef<str>>(
    fields: &[S],
    path: &Path,
    line: usize,
) -> Result<MoveEntry> {
    match fields {
        [id, name, ..] => Ok(MoveEntry::new(id.as_ref(), name.as_ref())),
        _ => Err(Error::MalformedSourceRow {
            path: path.to_path_buf(),
            line,
            fields: fields.len(),
            expected: 2,
        }),
    }
}

/// Case-fold a name for comparison
pub(crate) fn fold(name: &str) -> String {
    name.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MoveTable {
        MoveTable::from_rows(vec![
            vec!["1", "Tackle"],
            vec!["2", "Growl"],
            vec!["9", "Fire Spin", "Fire", "35"],
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup_any_case() {
        let table = sample();
        assert_eq!(table.lookup("Tackle"), Some("1"));
        assert_eq!(table.lookup("tackle"), Some("1"));
        assert_eq!(table.lookup("GROWL"), Some("2"));
        assert_eq!(table.lookup("fire spin"), Some("9"));
    }

    #[test]
    fn test_lookup_is_exact() {
        let table = sample();
        assert_eq!(table.lookup("Tack"), None);
        assert_eq!(table.lookup(" Tackle"), None);
        assert_eq!(table.lookup("Fire"), None);
        assert_eq!(table.lookup(""), None);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let table = MoveTable::from_rows(vec![
            vec!["1", "Tackle"],
            vec!["7", "TACKLE"],
        ])
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("tackle"), Some("1"));
    }

    #[test]
    fn test_ids_are_verbatim() {
        let table = MoveTable::from_rows(vec![vec!["007", "Ember"]]).unwrap();
        assert_eq!(table.lookup("ember"), Some("007"));
    }

    #[test]
    fn test_short_row_is_fatal() {
        let result = MoveTable::from_rows(vec![vec!["1", "Tackle"], vec!["2"]]);
        match result {
            Err(Error::MalformedSourceRow { line, fields, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(fields, 1);
            }
            other => panic!("expected MalformedSourceRow, got {:?}", other),
        }
    }

    #[test]
    fn test_entries_keep_load_order() {
        let table = sample();
        let ids: Vec<&str> = table.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "9"]);
    }
}
