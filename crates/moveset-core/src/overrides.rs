//! User-supplied move IDs for names the move table does not know
//!
//! The input is a single line such as `Fire Spin:83,Bubble:145`. Entries are
//! separated by commas; the name/id separator is `:` unless the line has no
//! `:` but does have `;`.

use crate::error::{Error, Result};
use crate::move_table::fold;
use std::collections::HashMap;

const ENTRY_SEPARATOR: char = ',';
const PAIR_SEPARATOR: char = ':';
const FALLBACK_PAIR_SEPARATOR: char = ';';

/// Secondary name-to-ID mapping, consulted after the move table misses
///
/// Keys are stored case-folded so lookups ignore letter case the same way
/// [`crate::MoveTable::lookup`] does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideMap {
    ids: HashMap<String, String>,
}

impl OverrideMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an override line, discarding it entirely if any entry is malformed
    pub fn build(raw: &str) -> Self {
        Self::try_parse(raw).unwrap_or_default()
    }

    /// Parse an override line, reporting the first malformed entry
    ///
    /// No partial map is ever returned. A blank line is an empty map.
    pub fn try_parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::new());
        }

        let separator = pair_separator(raw);
        let mut ids = HashMap::new();

        for entry in raw.split(ENTRY_SEPARATOR) {
            let parts: Vec<&str> = entry.split(separator).collect();
            let [name, id] = parts.as_slice() else {
                return Err(Error::MalformedOverride {
                    entry: entry.to_string(),
                });
            };

            ids.insert(fold(name.trim_matches(' ')), id.trim_matches(' ').to_string());
        }

        Ok(Self { ids })
    }

    /// Look up an override ID, ignoring letter case
    pub fn get(&self, name: &str) -> Option<&str> {
        self.ids.get(&fold(name)).map(String::as_str)
    }

    /// Number of overrides
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if there are no overrides
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

fn pair_separator(raw: &str) -> char {
    if !raw.contains(PAIR_SEPARATOR) && raw.contains(FALLBACK_PAIR_SEPARATOR) {
        FALLBACK_PAIR_SEPARATOR
    } else {
        PAIR_SEPARATOR
    }
}
