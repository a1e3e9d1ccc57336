//! Name resolution against the move table with override fallback

use crate::move_table::MoveTable;
use crate::overrides::OverrideMap;

/// Resolves typed move names to IDs for one session
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    table: &'a MoveTable,
    overrides: &'a OverrideMap,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over a table and its overrides
    pub fn new(table: &'a MoveTable, overrides: &'a OverrideMap) -> Self {
        Self { table, overrides }
    }

    /// Resolve a trimmed move name, trying the table first
    pub fn resolve(&self, name: &str) -> Option<&'a str> {
        self.table
            .lookup(name)
            .or_else(|| self.overrides.get(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_then_override() {
        let table = MoveTable::from_rows(vec![vec!["1", "Tackle"], vec!["2", "Growl"]]).unwrap();
        let overrides = OverrideMap::build("Tackle:99,Fire Spin:83");
        let resolver = Resolver::new(&table, &overrides);

        assert_eq!(resolver.resolve("tackle"), Some("1"));
        assert_eq!(resolver.resolve("fire spin"), Some("83"));
        assert_eq!(resolver.resolve("Splash"), None);
    }
}
