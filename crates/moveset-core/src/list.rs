//! Plain move lists, e.g. `Tackle, Growl, Ember`

use crate::delimiter::{self, PRIMARY};
use crate::request::{push_item, strip_trailing, ParseResult};
use crate::resolver::Resolver;

/// Resolve a move list typed with either delimiter convention
///
/// Resolved IDs are always joined with the primary delimiter. Blank tokens
/// are skipped, so empty input gives an empty result.
pub fn parse_list(text: &str, resolver: &Resolver<'_>) -> ParseResult {
    let used = delimiter::resolve(text).as_char();
    let mut result = ParseResult::default();

    for token in text.split(used) {
        let name = token.trim_matches(' ');
        if name.is_empty() {
            continue;
        }

        match resolver.resolve(name) {
            Some(id) => push_item(&mut result.output, id, PRIMARY),
            None => result.unresolved.push(name.to_string()),
        }
    }

    strip_trailing(&mut result.output, PRIMARY);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MoveTable, OverrideMap};

    fn table() -> MoveTable {
        MoveTable::from_rows(vec![
            vec!["1", "Tackle"],
            vec!["2", "Growl"],
            vec!["9", "Fire Spin"],
        ])
        .unwrap()
    }

    fn parse(text: &str) -> ParseResult {
        let table = table();
        let overrides = OverrideMap::new();
        parse_list(text, &Resolver::new(&table, &overrides))
    }

    #[test]
    fn test_comma_list_any_case() {
        let result = parse("tackle, Growl");
        assert_eq!(result.output, "1;2");
        assert!(result.unresolved.is_empty());
    }

    #[test]
    fn test_semicolon_list() {
        let result = parse("Tackle;Growl;Fire Spin");
        assert_eq!(result.output, "1;2;9");
    }

    #[test]
    fn test_one_miss() {
        let result = parse("Tackle, Splash");
        assert_eq!(result.output, "1");
        assert_eq!(result.unresolved, vec!["Splash".to_string()]);
    }

    #[test]
    fn test_all_missing_gives_empty_output() {
        let result = parse("Splash, Splash, Hyper Beam");
        assert_eq!(result.output, "");
        assert_eq!(result.unresolved, vec!["Splash", "Splash", "Hyper Beam"]);
    }

    #[test]
    fn test_mixed_delimiters_split_on_primary() {
        // "Growl,Fire Spin" is one token and does not resolve
        let result = parse("Tackle;Growl,Fire Spin");
        assert_eq!(result.output, "1");
        assert_eq!(result.unresolved, vec!["Growl,Fire Spin"]);
    }

    #[test]
    fn test_empty_input() {
        let result = parse("");
        assert_eq!(result.output, "");
        assert!(result.unresolved.is_empty());
    }

    #[test]
    fn test_single_name() {
        let result = parse("  Growl ");
        assert_eq!(result.output, "2");
    }

    #[test]
    fn test_override_fallback() {
        let table = table();
        let overrides = OverrideMap::build("Bubble:145");
        let result = parse_list("Bubble, Tackle", &Resolver::new(&table, &overrides));
        assert_eq!(result.output, "145;1");
    }

    #[test]
    fn test_ids_do_not_resolve_as_names() {
        let result = parse("1;2");
        assert_eq!(result.output, "");
        assert_eq!(result.unresolved, vec!["1", "2"]);
    }
}
