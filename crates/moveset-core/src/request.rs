//! Parse requests and their results

use crate::level_up::parse_level_up;
use crate::list::parse_list;
use crate::resolver::Resolver;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One field of user input to resolve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "text", rename_all = "kebab-case")]
pub enum ParseRequest {
    /// A plain move list (base, disc, egg, tutor moves)
    List(String),
    /// A level-tagged move list
    LevelUp(String),
}

impl ParseRequest {
    /// Resolve this request
    pub fn parse(&self, resolver: &Resolver<'_>) -> ParseResult {
        match self {
            ParseRequest::List(text) => parse_list(text, resolver),
            ParseRequest::LevelUp(text) => parse_level_up(text, resolver),
        }
    }

    /// The raw input text
    pub fn text(&self) -> &str {
        match self {
            ParseRequest::List(text) | ParseRequest::LevelUp(text) => text,
        }
    }

    /// Short name of the mode, as used in reports
    pub fn mode_name(&self) -> &'static str {
        match self {
            ParseRequest::List(_) => "list",
            ParseRequest::LevelUp(_) => "level-up",
        }
    }
}

/// Outcome of resolving one field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Resolved entries only, joined by the mode's delimiter
    pub output: String,
    /// Names that matched nothing, in the order encountered
    pub unresolved: Vec<String>,
}

impl ParseResult {
    /// Check if every name resolved
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

impl fmt::Display for ParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.output)
    }
}

/// Append `item` and a trailing separator to `buffer`
pub(crate) fn push_item(buffer: &mut String, item: &str, separator: char) {
    buffer.push_str(item);
    buffer.push(separator);
}

/// Drop the final separator, if any was written
pub(crate) fn strip_trailing(buffer: &mut String, separator: char) {
    if buffer.ends_with(separator) {
        buffer.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MoveTable, OverrideMap};

    #[test]
    fn test_request_dispatch() {
        let table = MoveTable::from_rows(vec![vec!["1", "Tackle"], vec!["2", "Growl"]]).unwrap();
        let overrides = OverrideMap::new();
        let resolver = Resolver::new(&table, &overrides);

        let list = ParseRequest::List("Tackle, Growl".to_string());
        assert_eq!(list.parse(&resolver).output, "1;2");
        assert_eq!(list.mode_name(), "list");

        let level_up = ParseRequest::LevelUp("1;Tackle,4;Growl".to_string());
        assert_eq!(level_up.parse(&resolver).output, "1;1,4;2");
        assert_eq!(level_up.text(), "1;Tackle,4;Growl");
    }

    #[test]
    fn test_result_display_and_completeness() {
        let table = MoveTable::from_rows(vec![vec!["1", "Tackle"], vec!["2", "Growl"]]).unwrap();
        let overrides = OverrideMap::new();
        let resolver = Resolver::new(&table, &overrides);

        let complete = ParseRequest::List("Tackle;Growl".to_string()).parse(&resolver);
        assert!(complete.is_complete());
        assert_eq!(complete.to_string(), "1;2");

        let partial = ParseRequest::List("Tackle;Splash".to_string()).parse(&resolver);
        assert!(!partial.is_complete());
        assert_eq!(format!("{}", partial), "1");
    }

    #[test]
    fn test_strip_trailing_on_empty_is_noop() {
        let mut buffer = String::new();
        strip_trailing(&mut buffer, ';');
        assert_eq!(buffer, "");

        push_item(&mut buffer, "1", ';');
        push_item(&mut buffer, "2", ';');
        strip_trailing(&mut buffer, ';');
        assert_eq!(buffer, "1;2");
    }

    #[test]
    fn test_request_serialization() {
        let request = ParseRequest::LevelUp("5;Growl".to_string());
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"mode":"level-up","text":"5;Growl"}"#);
    }
}
