//! Level-up move lists
//!
//! Entries are comma-separated and come in one of two shapes:
//!
//! - tagged: `12;Ember,5;Growl`
//! - spaced: `12 Fire Spin,5 Growl`
//!
//! The shape is decided once for the whole input: any `;` anywhere means
//! tagged, otherwise spaced. Mixed input is not supported.

use crate::delimiter::{PRIMARY, SECONDARY};
use crate::request::{push_item, strip_trailing, ParseResult};
use crate::resolver::Resolver;

/// Textual shape of a level-up list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelUpFormat {
    /// `level;name`
    Tagged,
    /// `level name words`
    Spaced,
}

impl LevelUpFormat {
    /// Pick the format for a whole input string
    pub fn detect(text: &str) -> Self {
        if text.contains(PRIMARY) {
            LevelUpFormat::Tagged
        } else {
            LevelUpFormat::Spaced
        }
    }

    /// Split one entry into its level and move name
    ///
    /// Returns `None` when the entry has no name part. In tagged form only
    /// the field after the first `;` is the name; anything after a second
    /// `;` is ignored.
    pub fn split_entry(self, entry: &str) -> Option<(String, String)> {
        match self {
            LevelUpFormat::Tagged => {
                let mut parts = entry.split(PRIMARY);
                let level = parts.next()?;
                let name = parts.next()?.trim_matches(' ');
                if name.is_empty() {
                    None
                } else {
                    Some((level.trim().to_string(), name.to_string()))
                }
            }
            LevelUpFormat::Spaced => {
                let mut words = entry.split_whitespace();
                let level = words.next()?;
                let name = words.collect::<Vec<_>>().join(" ");
                if name.is_empty() {
                    None
                } else {
                    Some((level.to_string(), name))
                }
            }
        }
    }
}

/// Resolve a level-up list into `level;id` pairs joined by commas
///
/// An entry that does not fit the detected shape is reported as unresolved
/// (its trimmed text), the same as a name that matched nothing.
pub fn parse_level_up(text: &str, resolver: &Resolver<'_>) -> ParseResult {
    let format = LevelUpFormat::detect(text);
    let mut result = ParseResult::default();

    for entry in text.split(SECONDARY) {
        if entry.trim().is_empty() {
            continue;
        }

        let Some((level, name)) = format.split_entry(entry) else {
            result.unresolved.push(entry.trim().to_string());
            continue;
        };

        match resolver.resolve(&name) {
            Some(id) => {
                let pair = format!("{}{}{}", level, PRIMARY, id);
                push_item(&mut result.output, &pair, SECONDARY);
            }
            None => result.unresolved.push(name),
        }
    }

    strip_trailing(&mut result.output, SECONDARY);
    result
}
