//! Delimiter conventions for typed move lists

/// Separator for move-ID lists and for the level/name pair of a level-up entry
pub const PRIMARY: char = ';';

/// Separator between level-up entries, and the fallback list separator
pub const SECONDARY: char = ',';

/// Which of the two separator conventions a piece of text uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Primary,
    Secondary,
}

impl Delimiter {
    /// The separator character for this convention
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Primary => PRIMARY,
            Delimiter::Secondary => SECONDARY,
        }
    }
}

/// Infer the separator a user typed a move list with
///
/// The secondary delimiter is only chosen when the text has no primary
/// delimiter at all; mixed or undelimited text falls back to primary.
pub fn resolve(text: &str) -> Delimiter {
    if !text.contains(PRIMARY) && text.contains(SECONDARY) {
        Delimiter::Secondary
    } else {
        Delimiter::Primary
    }
}
