//! Batch processing of species moveset records
//!
//! A batch is a flat sequence of lines where every six consecutive lines
//! describe one species:
//!
//! ```text
//! Bulbasaur           <- header, ignored
//! Tackle, Growl       <- base moves
//! 3;Vine Whip,7;...   <- level-up moves
//! Toxic, Rest         <- disc moves
//! Petal Dance         <- egg moves
//!                     <- spacer, ignored
//! ```
//!
//! Each record becomes one output row of four tab-separated fields.

use crate::request::{ParseRequest, ParseResult};
use crate::resolver::Resolver;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Number of input lines per record
pub const RECORD_LINES: usize = 6;

/// What a line contributes to its record, by position within the record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Header,
    BaseMoves,
    LevelUpMoves,
    DiscMoves,
    EggMoves,
    Spacer,
}

impl FieldRole {
    /// Roles in record order
    pub const ALL: [FieldRole; RECORD_LINES] = [
        FieldRole::Header,
        FieldRole::BaseMoves,
        FieldRole::LevelUpMoves,
        FieldRole::DiscMoves,
        FieldRole::EggMoves,
        FieldRole::Spacer,
    ];

    /// Role of the line at `index` in the flat input
    pub fn for_line(index: usize) -> Self {
        Self::ALL[index % RECORD_LINES]
    }

    /// Build the parse request for a line in this role, if it is parsed at all
    pub fn request(self, line: &str) -> Option<ParseRequest> {
        match self {
            FieldRole::Header | FieldRole::Spacer => None,
            FieldRole::LevelUpMoves => Some(ParseRequest::LevelUp(line.to_string())),
            FieldRole::BaseMoves | FieldRole::DiscMoves | FieldRole::EggMoves => {
                Some(ParseRequest::List(line.to_string()))
            }
        }
    }

    /// Character written after this field's output
    pub fn terminator(self) -> Option<char> {
        match self {
            FieldRole::BaseMoves | FieldRole::LevelUpMoves | FieldRole::DiscMoves => Some('\t'),
            FieldRole::EggMoves => Some('\n'),
            FieldRole::Header | FieldRole::Spacer => None,
        }
    }
}

/// Output of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    /// One tab-separated row per record, each ending in a newline
    pub output: String,
    /// Every unresolved name across the batch, deduplicated and sorted
    pub unresolved: BTreeSet<String>,
    /// Number of records started, including a trailing partial one
    pub records: usize,
}

/// Accumulates fields for a batch run, line by line
#[derive(Debug, Default)]
pub struct BatchProcessor {
    result: BatchResult,
    lines_seen: usize,
}

impl BatchProcessor {
    /// Create an empty processor
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next line of the batch
    pub fn push_line(&mut self, line: &str, resolver: &Resolver<'_>) {
        let role = FieldRole::for_line(self.lines_seen);
        if role == FieldRole::Header {
            self.result.records += 1;
        }
        self.lines_seen += 1;

        let Some(request) = role.request(line) else {
            return;
        };

        let ParseResult { output, unresolved } = request.parse(resolver);
        self.result.output.push_str(&output);
        if let Some(terminator) = role.terminator() {
            self.result.output.push(terminator);
        }
        self.result.unresolved.extend(unresolved);
    }

    /// Finish the run and take the accumulated result
    pub fn finish(self) -> BatchResult {
        self.result
    }
}

/// Process a whole batch of lines
pub fn process_batch<I, S>(lines: I, resolver: &Resolver<'_>) -> BatchResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut processor = BatchProcessor::new();
    for line in lines {
        processor.push_line(line.as_ref(), resolver);
    }
    processor.finish()
}
