//! moveset-core: Core library for resolving species move lists
//!
//! This library provides functionality to:
//! - Load a move table (`id,name,...` CSV) with case-insensitive name lookup
//! - Parse a user override line for moves the table lacks
//! - Resolve typed move lists and level-up lists into move-ID lists
//! - Batch-process six-line species moveset records into tab-separated rows
//! - Report species coverage and name usage across data tables

pub mod batch;
pub mod census;
pub mod config;
pub mod data_files;
pub mod delimiter;
pub mod error;
pub mod level_up;
pub mod list;
pub mod loader;
pub mod move_table;
pub mod overrides;
pub mod request;
pub mod resolver;

pub use batch::{process_batch, BatchProcessor, BatchResult, FieldRole};
pub use census::{name_collisions, names_used, species_coverage, SpeciesCoverage, SpeciesName};
pub use config::SessionFile;
pub use data_files::{find_data_file, resolve_data_file};
pub use delimiter::Delimiter;
pub use error::{Error, Result};
pub use level_up::{parse_level_up, LevelUpFormat};
pub use list::parse_list;
pub use loader::{load_move_table, parse_move_table_str, read_table, read_table_str, DataTable, SourceRow};
pub use move_table::{MoveEntry, MoveTable};
pub use overrides::OverrideMap;
pub use request::{ParseRequest, ParseResult};
pub use resolver::Resolver;
