//! Locating data tables under one or more data directories

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Default move table file name
pub const MOVES_FILE: &str = "moves.csv";
/// Default species table file name
pub const SPECIES_FILE: &str = "pokemonSpecies.csv";
/// Default wild area table file name
pub const WILD_AREAS_FILE: &str = "wildPokemonAreas.csv";

/// Find a data file by exact file name
///
/// Roots are searched in order; within a root the first match in sorted path
/// order wins.
pub fn find_data_file<P: AsRef<Path>>(roots: &[P], file_name: &str) -> Result<PathBuf> {
    for root in roots {
        let root = root.as_ref();

        for entry in WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.file_type().is_file() && entry.file_name() == file_name {
                log::debug!("found {} at {}", file_name, entry.path().display());
                return Ok(entry.into_path());
            }
        }
    }

    Err(Error::DataFileNotFound {
        name: file_name.to_string(),
    })
}

/// Use an explicit path if given, otherwise search the data directories
pub fn resolve_data_file<P: AsRef<Path>>(
    explicit: Option<&Path>,
    roots: &[P],
    file_name: &str,
) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => find_data_file(roots, file_name),
    }
}
