//! Housekeeping reports over data tables
//!
//! - which species can be encountered in a wild area and which cannot
//! - which names are already taken by NPCs and trainers

use crate::error::{Error, Result};
use crate::loader::DataTable;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Column holding the species ids of a wild area row
const WILD_AREA_SPECIES_COLUMN: usize = 3;
const SPECIES_ID_SEPARATOR: char = ';';

/// A species id with its display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesName {
    pub id: u32,
    /// Empty when the id is missing from the species table
    pub name: String,
}

/// Species split by whether any wild area references them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesCoverage {
    /// Referenced by at least one wild area, ascending by id
    pub used: Vec<SpeciesName>,
    /// Never referenced, ascending by id
    pub unused: Vec<SpeciesName>,
}

/// Cross-reference a species table against a wild area table
pub fn species_coverage(species: &DataTable, wild_areas: &DataTable) -> Result<SpeciesCoverage> {
    let mut names = BTreeMap::new();
    for row in &species.rows {
        let id = parse_id(species, row.line, species.require(row, 0)?)?;
        let name = species.require(row, 1)?;
        names.insert(id, name.to_string());
    }

    let mut used_ids = BTreeSet::new();
    for row in &wild_areas.rows {
        let field = wild_areas.require(row, WILD_AREA_SPECIES_COLUMN)?;
        for raw in field.split(SPECIES_ID_SEPARATOR) {
            if raw.trim().is_empty() {
                continue;
            }
            used_ids.insert(parse_id(wild_areas, row.line, raw)?);
        }
    }

    let used = used_ids
        .iter()
        .map(|&id| SpeciesName {
            id,
            name: names.get(&id).cloned().unwrap_or_default(),
        })
        .collect();

    let unused = names
        .into_iter()
        .filter(|(id, _)| !used_ids.contains(id))
        .map(|(id, name)| SpeciesName { id, name })
        .collect();

    Ok(SpeciesCoverage { used, unused })
}

/// Gather names from several table columns, sorted so repeats sit together
pub fn names_used(sources: &[(&DataTable, usize)]) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for (table, column) in sources {
        names.extend(table.column(*column)?);
    }
    names.sort();
    Ok(names)
}

/// Names that occur more than once in a sorted name list
pub fn name_collisions(sorted_names: &[String]) -> Vec<String> {
    let mut collisions: Vec<String> = sorted_names
        .windows(2)
        .filter(|pair| pair[0] == pair[1])
        .map(|pair| pair[0].clone())
        .collect();
    collisions.dedup();
    collisions
}

fn parse_id(table: &DataTable, line: usize, raw: &str) -> Result<u32> {
    raw.trim().parse().map_err(|_| Error::InvalidId {
        path: table.path.clone(),
        line,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::read_table_str;

    fn species() -> DataTable {
        read_table_str(
            "id,name,type\n1,Bulbasaur,Grass\n4,Charmander,Fire\n7,Squirtle,Water\n16,Pidgey,Normal\n",
            "pokemonSpecies.csv",
        )
        .unwrap()
    }

    #[test]
    fn test_species_coverage() {
        let areas = read_table_str(
            "id,name,chance,species\n0,Route 1,30,16;1\n1,Lake,10,7;16\n",
            "wildPokemonAreas.csv",
        )
        .unwrap();

        let coverage = species_coverage(&species(), &areas).unwrap();

        let used: Vec<u32> = coverage.used.iter().map(|s| s.id).collect();
        assert_eq!(used, vec![1, 7, 16]);
        assert_eq!(coverage.used[2].name, "Pidgey");

        assert_eq!(
            coverage.unused,
            vec![SpeciesName {
                id: 4,
                name: "Charmander".to_string()
            }]
        );
    }

    #[test]
    fn test_unknown_species_in_area() {
        let areas = read_table_str("id,name,chance,species\n0,Cave,5,99\n", "areas.csv").unwrap();
        let coverage = species_coverage(&species(), &areas).unwrap();

        assert_eq!(coverage.used.len(), 1);
        assert_eq!(coverage.used[0].id, 99);
        assert_eq!(coverage.used[0].name, "");
        assert_eq!(coverage.unused.len(), 4);
    }

    #[test]
    fn test_non_numeric_id() {
        let areas = read_table_str("id,name,chance,species\n0,Cave,5,1;abc\n", "areas.csv").unwrap();
        match species_coverage(&species(), &areas) {
            Err(Error::InvalidId { line, value, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(value, "abc");
            }
            other => panic!("expected InvalidId, got {:?}", other),
        }
    }

    #[test]
    fn test_names_used_and_collisions() {
        let npcs = read_table_str("id,name\n0,Joey\n1,Ann\n", "genericNPCs.csv").unwrap();
        let trainers = read_table_str("id,class,name\n0,Youngster,Joey\n1,Lass,Beth\n", "trainers.csv").unwrap();

        let names = names_used(&[(&npcs, 1), (&trainers, 2)]).unwrap();
        assert_eq!(names, vec!["Ann", "Beth", "Joey", "Joey"]);
        assert_eq!(name_collisions(&names), vec!["Joey"]);
    }

    #[test]
    fn test_no_collisions() {
        let names = vec!["Ann".to_string(), "Beth".to_string()];
        assert!(name_collisions(&names).is_empty());
    }
}
