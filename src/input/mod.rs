use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod directory;
pub mod reader;
pub mod screen;

use directory::{ProteinDirectory, parse_protein_directory};
use screen::{parse_competition, parse_interactions};

use crate::model::confidence::ConfidenceClass;
use crate::model::records::{CompetitionInteraction, Interaction, ScreenRow};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error for '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TSV error for '{path}': {source}", path = path.display())]
    Csv { path: PathBuf, source: csv::Error },
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// The three read-only tables of one screening dataset.
#[derive(Debug, Clone)]
pub struct ScreenTables {
    pub directory: ProteinDirectory,
    pub primary: Vec<Interaction>,
    pub competition: Vec<CompetitionInteraction>,
}

impl ScreenTables {
    /// Checks the table invariants. Out-of-range confidence classes are
    /// rejected; accessions unknown to the directory are only reported.
    pub fn new(
        directory: ProteinDirectory,
        primary: Vec<Interaction>,
        competition: Vec<CompetitionInteraction>,
    ) -> Result<Self, InputError> {
        check_classes("primary screen", &primary)?;
        check_classes("competition", &competition)?;

        let unknown: BTreeSet<&str> = primary
            .iter()
            .map(|r| r.accession.as_str())
            .filter(|acc| !directory.contains(acc))
            .collect();
        if !unknown.is_empty() {
            tracing::warn!(
                count = unknown.len(),
                first = unknown.iter().next().copied().unwrap_or_default(),
                "primary screen accessions missing from protein directory"
            );
        }

        Ok(Self {
            directory,
            primary,
            competition,
        })
    }
}

fn check_classes<R: ScreenRow>(table: &str, rows: &[R]) -> Result<(), InputError> {
    for (idx, row) in rows.iter().enumerate() {
        if ConfidenceClass::from_mdf(row.mdf_class()).is_none() {
            return Err(InputError::InvalidInput(format!(
                "{table} row {} ({} / {}) has mdfClass {} outside 0..=3",
                idx + 1,
                row.frag_id(),
                row.accession(),
                row.mdf_class()
            )));
        }
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct InputPaths {
    pub directory: PathBuf,
    pub primary: PathBuf,
    pub competition: PathBuf,
}

pub fn discover_inputs(data_dir: &Path) -> Result<InputPaths, InputError> {
    Ok(InputPaths {
        directory: find_table(data_dir, "proteinNames")?,
        primary: find_table(data_dir, "finalScreen")?,
        competition: find_table(data_dir, "finalFp")?,
    })
}

pub fn load_tables(data_dir: &Path) -> Result<ScreenTables, InputError> {
    let paths = discover_inputs(data_dir)?;

    tracing::info!(
        directory = %paths.directory.display(),
        primary = %paths.primary.display(),
        competition = %paths.competition.display(),
        "discovered input tables"
    );

    let directory = parse_protein_directory(&paths.directory)?;
    let primary = parse_interactions(&paths.primary)?;
    let competition = parse_competition(&paths.competition)?;

    tracing::info!(
        proteins = directory.len(),
        primary_rows = primary.len(),
        competition_rows = competition.len(),
        "loaded screening tables"
    );

    ScreenTables::new(directory, primary, competition)
}

fn find_table(data_dir: &Path, stem: &str) -> Result<PathBuf, InputError> {
    let candidates = [format!("{stem}.tsv"), format!("{stem}.tsv.gz")];
    for name in &candidates {
        let path = data_dir.join(name);
        if path.exists() {
            return Ok(path);
        }
    }
    Err(InputError::MissingInput(format!(
        "missing {stem}.tsv(.gz) in {}",
        data_dir.display()
    )))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
