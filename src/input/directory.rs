use std::collections::HashMap;
use std::path::Path;

use crate::input::InputError;
use crate::input::reader::tsv_reader;
use crate::model::records::ProteinEntry;

/// Accession-keyed protein lookup, kept in file order for selection lists.
#[derive(Debug, Clone, Default)]
pub struct ProteinDirectory {
    entries: Vec<ProteinEntry>,
    index: HashMap<String, usize>,
}

impl ProteinDirectory {
    pub fn new(entries: Vec<ProteinEntry>) -> Self {
        let mut kept = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());
        for (line, entry) in entries.into_iter().enumerate() {
            if entry.accession.is_empty() {
                tracing::warn!(
                    row = line + 1,
                    "protein directory row has empty accession; skipping"
                );
                continue;
            }
            if index.contains_key(&entry.accession) {
                tracing::warn!(
                    row = line + 1,
                    accession = %entry.accession,
                    "duplicate accession in protein directory; keeping first"
                );
                continue;
            }
            index.insert(entry.accession.clone(), kept.len());
            kept.push(entry);
        }
        Self {
            entries: kept,
            index,
        }
    }

    pub fn get(&self, accession: &str) -> Option<&ProteinEntry> {
        self.index.get(accession).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, accession: &str) -> bool {
        self.index.contains_key(accession)
    }

    pub fn entries(&self) -> &[ProteinEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive substring match over accession and description.
    /// Descriptions carry gene names, so this also finds genes.
    pub fn search(&self, query: &str) -> Vec<&ProteinEntry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.entries.iter().collect();
        }
        self.entries
            .iter()
            .filter(|e| {
                e.accession.to_lowercase().contains(&needle)
                    || e.description.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

pub fn parse_protein_directory(path: &Path) -> Result<ProteinDirectory, InputError> {
    let mut reader = tsv_reader(path)?;
    let mut entries = Vec::new();
    for record in reader.deserialize::<ProteinEntry>() {
        let entry = record.map_err(|source| InputError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        entries.push(entry);
    }
    if entries.is_empty() {
        return Err(InputError::Parse(format!(
            "protein directory {} is empty",
            path.display()
        )));
    }
    Ok(ProteinDirectory::new(entries))
}
