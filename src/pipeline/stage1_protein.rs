use serde::Serialize;

use crate::engine::filter::{FilteredView, apply_filters, filter_or_clear};
use crate::engine::ranking::{SortOrder, sort_view};
use crate::input::ScreenTables;
use crate::model::config::EngineConfig;
use crate::model::filters::FilterSet;
use crate::model::outcomes::Promiscuity;
use crate::model::records::Interaction;

#[derive(Debug, Clone, Serialize)]
pub struct ProteinSummary<'a> {
    pub accession: String,
    pub description: Option<String>,
    pub gene_name: String,
    /// Gen1 ligands enriching the protein at all.
    pub num_interactions: usize,
    /// Ligands passing the fixed reference filters, independent of the user's.
    pub reference_hit_count: usize,
    pub best_ligand: Option<String>,
    pub top_ligands: Vec<String>,
    /// Reference hits over the total number of Gen1 ligands screened.
    pub promiscuity: Promiscuity,
    pub view: FilteredView<'a, Interaction>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ProteinView<'a> {
    /// No ligand enriched the protein; dependent levels are skipped.
    NoInteractions {
        accession: String,
        description: Option<String>,
        num_interactions: usize,
    },
    Detected(ProteinSummary<'a>),
}

impl<'a> ProteinView<'a> {
    pub fn summary(&self) -> Option<&ProteinSummary<'a>> {
        match self {
            ProteinView::Detected(s) => Some(s),
            ProteinView::NoInteractions { .. } => None,
        }
    }

    pub fn num_interactions(&self) -> usize {
        match self {
            ProteinView::Detected(s) => s.num_interactions,
            ProteinView::NoInteractions {
                num_interactions, ..
            } => *num_interactions,
        }
    }
}

pub fn protein_slice<'a>(tables: &'a ScreenTables, accession: &str) -> Vec<&'a Interaction> {
    tables
        .primary
        .iter()
        .filter(|r| r.accession == accession)
        .collect()
}

pub fn run_stage1<'a>(
    tables: &'a ScreenTables,
    config: &EngineConfig,
    accession: &str,
    filters: &FilterSet,
) -> ProteinView<'a> {
    let description = tables
        .directory
        .get(accession)
        .map(|e| e.description.clone());
    let rows = protein_slice(tables, accession);

    if rows.is_empty() {
        tracing::info!(accession, "protein has no detected interactions");
        return ProteinView::NoInteractions {
            accession: accession.to_string(),
            description,
            num_interactions: 0,
        };
    }

    let gene_name = rows[0].gene_name.clone();

    let mut reference = apply_filters(rows.iter().copied(), &config.reference_filters);
    sort_view(&mut reference, SortOrder::ProteinCentric);
    let best_ligand = reference.first().map(|r| r.frag_id.clone());
    let top_ligands = reference
        .iter()
        .take(config.top_n)
        .map(|r| r.frag_id.clone())
        .collect();
    let promiscuity = Promiscuity::new(
        reference.len(),
        config.gen1_ligand_total,
        config.protein_promiscuity_threshold,
    );

    let mut view = filter_or_clear(&rows, filters);
    sort_view(&mut view.rows, SortOrder::ProteinCentric);

    tracing::debug!(
        accession,
        interactions = rows.len(),
        reference_hits = reference.len(),
        shown = view.len(),
        "protein-centric view"
    );

    ProteinView::Detected(ProteinSummary {
        accession: accession.to_string(),
        description,
        gene_name,
        num_interactions: rows.len(),
        reference_hit_count: reference.len(),
        best_ligand,
        top_ligands,
        promiscuity,
        view,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_protein.rs"]
mod tests;
