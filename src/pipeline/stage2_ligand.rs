use serde::Serialize;

use crate::engine::filter::{FilteredView, apply_filters, filter_or_clear};
use crate::engine::ranking::{RankKey, SortOrder, rank_of, sort_view};
use crate::input::ScreenTables;
use crate::model::config::EngineConfig;
use crate::model::filters::FilterSet;
use crate::model::outcomes::{Promiscuity, RankOutcome};
use crate::model::records::Interaction;

#[derive(Debug, Clone, Serialize)]
pub struct LigandSummary<'a> {
    pub frag_id: String,
    /// Proteins enriched by the ligand anywhere in the screen.
    pub num_detected: usize,
    pub reference_hit_count: usize,
    /// Selected protein inside the ligand's reference hit list.
    pub selected_rank: RankOutcome,
    /// Reference hits over detected proteins.
    pub promiscuity: Promiscuity,
    /// Ligand and protein are in each other's top-N.
    pub mutual_top: bool,
    pub view: FilteredView<'a, Interaction>,
}

/// All rows for a ligand, taken from the full table rather than any
/// protein-centric view.
pub fn ligand_slice<'a>(tables: &'a ScreenTables, frag_id: &str) -> Vec<&'a Interaction> {
    tables
        .primary
        .iter()
        .filter(|r| r.frag_id == frag_id)
        .collect()
}

pub fn run_stage2<'a>(
    tables: &'a ScreenTables,
    config: &EngineConfig,
    frag_id: &str,
    accession: &str,
    filters: &FilterSet,
) -> LigandSummary<'a> {
    let rows = ligand_slice(tables, frag_id);
    if rows.is_empty() {
        tracing::info!(frag_id, "ligand has no detected interactions");
    }

    let mut reference = apply_filters(rows.iter().copied(), &config.reference_filters);
    sort_view(&mut reference, SortOrder::LigandCentric);
    let selected_rank = rank_of(&reference, RankKey::Accession(accession));
    let promiscuity = Promiscuity::new(
        reference.len(),
        rows.len(),
        config.ligand_promiscuity_threshold,
    );
    let mutual_top = selected_rank.within_top(config.top_n);

    let mut view = filter_or_clear(&rows, filters);
    sort_view(&mut view.rows, SortOrder::LigandCentric);

    tracing::debug!(
        frag_id,
        detected = rows.len(),
        reference_hits = reference.len(),
        rank = ?selected_rank.rank,
        mutual_top,
        "ligand-centric view"
    );

    LigandSummary {
        frag_id: frag_id.to_string(),
        num_detected: rows.len(),
        reference_hit_count: reference.len(),
        selected_rank,
        promiscuity,
        mutual_top,
        view,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_ligand.rs"]
mod tests;
