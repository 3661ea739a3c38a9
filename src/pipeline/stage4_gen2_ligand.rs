use serde::Serialize;

use crate::engine::filter::{FilteredView, apply_filters, filter_or_clear};
use crate::engine::ranking::{RankKey, SortOrder, rank_of, sort_view};
use crate::input::ScreenTables;
use crate::model::config::EngineConfig;
use crate::model::filters::FilterSet;
use crate::model::outcomes::{Promiscuity, RankOutcome};
use crate::model::records::CompetitionInteraction;

#[derive(Debug, Clone, Serialize)]
pub struct Gen2LigandSummary<'a> {
    pub gen1_lig: String,
    pub gen2_lig: String,
    /// Proteins reduced in this competition round.
    pub num_competed: usize,
    pub reference_hit_count: usize,
    pub selected_rank: RankOutcome,
    pub promiscuity: Promiscuity,
    pub view: FilteredView<'a, CompetitionInteraction>,
}

pub fn gen2_slice<'a>(
    tables: &'a ScreenTables,
    gen1_lig: &str,
    gen2_lig: &str,
) -> Vec<&'a CompetitionInteraction> {
    tables
        .competition
        .iter()
        .filter(|r| r.gen1_lig == gen1_lig && r.interaction.frag_id == gen2_lig)
        .collect()
}

pub fn run_stage4<'a>(
    tables: &'a ScreenTables,
    config: &EngineConfig,
    gen1_lig: &str,
    gen2_lig: &str,
    accession: &str,
    filters: &FilterSet,
) -> Gen2LigandSummary<'a> {
    let rows = gen2_slice(tables, gen1_lig, gen2_lig);

    let mut reference = apply_filters(
        rows.iter().copied(),
        &config.competition_reference_filters,
    );
    sort_view(&mut reference, SortOrder::CompetitionLigandCentric);
    let selected_rank = rank_of(&reference, RankKey::Accession(accession));
    let promiscuity = Promiscuity::new(
        reference.len(),
        rows.len(),
        config.gen2_promiscuity_threshold,
    );

    let mut view = filter_or_clear(&rows, filters);
    sort_view(&mut view.rows, SortOrder::CompetitionLigandCentric);

    tracing::debug!(
        gen1_lig,
        gen2_lig,
        competed = rows.len(),
        reference_hits = reference.len(),
        rank = ?selected_rank.rank,
        "gen2 ligand-centric view"
    );

    Gen2LigandSummary {
        gen1_lig: gen1_lig.to_string(),
        gen2_lig: gen2_lig.to_string(),
        num_competed: rows.len(),
        reference_hit_count: reference.len(),
        selected_rank,
        promiscuity,
        view,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_gen2_ligand.rs"]
mod tests;
