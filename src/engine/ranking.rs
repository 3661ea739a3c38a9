use std::cmp::Ordering;

use crate::model::outcomes::{RankOutcome, RankStatus};
use crate::model::records::{CompetitionInteraction, ScreenRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ligands for a fixed protein: protHits asc, l2fc desc.
    ProteinCentric,
    /// Proteins for a fixed Gen1 ligand: ligHits asc, l2fc desc.
    LigandCentric,
    /// Proteins for a fixed Gen2 ligand: ligHits asc, l2fc asc. Competition
    /// fold-changes are negative, so the strongest competitor sorts first.
    CompetitionLigandCentric,
}

impl SortOrder {
    pub fn compare<R: ScreenRow + ?Sized>(self, a: &R, b: &R) -> Ordering {
        match self {
            Self::ProteinCentric => a
                .prot_hits()
                .cmp(&b.prot_hits())
                .then_with(|| l2fc_desc(a.l2fc(), b.l2fc())),
            Self::LigandCentric => a
                .lig_hits()
                .cmp(&b.lig_hits())
                .then_with(|| l2fc_desc(a.l2fc(), b.l2fc())),
            Self::CompetitionLigandCentric => a
                .lig_hits()
                .cmp(&b.lig_hits())
                .then_with(|| l2fc_asc(a.l2fc(), b.l2fc())),
        }
    }
}

/// Ascending fold-change with NaN after every number.
fn l2fc_asc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.total_cmp(&b),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

/// Descending fold-change, NaN still last.
fn l2fc_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => b.total_cmp(&a),
        _ => l2fc_asc(a, b),
    }
}

/// Stable in-place sort of a view.
pub fn sort_view<R: ScreenRow>(rows: &mut [&R], order: SortOrder) {
    rows.sort_by(|a, b| order.compare(*a, *b));
}

/// Gen2 hits for one anchor and protein: hitRank asc, unranked rows last.
pub fn sort_gen2_hits(rows: &mut [&CompetitionInteraction]) {
    rows.sort_by(|a, b| match (a.hit_rank, b.hit_rank) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Gen2 non-hits: l2fc asc, strongest reduction first.
pub fn sort_gen2_non_hits(rows: &mut [&CompetitionInteraction]) {
    rows.sort_by(|a, b| l2fc_asc(a.l2fc(), b.l2fc()));
}

/// What a rank lookup matches on. Also decides which field names the best
/// row: proteins are shown by gene name, ligands by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankKey<'k> {
    Accession(&'k str),
    FragId(&'k str),
}

impl RankKey<'_> {
    fn matches<R: ScreenRow + ?Sized>(&self, row: &R) -> bool {
        match self {
            RankKey::Accession(acc) => row.accession() == *acc,
            RankKey::FragId(id) => row.frag_id() == *id,
        }
    }

    fn label<'r, R: ScreenRow + ?Sized>(&self, row: &'r R) -> &'r str {
        match self {
            RankKey::Accession(_) => row.gene_name(),
            RankKey::FragId(_) => row.frag_id(),
        }
    }
}

/// 1-based position of the first row matching `key` in an already sorted view.
pub fn rank_of<R: ScreenRow>(view: &[&R], key: RankKey<'_>) -> RankOutcome {
    let Some(first) = view.first() else {
        return RankOutcome {
            found: false,
            rank: None,
            best: None,
            view_len: 0,
            status: RankStatus::EmptyView,
        };
    };
    let best = Some(key.label(*first).to_string());
    match view.iter().position(|r| key.matches(*r)) {
        Some(pos) => RankOutcome {
            found: true,
            rank: Some(pos + 1),
            best,
            view_len: view.len(),
            status: RankStatus::Ranked,
        },
        None => RankOutcome {
            found: false,
            rank: None,
            best,
            view_len: view.len(),
            status: RankStatus::NotPresent,
        },
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/ranking.rs"]
mod tests;
