use serde::Serialize;

/// Qualitative position of a target key inside a ranked view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankStatus {
    /// Target present; `rank` holds its 1-based position.
    Ranked,
    /// View has rows but the target did not qualify under the filters.
    NotPresent,
    /// View is empty, so there is neither a best row nor a rank.
    EmptyView,
}

/// Rank of one key inside a freshly sorted, filtered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankOutcome {
    pub found: bool,
    /// 1-based; `None` is the "did not qualify" sentinel, never zero.
    pub rank: Option<usize>,
    /// Display key of the first row of the view (gene name or ligand id).
    pub best: Option<String>,
    pub view_len: usize,
    pub status: RankStatus,
}

impl RankOutcome {
    /// Zero-based position, handy for top-N checks.
    pub fn position(&self) -> Option<usize> {
        self.rank.map(|r| r - 1)
    }

    pub fn within_top(&self, n: usize) -> bool {
        self.position().is_some_and(|p| p < n)
    }

    pub fn status_text(&self) -> &'static str {
        match self.status {
            RankStatus::Ranked => "hit rank is",
            RankStatus::NotPresent | RankStatus::EmptyView => "is not a hit",
        }
    }

    pub fn best_text(&self) -> &'static str {
        match self.status {
            RankStatus::Ranked => "is best",
            RankStatus::NotPresent => "protein is best",
            RankStatus::EmptyView => "",
        }
    }
}

/// Hit count relative to a denominator, flagged when above a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Promiscuity {
    pub hits: usize,
    pub denominator: usize,
    pub ratio: f64,
    pub threshold: f64,
    pub flagged: bool,
}

impl Promiscuity {
    pub fn new(hits: usize, denominator: usize, threshold: f64) -> Self {
        let ratio = if denominator == 0 {
            0.0
        } else {
            hits as f64 / denominator as f64
        };
        Self {
            hits,
            denominator,
            ratio,
            threshold,
            flagged: ratio > threshold,
        }
    }

    /// Ratio as a percentage rounded to one decimal.
    pub fn percent(&self) -> f64 {
        (self.ratio * 1000.0).round() / 10.0
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/outcomes.rs"]
mod tests;
