use serde::Serialize;

use crate::model::filters::Assay;

/// Upstream-assigned `mdfClass`. Criteria are reproduced for display only;
/// classes are never recomputed from fold-changes here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ConfidenceClass {
    NoConfidence = 0,
    Low = 1,
    Medium = 2,
    High = 3,
}

impl ConfidenceClass {
    pub const ALL: [ConfidenceClass; 4] = [
        ConfidenceClass::NoConfidence,
        ConfidenceClass::Low,
        ConfidenceClass::Medium,
        ConfidenceClass::High,
    ];

    pub fn from_mdf(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::NoConfidence),
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Whether the class counts as a hit in the given assay. Competition
    /// rounds already call Low a hit; enrichment needs Medium.
    pub fn is_hit(self, assay: Assay) -> bool {
        match assay {
            Assay::Enrichment => self >= Self::Medium,
            Assay::Competition => self >= Self::Low,
        }
    }

    pub fn criteria(self, assay: Assay) -> &'static str {
        match (assay, self) {
            (_, Self::NoConfidence) => "no filter",
            (Assay::Enrichment, Self::Low) => {
                "Low confidence: Fc > 1, Median > 1, p < 0.05, adj.p < 0.25, Rank < 500"
            }
            (Assay::Enrichment, Self::Medium) => {
                "Medium confidence (hits): Fc > 2.3, Median > 1, p < 0.05, adj.p < 0.25, Rank < 500"
            }
            (Assay::Enrichment, Self::High) => {
                "High confidence (also hits): Fc > 2.3, Median > 2.3, p < 0.01, adj.p < 0.1, Rank < 500"
            }
            (Assay::Competition, Self::Low) => {
                "Low confidence (hits): Fc < -1, p < 0.05, adj.p < 0.25, Rank < 500"
            }
            (Assay::Competition, Self::Medium) => {
                "Medium confidence (also hits): Fc < -1.65, p < 0.05, adj.p < 0.25, Rank < 500"
            }
            (Assay::Competition, Self::High) => {
                "High confidence (also hits): Fc < -2.3, p < 0.01, adj.p < 0.1, Rank < 500"
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/confidence.rs"]
mod tests;
