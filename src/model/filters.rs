use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::records::ScreenRow;

/// -log10(0.05)
pub const ML10_P_005: f64 = 1.30103;
/// -log10(0.01)
pub const ML10_P_001: f64 = 2.0;
/// -log10(0.25)
pub const ML10_P_025: f64 = 0.60206;
/// -log10(0.1)
pub const ML10_P_010: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} filter '{value}' (expected one of: {expected})")]
pub struct FilterParseError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

/// Which kind of experiment a table comes from. Drives option ordering,
/// UI defaults and the wording of confidence classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Assay {
    Enrichment,
    Competition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PValueFilter {
    #[serde(rename = "no filter")]
    NoFilter,
    #[serde(rename = "< 0.05")]
    Below005,
    #[serde(rename = "< 0.01")]
    Below001,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdjPValueFilter {
    #[serde(rename = "no filter")]
    NoFilter,
    #[serde(rename = "< 0.25")]
    Below025,
    #[serde(rename = "< 0.1")]
    Below010,
    #[serde(rename = "< 0.05")]
    Below005,
}

/// Minimum assigned `mdfClass`. `Low` and `LowHits` share a predicate; the
/// two labels exist because enrichment and competition views name the
/// lowest bar differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceFilter {
    #[serde(rename = "no filter")]
    NoFilter,
    #[serde(rename = "Low")]
    Low,
    #[serde(rename = "Low (hits)")]
    LowHits,
    #[serde(rename = "Medium (hits)")]
    MediumHits,
    #[serde(rename = "High (hits)")]
    HighHits,
}

impl PValueFilter {
    pub const ALL: [PValueFilter; 3] = [Self::NoFilter, Self::Below005, Self::Below001];

    pub fn label(self) -> &'static str {
        match self {
            Self::NoFilter => "no filter",
            Self::Below005 => "< 0.05",
            Self::Below001 => "< 0.01",
        }
    }

    /// Strict lower bound on `ml10p`, if any.
    pub fn bound(self) -> Option<f64> {
        match self {
            Self::NoFilter => None,
            Self::Below005 => Some(ML10_P_005),
            Self::Below001 => Some(ML10_P_001),
        }
    }

    pub fn passes(self, ml10p: f64) -> bool {
        self.bound().is_none_or(|b| ml10p > b)
    }

    pub fn options(assay: Assay) -> &'static [PValueFilter] {
        match assay {
            Assay::Enrichment | Assay::Competition => {
                &[Self::Below005, Self::NoFilter, Self::Below001]
            }
        }
    }
}

impl AdjPValueFilter {
    pub const ALL: [AdjPValueFilter; 4] = [
        Self::NoFilter,
        Self::Below025,
        Self::Below010,
        Self::Below005,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::NoFilter => "no filter",
            Self::Below025 => "< 0.25",
            Self::Below010 => "< 0.1",
            Self::Below005 => "< 0.05",
        }
    }

    pub fn bound(self) -> Option<f64> {
        match self {
            Self::NoFilter => None,
            Self::Below025 => Some(ML10_P_025),
            Self::Below010 => Some(ML10_P_010),
            Self::Below005 => Some(ML10_P_005),
        }
    }

    pub fn passes(self, ml10_adj_p: f64) -> bool {
        self.bound().is_none_or(|b| ml10_adj_p > b)
    }

    pub fn options(assay: Assay) -> &'static [AdjPValueFilter] {
        match assay {
            Assay::Enrichment => &[
                Self::Below025,
                Self::Below010,
                Self::NoFilter,
                Self::Below005,
            ],
            Assay::Competition => &[
                Self::Below025,
                Self::NoFilter,
                Self::Below010,
                Self::Below005,
            ],
        }
    }
}

impl ConfidenceFilter {
    pub const ALL: [ConfidenceFilter; 5] = [
        Self::NoFilter,
        Self::Low,
        Self::LowHits,
        Self::MediumHits,
        Self::HighHits,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::NoFilter => "no filter",
            Self::Low => "Low",
            Self::LowHits => "Low (hits)",
            Self::MediumHits => "Medium (hits)",
            Self::HighHits => "High (hits)",
        }
    }

    pub fn passes(self, mdf_class: u8) -> bool {
        match self {
            Self::NoFilter => true,
            Self::Low | Self::LowHits => mdf_class >= 1,
            Self::MediumHits => mdf_class >= 2,
            Self::HighHits => mdf_class == 3,
        }
    }

    pub fn options(assay: Assay) -> &'static [ConfidenceFilter] {
        match assay {
            Assay::Enrichment => &[Self::MediumHits, Self::NoFilter, Self::Low, Self::HighHits],
            Assay::Competition => &[
                Self::LowHits,
                Self::MediumHits,
                Self::NoFilter,
                Self::HighHits,
            ],
        }
    }
}

/// The three independent filter dimensions, combined with logical AND.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterSet {
    pub p_value: PValueFilter,
    pub adj_p_value: AdjPValueFilter,
    pub confidence: ConfidenceFilter,
}

impl FilterSet {
    pub const NONE: FilterSet = FilterSet {
        p_value: PValueFilter::NoFilter,
        adj_p_value: AdjPValueFilter::NoFilter,
        confidence: ConfidenceFilter::NoFilter,
    };

    pub fn new(
        p_value: PValueFilter,
        adj_p_value: AdjPValueFilter,
        confidence: ConfidenceFilter,
    ) -> Self {
        Self {
            p_value,
            adj_p_value,
            confidence,
        }
    }

    /// First option of every selector, i.e. what a fresh view shows.
    pub fn default_for(assay: Assay) -> Self {
        Self {
            p_value: PValueFilter::options(assay)[0],
            adj_p_value: AdjPValueFilter::options(assay)[0],
            confidence: ConfidenceFilter::options(assay)[0],
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    pub fn passes<R: ScreenRow + ?Sized>(&self, row: &R) -> bool {
        self.p_value.passes(row.ml10p())
            && self.adj_p_value.passes(row.ml10_adj_p())
            && self.confidence.passes(row.mdf_class())
    }
}

impl Default for FilterSet {
    fn default() -> Self {
        Self::default_for(Assay::Enrichment)
    }
}

impl fmt::Display for FilterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "p {}, adj.p {}, fS {}",
            self.p_value, self.adj_p_value, self.confidence
        )
    }
}

macro_rules! label_display {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

label_display!(PValueFilter, AdjPValueFilter, ConfidenceFilter);

fn normalize_option(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

fn expected_labels<T: Copy>(all: &[T], label: fn(T) -> &'static str) -> String {
    all.iter()
        .map(|v| format!("'{}'", label(*v)))
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for PValueFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_option(s).as_str() {
            "no filter" | "none" => Ok(Self::NoFilter),
            "< 0.05" | "<0.05" | "0.05" => Ok(Self::Below005),
            "< 0.01" | "<0.01" | "0.01" => Ok(Self::Below001),
            _ => Err(FilterParseError {
                kind: "p-value",
                value: s.to_string(),
                expected: expected_labels(&Self::ALL, Self::label),
            }),
        }
    }
}

impl FromStr for AdjPValueFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_option(s).as_str() {
            "no filter" | "none" => Ok(Self::NoFilter),
            "< 0.25" | "<0.25" | "0.25" => Ok(Self::Below025),
            "< 0.1" | "<0.1" | "0.1" => Ok(Self::Below010),
            "< 0.05" | "<0.05" | "0.05" => Ok(Self::Below005),
            _ => Err(FilterParseError {
                kind: "adjusted p-value",
                value: s.to_string(),
                expected: expected_labels(&Self::ALL, Self::label),
            }),
        }
    }
}

impl FromStr for ConfidenceFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_option(s).as_str() {
            "no filter" | "none" => Ok(Self::NoFilter),
            "low" => Ok(Self::Low),
            "low (hits)" => Ok(Self::LowHits),
            "medium (hits)" | "medium" => Ok(Self::MediumHits),
            "high (hits)" | "high" => Ok(Self::HighHits),
            _ => Err(FilterParseError {
                kind: "confidence",
                value: s.to_string(),
                expected: expected_labels(&Self::ALL, Self::label),
            }),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/filters.rs"]
mod tests;
