use super::*;
use crate::model::filters::{AdjPValueFilter, ConfidenceFilter, PValueFilter};
use crate::model::records::Interaction;
use crate::test_support::{fixture_primary, row};

fn high_only() -> FilterSet {
    FilterSet::new(
        PValueFilter::NoFilter,
        AdjPValueFilter::NoFilter,
        ConfidenceFilter::HighHits,
    )
}

#[test]
fn test_apply_filters_keeps_input_order() {
    let rows = fixture_primary();
    let out = apply_filters(rows.iter(), &FilterSet::default());
    let ids: Vec<(&str, &str)> = out
        .iter()
        .map(|r| (r.accession.as_str(), r.frag_id.as_str()))
        .collect();
    assert_eq!(
        ids,
        vec![
            ("P11111", "C027"),
            ("P11111", "C100"),
            ("P22222", "C027"),
            ("P33333", "C027"),
        ]
    );
}

#[test]
fn test_apply_filters_may_return_empty() {
    let rows = vec![row("P1", "G", "L", 1.0, 1, 1, 0.1, 0.1, 0)];
    let out = apply_filters(rows.iter(), &high_only());
    assert!(out.is_empty());
}

#[test]
fn test_filter_or_clear_falls_back_when_empty() {
    let rows = vec![
        row("P1", "G", "L1", 1.0, 1, 1, 0.1, 0.1, 0),
        row("P1", "G", "L2", 1.0, 1, 1, 0.1, 0.1, 1),
    ];
    let refs: Vec<&Interaction> = rows.iter().collect();
    let view = filter_or_clear(&refs, &high_only());
    assert!(view.filters_cleared);
    assert_eq!(view.requested, high_only());
    assert_eq!(view.applied, FilterSet::NONE);
    assert_eq!(view.len(), 2);
}

#[test]
fn test_filter_or_clear_keeps_nonempty_selection() {
    let rows = fixture_primary();
    let refs: Vec<&Interaction> = rows.iter().collect();
    let view = filter_or_clear(&refs, &high_only());
    assert!(!view.filters_cleared);
    assert_eq!(view.applied, high_only());
    assert!(view.rows.iter().all(|r| r.mdf_class == 3));
}

#[test]
fn test_filter_or_clear_on_missing_key_stays_empty() {
    let refs: Vec<&Interaction> = Vec::new();
    let view = filter_or_clear(&refs, &high_only());
    assert!(view.is_empty());
    assert!(!view.filters_cleared);
}
