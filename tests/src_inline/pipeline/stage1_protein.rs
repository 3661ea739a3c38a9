use super::*;
use crate::model::filters::{AdjPValueFilter, ConfidenceFilter, PValueFilter};
use crate::test_support::fixture_tables;

#[test]
fn test_protein_summary_facts() {
    let tables = fixture_tables();
    let config = EngineConfig::default_v1();
    let view = run_stage1(&tables, &config, "P11111", &FilterSet::default());
    let s = view.summary().unwrap();

    assert_eq!(s.description.as_deref(), Some("Alpha kinase ALPHA"));
    assert_eq!(s.gene_name, "ALPHA");
    assert_eq!(s.num_interactions, 4);
    assert_eq!(s.reference_hit_count, 2);
    assert_eq!(s.best_ligand.as_deref(), Some("C100"));
    assert_eq!(s.top_ligands, vec!["C100", "C027"]);
    assert_eq!(s.promiscuity.denominator, 407);
    assert!(!s.promiscuity.flagged);

    let ids: Vec<&str> = s.view.rows.iter().map(|r| r.frag_id.as_str()).collect();
    assert_eq!(ids, vec!["C100", "C027"]);
}

#[test]
fn test_protein_view_without_filters_sorted() {
    let tables = fixture_tables();
    let config = EngineConfig::default_v1();
    let view = run_stage1(&tables, &config, "P11111", &FilterSet::NONE);
    let s = view.summary().unwrap();
    let ids: Vec<&str> = s.view.rows.iter().map(|r| r.frag_id.as_str()).collect();
    assert_eq!(ids, vec!["C100", "C300", "C027", "C200"]);
    // Reference facts do not follow the user's filters.
    assert_eq!(s.reference_hit_count, 2);
}

#[test]
fn test_protein_without_reference_hits_clears_filters() {
    let tables = fixture_tables();
    let config = EngineConfig::default_v1();
    let view = run_stage1(&tables, &config, "P44444", &FilterSet::default());
    let s = view.summary().unwrap();
    assert_eq!(s.reference_hit_count, 0);
    assert_eq!(s.best_ligand, None);
    assert!(s.top_ligands.is_empty());
    assert!(s.view.filters_cleared);
    assert_eq!(s.view.len(), 1);
}

#[test]
fn test_selected_filters_narrow_view() {
    let tables = fixture_tables();
    let config = EngineConfig::default_v1();
    let filters = FilterSet::new(
        PValueFilter::Below005,
        AdjPValueFilter::NoFilter,
        ConfidenceFilter::Low,
    );
    let view = run_stage1(&tables, &config, "P11111", &filters);
    let s = view.summary().unwrap();
    let ids: Vec<&str> = s.view.rows.iter().map(|r| r.frag_id.as_str()).collect();
    assert_eq!(ids, vec!["C100", "C027", "C200"]);
}

#[test]
fn test_unknown_protein_has_no_interactions() {
    let tables = fixture_tables();
    let config = EngineConfig::default_v1();
    let view = run_stage1(&tables, &config, "P0DUB6", &FilterSet::default());
    assert!(view.summary().is_none());
    assert_eq!(view.num_interactions(), 0);

    let view = run_stage1(&tables, &config, "NOT-LISTED", &FilterSet::default());
    match view {
        ProteinView::NoInteractions { description, .. } => assert_eq!(description, None),
        ProteinView::Detected(_) => panic!("expected no interactions"),
    }
}
