use super::*;
use crate::model::filters::{AdjPValueFilter, ConfidenceFilter, PValueFilter};
use crate::model::outcomes::RankStatus;
use crate::pipeline::stage2_ligand::ligand_slice;
use crate::test_support::{fixture_engine, fixture_tables, write_fixture_dir};

fn strict_filters() -> FilterSet {
    FilterSet::new(
        PValueFilter::Below001,
        AdjPValueFilter::Below005,
        ConfidenceFilter::HighHits,
    )
}

#[test]
fn test_engine_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync + Clone>() {}
    assert_send_sync::<ScreeningEngine>();

    let engine = fixture_engine();
    let handles: Vec<_> = ["P11111", "P22222", "P0DUB6"]
        .into_iter()
        .map(|acc| {
            let engine = engine.clone();
            std::thread::spawn(move || {
                engine
                    .drill_down(&Selection::protein(acc))
                    .protein
                    .num_interactions()
            })
        })
        .collect();
    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![4, 1, 0]);
}

#[test]
fn test_sessions_share_one_table_load() {
    let engine = fixture_engine();
    let tables = engine.shared_tables();
    assert!(Arc::ptr_eq(&tables, &engine.shared_tables()));

    let mut config = EngineConfig::default_v1();
    config.top_n = 1;
    let strict = ScreeningEngine::from_shared(Arc::clone(&tables), config);
    assert!(Arc::ptr_eq(&tables, &strict.shared_tables()));

    let handles: Vec<_> = [engine, strict]
        .into_iter()
        .map(|session| {
            std::thread::spawn(move || {
                session
                    .drill_down(&Selection::protein("P11111").with_ligand("C027"))
                    .ligand
                    .is_some_and(|l| l.mutual_top)
            })
        })
        .collect();
    let mutual: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(mutual, vec![true, false]);
}

#[test]
fn test_absent_protein_short_circuits() {
    let engine = fixture_engine();
    let drill = engine.drill_down(&Selection::protein("P0DUB6").with_ligand("C027"));
    match &drill.protein {
        ProteinView::NoInteractions {
            accession,
            description,
            num_interactions,
        } => {
            assert_eq!(accession, "P0DUB6");
            assert_eq!(description.as_deref(), Some("Alpha-amylase 1A AMY1A"));
            assert_eq!(*num_interactions, 0);
        }
        ProteinView::Detected(_) => panic!("P0DUB6 has no interactions"),
    }
    assert!(drill.ligand.is_none());
    assert!(drill.gen2.is_none());
    assert!(drill.gen2_ligand.is_none());
}

#[test]
fn test_full_drill_down_with_defaults() {
    let engine = fixture_engine();
    let drill = engine.drill_down(&Selection::protein("P11111"));

    let protein = drill.protein.summary().unwrap();
    assert_eq!(protein.gene_name, "ALPHA");
    assert_eq!(protein.num_interactions, 4);
    assert_eq!(protein.reference_hit_count, 2);
    assert_eq!(protein.best_ligand.as_deref(), Some("C100"));

    // First ligand of the protein view is C100, which is not Gen2-eligible.
    let ligand = drill.ligand.as_ref().unwrap();
    assert_eq!(ligand.frag_id, "C100");
    assert_eq!(ligand.num_detected, 2);
    assert!(drill.gen2.is_none());
    assert!(drill.gen2_ligand.is_none());
}

#[test]
fn test_gen2_unlocks_for_eligible_ligand() {
    let engine = fixture_engine();
    let drill = engine.drill_down(&Selection::protein("P11111").with_ligand("C027"));

    let ligand = drill.ligand.as_ref().unwrap();
    assert_eq!(ligand.selected_rank.rank, Some(2));
    assert!(ligand.mutual_top);

    let panel = drill.gen2.as_ref().unwrap();
    assert_eq!(panel.selection, vec!["G02", "G01", "G04", "G03"]);

    // Gen2 ligand defaults to the head of the selection list.
    let gen2 = drill.gen2_ligand.as_ref().unwrap();
    assert_eq!(gen2.gen2_lig, "G02");
    assert_eq!(gen2.num_competed, 4);
    assert_eq!(gen2.selected_rank.rank, Some(2));
}

#[test]
fn test_gen2_omitted_for_ineligible_ligand() {
    let engine = fixture_engine();
    let drill = engine.drill_down(&Selection::protein("P33333").with_ligand("Z999"));
    assert!(drill.ligand.is_some());
    assert!(drill.gen2.is_none());
    assert!(drill.gen2_ligand.is_none());
}

#[test]
fn test_explicit_gen2_selection() {
    let engine = fixture_engine();
    let drill = engine.drill_down(
        &Selection::protein("P11111")
            .with_ligand("C027")
            .with_gen2_ligand("G01"),
    );
    let gen2 = drill.gen2_ligand.as_ref().unwrap();
    assert_eq!(gen2.gen2_lig, "G01");
    assert_eq!(gen2.num_competed, 1);
    assert_eq!(gen2.selected_rank.rank, Some(1));
}

#[test]
fn test_ligand_counts_ignore_protein_filters() {
    let engine = fixture_engine();
    let drill = engine.drill_down(
        &Selection::protein("P11111")
            .with_filters(strict_filters())
            .with_ligand("C027"),
    );

    let protein = drill.protein.summary().unwrap();
    assert!(!protein.view.filters_cleared);
    assert_eq!(protein.view.len(), 1);

    let tables = fixture_tables();
    let independent = ligand_slice(&tables, "C027").len();
    let ligand = drill.ligand.as_ref().unwrap();
    assert_eq!(ligand.num_detected, independent);
    assert_eq!(ligand.num_detected, 4);
    assert_eq!(ligand.reference_hit_count, 3);
}

#[test]
fn test_unknown_ligand_is_empty_state() {
    let engine = fixture_engine();
    let drill = engine.drill_down(&Selection::protein("P11111").with_ligand("NOPE"));
    let ligand = drill.ligand.as_ref().unwrap();
    assert_eq!(ligand.num_detected, 0);
    assert!(ligand.view.is_empty());
    assert_eq!(ligand.selected_rank.status, RankStatus::EmptyView);
    assert!(!ligand.promiscuity.flagged);
    assert!(!ligand.mutual_top);
}

#[test]
fn test_injected_config_changes_promiscuity() {
    let mut config = EngineConfig::default_v1();
    config.gen1_ligand_total = 10;
    let engine = ScreeningEngine::new(fixture_tables(), config);
    let view = engine.protein_view("P11111", &FilterSet::default());
    let summary = view.summary().unwrap();
    assert_eq!(summary.promiscuity.denominator, 10);
    assert!(summary.promiscuity.flagged);
    assert_eq!(summary.promiscuity.percent(), 20.0);
}

#[test]
fn test_reload_replaces_tables_but_not_snapshots() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture_dir(dir.path());

    let mut engine = fixture_engine();
    let snapshot = engine.clone();
    engine.reload(dir.path()).unwrap();

    assert_eq!(engine.tables().primary.len(), 3);
    assert_eq!(snapshot.tables().primary.len(), 9);
    assert_eq!(
        engine.protein_view("P22222", &FilterSet::NONE).num_interactions(),
        1
    );
}
