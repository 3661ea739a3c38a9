use super::*;
use crate::model::filters::ConfidenceFilter;

#[test]
fn test_default_v1_constants() {
    let config = EngineConfig::default_v1();
    assert_eq!(config.gen1_ligand_total, 407);
    assert_eq!(config.gen2_eligible.len(), 20);
    assert!(config.is_gen2_eligible("C027"));
    assert!(config.is_gen2_eligible("C391"));
    assert!(!config.is_gen2_eligible("Z999"));
    assert_eq!(config.top_n, 5);
    assert_eq!(
        config.reference_filters.confidence,
        ConfidenceFilter::MediumHits
    );
    assert_eq!(
        config.competition_reference_filters.confidence,
        ConfidenceFilter::Low
    );
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_partial_json_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"gen1_ligand_total": 500, "gen2_eligible": ["C001", "C002"]}"#,
    )
    .unwrap();

    let config = EngineConfig::load(&path).unwrap();
    assert_eq!(config.gen1_ligand_total, 500);
    assert!(config.is_gen2_eligible("C001"));
    assert!(!config.is_gen2_eligible("C027"));
    assert_eq!(config.protein_promiscuity_threshold, 0.10);
    assert_eq!(config.top_n, 5);
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    std::fs::write(&path, r#"{"gen1_ligand_total": 0}"#).unwrap();
    assert!(matches!(
        EngineConfig::load(&path),
        Err(ConfigError::Invalid(_))
    ));

    std::fs::write(&path, r#"{"ligand_promiscuity_threshold": 1.5}"#).unwrap();
    assert!(matches!(
        EngineConfig::load(&path),
        Err(ConfigError::Invalid(_))
    ));

    std::fs::write(&path, r#"{"unknown_field": 1}"#).unwrap();
    assert!(matches!(
        EngineConfig::load(&path),
        Err(ConfigError::Json { .. })
    ));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = EngineConfig::load(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}
