use std::fs;

use plotkit::{IndexKind, PipelineConfig};
use tempfile::TempDir;

const DEMO_CONFIG: &str = include_str!("../../demos/plotkit.toml");

#[test]
fn test_load_demo_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plotkit.toml");
    fs::write(&path, DEMO_CONFIG).unwrap();

    let config = PipelineConfig::load_from_file(&path).unwrap();
    assert_eq!(config.flatten.path_epsilon, 0.25);
    assert_eq!(config.selection.layer_id.as_deref(), Some("outline"));
    assert_eq!(config.optimizer.round.precision, 3);
    assert_eq!(config.optimizer.sort.index, IndexKind::RTree);
}

#[test]
fn test_json_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plotkit.json");

    let mut config = PipelineConfig::default();
    config.optimizer.sort.index = IndexKind::KdTree;
    config.planner.max_velocity = 8.0;
    config.save_to_file(&path).unwrap();

    let loaded = PipelineConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded.optimizer.sort.index, IndexKind::KdTree);
    assert_eq!(loaded.planner.max_velocity, 8.0);
    assert_eq!(loaded.flatten.recursion, config.flatten.recursion);
    assert_eq!(loaded.selection, config.selection);
}

#[test]
fn test_toml_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plotkit.toml");

    let mut config = PipelineConfig::default();
    config.selection.stroke = Some("#ff0000".to_string());
    config.optimizer.simplify.enabled = false;
    config.save_to_file(&path).unwrap();

    assert_eq!(PipelineConfig::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_rejects_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plotkit.yaml");
    fs::write(&path, "planner: {}").unwrap();

    let err = PipelineConfig::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains(".json or .toml"));
}

#[test]
fn test_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plotkit.json");
    fs::write(&path, r#"{ "planner": { "acceleration": -2.0 } }"#).unwrap();

    let err = PipelineConfig::load_from_file(&path).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("acceleration"), "{}", message);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = PipelineConfig::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}
