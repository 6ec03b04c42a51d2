use premium_predictor::{Error, config};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

mod common;

use common::test_utils::SAMPLE_CONFIG_YAML;

async fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let config_path = dir.path().join("config.yaml");
    tokio::fs::write(&config_path, content).await.unwrap();
    config_path
}

#[tokio::test]
async fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(&dir, SAMPLE_CONFIG_YAML).await;

    let config = config::load_from(&config_path, None).await.unwrap();

    assert_eq!(config.predictor.url, "http://127.0.0.1:8000/predict");
    assert_eq!(config.predictor.timeout_secs, 5);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8600);
    assert_eq!(config.server.logs.level, "debug");
}

#[tokio::test]
async fn test_predictor_url_override() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(&dir, SAMPLE_CONFIG_YAML).await;

    let config = config::load_from(
        &config_path,
        Some("https://predictor.internal/predict".to_string()),
    )
    .await
    .unwrap();

    assert_eq!(config.predictor.url, "https://predictor.internal/predict");
    assert_eq!(config.predictor.timeout_secs, 5);
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = config::load_from(dir.path().join("absent.yaml"), None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Io(_)));
}

#[tokio::test]
async fn test_invalid_port_is_yaml_error() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(
        &dir,
        "predictor:\n  url: \"http://localhost/predict\"\nserver:\n  port: \"not-a-number\"\n",
    )
    .await;

    let err = config::load_from(&config_path, None).await.unwrap_err();
    assert!(matches!(err, Error::Yaml(_)));
}
