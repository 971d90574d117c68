use std::fs;
use tempfile::TempDir;
use vaxtalk_core::config::{AppConfig, ResponderBackend};
use vaxtalk_infrastructure::{ConfigLoader, SecretStorage};

#[test]
fn loads_full_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
log_level = "debug"
default_persona = "misinformation"

[responder]
backend = "openai"
timeout_secs = 4
model = "gpt-4o"
base_url = "http://localhost:8080/v1/chat/completions"
max_tokens = 80
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from(&path).unwrap();
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.default_persona, "misinformation");
    assert_eq!(config.responder.backend, ResponderBackend::OpenAi);
    assert_eq!(config.responder.timeout_secs, 4);
    assert_eq!(config.responder.model, "gpt-4o");
    assert_eq!(config.responder.base_url, "http://localhost:8080/v1/chat/completions");
    assert_eq!(config.responder.max_tokens, 80);
}

#[test]
fn empty_config_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "   \n").unwrap();

    assert_eq!(ConfigLoader::load_from(&path).unwrap(), AppConfig::default());
}

#[test]
fn malformed_config_is_serialization_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "log_level = \n[responder").unwrap();

    let err = ConfigLoader::load_from(&path).unwrap_err();
    assert!(err.is_serialization());
}

#[test]
fn unknown_backend_is_serialization_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[responder]\nbackend = \"carrier-pigeon\"\n").unwrap();

    assert!(ConfigLoader::load_from(&path).unwrap_err().is_serialization());
}

#[test]
fn secret_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("secret.json");
    fs::write(&path, r#"{"openai": {"api_key": "sk-test-123", "model_name": "gpt-4o-mini"}}"#).unwrap();

    let storage = SecretStorage::with_path(&path);
    let secrets = storage.load().unwrap();
    let openai = secrets.openai.unwrap();
    assert_eq!(openai.api_key, "sk-test-123");
    assert_eq!(openai.model_name.as_deref(), Some("gpt-4o-mini"));

    let creds = storage.openai_credentials().unwrap().unwrap();
    assert_eq!(creds.api_key, "sk-test-123");
}

#[test]
fn missing_secret_file_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let storage = SecretStorage::with_path(temp_dir.path().join("secret.json"));
    assert!(storage.load().unwrap().openai.is_none());
}

#[test]
fn invalid_secret_json_is_serialization_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("secret.json");
    fs::write(&path, "{ invalid json").unwrap();

    assert!(SecretStorage::with_path(&path).load().unwrap_err().is_serialization());
}
