use pex_context::{Configuration, ContextError};
use std::io::Write;

#[test]
fn loads_config_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"server-tags": ["lobby", "eu"]}}"#).unwrap();

    let cfg = Configuration::load(file.path()).unwrap();
    assert_eq!(cfg.server_tags, vec!["lobby".to_string(), "eu".to_string()]);
    assert_eq!(cfg.time_zone, None);
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Configuration::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ContextError::Config(ref msg) if msg.contains("absent.json")));
}
