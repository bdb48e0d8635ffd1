use super::*;

#[test]
fn test_defaults() {
    let defaults = Settings::defaults();
    assert_eq!(defaults.get("timeout"), Some(&"60".to_string()));
    assert_eq!(defaults.get("fail_fast"), Some(&"true".to_string()));
    assert_eq!(defaults.get("keep_fixtures"), Some(&"false".to_string()));
    assert_eq!(defaults.get("color"), Some(&"auto".to_string()));
    assert_eq!(defaults.get("format"), Some(&"table".to_string()));
    assert_eq!(defaults.len(), KEYS.len());
}

#[test]
fn test_validate_key() {
    assert!(validate_key("plugin_dir").is_ok());
    assert!(validate_key("launcher").is_ok());
    assert!(validate_key("progress").is_err());
}

#[test]
fn test_validate_value() {
    assert!(validate_value("color", "never").is_ok());
    assert!(validate_value("color", "sometimes").is_err());
    assert!(validate_value("timeout", "30").is_ok());
    assert!(validate_value("timeout", "0").is_err());
    assert!(validate_value("timeout", "soon").is_err());
    assert!(validate_value("fail_fast", "yes").is_err());
    assert!(validate_value("launcher", "env 'A=1").is_err());
    assert!(validate_value("plugin_dir", "/any/path").is_ok());
}

#[test]
fn test_parse_settings_accepts_strings_numbers_and_bools() {
    let content = r#"
settings {
  plugin_dir "/opt/plugins"
  timeout 5
  keep_fixtures #true
}
"#;
    let values = parse_settings(content).unwrap();
    assert_eq!(values["plugin_dir"], "/opt/plugins");
    assert_eq!(values["timeout"], "5");
    assert_eq!(values["keep_fixtures"], "true");
    assert_eq!(values["format"], "table");
}

#[test]
fn test_parse_settings_rejects_invalid_values() {
    assert!(parse_settings("settings {\n  color \"purple\"\n}\n").is_err());
}

#[test]
fn test_set_and_reset_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/settings.kdl");

    let mut settings = Settings::load_from(&path).unwrap();
    settings.set("plugin_dir", "/tmp/with \"quotes\"").unwrap();
    settings.set("timeout", "15").unwrap();

    let reloaded = Settings::load_from(&path).unwrap();
    assert_eq!(reloaded.get("plugin_dir"), Some("/tmp/with \"quotes\""));
    assert_eq!(reloaded.get("timeout"), Some("15"));

    let mut reloaded = reloaded;
    reloaded.reset("timeout").unwrap();
    assert_eq!(Settings::load_from(&path).unwrap().get("timeout"), Some("60"));
}

#[test]
fn test_set_rejects_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = Settings::load_from(&dir.path().join("settings.kdl")).unwrap();
    assert!(settings.set("editor", "vim").is_err());
    assert!(!settings.path().exists());
}
