use super::*;

#[test]
fn settings_file_uses_expected_filename() {
    let path = settings_file().expect("settings_file should resolve");
    assert_eq!(
        path.file_name().and_then(|f| f.to_str()),
        Some(project_identity::SETTINGS_FILE_BASENAME)
    );
}

#[test]
fn expand_home_leaves_plain_paths() {
    let path = Path::new("/opt/plugins");
    assert_eq!(expand_home(path).unwrap(), PathBuf::from("/opt/plugins"));
}

#[test]
fn expand_home_rejects_other_users() {
    assert!(expand_home(Path::new("~someone/plugins")).is_err());
}
