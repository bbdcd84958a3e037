//! Configuration loading tests.

use smilseq::config::{load_config, load_config_or_default, Config};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn load_full_config_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("smilseq.toml");
    std::fs::write(
        &path,
        format!(
            "host = \"127.0.0.1\"\nport = 5000\ndebug = true\nroot_dir = \"{}\"\n",
            temp.path().display()
        ),
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 5000);
    assert!(config.debug);
    assert_eq!(config.root_dir, temp.path());
}

#[test]
fn missing_config_file_is_an_error() {
    let temp = tempdir().unwrap();
    let err = load_config(&temp.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn invalid_config_file_is_an_error() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("broken.toml");
    std::fs::write(&path, "port = [").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn explicit_path_is_used_by_load_or_default() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("custom.toml");
    std::fs::write(&path, "port = 7070\nroot_dir = \"/srv/playlists\"\n").unwrap();

    let config = load_config_or_default(Some(path.as_path())).unwrap();
    assert_eq!(config.port, 7070);
    assert_eq!(config.root_dir, PathBuf::from("/srv/playlists"));
}

#[test]
fn explicit_missing_path_is_an_error() {
    let temp = tempdir().unwrap();
    assert!(load_config_or_default(Some(temp.path().join("nope.toml").as_path())).is_err());
}

#[test]
fn default_config_values() {
    let config = Config::default();
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 8080);
    assert!(!config.debug);
    assert_eq!(config.request_timeout_secs, 30);
}
