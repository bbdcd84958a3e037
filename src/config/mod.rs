mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config = parse_config(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

/// Parse and validate configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config> {
    let mut config: Config = toml::from_str(content)?;

    config.root_dir = expand_root_dir(&config.root_dir);

    validate_config(&config)?;

    Ok(config)
}

/// Pick the config file to load: the explicit path, else the first default
/// location that exists
pub fn resolve_config_path(custom_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = custom_path {
        return Some(path.to_path_buf());
    }

    let default_paths = [
        "./smilseq.toml",
        "~/.config/smilseq/config.toml",
        "/etc/smilseq/config.toml",
    ];

    default_paths
        .iter()
        .map(|path_str| PathBuf::from(shellexpand::tilde(path_str).as_ref()))
        .find(|path| path.exists())
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    match resolve_config_path(custom_path) {
        Some(path) => load_config(&path),
        None => Ok(Config::default()),
    }
}

fn expand_root_dir(root_dir: &Path) -> PathBuf {
    let raw = root_dir.to_string_lossy();
    PathBuf::from(shellexpand::tilde(raw.as_ref()).as_ref())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    if config.host.trim().is_empty() {
        anyhow::bail!("Server host cannot be empty");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert!(!config.debug);
        assert_eq!(config.root_dir, PathBuf::from("/var/media"));
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn all_fields_parse() {
        let config = parse_config(
            r#"
host = "127.0.0.1"
port = 9000
debug = true
root_dir = "/srv/smil"
request_timeout_secs = 5
"#,
        )
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert!(config.debug);
        assert_eq!(config.root_dir, PathBuf::from("/srv/smil"));
        assert_eq!(
            config.request_timeout(),
            Some(std::time::Duration::from_secs(5))
        );
    }

    #[test]
    fn zero_port_is_rejected() {
        assert!(parse_config("port = 0").is_err());
    }

    #[test]
    fn empty_host_is_rejected() {
        assert!(parse_config("host = \"  \"").is_err());
    }

    #[test]
    fn zero_timeout_disables_deadline() {
        let config = parse_config("request_timeout_secs = 0").unwrap();
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn root_dir_tilde_is_expanded() {
        let config = parse_config("root_dir = \"~/media\"").unwrap();
        assert!(!config.root_dir.to_string_lossy().starts_with('~'));
        assert!(config.root_dir.ends_with("media"));
    }

    #[test]
    fn missing_root_dir_is_a_warning_not_an_error() {
        let config = parse_config("root_dir = \"/definitely/not/here\"").unwrap();
        let warnings = config.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("/definitely/not/here"));
    }

    #[test]
    fn existing_root_dir_has_no_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            root_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        assert!(config.warnings().is_empty());
    }

    #[test]
    fn explicit_config_path_wins() {
        let path = Path::new("/srv/custom.toml");
        assert_eq!(resolve_config_path(Some(path)), Some(path.to_path_buf()));
    }

    #[test]
    fn invalid_type_is_rejected() {
        assert!(parse_config("port = \"eighty\"").is_err());
    }
}
