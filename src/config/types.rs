use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Verbose logging
    #[serde(default)]
    pub debug: bool,

    /// Base directory for SMIL lookups and clip path resolution
    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,

    /// Deadline around a single translation, 0 disables it
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_root_dir() -> PathBuf {
    PathBuf::from("/var/media")
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
            root_dir: default_root_dir(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Config {
    /// Deadline for one translation, if any.
    pub fn request_timeout(&self) -> Option<std::time::Duration> {
        (self.request_timeout_secs > 0)
            .then(|| std::time::Duration::from_secs(self.request_timeout_secs))
    }

    /// Non-fatal problems, reported once logging is up.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !self.root_dir.is_dir() {
            warnings.push(format!(
                "root_dir {} does not exist or is not a directory",
                self.root_dir.display()
            ));
        }

        warnings
    }
}
