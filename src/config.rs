use serde::Deserialize;
use std::path::PathBuf;

use crate::services::FormalityPolicy;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the wardrobe CSV file. Relative paths, including the default
    /// `data/clothes.csv`, resolve against the process's working directory,
    /// not the crate or binary location.
    #[serde(default = "default_wardrobe_path")]
    pub wardrobe_path: PathBuf,

    /// Reject formality values other than low/medium/high when loading
    #[serde(default)]
    pub strict_formality: bool,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_wardrobe_path() -> PathBuf {
    PathBuf::from("data/clothes.csv")
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn formality_policy(&self) -> FormalityPolicy {
        if self.strict_formality {
            FormalityPolicy::Strict
        } else {
            FormalityPolicy::Permissive
        }
    }

    /// Address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
