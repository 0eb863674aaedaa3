use crate::error::ConfigError;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Endpoints and limits for the remote analysis services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Link-reputation service endpoint (JSON POST).
    pub link_endpoint: String,
    /// Image-forensics service endpoint (multipart POST).
    pub image_endpoint: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Largest image upload accepted before dispatch.
    pub max_image_mb: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            link_endpoint: "http://127.0.0.1:5000/check_link".into(),
            image_endpoint: "http://127.0.0.1:5000/check_image".into(),
            timeout_secs: 30,
            max_image_mb: 10,
        }
    }
}

impl Config {
    /// Load `~/.scamlens/config.toml`, writing defaults on first run.
    pub fn load_or_init() -> Result<Self, ConfigError> {
        let home = UserDirs::new()
            .ok_or_else(|| ConfigError::Load("could not determine home directory".into()))?;
        let dir = home.home_dir().join(".scamlens");
        Self::load_or_init_at(&dir.join("config.toml"))
    }

    /// Like [`Config::load_or_init`] but with an explicit path, so tests can
    /// point at a temp directory.
    pub fn load_or_init_at(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let contents = fs::read_to_string(path)?;
            toml::from_str(&contents)
                .map_err(|e| ConfigError::Load(format!("failed to parse {}: {e}", path.display())))?
        } else {
            let config = Self {
                config_path: path.to_path_buf(),
                analysis: AnalysisConfig::default(),
            };
            config.save()?;
            config
        };

        config.config_path = path.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Load(format!("failed to serialize config: {e}")))?;
        fs::write(&self.config_path, toml_str)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for endpoint in [&self.analysis.link_endpoint, &self.analysis.image_endpoint] {
            url::Url::parse(endpoint).map_err(|e| {
                ConfigError::Validation(format!("bad analysis endpoint '{endpoint}': {e}"))
            })?;
        }
        if self.analysis.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "analysis.timeout_secs must be positive".into(),
            ));
        }
        Ok(())
    }
}
