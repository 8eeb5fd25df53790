/// Server configuration
use crate::error::{Result, ServerError};
use config::{builder::DefaultState, ConfigBuilder};
use finetune_core::InMemoryCatalog;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Audio source served for every seeded track
    #[serde(default)]
    pub audio_url: Option<String>,
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// Reads `path` when given (it must exist), else `config.toml` when
    /// present, then `FINETUNE_`-prefixed variables such as
    /// `FINETUNE_SERVER__PORT`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("FINETUNE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        Self::build(settings)
    }

    fn build(settings: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.parse::<std::net::IpAddr>().is_err() {
            return Err(ServerError::Config(format!(
                "Invalid listen address {:?}",
                self.server.host
            )));
        }

        if let Some(url) = &self.catalog.audio_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ServerError::Config(format!(
                    "Audio URL must start with http:// or https://, got {:?}",
                    url
                )));
            }
        }

        Ok(())
    }
}

impl CatalogSettings {
    /// Seeded catalog with the configured audio source applied
    pub fn build_catalog(&self) -> Result<InMemoryCatalog> {
        let seeded = InMemoryCatalog::classical();
        let Some(audio_url) = &self.audio_url else {
            return Ok(seeded);
        };

        let tracks = seeded
            .tracks()
            .iter()
            .cloned()
            .map(|mut track| {
                track.audio_url.clone_from(audio_url);
                track
            })
            .collect();
        Ok(InMemoryCatalog::new(tracks)?)
    }
}

// Default values
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}
