//! Application configuration. Paths only; no credentials.

use serde::Deserialize;

/// Default directory scanned for exported chat JSON files.
pub const DEFAULT_EXPORT_DIR: &str = "./exports";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Directory containing exported chat JSON files. Read from TG_MENTIONS_EXPORT_DIR.
    #[serde(default)]
    pub export_dir: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("TG_MENTIONS"));
        if let Ok(path) = std::env::var("TG_MENTIONS_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let cfg: Self = c.build()?.try_deserialize()?;
        Ok(cfg)
    }

    /// Returns the export directory. Defaults to DEFAULT_EXPORT_DIR if unset.
    pub fn export_dir_or_default(&self) -> String {
        self.export_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_EXPORT_DIR.to_string())
    }
}
