use serde::Deserialize;

use crate::ResultAssist;

const DEFAULT_CONFIG_PATH: &str = "config/assist";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssistSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl Default for AssistSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemini-2.0-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
        }
    }
}

impl AssistSettings {
    /// Loads `config/assist.toml` (optional) with `QUADERNO_ASSIST_*`
    /// environment overrides.
    pub fn load() -> ResultAssist<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(DEFAULT_CONFIG_PATH).required(false))
            .add_source(config::Environment::with_prefix("QUADERNO_ASSIST"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
