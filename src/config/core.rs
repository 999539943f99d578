use anyhow::Result;
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Layered configuration: embedded defaults, then user config, then repo
/// config, then `SCOUT_`-prefixed environment variables. CLI flags are
/// applied by the commands on top of the extracted values.
pub struct ScoutConfig {
    figment: Figment,
}

impl ScoutConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        // If a custom config is specified, use only that + defaults + env vars
        if let Some(custom_path) = custom_config {
            figment = figment
                .merge(Toml::file(custom_path))
                .merge(Json::file(custom_path))
                .merge(Yaml::file(custom_path));
        } else {
            figment = figment
                // User config - support multiple formats
                .merge(Toml::file(Self::user_config_path()))
                .merge(Json::file(Self::user_config_path().replace(".toml", ".json")))
                .merge(Yaml::file(Self::user_config_path().replace(".toml", ".yaml")))
                .merge(Yaml::file(Self::user_config_path().replace(".toml", ".yml")))
                // Repository config - support multiple formats
                .merge(Toml::file("scout.toml"))
                .merge(Json::file("scout.json"))
                .merge(Yaml::file("scout.yaml"))
                .merge(Yaml::file("scout.yml"));
        }

        // Environment variables always have highest priority
        figment = figment.merge(Env::prefixed("SCOUT_"));

        Ok(ScoutConfig { figment })
    }

    /// Get a string value from config
    pub fn get_string(&self, path: &str) -> Result<String> {
        Ok(self.figment.extract_inner(path)?)
    }

    /// Get an integer value from config
    pub fn get_u64(&self, path: &str) -> Result<u64> {
        Ok(self.figment.extract_inner(path)?)
    }

    /// Get a vector of strings from config
    pub fn get_vec(&self, path: &str) -> Result<Vec<String>> {
        Ok(self.figment.extract_inner(path)?)
    }

    fn user_config_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{home}/.config/scout/config.toml"),
            Err(_) => "~/.config/scout/config.toml".to_string(),
        }
    }
}
