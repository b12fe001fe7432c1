use std::str::FromStr;

use config::ConfigError;
use serde::Deserialize;
use serde_with::serde_as;
use strum::{Display, EnumString};

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    /// Origins allowed by CORS. Empty allows any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Read settings from `config/base.yaml`, then `config/{APP_ENVIRONMENT}.yaml`,
/// then `ISSUES_`-prefixed environment variables (e.g. `ISSUES_APPLICATION__PORT`).
pub fn read_config() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| ConfigError::Foreign(Box::new(e)))?;
    let config_directory = base_path.join("config");

    let environment = Environment::from_str(
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .as_str(),
    )
    .map_err(|e| ConfigError::Message(format!("Failed to parse APP_ENVIRONMENT: {}", e)))?;
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")))
        .add_source(config::File::from(
            config_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("ISSUES")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Display, Debug, EnumString, PartialEq, Eq)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};

    #[test]
    fn environment_parses_case_insensitively() {
        assert_eq!(Environment::from_str("local").unwrap(), Environment::Local);
        assert_eq!(
            Environment::from_str("PRODUCTION").unwrap(),
            Environment::Production
        );
        assert!(Environment::from_str("staging").is_err());
        assert_eq!(Environment::Production.to_string(), "production");
    }

    #[test]
    fn settings_accept_port_as_string() {
        let yaml = r#"
application:
  host: "0.0.0.0"
  port: "8080"
"#;
        let settings: Settings = Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.application.port, 8080);
        assert_eq!(settings.application.host, "0.0.0.0");
        assert!(settings.application.allowed_origins.is_empty());
    }
}
