use crate::error::{AdvisorError, Result};
use crate::i18n::Locale;
use crate::logic::ReadingInput;
use crate::models::{CropType, FieldProfile, SoilType};
use dialoguer::{Input, Select};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub defaults: FormDefaults,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub language: Locale,
    /// Directory holding `<code>.yaml` label tables that replace the built-in ones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locales_dir: Option<PathBuf>,
}

/// Initial values shown in the input form.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FormDefaults {
    pub nitrogen: f64,
    pub phosphorous: f64,
    pub potassium: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub moisture: f64,
    pub soil_type: SoilType,
    pub crop_type: CropType,
}

impl FormDefaults {
    pub fn reading_input(&self) -> ReadingInput {
        ReadingInput {
            nitrogen: Some(self.nitrogen),
            phosphorous: Some(self.phosphorous),
            potassium: Some(self.potassium),
            temperature: Some(self.temperature),
            humidity: Some(self.humidity),
            moisture: Some(self.moisture),
        }
    }

    pub fn profile(&self) -> FieldProfile {
        FieldProfile::new(self.soil_type, self.crop_type)
    }
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            nitrogen: 40.0,
            phosphorous: 50.0,
            potassium: 60.0,
            temperature: 25.0,
            humidity: 65.0,
            moisture: 40.0,
            soil_type: SoilType::Loamy,
            crop_type: CropType::Rice,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Accept the port as a number or as a string, so `${FERTADVISOR_PORT}` works
fn deserialize_port<'de, D>(deserializer: D) -> std::result::Result<u16, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PortValue {
        Number(u16),
        Text(String),
    }

    match PortValue::deserialize(deserializer)? {
        PortValue::Number(port) => Ok(port),
        PortValue::Text(value) => value.trim().parse::<u16>().map_err(|_| {
            D::Error::custom(format!(
                "invalid port '{}' - ensure FERTADVISOR_PORT environment variable is set",
                value
            ))
        }),
    }
}

impl Config {
    /// Load config from the override path or a standard location.
    /// A missing file is not an error; built-in defaults are used.
    pub fn load(config_override: Option<&PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(AdvisorError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p.clone()
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        tracing::debug!("Loading config from {}", config_path.display());

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| AdvisorError::Config(format!("Failed to read config: {}", e)))?;

        Self::parse(&config_str)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content);

        serde_yaml::from_str(&content)
            .map_err(|e| AdvisorError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Search for config.yaml in standard locations.
    pub fn find_config_path() -> Option<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Try XDG config directory
        dirs::config_dir()
            .map(|dir| dir.join("fertadvisor").join("config.yaml"))
            .filter(|p| p.exists())
    }

    /// Default path for writing new config files (~/.config/fertadvisor/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AdvisorError::Config("Cannot determine config directory".into()))?
            .join("fertadvisor");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    pub fn setup_interactive(target: Option<&PathBuf>) -> Result<(Self, PathBuf)> {
        let defaults = FormDefaults::default();

        println!();
        println!("Fertilizer advisor setup");
        println!();

        // --- Display ---
        println!("Display");
        let languages: Vec<&str> = Locale::all().iter().map(|l| l.as_str()).collect();
        let language_idx = Select::new()
            .with_prompt("  Language")
            .items(&languages)
            .default(0)
            .interact()?;
        let language = Locale::all()[language_idx];

        println!();

        // --- Form defaults ---
        println!("Form defaults");
        let soils: Vec<&str> = SoilType::all().iter().map(|s| s.as_str()).collect();
        let soil_idx = Select::new()
            .with_prompt("  Soil type")
            .items(&soils)
            .default(0)
            .interact()?;

        let crops: Vec<&str> = CropType::all().iter().map(|c| c.as_str()).collect();
        let crop_idx = Select::new()
            .with_prompt("  Crop type")
            .items(&crops)
            .default(0)
            .interact()?;

        println!();

        // --- HTTP server ---
        println!("HTTP server");
        let host: String = Input::new()
            .with_prompt("  Host")
            .default(default_host())
            .interact_text()?;

        let port: u16 = Input::new()
            .with_prompt("  Port")
            .default(default_port())
            .interact_text()?;

        println!();

        let config = Config {
            display: DisplayConfig {
                language,
                locales_dir: None,
            },
            defaults: FormDefaults {
                soil_type: SoilType::all()[soil_idx],
                crop_type: CropType::all()[crop_idx],
                ..defaults
            },
            server: ServerConfig { host, port },
        };

        let config_path = match target {
            Some(p) => p.clone(),
            None => Self::default_config_path()?,
        };
        config.write(&config_path)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    pub fn write(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AdvisorError::Config(format!("Failed to serialize config: {}", e)))?;

        // Write with a header comment
        let content = format!(
            "# Fertilizer advisor configuration\n# Generated by `fertadvisor init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(path, content)?;
        Ok(())
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let Ok(re) = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") else {
            return result;
        };

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::parse("{}").unwrap();
        assert_eq!(config.display.language, Locale::English);
        assert_eq!(config.defaults.nitrogen, 40.0);
        assert_eq!(config.defaults.soil_type, SoilType::Loamy);
        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn parses_all_sections() {
        let yaml = r#"
display:
  language: kannada
  locales_dir: /opt/labels
defaults:
  nitrogen: 10
  phosphorous: 20
  potassium: 30
  temperature: 21.5
  humidity: 70
  moisture: 55
  soil_type: Sandy
  crop_type: Maize
server:
  host: 0.0.0.0
  port: 9000
"#;
        let config = Config::parse(yaml).unwrap();
        assert_eq!(config.display.language, Locale::Kannada);
        assert_eq!(config.display.locales_dir, Some(PathBuf::from("/opt/labels")));
        assert_eq!(
            config.defaults.profile(),
            FieldProfile::new(SoilType::Sandy, CropType::Maize)
        );
        assert_eq!(config.defaults.reading_input().temperature, Some(21.5));
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn port_accepts_string() {
        let config = Config::parse("server:\n  port: \"8181\"\n").unwrap();
        assert_eq!(config.server.port, 8181);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn bad_port_is_config_error() {
        let err = Config::parse("server:\n  port: \"${FERTADVISOR_UNSET_PORT_FOR_TEST}\"\n")
            .unwrap_err();
        assert!(matches!(err, AdvisorError::Config(_)));
        assert!(err.to_string().contains("invalid port"));
    }

    #[test]
    fn env_vars_substituted() {
        std::env::set_var("FERTADVISOR_TEST_HOST", "10.1.2.3");
        let config = Config::parse("server:\n  host: ${FERTADVISOR_TEST_HOST}\n").unwrap();
        assert_eq!(config.server.host, "10.1.2.3");
    }

    #[test]
    fn language_accepts_short_codes() {
        let config = Config::parse("display:\n  language: kn\n").unwrap();
        assert_eq!(config.display.language, Locale::Kannada);
        let config = Config::parse("display:\n  language: English\n").unwrap();
        assert_eq!(config.display.language, Locale::English);

        let err = Config::parse("display:\n  language: hindi\n").unwrap_err();
        assert!(matches!(err, AdvisorError::Config(_)));
    }

    #[test]
    fn unknown_soil_type_rejected() {
        let err = Config::parse("defaults:\n  soil_type: Gravel\n").unwrap_err();
        assert!(matches!(err, AdvisorError::Config(_)));
    }

    #[test]
    fn partial_defaults_fill_from_builtins() {
        let config = Config::parse("defaults:\n  moisture: 85\n").unwrap();
        assert_eq!(config.defaults.moisture, 85.0);
        assert_eq!(config.defaults.potassium, 60.0);
        assert_eq!(config.defaults.crop_type, CropType::Rice);
    }

    #[test]
    fn write_then_load() {
        let path = std::env::temp_dir()
            .join(format!("fertadvisor-config-{}", std::process::id()))
            .join("config.yaml");
        let mut config = Config::default();
        config.display.language = Locale::Kannada;
        config.server.port = 9191;
        config.write(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.display.language, Locale::Kannada);
        assert_eq!(loaded.server.port, 9191);

        if let Some(dir) = path.parent() {
            std::fs::remove_dir_all(dir).unwrap();
        }
    }

    #[test]
    fn missing_override_is_an_error() {
        let path = PathBuf::from("/definitely/not/here/config.yaml");
        assert!(matches!(
            Config::load(Some(&path)),
            Err(AdvisorError::Config(_))
        ));
    }
}
