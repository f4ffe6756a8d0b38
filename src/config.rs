use crate::errors::{RemapError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Tailwind theme configuration consumed by the CSS -> Tailwind converter.
///
/// The original tool evaluated a JavaScript `tailwind.config.js`; this port
/// consumes the declarative part of the config as JSON or YAML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TailwindConfig {
    /// Theme configuration
    pub theme: TailwindTheme,
}

/// Theme configuration for Tailwind
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TailwindTheme {
    /// Theme extensions
    pub extend: TailwindThemeExtend,
}

/// Theme extensions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TailwindThemeExtend {
    /// Custom colors (name -> CSS color value)
    pub colors: HashMap<String, String>,

    /// Custom spacing values (name -> CSS length)
    pub spacing: HashMap<String, String>,
}

impl TailwindConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RemapError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        serde_yaml::from_str(&content).map_err(|e| RemapError::Config {
            message: format!("Failed to parse YAML config: {}", e),
        })
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RemapError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        serde_json::from_str(&content).map_err(|e| RemapError::Config {
            message: format!("Failed to parse JSON config: {}", e),
        })
    }

    /// Load configuration from a file (auto-detect format)
    pub fn from_file(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(RemapError::Config {
                message: format!(
                    "Unsupported config file format: {}. Use .yaml, .yml, or .json",
                    path.display()
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = TailwindConfig::default();
        assert!(config.theme.extend.colors.is_empty());
        assert!(config.theme.extend.spacing.is_empty());
    }

    #[test]
    fn test_yaml_config_loading() {
        let yaml_content = r##"
theme:
  extend:
    colors:
      primary: "#1a73e8"
      secondary: "#ff6b6b"
    spacing:
      gutter: "1.75rem"
"##;

        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        file.write_all(yaml_content.as_bytes()).unwrap();

        let config = TailwindConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(
            config.theme.extend.colors.get("primary"),
            Some(&"#1a73e8".to_string())
        );
        assert_eq!(
            config.theme.extend.spacing.get("gutter"),
            Some(&"1.75rem".to_string())
        );
    }

    #[test]
    fn test_json_config_loading() {
        let json_content = r##"{
  "theme": {
    "extend": {
      "colors": {
        "brand": "#0066cc"
      }
    }
  }
}"##;

        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        file.write_all(json_content.as_bytes()).unwrap();

        let config = TailwindConfig::from_json_file(file.path()).unwrap();
        assert_eq!(
            config.theme.extend.colors.get("brand"),
            Some(&"#0066cc".to_string())
        );
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let file = NamedTempFile::with_suffix(".js").unwrap();
        assert!(TailwindConfig::from_file(file.path()).is_err());
    }
}
