use crate::error::{Result, VitrinaError};
use crate::model::LayoutMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_COMPANY_NAME: &str = "Vitrina";
const DEFAULT_WHATSAPP_NUMBER: &str = "5491100000000";

/// Configuration for vitrina, stored in `config.json` inside the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VitrinaConfig {
    /// Title shown above the price list
    #[serde(default = "default_company_name")]
    pub company_name: String,

    /// Recipient id for contact links (international format, digits only)
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,

    /// Layout used when none is requested
    #[serde(default)]
    pub layout: LayoutMode,

    /// Catalog JSON file; the bundled dataset is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Directory that `/images/...` paths resolve against when checking for images
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_dir: Option<PathBuf>,
}

fn default_company_name() -> String {
    DEFAULT_COMPANY_NAME.to_string()
}

fn default_whatsapp_number() -> String {
    DEFAULT_WHATSAPP_NUMBER.to_string()
}

impl Default for VitrinaConfig {
    fn default() -> Self {
        Self {
            company_name: default_company_name(),
            whatsapp_number: default_whatsapp_number(),
            layout: LayoutMode::default(),
            catalog: None,
            public_dir: None,
        }
    }
}

/// The user-facing names of the config fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    CompanyName,
    WhatsappNumber,
    Layout,
    Catalog,
    PublicDir,
}

impl ConfigKey {
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::CompanyName,
            ConfigKey::WhatsappNumber,
            ConfigKey::Layout,
            ConfigKey::Catalog,
            ConfigKey::PublicDir,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::CompanyName => "company-name",
            ConfigKey::WhatsappNumber => "whatsapp-number",
            ConfigKey::Layout => "layout",
            ConfigKey::Catalog => "catalog",
            ConfigKey::PublicDir => "public-dir",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigKey {
    type Err = VitrinaError;

    fn from_str(s: &str) -> Result<Self> {
        ConfigKey::all()
            .iter()
            .copied()
            .find(|key| key.name() == s)
            .ok_or_else(|| VitrinaError::Config(format!("Unknown config key: {}", s)))
    }
}

impl VitrinaConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: VitrinaConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Current value of a key as text; unset paths are empty.
    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::CompanyName => self.company_name.clone(),
            ConfigKey::WhatsappNumber => self.whatsapp_number.clone(),
            ConfigKey::Layout => self.layout.to_string(),
            ConfigKey::Catalog => path_text(&self.catalog),
            ConfigKey::PublicDir => path_text(&self.public_dir),
        }
    }

    /// Sets a key from text. An empty value clears the optional paths.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            ConfigKey::CompanyName => {
                if value.is_empty() {
                    return Err(VitrinaError::Config("company-name cannot be empty".into()));
                }
                self.company_name = value.to_string();
            }
            ConfigKey::WhatsappNumber => {
                let recipient: String = value
                    .chars()
                    .filter(|c| !matches!(c, '+' | ' ' | '-'))
                    .collect();
                if recipient.is_empty() {
                    return Err(VitrinaError::Config(
                        "whatsapp-number cannot be empty".into(),
                    ));
                }
                self.whatsapp_number = recipient;
            }
            ConfigKey::Layout => {
                self.layout = value.parse().map_err(VitrinaError::Config)?;
            }
            ConfigKey::Catalog => self.catalog = optional_path(value),
            ConfigKey::PublicDir => self.public_dir = optional_path(value),
        }
        Ok(())
    }
}

fn path_text(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}

fn optional_path(value: &str) -> Option<PathBuf> {
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = VitrinaConfig::default();
        assert_eq!(config.company_name, "Vitrina");
        assert_eq!(config.layout, LayoutMode::Table);
        assert!(config.catalog.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = VitrinaConfig::load(temp.path()).unwrap();
        assert_eq!(config, VitrinaConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested");

        let mut config = VitrinaConfig::default();
        config.set(ConfigKey::CompanyName, "Ferretería Naval").unwrap();
        config.set(ConfigKey::Layout, "cards").unwrap();
        config.save(&dir).unwrap();

        let loaded = VitrinaConfig::load(&dir).unwrap();
        assert_eq!(loaded.company_name, "Ferretería Naval");
        assert_eq!(loaded.layout, LayoutMode::Cards);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{"company_name":"Amarras SRL"}"#,
        )
        .unwrap();

        let config = VitrinaConfig::load(temp.path()).unwrap();
        assert_eq!(config.company_name, "Amarras SRL");
        assert_eq!(config.whatsapp_number, DEFAULT_WHATSAPP_NUMBER);
    }

    #[test]
    fn test_whatsapp_number_is_normalized() {
        let mut config = VitrinaConfig::default();
        config
            .set(ConfigKey::WhatsappNumber, "+54 9 11-5555-0000")
            .unwrap();
        assert_eq!(config.whatsapp_number, "5491155550000");
    }

    #[test]
    fn test_whatsapp_number_is_opaque() {
        let mut config = VitrinaConfig::default();
        config.set(ConfigKey::WhatsappNumber, "ventas.sur").unwrap();
        assert_eq!(config.whatsapp_number, "ventas.sur");
        config.set(ConfigKey::WhatsappNumber, "+1 (555) 0100").unwrap();
        assert_eq!(config.whatsapp_number, "1(555)0100");
    }

    #[test]
    fn test_whatsapp_number_cannot_be_empty() {
        let mut config = VitrinaConfig::default();
        assert!(config.set(ConfigKey::WhatsappNumber, " + - ").is_err());
        assert_eq!(config.whatsapp_number, DEFAULT_WHATSAPP_NUMBER);
    }

    #[test]
    fn test_empty_value_clears_paths() {
        let mut config = VitrinaConfig::default();
        config.set(ConfigKey::Catalog, "/tmp/products.json").unwrap();
        assert_eq!(config.get(ConfigKey::Catalog), "/tmp/products.json");
        config.set(ConfigKey::Catalog, "").unwrap();
        assert!(config.catalog.is_none());
    }

    #[test]
    fn test_invalid_layout_rejected() {
        let mut config = VitrinaConfig::default();
        assert!(matches!(
            config.set(ConfigKey::Layout, "grid"),
            Err(VitrinaError::Config(_))
        ));
    }

    #[test]
    fn test_key_names_roundtrip() {
        for key in ConfigKey::all() {
            assert_eq!(key.name().parse::<ConfigKey>().unwrap(), *key);
        }
        assert!("file-ext".parse::<ConfigKey>().is_err());
    }
}
