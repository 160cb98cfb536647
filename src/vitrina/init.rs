use crate::api::{VitrinaApi, VitrinaPaths};
use crate::config::VitrinaConfig;
use crate::error::{Result, VitrinaError};
use crate::model::Product;
use crate::store::bundled::BundledSource;
use crate::store::fs::JsonFileSource;
use crate::store::CatalogSource;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the config directory (handy for tests and portable installs).
pub const HOME_ENV: &str = "VITRINA_HOME";

/// Where the catalog is read from, chosen at startup.
#[derive(Debug, Clone)]
pub enum CatalogOrigin {
    Bundled(BundledSource),
    File(JsonFileSource),
}

impl CatalogSource for CatalogOrigin {
    fn load(&self) -> Result<Vec<Product>> {
        match self {
            CatalogOrigin::Bundled(source) => source.load(),
            CatalogOrigin::File(source) => source.load(),
        }
    }

    fn describe(&self) -> String {
        match self {
            CatalogOrigin::Bundled(source) => source.describe(),
            CatalogOrigin::File(source) => source.describe(),
        }
    }
}

pub struct VitrinaContext {
    pub api: VitrinaApi<CatalogOrigin>,
    pub config: VitrinaConfig,
}

/// `$VITRINA_HOME` when set, otherwise the platform config directory.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "vitrina", "vitrina")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| VitrinaError::Config("Could not determine config dir".to_string()))
}

/// Explicit path first, then the configured one, then the bundled dataset.
/// Relative configured paths resolve against the config directory.
pub fn choose_origin(
    explicit: Option<&Path>,
    config: &VitrinaConfig,
    config_dir: &Path,
) -> CatalogOrigin {
    if let Some(path) = explicit {
        return CatalogOrigin::File(JsonFileSource::new(path));
    }
    match &config.catalog {
        Some(path) if path.is_relative() => {
            CatalogOrigin::File(JsonFileSource::new(config_dir.join(path)))
        }
        Some(path) => CatalogOrigin::File(JsonFileSource::new(path)),
        None => CatalogOrigin::Bundled(BundledSource),
    }
}

pub fn initialize(catalog_override: Option<&Path>) -> Result<VitrinaContext> {
    let config_dir = config_dir()?;
    let config = VitrinaConfig::load(&config_dir)?;
    let origin = choose_origin(catalog_override, &config, &config_dir);
    tracing::debug!(
        config_dir = %config_dir.display(),
        catalog = %origin.describe(),
        "initializing"
    );

    let paths = VitrinaPaths { config_dir };
    let api = VitrinaApi::new(origin, config.clone(), paths)?;
    Ok(VitrinaContext { api, config })
}
