//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for catalog operations, whatever the UI.
//!
//! The facade:
//! - **Loads** the catalog once, at construction, from a [`CatalogSource`]
//! - **Dispatches** to the appropriate command function
//! - **Injects** configuration (the contact recipient) into derivations
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no browsing state; that belongs to the client
//! (see [`crate::state::ViewState`]).
//!
//! `VitrinaApi<S: CatalogSource>` is generic over the source:
//! - Production: `VitrinaApi<BundledSource>` or `VitrinaApi<JsonFileSource>`
//! - Testing: `VitrinaApi<InMemorySource>`

use crate::commands;
use crate::config::VitrinaConfig;
use crate::error::Result;
use crate::store::{Catalog, CatalogSource};

pub struct VitrinaApi<S: CatalogSource> {
    source: S,
    catalog: Catalog,
    config: VitrinaConfig,
    paths: commands::VitrinaPaths,
}

impl<S: CatalogSource> VitrinaApi<S> {
    pub fn new(source: S, config: VitrinaConfig, paths: commands::VitrinaPaths) -> Result<Self> {
        let catalog = Catalog::from_source(&source)?;
        Ok(Self {
            source,
            catalog,
            config,
            paths,
        })
    }

    pub fn categories(&self) -> commands::CmdResult {
        commands::categories::run(&self.catalog)
    }

    pub fn list_products(&self, query: &str, category: &str) -> commands::CmdResult {
        commands::list::run(&self.catalog, &self.config.whatsapp_number, query, category)
    }

    pub fn view_product(&self, code: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.catalog, &self.config.whatsapp_number, code)
    }

    pub fn contact_link(&self, code: &str) -> Result<commands::CmdResult> {
        commands::link::run(&self.catalog, &self.config.whatsapp_number, code)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &VitrinaConfig {
        &self.config
    }

    pub fn paths(&self) -> &commands::VitrinaPaths {
        &self.paths
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, VitrinaPaths};
