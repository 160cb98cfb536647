//! # Vitrina Architecture
//!
//! Vitrina is a **UI-agnostic catalog library**. The terminal client is one way to look at
//! a price list; the same core could back a web page or a kiosk screen.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders templates, reads stdin         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the loaded catalog and the configuration            │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + derivations                │
//! │  - Category extraction, filtering, detail lookup            │
//! │  - Price, image and contact-link derivations                │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog Store (store/)                                     │
//! │  - CatalogSource trait                                      │
//! │  - Bundled dataset, JSON file, in-memory (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is loaded once and never mutated. Every derived view (category list,
//! filtered list, presentation fields) is a pure function of the product list and the
//! current [`state::ViewState`], recomputed whenever that state changes.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular Rust types,
//! and never writes to stdout/stderr. Opening a contact link or loading an image is the
//! display layer's job; the core only computes the strings.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Category extraction, filtering, listing, detail lookup, config
//! - [`store`]: Catalog sources and the immutable [`store::Catalog`]
//! - [`model`]: Core data types (`Product`, `LayoutMode`) and the sentinel labels
//! - [`state`]: Filter/layout/selection state with reducer-style transitions
//! - [`price`], [`media`], [`contact`]: presentation derivations
//! - [`display`]: Presentation-ready product records
//! - [`config`]: Configuration management
//! - [`init`]: Context wiring for clients
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod contact;
pub mod display;
pub mod error;
pub mod init;
pub mod media;
pub mod model;
pub mod price;
pub mod state;
pub mod store;
