//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as stand-alone files
//! and embedded at compile time.
//!
//! Templates are rendered with `trim_blocks`, so a line holding only a block tag
//! leaves no blank line behind. Block tags go at column zero. Layout math (widths,
//! truncation, padding) is done in Rust and handed over as ready strings; when a
//! style depends on data, the style name is passed as a variable instead of
//! branching in the template.

pub const HEADER_TEMPLATE: &str = include_str!("templates/header.tmp");
pub const TABLE_TEMPLATE: &str = include_str!("templates/table.tmp");
pub const CARDS_TEMPLATE: &str = include_str!("templates/cards.tmp");
pub const DETAIL_TEMPLATE: &str = include_str!("templates/detail.tmp");
pub const CATEGORIES_TEMPLATE: &str = include_str!("templates/categories.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
