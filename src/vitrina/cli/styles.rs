//! Styles for the vitrina CLI.
//!
//! Templates only refer to semantic names (`price`, `code`, `muted`, ...); the actual
//! colors live here, registered once through `once_cell::sync::Lazy`. Unknown names
//! render as plain text.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub mod names {
    pub const TITLE: &str = "title";
    pub const MUTED: &str = "muted";
    pub const COUNT: &str = "count";
    pub const COLUMN_HEADER: &str = "column_header";
    pub const CODE: &str = "code";
    pub const NAME: &str = "name";
    pub const PRICE: &str = "price";
    pub const LINK: &str = "link";
    pub const BORDER: &str = "border";
    pub const SELECTED: &str = "selected";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style
                .clone()
                .force_styling(true)
                .apply_to(text)
                .to_string(),
            _ => text.to_string(),
        }
    }
}

pub static VITRINA_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::TITLE, Style::new().bold())
        .add(names::MUTED, Style::new().color256(246))
        .add(names::COUNT, Style::new().bold())
        .add(names::COLUMN_HEADER, Style::new().color256(246).bold())
        .add(names::CODE, Style::new().color256(246))
        .add(names::NAME, Style::new().bold())
        .add(names::PRICE, Style::new().green().bold())
        .add(names::LINK, Style::new().cyan().underlined())
        .add(names::BORDER, Style::new().color256(240))
        .add(names::SELECTED, Style::new().black().on_yellow())
        .add(names::INFO, Style::new())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
});
