//! # Interactive Browsing
//!
//! `vitrina browse` keeps one [`ViewState`] for the whole session and reads one command
//! per line. Every state change re-renders the screen: header, listing and, when a
//! product is selected, its detail under the listing.
//!
//! Products can only be opened from what is currently listed, matching a click on a
//! visible row or card. Filtering never closes an open detail.

use super::render::{render_categories, render_detail, render_listing, render_messages, Listing};
use std::io::{BufRead, Write};
use std::path::Path;
use vitrina::api::{CmdMessage, VitrinaApi};
use vitrina::display::DisplayProduct;
use vitrina::error::Result;
use vitrina::model::{LayoutMode, ALL_CATEGORIES};
use vitrina::state::{Action, ViewState};
use vitrina::store::CatalogSource;

pub const PROMPT: &str = "vitrina> ";

pub const HELP: &str = "\
Comandos:
  search TEXTO      filtra por código, producto o categoría (sin texto, limpia)
  category NOMBRE   filtra por categoría (sin nombre, lista las opciones)
  all               vuelve a mostrar todas las categorías
  table | cards     cambia el diseño (toggle alterna)
  open CÓDIGO       abre el detalle de un producto listado
  close | dismiss   cierra el detalle
  help              muestra esta ayuda
  quit              sale
";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Apply(Action),
    Open(String),
    Categories,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "" => Input::Empty,
        "search" | "s" | "buscar" => Input::Apply(Action::SetQuery(rest.to_string())),
        "category" | "c" | "categoria" | "categoría" if rest.is_empty() => Input::Categories,
        "category" | "c" | "categoria" | "categoría" => {
            Input::Apply(Action::SetCategory(rest.to_string()))
        }
        "all" | "todas" => Input::Apply(Action::SetCategory(ALL_CATEGORIES.to_string())),
        "table" | "tabla" => Input::Apply(Action::SetLayout(LayoutMode::Table)),
        "cards" | "tarjetas" => Input::Apply(Action::SetLayout(LayoutMode::Cards)),
        "toggle" | "t" => Input::Apply(Action::ToggleLayout),
        "open" | "o" | "ver" if !rest.is_empty() => Input::Open(rest.to_string()),
        "close" | "x" | "cerrar" => Input::Apply(Action::Close),
        "dismiss" | "esc" => Input::Apply(Action::Dismiss),
        "help" | "h" | "?" | "ayuda" => Input::Help,
        "quit" | "q" | "exit" | "salir" => Input::Quit,
        _ => Input::Unknown(line.to_string()),
    }
}

/// What to do after handling a line.
#[derive(Debug, PartialEq)]
pub enum Step {
    Show(String),
    Quit,
}

pub struct Session<'a, S: CatalogSource> {
    api: &'a VitrinaApi<S>,
    public_dir: Option<&'a Path>,
    use_color: Option<bool>,
    state: ViewState,
}

impl<'a, S: CatalogSource> Session<'a, S> {
    pub fn new(
        api: &'a VitrinaApi<S>,
        public_dir: Option<&'a Path>,
        use_color: Option<bool>,
    ) -> Self {
        Self {
            api,
            public_dir,
            use_color,
            state: ViewState::new(api.settings().layout),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        write!(out, "{}{}", self.screen(), PROMPT)?;
        out.flush()?;

        for line in input.lines() {
            match self.handle(&line?) {
                Step::Show(text) => write!(out, "{}", text)?,
                Step::Quit => return Ok(()),
            }
            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }

        writeln!(out)?;
        Ok(())
    }

    pub fn handle(&mut self, line: &str) -> Step {
        match parse_input(line) {
            Input::Empty => Step::Show(String::new()),
            Input::Quit => Step::Quit,
            Input::Help => Step::Show(HELP.to_string()),
            Input::Categories => {
                let categories = self.state.categories(self.api.catalog().products());
                Step::Show(render_categories(
                    &categories,
                    Some(self.state.category.as_str()),
                    self.use_color,
                ))
            }
            Input::Unknown(text) => Step::Show(self.warn(format!(
                "Comando desconocido: {} (help muestra la ayuda)",
                text
            ))),
            Input::Open(code) => {
                let found = self
                    .state
                    .visible(self.api.catalog().products())
                    .into_iter()
                    .find(|p| p.code == code)
                    .cloned();
                match found {
                    Some(product) => {
                        self.apply(Action::Select(product));
                        Step::Show(self.screen())
                    }
                    None => Step::Show(self.warn(format!("No está en la lista: {}", code))),
                }
            }
            Input::Apply(action) => {
                self.apply(action);
                Step::Show(self.screen())
            }
        }
    }

    fn apply(&mut self, action: Action) {
        tracing::debug!(?action, "browse action");
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
    }

    fn warn(&self, content: String) -> String {
        render_messages(&[CmdMessage::warning(content)], self.use_color)
    }

    fn screen(&self) -> String {
        let result = self
            .api
            .list_products(&self.state.query, &self.state.category);
        let selected = self.state.selection.product();
        let settings = self.api.settings();

        let listing = Listing {
            company: &settings.company_name,
            products: &result.listed_products,
            total: result.total,
            query: &self.state.query,
            category: &self.state.category,
            layout: self.state.layout,
            selected: selected.map(|p| p.code.as_str()),
            public_dir: self.public_dir,
        };

        let mut output = render_listing(&listing, self.use_color);
        output.push_str(&render_messages(&result.messages, self.use_color));

        if let Some(product) = selected {
            let shown = DisplayProduct::new(product, &settings.whatsapp_number);
            output.push('\n');
            output.push_str(&render_detail(&shown, self.public_dir, true, self.use_color));
        }
        output
    }
}
