//! # View State
//!
//! All mutable browsing state lives in one [`ViewState`] value: search text, selected
//! category, layout mode and the product whose detail is open. Transitions are pure:
//! [`ViewState::reduce`] takes the old state and an [`Action`] and returns the new one.
//! Derived views ([`ViewState::visible`], [`ViewState::categories`]) are recomputed
//! from the catalog on every call; nothing derived is cached in the state.
//!
//! ```text
//!            Select(p)                 Select(q)
//!   ┌──────┐ ───────────▶ ┌─────────────┐ ──┐
//!   │ None │              │ Selected(p) │   │
//!   └──────┘ ◀─────────── └─────────────┘ ◀─┘
//!            Close | Dismiss
//! ```
//!
//! Layout is a separate two-way toggle and never touches the selection.

use crate::commands::categories::unique_categories;
use crate::commands::filter::filter_products;
use crate::model::{LayoutMode, Product, ALL_CATEGORIES};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    #[default]
    None,
    Selected(Product),
}

impl Selection {
    pub fn product(&self) -> Option<&Product> {
        match self {
            Selection::None => None,
            Selection::Selected(product) => Some(product),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetQuery(String),
    SetCategory(String),
    SetLayout(LayoutMode),
    ToggleLayout,
    /// Open a product's detail, from either layout.
    Select(Product),
    /// Explicit close of the detail.
    Close,
    /// Click outside the detail content.
    Dismiss,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub query: String,
    pub category: String,
    pub layout: LayoutMode,
    pub selection: Selection,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(LayoutMode::default())
    }
}

impl ViewState {
    pub fn new(layout: LayoutMode) -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
            layout,
            selection: Selection::None,
        }
    }

    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::SetQuery(query) => Self { query, ..self },
            Action::SetCategory(category) => Self { category, ..self },
            Action::SetLayout(layout) => Self { layout, ..self },
            Action::ToggleLayout => Self {
                layout: self.layout.toggled(),
                ..self
            },
            Action::Select(product) => Self {
                selection: Selection::Selected(product),
                ..self
            },
            Action::Close | Action::Dismiss => Self {
                selection: Selection::None,
                ..self
            },
        }
    }

    /// Products matching the current search and category, in catalog order.
    pub fn visible<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        filter_products(products, &self.query, &self.category)
    }

    /// Category selector options for the given catalog.
    pub fn categories(&self, products: &[Product]) -> Vec<String> {
        unique_categories(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rope() -> Product {
        Product::new("A1", "Rope 10mm", 1500.0, "Ropes")
    }

    fn chain() -> Product {
        Product::new("B2", "Chain", 3000.0, "Chains")
    }

    #[test]
    fn starts_with_no_selection_and_no_filters() {
        let state = ViewState::default();
        assert_eq!(state.selection, Selection::None);
        assert_eq!(state.category, ALL_CATEGORIES);
        assert!(state.query.is_empty());
        assert_eq!(state.layout, LayoutMode::Table);
    }

    #[test]
    fn select_opens_detail() {
        let state = ViewState::default().reduce(Action::Select(rope()));
        assert_eq!(state.selection, Selection::Selected(rope()));
        assert!(state.selection.is_open());
    }

    #[test]
    fn select_replaces_current_selection() {
        let state = ViewState::default()
            .reduce(Action::Select(rope()))
            .reduce(Action::Select(chain()));
        assert_eq!(state.selection.product(), Some(&chain()));
    }

    #[test]
    fn close_and_dismiss_return_to_no_selection_from_any_state() {
        for exit in [Action::Close, Action::Dismiss] {
            let from_open = ViewState::default()
                .reduce(Action::Select(rope()))
                .reduce(exit.clone());
            assert_eq!(from_open.selection, Selection::None);

            let from_closed = ViewState::default().reduce(exit);
            assert_eq!(from_closed.selection, Selection::None);
        }
    }

    #[test]
    fn reentrant_after_close() {
        let state = ViewState::default()
            .reduce(Action::Select(rope()))
            .reduce(Action::Close)
            .reduce(Action::Select(chain()));
        assert_eq!(state.selection.product(), Some(&chain()));
    }

    #[test]
    fn layout_toggle_leaves_selection_alone() {
        let state = ViewState::default()
            .reduce(Action::Select(rope()))
            .reduce(Action::ToggleLayout);
        assert_eq!(state.layout, LayoutMode::Cards);
        assert!(state.selection.is_open());

        let state = state.reduce(Action::SetLayout(LayoutMode::Cards));
        assert_eq!(state.layout, LayoutMode::Cards);
        let state = state.reduce(Action::ToggleLayout);
        assert_eq!(state.layout, LayoutMode::Table);
    }

    #[test]
    fn visible_tracks_query_and_category() {
        let products = vec![rope(), chain()];
        let state = ViewState::default().reduce(Action::SetQuery("rope".into()));
        assert_eq!(state.visible(&products), vec![&products[0]]);

        let state = state
            .reduce(Action::SetQuery(String::new()))
            .reduce(Action::SetCategory("Chains".into()));
        assert_eq!(state.visible(&products), vec![&products[1]]);
    }

    #[test]
    fn filters_do_not_close_the_detail() {
        let state = ViewState::default()
            .reduce(Action::Select(rope()))
            .reduce(Action::SetQuery("zz".into()));
        assert!(state.selection.is_open());
    }

    #[test]
    fn categories_derive_from_catalog() {
        let products = vec![rope(), chain()];
        assert_eq!(
            ViewState::default().categories(&products),
            vec!["Todas", "Chains", "Ropes"]
        );
    }
}
