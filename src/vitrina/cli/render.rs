//! # Rendering Module
//!
//! Styled terminal output through minijinja templates and the `style` filter.
//!
//! Layout calculations (width, truncation, padding) stay in Rust because they require
//! Unicode-aware processing. Templates handle presentation concerns:
//! - Style selection through style-name variables (selected row, message level)
//! - Empty states and optional lines
//!
//! Every `render_*` function takes `use_color`: `None` follows terminal detection,
//! `Some(_)` forces it (tests and `--no-color`).

use super::styles::{names, VITRINA_THEME};
use super::templates::{
    CARDS_TEMPLATE, CATEGORIES_TEMPLATE, DETAIL_TEMPLATE, HEADER_TEMPLATE, MESSAGES_TEMPLATE,
    TABLE_TEMPLATE,
};
use console::Term;
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use vitrina::api::{CmdMessage, MessageLevel};
use vitrina::display::DisplayProduct;
use vitrina::media::display_image;
use vitrina::model::{LayoutMode, ALL_CATEGORIES};

/// Configuration for list rendering.
pub const LINE_WIDTH: usize = 100;
pub const CARD_WIDTH: usize = 56;
pub const EMPTY_MESSAGE: &str = "No se encontraron productos.";
const COLUMN_GAP: &str = "  ";
const CODE_MAX_WIDTH: usize = 14;
const CATEGORY_MAX_WIDTH: usize = 18;
const MIN_NAME_WIDTH: usize = 12;
const DETAIL_RULE_WIDTH: usize = 60;

/// One screen of products: header plus the table or card grid.
pub struct Listing<'a> {
    pub company: &'a str,
    pub products: &'a [DisplayProduct],
    pub total: usize,
    pub query: &'a str,
    pub category: &'a str,
    pub layout: LayoutMode,
    /// Code of the product whose detail is open, highlighted in the listing.
    pub selected: Option<&'a str>,
    /// Local directory mirroring the site's public root, for image existence checks.
    pub public_dir: Option<&'a Path>,
}

#[derive(Serialize)]
struct HeaderData {
    company: String,
    shown: usize,
    total: usize,
    filters: String,
}

#[derive(Serialize)]
struct TableRow {
    code: String,
    code_style: String,
    name: String,
    category: String,
    price: String,
}

#[derive(Serialize)]
struct TableData {
    empty: bool,
    empty_message: String,
    header: String,
    rows: Vec<TableRow>,
}

#[derive(Serialize)]
struct CardData {
    top: String,
    bottom: String,
    border_style: String,
    heading: String,
    name: String,
    price: String,
    image: String,
}

#[derive(Serialize)]
struct CardsData {
    empty: bool,
    empty_message: String,
    cards: Vec<CardData>,
}

#[derive(Serialize)]
struct DetailData {
    rule: String,
    closable: bool,
    category: String,
    name: String,
    price: String,
    code: String,
    image: String,
    link: String,
}

#[derive(Serialize)]
struct CategoryEntry {
    marker: String,
    label: String,
    style: String,
}

#[derive(Serialize)]
struct CategoriesData {
    categories: Vec<CategoryEntry>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn render_with<T: Serialize>(
    template: &str,
    data: &T,
    use_color: Option<bool>,
) -> Result<String, Error> {
    let use_color = use_color.unwrap_or_else(|| Term::stdout().features().colors_supported());
    let theme = &*VITRINA_THEME;

    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });
    env.render_str(template, data)
}

/// Renders the header and the products in the listing's layout.
pub fn render_listing(listing: &Listing<'_>, use_color: Option<bool>) -> String {
    let mut output = render_header(listing, use_color);
    output.push_str(&match listing.layout {
        LayoutMode::Table => render_table(listing, use_color),
        LayoutMode::Cards => render_cards(listing, use_color),
    });
    output
}

fn render_header(listing: &Listing<'_>, use_color: Option<bool>) -> String {
    let data = HeaderData {
        company: listing.company.to_string(),
        shown: listing.products.len(),
        total: listing.total,
        filters: filters_line(listing.query, listing.category),
    };

    render_with(HEADER_TEMPLATE, &data, use_color).unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn filters_line(query: &str, category: &str) -> String {
    let mut parts = Vec::new();
    if !query.trim().is_empty() {
        parts.push(format!("Búsqueda: «{}»", query.trim()));
    }
    if category != ALL_CATEGORIES {
        parts.push(format!("Categoría: {}", category));
    }
    parts.join(" · ")
}

fn render_table(listing: &Listing<'_>, use_color: Option<bool>) -> String {
    if listing.products.is_empty() {
        let data = TableData {
            empty: true,
            empty_message: EMPTY_MESSAGE.to_string(),
            header: String::new(),
            rows: vec![],
        };
        return render_with(TABLE_TEMPLATE, &data, use_color)
            .unwrap_or_else(|_| format!("{}\n", EMPTY_MESSAGE));
    }

    let products = listing.products;
    let code_w = column_width(
        "Código",
        products.iter().map(|dp| dp.product.code.as_str()),
        CODE_MAX_WIDTH,
    );
    let category_w = column_width(
        "Categoría",
        products.iter().map(|dp| dp.product.category.as_str()),
        CATEGORY_MAX_WIDTH,
    );
    let price_w = column_width(
        "Precio",
        products.iter().map(|dp| dp.price.as_str()),
        usize::MAX,
    );
    let fixed = code_w + category_w + price_w + 3 * COLUMN_GAP.width();
    let name_w = LINE_WIDTH.saturating_sub(fixed).max(MIN_NAME_WIDTH);

    let header = format!(
        "{}{gap}{}{gap}{}{gap}{}",
        pad_right("Código", code_w),
        pad_right("Producto", name_w),
        pad_right("Categoría", category_w),
        pad_left("Precio", price_w),
        gap = COLUMN_GAP,
    );

    let rows = products
        .iter()
        .map(|dp| {
            let code_style = if listing.selected == Some(dp.product.code.as_str()) {
                names::SELECTED
            } else {
                names::CODE
            };
            TableRow {
                code: format!("{}{}", pad_right(&dp.product.code, code_w), COLUMN_GAP),
                code_style: code_style.to_string(),
                name: format!("{}{}", pad_right(&dp.product.name, name_w), COLUMN_GAP),
                category: format!(
                    "{}{}",
                    pad_right(&dp.product.category, category_w),
                    COLUMN_GAP
                ),
                price: pad_left(&dp.price, price_w),
            }
        })
        .collect();

    let data = TableData {
        empty: false,
        empty_message: EMPTY_MESSAGE.to_string(),
        header,
        rows,
    };

    render_with(TABLE_TEMPLATE, &data, use_color).unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn render_cards(listing: &Listing<'_>, use_color: Option<bool>) -> String {
    let inner = CARD_WIDTH.saturating_sub(4);
    let rule = "─".repeat(CARD_WIDTH.saturating_sub(2));

    let cards: Vec<CardData> = listing
        .products
        .iter()
        .map(|dp| {
            let border_style = if listing.selected == Some(dp.product.code.as_str()) {
                names::SELECTED
            } else {
                names::BORDER
            };
            let heading = if dp.product.category.is_empty() {
                dp.product.code.clone()
            } else {
                format!("{} · {}", dp.product.category, dp.product.code)
            };
            CardData {
                top: format!("┌{}┐", rule),
                bottom: format!("└{}┘", rule),
                border_style: border_style.to_string(),
                heading: pad_right(&heading, inner),
                name: pad_right(&dp.product.name, inner),
                price: pad_right(&dp.price, inner),
                image: pad_right(&image_for(dp, listing.public_dir), inner),
            }
        })
        .collect();

    let data = CardsData {
        empty: cards.is_empty(),
        empty_message: EMPTY_MESSAGE.to_string(),
        cards,
    };

    render_with(CARDS_TEMPLATE, &data, use_color).unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders a product's detail block. `closable` adds the close hint used while browsing.
pub fn render_detail(
    product: &DisplayProduct,
    public_dir: Option<&Path>,
    closable: bool,
    use_color: Option<bool>,
) -> String {
    let data = DetailData {
        rule: "─".repeat(DETAIL_RULE_WIDTH),
        closable,
        category: product.product.category.clone(),
        name: product.product.name.clone(),
        price: product.price.clone(),
        code: product.product.code.clone(),
        image: image_for(product, public_dir),
        link: product.contact_link.clone(),
    };

    render_with(DETAIL_TEMPLATE, &data, use_color).unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders the category options, marking `current` when given.
pub fn render_categories(
    categories: &[String],
    current: Option<&str>,
    use_color: Option<bool>,
) -> String {
    let entries = categories
        .iter()
        .map(|label| {
            let is_current = current == Some(label.as_str());
            let marker = match current {
                None => "",
                Some(_) if is_current => "● ",
                Some(_) => "  ",
            };
            let style = if is_current {
                names::SELECTED
            } else if label == ALL_CATEGORIES {
                names::TITLE
            } else {
                names::INFO
            };
            CategoryEntry {
                marker: marker.to_string(),
                label: label.clone(),
                style: style.to_string(),
            }
        })
        .collect();

    let data = CategoriesData {
        categories: entries,
    };

    render_with(CATEGORIES_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| categories.iter().map(|c| format!("{}\n", c)).collect())
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let message_data: Vec<MessageData> = messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            };
            MessageData {
                content: msg.content.clone(),
                style: style.to_string(),
            }
        })
        .collect();

    let data = MessagesData {
        messages: message_data,
    };

    render_with(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

/// Prints command messages to stdout using the template system.
pub fn print_messages(messages: &[CmdMessage], use_color: Option<bool>) {
    let output = render_messages(messages, use_color);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// The image a display would end up showing, after the one-shot fallback.
fn image_for(product: &DisplayProduct, public_dir: Option<&Path>) -> String {
    display_image(&product.product, |url| image_loads(url, public_dir))
}

/// Remote URLs and catalogs without a public dir cannot be checked and count as
/// loaded. Site-relative paths are looked up under the public dir.
fn image_loads(url: &str, public_dir: Option<&Path>) -> bool {
    if url.contains("://") {
        return true;
    }
    match public_dir {
        Some(dir) => dir.join(url.trim_start_matches('/')).is_file(),
        None => true,
    }
}

fn column_width<'a, I>(header: &str, cells: I, max: usize) -> usize
where
    I: Iterator<Item = &'a str>,
{
    cells
        .map(UnicodeWidthStr::width)
        .chain(std::iter::once(header.width()))
        .max()
        .unwrap_or(0)
        .min(max)
}

fn pad_right(s: &str, width: usize) -> String {
    let text = truncate_to_width(s, width);
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn pad_left(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(padding), s)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    if max_width > 0 {
        result.push('…');
    }
    result
}
