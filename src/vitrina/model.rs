use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label grouping products with no category.
pub const OTHER_CATEGORY: &str = "Otros";

/// Category selector value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "Todas";

/// A catalog entry. Only `code` is required in the source data; everything else
/// falls back to an empty value, whether the key is missing or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price_ars: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Product {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        price_ars: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price_ars,
            category: category.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Category as used for grouping: empty becomes [`OTHER_CATEGORY`].
    pub fn category_label(&self) -> &str {
        if self.category.is_empty() {
            OTHER_CATEGORY
        } else {
            &self.category
        }
    }
}

/// How the filtered list is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Table,
    Cards,
}

impl LayoutMode {
    pub fn toggled(self) -> Self {
        match self {
            LayoutMode::Table => LayoutMode::Cards,
            LayoutMode::Cards => LayoutMode::Table,
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutMode::Table => write!(f, "table"),
            LayoutMode::Cards => write!(f, "cards"),
        }
    }
}

impl FromStr for LayoutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" | "tabla" => Ok(LayoutMode::Table),
            "cards" | "card" => Ok(LayoutMode::Cards),
            other => Err(format!("Unknown layout: {}", other)),
        }
    }
}
