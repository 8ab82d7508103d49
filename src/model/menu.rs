use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of a menu item, e.g. `pad-thai` or a generated `custom-...` id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub String);

impl MenuItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MenuItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Main,
    Appetizer,
    Dessert,
    Drink,
}

/// Immutable reference data for something on the menu.
///
/// Custom dishes from the cooking game and the manual builder are also
/// expressed as a `MenuItem` so every order line has the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    /// Whole baht.
    pub price: u32,
    #[serde(default)]
    pub image: String,
    pub description: String,
    pub category: Category,
    /// 0 (mild) to 3.
    pub spicy_level: u8,
    pub is_available: bool,
}

impl MenuItem {
    pub const MAX_SPICY_LEVEL: u8 = 3;

    /// A main-category item without an image, as produced by the order builders.
    pub fn custom(
        id: MenuItemId,
        name: impl Into<String>,
        price: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: String::new(),
            description: description.into(),
            category: Category::Main,
            spicy_level: 0,
            is_available: true,
        }
    }
}
