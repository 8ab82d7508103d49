//! # Menu Catalog
//!
//! Immutable reference data: the regular menu, the cooking-game ingredients
//! and the options offered by the manual order builder.
//!
//! The built-in catalog is compiled into the binary from
//! `fixtures/catalog.json` and validated once at startup. It is shared as an
//! `Arc<Catalog>` and never mutated afterwards.

mod error;

pub use error::CatalogError;

use crate::model::{MenuItem, MenuItemId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::info;

const BUILTIN_CATALOG: &str = include_str!("../../fixtures/catalog.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    Protein,
    Vegetable,
    Sauce,
    Spice,
}

/// Something the player can drop into the pan in the cooking game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub category: IngredientCategory,
}

/// A builder option with an optional surcharge: dish types carry their base
/// price, sizes and toppings carry what they add on top. Snacks also carry
/// the picture shown on the order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedOption {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub menu: Vec<MenuItem>,
    pub ingredients: Vec<Ingredient>,
    pub dish_types: Vec<PricedOption>,
    pub meats: Vec<PricedOption>,
    pub toppings: Vec<PricedOption>,
    pub sizes: Vec<PricedOption>,
    pub snacks: Vec<PricedOption>,
    pub seasonings: Vec<PricedOption>,
}

impl Catalog {
    /// Loads the catalog embedded at compile time.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parses and validates a catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        info!(
            menu = catalog.menu.len(),
            ingredients = catalog.ingredients.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.menu.is_empty() {
            return Err(CatalogError::MissingSection("menu items"));
        }
        if self.sizes.is_empty() {
            return Err(CatalogError::MissingSection("sizes"));
        }

        for item in &self.menu {
            if item.spicy_level > MenuItem::MAX_SPICY_LEVEL {
                return Err(CatalogError::InvalidSpiceLevel {
                    id: item.id.to_string(),
                    level: item.spicy_level,
                });
            }
        }

        ensure_unique("menu item", self.menu.iter().map(|item| item.id.as_str()))?;
        ensure_unique("ingredient", self.ingredients.iter().map(|i| i.id.as_str()))?;
        for (kind, options) in [
            ("dish type", &self.dish_types),
            ("meat", &self.meats),
            ("topping", &self.toppings),
            ("size", &self.sizes),
            ("snack", &self.snacks),
            ("seasoning", &self.seasonings),
        ] {
            ensure_unique(kind, options.iter().map(|o| o.id.as_str()))?;
        }
        Ok(())
    }

    pub fn menu_item(&self, id: &MenuItemId) -> Option<&MenuItem> {
        self.menu.iter().find(|item| &item.id == id)
    }

    /// Menu items that can currently be ordered.
    pub fn available_menu(&self) -> impl Iterator<Item = &MenuItem> {
        self.menu.iter().filter(|item| item.is_available)
    }

    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    pub fn dish_type(&self, id: &str) -> Option<&PricedOption> {
        find_option(&self.dish_types, id)
    }

    pub fn meat(&self, id: &str) -> Option<&PricedOption> {
        find_option(&self.meats, id)
    }

    pub fn topping(&self, id: &str) -> Option<&PricedOption> {
        find_option(&self.toppings, id)
    }

    pub fn size(&self, id: &str) -> Option<&PricedOption> {
        find_option(&self.sizes, id)
    }

    /// The first size listed, used when the customer picks none.
    pub fn default_size(&self) -> Option<&PricedOption> {
        self.sizes.first()
    }

    pub fn snack(&self, id: &str) -> Option<&PricedOption> {
        find_option(&self.snacks, id)
    }

    pub fn seasoning(&self, id: &str) -> Option<&PricedOption> {
        find_option(&self.seasonings, id)
    }
}

fn find_option<'a>(options: &'a [PricedOption], id: &str) -> Option<&'a PricedOption> {
    options.iter().find(|option| option.id == id)
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.menu.len(), 8);
        assert_eq!(catalog.ingredients.len(), 14);

        let pad_thai = catalog.menu_item(&MenuItemId::from("pad-thai")).unwrap();
        assert_eq!(pad_thai.price, 120);
        assert_eq!(pad_thai.category, Category::Main);
        assert_eq!(pad_thai.spicy_level, 1);

        assert_eq!(catalog.dish_type("chili-salt").unwrap().price, 60);
        assert_eq!(catalog.default_size().unwrap().id, "regular");
        assert_eq!(catalog.size("extra-special").unwrap().price, 20);
        assert!(catalog.seasoning("wasabi").is_some());
        assert!(catalog.menu_item(&MenuItemId::from("burger")).is_none());
    }

    #[test]
    fn test_duplicate_menu_id_rejected() {
        let mut catalog = Catalog::builtin().unwrap();
        let copy = catalog.menu[0].clone();
        catalog.menu.push(copy);
        let json = serde_json::to_string(&catalog).unwrap();

        match Catalog::from_json(&json) {
            Err(CatalogError::DuplicateId { kind, id }) => {
                assert_eq!(kind, "menu item");
                assert_eq!(id, "pad-thai");
            }
            other => panic!("expected DuplicateId, got {other:?}"),
        }
    }

    #[test]
    fn test_spice_level_bounded() {
        let mut catalog = Catalog::builtin().unwrap();
        catalog.menu[2].spicy_level = 5;
        let json = serde_json::to_string(&catalog).unwrap();

        assert!(matches!(
            Catalog::from_json(&json),
            Err(CatalogError::InvalidSpiceLevel { level: 5, .. })
        ));
    }

    #[test]
    fn test_available_menu_skips_sold_out_items() {
        let mut catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.available_menu().count(), catalog.menu.len());

        catalog.menu[1].is_available = false;
        let json = serde_json::to_string(&catalog).unwrap();
        let catalog = Catalog::from_json(&json).unwrap();

        let ids: Vec<&str> = catalog.available_menu().map(|item| item.id.as_str()).collect();
        assert_eq!(ids.len(), 7);
        assert!(!ids.contains(&"fried-rice"));
        assert!(catalog.menu_item(&MenuItemId::from("fried-rice")).is_some());
    }

    #[test]
    fn test_snacks_carry_images() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            catalog.snack("french-fries").unwrap().image.as_deref(),
            Some("french-fries.jpg")
        );
        assert_eq!(catalog.topping("fried-egg").unwrap().image, None);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
