//! The manual ("lazy cook") order builder.

use crate::cart::ValidationError;
use crate::catalog::Catalog;
use crate::model::{Category, MenuItem, MenuItemId, OrderItem};

/// A main dish takes at most this many meats. Further picks are ignored.
pub const MAX_MEATS: usize = 3;

/// Selections for a made-to-order main dish.
#[derive(Debug, Clone, Default)]
pub struct MainDishSelection {
    dish_type: Option<String>,
    meats: Vec<String>,
    toppings: Vec<String>,
    size: Option<String>,
}

impl MainDishSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_dish_type(&mut self, id: impl Into<String>) -> &mut Self {
        self.dish_type = Some(id.into());
        self
    }

    /// Adds or removes a meat. Returns whether it is selected afterwards.
    pub fn toggle_meat(&mut self, id: &str) -> bool {
        toggle(&mut self.meats, id, Some(MAX_MEATS))
    }

    pub fn toggle_topping(&mut self, id: &str) -> bool {
        toggle(&mut self.toppings, id, None)
    }

    pub fn select_size(&mut self, id: impl Into<String>) -> &mut Self {
        self.size = Some(id.into());
        self
    }

    pub fn meats(&self) -> &[String] {
        &self.meats
    }

    /// Prices and names the dish as a single cart line.
    ///
    /// Price is the dish base price plus the size and topping surcharges.
    pub fn build(&self, catalog: &Catalog, id: MenuItemId) -> Result<OrderItem, ValidationError> {
        let dish_id = self
            .dish_type
            .as_deref()
            .ok_or(ValidationError::MissingDishType)?;
        if self.meats.is_empty() {
            return Err(ValidationError::MissingMeat);
        }

        let dish = catalog
            .dish_type(dish_id)
            .ok_or_else(|| ValidationError::unknown("dish type", dish_id))?;
        let size = match self.size.as_deref() {
            Some(size_id) => catalog
                .size(size_id)
                .ok_or_else(|| ValidationError::unknown("size", size_id))?,
            None => catalog
                .default_size()
                .ok_or_else(|| ValidationError::unknown("size", "default"))?,
        };
        let meats = self
            .meats
            .iter()
            .map(|m| catalog.meat(m).ok_or_else(|| ValidationError::unknown("meat", m)))
            .collect::<Result<Vec<_>, _>>()?;
        let toppings = self
            .toppings
            .iter()
            .map(|t| catalog.topping(t).ok_or_else(|| ValidationError::unknown("topping", t)))
            .collect::<Result<Vec<_>, _>>()?;

        let price = toppings
            .iter()
            .fold(dish.price.saturating_add(size.price), |total, t| {
                total.saturating_add(t.price)
            });
        let meat_names = join_names(meats.iter().map(|m| m.name.as_str()));
        let name = format!("{} {} ({})", dish.name, meat_names, size.name);

        let note = (!toppings.is_empty())
            .then(|| format!("Add: {}", join_names(toppings.iter().map(|t| t.name.as_str()))));
        let description = match &note {
            Some(note) => format!("{} {}, {}", dish.name, meat_names, note),
            None => format!("{} {}", dish.name, meat_names),
        };

        let item = OrderItem::new(MenuItem::custom(id, name, price, description), 1);
        Ok(match note {
            Some(note) => item.with_customizations(note),
            None => item,
        })
    }
}

/// Selections for a snack with optional seasoning powder.
#[derive(Debug, Clone, Default)]
pub struct SnackSelection {
    snack: Option<String>,
    seasoning: Option<String>,
}

impl SnackSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_snack(&mut self, id: impl Into<String>) -> &mut Self {
        self.snack = Some(id.into());
        self
    }

    pub fn select_seasoning(&mut self, id: impl Into<String>) -> &mut Self {
        self.seasoning = Some(id.into());
        self
    }

    pub fn build(&self, catalog: &Catalog, id: MenuItemId) -> Result<OrderItem, ValidationError> {
        let snack_id = self.snack.as_deref().ok_or(ValidationError::MissingSnack)?;
        let snack = catalog
            .snack(snack_id)
            .ok_or_else(|| ValidationError::unknown("snack", snack_id))?;

        let name = match self.seasoning.as_deref() {
            Some(seasoning_id) => {
                let seasoning = catalog
                    .seasoning(seasoning_id)
                    .ok_or_else(|| ValidationError::unknown("seasoning", seasoning_id))?;
                format!("{} (seasoning: {})", snack.name, seasoning.name)
            }
            None => snack.name.clone(),
        };

        let mut menu_item = MenuItem::custom(id, name.clone(), snack.price, name);
        menu_item.category = Category::Appetizer;
        menu_item.image = snack.image.clone().unwrap_or_default();
        Ok(OrderItem::new(menu_item, 1))
    }
}

fn toggle(selected: &mut Vec<String>, id: &str, limit: Option<usize>) -> bool {
    if let Some(index) = selected.iter().position(|s| s == id) {
        selected.remove(index);
        return false;
    }
    if limit.is_some_and(|max| selected.len() >= max) {
        return false;
    }
    selected.push(id.to_string());
    true
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}
