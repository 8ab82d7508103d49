//! The cooking mini-game: pick ingredients, get a named dish.

use crate::cart::ValidationError;
use crate::catalog::{Catalog, IngredientCategory};
use crate::model::{MenuItem, MenuItemId, OrderItem};
use rand::seq::SliceRandom;
use rand::Rng;

/// Every game dish costs the same, whatever went into the pan.
pub const GAME_DISH_PRICE: u32 = 150;

pub const STYLE_WORDS: [&str; 5] = ["Stir-fried", "Spicy", "Sweet", "Crispy", "Thai"];

const MYSTERY_DISH: &str = "Mystery Dish";

#[derive(Debug, Clone, Default)]
pub struct CookingGame {
    selected: Vec<String>,
}

impl CookingGame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or removes an ingredient. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, catalog: &Catalog, ingredient_id: &str) -> Result<bool, ValidationError> {
        if catalog.ingredient(ingredient_id).is_none() {
            return Err(ValidationError::unknown("ingredient", ingredient_id));
        }
        match self.selected.iter().position(|id| id == ingredient_id) {
            Some(index) => {
                self.selected.remove(index);
                Ok(false)
            }
            None => {
                self.selected.push(ingredient_id.to_string());
                Ok(true)
            }
        }
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Names the dish from the first protein and first vegetable picked.
    ///
    /// Without either, the dish is a "Mystery Dish".
    pub fn dish_name<R: Rng + ?Sized>(&self, catalog: &Catalog, rng: &mut R) -> String {
        let first_of = |category: IngredientCategory| {
            self.selected
                .iter()
                .filter_map(|id| catalog.ingredient(id))
                .find(|ingredient| ingredient.category == category)
        };
        let protein = first_of(IngredientCategory::Protein);
        let vegetable = first_of(IngredientCategory::Vegetable);
        if protein.is_none() && vegetable.is_none() {
            return MYSTERY_DISH.to_string();
        }

        let style = STYLE_WORDS.choose(rng).copied().unwrap_or("Thai");
        let mut name = style.to_string();
        if let Some(protein) = protein {
            name.push(' ');
            name.push_str(&protein.name);
        }
        if let Some(vegetable) = vegetable {
            name.push_str(" with ");
            name.push_str(&vegetable.name);
        }
        name
    }

    /// Finishes cooking and returns the dish as a single cart line.
    pub fn finish<R: Rng + ?Sized>(
        &self,
        catalog: &Catalog,
        rng: &mut R,
        id: MenuItemId,
    ) -> Result<OrderItem, ValidationError> {
        if self.selected.is_empty() {
            return Err(ValidationError::NoIngredients);
        }
        let name = self.dish_name(catalog, rng);
        let ingredients = self
            .selected
            .iter()
            .filter_map(|id| catalog.ingredient(id))
            .map(|ingredient| ingredient.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let mut dish = MenuItem::custom(
            id,
            name,
            GAME_DISH_PRICE,
            format!("Custom dish with {ingredients}"),
        );
        dish.spicy_level = 1;
        Ok(OrderItem::new(dish, 1))
    }
}
