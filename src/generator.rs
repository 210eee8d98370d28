use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{
    FlatIngredient, FlatRecipe, FlatSection, Fixture, Ingredient, Recipe, Schema, Section, Yield,
    ADDITIONAL_DESCRIPTION, FREE_TEXT_DESCRIPTION, IMAGE_URL, METHOD_STEPS, REFERENCE_URL,
};
use crate::units::{FOOD_PAGE_SIZE, NUM_UNIT_TYPES};

/// Bounds for the placeholder identifiers drawn into each ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Unit ids are drawn from `0..unit_types`
    pub unit_types: u32,
    /// Food ids are drawn from `0..food_page_size`
    pub food_page_size: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            unit_types: NUM_UNIT_TYPES,
            food_page_size: FOOD_PAGE_SIZE,
        }
    }
}

/// Builds sample recipes from an explicit random source.
///
/// Every draw goes through the owned `rng`, so two generators created from
/// the same seed produce identical collections.
pub struct RecipeGenerator<R: Rng> {
    rng: R,
    limits: Limits,
}

impl RecipeGenerator<StdRng> {
    /// Create a generator over `StdRng`, seeded from `seed` or from OS entropy
    pub fn seeded(seed: Option<u64>, limits: Limits) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng, limits)
    }
}

impl<R: Rng> RecipeGenerator<R> {
    /// `limits` must be non-zero on both axes; the builder API checks this.
    pub fn new(rng: R, limits: Limits) -> Self {
        Self { rng, limits }
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn unit_id(&mut self) -> u32 {
        self.rng.gen_range(0..self.limits.unit_types)
    }

    fn food_id(&mut self) -> u32 {
        self.rng.gen_range(0..self.limits.food_page_size)
    }

    fn yields(&mut self) -> Yield {
        let serves = self.coin();
        let quantity = self.rng.gen_range(3..=10);
        if serves {
            Yield::Serves(quantity)
        } else {
            Yield::Makes(quantity)
        }
    }

    pub fn ingredient(&mut self) -> Ingredient {
        if self.coin() {
            let amount = self.rng.gen_range(3..=10);
            let unit_count = self.rng.gen_range(1..=2);
            let unit_ids = (0..unit_count).map(|_| self.unit_id()).collect();
            let food_id = self.food_id();
            let additional_desc = self.coin().then(|| ADDITIONAL_DESCRIPTION.to_string());
            Ingredient::Quantified {
                amount,
                unit_ids,
                food_id,
                additional_desc,
            }
        } else {
            Ingredient::FreeText {
                description: FREE_TEXT_DESCRIPTION.to_string(),
            }
        }
    }

    pub fn section(&mut self, index: usize) -> Section {
        let heading = self.heading(index);
        let count = self.rng.gen_range(5..=10);
        let ingredients = (0..count).map(|_| self.ingredient()).collect();
        Section {
            heading,
            ingredients,
        }
    }

    pub fn recipe(&mut self, index: usize) -> Recipe {
        let yields = self.yields();
        let prep_time = self.rng.gen_range(10..=30);
        let cook_time = self.rng.gen_range(5..=40);
        let count = self.rng.gen_range(2..=3);
        let ingredient_sections: Vec<Section> = (0..count).map(|i| self.section(i)).collect();
        debug!(
            "Generated recipe #{} with {} sections",
            index,
            ingredient_sections.len()
        );

        Recipe {
            title: title(index),
            yields,
            prep_time,
            cook_time,
            ingredient_sections,
            method: method(),
            reference_url: REFERENCE_URL.to_string(),
            image_url: IMAGE_URL.to_string(),
        }
    }

    /// Generate `count` rich recipes, indexed `0..count`
    pub fn recipes(&mut self, count: usize) -> Vec<Recipe> {
        (0..count).map(|i| self.recipe(i)).collect()
    }

    pub fn flat_ingredient(&mut self) -> FlatIngredient {
        FlatIngredient {
            amount: self.rng.gen_range(3..=10),
            unit_id: self.unit_id(),
            food_id: self.food_id(),
        }
    }

    pub fn flat_section(&mut self, index: usize) -> FlatSection {
        let heading = self.heading(index);
        let count = self.rng.gen_range(5..=10);
        let ingredients = (0..count).map(|_| self.flat_ingredient()).collect();
        FlatSection {
            heading,
            ingredients,
        }
    }

    pub fn flat_recipe(&mut self, index: usize) -> FlatRecipe {
        let yields = self.yields();
        let prep_time = self.rng.gen_range(10..=30);
        let cook_time = self.rng.gen_range(5..=40);
        let count = self.rng.gen_range(2..=3);
        let ingredient_sections: Vec<FlatSection> =
            (0..count).map(|i| self.flat_section(i)).collect();
        debug!(
            "Generated flat recipe #{} with {} sections",
            index,
            ingredient_sections.len()
        );

        FlatRecipe {
            title: title(index),
            yields,
            prep_time,
            cook_time,
            ingredient_sections,
            method: method(),
            reference_url: REFERENCE_URL.to_string(),
        }
    }

    /// Generate `count` flat recipes, indexed `0..count`
    pub fn flat_recipes(&mut self, count: usize) -> Vec<FlatRecipe> {
        (0..count).map(|i| self.flat_recipe(i)).collect()
    }

    /// Generate a whole collection in the given schema
    pub fn fixture(&mut self, schema: Schema, count: usize) -> Fixture {
        match schema {
            Schema::Rich => Fixture::Rich(self.recipes(count)),
            Schema::Flat => Fixture::Flat(self.flat_recipes(count)),
        }
    }

    fn heading(&mut self, index: usize) -> Option<String> {
        self.coin().then(|| format!("Section #{}", index))
    }
}

fn title(index: usize) -> String {
    format!("Sample Recipe #{}", index)
}

fn method() -> Vec<String> {
    METHOD_STEPS.iter().map(|step| step.to_string()).collect()
}
