//! Generate randomized sample recipe fixtures.
//!
//! Recipes are built from an explicit, optionally seeded random source and
//! written either as a JSON array or as a CommonJS module
//! (`module.exports = [...]`).
//!
//! Placeholder identifiers: `foodId` (`food_id` in the flat schema) is the
//! index of a food in the sample food list, standing in for the
//! server-generated id that cannot be known beforehand. `unitIds`
//! (`unit_id`) index into [`units::UNIT_TYPES`].

pub mod builder;
pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod units;
pub mod validate;
pub mod writer;

use std::path::Path;

pub use builder::{FixtureBuilder, RecipeFixtures};
pub use config::{Overrides, Settings};
pub use error::FixtureError;
pub use generator::{Limits, RecipeGenerator};
pub use model::{
    Fixture, FlatIngredient, FlatRecipe, FlatSection, Ingredient, Recipe, Schema, Section, Yield,
};
pub use writer::OutputFormat;

/// Generate the default rich collection (26 recipes)
///
/// # Example
/// ```
/// let recipes = recipe_fixtures::generate_recipes(Some(3));
/// assert_eq!(recipes.len(), 26);
/// assert_eq!(recipes[0].title, "Sample Recipe #0");
/// ```
pub fn generate_recipes(seed: Option<u64>) -> Vec<Recipe> {
    RecipeGenerator::seeded(seed, Limits::default()).recipes(Schema::Rich.default_recipe_count())
}

/// Read a fixture file in either format and validate every recipe in it
pub fn check_fixture_file(
    path: &Path,
    schema: Option<Schema>,
    unit_types: u32,
) -> Result<Fixture, FixtureError> {
    let fixture = writer::read_fixture(path, schema)?;
    validate::validate_fixture(&fixture, unit_types)?;
    Ok(fixture)
}
