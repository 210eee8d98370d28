//! Checks a fixture against the rules the consuming recipe model enforces.
//!
//! Parsing already rejects a record carrying both `serves` and `makes` (or
//! neither) and an unknown ingredient form; what remains are the non-empty
//! and positive-number rules plus the unit id range.

use log::info;

use crate::error::FixtureError;
use crate::model::{FlatRecipe, FlatSection, Fixture, Ingredient, Recipe, Section, Yield};
use crate::units::unit_name;

type Check = Result<(), String>;

fn non_empty(value: &str, what: &str) -> Check {
    if value.is_empty() {
        return Err(format!("{} must not be empty", what));
    }
    Ok(())
}

fn positive(value: u32, what: &str) -> Check {
    if value == 0 {
        return Err(format!("{} must be greater than zero", what));
    }
    Ok(())
}

fn check_yield(yields: &Yield) -> Check {
    match yields {
        Yield::Serves(n) => positive(*n, "serves"),
        Yield::Makes(n) => positive(*n, "makes"),
    }
}

fn check_unit_id(unit_id: u32, unit_types: u32) -> Check {
    if unit_id >= unit_types {
        let max = unit_types.saturating_sub(1);
        let max = match unit_name(max) {
            Some(name) => format!("{} ({})", max, name),
            None => max.to_string(),
        };
        return Err(format!("unit id {} is out of range (max {})", unit_id, max));
    }
    Ok(())
}

fn check_method(method: &[String]) -> Check {
    if method.is_empty() {
        return Err("There must be at least one step in the method".to_string());
    }
    method
        .iter()
        .try_for_each(|step| non_empty(step, "method step"))
}

fn check_heading(heading: &Option<String>) -> Check {
    match heading {
        Some(heading) => non_empty(heading, "section heading"),
        None => Ok(()),
    }
}

fn check_ingredient(ingredient: &Ingredient, unit_types: u32) -> Check {
    match ingredient {
        Ingredient::Quantified {
            amount,
            unit_ids,
            additional_desc,
            ..
        } => {
            positive(*amount, "ingredient amount")?;
            if unit_ids.is_empty() {
                return Err(
                    "There must be at least one unit id in every Quantified ingredient"
                        .to_string(),
                );
            }
            unit_ids
                .iter()
                .try_for_each(|id| check_unit_id(*id, unit_types))?;
            match additional_desc {
                Some(desc) => non_empty(desc, "additionalDesc"),
                None => Ok(()),
            }
        }
        Ingredient::FreeText { description } => non_empty(description, "description"),
    }
}

fn check_section(section: &Section, unit_types: u32) -> Check {
    check_heading(&section.heading)?;
    if section.ingredients.is_empty() {
        return Err("There must be at least one ingredient in every ingredient section".to_string());
    }
    section
        .ingredients
        .iter()
        .try_for_each(|ingredient| check_ingredient(ingredient, unit_types))
}

fn check_flat_section(section: &FlatSection, unit_types: u32) -> Check {
    check_heading(&section.heading)?;
    if section.ingredients.is_empty() {
        return Err("There must be at least one ingredient in every ingredient section".to_string());
    }
    section.ingredients.iter().try_for_each(|ingredient| {
        positive(ingredient.amount, "ingredient amount")?;
        check_unit_id(ingredient.unit_id, unit_types)
    })
}

/// Check one rich recipe
pub fn check_recipe(recipe: &Recipe, unit_types: u32) -> Check {
    non_empty(&recipe.title, "title")?;
    check_yield(&recipe.yields)?;
    positive(recipe.prep_time, "prepTime")?;
    positive(recipe.cook_time, "cookTime")?;
    if recipe.ingredient_sections.is_empty() {
        return Err("There must be at least one ingredient section".to_string());
    }
    recipe
        .ingredient_sections
        .iter()
        .try_for_each(|section| check_section(section, unit_types))?;
    check_method(&recipe.method)?;
    non_empty(&recipe.reference_url, "referenceUrl")?;
    non_empty(&recipe.image_url, "imageUrl")
}

/// Check one flat recipe
pub fn check_flat_recipe(recipe: &FlatRecipe, unit_types: u32) -> Check {
    non_empty(&recipe.title, "title")?;
    check_yield(&recipe.yields)?;
    positive(recipe.prep_time, "prep_time")?;
    positive(recipe.cook_time, "cook_time")?;
    if recipe.ingredient_sections.is_empty() {
        return Err("There must be at least one ingredient section".to_string());
    }
    recipe
        .ingredient_sections
        .iter()
        .try_for_each(|section| check_flat_section(section, unit_types))?;
    check_method(&recipe.method)?;
    non_empty(&recipe.reference_url, "reference_url")
}

/// Validate every recipe in a fixture, stopping at the first violation
pub fn validate_fixture(fixture: &Fixture, unit_types: u32) -> Result<(), FixtureError> {
    let checked = match fixture {
        Fixture::Rich(recipes) => recipes.iter().enumerate().try_for_each(|(i, recipe)| {
            check_recipe(recipe, unit_types).map_err(|message| (i, message))
        }),
        Fixture::Flat(recipes) => recipes.iter().enumerate().try_for_each(|(i, recipe)| {
            check_flat_recipe(recipe, unit_types).map_err(|message| (i, message))
        }),
    };
    checked.map_err(|(recipe, message)| FixtureError::Validation { recipe, message })?;

    info!("All {} {} recipes are valid", fixture.len(), fixture.schema());
    Ok(())
}
