use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed three-step method every sample recipe carries
pub const METHOD_STEPS: [&str; 3] = [
    "Do the first thing",
    "Then the second",
    "The third usually follows",
];

pub const ADDITIONAL_DESCRIPTION: &str = "additional description";
pub const FREE_TEXT_DESCRIPTION: &str = "Free text description";
pub const REFERENCE_URL: &str = "https://example_reference.com";
pub const IMAGE_URL: &str = "https://example_server.com/example_image.jpg";

/// Which recipe schema a fixture follows
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Schema {
    /// Quantified and free-text ingredients, camelCase keys
    #[default]
    Rich,
    /// Flat quantified ingredients only, snake_case keys
    Flat,
}

impl Schema {
    /// Number of recipes generated when no count is configured
    pub fn default_recipe_count(&self) -> usize {
        match self {
            Schema::Rich => 26,
            Schema::Flat => 10,
        }
    }

    /// Name of the placeholder food identifier field in this schema
    pub fn food_id_field(&self) -> &'static str {
        match self {
            Schema::Rich => "foodId",
            Schema::Flat => "food_id",
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::Rich => write!(f, "rich"),
            Schema::Flat => write!(f, "flat"),
        }
    }
}

/// How much a recipe produces. Serialized as exactly one of `serves` / `makes`;
/// a record carrying both keys, or neither, is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "RawYield", try_from = "RawYield")]
pub enum Yield {
    Serves(u32),
    Makes(u32),
}

impl Yield {
    pub fn quantity(&self) -> u32 {
        match self {
            Yield::Serves(n) | Yield::Makes(n) => *n,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawYield {
    #[serde(skip_serializing_if = "Option::is_none")]
    serves: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    makes: Option<u32>,
}

impl From<Yield> for RawYield {
    fn from(yields: Yield) -> Self {
        match yields {
            Yield::Serves(n) => RawYield {
                serves: Some(n),
                makes: None,
            },
            Yield::Makes(n) => RawYield {
                serves: None,
                makes: Some(n),
            },
        }
    }
}

impl TryFrom<RawYield> for Yield {
    type Error = &'static str;

    fn try_from(raw: RawYield) -> Result<Self, Self::Error> {
        match (raw.serves, raw.makes) {
            (Some(n), None) => Ok(Yield::Serves(n)),
            (None, Some(n)) => Ok(Yield::Makes(n)),
            (Some(_), Some(_)) => Err("serves should be defined iff makes is undefined"),
            (None, None) => Err("one of serves or makes must be defined"),
        }
    }
}

/// One entry of a rich recipe's ingredient list.
///
/// On the wire the form is carried by an integer `ingredientType`
/// discriminator: `0` for Quantified, `1` for FreeText.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "RawIngredient", try_from = "RawIngredient")]
pub enum Ingredient {
    Quantified {
        amount: u32,
        unit_ids: Vec<u32>,
        /// Index of the food in the sample food list, standing in for a database id
        food_id: u32,
        additional_desc: Option<String>,
    },
    FreeText {
        description: String,
    },
}

const QUANTIFIED: u8 = 0;
const FREE_TEXT: u8 = 1;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawIngredient {
    ingredient_type: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit_ids: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    food_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    additional_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl From<Ingredient> for RawIngredient {
    fn from(ingredient: Ingredient) -> Self {
        match ingredient {
            Ingredient::Quantified {
                amount,
                unit_ids,
                food_id,
                additional_desc,
            } => RawIngredient {
                ingredient_type: QUANTIFIED,
                amount: Some(amount),
                unit_ids: Some(unit_ids),
                food_id: Some(food_id),
                additional_desc,
                description: None,
            },
            Ingredient::FreeText { description } => RawIngredient {
                ingredient_type: FREE_TEXT,
                amount: None,
                unit_ids: None,
                food_id: None,
                additional_desc: None,
                description: Some(description),
            },
        }
    }
}

impl TryFrom<RawIngredient> for Ingredient {
    type Error = String;

    fn try_from(raw: RawIngredient) -> Result<Self, Self::Error> {
        match raw.ingredient_type {
            QUANTIFIED => Ok(Ingredient::Quantified {
                amount: raw.amount.ok_or("Quantified ingredient is missing amount")?,
                unit_ids: raw
                    .unit_ids
                    .ok_or("Quantified ingredient is missing unitIds")?,
                food_id: raw.food_id.ok_or("Quantified ingredient is missing foodId")?,
                additional_desc: raw.additional_desc,
            }),
            FREE_TEXT => Ok(Ingredient::FreeText {
                description: raw
                    .description
                    .ok_or("FreeText ingredient is missing description")?,
            }),
            other => Err(format!(
                "ingredientType must be 0 (Quantified) or 1 (FreeText), got {}",
                other
            )),
        }
    }
}

/// A named or unnamed group of ingredients within a rich recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    #[serde(flatten)]
    pub yields: Yield,
    pub prep_time: u32,
    pub cook_time: u32,
    pub ingredient_sections: Vec<Section>,
    pub method: Vec<String>,
    pub reference_url: String,
    pub image_url: String,
}

/// Legacy ingredient: always quantified, with a single unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatIngredient {
    pub amount: u32,
    pub unit_id: u32,
    pub food_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub ingredients: Vec<FlatIngredient>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRecipe {
    pub title: String,
    #[serde(flatten)]
    pub yields: Yield,
    pub prep_time: u32,
    pub cook_time: u32,
    pub ingredient_sections: Vec<FlatSection>,
    pub method: Vec<String>,
    pub reference_url: String,
}

/// A generated collection in one schema variant.
///
/// Serializes as a bare array of recipes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fixture {
    Rich(Vec<Recipe>),
    Flat(Vec<FlatRecipe>),
}

impl Fixture {
    pub fn schema(&self) -> Schema {
        match self {
            Fixture::Rich(_) => Schema::Rich,
            Fixture::Flat(_) => Schema::Flat,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Fixture::Rich(recipes) => recipes.len(),
            Fixture::Flat(recipes) => recipes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_recipe() -> Recipe {
        Recipe {
            title: "Sample Recipe #0".to_string(),
            yields: Yield::Makes(4),
            prep_time: 12,
            cook_time: 30,
            ingredient_sections: vec![Section {
                heading: Some("Section #0".to_string()),
                ingredients: vec![
                    Ingredient::Quantified {
                        amount: 3,
                        unit_ids: vec![1, 5],
                        food_id: 7,
                        additional_desc: None,
                    },
                    Ingredient::FreeText {
                        description: FREE_TEXT_DESCRIPTION.to_string(),
                    },
                ],
            }],
            method: METHOD_STEPS.iter().map(|s| s.to_string()).collect(),
            reference_url: REFERENCE_URL.to_string(),
            image_url: IMAGE_URL.to_string(),
        }
    }

    #[test]
    fn test_quantified_wire_format() {
        let ingredient = Ingredient::Quantified {
            amount: 5,
            unit_ids: vec![2],
            food_id: 16,
            additional_desc: Some(ADDITIONAL_DESCRIPTION.to_string()),
        };
        let value = serde_json::to_value(&ingredient).unwrap();
        assert_eq!(
            value,
            json!({
                "ingredientType": 0,
                "amount": 5,
                "unitIds": [2],
                "foodId": 16,
                "additionalDesc": "additional description"
            })
        );
    }

    #[test]
    fn test_free_text_has_only_description() {
        let ingredient = Ingredient::FreeText {
            description: FREE_TEXT_DESCRIPTION.to_string(),
        };
        let value = serde_json::to_value(&ingredient).unwrap();
        assert_eq!(
            value,
            json!({"ingredientType": 1, "description": "Free text description"})
        );
    }

    #[test]
    fn test_unknown_ingredient_type_rejected() {
        let result: Result<Ingredient, _> =
            serde_json::from_value(json!({"ingredientType": 2, "description": "x"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_quantified_missing_food_id_rejected() {
        let result: Result<Ingredient, _> =
            serde_json::from_value(json!({"ingredientType": 0, "amount": 3, "unitIds": [1]}));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("foodId"));
    }

    #[test]
    fn test_recipe_yield_is_a_single_key() {
        let value = serde_json::to_value(sample_recipe()).unwrap();
        assert_eq!(value["makes"], 4);
        assert!(value.get("serves").is_none());
        assert_eq!(value["prepTime"], 12);
        assert_eq!(value["cookTime"], 30);
        assert_eq!(value["imageUrl"], IMAGE_URL);
        assert!(value["ingredientSections"][0].get("heading").is_some());
    }

    #[test]
    fn test_recipe_with_both_yields_rejected() {
        let mut value = serde_json::to_value(sample_recipe()).unwrap();
        value["serves"] = json!(4);
        let err = serde_json::from_value::<Recipe>(value).unwrap_err().to_string();
        assert!(err.contains("serves should be defined iff makes is undefined"));
    }

    #[test]
    fn test_recipe_without_yield_rejected() {
        let mut value = serde_json::to_value(sample_recipe()).unwrap();
        value.as_object_mut().unwrap().remove("makes");
        assert!(serde_json::from_value::<Recipe>(value).is_err());
    }

    #[test]
    fn test_recipe_parses_back() {
        let recipe = sample_recipe();
        let text = serde_json::to_string(&recipe).unwrap();
        let parsed: Recipe = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, recipe);
    }

    #[test]
    fn test_flat_recipe_uses_snake_case() {
        let recipe = FlatRecipe {
            title: "Sample Recipe #3".to_string(),
            yields: Yield::Serves(6),
            prep_time: 20,
            cook_time: 10,
            ingredient_sections: vec![FlatSection {
                heading: None,
                ingredients: vec![FlatIngredient {
                    amount: 9,
                    unit_id: 7,
                    food_id: 3,
                }],
            }],
            method: METHOD_STEPS.iter().map(|s| s.to_string()).collect(),
            reference_url: REFERENCE_URL.to_string(),
        };
        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(value["serves"], 6);
        assert_eq!(value["prep_time"], 20);
        assert_eq!(value["ingredient_sections"][0]["ingredients"][0]["unit_id"], 7);
        assert!(value["ingredient_sections"][0].get("heading").is_none());
        assert!(value.get("image_url").is_none());
    }

    #[test]
    fn test_untagged_fixture_picks_schema() {
        let rich = Fixture::Rich(vec![sample_recipe()]);
        let text = serde_json::to_string(&rich).unwrap();
        let parsed: Fixture = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.schema(), Schema::Rich);
        assert_eq!(parsed, rich);
    }

    #[test]
    fn test_schema_defaults() {
        assert_eq!(Schema::default(), Schema::Rich);
        assert_eq!(Schema::Rich.default_recipe_count(), 26);
        assert_eq!(Schema::Flat.default_recipe_count(), 10);
        assert_eq!(Schema::Flat.food_id_field(), "food_id");
    }
}
