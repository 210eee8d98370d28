use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::model::Schema;
use crate::units::{FOOD_PAGE_SIZE, NUM_UNIT_TYPES};
use crate::writer::OutputFormat;

/// Fixture generation settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Recipe schema to generate
    #[serde(default)]
    pub schema: Schema,
    /// Output document format
    #[serde(default)]
    pub format: OutputFormat,
    /// Seed for the random source; unset means OS entropy
    #[serde(default)]
    pub seed: Option<u64>,
    /// Number of recipes; unset means the schema's default
    #[serde(default)]
    pub recipes: Option<usize>,
    /// Output path; unset means the format's default file name
    #[serde(default)]
    pub output: Option<PathBuf>,
    /// Number of unit types unit ids are drawn from
    #[serde(default = "default_unit_types")]
    pub unit_types: u32,
    /// Size of the food page food ids index into
    #[serde(default = "default_food_page_size")]
    pub food_page_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema: Schema::default(),
            format: OutputFormat::default(),
            seed: None,
            recipes: None,
            output: None,
            unit_types: default_unit_types(),
            food_page_size: default_food_page_size(),
        }
    }
}

/// Per-run values that take precedence over loaded settings (CLI flags)
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Overrides {
    pub schema: Option<Schema>,
    pub format: Option<OutputFormat>,
    pub seed: Option<u64>,
    pub recipes: Option<usize>,
    pub output: Option<PathBuf>,
}

// Default value functions
fn default_unit_types() -> u32 {
    NUM_UNIT_TYPES
}

fn default_food_page_size() -> u32 {
    FOOD_PAGE_SIZE
}

impl Settings {
    /// Load settings from file and environment variables
    ///
    /// Settings are loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FIXTURES__ prefix
    /// 2. recipe-fixtures.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_FIXTURES__SEED
    pub fn load() -> Result<Self, ConfigError> {
        load_settings()
    }

    /// Layer `overrides` on top of these settings; unset overrides keep the loaded value
    pub fn apply(mut self, overrides: Overrides) -> Self {
        self.schema = overrides.schema.unwrap_or(self.schema);
        self.format = overrides.format.unwrap_or(self.format);
        self.seed = overrides.seed.or(self.seed);
        self.recipes = overrides.recipes.or(self.recipes);
        self.output = overrides.output.or(self.output);
        self
    }

    /// Number of recipes to generate, falling back to the schema default
    pub fn recipe_count(&self) -> usize {
        self.recipes
            .unwrap_or_else(|| self.schema.default_recipe_count())
    }

    /// Output path, falling back to the format's default file name
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.format.default_file_name()))
    }
}

/// Load settings from the optional `recipe-fixtures` file and the environment
pub fn load_settings() -> Result<Settings, ConfigError> {
    load_settings_from("recipe-fixtures")
}

/// Load settings from the named file (any extension the `config` crate
/// recognises, `.toml` here) layered under the environment
pub fn load_settings_from(name: &str) -> Result<Settings, ConfigError> {
    let settings = Config::builder()
        // Optional settings file (can be missing)
        .add_source(File::with_name(name).required(false))
        // Use double underscore for nested: RECIPE_FIXTURES__FOOD_PAGE_SIZE
        .add_source(
            Environment::with_prefix("RECIPE_FIXTURES")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
