use std::path::PathBuf;

use crate::{
    config::Settings,
    generator::{Limits, RecipeGenerator},
    writer::{write_fixture, OutputFormat},
    FixtureError, Fixture, Schema,
};

/// Builder for configuring and running fixture generation
#[derive(Debug, Default, Clone)]
pub struct FixtureBuilder {
    schema: Schema,
    format: OutputFormat,
    seed: Option<u64>,
    recipes: Option<usize>,
    output: Option<PathBuf>,
    limits: Limits,
}

impl FixtureBuilder {
    /// Start from loaded settings; later builder calls override them
    ///
    /// # Example
    /// ```
    /// use recipe_fixtures::{RecipeFixtures, Settings};
    ///
    /// let builder = RecipeFixtures::builder()
    ///     .settings(&Settings::default())
    ///     .seed(7);
    /// ```
    pub fn settings(mut self, settings: &Settings) -> Self {
        self.schema = settings.schema;
        self.format = settings.format;
        self.seed = settings.seed;
        self.recipes = settings.recipes;
        self.output = settings.output.clone();
        self.limits = Limits {
            unit_types: settings.unit_types,
            food_page_size: settings.food_page_size,
        };
        self
    }

    /// Set the recipe schema
    ///
    /// # Example
    /// ```
    /// use recipe_fixtures::{RecipeFixtures, Schema};
    ///
    /// let builder = RecipeFixtures::builder().schema(Schema::Flat);
    /// ```
    pub fn schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    /// Set the output document format
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Seed the random source so the output is reproducible
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of recipes instead of the schema default
    pub fn recipes(mut self, count: usize) -> Self {
        self.recipes = Some(count);
        self
    }

    /// Set the output path instead of the format's default file name
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Override the placeholder id bounds
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// The path `write` will produce
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.format.default_file_name()))
    }

    /// Generate the collection without writing it
    ///
    /// # Errors
    /// Returns `FixtureError::BuilderError` if either id bound is zero,
    /// since no id could be drawn.
    ///
    /// # Example
    /// ```
    /// use recipe_fixtures::RecipeFixtures;
    ///
    /// let fixture = RecipeFixtures::builder().seed(1).recipes(2).generate().unwrap();
    /// assert_eq!(fixture.len(), 2);
    /// ```
    pub fn generate(&self) -> Result<Fixture, FixtureError> {
        if self.limits.unit_types == 0 {
            return Err(FixtureError::BuilderError(
                "unit_types must be at least 1".to_string(),
            ));
        }
        if self.limits.food_page_size == 0 {
            return Err(FixtureError::BuilderError(
                "food_page_size must be at least 1".to_string(),
            ));
        }

        let count = self
            .recipes
            .unwrap_or_else(|| self.schema.default_recipe_count());
        let mut generator = RecipeGenerator::seeded(self.seed, self.limits);
        Ok(generator.fixture(self.schema, count))
    }

    /// Generate the collection and write it, returning the path written
    pub fn write(self) -> Result<PathBuf, FixtureError> {
        let fixture = self.generate()?;
        let path = self.output_path();
        write_fixture(&path, &fixture, self.format)?;
        Ok(path)
    }
}

/// Main entry point for the builder API
pub struct RecipeFixtures;

impl RecipeFixtures {
    /// Creates a new builder for generating fixtures
    ///
    /// # Example
    /// ```
    /// use recipe_fixtures::RecipeFixtures;
    ///
    /// let builder = RecipeFixtures::builder();
    /// ```
    pub fn builder() -> FixtureBuilder {
        FixtureBuilder::default()
    }
}
