use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::FixtureError;
use crate::model::{FlatRecipe, Fixture, Recipe, Schema};

const MODULE_EXPORT: &str = "module.exports";

/// Document format of a written fixture
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    #[default]
    Json,
    /// CommonJS module: comment header followed by `module.exports = [...];`
    Module,
}

impl OutputFormat {
    pub fn default_file_name(&self) -> &'static str {
        match self {
            OutputFormat::Json => "recipe.sample.json",
            OutputFormat::Module => "recipe.sample.js",
        }
    }
}

/// Comment block written at the top of module fixtures
pub fn module_header(schema: Schema) -> String {
    let field = schema.food_id_field();
    format!(
        "
// This file was created with the recipe-fixtures generator

// note: {field} values should be the server-generated ID corresponding to the food record
// since we can't know the value beforehand (and these are randomly generated recipes)
// {field} is set to the index of the food when all foods are retrieved from the database

"
    )
}

/// Render a fixture as a complete document in the given format
pub fn render(fixture: &Fixture, format: OutputFormat) -> Result<String, FixtureError> {
    let body = serde_json::to_string_pretty(fixture)?;
    let document = match format {
        OutputFormat::Json => format!("{}\n", body),
        OutputFormat::Module => format!(
            "{}{} = {};\n",
            module_header(fixture.schema()),
            MODULE_EXPORT,
            body
        ),
    };
    Ok(document)
}

/// Write a fixture to `path`, truncating any existing file
pub fn write_fixture(
    path: &Path,
    fixture: &Fixture,
    format: OutputFormat,
) -> Result<(), FixtureError> {
    let document = render(fixture, format)?;

    let file = fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(document.as_bytes())?;
    writer.flush()?;

    info!(
        "Wrote {} {} recipes to {}",
        fixture.len(),
        fixture.schema(),
        path.display()
    );
    Ok(())
}

/// Extract the JSON body from a fixture document in either format
fn json_body(text: &str) -> Result<String, FixtureError> {
    let body = text
        .lines()
        .filter(|line| !line.trim_start().starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n");
    let body = body.trim();

    let Some(rest) = body.strip_prefix(MODULE_EXPORT) else {
        return Ok(body.to_string());
    };

    let rest = rest.trim_start().strip_prefix('=').ok_or_else(|| {
        FixtureError::InvalidFixture(format!("expected '=' after {}", MODULE_EXPORT))
    })?;
    let rest = rest.trim();
    Ok(rest.strip_suffix(';').unwrap_or(rest).trim_end().to_string())
}

/// Parse a fixture document.
///
/// With `schema` set the body must follow that schema; otherwise the
/// schema is detected from the records.
pub fn parse_fixture(text: &str, schema: Option<Schema>) -> Result<Fixture, FixtureError> {
    let body = json_body(text)?;
    if body.is_empty() {
        return Err(FixtureError::InvalidFixture(
            "fixture document is empty".to_string(),
        ));
    }

    let fixture = match schema {
        Some(Schema::Rich) => Fixture::Rich(serde_json::from_str::<Vec<Recipe>>(&body)?),
        Some(Schema::Flat) => Fixture::Flat(serde_json::from_str::<Vec<FlatRecipe>>(&body)?),
        None => {
            let value: serde_json::Value = serde_json::from_str(&body)?;
            if value.as_array().is_some_and(|records| records.is_empty()) {
                return Err(FixtureError::InvalidFixture(
                    "cannot detect schema of an empty fixture; pass --schema".to_string(),
                ));
            }
            serde_json::from_value(value).map_err(|e| {
                FixtureError::InvalidFixture(format!(
                    "records match neither the rich nor the flat schema ({})",
                    e
                ))
            })?
        }
    };
    debug!("Parsed {} {} recipes", fixture.len(), fixture.schema());
    Ok(fixture)
}

/// Read and parse a fixture file written by [`write_fixture`]
pub fn read_fixture(path: &Path, schema: Option<Schema>) -> Result<Fixture, FixtureError> {
    let text = fs::read_to_string(path)?;
    parse_fixture(&text, schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{Limits, RecipeGenerator};

    fn fixture(schema: Schema, count: usize) -> Fixture {
        RecipeGenerator::seeded(Some(11), Limits::default()).fixture(schema, count)
    }

    #[test]
    fn test_default_file_names() {
        assert_eq!(OutputFormat::Json.default_file_name(), "recipe.sample.json");
        assert_eq!(OutputFormat::Module.default_file_name(), "recipe.sample.js");
    }

    #[test]
    fn test_module_header_names_food_field() {
        let rich = module_header(Schema::Rich);
        assert!(rich.starts_with("\n// This file was created with"));
        assert!(rich.contains("// note: foodId values"));
        assert!(rich.contains("// foodId is set to the index of the food"));

        let flat = module_header(Schema::Flat);
        assert!(flat.contains("// note: food_id values"));
    }

    #[test]
    fn test_render_json_is_plain_array() {
        let document = render(&fixture(Schema::Rich, 2), OutputFormat::Json).unwrap();
        assert!(document.starts_with('['));
        assert!(document.ends_with("]\n"));
        assert!(!document.contains("//"));
    }

    #[test]
    fn test_render_module_exports_array() {
        let document = render(&fixture(Schema::Flat, 2), OutputFormat::Module).unwrap();
        assert!(document.contains("\nmodule.exports = ["));
        assert!(document.ends_with("];\n"));
    }

    #[test]
    fn test_parse_module_document() {
        let original = fixture(Schema::Rich, 3);
        let document = render(&original, OutputFormat::Module).unwrap();
        let parsed = parse_fixture(&document, None).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_parse_module_without_semicolon() {
        let document = "// header\nmodule.exports = []";
        let parsed = parse_fixture(document, Some(Schema::Flat)).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_empty_fixture_needs_schema() {
        let original = fixture(Schema::Flat, 0);
        let document = render(&original, OutputFormat::Json).unwrap();

        match parse_fixture(&document, None) {
            Err(FixtureError::InvalidFixture(message)) => assert!(message.contains("empty")),
            other => panic!("Expected invalid fixture error, got {:?}", other),
        }
        assert_eq!(parse_fixture(&document, Some(Schema::Flat)).unwrap(), original);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_fixture("// only comments\n", None),
            Err(FixtureError::InvalidFixture(_))
        ));
        assert!(matches!(
            parse_fixture("module.exports [1, 2]", None),
            Err(FixtureError::InvalidFixture(_))
        ));
        assert!(matches!(
            parse_fixture("[{\"title\": 1}]", None),
            Err(FixtureError::InvalidFixture(_))
        ));
        assert!(matches!(
            parse_fixture("[{\"title\": 1}]", Some(Schema::Rich)),
            Err(FixtureError::Serialization(_))
        ));
    }
}
