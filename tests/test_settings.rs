use recipe_fixtures::config::load_settings_from;
use recipe_fixtures::{OutputFormat, Overrides, Schema};
use std::env;
use std::fs;
use std::path::PathBuf;

// The only test in this binary that touches RECIPE_FIXTURES__* variables
#[test]
fn test_environment_and_flags_layer_over_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("layered.toml"),
        "schema = \"rich\"\nseed = 1\nrecipes = 4\nfood_page_size = 12\n",
    )
    .unwrap();
    let name = dir.path().join("layered");

    env::set_var("RECIPE_FIXTURES__SEED", "7");
    env::set_var("RECIPE_FIXTURES__SCHEMA", "flat");
    let loaded = load_settings_from(name.to_str().unwrap());
    env::remove_var("RECIPE_FIXTURES__SEED");
    env::remove_var("RECIPE_FIXTURES__SCHEMA");
    let settings = loaded.unwrap();

    // environment beats the file
    assert_eq!(settings.seed, Some(7));
    assert_eq!(settings.schema, Schema::Flat);
    // file values not named in the environment survive
    assert_eq!(settings.recipes, Some(4));
    assert_eq!(settings.food_page_size, 12);
    assert_eq!(settings.format, OutputFormat::Json);

    // flags beat both
    let settings = settings.apply(Overrides {
        seed: Some(9),
        output: Some(PathBuf::from("out.js")),
        format: Some(OutputFormat::Module),
        ..Default::default()
    });
    assert_eq!(settings.seed, Some(9));
    assert_eq!(settings.schema, Schema::Flat);
    assert_eq!(settings.recipe_count(), 4);
    assert_eq!(settings.output_path(), PathBuf::from("out.js"));
}
