use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

use recipe_fixtures::{check_fixture_file, OutputFormat, Overrides, RecipeFixtures, Schema, Settings};

/// Generate randomized sample recipe fixtures
#[derive(Parser)]
#[command(name = "recipe-fixtures", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a fixture file (the default command)
    Generate {
        /// Output path [default: recipe.sample.json, or recipe.sample.js for --format module]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Number of recipes [default: 26 for rich, 10 for flat]
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Recipe schema
        #[arg(long, value_enum)]
        schema: Option<Schema>,

        /// Output document format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Read a fixture file and validate every recipe in it
    Check {
        /// Fixture file (JSON or module)
        path: PathBuf,

        /// Expected schema; detected from the records when omitted
        #[arg(long, value_enum)]
        schema: Option<Schema>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = Settings::load()?;

    match cli.command.unwrap_or(Command::Generate {
        output: None,
        seed: None,
        count: None,
        schema: None,
        format: None,
    }) {
        Command::Generate {
            output,
            seed,
            count,
            schema,
            format,
        } => {
            let settings = settings.apply(Overrides {
                schema,
                format,
                seed,
                recipes: count,
                output,
            });

            let path = RecipeFixtures::builder().settings(&settings).write()?;
            println!("{}", path.display());
        }
        Command::Check { path, schema } => {
            let fixture = check_fixture_file(&path, schema, settings.unit_types)?;
            info!("{} is a valid {} fixture", path.display(), fixture.schema());
            println!("{}: {} {} recipes OK", path.display(), fixture.len(), fixture.schema());
        }
    }

    Ok(())
}
