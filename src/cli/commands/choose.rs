use crate::cli::commands::{submit_step, view_step};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::field::Field;
use crate::models::form::Form;
use crate::models::step::Step;

/// Handle the five catalog steps (location, price range, cuisine, ambience,
/// restaurant). The value is passed through untouched: matching is exact.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let (step, field, value) = match &cli.command {
        Commands::Location { value } => (Step::Location, Field::Location, value),
        Commands::Pricerange { value } => (Step::PriceRange, Field::PriceRange, value),
        Commands::Cuisine { value } => (Step::Cuisine, Field::Cuisine, value),
        Commands::Ambience { value } => (Step::Ambience, Field::Ambience, value),
        Commands::Restaurant { value } => (Step::Restaurant, Field::Restaurant, value),
        _ => return Ok(()),
    };

    match value {
        Some(v) => submit_step(cli, cfg, step, Form::new().with(field, Some(v.as_str()))),
        None => view_step(cli, cfg, step),
    }
}
