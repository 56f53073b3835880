use crate::cli::commands::{submit_step, view_step};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::field::Field;
use crate::models::form::Form;
use crate::models::step::Step;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Table { number } = &cli.command {
        return match number {
            Some(n) => {
                let form = Form::new().with(Field::Table, Some(n.as_str()));
                submit_step(cli, cfg, Step::Table, form)
            }
            None => view_step(cli, cfg, Step::Table),
        };
    }

    Ok(())
}
