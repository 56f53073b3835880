use crate::cli::commands::{submit_step, view_step};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::form::Form;
use crate::models::step::Step;

/// Handle `confirm`: review snapshot, or `--yes` to move on to the rating.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Confirm { yes } = &cli.command {
        if *yes {
            return submit_step(cli, cfg, Step::Confirmation, Form::new());
        }
        return view_step(cli, cfg, Step::Confirmation);
    }

    Ok(())
}
