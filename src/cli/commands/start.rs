use crate::cli::commands::submit_step;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::form::Form;
use crate::models::step::Step;

/// Handle `start`: forget the current session and open the details form.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    submit_step(cli, cfg, Step::Entry, Form::new())
}
