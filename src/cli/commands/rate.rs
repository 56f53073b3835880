use crate::cli::commands::{submit_step, view_step};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::field::Field;
use crate::models::form::Form;
use crate::models::step::Step;

/// Handle `rate`: final step, closes the wizard with the summary.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Rate { rating, feedback } = &cli.command {
        let form = Form::new()
            .with(Field::Rating, rating.as_deref())
            .with(Field::Feedback, feedback.as_deref());

        if form.is_empty() {
            return view_step(cli, cfg, Step::Rating);
        }
        return submit_step(cli, cfg, Step::Rating, form);
    }

    Ok(())
}
