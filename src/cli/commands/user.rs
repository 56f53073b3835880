use crate::cli::commands::{submit_step, view_step};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::field::Field;
use crate::models::form::Form;
use crate::models::step::Step;

/// Handle `user`: personal details. No flags at all shows the form.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::User {
        name,
        phone,
        date,
        people,
        time,
    } = &cli.command
    {
        let form = Form::new()
            .with(Field::Name, name.as_deref())
            .with(Field::Phone, phone.as_deref())
            .with(Field::Date, date.as_deref())
            .with(Field::People, people.as_deref())
            .with(Field::Time, time.as_deref());

        if form.is_empty() {
            return view_step(cli, cfg, Step::UserInfo);
        }
        return submit_step(cli, cfg, Step::UserInfo, form);
    }

    Ok(())
}
