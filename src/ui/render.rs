//! Terminal rendering of wizard views and the final summary.

use crate::core::wizard::View;
use crate::models::booking::Booking;
use crate::models::field::Field;
use crate::models::step::Step;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::formatting::{bold, group_thousands, italic};
use crate::utils::table::Table;

const FEEDBACK_WIDTH: usize = 60;

fn title(step: Step) -> &'static str {
    match step {
        Step::Entry | Step::UserInfo => "Your details",
        Step::Location => "Choose a location",
        Step::PriceRange => "Choose a price range",
        Step::Cuisine => "Choose a cuisine",
        Step::Ambience => "Choose an ambience",
        Step::Restaurant => "Choose a restaurant",
        Step::Table => "Choose a table",
        Step::Confirmation => "Review your booking",
        Step::Rating => "Rate your visit",
    }
}

pub fn render_view(view: &View) {
    match view {
        View::Details { default_date } => {
            header(title(Step::UserInfo));
            println!("  --name <NAME>       your name");
            println!("  --phone <PHONE>     10 digit phone number");
            println!("  --date <DATE>       reservation date (default: {default_date})");
            println!("  --people <N>        party size, 1 to 50");
            println!("  --time <SLOT>       preferred time slot");
            println!();
            info(format!(
                "Next: {} --name … --phone … --date {default_date} --people …",
                Step::UserInfo.command()
            ));
        }
        View::Choices { step, options } => {
            header(title(*step));
            for (i, o) in options.iter().enumerate() {
                println!("  {}. {}", i + 1, o);
            }
            println!();
            info(format!("Next: {} \"<choice>\"", step.command()));
        }
        View::TableNumber { range } => {
            header(title(Step::Table));
            println!("  Tables {} to {} are available.", range.start(), range.end());
            println!();
            info(format!("Next: {} <number>", Step::Table.command()));
        }
        View::Review { rows } => {
            header(title(Step::Confirmation));
            print!("{}", rows_table(rows).render());
            println!();
            info(format!("Next: {} --yes", Step::Confirmation.command()));
        }
        View::Rating { scale } => {
            header(title(Step::Rating));
            println!(
                "  Rating from {} to {}, feedback optional.",
                scale.start(),
                scale.end()
            );
            println!();
            info(format!(
                "Next: {} --rating <R> --feedback \"…\"",
                Step::Rating.command()
            ));
        }
        View::Redirect { step, reason } => {
            warning(reason);
            info(format!("Next: {}", step.command()));
        }
    }
}

fn rows_table(rows: &[(Field, String)]) -> Table {
    let mut table = Table::new(&["Field", "Value"]);
    for (field, value) in rows {
        table.add_row(vec![field.label().to_string(), value.clone()]);
    }
    table
}

/// Thank-you screen shown when the rating step completes the wizard.
pub fn render_summary(record: &Booking, date_format: &str) {
    header("Thank you!");

    let rows: Vec<(Field, String)> = record
        .display_rows(date_format)
        .into_iter()
        .filter(|(f, _)| !matches!(f, Field::Feedback | Field::RewardPoints))
        .collect();
    print!("{}", rows_table(&rows).render());

    if let Some(feedback) = record.feedback.as_deref().filter(|f| !f.is_empty()) {
        println!();
        println!("{}", bold("Feedback"));
        for line in textwrap::wrap(feedback, FEEDBACK_WIDTH) {
            println!("  {}", italic(&line));
        }
    }

    if let Some(points) = record.reward_points {
        println!();
        success(format!("You earned {} reward points.", group_thousands(points)));
    }
}

/// Current session record, as stored.
pub fn render_status(record: &Booking, date_format: &str) {
    if record.is_empty() {
        info(format!(
            "No booking in progress. Run `{}` to begin.",
            Step::Entry.command()
        ));
        return;
    }
    header("Current booking");
    print!("{}", rows_table(&record.display_rows(date_format)).render());
}
