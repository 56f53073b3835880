//! Subcommand handlers. Wizard steps share `submit_step` / `view_step`:
//! open the database, bind the session, run one transition, journal it and
//! render the outcome.

pub mod choose;
pub mod config;
pub mod confirm;
pub mod init;
pub mod log;
pub mod rate;
pub mod start;
pub mod status;
pub mod table;
pub mod user;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::flow::FlowLogic;
use crate::core::wizard::{Directive, View, Wizard};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::form::Form;
use crate::models::step::Step;
use crate::session::SqliteStore;
use crate::ui::messages::{success, warning};
use crate::ui::render::{render_summary, render_view};
use crate::utils::date::today;

/// Journal write; a failure here must not fail the command.
fn journal(pool: &DbPool, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(&pool.conn, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

fn saved_message(step: Step) -> &'static str {
    match step {
        Step::Entry => "New booking started.",
        Step::UserInfo => "Details saved.",
        Step::Location => "Location saved.",
        Step::PriceRange => "Price range saved.",
        Step::Cuisine => "Cuisine saved.",
        Step::Ambience => "Ambience saved.",
        Step::Restaurant => "Restaurant saved.",
        Step::Table => "Table saved.",
        Step::Confirmation => "Booking confirmed.",
        Step::Rating => "Rating saved.",
    }
}

/// Submit `form` to `step` for the session selected on the command line.
pub fn submit_step(cli: &Cli, cfg: &Config, step: Step, form: Form) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let wizard = Wizard::from_config(cfg, today());
    let mut store = SqliteStore::new(&pool.conn, &cli.session);

    let directive = FlowLogic::submit(&mut store, &wizard, step, &form)?;

    match directive {
        Directive::Advance { next, record } => {
            let op = if step == Step::Entry { "start" } else { "advance" };
            journal(&pool, op, &cli.session, &format!("{} -> {}", step, next));
            success(saved_message(step));
            println!();
            render_view(&wizard.view(next, &record));
            Ok(())
        }
        Directive::Terminate { record } => {
            journal(&pool, "terminate", &cli.session, &format!("{} -> done", step));
            render_summary(&record, wizard.date_format());
            Ok(())
        }
        Directive::Stay { step, reason } => {
            journal(&pool, "stay", &cli.session, &format!("{}: {}", step, reason));
            Err(AppError::Rejected { step, reason })
        }
        Directive::Redirect { step: to, reason } => {
            journal(&pool, "redirect", &cli.session, &format!("{} -> {}", step, to));
            Err(AppError::NoBooking(reason))
        }
    }
}

/// Show `step` without submitting anything.
pub fn view_step(cli: &Cli, cfg: &Config, step: Step) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let wizard = Wizard::from_config(cfg, today());
    let store = SqliteStore::new(&pool.conn, &cli.session);

    match FlowLogic::view(&store, &wizard, step)? {
        View::Redirect { step: to, reason } => {
            journal(&pool, "redirect", &cli.session, &format!("{} -> {}", step, to));
            Err(AppError::NoBooking(reason))
        }
        view => {
            render_view(&view);
            Ok(())
        }
    }
}
