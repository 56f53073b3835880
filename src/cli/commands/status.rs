use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::booking::Booking;
use crate::session::SqliteStore;
use crate::ui::render::render_status;

/// Handle `status`: print the stored record without touching it.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let store = SqliteStore::new(&pool.conn, &cli.session);

    let booking = Booking::load(&store)?;
    render_status(&booking, &cfg.date_display_format);
    Ok(())
}
