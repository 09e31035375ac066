use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::EventStore;
use crate::db::pool::open_ready;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::time::{Clock, format_local};

pub fn handle(cmd: &Commands, cfg: &Config, clock: &Clock) -> AppResult<()> {
    if let Commands::Reset { id } = cmd {
        let pool = open_ready(&cfg.database)?;
        let store = EventStore::new(&pool.conn, cfg.locale()?);

        match store.reset(*id, clock.now())? {
            Some(ev) => success(format!(
                "Counter of '{}' restarted at {}.",
                ev.name,
                format_local(&ev.timestamp, &cfg.date_format)
            )),
            None => warning(format!("Event #{} not found, nothing reset.", id)),
        }
    }
    Ok(())
}
