use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::EventStore;
use crate::db::pool::open_ready;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::{Clock, format_local, parse_optional_datetime};

/// Create a new event.
pub fn handle(cmd: &Commands, cfg: &Config, clock: &Clock) -> AppResult<()> {
    if let Commands::Add { name, at } = cmd {
        //
        // 1. Resolve timestamp (default = now)
        //
        let timestamp = parse_optional_datetime(at.as_ref())?.unwrap_or_else(|| clock.now());

        //
        // 2. Open DB and insert
        //
        let pool = open_ready(&cfg.database)?;
        let store = EventStore::new(&pool.conn, cfg.locale()?);
        let ev = store.create(name.as_deref().unwrap_or_default(), timestamp)?;

        success(format!(
            "Event #{} '{}' created ({}).",
            ev.id,
            ev.name,
            format_local(&ev.timestamp, &cfg.date_format)
        ));
    }

    Ok(())
}
