use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::EventStore;
use crate::db::pool::open_ready;
use crate::errors::AppResult;
use crate::models::event_item::EventPatch;
use crate::ui::messages::{info, success, warning};
use crate::utils::time::{format_local, parse_optional_datetime};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, name, at } = cmd {
        let patch = EventPatch {
            name: name.clone(),
            timestamp: parse_optional_datetime(at.as_ref())?,
        };

        if patch.is_empty() {
            info("Nothing to change: use --name and/or --at.");
            return Ok(());
        }

        let pool = open_ready(&cfg.database)?;
        let store = EventStore::new(&pool.conn, cfg.locale()?);

        match store.update(*id, patch)? {
            Some(ev) => success(format!(
                "Event #{} is now '{}' ({}).",
                ev.id,
                ev.name,
                format_local(&ev.timestamp, &cfg.date_format)
            )),
            None => warning(format!("Event #{} not found, nothing changed.", id)),
        }
    }
    Ok(())
}
