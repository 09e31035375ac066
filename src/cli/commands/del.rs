use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::EventStore;
use crate::db::pool::open_ready;
use crate::errors::AppResult;
use crate::ui::messages::{ask_confirmation, info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let pool = open_ready(&cfg.database)?;
        let store = EventStore::new(&pool.conn, cfg.locale()?);

        let Some(ev) = store.get(*id)? else {
            warning(format!("Event #{} not found, nothing deleted.", id));
            return Ok(());
        };

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete event #{} '{}'? This action is irreversible.",
            ev.id, ev.name
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        if store.delete(*id)? {
            success(format!("Event #{} '{}' has been deleted.", ev.id, ev.name));
        } else {
            warning(format!("Event #{} not found, nothing deleted.", id));
        }
    }
    Ok(())
}
