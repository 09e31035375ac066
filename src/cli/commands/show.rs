use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::counter::CounterLogic;
use crate::core::store::EventStore;
use crate::db::pool::open_ready;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::time::Clock;

pub fn handle(cmd: &Commands, cfg: &Config, clock: &Clock) -> AppResult<()> {
    if let Commands::Show { id, watch, ticks } = cmd {
        let pool = open_ready(&cfg.database)?;
        let locale = cfg.locale()?;
        let store = EventStore::new(&pool.conn, locale);

        if *watch {
            return CounterLogic::watch(&store, *id, clock, *ticks, locale, &cfg.date_format);
        }

        match store.get(*id)? {
            Some(ev) => print!(
                "{}",
                CounterLogic::render(&ev, clock.now(), locale, &cfg.date_format)
            ),
            None => warning(format!("Event #{} not found.", id)),
        }
    }
    Ok(())
}
