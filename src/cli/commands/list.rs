use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::formatter::relative_time;
use crate::core::store::EventStore;
use crate::db::pool::open_ready;
use crate::errors::AppResult;
use crate::models::event_item::EventItem;
use crate::models::locale::Locale;
use crate::ui::messages::info;
use crate::ui::table::Table;
use crate::utils::time::{Clock, format_local};
use chrono::{DateTime, Local, Utc};

pub fn handle(cmd: &Commands, cfg: &Config, clock: &Clock) -> AppResult<()> {
    if let Commands::List = cmd {
        let pool = open_ready(&cfg.database)?;
        let locale = cfg.locale()?;
        let events = EventStore::new(&pool.conn, locale).list()?;

        if events.is_empty() {
            info("No events yet. Create one with `mytime add <NAME>`.");
            return Ok(());
        }

        let sep = cfg.separator_char.chars().next().unwrap_or('-');
        let table = build_table(&events, clock.now(), locale, &cfg.date_format);
        print!("{}", table.render(sep));
    }
    Ok(())
}

fn build_table(
    events: &[EventItem],
    now: DateTime<Utc>,
    locale: Locale,
    date_format: &str,
) -> Table {
    let now_local = now.with_timezone(&Local);
    let mut table = Table::new(["ID", "NAME", "DATE", "WHEN"]);

    for ev in events {
        table.add_row(vec![
            ev.id.to_string(),
            ev.name.clone(),
            format_local(&ev.timestamp, date_format),
            relative_time(&ev.timestamp.with_timezone(&Local), &now_local, locale),
        ]);
    }
    table
}
