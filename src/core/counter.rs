use crate::core::formatter::{relative_time, time_components};
use crate::core::store::EventStore;
use crate::errors::AppResult;
use crate::models::event_item::EventItem;
use crate::models::locale::{Locale, TimeUnit};
use crate::ui::messages::{clear_screen, warning};
use crate::ui::table::center;
use crate::utils::colors::{BOLD, RESET, color_for_direction};
use crate::utils::time::Clock;
use chrono::{DateTime, Local, Utc};
use std::thread;
use std::time::Duration;

const CELL_WIDTH: usize = 10;
const TICK: Duration = Duration::from_secs(1);

/// Detail screen of a single event: header, counter grid, relative phrase.
pub struct CounterLogic;

impl CounterLogic {
    pub fn render(
        ev: &EventItem,
        now: DateTime<Utc>,
        locale: Locale,
        date_format: &str,
    ) -> String {
        let ts = ev.timestamp.with_timezone(&Local);
        let now_local = now.with_timezone(&Local);
        let upcoming = ev.is_upcoming(now);
        let c = time_components(&ts, &now_local);

        let cells = [
            (c.days, TimeUnit::Day),
            (c.hours, TimeUnit::Hour),
            (c.minutes, TimeUnit::Minute),
            (c.seconds, TimeUnit::Second),
        ];

        let border = format!(
            "+{}",
            format!("{}+", "-".repeat(CELL_WIDTH)).repeat(cells.len())
        );
        let values: String = cells
            .iter()
            .map(|(v, _)| format!("{}|", center(&v.to_string(), CELL_WIDTH)))
            .collect();
        let labels: String = cells
            .iter()
            .map(|(v, u)| format!("{}|", center(&locale.counter_label(*u, *v), CELL_WIDTH)))
            .collect();

        let color = color_for_direction(upcoming);
        let mut out = String::new();
        out.push_str(&format!("{BOLD}{}{RESET}\n", ev.name));
        out.push_str(&format!("{}\n", locale.direction_label(upcoming)));
        out.push_str(&format!("{}\n\n", ts.format(date_format)));
        out.push_str(&format!("{border}\n"));
        out.push_str(&format!("|{color}{values}{RESET}\n"));
        out.push_str(&format!("|{labels}\n"));
        out.push_str(&format!("{border}\n"));
        out.push_str(&format!("{}\n", relative_time(&ts, &now_local, locale)));
        out
    }

    /// Re-render the counter once per second until interrupted, or for
    /// `ticks` frames when given. The event is re-read on every frame so
    /// edits made elsewhere show up; the loop ends if it is deleted.
    pub fn watch(
        store: &EventStore,
        id: i64,
        clock: &Clock,
        ticks: Option<u64>,
        locale: Locale,
        date_format: &str,
    ) -> AppResult<()> {
        let mut frame: u64 = 0;

        loop {
            let Some(ev) = store.get(id)? else {
                warning(format!("Event #{} no longer exists.", id));
                return Ok(());
            };

            clear_screen();
            print!("{}", Self::render(&ev, clock.now(), locale, date_format));

            frame += 1;
            if ticks.is_some_and(|t| frame >= t) {
                return Ok(());
            }
            thread::sleep(TICK);
        }
    }
}
