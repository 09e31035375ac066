pub mod event_item;
pub mod locale;
