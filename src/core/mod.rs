pub mod backup;
pub mod calendar;
pub mod counter;
pub mod formatter;
pub mod log;
pub mod store;
