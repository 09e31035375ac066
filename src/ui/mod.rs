pub mod messages;
pub mod table;
