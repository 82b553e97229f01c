pub mod colors;
pub mod date;
pub mod formatting;
pub mod logging;
pub mod path;
pub mod table;
pub mod time;

pub use time::{elapsed_minutes, format_duration, format_time_of_day, parse_time_of_day};
