pub mod break_interval;
pub mod record;

pub use break_interval::BreakInterval;
pub use record::{AttendanceRecord, DayStatus, RecordUpdate};
