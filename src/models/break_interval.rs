use crate::utils::time::elapsed_minutes;
use serde::{Deserialize, Serialize};

/// One rest period within a work day. `end` stays `None` while the break runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakInterval {
    pub start: String, // HH:MM
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>, // HH:MM
}

impl BreakInterval {
    pub fn open(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: None,
        }
    }

    pub fn closed(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: Some(end.into()),
        }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Open intervals contribute nothing.
    pub fn minutes(&self) -> u32 {
        elapsed_minutes(Some(&self.start), self.end.as_deref())
    }
}
