use crate::models::AttendanceRecord;
use crate::utils::date::Period;

/// Aggregate over the records of a period.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PeriodSummary {
    pub days: usize,
    /// Days with both clock times, i.e. a known work total.
    pub complete_days: usize,
    pub work_minutes: u32,
    pub break_minutes: u32,
}

impl PeriodSummary {
    pub fn average_work_minutes(&self) -> u32 {
        match self.complete_days {
            0 => 0,
            n => self.work_minutes / n as u32,
        }
    }
}

/// Records falling in `period`, newest first.
pub fn records_in_period<'a>(
    records: &'a [AttendanceRecord],
    period: &Period,
) -> Vec<&'a AttendanceRecord> {
    let mut out: Vec<&AttendanceRecord> =
        records.iter().filter(|r| period.contains(&r.date)).collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}

/// Unknown work totals count as nothing, not as zero-hour days.
pub fn summarize<'a, I>(records: I) -> PeriodSummary
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    records
        .into_iter()
        .fold(PeriodSummary::default(), |mut acc, r| {
            acc.days += 1;
            if let Some(w) = r.total_work_minutes {
                acc.complete_days += 1;
                acc.work_minutes += w;
            }
            acc.break_minutes += r.total_break_minutes.unwrap_or(0);
            acc
        })
}
