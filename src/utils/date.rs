use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Strict `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Inclusive date range used to filter the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl Period {
    pub fn contains(&self, d: &NaiveDate) -> bool {
        *d >= self.from && *d <= self.to
    }

    pub fn all() -> Self {
        Self {
            from: NaiveDate::MIN,
            to: NaiveDate::MAX,
        }
    }
}

/// Resolve `YYYY-MM-DD`, `YYYY-MM` or `YYYY` into an inclusive range.
pub fn period_bounds(p: &str) -> Result<Period, String> {
    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok(Period { from: d, to: d });
    }

    // YYYY-MM
    if p.len() == 7
        && let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
    {
        return Ok(Period {
            from: first,
            to: last_day_of_month(first.year(), first.month()),
        });
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let (Some(from), Some(to)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok(Period { from, to });
    }

    Err(format!("Invalid period: {}", p))
}

/// Resolve a `--period` argument: `all`, `A:B` ranges, or a single period.
pub fn resolve_period(p: &str) -> Result<Period, String> {
    if p == "all" {
        return Ok(Period::all());
    }

    if let Some((start, end)) = p.split_once(':') {
        let s = period_bounds(start)?;
        let e = period_bounds(end)?;
        if e.to < s.from {
            return Err(format!("Invalid period: {} (end before start)", p));
        }
        return Ok(Period {
            from: s.from,
            to: e.to,
        });
    }

    period_bounds(p)
}

pub fn current_month() -> Period {
    let t = today();
    let from = t.with_day(1).unwrap_or(t);
    Period {
        from,
        to: last_day_of_month(t.year(), t.month()),
    }
}

pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Short weekday label used in listings.
pub fn weekday_str(d: &NaiveDate) -> &'static str {
    match d.weekday() {
        chrono::Weekday::Mon => "Mon",
        chrono::Weekday::Tue => "Tue",
        chrono::Weekday::Wed => "Wed",
        chrono::Weekday::Thu => "Thu",
        chrono::Weekday::Fri => "Fri",
        chrono::Weekday::Sat => "Sat",
        chrono::Weekday::Sun => "Sun",
    }
}
