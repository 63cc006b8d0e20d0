// src/extraction/date_range.rs
//! Resolves "Jan 2020 - Present" style ranges into a label and a month count

use crate::types::{FieldValue, Months};
use chrono::{Datelike, Local, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

/// Separates the range from trailing text such as "· 1 yr 5 mos"
pub const RANGE_SEPARATOR: char = '·';

pub const OPEN_END: &str = "Present";

lazy_static! {
    static ref DATE_RANGE: Regex = Regex::new(r"(\w+ \d{4}) - (Present|\w+ \d{4})")
        .expect("date range pattern must compile");
}

const MONTHS: [(&str, &str); 12] = [
    ("jan", "january"),
    ("feb", "february"),
    ("mar", "march"),
    ("apr", "april"),
    ("may", "may"),
    ("jun", "june"),
    ("jul", "july"),
    ("aug", "august"),
    ("sep", "september"),
    ("oct", "october"),
    ("nov", "november"),
    ("dec", "december"),
];

/// Source of "today" for open-ended ranges
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one date, for reproducible runs
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    fn parse(token: &str) -> Option<Self> {
        let mut parts = token.split_whitespace();
        let month_name = parts.next()?.to_lowercase();
        let year = parts.next()?.parse::<i32>().ok()?;
        if parts.next().is_some() {
            return None;
        }

        let month = MONTHS
            .iter()
            .position(|(short, long)| month_name == *short || month_name == *long)?;
        Some(Self {
            year,
            month: month as u32 + 1,
        })
    }

    fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    fn months_until(self, end: Self) -> i64 {
        i64::from(end.year - self.year) * 12 + i64::from(end.month) - i64::from(self.month)
    }
}

pub struct DateRangeResolver<C: Clock = SystemClock> {
    clock: C,
}

impl Default for DateRangeResolver<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> DateRangeResolver<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Returns the cleaned label and the whole-month duration.
    ///
    /// Text that does not hold a range comes back as-is (minus anything after
    /// the separator) with `Months::Unknown`.
    pub fn resolve(&self, raw: &str) -> (String, Months) {
        let head = raw.split(RANGE_SEPARATOR).next().unwrap_or(raw).trim();

        let Some(captures) = DATE_RANGE.captures(head) else {
            debug!("Unparseable date range: {:?}", raw);
            return (head.to_string(), Months::Unknown);
        };

        let start_text = &captures[1];
        let end_text = &captures[2];
        let label = format!("{} - {}", start_text, end_text);

        let Some(start) = YearMonth::parse(start_text) else {
            debug!("Unrecognized start month in {:?}", raw);
            return (head.to_string(), Months::Unknown);
        };

        let end = if end_text == OPEN_END {
            YearMonth::of(self.clock.today())
        } else {
            match YearMonth::parse(end_text) {
                Some(end) => end,
                None => {
                    debug!("Unrecognized end month in {:?}", raw);
                    return (head.to_string(), Months::Unknown);
                }
            }
        };

        let months = start.months_until(end);
        if months < 0 {
            warn!("Date range ends before it starts: {}", label);
        }

        (label, Months::Known(months))
    }

    /// Same as [`resolve`](Self::resolve), keeping a missing range missing
    pub fn resolve_field(&self, raw: &FieldValue) -> (FieldValue, Months) {
        match raw.as_deref() {
            Some(text) => {
                let (label, months) = self.resolve(text);
                (FieldValue::from_option(Some(label)), months)
            }
            None => (FieldValue::Absent, Months::Absent),
        }
    }
}
