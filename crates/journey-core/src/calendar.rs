//! Daily completion calendar backed by `calendar.json`.
//!
//! The file maps ISO dates to `{count, timestamp}`. Entries are only ever
//! added or incremented; the timestamp records when a day was first marked.

use crate::error::{JourneyError, JourneyResult};
use chrono::{Datelike, Month, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Cell drawn for a day that has at least one completion.
pub const DONE_MARKER: &str = " ✅ ";

/// Cell drawn for grid positions outside the month.
const BLANK_CELL: &str = "    ";

const WEEKDAY_HEADER: &str = "Sun Mon Tue Wed Thu Fri Sat";

/// One recorded day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    /// Problems completed that day.
    pub count: u32,
    /// When the day was first marked.
    pub timestamp: NaiveDateTime,
}

/// A week of the month grid, Sunday first. `None` is outside the month.
pub type Week = [Option<u32>; 7];

/// Calendar map plus the file it persists to.
#[derive(Debug, Clone)]
pub struct CalendarStore {
    path: PathBuf,
    days: BTreeMap<NaiveDate, DayEntry>,
}

impl CalendarStore {
    /// Empty calendar that will persist to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            days: BTreeMap::new(),
        }
    }

    /// Load the calendar, starting empty when the file is absent.
    pub fn load(path: impl Into<PathBuf>) -> JourneyResult<Self> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self::new(path));
        }
        let content = std::fs::read_to_string(&path)?;
        let days = serde_json::from_str(&content)?;
        Ok(Self { path, days })
    }

    /// Persist the whole map.
    pub fn save(&self) -> JourneyResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.days)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DayEntry> {
        self.days.get(&date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Add `increment` to the count for `date` and persist.
    ///
    /// `captured_at` is stored only when the day is new. Returns the day's
    /// count after the update. A count that would overflow leaves the map
    /// and file untouched.
    pub fn mark(
        &mut self,
        date: NaiveDate,
        increment: u32,
        captured_at: NaiveDateTime,
    ) -> JourneyResult<u32> {
        let entry = self.days.entry(date).or_insert(DayEntry {
            count: 0,
            timestamp: captured_at,
        });
        let count = entry
            .count
            .checked_add(increment)
            .ok_or_else(|| JourneyError::CountOverflow(date.to_string()))?;
        entry.count = count;

        self.save()?;
        tracing::debug!(%date, count, "calendar marked");
        Ok(count)
    }

    /// Sunday-first weeks covering `month`.
    pub fn month_grid(year: i32, month: u32) -> JourneyResult<Vec<Week>> {
        let first = first_of_month(year, month)?;
        let days = days_in_month(year, month)?;
        let lead = first.weekday().num_days_from_sunday() as usize;

        let mut weeks = Vec::new();
        let mut week: Week = [None; 7];
        let mut slot = lead;
        for day in 1..=days {
            week[slot] = Some(day);
            slot += 1;
            if slot == 7 {
                weeks.push(week);
                week = [None; 7];
                slot = 0;
            }
        }
        if slot > 0 {
            weeks.push(week);
        }
        Ok(weeks)
    }

    /// Weekday header plus one line per week, with done days marked.
    pub fn render_grid(&self, year: i32, month: u32) -> JourneyResult<String> {
        let mut out = String::new();
        out.push_str(WEEKDAY_HEADER);
        out.push('\n');

        for week in Self::month_grid(year, month)? {
            for cell in week {
                match cell {
                    None => out.push_str(BLANK_CELL),
                    Some(day) => {
                        let date = NaiveDate::from_ymd_opt(year, month, day)
                            .ok_or_else(|| invalid_date(year, month))?;
                        if self.contains(date) {
                            out.push_str(DONE_MARKER);
                        } else {
                            out.push_str(&format!("{:>3} ", day));
                        }
                    }
                }
            }
            out.push('\n');
        }
        Ok(out)
    }

    /// ASCII month calendar with a title and rule.
    pub fn render_month(&self, year: i32, month: u32) -> JourneyResult<String> {
        let mut out = format!("\n{} {}\n", month_name(month)?, year);
        out.push_str(&"=".repeat(30));
        out.push('\n');
        out.push_str(&self.render_grid(year, month)?);
        Ok(out)
    }

    /// Banner followed by all twelve months.
    pub fn render_year(&self, year: i32) -> JourneyResult<String> {
        let rule = "=".repeat(50);
        let mut out = format!("\n{rule}\n  LeetCode Journey - {year}\n{rule}\n\n");
        for month in 1..=12 {
            out.push_str(&self.render_month(year, month)?);
            out.push('\n');
        }
        Ok(out)
    }

    /// Consecutive marked days ending exactly on `today`.
    pub fn current_streak_on(&self, today: NaiveDate) -> u32 {
        let mut streak = 0;
        let mut day = Some(today);
        while let Some(date) = day {
            if !self.contains(date) {
                break;
            }
            streak += 1;
            day = date.pred_opt();
        }
        streak
    }

    /// Longest run of consecutive marked days anywhere in the map.
    pub fn longest_streak(&self) -> u32 {
        let mut longest = 0;
        let mut run = 0;
        let mut prev: Option<NaiveDate> = None;

        for date in self.days.keys() {
            run = match prev {
                Some(p) if date.signed_duration_since(p).num_days() == 1 => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            prev = Some(*date);
        }
        longest
    }

    /// Sum of counts across every recorded day.
    pub fn total_problems(&self) -> u64 {
        self.days.values().map(|d| u64::from(d.count)).sum()
    }

    /// Sum of counts recorded within one month.
    pub fn problems_in_month(&self, year: i32, month: u32) -> u64 {
        self.days
            .iter()
            .filter(|(date, _)| date.year() == year && date.month() == month)
            .map(|(_, entry)| u64::from(entry.count))
            .sum()
    }

    /// Aggregate statistics, with the current streak measured from `today`.
    pub fn stats_on(&self, today: NaiveDate) -> CalendarStats {
        let total_days = self.len();
        let total_problems = self.total_problems();
        let average_per_day = if total_days > 0 {
            total_problems as f64 / total_days as f64
        } else {
            0.0
        };

        CalendarStats {
            total_days,
            total_problems,
            current_streak: self.current_streak_on(today),
            longest_streak: self.longest_streak(),
            average_per_day,
        }
    }
}

/// Calendar summary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarStats {
    /// Days with at least one entry.
    pub total_days: usize,
    /// Sum of counts.
    pub total_problems: u64,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Mean problems per active day, 0 without active days.
    pub average_per_day: f64,
}

impl fmt::Display for CalendarStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(50);
        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "  📊 LEETCODE CALENDAR STATISTICS")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "  Total Active Days: {}", self.total_days)?;
        writeln!(f, "  Total Problems: {}", self.total_problems)?;
        writeln!(f, "  Current Streak: 🔥 {} days", self.current_streak)?;
        writeln!(f, "  Longest Streak: 🏆 {} days", self.longest_streak)?;
        writeln!(f, "  Average/Day: {:.1} problems", self.average_per_day)?;
        writeln!(f, "{rule}")
    }
}

/// English month name.
pub fn month_name(month: u32) -> JourneyResult<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .ok_or_else(|| JourneyError::InvalidDate(format!("month {month}")))
}

fn first_of_month(year: i32, month: u32) -> JourneyResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| invalid_date(year, month))
}

fn days_in_month(year: i32, month: u32) -> JourneyResult<u32> {
    let first = first_of_month(year, month)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| invalid_date(year, month))?;
    Ok(next.signed_duration_since(first).num_days() as u32)
}

fn invalid_date(year: i32, month: u32) -> JourneyError {
    JourneyError::InvalidDate(format!("{year}-{month:02}"))
}
