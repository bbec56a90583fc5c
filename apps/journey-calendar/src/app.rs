//! Calendar commands.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use journey_core::{CalendarStore, JourneyResult};

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Add problems to today's count.
    Mark(u32),
    /// Print statistics.
    Stats,
    /// Print the current month.
    Month,
    /// Print a whole year.
    Year(Option<i32>),
    /// Current month followed by statistics.
    Overview,
}

/// Calendar store plus the clock the commands run against.
pub struct App {
    store: CalendarStore,
    now: NaiveDateTime,
}

impl App {
    /// App on the local clock.
    pub fn new(store: CalendarStore) -> Self {
        Self::at(store, Local::now().naive_local())
    }

    /// App with a fixed clock.
    pub fn at(store: CalendarStore, now: NaiveDateTime) -> Self {
        Self { store, now }
    }

    fn today(&self) -> NaiveDate {
        self.now.date()
    }

    /// Run an action and return what to print.
    pub fn run(&mut self, action: Action) -> JourneyResult<String> {
        match action {
            Action::Mark(count) => self.mark(count),
            Action::Stats => Ok(self.stats()),
            Action::Month => self.month(),
            Action::Year(year) => self.store.render_year(year.unwrap_or(self.today().year())),
            Action::Overview => {
                let mut out = self.month()?;
                out.push('\n');
                out.push_str(&self.stats());
                Ok(out)
            }
        }
    }

    fn mark(&mut self, count: u32) -> JourneyResult<String> {
        let today = self.today();
        let total = self.store.mark(today, count, self.now)?;
        tracing::info!(%today, count, total, "marked");
        Ok(format!("✅ Marked {today} with {count} problem(s)\n"))
    }

    fn month(&self) -> JourneyResult<String> {
        let today = self.today();
        self.store.render_month(today.year(), today.month())
    }

    fn stats(&self) -> String {
        self.store.stats_on(self.today()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_mark_persists_and_accumulates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("calendar.json");
        let now = noon(2024, 4, 9);

        let mut app = App::at(CalendarStore::load(&path).unwrap(), now);
        let out = app.run(Action::Mark(1)).unwrap();
        assert_eq!(out, "✅ Marked 2024-04-09 with 1 problem(s)\n");

        let mut app = App::at(CalendarStore::load(&path).unwrap(), now);
        app.run(Action::Mark(2)).unwrap();

        let store = CalendarStore::load(&path).unwrap();
        let day = store.get(now.date()).unwrap();
        assert_eq!(day.count, 3);
    }

    #[test]
    fn test_overview_prints_month_then_stats() {
        let dir = tempdir().unwrap();
        let now = noon(2024, 4, 9);
        let mut app = App::at(CalendarStore::new(dir.path().join("c.json")), now);
        app.run(Action::Mark(2)).unwrap();

        let out = app.run(Action::Overview).unwrap();
        let month_at = out.find("April 2024").unwrap();
        let stats_at = out.find("LEETCODE CALENDAR STATISTICS").unwrap();
        assert!(month_at < stats_at);
        assert!(out.contains(" ✅ "));
        assert!(out.contains("Current Streak: 🔥 1 days"));
        assert!(out.contains("Total Problems: 2"));
    }

    #[test]
    fn test_year_defaults_to_current() {
        let dir = tempdir().unwrap();
        let mut app = App::at(CalendarStore::new(dir.path().join("c.json")), noon(2025, 1, 1));

        assert!(app
            .run(Action::Year(None))
            .unwrap()
            .contains("LeetCode Journey - 2025"));
        assert!(app
            .run(Action::Year(Some(2023)))
            .unwrap()
            .contains("LeetCode Journey - 2023"));
    }

    #[test]
    fn test_read_only_actions_do_not_create_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("c.json");
        let mut app = App::at(CalendarStore::load(&path).unwrap(), noon(2025, 1, 1));

        app.run(Action::Stats).unwrap();
        app.run(Action::Month).unwrap();
        assert!(!path.exists());
    }
}
