//! Everything the README is derived from.

use chrono::{DateTime, Local, NaiveDate};
use journey_core::config::PathsConfig;
use journey_core::{
    CalendarStore, Difficulty, JourneyResult, ProblemFile, ProblemLayout, StatsRecord,
};
use std::collections::BTreeMap;
use std::path::{Component, Path};

/// One row of a topic table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemEntry {
    pub difficulty: Difficulty,
    pub topic: String,
    /// Problem number from the heading, `?` when absent.
    pub number: String,
    pub title: String,
    /// Link target relative to the repository root, `/`-separated.
    pub link: String,
    /// File modification date.
    pub modified: NaiveDate,
}

impl ProblemEntry {
    /// Read heading and modification date from a problem file.
    pub fn from_file(file: &ProblemFile, root: &Path) -> JourneyResult<Self> {
        let heading = file.read_heading()?;
        let modified = DateTime::<Local>::from(file.modified()?).date_naive();

        Ok(Self {
            difficulty: file.difficulty,
            topic: file.topic.clone(),
            number: heading.number,
            title: heading.title,
            link: relative_link(&file.path, root),
            modified,
        })
    }
}

/// Loaded stats, calendar, and problem rows.
#[derive(Debug, Clone)]
pub struct ReadmeInputs {
    pub stats: StatsRecord,
    pub calendar: CalendarStore,
    /// Sorted by path.
    pub problems: Vec<ProblemEntry>,
}

impl ReadmeInputs {
    /// Load every input; missing files give empty defaults.
    pub fn load(paths: &PathsConfig) -> JourneyResult<Self> {
        let stats = StatsRecord::load(&paths.progress_file())?;
        let calendar = CalendarStore::load(paths.calendar_file())?;

        let layout = ProblemLayout::new(paths.problems_path());
        let problems = layout
            .scan()?
            .iter()
            .map(|file| ProblemEntry::from_file(file, &paths.root))
            .collect::<JourneyResult<Vec<_>>>()?;

        tracing::debug!(problems = problems.len(), "readme inputs loaded");
        Ok(Self {
            stats,
            calendar,
            problems,
        })
    }

    /// Problems grouped by topic across all difficulties, topics sorted.
    pub fn by_topic(&self) -> BTreeMap<&str, Vec<&ProblemEntry>> {
        let mut topics: BTreeMap<&str, Vec<&ProblemEntry>> = BTreeMap::new();
        for entry in &self.problems {
            topics.entry(entry.topic.as_str()).or_default().push(entry);
        }
        topics
    }
}

/// `path` relative to `root` with forward slashes.
fn relative_link(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
