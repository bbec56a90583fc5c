//! Problem tree layout: `<root>/<difficulty>/<topic>/<id>_<slug>.md`.

use crate::error::JourneyResult;
use crate::models::Difficulty;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

/// Topic bucket for problems without any tags.
pub const FALLBACK_TOPIC: &str = "miscellaneous";

const PROBLEM_EXTENSION: &str = "md";

/// Pick the directory bucket for a problem.
///
/// The first tag in the order the platform returns them is authoritative and
/// is used verbatim. Upstream ordering is not guaranteed to be meaningful, so
/// placement is fixed once a file exists (see [`ProblemLayout::locate`]).
pub fn primary_topic<'a, I>(tag_slugs: I) -> &'a str
where
    I: IntoIterator<Item = &'a str>,
{
    tag_slugs.into_iter().next().unwrap_or(FALLBACK_TOPIC)
}

/// Whether `name` joins onto a directory as exactly one normal component.
///
/// Rejects empty names, `.`/`..`, absolute paths, and anything carrying a
/// separator.
pub fn is_plain_segment(name: &str) -> bool {
    if name.contains(|c: char| c == '/' || c == '\\') {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// A problem file found in the tree.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProblemFile {
    pub difficulty: Difficulty,
    pub topic: String,
    pub path: PathBuf,
}

impl ProblemFile {
    /// Parse the first line of the file.
    pub fn read_heading(&self) -> JourneyResult<ProblemHeading> {
        let content = std::fs::read_to_string(&self.path)?;
        let first = content.lines().next().unwrap_or_default();
        Ok(ProblemHeading::parse(first))
    }

    /// Last modification time.
    pub fn modified(&self) -> JourneyResult<SystemTime> {
        Ok(std::fs::metadata(&self.path)?.modified()?)
    }
}

/// Number and title from a `# <number>. <title>` heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemHeading {
    /// Problem number, `?` when the heading has none.
    pub number: String,
    pub title: String,
}

impl ProblemHeading {
    pub const UNKNOWN_NUMBER: &'static str = "?";

    /// Split on the first period. Headings without a numeric prefix keep the
    /// whole text as the title.
    pub fn parse(line: &str) -> Self {
        let text = line.trim().trim_start_matches('#').trim();

        if let Some((number, title)) = text.split_once('.') {
            let number = number.trim();
            if !number.is_empty() && number.chars().all(|c| c.is_ascii_digit()) {
                return Self {
                    number: number.to_string(),
                    title: title.trim().to_string(),
                };
            }
        }

        Self {
            number: Self::UNKNOWN_NUMBER.to_string(),
            title: text.to_string(),
        }
    }
}

/// Paths into the problem tree.
#[derive(Debug, Clone)]
pub struct ProblemLayout {
    root: PathBuf,
}

impl ProblemLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<id>_<slug>.md`
    pub fn file_name(id: &str, slug: &str) -> String {
        format!("{id}_{slug}.{PROBLEM_EXTENSION}")
    }

    /// Directory for a difficulty and topic.
    pub fn topic_dir(&self, difficulty: Difficulty, topic: &str) -> PathBuf {
        self.root.join(difficulty.dir_name()).join(topic)
    }

    /// Where a new problem file goes.
    pub fn path_for(&self, difficulty: Difficulty, topic: &str, id: &str, slug: &str) -> PathBuf {
        self.topic_dir(difficulty, topic)
            .join(Self::file_name(id, slug))
    }

    /// Find an existing file for the problem anywhere in the tree.
    pub fn locate(&self, id: &str, slug: &str) -> JourneyResult<Option<PathBuf>> {
        let name = Self::file_name(id, slug);
        Ok(self
            .scan()?
            .into_iter()
            .find(|f| f.path.file_name().is_some_and(|n| n == name.as_str()))
            .map(|f| f.path))
    }

    /// Enumerate every problem file by difficulty and topic, sorted by path.
    ///
    /// Missing difficulty directories are skipped; stray files directly under
    /// a difficulty directory and non-markdown files are ignored.
    pub fn scan(&self) -> JourneyResult<Vec<ProblemFile>> {
        let mut files = Vec::new();

        for difficulty in Difficulty::ALL {
            let diff_dir = self.root.join(difficulty.dir_name());
            if !diff_dir.is_dir() {
                continue;
            }

            for topic_entry in std::fs::read_dir(&diff_dir)? {
                let topic_path = topic_entry?.path();
                if !topic_path.is_dir() {
                    continue;
                }
                let Some(topic) = topic_path.file_name().and_then(|n| n.to_str()) else {
                    continue;
                };
                let topic = topic.to_string();

                for file_entry in std::fs::read_dir(&topic_path)? {
                    let path = file_entry?.path();
                    let is_problem = path.is_file()
                        && path.extension().is_some_and(|e| e == PROBLEM_EXTENSION);
                    if is_problem {
                        files.push(ProblemFile {
                            difficulty,
                            topic: topic.clone(),
                            path,
                        });
                    }
                }
            }
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }
}
