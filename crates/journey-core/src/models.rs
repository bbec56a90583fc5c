//! Data models shared by the journey tools.

use crate::error::{JourneyError, JourneyResult};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Problem difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Display label as the platform spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Directory segment under the problems tree.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Colored marker used in tables.
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Easy => "🟢",
            Self::Medium => "🟡",
            Self::Hard => "🔴",
        }
    }
}

impl FromStr for Difficulty {
    type Err = JourneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(JourneyError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate solved counts, persisted as `progress.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsRecord {
    /// When the record was written.
    #[serde(default)]
    pub last_updated: Option<NaiveDateTime>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub total_solved: u32,
    #[serde(default)]
    pub easy_solved: u32,
    #[serde(default)]
    pub medium_solved: u32,
    #[serde(default)]
    pub hard_solved: u32,
    /// Global ranking, absent for unranked profiles.
    #[serde(default)]
    pub ranking: Option<u64>,
}

impl StatsRecord {
    /// Load the record, defaulting to zeros when the file is absent.
    pub fn load(path: &Path) -> JourneyResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overwrite the record on disk.
    pub fn save(&self, path: &Path) -> JourneyResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Solved count for one difficulty.
    pub fn solved(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy_solved,
            Difficulty::Medium => self.medium_solved,
            Difficulty::Hard => self.hard_solved,
        }
    }
}
