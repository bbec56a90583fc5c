//! Configuration for the journey tools.

use crate::error::{JourneyError, JourneyResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name looked up in the working directory before the user config dir.
pub const LOCAL_CONFIG_FILE: &str = "journey.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Whose journey this is.
    #[serde(default)]
    pub profile: ProfileConfig,
    /// Remote API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// On-disk layout.
    #[serde(default)]
    pub paths: PathsConfig,
    /// Platform-wide problem totals used for percentages.
    #[serde(default)]
    pub platform: PlatformConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise `journey.toml` in the working
    /// directory wins over the user config directory, and defaults apply when
    /// neither exists.
    pub fn load(explicit: Option<&Path>) -> JourneyResult<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Self::load_from(&local);
        }

        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> JourneyResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            JourneyError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Get the user-level configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "leetcode-journey")
            .map(|d| d.config_dir().join("config.toml"))
    }
}

/// Profile settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Platform username.
    #[serde(default = "default_username")]
    pub username: String,
    /// Name shown in the README heading and footer.
    #[serde(default = "default_display_name")]
    pub display_name: String,
    /// Repository identifier in `owner/name` form.
    #[serde(default = "default_repository")]
    pub repository: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            display_name: default_display_name(),
            repository: default_repository(),
        }
    }
}

impl ProfileConfig {
    /// Owner part of the repository identifier.
    pub fn repository_owner(&self) -> &str {
        self.repository
            .split_once('/')
            .map(|(owner, _)| owner)
            .unwrap_or(&self.repository)
    }

    /// Name part of the repository identifier.
    pub fn repository_name(&self) -> &str {
        self.repository
            .rsplit_once('/')
            .map(|(_, name)| name)
            .unwrap_or(&self.repository)
    }

    /// Web URL of the repository.
    pub fn repository_url(&self) -> String {
        format!("https://github.com/{}", self.repository)
    }

    /// Public profile URL on the platform.
    pub fn profile_url(&self) -> String {
        format!("https://leetcode.com/u/{}/", self.username)
    }
}

fn default_username() -> String {
    "aptikpandey9".to_string()
}

fn default_display_name() -> String {
    "Aptik Pandey".to_string()
}

fn default_repository() -> String {
    "Aptik09/leetcode-journey".to_string()
}

/// Remote API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// GraphQL endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Base URL for problem links.
    #[serde(default = "default_problem_base_url")]
    pub problem_base_url: String,
    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Number of recent accepted submissions to fetch.
    #[serde(default = "default_submission_limit")]
    pub submission_limit: u32,
    /// Pause after each saved problem, in milliseconds.
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            problem_base_url: default_problem_base_url(),
            user_agent: default_user_agent(),
            submission_limit: default_submission_limit(),
            request_delay_ms: default_request_delay_ms(),
        }
    }
}

impl ApiConfig {
    /// Pause after each saved problem.
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// Link to a problem page.
    pub fn problem_url(&self, slug: &str) -> String {
        format!("{}/{}/", self.problem_base_url.trim_end_matches('/'), slug)
    }
}

fn default_endpoint() -> String {
    "https://leetcode.com/graphql".to_string()
}

fn default_problem_base_url() -> String {
    "https://leetcode.com/problems".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}

fn default_submission_limit() -> u32 {
    20
}

fn default_request_delay_ms() -> u64 {
    1000
}

/// On-disk layout, relative to `root`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Repository root.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default = "default_problems_dir")]
    pub problems_dir: PathBuf,
    #[serde(default = "default_stats_dir")]
    pub stats_dir: PathBuf,
    #[serde(default = "default_contests_dir")]
    pub contests_dir: PathBuf,
    #[serde(default = "default_readme")]
    pub readme: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            problems_dir: default_problems_dir(),
            stats_dir: default_stats_dir(),
            contests_dir: default_contests_dir(),
            readme: default_readme(),
        }
    }
}

impl PathsConfig {
    /// Paths rooted somewhere else, with default sub-directories.
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn problems_path(&self) -> PathBuf {
        self.root.join(&self.problems_dir)
    }

    pub fn stats_path(&self) -> PathBuf {
        self.root.join(&self.stats_dir)
    }

    pub fn contests_path(&self) -> PathBuf {
        self.root.join(&self.contests_dir)
    }

    pub fn readme_path(&self) -> PathBuf {
        self.root.join(&self.readme)
    }

    /// Stats record file.
    pub fn progress_file(&self) -> PathBuf {
        self.stats_path().join("progress.json")
    }

    /// Calendar map file.
    pub fn calendar_file(&self) -> PathBuf {
        self.stats_path().join("calendar.json")
    }

    /// Create the problem, stats, and contest directories.
    pub fn ensure_dirs(&self) -> JourneyResult<()> {
        for dir in [self.problems_path(), self.stats_path(), self.contests_path()] {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_problems_dir() -> PathBuf {
    PathBuf::from("problems")
}

fn default_stats_dir() -> PathBuf {
    PathBuf::from("stats")
}

fn default_contests_dir() -> PathBuf {
    PathBuf::from("contests")
}

fn default_readme() -> PathBuf {
    PathBuf::from("README.md")
}

/// Platform-wide problem counts per difficulty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    #[serde(default = "default_easy_total")]
    pub easy_total: u32,
    #[serde(default = "default_medium_total")]
    pub medium_total: u32,
    #[serde(default = "default_hard_total")]
    pub hard_total: u32,
    #[serde(default = "default_all_total")]
    pub all_total: u32,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            easy_total: default_easy_total(),
            medium_total: default_medium_total(),
            hard_total: default_hard_total(),
            all_total: default_all_total(),
        }
    }
}

fn default_easy_total() -> u32 {
    826
}

fn default_medium_total() -> u32 {
    1739
}

fn default_hard_total() -> u32 {
    753
}

fn default_all_total() -> u32 {
    3318
}
