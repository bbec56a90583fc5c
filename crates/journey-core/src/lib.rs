//! Shared pieces of the LeetCode journey tools.
//!
//! - [`config`]: explicit configuration passed to every tool
//! - [`models`]: difficulty and the persisted stats record
//! - [`calendar`]: the daily completion calendar and its renderings
//! - [`layout`]: the on-disk problem tree

pub mod calendar;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod models;

// Re-exports
pub use calendar::{CalendarStats, CalendarStore, DayEntry};
pub use config::Config;
pub use error::{JourneyError, JourneyResult};
pub use layout::{
    is_plain_segment, primary_topic, ProblemFile, ProblemHeading, ProblemLayout, FALLBACK_TOPIC,
};
pub use models::{Difficulty, StatsRecord};
