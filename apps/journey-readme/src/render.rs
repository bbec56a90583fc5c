//! README assembly.

use crate::inputs::{ProblemEntry, ReadmeInputs};
use chrono::{Datelike, NaiveDateTime};
use journey_core::calendar::month_name;
use journey_core::{Config, Difficulty, JourneyResult};
use std::fmt::Write;
use std::path::PathBuf;

const FOOTER_DATE_FORMAT: &str = "%B %d, %Y";

/// Renders the README for one configuration.
pub struct ReadmeRenderer<'a> {
    config: &'a Config,
}

impl<'a> ReadmeRenderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Render the full document as of `now`.
    ///
    /// Output depends only on the inputs and `now`; the footer carries the
    /// generation date.
    pub fn render(&self, inputs: &ReadmeInputs, now: NaiveDateTime) -> JourneyResult<String> {
        let today = now.date();
        let streak = inputs.calendar.current_streak_on(today);
        let this_month = inputs
            .calendar
            .problems_in_month(today.year(), today.month());

        let mut out = String::new();
        self.header(&mut out, inputs, streak, this_month);

        let _ = writeln!(
            out,
            "## 📅 {} Coding Calendar (Atomic Habits Style)\n",
            today.year()
        );
        let _ = writeln!(
            out,
            "### {} {}",
            month_name(today.month())?,
            today.year()
        );
        out.push_str("```\n");
        out.push_str(&inputs.calendar.render_grid(today.year(), today.month())?);
        out.push_str("```\n\n");
        out.push_str("**Legend:** ✅ = Solved | 🔥 = Streak Day | 🏆 = Contest Day\n\n---\n\n");

        self.statistics(&mut out, inputs);
        self.topics(&mut out, inputs);
        self.static_sections(&mut out);
        self.footer(&mut out, now);

        Ok(out)
    }

    fn header(&self, out: &mut String, inputs: &ReadmeInputs, streak: u32, this_month: u64) {
        let profile = &self.config.profile;
        let total = inputs.stats.total_solved;
        let repo_url = profile.repository_url();

        let _ = writeln!(out, "# 🚀 LeetCode Journey - {}\n", profile.display_name);
        out.push_str("<div align=\"center\">\n\n");
        let _ = writeln!(
            out,
            "![LeetCode Stats](https://leetcard.jacoblin.cool/{}?theme=dark&font=Ubuntu&ext=contest)\n",
            profile.username
        );
        let _ = writeln!(
            out,
            "[![Profile](https://img.shields.io/badge/LeetCode-Profile-orange?style=for-the-badge&logo=leetcode)]({})",
            profile.profile_url()
        );
        let _ = writeln!(
            out,
            "[![Streak](https://img.shields.io/badge/Current_Streak-{streak}_days-success?style=for-the-badge)]({repo_url})"
        );
        let _ = writeln!(
            out,
            "[![Problems Solved](https://img.shields.io/badge/Problems_Solved-{total}-blue?style=for-the-badge)]({repo_url})\n"
        );
        out.push_str("</div>\n\n---\n\n");

        out.push_str("## 📊 Progress Dashboard\n\n");
        let _ = writeln!(out, "### 🔥 Current Streak: **{streak} Days**");
        let _ = writeln!(out, "### 📈 Total Problems Solved: **{total}**");
        let _ = writeln!(out, "### 🎯 This Month: **{this_month} Problems**\n");
        out.push_str("---\n\n");
    }

    fn statistics(&self, out: &mut String, inputs: &ReadmeInputs) {
        let platform = &self.config.platform;
        let stats = &inputs.stats;

        out.push_str("## 🎯 Problem Statistics\n\n");
        out.push_str("| Difficulty | Solved | Total | Percentage |\n");
        out.push_str("|-----------|--------|-------|------------|\n");

        for difficulty in Difficulty::ALL {
            let solved = stats.solved(difficulty);
            let total = match difficulty {
                Difficulty::Easy => platform.easy_total,
                Difficulty::Medium => platform.medium_total,
                Difficulty::Hard => platform.hard_total,
            };
            let _ = writeln!(
                out,
                "| {} {} | {} | {} | {:.1}% |",
                difficulty.badge(),
                difficulty,
                solved,
                total,
                percentage(solved, total)
            );
        }

        let total = stats.total_solved;
        let _ = writeln!(
            out,
            "| **Total** | **{}** | **{}** | **{:.1}%** |",
            total,
            platform.all_total,
            percentage(total, platform.all_total)
        );
        out.push_str("\n---\n\n## 📚 Topics Mastered\n\n");
    }

    fn topics(&self, out: &mut String, inputs: &ReadmeInputs) {
        for (topic, problems) in inputs.by_topic() {
            topic_section(out, topic, &problems);
        }
    }

    fn static_sections(&self, out: &mut String) {
        let repo_name = self.config.profile.repository_name();

        out.push_str(
            "
---

## 🏆 Contest Performance

### Weekly Contests
| Contest | Rank | Score | Problems Solved | Date |
|---------|------|-------|----------------|------|
| - | - | - | - | - |

### Biweekly Contests
| Contest | Rank | Score | Problems Solved | Date |
|---------|------|-------|----------------|------|
| - | - | - | - | - |

---

## 📁 Repository Structure

```
",
        );
        let _ = writeln!(out, "{repo_name}/");
        out.push_str(
            "├── README.md                          # This file
├── problems/                          # All solved problems
│   ├── easy/                         # Easy problems
│   ├── medium/                       # Medium problems
│   └── hard/                         # Hard problems
├── contests/                         # Contest solutions
├── scripts/                          # Automation scripts
└── stats/                            # Statistics and tracking
```

---

## 🛠️ How It Works

This repository automatically syncs with my LeetCode profile:

1. **Auto-Sync**: When I solve a problem on LeetCode, it automatically gets added here
2. **Organization**: Problems are organized by difficulty and topic
3. **Calendar**: Atomic habits-style calendar tracks daily progress
4. **Stats**: Real-time statistics and streak tracking
5. **Contests**: Weekly and biweekly contest performance tracking

---

## 🎯 Goals

- [ ] Solve 100 problems
- [ ] Maintain 30-day streak
- [ ] Master all Array problems
- [ ] Complete 10 contests
- [ ] Solve 50 Medium problems
- [ ] Solve 10 Hard problems

---

## 🤝 Connect With Me

",
        );

        let profile = &self.config.profile;
        let owner = profile.repository_owner();
        let _ = writeln!(
            out,
            "[![LeetCode](https://img.shields.io/badge/LeetCode-{}-orange?style=flat&logo=leetcode)]({})",
            profile.username,
            profile.profile_url()
        );
        let _ = writeln!(
            out,
            "[![GitHub](https://img.shields.io/badge/GitHub-{owner}-black?style=flat&logo=github)](https://github.com/{owner})\n"
        );
        out.push_str("---\n\n");
    }

    fn footer(&self, out: &mut String, now: NaiveDateTime) {
        out.push_str("<div align=\"center\">\n\n");
        out.push_str(
            "**\"The only way to do great work is to love what you do.\"** - Steve Jobs\n\n",
        );
        let _ = writeln!(
            out,
            "Made with ❤️ by {} | Last Updated: {}\n",
            self.config.profile.display_name,
            now.format(FOOTER_DATE_FORMAT)
        );
        out.push_str("</div>\n");
    }
}

/// Load inputs, render, and replace the README. Returns the path written.
pub fn write_readme(config: &Config, now: NaiveDateTime) -> JourneyResult<PathBuf> {
    let inputs = ReadmeInputs::load(&config.paths)?;
    let content = ReadmeRenderer::new(config).render(&inputs, now)?;

    let path = config.paths.readme_path();
    std::fs::write(&path, content)?;
    tracing::debug!(path = %path.display(), "readme written");
    Ok(path)
}

/// Collapsible table for one topic.
fn topic_section(out: &mut String, topic: &str, problems: &[&ProblemEntry]) {
    let _ = writeln!(out, "<details>");
    let _ = writeln!(
        out,
        "<summary>📚 <b>{}</b> ({} problems)</summary>\n",
        title_case(&topic.replace('-', " ")),
        problems.len()
    );
    out.push_str("| # | Problem | Difficulty | Solution | Date |\n");
    out.push_str("|---|---------|-----------|----------|------|\n");

    for problem in problems {
        let _ = writeln!(
            out,
            "| {} | [{}]({}) | {} {} | [View]({}) | {} |",
            problem.number,
            problem.title,
            problem.link,
            problem.difficulty.badge(),
            problem.difficulty,
            problem.link,
            problem.modified.format("%Y-%m-%d")
        );
    }

    out.push_str("\n</details>\n\n");
}

/// Share of `total`, 0 when either side is zero.
fn percentage(solved: u32, total: u32) -> f64 {
    if solved == 0 || total == 0 {
        return 0.0;
    }
    solved as f64 / total as f64 * 100.0
}

/// Capitalize the first letter of every word, lowercase the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use journey_core::{CalendarStore, StatsRecord};

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn entry(difficulty: Difficulty, topic: &str, number: &str, title: &str) -> ProblemEntry {
        ProblemEntry {
            difficulty,
            topic: topic.to_string(),
            number: number.to_string(),
            title: title.to_string(),
            link: format!(
                "problems/{}/{}/{}_{}.md",
                difficulty.dir_name(),
                topic,
                number,
                title.to_lowercase().replace(' ', "-")
            ),
            modified: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        }
    }

    fn inputs() -> ReadmeInputs {
        let stats = StatsRecord {
            username: "aptikpandey9".to_string(),
            total_solved: 33,
            easy_solved: 20,
            medium_solved: 10,
            hard_solved: 3,
            ..StatsRecord::default()
        };

        // Rendering never saves, so the scratch directory may go away.
        let dir = tempfile::tempdir().unwrap();
        let mut calendar = CalendarStore::new(dir.path().join("calendar.json"));
        for d in 1..=3 {
            let day = NaiveDate::from_ymd_opt(2024, 5, d).unwrap();
            calendar.mark(day, 2, at(2024, 5, d, 8)).unwrap();
        }

        ReadmeInputs {
            stats,
            calendar,
            problems: vec![
                entry(Difficulty::Easy, "hash-table", "1", "Two Sum"),
                entry(Difficulty::Medium, "hash-table", "3", "Longest Substring"),
                entry(Difficulty::Medium, "two-pointers", "15", "3Sum"),
            ],
        }
    }

    #[test]
    fn test_header_and_dashboard() {
        let config = Config::default();
        let out = ReadmeRenderer::new(&config)
            .render(&inputs(), at(2024, 5, 3, 21))
            .unwrap();

        assert!(out.starts_with("# 🚀 LeetCode Journey - Aptik Pandey\n"));
        assert!(out.contains("### 🔥 Current Streak: **3 Days**"));
        assert!(out.contains("### 📈 Total Problems Solved: **33**"));
        assert!(out.contains("### 🎯 This Month: **6 Problems**"));
        assert!(out.contains("Current_Streak-3_days-success"));
        assert!(out.contains("(https://leetcode.com/u/aptikpandey9/)"));
    }

    #[test]
    fn test_calendar_block() {
        let config = Config::default();
        let out = ReadmeRenderer::new(&config)
            .render(&inputs(), at(2024, 5, 3, 21))
            .unwrap();

        assert!(out.contains("## 📅 2024 Coding Calendar (Atomic Habits Style)"));
        assert!(out.contains("### May 2024\n```\nSun Mon Tue Wed Thu Fri Sat\n"));
        // 2024-05-01 was a Wednesday.
        assert!(out.contains("             ✅  ✅  ✅   4 \n"));
    }

    #[test]
    fn test_statistics_table() {
        let config = Config::default();
        let out = ReadmeRenderer::new(&config)
            .render(&inputs(), at(2024, 5, 3, 21))
            .unwrap();

        assert!(out.contains("| 🟢 Easy | 20 | 826 | 2.4% |"));
        assert!(out.contains("| 🟡 Medium | 10 | 1739 | 0.6% |"));
        assert!(out.contains("| 🔴 Hard | 3 | 753 | 0.4% |"));
        assert!(out.contains("| **Total** | **33** | **3318** | **1.0%** |"));
    }

    #[test]
    fn test_topic_sections() {
        let config = Config::default();
        let out = ReadmeRenderer::new(&config)
            .render(&inputs(), at(2024, 5, 3, 21))
            .unwrap();

        assert!(out.contains("<summary>📚 <b>Hash Table</b> (2 problems)</summary>"));
        assert!(out.contains("<summary>📚 <b>Two Pointers</b> (1 problems)</summary>"));
        assert!(out.contains(
            "| 1 | [Two Sum](problems/easy/hash-table/1_two-sum.md) | 🟢 Easy | [View](problems/easy/hash-table/1_two-sum.md) | 2024-05-01 |"
        ));

        let hash = out.find("Hash Table").unwrap();
        let pointers = out.find("Two Pointers").unwrap();
        assert!(hash < pointers);
    }

    #[test]
    fn test_static_sections_use_config() {
        let mut config = Config::default();
        config.profile.repository = "someone/practice-log".to_string();
        config.profile.display_name = "Someone".to_string();
        let out = ReadmeRenderer::new(&config)
            .render(&inputs(), at(2024, 5, 3, 21))
            .unwrap();

        assert!(out.contains("## 🏆 Contest Performance"));
        assert!(out.contains("\npractice-log/"));
        assert!(out.contains("- [ ] Maintain 30-day streak"));
        assert!(out.contains("(https://github.com/someone)"));
        assert!(out.contains("Made with ❤️ by Someone | Last Updated: May 03, 2024"));
        assert!(out.trim_end().ends_with("</div>"));
    }

    #[test]
    fn test_empty_inputs() {
        let config = Config::default();
        let empty = ReadmeInputs {
            stats: StatsRecord::default(),
            calendar: CalendarStore::new("unused.json"),
            problems: Vec::new(),
        };
        let out = ReadmeRenderer::new(&config)
            .render(&empty, at(2024, 5, 3, 21))
            .unwrap();

        assert!(out.contains("### 🔥 Current Streak: **0 Days**"));
        assert!(out.contains("| **Total** | **0** | **3318** | **0.0%** |"));
        assert!(!out.contains("<details>"));
    }

    #[test]
    fn test_render_is_deterministic_within_a_day() {
        let config = Config::default();
        let renderer = ReadmeRenderer::new(&config);
        let inputs = inputs();

        let morning = renderer.render(&inputs, at(2024, 5, 3, 8)).unwrap();
        let evening = renderer.render(&inputs, at(2024, 5, 3, 22)).unwrap();
        assert_eq!(morning, evening);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("hash table"), "Hash Table");
        assert_eq!(title_case("depth first search"), "Depth First Search");
        assert_eq!(title_case("MISCELLANEOUS"), "Miscellaneous");
        assert_eq!(title_case("2d array"), "2D Array");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(0, 826), 0.0);
        assert_eq!(percentage(5, 0), 0.0);
        assert!((percentage(413, 826) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_write_readme_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.paths = journey_core::config::PathsConfig::rooted_at(dir.path());

        let problem = config.paths.problems_path().join("easy/array/1_two-sum.md");
        std::fs::create_dir_all(problem.parent().unwrap()).unwrap();
        std::fs::write(&problem, "# 1. Two Sum\n").unwrap();
        std::fs::create_dir_all(config.paths.stats_path()).unwrap();
        std::fs::write(
            config.paths.progress_file(),
            r#"{"total_solved": 1, "easy_solved": 1}"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("README.md"),
            "stale content that must disappear",
        )
        .unwrap();

        let now = at(2024, 5, 3, 12);
        let path = write_readme(&config, now).unwrap();
        let first = std::fs::read(&path).unwrap();
        write_readme(&config, now).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
        let text = String::from_utf8(first).unwrap();
        assert!(!text.contains("stale content"));
        assert!(text.contains("[Two Sum](problems/easy/array/1_two-sum.md)"));
        assert!(text.contains("| 🟢 Easy | 1 | 826 | 0.1% |"));
    }
}
