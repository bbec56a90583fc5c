//! Problem document rendering.

use crate::api::{Question, RecentSubmission};
use journey_core::Difficulty;
use std::fmt::Write;

const SOLVED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the markdown file for one solved problem.
///
/// The statement HTML is embedded as-is. Solution, complexity, notes, and
/// related problems are placeholders to fill in by hand.
pub fn render_problem(
    question: &Question,
    difficulty: Difficulty,
    submission: &RecentSubmission,
    problem_url: &str,
) -> String {
    let topics = question
        .topic_tags
        .iter()
        .map(|t| t.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let solved = submission
        .solved_at()
        .map(|dt| dt.format(SOLVED_FORMAT).to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let statement = question
        .content
        .as_deref()
        .unwrap_or("_Problem statement unavailable._");

    let lang = &submission.lang;

    // Two trailing spaces keep the metadata lines as separate lines.
    let mut doc = String::new();
    let _ = writeln!(doc, "# {}. {}", question.question_id, question.title);
    doc.push('\n');
    let _ = writeln!(doc, "**Difficulty:** {difficulty}  ");
    let _ = writeln!(doc, "**Topics:** {topics}  ");
    let _ = writeln!(doc, "**Link:** [LeetCode]({problem_url})  ");
    let _ = writeln!(doc, "**Solved:** {solved}");
    doc.push_str(SECTION_BREAK);
    doc.push_str("## Problem Statement\n\n");
    doc.push_str(statement);
    doc.push('\n');
    doc.push_str(SECTION_BREAK);
    doc.push_str("## Solution\n\n");
    let _ = writeln!(doc, "```{lang}");
    doc.push_str("// Solution will be added here\n");
    let _ = writeln!(doc, "// Language: {lang}");
    doc.push_str("```\n");
    doc.push_str(SECTION_BREAK);
    doc.push_str(PLACEHOLDER_SECTIONS);
    doc
}

const SECTION_BREAK: &str = "\n---\n\n";

const PLACEHOLDER_SECTIONS: &str = "## Complexity Analysis

- **Time Complexity:** O(?)
- **Space Complexity:** O(?)

---

## Notes

Add your notes here...

---

## Related Problems

- Problem 1
- Problem 2

";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TopicTag;
    use journey_core::ProblemHeading;

    fn question() -> Question {
        Question {
            question_id: "1".to_string(),
            title: "Two Sum".to_string(),
            title_slug: "two-sum".to_string(),
            content: Some("<p>Given an array <code>nums</code>...</p>".to_string()),
            difficulty: "Easy".to_string(),
            topic_tags: vec![
                TopicTag {
                    name: "Array".to_string(),
                    slug: "array".to_string(),
                },
                TopicTag {
                    name: "Hash Table".to_string(),
                    slug: "hash-table".to_string(),
                },
            ],
        }
    }

    fn submission() -> RecentSubmission {
        RecentSubmission {
            title: "Two Sum".to_string(),
            title_slug: "two-sum".to_string(),
            timestamp: "1704067200".to_string(),
            lang: "python3".to_string(),
        }
    }

    #[test]
    fn test_render_problem() {
        let doc = render_problem(
            &question(),
            Difficulty::Easy,
            &submission(),
            "https://leetcode.com/problems/two-sum/",
        );

        assert!(doc.starts_with("# 1. Two Sum\n"));
        assert!(doc.contains("**Difficulty:** Easy  \n"));
        assert!(doc.contains("**Topics:** Array, Hash Table  \n"));
        assert!(doc.contains("[LeetCode](https://leetcode.com/problems/two-sum/)"));
        assert!(doc.contains("<p>Given an array <code>nums</code>...</p>"));
        assert!(doc.contains("```python3\n// Solution will be added here\n// Language: python3\n```"));
        assert!(doc.contains("## Complexity Analysis"));
        assert!(doc.contains("## Related Problems"));
    }

    #[test]
    fn test_heading_round_trips_through_readme_parser() {
        let doc = render_problem(&question(), Difficulty::Easy, &submission(), "url");
        let heading = ProblemHeading::parse(doc.lines().next().unwrap());
        assert_eq!(heading.number, "1");
        assert_eq!(heading.title, "Two Sum");
    }

    #[test]
    fn test_missing_statement_and_timestamp() {
        let mut q = question();
        q.content = None;
        let mut s = submission();
        s.timestamp = String::new();

        let doc = render_problem(&q, Difficulty::Easy, &s, "url");
        assert!(doc.contains("_Problem statement unavailable._"));
        assert!(doc.contains("**Solved:** unknown\n"));
    }
}
