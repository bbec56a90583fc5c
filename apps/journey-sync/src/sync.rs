//! Sync run: submissions → problem files, profile → stats record.

use crate::api::{LeetCodeApi, MatchedUser, Question, RecentSubmission};
use crate::error::ApiResult;
use crate::markdown;
use chrono::{Local, NaiveDateTime};
use journey_core::{Config, Difficulty, ProblemLayout, StatsRecord};
use std::path::PathBuf;

/// Outcome of one run.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Submissions returned by the platform.
    pub submissions: usize,
    /// Problem files written.
    pub saved: Vec<PathBuf>,
    /// Slugs whose detail fetch failed.
    pub skipped: Vec<String>,
    /// New stats record, `None` when the profile fetch failed.
    pub stats: Option<StatsRecord>,
}

/// Drives one sync against any [`LeetCodeApi`].
pub struct Syncer<A> {
    api: A,
    config: Config,
    layout: ProblemLayout,
}

impl<A: LeetCodeApi> Syncer<A> {
    pub fn new(api: A, config: Config) -> Self {
        let layout = ProblemLayout::new(config.paths.problems_path());
        Self {
            api,
            config,
            layout,
        }
    }

    /// Run the sync.
    ///
    /// Fails only when the submission list cannot be fetched or local files
    /// cannot be written. A failed detail fetch skips that problem; a failed
    /// profile fetch leaves the previous stats record in place.
    pub async fn run(&self) -> ApiResult<SyncReport> {
        self.config.paths.ensure_dirs()?;

        let username = &self.config.profile.username;
        let submissions = self
            .api
            .recent_submissions(username, self.config.api.submission_limit)
            .await?;

        println!("📥 Found {} recent submissions", submissions.len());
        let mut report = SyncReport {
            submissions: submissions.len(),
            ..SyncReport::default()
        };

        for submission in &submissions {
            let slug = &submission.title_slug;
            let fetched = self
                .api
                .question(slug)
                .await
                .and_then(|q| {
                    q.check_path_segments()?;
                    let difficulty = q.difficulty()?;
                    Ok((q, difficulty))
                });

            let (question, difficulty) = match fetched {
                Ok(found) => found,
                Err(e) if e.is_remote() => {
                    tracing::warn!(slug = %slug, error = %e, "skipping problem");
                    println!("⚠️  Skipped {}: {}", submission.title, e);
                    report.skipped.push(slug.clone());
                    continue;
                }
                Err(e) => return Err(e),
            };

            let path = self.save_problem(&question, difficulty, submission)?;
            println!("✅ Saved: {}", question.title);
            report.saved.push(path);

            tokio::time::sleep(self.config.api.request_delay()).await;
        }

        report.stats = match self.update_stats().await {
            Ok(stats) => {
                println!("📊 Stats updated: {} problems solved", stats.total_solved);
                Some(stats)
            }
            Err(e) if e.is_remote() => {
                tracing::warn!(error = %e, "stats not updated");
                println!("❌ Failed to fetch profile, stats not updated: {e}");
                None
            }
            Err(e) => return Err(e),
        };

        Ok(report)
    }

    /// Write the problem file, keeping an existing file where it already is.
    fn save_problem(
        &self,
        question: &Question,
        difficulty: Difficulty,
        submission: &RecentSubmission,
    ) -> ApiResult<PathBuf> {
        let id = &question.question_id;
        let slug = &question.title_slug;

        let path = match self.layout.locate(id, slug)? {
            Some(existing) => existing,
            None => {
                self.layout
                    .path_for(difficulty, question.primary_topic(), id, slug)
            }
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let url = self.config.api.problem_url(slug);
        let content = markdown::render_problem(question, difficulty, submission, &url);
        std::fs::write(&path, content)?;

        tracing::debug!(path = %path.display(), "problem saved");
        Ok(path)
    }

    /// Fetch the profile and overwrite the stats record.
    async fn update_stats(&self) -> ApiResult<StatsRecord> {
        let user = self.api.user_profile(&self.config.profile.username).await?;
        let stats = stats_from_profile(
            &user,
            &self.config.profile.username,
            Local::now().naive_local(),
        );
        stats.save(&self.config.paths.progress_file())?;
        Ok(stats)
    }
}

/// Map the per-difficulty accepted counts onto a stats record.
pub fn stats_from_profile(user: &MatchedUser, username: &str, now: NaiveDateTime) -> StatsRecord {
    let mut stats = StatsRecord {
        last_updated: Some(now),
        username: username.to_string(),
        ranking: user.profile.ranking,
        ..StatsRecord::default()
    };

    for item in &user.submit_stats.ac_submission_num {
        match item.difficulty.as_str() {
            "All" => stats.total_solved = item.count,
            "Easy" => stats.easy_solved = item.count,
            "Medium" => stats.medium_solved = item.count,
            "Hard" => stats.hard_solved = item.count,
            other => tracing::debug!(difficulty = other, "ignoring difficulty bucket"),
        }
    }
    stats
}
