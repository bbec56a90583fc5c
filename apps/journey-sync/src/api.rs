//! Typed client for the LeetCode GraphQL endpoint.

use crate::error::{ApiError, ApiResult};
use async_trait::async_trait;
use chrono::{DateTime, Local};
use journey_core::config::ApiConfig;
use journey_core::{is_plain_segment, primary_topic, Difficulty};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

const PROFILE_OPERATION: &str = "getUserProfile";
const SUBMISSIONS_OPERATION: &str = "getRecentSubmissions";
const QUESTION_OPERATION: &str = "getQuestionDetail";

const PROFILE_QUERY: &str = r#"
query getUserProfile($username: String!) {
    matchedUser(username: $username) {
        submitStats {
            acSubmissionNum {
                difficulty
                count
            }
        }
        profile {
            ranking
        }
    }
}
"#;

const SUBMISSIONS_QUERY: &str = r#"
query getRecentSubmissions($username: String!, $limit: Int!) {
    recentAcSubmissionList(username: $username, limit: $limit) {
        title
        titleSlug
        timestamp
        lang
    }
}
"#;

const QUESTION_QUERY: &str = r#"
query getQuestionDetail($titleSlug: String!) {
    question(titleSlug: $titleSlug) {
        questionId
        title
        titleSlug
        content
        difficulty
        topicTags {
            name
            slug
        }
    }
}
"#;

/// The three queries the sync needs.
#[async_trait]
pub trait LeetCodeApi: Send + Sync {
    /// Profile with accepted counts per difficulty.
    async fn user_profile(&self, username: &str) -> ApiResult<MatchedUser>;

    /// Most recent accepted submissions, newest first.
    async fn recent_submissions(
        &self,
        username: &str,
        limit: u32,
    ) -> ApiResult<Vec<RecentSubmission>>;

    /// Statement, tags, and difficulty for one problem.
    async fn question(&self, title_slug: &str) -> ApiResult<Question>;
}

/// `matchedUser` selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedUser {
    pub submit_stats: SubmitStats,
    pub profile: UserProfile,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitStats {
    pub ac_submission_num: Vec<DifficultyCount>,
}

/// Accepted count for one difficulty label, including the `All` bucket.
#[derive(Debug, Clone, Deserialize)]
pub struct DifficultyCount {
    pub difficulty: String,
    pub count: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub ranking: Option<u64>,
}

/// One accepted submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentSubmission {
    pub title: String,
    pub title_slug: String,
    /// Unix seconds, sent as a string.
    pub timestamp: String,
    pub lang: String,
}

impl RecentSubmission {
    /// Submission time in the local timezone.
    pub fn solved_at(&self) -> Option<DateTime<Local>> {
        let secs = self.timestamp.trim().parse::<i64>().ok()?;
        DateTime::from_timestamp(secs, 0).map(|dt| dt.with_timezone(&Local))
    }
}

/// `question` selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_id: String,
    pub title: String,
    pub title_slug: String,
    /// Statement HTML; null for locked problems.
    #[serde(default)]
    pub content: Option<String>,
    pub difficulty: String,
    #[serde(default)]
    pub topic_tags: Vec<TopicTag>,
}

impl Question {
    /// Parsed difficulty; an unknown label is a payload mismatch.
    pub fn difficulty(&self) -> ApiResult<Difficulty> {
        self.difficulty.parse().map_err(|_| ApiError::Shape {
            operation: QUESTION_OPERATION,
            detail: format!("unknown difficulty {:?}", self.difficulty),
        })
    }

    /// Tag slugs in API order.
    pub fn tag_slugs(&self) -> impl Iterator<Item = &str> {
        self.topic_tags.iter().map(|t| t.slug.as_str())
    }

    /// Directory bucket for this problem.
    pub fn primary_topic(&self) -> &str {
        primary_topic(self.tag_slugs())
    }

    /// Fail unless id, slug, and primary topic are each a single plain path
    /// segment, so the problem file stays inside the tree.
    pub fn check_path_segments(&self) -> ApiResult<()> {
        let segments = [
            self.question_id.as_str(),
            self.title_slug.as_str(),
            self.primary_topic(),
        ];
        match segments.into_iter().find(|s| !is_plain_segment(s)) {
            Some(bad) => Err(ApiError::Shape {
                operation: QUESTION_OPERATION,
                detail: format!("{bad:?} is not a plain path segment"),
            }),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopicTag {
    pub name: String,
    pub slug: String,
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<GraphQlMessage>>,
}

#[derive(Deserialize)]
struct GraphQlMessage {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileData {
    matched_user: Option<MatchedUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionsData {
    recent_ac_submission_list: Option<Vec<RecentSubmission>>,
}

#[derive(Debug, Deserialize)]
struct QuestionData {
    question: Option<Question>,
}

/// Decode a GraphQL body, failing on shape mismatch or a null `data`.
fn decode<T: DeserializeOwned>(operation: &'static str, body: &str) -> ApiResult<T> {
    let response: GraphQlResponse<T> =
        serde_json::from_str(body).map_err(|e| ApiError::Shape {
            operation,
            detail: e.to_string(),
        })?;

    response.data.ok_or_else(|| {
        let messages: Vec<String> = response
            .errors
            .unwrap_or_default()
            .into_iter()
            .map(|m| m.message)
            .collect();
        let detail = if messages.is_empty() {
            String::new()
        } else {
            format!(": {}", messages.join("; "))
        };
        ApiError::EmptyPayload { operation, detail }
    })
}

fn empty(operation: &'static str) -> ApiError {
    ApiError::EmptyPayload {
        operation,
        detail: String::new(),
    }
}

/// HTTP implementation of [`LeetCodeApi`].
pub struct GraphQlClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GraphQlClient {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    async fn post<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        query: &str,
        variables: serde_json::Value,
    ) -> ApiResult<T> {
        tracing::debug!(operation, endpoint = %self.endpoint, "sending query");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiError::Status {
                operation,
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        decode(operation, &body)
    }
}

#[async_trait]
impl LeetCodeApi for GraphQlClient {
    async fn user_profile(&self, username: &str) -> ApiResult<MatchedUser> {
        let data: ProfileData = self
            .post(
                PROFILE_OPERATION,
                PROFILE_QUERY,
                json!({ "username": username }),
            )
            .await?;
        data.matched_user.ok_or_else(|| empty(PROFILE_OPERATION))
    }

    async fn recent_submissions(
        &self,
        username: &str,
        limit: u32,
    ) -> ApiResult<Vec<RecentSubmission>> {
        let data: SubmissionsData = self
            .post(
                SUBMISSIONS_OPERATION,
                SUBMISSIONS_QUERY,
                json!({ "username": username, "limit": limit }),
            )
            .await?;
        data.recent_ac_submission_list
            .ok_or_else(|| empty(SUBMISSIONS_OPERATION))
    }

    async fn question(&self, title_slug: &str) -> ApiResult<Question> {
        let data: QuestionData = self
            .post(
                QUESTION_OPERATION,
                QUESTION_QUERY,
                json!({ "titleSlug": title_slug }),
            )
            .await?;
        data.question.ok_or_else(|| empty(QUESTION_OPERATION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_profile() {
        let body = r#"{
            "data": {
                "matchedUser": {
                    "username": "someone",
                    "submitStats": {
                        "acSubmissionNum": [
                            {"difficulty": "All", "count": 10},
                            {"difficulty": "Easy", "count": 6}
                        ]
                    },
                    "profile": {"ranking": 5000, "reputation": 3}
                }
            }
        }"#;

        let data: ProfileData = decode(PROFILE_OPERATION, body).unwrap();
        let user = data.matched_user.unwrap();
        assert_eq!(user.submit_stats.ac_submission_num.len(), 2);
        assert_eq!(user.profile.ranking, Some(5000));
    }

    #[test]
    fn test_decode_question() {
        let body = r#"{
            "data": {
                "question": {
                    "questionId": "1",
                    "title": "Two Sum",
                    "titleSlug": "two-sum",
                    "content": "<p>Find two numbers.</p>",
                    "difficulty": "Easy",
                    "topicTags": [
                        {"name": "Array", "slug": "array"},
                        {"name": "Hash Table", "slug": "hash-table"}
                    ],
                    "codeSnippets": null,
                    "stats": "{}"
                }
            }
        }"#;

        let data: QuestionData = decode(QUESTION_OPERATION, body).unwrap();
        let question = data.question.unwrap();
        assert_eq!(question.difficulty().unwrap(), Difficulty::Easy);
        assert_eq!(question.tag_slugs().collect::<Vec<_>>(), ["array", "hash-table"]);
    }

    #[test]
    fn test_decode_shape_mismatch() {
        let body = r#"{"data": {"question": {"title": 5}}}"#;
        let result = decode::<QuestionData>(QUESTION_OPERATION, body);
        assert!(matches!(result, Err(ApiError::Shape { .. })));
    }

    #[test]
    fn test_decode_null_data_carries_errors() {
        let body = r#"{"data": null, "errors": [{"message": "That user does not exist."}]}"#;
        let err = decode::<ProfileData>(PROFILE_OPERATION, body).unwrap_err();
        assert!(matches!(err, ApiError::EmptyPayload { .. }));
        assert!(err.to_string().contains("That user does not exist."));
    }

    #[test]
    fn test_unknown_difficulty_is_shape_error() {
        let question = Question {
            question_id: "1".to_string(),
            title: "Two Sum".to_string(),
            title_slug: "two-sum".to_string(),
            content: None,
            difficulty: "Legendary".to_string(),
            topic_tags: Vec::new(),
        };
        assert!(matches!(question.difficulty(), Err(ApiError::Shape { .. })));
    }

    #[test]
    fn test_submission_timestamp() {
        let submission = RecentSubmission {
            title: "Two Sum".to_string(),
            title_slug: "two-sum".to_string(),
            timestamp: "1704067200".to_string(),
            lang: "rust".to_string(),
        };
        let solved = submission.solved_at().unwrap();
        assert_eq!(solved.timestamp(), 1_704_067_200);

        let bad = RecentSubmission {
            timestamp: "yesterday".to_string(),
            ..submission
        };
        assert!(bad.solved_at().is_none());
    }

    fn question_with(id: &str, slug: &str, tags: &[&str]) -> Question {
        Question {
            question_id: id.to_string(),
            title: "Two Sum".to_string(),
            title_slug: slug.to_string(),
            content: None,
            difficulty: "Easy".to_string(),
            topic_tags: tags
                .iter()
                .map(|t| TopicTag {
                    name: t.to_string(),
                    slug: t.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_path_segments_accepted() {
        assert!(question_with("1", "two-sum", &["array"]).check_path_segments().is_ok());
        // No tags falls back to the default bucket.
        assert!(question_with("1", "two-sum", &[]).check_path_segments().is_ok());
        // Only the primary tag becomes a directory.
        assert!(question_with("1", "two-sum", &["array", "../x"])
            .check_path_segments()
            .is_ok());
    }

    #[test]
    fn test_path_segments_rejected() {
        for question in [
            question_with("../1", "two-sum", &["array"]),
            question_with("1", "../../escape", &["array"]),
            question_with("1", "two/sum", &["array"]),
            question_with("1", "two-sum", &[".."]),
            question_with("1", "two-sum", &["/tmp"]),
            question_with("", "two-sum", &["array"]),
        ] {
            assert!(
                matches!(question.check_path_segments(), Err(ApiError::Shape { .. })),
                "accepted {question:?}"
            );
        }
    }
}
