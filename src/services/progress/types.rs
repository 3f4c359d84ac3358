use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Durable fact that a user finished a lesson of a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    /// Learner.
    pub user_id: String,
    /// Course the lesson belongs to.
    pub course_id: String,
    /// Lesson.
    pub lesson_id: String,
    /// Whether the lesson is done.
    pub is_completed: bool,
    /// When it was marked done.
    pub completed_at: Option<DateTime<Utc>>,
    /// Progress within the lesson, 0..=100.
    pub progress_percent: u8,
}

impl CompletionRecord {
    /// A completed record stamped with `completed_at`.
    pub fn completed(
        user_id: impl Into<String>,
        course_id: impl Into<String>,
        lesson_id: impl Into<String>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            course_id: course_id.into(),
            lesson_id: lesson_id.into(),
            is_completed: true,
            completed_at: Some(completed_at),
            progress_percent: 100,
        }
    }
}

/// On-disk value of one completion entry
///
/// `courseId` and `progressPercent` are optional on read; older entries
/// only carry `completed` and `completedAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct StoredCompletion {
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_percent: Option<u8>,
}

impl StoredCompletion {
    pub fn into_record(self, user_id: &str, lesson_id: &str) -> CompletionRecord {
        let fallback_percent = if self.completed { 100 } else { 0 };
        CompletionRecord {
            user_id: user_id.to_string(),
            course_id: self.course_id.unwrap_or_default(),
            lesson_id: lesson_id.to_string(),
            is_completed: self.completed,
            completed_at: self.completed_at,
            progress_percent: self.progress_percent.unwrap_or(fallback_percent).min(100),
        }
    }
}

impl From<&CompletionRecord> for StoredCompletion {
    fn from(record: &CompletionRecord) -> Self {
        Self {
            completed: record.is_completed,
            completed_at: record.completed_at,
            course_id: Some(record.course_id.clone()),
            progress_percent: Some(record.progress_percent),
        }
    }
}
