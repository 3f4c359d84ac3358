use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, instrument, warn};

use crate::services::catalog::{CatalogProvider, LessonRef};

use super::{CompletionRecord, CompletionRepository};

/// Completion percentages and lesson navigation for one learner
///
/// Reads degrade instead of failing: an unreadable record counts as not
/// completed, an unknown course or module reports 0%, and navigation off
/// either end of a course yields `None`.
#[derive(Clone)]
pub struct ProgressAggregator {
    user_id: String,
    repository: Arc<dyn CompletionRepository>,
    catalog: Arc<dyn CatalogProvider>,
}

impl ProgressAggregator {
    /// Aggregator for `user_id` over the given storage and catalog.
    pub fn new(
        user_id: impl Into<String>,
        repository: Arc<dyn CompletionRepository>,
        catalog: Arc<dyn CatalogProvider>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            repository,
            catalog,
        }
    }

    /// Same storage and catalog, another learner.
    pub fn for_user(&self, user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            repository: Arc::clone(&self.repository),
            catalog: Arc::clone(&self.catalog),
        }
    }

    /// Current learner.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Whether the current learner finished `lesson_id`.
    pub fn is_lesson_complete(&self, lesson_id: &str) -> bool {
        self.record(&self.user_id, lesson_id)
            .is_some_and(|record| record.is_completed)
    }

    /// Mark a lesson completed, overwriting any earlier record.
    ///
    /// Returns `false` if the record could not be stored.
    #[instrument(skip(self))]
    pub fn mark_lesson_complete(&self, user_id: &str, course_id: &str, lesson_id: &str) -> bool {
        let record = CompletionRecord::completed(user_id, course_id, lesson_id, Utc::now());

        match self.repository.set(&record) {
            Ok(()) => {
                debug!("Lesson marked complete");
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to store completion");
                false
            }
        }
    }

    /// Share of a course's lessons the current learner finished, 0..=100.
    pub fn course_progress_percent(&self, course_id: &str) -> u8 {
        let Some(outline) = self.catalog.course_outline(course_id) else {
            return 0;
        };

        let lessons = outline.lessons();
        let completed = lessons
            .iter()
            .filter(|lesson| self.is_lesson_complete(&lesson.lesson_id))
            .count();

        percent(completed, lessons.len())
    }

    /// Share of a module's lessons the current learner finished, 0..=100.
    pub fn module_progress_percent(&self, course_id: &str, module_id: &str) -> u8 {
        let Some(outline) = self.catalog.course_outline(course_id) else {
            return 0;
        };

        let (completed, total) =
            outline
                .module_lessons(module_id)
                .fold((0, 0), |(completed, total), lesson| {
                    let done = usize::from(self.is_lesson_complete(&lesson.lesson_id));
                    (completed + done, total + 1)
                });

        percent(completed, total)
    }

    /// Lesson after `current_lesson_id`, locked or not.
    pub fn next_lesson(&self, course_id: &str, current_lesson_id: &str) -> Option<LessonRef> {
        self.catalog
            .course_outline(course_id)?
            .next(current_lesson_id)
            .cloned()
    }

    /// Lesson before `current_lesson_id`, locked or not.
    pub fn previous_lesson(&self, course_id: &str, current_lesson_id: &str) -> Option<LessonRef> {
        self.catalog
            .course_outline(course_id)?
            .previous(current_lesson_id)
            .cloned()
    }

    /// Stored records of `user_id` for the lessons of a course, in
    /// navigation order.
    pub fn course_progress(&self, user_id: &str, course_id: &str) -> Vec<CompletionRecord> {
        let Some(outline) = self.catalog.course_outline(course_id) else {
            return Vec::new();
        };

        outline
            .lessons()
            .iter()
            .filter_map(|lesson| self.record(user_id, &lesson.lesson_id))
            .map(|mut record| {
                if record.course_id.is_empty() {
                    record.course_id = course_id.to_string();
                }
                record
            })
            .collect()
    }

    fn record(&self, user_id: &str, lesson_id: &str) -> Option<CompletionRecord> {
        match self.repository.get(user_id, lesson_id) {
            Ok(record) => record,
            Err(e) => {
                warn!(user_id, lesson_id, error = %e, "Unreadable completion entry");
                None
            }
        }
    }
}

impl std::fmt::Debug for ProgressAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressAggregator")
            .field("user_id", &self.user_id)
            .finish_non_exhaustive()
    }
}

/// `round_half_up(100 * completed / total)`, 0 when there is nothing to
/// complete.
pub fn percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }

    let completed = completed.min(total);
    let rounded = (completed * 100 + total / 2) / total;
    u8::try_from(rounded).unwrap_or(100)
}
