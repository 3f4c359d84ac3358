use std::fmt;

use serde::{Deserialize, Serialize};

use super::outline::{CourseOutline, ModuleOutline, OutlineError};

/// Kind of content a lesson delivers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    /// Video or audio lesson.
    Video,
    /// Reading.
    Text,
    /// Quiz.
    Quiz,
    /// Hands-on exercise.
    Interactive,
    /// Larger assignment.
    Project,
}

impl fmt::Display for LessonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Video => "video",
            Self::Text => "text",
            Self::Quiz => "quiz",
            Self::Interactive => "interactive",
            Self::Project => "project",
        };
        f.write_str(kind)
    }
}

/// Smallest unit of content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    /// Lesson id, unique within the catalog.
    pub id: String,
    /// Position within the module.
    pub order: u32,
    /// Display title.
    pub title: String,
    /// Content kind.
    #[serde(rename = "type")]
    pub kind: LessonKind,
    /// Human-readable length, e.g. `12 min`.
    #[serde(default)]
    pub duration: Option<String>,
    /// Audio stream for the lesson player.
    #[serde(default)]
    pub audio_url: Option<String>,
    /// Embed URL; played by the embedding page, not the controller.
    #[serde(default)]
    pub video_url: Option<String>,
}

/// Ordered group of lessons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// Module id.
    pub id: String,
    /// Position within the course.
    pub order: u32,
    /// Display title.
    pub title: String,
    /// Open without purchase.
    #[serde(default)]
    pub is_free: bool,
    /// Not yet available to the learner.
    #[serde(default)]
    pub is_locked: bool,
    /// Lessons, in any order.
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

/// A course and its modules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Course id.
    pub id: String,
    /// URL slug.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Modules, in any order.
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl Course {
    /// Navigation outline of this course.
    ///
    /// # Errors
    ///
    /// Returns `OutlineError` if order values collide.
    pub fn outline(&self) -> Result<CourseOutline, OutlineError> {
        let modules = self
            .modules
            .iter()
            .map(|module| ModuleOutline {
                id: module.id.clone(),
                order: module.order,
                is_locked: module.is_locked,
                lessons: module
                    .lessons
                    .iter()
                    .map(|lesson| (lesson.id.clone(), lesson.order))
                    .collect(),
            })
            .collect();

        CourseOutline::new(self.id.clone(), modules)
    }

    /// Total number of lessons across modules.
    pub fn lesson_count(&self) -> usize {
        self.modules.iter().map(|module| module.lessons.len()).sum()
    }

    /// Find a lesson and the module containing it.
    pub fn find_lesson(&self, lesson_id: &str) -> Option<(&Module, &Lesson)> {
        self.modules.iter().find_map(|module| {
            module
                .lessons
                .iter()
                .find(|lesson| lesson.id == lesson_id)
                .map(|lesson| (module, lesson))
        })
    }
}

/// JSON fixture layout: `{"courses": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct CatalogFixture {
    pub courses: Vec<Course>,
}
