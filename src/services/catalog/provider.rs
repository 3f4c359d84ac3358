use std::{collections::HashMap, fs, path::Path};

use tracing::{debug, instrument};

use super::{
    CatalogError, CourseOutline,
    types::{CatalogFixture, Course, Lesson, LessonKind, Module},
};

/// Read access to the course catalog
pub trait CatalogProvider: Send + Sync {
    /// Every course, in catalog order.
    fn courses(&self) -> &[Course];

    /// Course by id.
    fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses().iter().find(|course| course.id == course_id)
    }

    /// Course by URL slug.
    fn course_by_slug(&self, slug: &str) -> Option<&Course> {
        self.courses().iter().find(|course| course.slug == slug)
    }

    /// Lesson by id within a course.
    fn lesson(&self, course_id: &str, lesson_id: &str) -> Option<&Lesson> {
        self.course(course_id)
            .and_then(|course| course.find_lesson(lesson_id))
            .map(|(_, lesson)| lesson)
    }

    /// Validated navigation outline of a course.
    fn course_outline(&self, course_id: &str) -> Option<&CourseOutline>;
}

/// Catalog served from in-memory fixtures
#[derive(Debug, Clone)]
pub struct MockCatalog {
    courses: Vec<Course>,
    outlines: HashMap<String, CourseOutline>,
}

impl MockCatalog {
    /// Build a catalog, validating every course outline.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if a course id repeats or a course has
    /// ambiguous ordering.
    pub fn new(courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut outlines = HashMap::with_capacity(courses.len());
        for course in &courses {
            let outline = course.outline()?;
            if outlines.insert(course.id.clone(), outline).is_some() {
                return Err(CatalogError::DuplicateCourse(course.id.clone()));
            }
        }

        Ok(Self { courses, outlines })
    }

    /// Catalog loaded from a JSON fixture file (`{"courses": [...]}`).
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed, or
    /// fails validation.
    #[instrument]
    pub fn from_fixture(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Read {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let fixture: CatalogFixture =
            serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        debug!(courses = fixture.courses.len(), "Loaded catalog fixture");
        Self::new(fixture.courses)
    }

    /// The built-in sample course.
    pub fn sample() -> Self {
        let courses = vec![sample_course()];
        let outlines = courses
            .iter()
            .filter_map(|course| Some((course.id.clone(), course.outline().ok()?)))
            .collect();

        Self { courses, outlines }
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::sample()
    }
}

impl CatalogProvider for MockCatalog {
    fn courses(&self) -> &[Course] {
        &self.courses
    }

    fn course_outline(&self, course_id: &str) -> Option<&CourseOutline> {
        self.outlines.get(course_id)
    }
}

fn lesson(id: &str, order: u32, title: &str, kind: LessonKind, audio: bool) -> Lesson {
    Lesson {
        id: id.to_string(),
        order,
        title: title.to_string(),
        kind,
        duration: Some(format!("{} min", 5 + order * 3)),
        audio_url: audio.then(|| format!("/audio/objavuj-ai/{id}.mp3")),
        video_url: None,
    }
}

fn sample_course() -> Course {
    Course {
        id: "course-1".to_string(),
        slug: "objavuj-ai".to_string(),
        title: "Objavuj AI".to_string(),
        modules: vec![
            Module {
                id: "m1".to_string(),
                order: 1,
                title: "Úvod do AI".to_string(),
                is_free: true,
                is_locked: false,
                lessons: vec![
                    lesson("l1", 1, "Čo je umelá inteligencia", LessonKind::Video, true),
                    lesson("l2", 2, "Ako sa modely učia", LessonKind::Video, true),
                    lesson("l3", 3, "Prvý prompt", LessonKind::Interactive, true),
                ],
            },
            Module {
                id: "m2".to_string(),
                order: 2,
                title: "AI v praxi".to_string(),
                is_free: false,
                is_locked: true,
                lessons: vec![
                    lesson("l4", 1, "Nástroje na každý deň", LessonKind::Text, false),
                    lesson("l5", 2, "Kvíz", LessonKind::Quiz, false),
                ],
            },
        ],
    }
}
