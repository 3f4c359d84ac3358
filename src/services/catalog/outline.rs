use std::collections::HashSet;

/// Errors raised while building a course outline
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum OutlineError {
    /// Two modules of the same course share an order value
    #[error("course '{course_id}' has modules '{first}' and '{second}' with order {order}")]
    DuplicateModuleOrder {
        /// Course being built
        course_id: String,
        /// Module that claimed the order first
        first: String,
        /// Module that repeated it
        second: String,
        /// The repeated order
        order: u32,
    },

    /// Two lessons of the same module share an order value
    #[error("module '{module_id}' has lessons '{first}' and '{second}' with order {order}")]
    DuplicateLessonOrder {
        /// Module being built
        module_id: String,
        /// Lesson that claimed the order first
        first: String,
        /// Lesson that repeated it
        second: String,
        /// The repeated order
        order: u32,
    },

    /// A lesson id appears more than once in the course
    #[error("course '{course_id}' lists lesson '{lesson_id}' more than once")]
    DuplicateLesson {
        /// Course being built
        course_id: String,
        /// The repeated lesson
        lesson_id: String,
    },
}

/// A lesson's place in a course, as navigation sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonRef {
    /// Module containing the lesson.
    pub module_id: String,
    /// The lesson.
    pub lesson_id: String,
    /// Whether the containing module is locked.
    pub is_locked: bool,
}

/// Input shape for one module of an outline
#[derive(Debug, Clone)]
pub struct ModuleOutline {
    /// Module id.
    pub id: String,
    /// Position among the course's modules.
    pub order: u32,
    /// Whether the module is locked for the learner.
    pub is_locked: bool,
    /// `(lesson id, order)` pairs, in any order.
    pub lessons: Vec<(String, u32)>,
}

/// Validated, ordered navigation view of a course
///
/// Lessons are laid out by `(module order, lesson order)`. Order values
/// must be unique within their scope; construction fails otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseOutline {
    course_id: String,
    lessons: Vec<LessonRef>,
}

impl CourseOutline {
    /// Build and validate an outline.
    ///
    /// # Errors
    ///
    /// Returns `OutlineError` if module orders repeat within the course,
    /// lesson orders repeat within a module, or a lesson id repeats.
    pub fn new(
        course_id: impl Into<String>,
        mut modules: Vec<ModuleOutline>,
    ) -> Result<Self, OutlineError> {
        let course_id = course_id.into();

        modules.sort_by_key(|module| module.order);
        for pair in modules.windows(2) {
            if pair[0].order == pair[1].order {
                return Err(OutlineError::DuplicateModuleOrder {
                    course_id,
                    first: pair[0].id.clone(),
                    second: pair[1].id.clone(),
                    order: pair[0].order,
                });
            }
        }

        let mut seen = HashSet::new();
        let mut lessons = Vec::new();

        for mut module in modules {
            module.lessons.sort_by_key(|(_, order)| *order);
            for pair in module.lessons.windows(2) {
                if pair[0].1 == pair[1].1 {
                    return Err(OutlineError::DuplicateLessonOrder {
                        module_id: module.id,
                        first: pair[0].0.clone(),
                        second: pair[1].0.clone(),
                        order: pair[0].1,
                    });
                }
            }

            for (lesson_id, _) in module.lessons {
                if !seen.insert(lesson_id.clone()) {
                    return Err(OutlineError::DuplicateLesson {
                        course_id,
                        lesson_id,
                    });
                }
                lessons.push(LessonRef {
                    module_id: module.id.clone(),
                    lesson_id,
                    is_locked: module.is_locked,
                });
            }
        }

        Ok(Self { course_id, lessons })
    }

    /// Course this outline belongs to.
    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    /// Every lesson in navigation order.
    pub fn lessons(&self) -> &[LessonRef] {
        &self.lessons
    }

    /// Lessons of one module, in order.
    pub fn module_lessons<'a>(&'a self, module_id: &'a str) -> impl Iterator<Item = &'a LessonRef> {
        self.lessons
            .iter()
            .filter(move |lesson| lesson.module_id == module_id)
    }

    /// Whether the outline contains `lesson_id`.
    pub fn contains(&self, lesson_id: &str) -> bool {
        self.position(lesson_id).is_some()
    }

    /// The lesson after `lesson_id`, crossing module boundaries.
    pub fn next(&self, lesson_id: &str) -> Option<&LessonRef> {
        self.position(lesson_id)
            .and_then(|index| self.lessons.get(index + 1))
    }

    /// The lesson before `lesson_id`, crossing module boundaries.
    pub fn previous(&self, lesson_id: &str) -> Option<&LessonRef> {
        self.position(lesson_id)
            .and_then(|index| index.checked_sub(1))
            .and_then(|index| self.lessons.get(index))
    }

    fn position(&self, lesson_id: &str) -> Option<usize> {
        self.lessons
            .iter()
            .position(|lesson| lesson.lesson_id == lesson_id)
    }
}
