#![allow(clippy::unwrap_used)]

use std::{fs, sync::Arc};

use chrono::{TimeZone, Utc};

use super::*;
use crate::services::catalog::{Course, Lesson, LessonKind, MockCatalog, Module};

fn lesson(id: &str, order: u32) -> Lesson {
    Lesson {
        id: id.to_string(),
        order,
        title: id.to_uppercase(),
        kind: LessonKind::Text,
        duration: None,
        audio_url: None,
        video_url: None,
    }
}

fn module(id: &str, order: u32, is_locked: bool, lessons: Vec<Lesson>) -> Module {
    Module {
        id: id.to_string(),
        order,
        title: id.to_uppercase(),
        is_free: !is_locked,
        is_locked,
        lessons,
    }
}

fn course(id: &str, modules: Vec<Module>) -> Course {
    Course {
        id: id.to_string(),
        slug: id.to_string(),
        title: id.to_uppercase(),
        modules,
    }
}

fn catalog() -> Arc<MockCatalog> {
    let courses = vec![
        course(
            "four",
            vec![
                module("m1", 1, false, vec![lesson("a1", 1), lesson("a2", 2)]),
                module("m2", 2, true, vec![lesson("b1", 1), lesson("b2", 2)]),
            ],
        ),
        course(
            "three",
            vec![module(
                "m3",
                1,
                false,
                vec![lesson("c1", 1), lesson("c2", 2), lesson("c3", 3)],
            )],
        ),
        course("empty", vec![module("m4", 1, false, Vec::new())]),
    ];

    Arc::new(MockCatalog::new(courses).unwrap())
}

fn aggregator() -> ProgressAggregator {
    ProgressAggregator::new("u1", Arc::new(MemoryRepository::new()), catalog())
}

struct FailingRepository;

impl CompletionRepository for FailingRepository {
    fn get(
        &self,
        _user_id: &str,
        _lesson_id: &str,
    ) -> Result<Option<CompletionRecord>, ProgressError> {
        Err(ProgressError::Storage {
            path: "unavailable".into(),
            details: "storage disabled".to_string(),
        })
    }

    fn set(&self, _record: &CompletionRecord) -> Result<(), ProgressError> {
        Err(ProgressError::Storage {
            path: "unavailable".into(),
            details: "quota exceeded".to_string(),
        })
    }
}

mod percentages {
    use super::*;

    #[test]
    fn rounds_half_up() {
        assert_eq!(percent(1, 4), 25);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(3, 3), 100);
    }

    #[test]
    fn zero_total_is_zero() {
        assert_eq!(percent(0, 0), 0);
    }

    #[test]
    fn one_of_four_is_25() {
        let progress = aggregator();
        progress.mark_lesson_complete("u1", "four", "a1");

        assert_eq!(progress.course_progress_percent("four"), 25);
    }

    #[test]
    fn two_of_three_is_67() {
        let progress = aggregator();
        progress.mark_lesson_complete("u1", "three", "c1");
        progress.mark_lesson_complete("u1", "three", "c3");

        assert_eq!(progress.course_progress_percent("three"), 67);
    }

    #[test]
    fn course_without_lessons_is_zero() {
        assert_eq!(aggregator().course_progress_percent("empty"), 0);
    }

    #[test]
    fn unknown_course_or_module_is_zero() {
        let progress = aggregator();

        assert_eq!(progress.course_progress_percent("nope"), 0);
        assert_eq!(progress.module_progress_percent("four", "nope"), 0);
    }

    #[test]
    fn module_progress_counts_only_its_lessons() {
        let progress = aggregator();
        progress.mark_lesson_complete("u1", "four", "a1");
        progress.mark_lesson_complete("u1", "four", "a2");

        assert_eq!(progress.module_progress_percent("four", "m1"), 100);
        assert_eq!(progress.module_progress_percent("four", "m2"), 0);
        assert_eq!(progress.course_progress_percent("four"), 50);
    }

    #[test]
    fn other_users_do_not_count() {
        let progress = aggregator();
        progress.mark_lesson_complete("u2", "four", "a1");

        assert_eq!(progress.course_progress_percent("four"), 0);
        assert_eq!(progress.for_user("u2").course_progress_percent("four"), 25);
    }
}

mod completion {
    use super::*;

    #[test]
    fn marking_is_idempotent() {
        let progress = aggregator();

        assert!(progress.mark_lesson_complete("u1", "four", "a1"));
        assert!(progress.mark_lesson_complete("u1", "four", "a1"));
        assert!(progress.mark_lesson_complete("u1", "four", "a1"));

        let records = progress.course_progress("u1", "four");
        assert_eq!(records.len(), 1);
        assert!(records[0].is_completed);
        assert_eq!(records[0].progress_percent, 100);
        assert!(records[0].completed_at.is_some());
        assert!(progress.is_lesson_complete("a1"));
    }

    #[test]
    fn unmarked_lesson_is_incomplete() {
        assert!(!aggregator().is_lesson_complete("a1"));
    }

    #[test]
    fn write_failure_returns_false() {
        let progress = ProgressAggregator::new("u1", Arc::new(FailingRepository), catalog());

        assert!(!progress.mark_lesson_complete("u1", "four", "a1"));
    }

    #[test]
    fn read_failure_degrades_to_defaults() {
        let progress = ProgressAggregator::new("u1", Arc::new(FailingRepository), catalog());

        assert!(!progress.is_lesson_complete("a1"));
        assert_eq!(progress.course_progress_percent("four"), 0);
        assert!(progress.course_progress("u1", "four").is_empty());
    }

    #[test]
    fn course_progress_lists_records_in_navigation_order() {
        let progress = aggregator();
        progress.mark_lesson_complete("u1", "four", "b2");
        progress.mark_lesson_complete("u1", "four", "a1");
        progress.mark_lesson_complete("u1", "three", "c1");

        let lessons: Vec<_> = progress
            .course_progress("u1", "four")
            .into_iter()
            .map(|record| record.lesson_id)
            .collect();
        assert_eq!(lessons, ["a1", "b2"]);
    }
}

mod navigation {
    use super::*;

    #[test]
    fn next_crosses_into_locked_module() {
        let next = aggregator().next_lesson("four", "a2").unwrap();

        assert_eq!(next.lesson_id, "b1");
        assert_eq!(next.module_id, "m2");
        assert!(next.is_locked);
    }

    #[test]
    fn previous_crosses_back() {
        let previous = aggregator().previous_lesson("four", "b1").unwrap();

        assert_eq!(previous.lesson_id, "a2");
        assert!(!previous.is_locked);
    }

    #[test]
    fn course_boundaries_have_no_neighbour() {
        let progress = aggregator();

        assert!(progress.next_lesson("four", "b2").is_none());
        assert!(progress.previous_lesson("four", "a1").is_none());
    }

    #[test]
    fn unknown_ids_have_no_neighbour() {
        let progress = aggregator();

        assert!(progress.next_lesson("nope", "a1").is_none());
        assert!(progress.next_lesson("four", "nope").is_none());
    }

    #[test]
    fn duplicate_lesson_order_is_rejected_every_time() {
        let ambiguous = course(
            "dup",
            vec![module("m1", 1, false, vec![lesson("x1", 1), lesson("x2", 1)])],
        );

        for _ in 0..3 {
            let result = MockCatalog::new(vec![ambiguous.clone()]);
            assert!(result.is_err());
        }
    }
}

mod file_repository {
    use super::*;

    fn record(lesson_id: &str) -> CompletionRecord {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        CompletionRecord::completed("u1", "four", lesson_id, at)
    }

    #[test]
    fn stores_one_prefixed_file_per_lesson() {
        let dir = tempfile::tempdir().unwrap();
        let repository = FileRepository::new(dir.path());

        repository.set(&record("a1")).unwrap();

        let path = dir.path().join("u1").join("progress_mock_a1.json");
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["completed"], true);
        assert_eq!(value["courseId"], "four");
        assert_eq!(value["progressPercent"], 100);
        assert_eq!(value["completedAt"], "2026-03-01T12:00:00Z");
    }

    #[test]
    fn reads_back_what_it_wrote() {
        let dir = tempfile::tempdir().unwrap();
        let repository = FileRepository::with_prefix(dir.path(), "p_");

        repository.set(&record("a1")).unwrap();

        assert_eq!(repository.get("u1", "a1").unwrap(), Some(record("a1")));
        assert_eq!(repository.get("u1", "a2").unwrap(), None);
        assert_eq!(repository.get("u2", "a1").unwrap(), None);
    }

    #[test]
    fn reads_entries_without_optional_fields() {
        let dir = tempfile::tempdir().unwrap();
        let repository = FileRepository::new(dir.path());
        let path = repository.entry_path("u1", "a1");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            r#"{"completed": true, "completedAt": "2026-03-01T12:00:00Z"}"#,
        )
        .unwrap();

        let stored = repository.get("u1", "a1").unwrap().unwrap();

        assert!(stored.is_completed);
        assert_eq!(stored.progress_percent, 100);
        assert_eq!(stored.course_id, "");
    }

    #[test]
    fn malformed_entry_reads_as_not_completed() {
        let dir = tempfile::tempdir().unwrap();
        let repository = Arc::new(FileRepository::new(dir.path()));
        let path = repository.entry_path("u1", "a1");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            repository.get("u1", "a1"),
            Err(ProgressError::Corrupt { .. })
        ));

        let progress = ProgressAggregator::new("u1", repository, catalog());
        assert!(!progress.is_lesson_complete("a1"));
    }

    #[test]
    fn any_id_round_trips_inside_the_root() {
        let dir = tempfile::tempdir().unwrap();
        let repository = FileRepository::new(dir.path());
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();

        for (user_id, lesson_id) in [
            ("alice@example.com", "a1"),
            ("user.1", "a1"),
            ("..", "../a1"),
            ("../x", "a/b"),
            ("u1", "a1.json"),
            ("", ""),
        ] {
            let written = CompletionRecord::completed(user_id, "four", lesson_id, at);
            repository.set(&written).unwrap();

            let path = repository.entry_path(user_id, lesson_id);
            assert!(path.is_file(), "{path:?}");
            assert!(path.starts_with(dir.path()));
            assert!(!path.components().any(|c| c == std::path::Component::ParentDir));

            assert_eq!(repository.get(user_id, lesson_id).unwrap(), Some(written));
        }

        assert_eq!(repository.get("u1", "a1").unwrap(), None);
        assert_ne!(
            repository.entry_path("u1", "a1.json"),
            repository.entry_path("u1", "a1%2Ejson")
        );
    }

    #[test]
    fn lesson_ids_are_keyed_without_the_course() {
        let repository = MemoryRepository::new();
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();

        repository
            .set(&CompletionRecord::completed("u1", "four", "a1", at))
            .unwrap();
        repository
            .set(&CompletionRecord::completed("u1", "three", "a1", at))
            .unwrap();

        let stored = repository.get("u1", "a1").unwrap().unwrap();
        assert_eq!(stored.course_id, "three");
    }

    #[test]
    fn email_user_ids_complete_lessons() {
        let dir = tempfile::tempdir().unwrap();
        let repository = Arc::new(FileRepository::new(dir.path()));
        let progress = ProgressAggregator::new("alice@example.com", repository, catalog());

        assert!(progress.mark_lesson_complete("alice@example.com", "four", "a1"));
        assert!(progress.is_lesson_complete("a1"));
        assert!(dir.path().join("alice%40example%2Ecom").is_dir());
    }

    #[test]
    fn unwritable_root_fails_the_mark() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();
        let repository = Arc::new(FileRepository::new(&blocker));

        let progress = ProgressAggregator::new("u1", repository, catalog());

        assert!(!progress.mark_lesson_complete("u1", "four", "a1"));
    }
}
