//! End-to-end generation scenarios through the local repository.

use std::sync::Arc;

use chrono::NaiveTime;

use registrar_rust::db::repositories::LocalRepository;
use registrar_rust::db::repository::ScheduleRepository;
use registrar_rust::engine::conflicts;
use registrar_rust::models::{
    parse_cart_json_str, CourseId, CourseSelection, Day, DaySet, Section, SectionId, UserId,
};
use registrar_rust::services::{GenerationError, GenerationService};

fn section(id: i64, days: &[Day], start: (u32, u32), end: (u32, u32)) -> Section {
    Section::new(
        SectionId::new(id),
        DaySet::of(days),
        NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
        NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
    )
    .unwrap()
}

fn course(id: i64, sections: Vec<Section>) -> CourseSelection {
    CourseSelection::new(CourseId::new(id), sections)
}

fn service(repo: &LocalRepository) -> GenerationService {
    GenerationService::new(Arc::new(repo.clone()))
}

#[tokio::test]
async fn test_product_law_without_conflicts() {
    // Course A has 2 candidates, B has 3, C has 1, none conflicting: 6 schedules.
    let repo = LocalRepository::new();
    let user = UserId(1);
    repo.set_cart(
        user,
        vec![
            course(
                1,
                vec![
                    section(11, &[Day::Monday], (9, 0), (10, 0)),
                    section(12, &[Day::Monday], (10, 30), (11, 30)),
                ],
            ),
            course(
                2,
                vec![
                    section(21, &[Day::Tuesday], (9, 0), (10, 0)),
                    section(22, &[Day::Tuesday], (10, 30), (11, 30)),
                    section(23, &[Day::Tuesday], (12, 0), (13, 0)),
                ],
            ),
            course(3, vec![section(31, &[Day::Wednesday], (9, 0), (10, 0))]),
        ],
    );

    let schedules = service(&repo).generate_schedules(user).await.unwrap();
    assert_eq!(schedules.len(), 6);

    // No-conflict invariant: every pair within every schedule is compatible.
    for schedule in &schedules {
        assert_eq!(schedule.sections.len(), 3);
        for (i, a) in schedule.sections.iter().enumerate() {
            for b in schedule.sections.iter().skip(i + 1) {
                assert!(!conflicts(a, b), "{} and {} conflict", a, b);
            }
        }
    }
}

#[tokio::test]
async fn test_scenario_shared_days_with_free_times() {
    // A1/A2 meet Mon+Wed at different hours; B1 meets Tue+Thu. Both A
    // candidates pair with B1: 2 schedules.
    let repo = LocalRepository::new();
    let user = UserId(1);
    repo.set_cart(
        user,
        vec![
            course(
                1,
                vec![
                    section(11, &[Day::Monday, Day::Wednesday], (9, 0), (10, 0)),
                    section(12, &[Day::Monday, Day::Wednesday], (10, 0), (11, 0)),
                ],
            ),
            course(
                2,
                vec![section(21, &[Day::Tuesday, Day::Thursday], (9, 0), (10, 0))],
            ),
        ],
    );

    let schedules = service(&repo).generate_schedules(user).await.unwrap();

    let listed: Vec<Vec<i64>> = schedules
        .iter()
        .map(|s| s.section_ids().iter().map(|id| id.value()).collect())
        .collect();
    assert_eq!(listed, vec![vec![11, 21], vec![12, 21]]);
}

#[tokio::test]
async fn test_scenario_overlap_on_shared_day() {
    // Mon 09:00-10:00 vs Mon 09:30-10:30: every pairing conflicts.
    let repo = LocalRepository::new();
    let user = UserId(1);
    repo.set_cart(
        user,
        vec![
            course(1, vec![section(11, &[Day::Monday], (9, 0), (10, 0))]),
            course(2, vec![section(21, &[Day::Monday], (9, 30), (10, 30))]),
        ],
    );

    let schedules = service(&repo).generate_schedules(user).await.unwrap();
    assert!(schedules.is_empty());
}

#[tokio::test]
async fn test_scenario_back_to_back_sections() {
    // Mon 09:00-10:00 vs Mon 10:00-11:00: the inclusive boundary makes the
    // touching sections conflict, so no schedule exists.
    let repo = LocalRepository::new();
    let user = UserId(1);
    repo.set_cart(
        user,
        vec![
            course(1, vec![section(11, &[Day::Monday], (9, 0), (10, 0))]),
            course(2, vec![section(21, &[Day::Monday], (10, 0), (11, 0))]),
        ],
    );

    let schedules = service(&repo).generate_schedules(user).await.unwrap();
    assert!(schedules.is_empty());

    // The run still cleared whatever was there before.
    assert!(repo.get_schedules(user).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_generation_is_idempotent_for_unchanged_cart() {
    let repo = LocalRepository::new();
    let user = UserId(1);
    repo.set_cart(
        user,
        vec![
            course(
                1,
                vec![
                    section(11, &[Day::Monday], (9, 0), (10, 0)),
                    section(12, &[Day::Monday], (10, 30), (11, 30)),
                ],
            ),
            course(2, vec![section(21, &[Day::Friday], (9, 0), (10, 0))]),
        ],
    );

    let svc = service(&repo);
    let first = svc.generate_schedules(user).await.unwrap();
    let second = svc.generate_schedules(user).await.unwrap();

    assert_eq!(first.len(), second.len());

    // Same section-ID lists per schedule, in the same order; the assigned
    // schedule IDs differ because the set was recreated.
    let first_sections: Vec<Vec<SectionId>> = first.iter().map(|s| s.section_ids()).collect();
    let second_sections: Vec<Vec<SectionId>> = second.iter().map(|s| s.section_ids()).collect();
    assert_eq!(first_sections, second_sections);

    // Only the second run's schedules remain stored.
    let stored = repo.get_schedules(user).await.unwrap();
    assert_eq!(stored, second);
    assert_eq!(repo.schedule_count(), second.len());
}

#[tokio::test]
async fn test_empty_cart_clears_previous_schedules() {
    let repo = LocalRepository::new();
    let user = UserId(1);
    repo.add_user(user);

    repo.create_schedule(user, &[section(99, &[Day::Monday], (9, 0), (10, 0))])
        .await
        .unwrap();

    let schedules = service(&repo).generate_schedules(user).await.unwrap();

    // Zero eligible courses: exactly one combination, the empty one.
    assert_eq!(schedules.len(), 1);
    assert!(schedules[0].sections.is_empty());

    let stored = repo.get_schedules(user).await.unwrap();
    assert_eq!(stored, schedules);
}

#[tokio::test]
async fn test_unknown_user_is_an_error() {
    let repo = LocalRepository::new();
    let result = service(&repo).generate_schedules(UserId(404)).await;
    assert!(matches!(result, Err(GenerationError::UserNotFound(_))));
}

#[tokio::test]
async fn test_generation_from_cart_snapshot_json() {
    // The same two-course cart as the shared-days scenario, arriving through
    // the snapshot adapter instead of hand-built values.
    let snapshot = r#"{
        "courses": [
            {
                "course_id": 1,
                "sections": [
                    { "id": 11, "days_of_week": 5, "start_time": "09:00:00", "end_time": "10:00:00" },
                    { "id": 12, "days_of_week": 5, "start_time": "10:00:00", "end_time": "11:00:00" }
                ]
            },
            {
                "course_id": 2,
                "sections": [
                    { "id": 21, "days_of_week": 10, "start_time": "09:00:00", "end_time": "10:00:00" }
                ]
            }
        ]
    }"#;

    let cart = parse_cart_json_str(snapshot).unwrap();
    assert!(!cart.checksum.is_empty());

    let repo = LocalRepository::new();
    let user = UserId(1);
    repo.set_cart(user, cart.selections);

    let schedules = service(&repo).generate_schedules(user).await.unwrap();
    let listed: Vec<Vec<i64>> = schedules
        .iter()
        .map(|s| s.section_ids().iter().map(|id| id.value()).collect())
        .collect();
    assert_eq!(listed, vec![vec![11, 21], vec![12, 21]]);
}

#[tokio::test]
async fn test_mixed_cart_with_partial_conflicts() {
    // Three courses; one candidate of course 2 collides with course 1 and
    // one candidate of course 3 collides with course 2's survivor.
    let repo = LocalRepository::new();
    let user = UserId(1);
    repo.set_cart(
        user,
        vec![
            course(
                1,
                vec![section(11, &[Day::Monday, Day::Wednesday], (9, 0), (10, 30))],
            ),
            course(
                2,
                vec![
                    section(21, &[Day::Wednesday], (10, 0), (11, 0)),
                    section(22, &[Day::Tuesday, Day::Thursday], (10, 0), (11, 0)),
                ],
            ),
            course(
                3,
                vec![
                    section(31, &[Day::Thursday], (10, 30), (11, 30)),
                    section(32, &[Day::Friday], (10, 30), (11, 30)),
                ],
            ),
        ],
    );

    let schedules = service(&repo).generate_schedules(user).await.unwrap();

    let listed: Vec<Vec<i64>> = schedules
        .iter()
        .map(|s| s.section_ids().iter().map(|id| id.value()).collect())
        .collect();
    assert_eq!(listed, vec![vec![11, 22, 32]]);
}
