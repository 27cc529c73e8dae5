use chrono::{DateTime, Duration, TimeZone, Utc};
use timetally_core::{
    FetchError, InvalidTaskPolicy, ManualClock, StaticTaskRepository, Task, TaskListError,
    TaskValidationError, TimeTrackingService, WorkUnit,
};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 12, 9, 0, 0).unwrap()
}

fn task(id: &str, title: &str, allowance: i64, work_units: Vec<WorkUnit>) -> Task {
    let is_current = work_units.iter().any(|unit| unit.is_open());
    Task {
        id: id.to_string(),
        title: title.to_string(),
        created_at: t0(),
        is_current,
        time_allowance_in_seconds: allowance,
        work_units,
    }
}

fn two_open_units_task(id: &str) -> Task {
    let mut bad = task(
        id,
        "Doubly started task",
        600,
        vec![
            WorkUnit::open(t0()),
            WorkUnit::open(t0() + Duration::seconds(60)),
        ],
    );
    bad.is_current = true;
    bad
}

#[tokio::test]
async fn rows_preserve_repository_order_and_share_one_now() {
    let repo = StaticTaskRepository::with_tasks(vec![
        task(
            "task-b",
            "Second in repo order",
            7200,
            vec![WorkUnit::open(t0())],
        ),
        task(
            "task-a",
            "First finished task",
            3600,
            vec![WorkUnit::finished(t0(), t0() + Duration::seconds(3600))],
        ),
        task(
            "task-c",
            "Another running task",
            60,
            vec![WorkUnit::open(t0() + Duration::seconds(600))],
        ),
    ]);
    let clock = ManualClock::starting_at(t0() + Duration::seconds(1800));
    let service = TimeTrackingService::new(repo, clock);

    let items = service.task_list().await.unwrap();

    let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, ["task-b", "task-a", "task-c"]);

    // All rows reflect the same sampled instant: 1800s for the first open
    // task, 1200s for the one started 600s later.
    assert_eq!(items[0].elapsed_display, "00:30:00");
    assert_eq!(items[1].elapsed_display, "01:00:00");
    assert_eq!(items[2].elapsed_display, "00:20:00");
    assert!(items[2].is_overtime);
    assert_eq!(items[2].remaining_display, "-00:19:00");
}

#[tokio::test]
async fn elapsed_advances_with_the_injected_clock() {
    let repo =
        StaticTaskRepository::with_tasks(vec![task("task-live", "Running task", 3600, vec![
            WorkUnit::open(t0()),
        ])]);
    let clock = ManualClock::starting_at(t0() + Duration::seconds(10));
    let service = TimeTrackingService::new(repo, clock.clone());

    let before = service.task_list().await.unwrap();
    assert_eq!(before[0].elapsed_display, "00:00:10");

    clock.advance(Duration::seconds(50));
    let after = service.task_list().await.unwrap();
    assert_eq!(after[0].elapsed_display, "00:01:00");
}

#[tokio::test]
async fn invalid_task_is_skipped_and_valid_tasks_still_render() {
    let repo = StaticTaskRepository::with_tasks(vec![
        task(
            "task-good-1",
            "Valid task",
            600,
            vec![WorkUnit::finished(t0(), t0() + Duration::seconds(60))],
        ),
        two_open_units_task("task-bad"),
        task("task-good-2", "Another valid task", 600, Vec::new()),
    ]);
    let service = TimeTrackingService::new(repo, ManualClock::starting_at(t0()));

    let report = service.task_list_with_report().await.unwrap();

    let ids: Vec<&str> = report.items.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, ["task-good-1", "task-good-2"]);

    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].id, "task-bad");
    assert_eq!(
        report.rejected[0].error,
        TaskValidationError::MultipleOpenWorkUnits { open_count: 2 }
    );
}

#[tokio::test]
async fn strict_policy_fails_the_whole_call_on_first_invalid_task() {
    let repo = StaticTaskRepository::with_tasks(vec![
        task("task-good", "Valid task", 600, Vec::new()),
        two_open_units_task("task-bad"),
    ]);
    let service = TimeTrackingService::with_policy(
        repo,
        ManualClock::starting_at(t0()),
        InvalidTaskPolicy::Fail,
    );

    let err = service.task_list().await.unwrap_err();
    assert_eq!(
        err,
        TaskListError::InvalidTask {
            id: "task-bad".to_string(),
            error: TaskValidationError::MultipleOpenWorkUnits { open_count: 2 },
        }
    );
}

#[tokio::test]
async fn fetch_failure_yields_fetch_error_and_no_rows() {
    let repo = StaticTaskRepository::failing(FetchError::Transport("backend unreachable".into()));
    let service = TimeTrackingService::new(repo, ManualClock::starting_at(t0()));

    let err = service.task_list().await.unwrap_err();
    assert_eq!(
        err,
        TaskListError::Fetch(FetchError::Transport("backend unreachable".to_string()))
    );
}

#[tokio::test]
async fn cancelled_fetch_propagates_as_fetch_error() {
    let repo = StaticTaskRepository::with_tasks(vec![task(
        "task-any",
        "Soon unavailable",
        600,
        Vec::new(),
    )]);
    let service = TimeTrackingService::new(repo.clone(), ManualClock::starting_at(t0()));

    assert_eq!(service.task_list().await.unwrap().len(), 1);

    repo.set_outcome(Err(FetchError::Cancelled));
    let err = service.task_list().await.unwrap_err();
    assert_eq!(err, TaskListError::Fetch(FetchError::Cancelled));
}

#[tokio::test]
async fn empty_repository_yields_empty_list() {
    let repo = StaticTaskRepository::with_tasks(Vec::new());
    let service = TimeTrackingService::new(repo, ManualClock::starting_at(t0()));

    let report = service.task_list_with_report().await.unwrap();
    assert!(report.items.is_empty());
    assert!(report.rejected.is_empty());
}
