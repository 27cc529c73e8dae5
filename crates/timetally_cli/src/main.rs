//! CLI smoke entry point.
//!
//! # Responsibility
//! - Render a canned task list through the Left Port, end to end.
//! - Keep output deterministic enough for quick local sanity checks.

use chrono::{Duration, Utc};
use timetally_core::{
    core_version, default_log_level, init_logging, StaticTaskRepository, SystemClock, Task,
    TimeTrackingService, WorkUnit,
};

fn sample_tasks() -> Vec<Task> {
    let day_start = Utc::now() - Duration::hours(3);

    vec![
        Task {
            id: "task-writeup".to_string(),
            title: "Write the release notes".to_string(),
            created_at: day_start,
            is_current: true,
            time_allowance_in_seconds: 2 * 3600,
            work_units: vec![
                WorkUnit::finished(day_start, day_start + Duration::minutes(50)),
                WorkUnit::open(day_start + Duration::hours(2)),
            ],
        },
        Task {
            id: "task-review".to_string(),
            title: "Review open pull requests".to_string(),
            created_at: day_start,
            is_current: false,
            time_allowance_in_seconds: 1800,
            work_units: vec![WorkUnit::finished(
                day_start + Duration::minutes(55),
                day_start + Duration::minutes(115),
            )],
        },
    ]
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let log_dir = std::env::temp_dir().join("timetally-logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("logging unavailable: {err}");
    }

    println!("timetally_core version={}", core_version());

    let service = TimeTrackingService::new(
        StaticTaskRepository::with_tasks(sample_tasks()),
        SystemClock,
    );

    match service.task_list().await {
        Ok(items) => {
            for item in items {
                let marker = if item.is_overtime { " OVERTIME" } else { "" };
                println!(
                    "{:<30} elapsed={} remaining={}{}",
                    item.title, item.elapsed_display, item.remaining_display, marker
                );
            }
        }
        Err(err) => eprintln!("task list unavailable: {err}"),
    }
}
