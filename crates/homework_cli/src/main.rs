//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `homework_core` linkage independently from any UI runtime.
//! - Run the one-shot initial load with demo rows and print the grouped view.
//!
//! # Environment
//! - `HOMEWORK_LOG_DIR`: absolute directory; enables file logging when set.
//! - `HOMEWORK_LOG_LEVEL`: overrides the build-mode default level.

use homework_core::{
    core_version, default_log_level, init_logging, ping, HomeworkDraft, HomeworkItem,
    HomeworkStore, HomeworkValidationError,
};
use log::info;
use std::process::ExitCode;

const DUE_LABEL_FORMAT: &str = "%b %d, %Y";

fn main() -> ExitCode {
    println!("homework_core ping={}", ping());
    println!("homework_core version={}", core_version());

    if let Err(message) = init_logging_from_env() {
        eprintln!("logging disabled: {message}");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("initial load failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), HomeworkValidationError> {
    let mut store = HomeworkStore::new();
    let seeded = store.seed(demo_homework())?;
    info!("event=initial_load module=cli status=ok seeded={}", seeded.len());

    for (subject, items) in store.list_by_subject() {
        println!();
        println!("{subject}");
        if items.is_empty() {
            println!("  No homework assigned for {subject}");
        }
        for item in &items {
            println!("  {}", render_item(item));
        }
    }
    Ok(())
}

fn init_logging_from_env() -> Result<(), String> {
    let Ok(log_dir) = std::env::var("HOMEWORK_LOG_DIR") else {
        return Ok(());
    };
    let level = std::env::var("HOMEWORK_LOG_LEVEL")
        .unwrap_or_else(|_| default_log_level().to_string());
    init_logging(&level, &log_dir).map_err(|err| err.to_string())
}

fn render_item(item: &HomeworkItem) -> String {
    format!(
        "[{}] {} (Due: {})",
        item.id(),
        item.task(),
        item.due_date().format(DUE_LABEL_FORMAT)
    )
}

fn demo_homework() -> Vec<HomeworkDraft> {
    vec![
        HomeworkDraft::new("Maths", "Complete exercises 1-10 on page 45", "2023-06-15"),
        HomeworkDraft::new("English", "Write a summary of Chapter 3", "2023-06-18"),
        HomeworkDraft::new(
            "Social",
            "Prepare for chapter test on Ancient Civilizations",
            "2023-06-20",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::{demo_homework, render_item};
    use homework_core::{HomeworkStore, Subject};

    #[test]
    fn demo_rows_are_valid() {
        assert!(demo_homework().iter().all(|draft| draft.is_submittable()));
    }

    #[test]
    fn render_item_uses_short_month_label() {
        let mut store = HomeworkStore::new();
        let seeded = store.seed(demo_homework()).unwrap();
        let rendered = render_item(&seeded[0]);
        assert!(rendered.ends_with("(Due: Jun 15, 2023)"), "{rendered}");
        assert_eq!(seeded[0].subject(), Subject::Maths);
    }
}
