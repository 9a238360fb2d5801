//! Terminal UI helpers for task display.
//!
//! [`render`] is the plain text view; the rest uses colour and tables and
//! prints straight to the terminal.

#![allow(clippy::disallowed_macros)]

use colored::Colorize;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use crate::entities::{Priority, Status, Task, DEADLINE_DISPLAY_FORMAT};

/// Message shown for an empty result
pub const NO_TASKS: &str = "No tasks found.";

/// Render tasks as framed text blocks under a header
pub fn render(tasks: &[&Task]) -> String {
    if tasks.is_empty() {
        return NO_TASKS.to_string();
    }

    let mut out = String::from("Tasks found:");
    for task in tasks {
        out.push('\n');
        out.push_str(&task.to_string());
    }
    out
}

fn status_color(status: Status) -> Color {
    match status {
        Status::Done => Color::Green,
        Status::InWork => Color::Yellow,
    }
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::White,
        Priority::Low => Color::DarkGrey,
    }
}

/// Create a table for displaying tasks
pub fn task_table(tasks: &[&Task]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("ID").fg(Color::Cyan),
        Cell::new("Title").fg(Color::Cyan),
        Cell::new("Category").fg(Color::Cyan),
        Cell::new("Deadline").fg(Color::Cyan),
        Cell::new("Priority").fg(Color::Cyan),
        Cell::new("Status").fg(Color::Cyan),
    ]);

    for task in tasks {
        table.add_row(vec![
            Cell::new(task.id()),
            Cell::new(task.title()),
            Cell::new(task.category()),
            Cell::new(task.deadline().format(DEADLINE_DISPLAY_FORMAT)),
            Cell::new(task.priority()).fg(priority_color(task.priority())),
            Cell::new(task.status()).fg(status_color(task.status())),
        ]);
    }

    table
}

/// Print tasks as a table, or the empty-result message
pub fn print_table(tasks: &[&Task]) {
    if tasks.is_empty() {
        print_info(NO_TASKS);
    } else {
        println!("{}", task_table(tasks));
        print_info(&format!("{} task(s) total", tasks.len()));
    }
}

/// Print success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print error message
pub fn print_error(message: &str) {
    println!("{} {}", "✗".red().bold(), message);
}

/// Print info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn task(id: u64, title: &str) -> Task {
        Task::new(
            id,
            title,
            "Описание",
            "Работа",
            NaiveDate::from_ymd_opt(2030, 5, 1).unwrap(),
            Priority::Medium,
        )
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "No tasks found.");
    }

    #[test]
    fn test_render_keeps_order() {
        let first = task(1, "Первая");
        let second = task(2, "Вторая");

        let text = render(&[&second, &first]);

        assert!(text.starts_with("Tasks found:\n/*\n"));
        let second_at = text.find("Вторая").unwrap();
        let first_at = text.find("Первая").unwrap();
        assert!(second_at < first_at);
        assert!(text.contains("Deadline:    01.05.2030"));
        assert!(text.ends_with(" */"));
    }

    #[test]
    fn test_table_has_row_per_task() {
        let first = task(1, "Первая");
        let second = task(2, "Вторая");

        let rendered = task_table(&[&first, &second]).to_string();
        assert!(rendered.contains("Первая"));
        assert!(rendered.contains("Вторая"));
        assert!(rendered.contains("01.05.2030"));
    }
}
