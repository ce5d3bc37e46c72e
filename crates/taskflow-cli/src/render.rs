//! Rendering board contents as text listings or JSON.

use clap::ValueEnum;
use serde::Deserialize;

use taskflow_core::{BoardSnapshot, Task, TaskId, TaskView};

use crate::errors::Result;

/// How board listings are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// The three visible stores, in store order.
pub fn render_board(snapshot: &BoardSnapshot, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(snapshot.to_json()?),
        OutputFormat::Text => {
            let mut out = String::new();
            write_section(&mut out, "Pending", &snapshot.pending);
            write_section(&mut out, "In progress", &snapshot.in_progress);
            write_section(&mut out, "Completed", &snapshot.completed);
            Ok(out)
        }
    }
}

/// Every task ever created, ascending priority, with its status.
///
/// JSON output is an array of task views.
pub fn render_priority(tasks: &[&Task], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let views: Vec<TaskView> = tasks.iter().copied().map(TaskView::from).collect();
            Ok(serde_json::to_string_pretty(&views)? + "\n")
        }
        OutputFormat::Text => {
            let mut out = String::from("By priority:\n");
            if tasks.is_empty() {
                out.push_str("  (empty)\n");
            }
            for task in tasks {
                out.push_str(&format!(
                    "  {} ({})\n",
                    entry(task.id(), task.description(), task.priority()),
                    task.status()
                ));
            }
            Ok(out)
        }
    }
}

/// JSON output is `null` or the closed path as an array of ids.
pub fn render_cycle(cycle: Option<&[TaskId]>, format: OutputFormat) -> Result<String> {
    match (format, cycle) {
        (OutputFormat::Json, cycle) => Ok(serde_json::to_string(&cycle)? + "\n"),
        (OutputFormat::Text, None) => Ok("no dependency cycle\n".to_string()),
        (OutputFormat::Text, Some(path)) => {
            let joined: Vec<String> = path.iter().map(TaskId::to_string).collect();
            Ok(format!("dependency cycle: {}\n", joined.join(" -> ")))
        }
    }
}

fn write_section(out: &mut String, title: &str, views: &[TaskView]) {
    out.push_str(&format!("{title}:\n"));
    if views.is_empty() {
        out.push_str("  (empty)\n");
    }
    for view in views {
        out.push_str(&format!(
            "  {}\n",
            entry(view.id, &view.description, view.priority)
        ));
    }
}

fn entry(id: TaskId, description: &str, priority: impl std::fmt::Display) -> String {
    format!("[{id}] {description} - priority: {priority}")
}
