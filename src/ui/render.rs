//! ui::render
//!
//! Listing and status panel formatting.
//!
//! Listings number entries from 1; those ordinals are what selection
//! strings refer to. Checklist display is an explicit argument rather
//! than ambient state, so callers decide it once per invocation.

use crate::core::types::{Tag, Task};
use crate::ops::status::StatusReport;

/// Format one task line: completion box, 1-based ordinal, text, and a
/// checklist tally when the task has one.
pub fn task_line(ordinal: usize, task: &Task) -> String {
    let completed = if task.completed { 'x' } else { ' ' };
    let mut line = format!("[{}] {} {}", completed, ordinal, task.text);
    if !task.checklist.is_empty() {
        line.push_str(&format!(
            " ({}/{})",
            task.checklist_done(),
            task.checklist.len()
        ));
    }
    line
}

/// Render a task listing, with checklist items when `checklists` is on.
pub fn render_tasks(tasks: &[Task], checklists: bool) -> String {
    let mut lines = Vec::new();
    for (i, task) in tasks.iter().enumerate() {
        lines.push(task_line(i + 1, task));
        if checklists {
            for item in &task.checklist {
                let completed = if item.completed { 'x' } else { ' ' };
                lines.push(format!("    [{}] {}", completed, item.text));
            }
        }
    }
    lines.join("\n")
}

/// Render a tag listing with 1-based ordinals.
pub fn render_tags(tags: &[Tag]) -> String {
    tags.iter()
        .enumerate()
        .map(|(i, tag)| format!("[*] {} {}", i + 1, tag.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the status panel: a titled rule followed by right-aligned
/// labels.
pub fn render_status(report: &StatusReport) -> String {
    let rows = [
        ("Health:", &report.health),
        ("XP:", &report.xp),
        ("Mana:", &report.mana),
        ("Pet:", &report.pet),
        ("Mount:", &report.mount),
        ("Party:", &report.party),
        ("Quest:", &report.quest),
    ];
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut lines = vec![
        "-".repeat(report.title.len()),
        report.title.clone(),
        "-".repeat(report.title.len()),
    ];
    for (label, value) in rows {
        lines.push(format!("{:>width$} {}", label, value, width = width));
    }
    lines.join("\n")
}
