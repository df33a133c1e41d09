use serde::Serialize;

use crate::model::task::Task;
use crate::ops::store::StoreStats;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskJson {
    pub position: usize,
    pub id: i64,
    pub text: String,
    pub completed: bool,
    pub category: &'static str,
    pub created_at: String,
}

#[derive(Serialize)]
pub struct TaskListJson {
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct StatsJson {
    pub completed: usize,
    pub total: usize,
    pub percent: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeJson {
    pub dark_mode: bool,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// `position` is the 1-based display position.
pub fn task_to_json(position: usize, task: &Task) -> TaskJson {
    TaskJson {
        position,
        id: task.id,
        text: task.text.clone(),
        completed: task.completed,
        category: task.category.id(),
        created_at: task.created_at.to_rfc3339(),
    }
}

pub fn list_to_json(tasks: &[Task]) -> TaskListJson {
    TaskListJson {
        tasks: tasks
            .iter()
            .enumerate()
            .map(|(i, t)| task_to_json(i + 1, t))
            .collect(),
    }
}

pub fn stats_to_json(stats: &StoreStats) -> StatsJson {
    StatsJson {
        completed: stats.completed,
        total: stats.total,
        percent: stats.percent(),
    }
}

/// One human-readable list line: position, checkbox, text, category label.
pub fn format_task_line(position: usize, task: &Task) -> String {
    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    format!(
        "{:>3}  {} {}  #{}",
        position,
        checkbox,
        task.text,
        task.category.id()
    )
}
