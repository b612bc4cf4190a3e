//! Text rendering for the interactive session

use crate::domain::Task;
use crate::service::ListFilter;

/// Welcome banner printed when the session starts
pub fn welcome() -> &'static str {
    "Welcome to the console todo manager!\n\
     Type 'help' for available commands or 'exit' to quit."
}

/// Farewell message printed when the session ends
pub fn goodbye() -> &'static str {
    "Goodbye!"
}

/// Command reference shown by `help`
pub fn help() -> &'static str {
    "Available commands:\n\
     \x20 add \"task title\"          - Add a new task\n\
     \x20 list (or ls) [filter]     - List tasks; filter: all, pending, completed\n\
     \x20 update <id> \"new title\"   - Update a task title\n\
     \x20 delete <id>               - Delete a task\n\
     \x20 complete <id> (or done)   - Mark task as complete\n\
     \x20 incomplete <id> (or undo) - Mark task as incomplete\n\
     \x20 history                   - Show commands entered this session\n\
     \x20 help (or ?)               - Show this help message\n\
     \x20 exit (or quit)            - Exit the application"
}

/// One line per task: `{id}. [x] {title}`
pub fn task_line(task: &Task) -> String {
    format!("{}. [{}] {}", task.id, task.marker(), task.title)
}

/// Renders a task listing with a count footer, or a placeholder when empty
pub fn task_list(tasks: &[&Task], filter: ListFilter) -> String {
    if tasks.is_empty() {
        return match filter {
            ListFilter::All => "No tasks found.".to_string(),
            ListFilter::Pending => "No pending tasks.".to_string(),
            ListFilter::Completed => "No completed tasks.".to_string(),
        };
    }

    let completed = tasks.iter().filter(|t| t.completed).count();
    let mut lines: Vec<String> = tasks.iter().map(|t| task_line(t)).collect();
    lines.push(format!("{} task(s), {} completed", tasks.len(), completed));
    lines.join("\n")
}

/// Renders the session's command history, most recent last
pub fn history(entries: &[String]) -> String {
    if entries.is_empty() {
        return "No commands in history.".to_string();
    }

    entries
        .iter()
        .enumerate()
        .map(|(i, cmd)| format!("{:3}. {}", i + 1, cmd))
        .collect::<Vec<_>>()
        .join("\n")
}
