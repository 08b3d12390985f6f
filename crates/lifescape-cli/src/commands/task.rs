use std::io::Write;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use clap::{Subcommand, ValueEnum};
use lifescape_core::{Clock, LifescapeContext, Priority, Task};

use crate::validate;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Plan a task
    Add {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Due date as YYYY-MM-DD (defaults to today)
        #[arg(long, value_name = "DATE")]
        due: Option<NaiveDate>,
        #[arg(long, value_enum, default_value_t = PriorityArg::Medium)]
        priority: PriorityArg,
    },
    /// List tasks
    List {
        /// Only tasks due today, highest priority first
        #[arg(long)]
        today: bool,
    },
    /// Flip a task between done and pending
    Toggle { id: String },
    /// Delete a task
    Delete { id: String },
}

pub fn run(ctx: &LifescapeContext, action: TaskAction, out: &mut impl Write) -> Result<()> {
    let mut planner = ctx.planner();
    let clock = ctx.clock().as_ref();

    match action {
        TaskAction::Add {
            title,
            description,
            due,
            priority,
        } => {
            let now = clock.now();
            let due_date = match due {
                Some(date) => {
                    // Noon keeps the date stable across DST shifts.
                    let noon = NaiveTime::from_hms_opt(12, 0, 0).context("invalid time")?;
                    clock
                        .at_local(date, noon)
                        .with_context(|| format!("{date} has no local noon"))?
                }
                None => now,
            };

            let task = Task::new(validate::required("title", &title)?, due_date, now)
                .with_description(description.trim())
                .with_priority(priority.into());
            let task = planner.add(task);
            writeln!(out, "Added task {} ({})", task.title, validate::short_id(task.id))?;
        }
        TaskAction::List { today } => {
            let mut tasks: Vec<&Task> = if today {
                planner.todays_tasks()
            } else {
                planner.tasks().iter().collect()
            };
            if !today {
                tasks.sort_by_key(|t| t.due_date);
            }

            if tasks.is_empty() {
                writeln!(out, "No tasks")?;
            }
            for task in tasks {
                let mark = if task.is_completed { "x" } else { " " };
                writeln!(
                    out,
                    "[{}] {}  {}  ({}, due {})",
                    mark,
                    validate::short_id(task.id),
                    task.title,
                    task.priority.label(),
                    clock.local_date(task.due_date)
                )?;
            }
            writeln!(
                out,
                "{} done, {} pending",
                planner.completed_count(),
                planner.pending_count()
            )?;
        }
        TaskAction::Toggle { id } => {
            let id = validate::resolve_id("task", &id, planner.tasks().iter().map(|t| t.id))?;
            if let Some(task) = planner.toggle_completion(id) {
                let state = if task.is_completed { "done" } else { "pending" };
                writeln!(out, "{} is {}", task.title, state)?;
            }
        }
        TaskAction::Delete { id } => {
            let id = validate::resolve_id("task", &id, planner.tasks().iter().map(|t| t.id))?;
            if let Some(task) = planner.delete(id) {
                writeln!(out, "Deleted task {}", task.title)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_context;

    fn run_ok(ctx: &LifescapeContext, action: TaskAction) -> String {
        let mut out = Vec::new();
        run(ctx, action, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn add(title: &str, due: Option<NaiveDate>, priority: PriorityArg) -> TaskAction {
        TaskAction::Add {
            title: title.to_string(),
            description: String::new(),
            due,
            priority,
        }
    }

    #[test]
    fn today_list_is_priority_ordered() {
        let ctx = test_context();
        let tomorrow = NaiveDate::from_ymd_opt(2024, 8, 13).unwrap();
        run_ok(&ctx, add("later", Some(tomorrow), PriorityArg::High));
        run_ok(&ctx, add("low", None, PriorityArg::Low));
        run_ok(&ctx, add("urgent", None, PriorityArg::High));

        let text = run_ok(&ctx, TaskAction::List { today: true });
        let urgent = text.find("urgent").unwrap();
        let low = text.find("low").unwrap();
        assert!(urgent < low);
        assert!(!text.contains("later"));
    }

    #[test]
    fn due_date_is_kept_as_local_day() {
        let ctx = test_context();
        let due = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        run_ok(&ctx, add("pay rent", Some(due), PriorityArg::Medium));

        let text = run_ok(&ctx, TaskAction::List { today: false });
        assert!(text.contains("(Medium, due 2024-09-01)"));
    }

    #[test]
    fn toggle_and_delete() {
        let ctx = test_context();
        run_ok(&ctx, add("email", None, PriorityArg::Medium));
        let id = ctx.planner().tasks()[0].id.to_string();

        assert!(run_ok(&ctx, TaskAction::Toggle { id: id.clone() }).contains("email is done"));
        assert!(run_ok(&ctx, TaskAction::List { today: false }).contains("1 done, 0 pending"));
        assert!(run_ok(&ctx, TaskAction::Delete { id }).contains("Deleted task email"));
    }

    #[test]
    fn blank_title_is_rejected() {
        let ctx = test_context();
        assert!(run(&ctx, add(" ", None, PriorityArg::Low), &mut Vec::new()).is_err());
    }
}
