//! Subcommand handlers. Each one loads the view-model it needs, applies the
//! action and prints the outcome to `out`.

pub mod habit;
pub mod mood;
pub mod task;
pub mod tip;

use std::io::Write;

use anyhow::{bail, Result};
use lifescape_core::{Clock, LifescapeContext};

/// Today at a glance across all four collections.
pub fn summary(ctx: &LifescapeContext, out: &mut impl Write) -> Result<()> {
    let planner = ctx.planner();
    let habits = ctx.habit_tracker();
    let moods = ctx.mood_journal();

    writeln!(out, "Today: {}", ctx.clock().today())?;
    writeln!(
        out,
        "Tasks due today: {} ({} pending overall)",
        planner.todays_tasks().len(),
        planner.pending_count()
    )?;
    writeln!(
        out,
        "Habits done today: {:.0}% (total streak {})",
        habits.todays_completion_rate() * 100.0,
        habits.total_streak()
    )?;
    match moods.todays_mood() {
        Some(entry) => writeln!(out, "Mood today: {} {}", entry.mood.emoji(), entry.mood.label())?,
        None => writeln!(out, "Mood today: not logged")?,
    }
    writeln!(out, "Average mood: {:.2}", moods.average_mood())?;

    Ok(())
}

/// Clear tasks, habits and moods.
pub fn reset(ctx: &LifescapeContext, confirmed: bool, out: &mut impl Write) -> Result<()> {
    if !confirmed {
        bail!("Refusing to reset without --yes");
    }

    ctx.reset_all_data();
    writeln!(out, "Cleared tasks, habits and moods")?;
    Ok(())
}
