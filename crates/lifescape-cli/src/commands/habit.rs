use std::io::Write;

use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};
use lifescape_core::{Clock, Frequency, Habit, LifescapeContext};

use crate::validate;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FrequencyArg {
    Daily,
    Weekly,
    Custom,
}

impl From<FrequencyArg> for Frequency {
    fn from(arg: FrequencyArg) -> Self {
        match arg {
            FrequencyArg::Daily => Frequency::Daily,
            FrequencyArg::Weekly => Frequency::Weekly,
            FrequencyArg::Custom => Frequency::Custom,
        }
    }
}

#[derive(Subcommand)]
pub enum HabitAction {
    /// Create a habit
    Add {
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Icon name
        #[arg(long)]
        icon: Option<String>,
        /// Color as #rrggbb
        #[arg(long)]
        color: Option<String>,
        #[arg(long, value_enum, default_value_t = FrequencyArg::Daily)]
        frequency: FrequencyArg,
    },
    /// List habits with their streaks
    List,
    /// Mark a habit done for today, or undo it
    Toggle { id: String },
    /// Delete a habit
    Delete { id: String },
}

pub fn run(ctx: &LifescapeContext, action: HabitAction, out: &mut impl Write) -> Result<()> {
    let mut tracker = ctx.habit_tracker();
    let clock = ctx.clock().as_ref();

    match action {
        HabitAction::Add {
            name,
            description,
            icon,
            color,
            frequency,
        } => {
            let mut habit = Habit::new(validate::required("name", &name)?, clock.now())
                .with_description(description.trim())
                .with_frequency(frequency.into());
            if let Some(icon) = icon {
                habit = habit.with_icon(validate::required("icon", &icon)?);
            }
            if let Some(color) = color {
                habit = habit.with_color(validate::color_hex(&color)?);
            }

            let habit = tracker.add(habit);
            writeln!(out, "Added habit {} ({})", habit.name, validate::short_id(habit.id))?;
        }
        HabitAction::List => {
            if tracker.habits().is_empty() {
                writeln!(out, "No habits yet")?;
            }
            for habit in tracker.habits() {
                let mark = if habit.is_completed_today(clock) { "x" } else { " " };
                writeln!(
                    out,
                    "[{}] {}  {}  {}  streak {} (best {})",
                    mark,
                    validate::short_id(habit.id),
                    habit.name,
                    habit.frequency.label(),
                    habit.current_streak,
                    habit.best_streak
                )?;
            }
        }
        HabitAction::Toggle { id } => {
            let id = validate::resolve_id("habit", &id, tracker.habits().iter().map(|h| h.id))?;
            let habit = tracker
                .toggle_completion(id)
                .cloned()
                .context("Habit disappeared while toggling")?;

            let state = if habit.is_completed_today(clock) { "done" } else { "not done" };
            writeln!(
                out,
                "{} marked {} for today, streak {}",
                habit.name, state, habit.current_streak
            )?;
        }
        HabitAction::Delete { id } => {
            let id = validate::resolve_id("habit", &id, tracker.habits().iter().map(|h| h.id))?;
            if let Some(habit) = tracker.delete(id) {
                writeln!(out, "Deleted habit {}", habit.name)?;
            }
        }
    }

    Ok(())
}
