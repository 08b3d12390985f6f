use std::io::Write;

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use lifescape_core::{Clock, LifescapeContext, Mood, MoodEntry};

use crate::validate;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MoodArg {
    VeryHappy,
    Happy,
    Neutral,
    Sad,
    VerySad,
}

impl From<MoodArg> for Mood {
    fn from(arg: MoodArg) -> Self {
        match arg {
            MoodArg::VeryHappy => Mood::VeryHappy,
            MoodArg::Happy => Mood::Happy,
            MoodArg::Neutral => Mood::Neutral,
            MoodArg::Sad => Mood::Sad,
            MoodArg::VerySad => Mood::VerySad,
        }
    }
}

#[derive(Subcommand)]
pub enum MoodAction {
    /// Record how you feel right now
    Log {
        #[arg(value_enum)]
        mood: MoodArg,
        #[arg(long, default_value = "")]
        note: String,
        /// Tag the entry (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },
    /// Show the latest entries and the average
    List,
    /// Delete an entry
    Delete { id: String },
}

pub fn run(ctx: &LifescapeContext, action: MoodAction, out: &mut impl Write) -> Result<()> {
    let mut journal = ctx.mood_journal();
    let clock = ctx.clock().as_ref();

    match action {
        MoodAction::Log { mood, note, tags } => {
            let tags: Vec<String> = tags
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
            let entry = MoodEntry::new(mood.into(), clock.now())
                .with_note(note.trim())
                .with_tags(tags);
            let entry = journal.add(entry);
            writeln!(
                out,
                "Logged {} {} ({})",
                entry.mood.emoji(),
                entry.mood.label(),
                validate::short_id(entry.id)
            )?;
        }
        MoodAction::List => {
            let recent = journal.recent_moods();
            if recent.is_empty() {
                writeln!(out, "No moods logged")?;
                return Ok(());
            }
            for entry in recent {
                write!(
                    out,
                    "{}  {}  {} {}",
                    validate::short_id(entry.id),
                    clock.local_date(entry.timestamp),
                    entry.mood.emoji(),
                    entry.mood.label()
                )?;
                if !entry.note.is_empty() {
                    write!(out, "  \"{}\"", entry.note)?;
                }
                if !entry.tags.is_empty() {
                    write!(out, "  #{}", entry.tags.join(" #"))?;
                }
                writeln!(out)?;
            }
            writeln!(out, "Average mood: {:.2}", journal.average_mood())?;
        }
        MoodAction::Delete { id } => {
            let id = validate::resolve_id("mood", &id, journal.moods().iter().map(|m| m.id))?;
            if let Some(entry) = journal.delete(id) {
                writeln!(out, "Deleted {} entry", entry.mood.label())?;
            }
        }
    }

    Ok(())
}
