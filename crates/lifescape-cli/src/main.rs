use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lifescape_core::{paths, LifescapeContext};

mod commands;
mod validate;

use commands::{habit::HabitAction, mood::MoodAction, task::TaskAction, tip::TipAction};

#[derive(Parser)]
#[command(name = "lifescape")]
#[command(about = "LifeScape - habits, tasks, moods and tips, stored locally", long_about = None)]
struct Cli {
    /// Directory holding the data files (defaults to ~/.lifescape)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// More log output (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Track habits and streaks
    Habit {
        #[command(subcommand)]
        action: HabitAction,
    },
    /// Plan tasks
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },
    /// Journal moods
    Mood {
        #[command(subcommand)]
        action: MoodAction,
    },
    /// Collect tips
    Tip {
        #[command(subcommand)]
        action: TipAction,
    },
    /// Today at a glance
    Summary,
    /// Delete all tasks, habits and moods
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    }
}

fn init_logging(verbose: u8) {
    env_logger::Builder::new()
        .filter_level(log_level(verbose))
        .parse_default_env()
        .init();
}

fn build_context(data_dir: Option<PathBuf>) -> Result<LifescapeContext> {
    let dir = match data_dir {
        Some(dir) => dir,
        None => paths::default_data_dir()
            .context("Home directory not set; pass --data-dir")?,
    };
    log::debug!("Using data directory {}", dir.display());

    Ok(LifescapeContext::builder().data_dir(dir).build())
}

fn run(cli: Cli, ctx: &LifescapeContext, out: &mut impl io::Write) -> Result<()> {
    match cli.command {
        Commands::Habit { action } => commands::habit::run(ctx, action, out),
        Commands::Task { action } => commands::task::run(ctx, action, out),
        Commands::Mood { action } => commands::mood::run(ctx, action, out),
        Commands::Tip { action } => commands::tip::run(ctx, action, out),
        Commands::Summary => commands::summary(ctx, out),
        Commands::Reset { yes } => commands::reset(ctx, yes, out),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = build_context(cli.data_dir.clone())?;
    let stdout = io::stdout();
    run(cli, &ctx, &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("lifescape").chain(args.iter().copied())).unwrap()
    }

    fn run_args(ctx: &LifescapeContext, args: &[&str]) -> Result<String> {
        let mut out = Vec::new();
        run(parse(args), ctx, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(log_level(0), log::LevelFilter::Warn);
        assert_eq!(log_level(1), log::LevelFilter::Info);
        assert_eq!(log_level(5), log::LevelFilter::Debug);
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = parse(&["habit", "list", "--data-dir", "/tmp/x", "-vv"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn unknown_enum_value_is_rejected() {
        let result = Cli::try_parse_from(["lifescape", "habit", "add", "Run", "--frequency", "hourly"]);
        assert!(result.is_err());
    }

    #[test]
    fn explicit_data_dir_is_used() {
        let dir = tempdir().unwrap();
        let ctx = build_context(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(ctx.data_dir(), Some(dir.path()));
    }

    #[test]
    fn end_to_end_against_data_dir() {
        let dir = tempdir().unwrap();
        let ctx = build_context(Some(dir.path().to_path_buf())).unwrap();

        run_args(&ctx, &["habit", "add", "Drink water", "--color", "#00aaff"]).unwrap();
        run_args(&ctx, &["task", "add", "Write report", "--priority", "high"]).unwrap();
        run_args(&ctx, &["mood", "log", "happy", "--tag", "sunny"]).unwrap();

        assert!(dir.path().join("habits.json").exists());
        assert!(dir.path().join("tasks.json").exists());
        assert!(dir.path().join("moods.json").exists());

        let listing = run_args(&ctx, &["habit", "list"]).unwrap();
        assert!(listing.contains("Drink water"));
    }

    #[test]
    fn reset_requires_confirmation() {
        let ctx = LifescapeContext::default();
        assert!(run_args(&ctx, &["reset"]).is_err());
        assert!(run_args(&ctx, &["reset", "--yes"]).is_ok());
    }
}
