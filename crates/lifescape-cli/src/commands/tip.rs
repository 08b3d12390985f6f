use std::io::Write;

use anyhow::{bail, Result};
use clap::{Subcommand, ValueEnum};
use lifescape_core::{Category, Clock, CommunityTip, LifescapeContext};

use crate::validate;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Productivity,
    Wellness,
    Fitness,
    Mindfulness,
    Nutrition,
    Other,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Productivity => Category::Productivity,
            CategoryArg::Wellness => Category::Wellness,
            CategoryArg::Fitness => Category::Fitness,
            CategoryArg::Mindfulness => Category::Mindfulness,
            CategoryArg::Nutrition => Category::Nutrition,
            CategoryArg::Other => Category::Other,
        }
    }
}

#[derive(Subcommand)]
pub enum TipAction {
    /// Share a tip
    Add {
        title: String,
        content: String,
        #[arg(long)]
        author: Option<String>,
        #[arg(long, value_enum, default_value_t = CategoryArg::Other)]
        category: CategoryArg,
    },
    /// List tips, newest first
    List {
        /// Most liked tips instead
        #[arg(long)]
        top: bool,
    },
    /// Like a tip
    Like { id: String },
    /// Delete a tip
    Delete { id: String },
}

pub fn run(ctx: &LifescapeContext, action: TipAction, out: &mut impl Write) -> Result<()> {
    let mut board = ctx.tip_board();

    match action {
        TipAction::Add {
            title,
            content,
            author,
            category,
        } => {
            let mut tip = CommunityTip::new(
                validate::required("title", &title)?,
                validate::required("content", &content)?,
                ctx.clock().now(),
            )
            .with_category(category.into());
            if let Some(author) = author.as_deref().map(str::trim).filter(|a| !a.is_empty()) {
                tip = tip.with_author(author);
            }

            let tip = board.add(tip);
            writeln!(out, "Added tip {} ({})", tip.title, validate::short_id(tip.id))?;
        }
        TipAction::List { top } => {
            let tips = if top { board.top_tips() } else { board.tips() };
            if tips.is_empty() {
                writeln!(out, "No tips")?;
            }
            for tip in tips {
                writeln!(
                    out,
                    "{}  {} [{}] by {}  ♥ {}",
                    validate::short_id(tip.id),
                    tip.title,
                    tip.category.label(),
                    tip.author,
                    tip.likes
                )?;
                writeln!(out, "    {}", tip.content)?;
            }
        }
        TipAction::Like { id } => {
            let id = validate::resolve_id("tip", &id, board.tips().into_iter().map(|t| t.id))?;
            match board.like(id) {
                Some(tip) => writeln!(out, "{} now has {} likes", tip.title, tip.likes)?,
                None => bail!("Tip can no longer be liked"),
            }
        }
        TipAction::Delete { id } => {
            let id = validate::resolve_id("tip", &id, board.all_tips().iter().map(|t| t.id))?;
            if let Some(tip) = board.delete(id) {
                writeln!(out, "Deleted tip {}", tip.title)?;
            }
        }
    }

    Ok(())
}
