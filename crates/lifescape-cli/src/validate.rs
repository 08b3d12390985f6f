//! Input checks done before anything reaches a view-model.

use std::sync::LazyLock;

use anyhow::{bail, Result};
use lifescape_core::RecordId;
use regex::Regex;

static COLOR_HEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());

/// Trimmed, non-empty text for a required field.
pub fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        bail!("{field} must not be empty");
    }
    Ok(trimmed.to_string())
}

/// A `#rrggbb` color, normalised to lowercase.
pub fn color_hex(value: &str) -> Result<String> {
    if !COLOR_HEX.is_match(value) {
        bail!("Invalid color '{value}': expected #rrggbb");
    }
    Ok(value.to_ascii_lowercase())
}

/// Resolve a full id or a unique id prefix against the known ids.
pub fn resolve_id<I>(kind: &str, prefix: &str, ids: I) -> Result<RecordId>
where
    I: IntoIterator<Item = RecordId>,
{
    let needle = prefix.trim().to_ascii_lowercase();
    if needle.is_empty() {
        bail!("{kind} id must not be empty");
    }

    let matches: Vec<RecordId> = ids
        .into_iter()
        .filter(|id| id.to_string().starts_with(&needle))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => bail!("No {kind} matches id '{prefix}'"),
        _ => bail!("Id '{prefix}' matches {} {kind}s; use more characters", matches.len()),
    }
}

/// First eight characters of an id, enough to tell records apart.
pub fn short_id(id: RecordId) -> String {
    id.to_string().chars().take(8).collect()
}
