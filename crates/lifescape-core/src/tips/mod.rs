//! Locally stored tips.

pub mod board;
pub mod types;

pub use board::TipBoard;
pub use types::{Category, CommunityTip};
