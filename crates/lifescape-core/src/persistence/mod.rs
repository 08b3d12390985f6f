//! Local persistence for record collections.
//!
//! # Overview
//!
//! Every record type lives in one named *slot*. A slot holds the whole
//! collection as a JSON array and is always overwritten as a unit:
//!
//! - **Stores** ([`SlotStore`]) move raw strings in and out of slots
//! - **Adapter** ([`Persistence`]) turns slots into typed records
//!
//! # File Locations
//!
//! With [`JsonDirStore`] every slot is a file under the data directory:
//!
//! ```text
//! ~/.lifescape/
//! ├── tasks.json
//! ├── habits.json
//! ├── moods.json
//! └── communityTips.json
//! ```
//!
//! # Failure Handling
//!
//! `load` never fails: a missing slot and an undecodable slot both come back
//! as an empty collection. `save` never fails either: errors are logged and
//! the previous slot contents stay in place. The `try_*` variants expose the
//! underlying [`StoreError`] for callers that care.

pub mod adapter;
pub mod json_dir;
pub mod memory;
pub mod slots;
pub mod store;

pub use adapter::Persistence;
pub use json_dir::JsonDirStore;
pub use memory::MemoryStore;
pub use store::{SlotStore, StoreError};
