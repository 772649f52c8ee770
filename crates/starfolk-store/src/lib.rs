//! Character data store for the StarFolk API.
//!
//! The store owns a single read-only collection of character records
//! loaded from a JSON file. Readers take an immutable snapshot; a reload
//! builds a fresh collection and installs it with one atomic pointer
//! swap, so a reader only ever sees a complete version of the data.
//!
//! # Modules
//!
//! - [`record`] -- [`CharacterRecord`], a JSON object with typed accessors
//! - [`collection`] -- [`CharacterCollection`] and its search filters
//! - [`store`] -- [`CharacterStore`] plus the [`load`] / [`try_load`] entry points
//! - [`error`] -- [`LoadError`]

pub mod collection;
pub mod error;
pub mod record;
pub mod store;

pub use collection::CharacterCollection;
pub use error::LoadError;
pub use record::CharacterRecord;
pub use store::{CharacterStore, Snapshot, load, try_load};
