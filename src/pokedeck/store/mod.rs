//! # Storage Layer
//!
//! The deck persists a single value: the JSON-encoded list of saved ids. The
//! [`KeyValueStore`] trait models the small get/set contract that storage
//! needs, so the collection logic never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one `<key>.json` file per key
//!   inside the data directory.
//! - [`memory::InMemoryStore`]: A `HashMap` for tests. Nothing is written.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── pokemons.json       # saved ids, e.g. [25,1,4]
//! └── config.json         # DeckConfig
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Whole-value persistence keyed by string, in the shape of browser
/// `localStorage`.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
