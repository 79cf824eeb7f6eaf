//! # Lookup Service
//!
//! Creature details come from an external HTTP API that answers
//! `GET {base}/{id-or-name}` with one JSON record. [`LookupService`] hides the
//! transport so commands can be exercised against [`memory::InMemoryLookup`].
//!
//! - [`pokeapi::PokeApiClient`]: `reqwest` client for PokéAPI.
//! - [`memory::InMemoryLookup`]: canned records and forced failures for tests.
//!
//! Any error from `lookup` means "no record": callers never distinguish a 404
//! from a dropped connection.

use crate::error::Result;
use crate::model::Creature;
use std::future::Future;

pub mod memory;
pub mod pokeapi;

pub trait LookupService {
    /// Fetch one record by id or name. `query` is used verbatim; callers
    /// normalize it first.
    fn lookup(&self, query: &str) -> impl Future<Output = Result<Creature>>;
}
