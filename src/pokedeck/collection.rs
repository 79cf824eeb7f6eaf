//! # Collection
//!
//! The ordered list of saved ids is the single source of truth for what the
//! deck contains. Cards, visibility and candidates are all derived state.
//!
//! Invariants:
//! - No duplicates, order is insertion order.
//! - Every mutation is written through to the [`KeyValueStore`] before the
//!   in-memory list changes, so a failed write leaves both sides as they were.
//! - `revision` increases by one per successful mutation. Fetch passes are
//!   tagged with it so stale results can be dropped.

use crate::error::Result;
use crate::model::CreatureId;
use crate::store::KeyValueStore;
use log::{debug, warn};
use std::collections::HashSet;

/// Storage key holding the JSON-encoded id list.
pub const COLLECTION_KEY: &str = "pokemons";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Duplicate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotPresent,
}

pub struct Collection<S: KeyValueStore> {
    store: S,
    ids: Vec<CreatureId>,
    revision: u64,
}

impl<S: KeyValueStore> Collection<S> {
    /// Read the saved ids. Missing, unreadable or malformed storage all yield
    /// an empty collection.
    pub fn load(store: S) -> Self {
        let ids = match store.get(COLLECTION_KEY) {
            Ok(Some(raw)) => parse_ids(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("could not read saved collection, starting empty: {}", e);
                Vec::new()
            }
        };
        debug!("loaded {} saved ids", ids.len());
        Self {
            store,
            ids,
            revision: 0,
        }
    }

    pub fn ids(&self) -> &[CreatureId] {
        &self.ids
    }

    pub fn contains(&self, id: CreatureId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add(&mut self, id: CreatureId) -> Result<AddOutcome> {
        if self.contains(id) {
            return Ok(AddOutcome::Duplicate);
        }
        let mut updated = self.ids.clone();
        updated.push(id);
        self.commit(updated)?;
        Ok(AddOutcome::Added)
    }

    pub fn remove(&mut self, id: CreatureId) -> Result<RemoveOutcome> {
        if !self.contains(id) {
            return Ok(RemoveOutcome::NotPresent);
        }
        let updated = self.ids.iter().copied().filter(|&p| p != id).collect();
        self.commit(updated)?;
        Ok(RemoveOutcome::Removed)
    }

    fn commit(&mut self, updated: Vec<CreatureId>) -> Result<()> {
        let encoded = serde_json::to_string(&updated)?;
        self.store.set(COLLECTION_KEY, &encoded)?;
        self.ids = updated;
        self.revision += 1;
        Ok(())
    }
}

fn parse_ids(raw: &str) -> Vec<CreatureId> {
    let parsed: Vec<u32> = match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(e) => {
            warn!("saved collection is not a list of ids, starting empty: {}", e);
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    parsed
        .into_iter()
        .filter_map(|raw_id| {
            let id = CreatureId::new(raw_id);
            if id.is_none() {
                warn!("dropping invalid saved id {}", raw_id);
            }
            id
        })
        .filter(|id| seen.insert(*id))
        .collect()
}
