use super::LookupService;
use crate::error::{DeckError, Result};
use crate::model::{Creature, CreatureId};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// Canned lookup results keyed by id, matched by id or name.
#[derive(Debug, Default)]
pub struct InMemoryLookup {
    creatures: HashMap<CreatureId, Creature>,
    unreachable: HashSet<String>,
    queries: RefCell<Vec<String>>,
}

impl InMemoryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_creature(mut self, id: u32, name: &str, speed: Option<u32>) -> Self {
        let Some(id) = CreatureId::new(id) else {
            return self;
        };
        self.creatures.insert(
            id,
            Creature {
                id,
                name: name.to_string(),
                image_url: Some(format!("https://sprites.test/{}.png", id)),
                speed,
            },
        );
        self
    }

    /// Make `query` fail as a transport error even if a record exists.
    pub fn with_unreachable(mut self, query: &str) -> Self {
        self.unreachable.insert(query.to_string());
        self
    }

    /// Every query received, in call order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl LookupService for InMemoryLookup {
    async fn lookup(&self, query: &str) -> Result<Creature> {
        self.queries.borrow_mut().push(query.to_string());

        if self.unreachable.contains(query) {
            return Err(DeckError::Api(format!("connection refused for {}", query)));
        }

        let by_id = query
            .parse::<u32>()
            .ok()
            .and_then(CreatureId::new)
            .and_then(|id| self.creatures.get(&id));
        let found = by_id.or_else(|| self.creatures.values().find(|c| c.name == query));

        found
            .cloned()
            .ok_or_else(|| DeckError::NotFound(query.to_string()))
    }
}
