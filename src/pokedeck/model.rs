use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one catalog entry, also the lookup key for the API.
///
/// Serialized as a bare number so the persisted collection stays a plain
/// JSON array (`[25,1,4]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatureId(u32);

impl CreatureId {
    /// Returns `None` for zero; identifiers are positive.
    pub fn new(raw: u32) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CreatureId {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('#');
        trimmed
            .parse::<u32>()
            .ok()
            .and_then(CreatureId::new)
            .ok_or_else(|| format!("Invalid id: {}", s))
    }
}

/// A record as returned by the lookup service, reduced to what the deck shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub id: CreatureId,
    pub name: String,
    pub image_url: Option<String>,
    pub speed: Option<u32>,
}

/// An unconfirmed search result waiting to be added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub id: CreatureId,
    pub name: String,
    pub image_url: Option<String>,
}

impl From<Creature> for Candidate {
    fn from(creature: Creature) -> Self {
        Self {
            id: creature.id,
            name: creature.name,
            image_url: creature.image_url,
        }
    }
}

/// One card in the rendered deck. Rebuilt from scratch on every collection
/// change, so `revealed` always starts out false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub id: CreatureId,
    pub name: String,
    pub image_url: Option<String>,
    pub speed: Option<u32>,
    pub revealed: bool,
}

impl From<Creature> for DisplayRecord {
    fn from(creature: Creature) -> Self {
        Self {
            id: creature.id,
            name: creature.name,
            image_url: creature.image_url,
            speed: creature.speed,
            revealed: false,
        }
    }
}
