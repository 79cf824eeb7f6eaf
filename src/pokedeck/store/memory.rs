use super::KeyValueStore;
use crate::error::Result;
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, as if a previous session had written it.
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Number of `set` calls since creation (seeding does not count).
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_values_are_readable_and_not_counted() {
        let store = InMemoryStore::new().with_value("pokemons", "[7]");
        assert_eq!(store.get("pokemons").unwrap().as_deref(), Some("[7]"));
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn set_counts_writes() {
        let mut store = InMemoryStore::new();
        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("2"));
        assert_eq!(store.writes(), 2);
    }
}
