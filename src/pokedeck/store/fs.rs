use super::KeyValueStore;
use crate::error::{DeckError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(DeckError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DeckError::Io(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        fs::write(self.key_path(key), value).map_err(DeckError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert_eq!(store.get("pokemons").unwrap(), None);
    }

    #[test]
    fn set_creates_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("deck");
        let mut store = FileStore::new(root.clone());

        store.set("pokemons", "[1,2]").unwrap();

        let on_disk = fs::read_to_string(root.join("pokemons.json")).unwrap();
        assert_eq!(on_disk, "[1,2]");
        assert_eq!(store.get("pokemons").unwrap().as_deref(), Some("[1,2]"));
    }

    #[test]
    fn set_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.set("pokemons", "[1]").unwrap();
        store.set("pokemons", "[]").unwrap();
        assert_eq!(store.get("pokemons").unwrap().as_deref(), Some("[]"));
    }
}
