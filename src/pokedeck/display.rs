//! The rendered card list and its visibility flags.
//!
//! Everything here is local and synchronous. Rebuilding replaces every
//! record, which resets visibility to hidden.

use crate::model::{CreatureId, DisplayRecord};

#[derive(Debug, Default, Clone)]
pub struct DisplayList {
    records: Vec<DisplayRecord>,
    revision: Option<u64>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[DisplayRecord] {
        &self.records
    }

    /// Collection revision the current records were built from.
    pub fn revision(&self) -> Option<u64> {
        self.revision
    }

    /// Replace the records with the result of a fetch pass started at
    /// `revision`. A pass older than the one already applied is discarded and
    /// `false` is returned.
    pub fn rebuild(&mut self, revision: u64, records: Vec<DisplayRecord>) -> bool {
        if self.revision.is_some_and(|applied| revision < applied) {
            return false;
        }
        self.records = records
            .into_iter()
            .map(|record| DisplayRecord {
                revealed: false,
                ..record
            })
            .collect();
        self.revision = Some(revision);
        true
    }

    pub fn show_all(&mut self) {
        self.set_all(true);
    }

    pub fn hide_all(&mut self) {
        self.set_all(false);
    }

    /// Flip one record's flag. Returns the new value, `None` if no card has
    /// that id.
    pub fn toggle(&mut self, id: CreatureId) -> Option<bool> {
        let record = self.records.iter_mut().find(|r| r.id == id)?;
        record.revealed = !record.revealed;
        Some(record.revealed)
    }

    fn set_all(&mut self, revealed: bool) {
        for record in &mut self.records {
            record.revealed = revealed;
        }
    }
}
