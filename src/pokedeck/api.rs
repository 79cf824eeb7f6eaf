//! # API Facade
//!
//! [`DeckApi`] is the single entry point for every deck operation and the
//! owner of all session state:
//!
//! - the saved [`Collection`] (persisted),
//! - the one-slot search box with its pending candidate (memory only),
//! - the rendered [`DisplayList`] with visibility flags (memory only).
//!
//! Business logic lives in `commands/*.rs`. The facade sequences commands
//! (a confirmed add is followed by a refresh, so is a removal) and tells
//! subscribers what changed.
//!
//! ## Change Notification
//!
//! Front ends register a listener with [`DeckApi::subscribe`] and redraw
//! from the [`DeckEvent`]s it receives. Events fire only for real changes:
//! a duplicate add raises no `CollectionChanged`, a stale refresh raises no
//! `DisplayChanged`.
//!
//! ## Generic Over Storage and Lookup
//!
//! - Production: `DeckApi<FileStore, PokeApiClient>`
//! - Testing: `DeckApi<InMemoryStore, InMemoryLookup>`

use crate::collection::Collection;
use crate::commands::config::ConfigAction;
use crate::commands::search::{normalize_query, SearchState};
use crate::commands::{self, CmdResult, DeckPaths};
use crate::config::DeckConfig;
use crate::display::DisplayList;
use crate::error::Result;
use crate::lookup::LookupService;
use crate::model::{Candidate, CreatureId, DisplayRecord};
use crate::store::KeyValueStore;
use log::debug;

pub use crate::commands::{CmdMessage, MessageLevel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckEvent {
    CollectionChanged(Vec<CreatureId>),
    CandidateChanged(Option<Candidate>),
    DisplayChanged(Vec<DisplayRecord>),
}

type Listener = Box<dyn FnMut(&DeckEvent)>;

pub struct DeckApi<S: KeyValueStore, L: LookupService> {
    collection: Collection<S>,
    lookup: L,
    search: SearchState,
    display: DisplayList,
    config: DeckConfig,
    paths: DeckPaths,
    listeners: Vec<Listener>,
}

impl<S: KeyValueStore, L: LookupService> DeckApi<S, L> {
    /// Load the saved collection. The card list stays empty until the first
    /// [`refresh`](Self::refresh).
    pub fn new(store: S, lookup: L, config: DeckConfig, paths: DeckPaths) -> Self {
        Self {
            collection: Collection::load(store),
            lookup,
            search: SearchState::default(),
            display: DisplayList::new(),
            config,
            paths,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&DeckEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn ids(&self) -> &[CreatureId] {
        self.collection.ids()
    }

    pub fn records(&self) -> &[DisplayRecord] {
        self.display.records()
    }

    pub fn candidate(&self) -> Option<&Candidate> {
        self.search.candidate.as_ref()
    }

    pub fn search_input(&self) -> &str {
        &self.search.input
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn paths(&self) -> &DeckPaths {
        &self.paths
    }

    pub fn store(&self) -> &S {
        self.collection.store()
    }

    /// Re-fetch every saved id and rebuild the card list.
    pub async fn refresh(&mut self) -> Result<CmdResult> {
        let revision = self.collection.revision();
        let ids = self.collection.ids().to_vec();

        let fetched = commands::refresh::run(&self.lookup, &ids, self.config.concurrency).await?;

        if revision != self.collection.revision() {
            debug!("discarding refresh from revision {}", revision);
            return Ok(CmdResult::default().with_listed(self.display.records().to_vec()));
        }
        if self.display.rebuild(revision, fetched.listed) {
            self.emit(DeckEvent::DisplayChanged(self.display.records().to_vec()));
        }
        Ok(CmdResult::default().with_listed(self.display.records().to_vec()))
    }

    /// Look up `raw` and hold the result as the pending candidate.
    pub async fn search(&mut self, raw: &str) -> Result<CmdResult> {
        let before = self.search.candidate.clone();
        let result = commands::search::run(&self.lookup, &mut self.search, raw).await?;
        self.notify_candidate(before);
        Ok(result)
    }

    /// Commit the pending candidate, then refresh if the collection changed.
    pub async fn confirm(&mut self) -> Result<CmdResult> {
        let before = self.search.candidate.clone();
        let revision = self.collection.revision();

        let confirmed = commands::confirm::run(&mut self.collection, &mut self.search);
        self.notify_candidate(before);
        let result = confirmed?.with_candidate(self.search.candidate.clone());

        self.after_mutation(revision, result).await
    }

    /// Search and confirm in one step. Empty input does nothing, even with a
    /// candidate pending.
    pub async fn add(&mut self, raw: &str) -> Result<CmdResult> {
        if normalize_query(raw).is_empty() {
            return Ok(CmdResult::default().with_candidate(self.search.candidate.clone()));
        }
        let result = self.search(raw).await?;
        if self.search.candidate.is_none() {
            return Ok(result);
        }
        let confirmed = self.confirm().await?;
        Ok(result.merge(confirmed))
    }

    pub async fn remove(&mut self, ids: &[CreatureId]) -> Result<CmdResult> {
        let revision = self.collection.revision();
        let result = commands::remove::run(&mut self.collection, ids)?;
        let candidate = self.search.candidate.clone();
        self.after_mutation(revision, result.with_candidate(candidate))
            .await
    }

    pub fn show_all(&mut self) -> CmdResult {
        let result = commands::visibility::show_all(&mut self.display);
        self.emit(DeckEvent::DisplayChanged(result.listed.clone()));
        result
    }

    pub fn hide_all(&mut self) -> CmdResult {
        let result = commands::visibility::hide_all(&mut self.display);
        self.emit(DeckEvent::DisplayChanged(result.listed.clone()));
        result
    }

    pub fn toggle(&mut self, id: CreatureId) -> CmdResult {
        let result = commands::visibility::toggle(&mut self.display, id);
        if result.messages.is_empty() {
            self.emit(DeckEvent::DisplayChanged(result.listed.clone()));
        }
        result
    }

    /// Read or change the saved configuration. A successful `Set` also
    /// updates the in-memory copy; the lookup client keeps its settings
    /// until the next start.
    pub fn configure(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.paths, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    async fn after_mutation(&mut self, revision: u64, result: CmdResult) -> Result<CmdResult> {
        if revision == self.collection.revision() {
            return Ok(result.with_listed(self.display.records().to_vec()));
        }
        self.emit(DeckEvent::CollectionChanged(self.collection.ids().to_vec()));
        let refreshed = self.refresh().await?;
        let candidate = result.candidate.clone();
        Ok(result.merge(refreshed.with_candidate(candidate)))
    }

    fn notify_candidate(&mut self, before: Option<Candidate>) {
        if before != self.search.candidate {
            self.emit(DeckEvent::CandidateChanged(self.search.candidate.clone()));
        }
    }

    fn emit(&mut self, event: DeckEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}
