use crate::commands::{label, CmdMessage, CmdResult};
use crate::error::Result;
use crate::lookup::LookupService;
use crate::model::Candidate;
use log::debug;

/// The one-slot search box: what was typed and what it resolved to.
#[derive(Debug, Default, Clone)]
pub struct SearchState {
    pub input: String,
    pub candidate: Option<Candidate>,
}

impl SearchState {
    pub fn clear(&mut self) {
        self.input.clear();
        self.candidate = None;
    }
}

/// Lookup key for raw user input: trimmed and lowercased, so `Pikachu` and
/// `pikachu ` hit the same record.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub async fn run<L: LookupService>(
    lookup: &L,
    state: &mut SearchState,
    raw: &str,
) -> Result<CmdResult> {
    let query = normalize_query(raw);
    if query.is_empty() {
        return Ok(CmdResult::default().with_candidate(state.candidate.clone()));
    }
    state.input = raw.to_string();

    let mut result = CmdResult::default();
    match lookup.lookup(&query).await {
        Ok(creature) => {
            result.add_message(CmdMessage::info(format!(
                "Found {}",
                label(creature.id, &creature.name)
            )));
            state.candidate = Some(Candidate::from(creature));
        }
        Err(e) => {
            debug!("search for {:?} failed: {}", query, e);
            state.candidate = None;
            result.add_message(CmdMessage::warning(format!("Not found: {}", query)));
        }
    }

    Ok(result.with_candidate(state.candidate.clone()))
}
