use crate::collection::{AddOutcome, Collection};
use crate::commands::search::SearchState;
use crate::commands::{label, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::KeyValueStore;

/// Commit the pending candidate into the collection.
///
/// A duplicate clears the candidate without touching storage. On a failed
/// write the candidate is left pending so the user can retry.
pub fn run<S: KeyValueStore>(
    collection: &mut Collection<S>,
    state: &mut SearchState,
) -> Result<CmdResult> {
    let Some(candidate) = state.candidate.take() else {
        return Ok(CmdResult::default());
    };
    let mut result = CmdResult::default();
    let name = label(candidate.id, &candidate.name);

    if collection.contains(candidate.id) {
        result.add_message(CmdMessage::warning(format!("{} is already in the deck", name)));
        return Ok(result);
    }

    match collection.add(candidate.id) {
        Ok(AddOutcome::Added) => {
            result.add_message(CmdMessage::success(format!("Added {}", name)));
            result.affected_ids.push(candidate.id);
            state.input.clear();
        }
        Ok(AddOutcome::Duplicate) => {
            result.add_message(CmdMessage::warning(format!("{} is already in the deck", name)));
        }
        Err(e) => {
            state.candidate = Some(candidate);
            return Err(e);
        }
    }

    Ok(result)
}
