use crate::collection::{Collection, RemoveOutcome};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CreatureId;
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(collection: &mut Collection<S>, ids: &[CreatureId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        match collection.remove(id)? {
            RemoveOutcome::Removed => {
                result.add_message(CmdMessage::success(format!("Removed #{}", id)));
                result.affected_ids.push(id);
            }
            RemoveOutcome::NotPresent => {
                result.add_message(CmdMessage::info(format!("#{} is not in the deck", id)));
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::COLLECTION_KEY;
    use crate::store::memory::InMemoryStore;

    fn id(n: u32) -> CreatureId {
        CreatureId::new(n).unwrap()
    }

    #[test]
    fn removes_each_present_id() {
        let store = InMemoryStore::new().with_value(COLLECTION_KEY, "[1,2,3,4]");
        let mut collection = Collection::load(store);

        let result = run(&mut collection, &[id(4), id(2)]).unwrap();

        assert_eq!(collection.ids(), &[id(1), id(3)]);
        assert_eq!(result.affected_ids, vec![id(4), id(2)]);
        assert_eq!(
            collection.store().get(COLLECTION_KEY).unwrap().as_deref(),
            Some("[1,3]")
        );
    }

    #[test]
    fn absent_id_changes_nothing() {
        let store = InMemoryStore::new().with_value(COLLECTION_KEY, "[1,2]");
        let mut collection = Collection::load(store);

        let result = run(&mut collection, &[id(8)]).unwrap();

        assert!(result.affected_ids.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(collection.ids(), &[id(1), id(2)]);
        assert_eq!(collection.store().writes(), 0);
        assert_eq!(
            collection.store().get(COLLECTION_KEY).unwrap().as_deref(),
            Some("[1,2]")
        );
    }

    #[test]
    fn repeated_id_is_removed_once() {
        let store = InMemoryStore::new().with_value(COLLECTION_KEY, "[5]");
        let mut collection = Collection::load(store);

        let result = run(&mut collection, &[id(5), id(5)]).unwrap();

        assert_eq!(result.affected_ids, vec![id(5)]);
        assert_eq!(collection.store().writes(), 1);
    }
}
