//! Rebuilds the card list from the saved ids.
//!
//! One lookup per id, at most `concurrency` in flight. Results are collected
//! in id order whatever order the responses arrive in. An id whose lookup
//! fails is left out of the list but stays in the collection, so a later
//! refresh can bring it back.

use crate::commands::CmdResult;
use crate::error::Result;
use crate::lookup::LookupService;
use crate::model::{CreatureId, DisplayRecord};
use futures::stream::{self, StreamExt};
use log::{debug, warn};

pub async fn fetch_records<L: LookupService>(
    lookup: &L,
    ids: &[CreatureId],
    concurrency: usize,
) -> Vec<DisplayRecord> {
    if ids.is_empty() {
        return Vec::new();
    }

    let outcomes: Vec<_> = stream::iter(ids.iter().copied())
        .map(move |id| async move {
            let query = id.to_string();
            (id, lookup.lookup(&query).await)
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let records: Vec<DisplayRecord> = outcomes
        .into_iter()
        .filter_map(|(id, outcome)| match outcome {
            Ok(creature) => Some(DisplayRecord::from(creature)),
            Err(e) => {
                warn!("skipping #{}: {}", id, e);
                None
            }
        })
        .collect();

    debug!("resolved {} of {} saved ids", records.len(), ids.len());
    records
}

pub async fn run<L: LookupService>(
    lookup: &L,
    ids: &[CreatureId],
    concurrency: usize,
) -> Result<CmdResult> {
    let records = fetch_records(lookup, ids, concurrency).await;
    Ok(CmdResult::default().with_listed(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::memory::InMemoryLookup;

    fn ids(raw: &[u32]) -> Vec<CreatureId> {
        raw.iter().map(|&n| CreatureId::new(n).unwrap()).collect()
    }

    fn listed_ids(records: &[DisplayRecord]) -> Vec<u32> {
        records.iter().map(|r| r.id.get()).collect()
    }

    #[tokio::test]
    async fn empty_collection_makes_no_requests() {
        let lookup = InMemoryLookup::new();
        let records = fetch_records(&lookup, &[], 4).await;
        assert!(records.is_empty());
        assert!(lookup.queries().is_empty());
    }

    #[tokio::test]
    async fn failed_lookup_is_skipped_in_order() {
        let lookup = InMemoryLookup::new()
            .with_creature(1, "bulbasaur", Some(45))
            .with_creature(2, "ivysaur", Some(60))
            .with_creature(3, "venusaur", Some(80))
            .with_unreachable("2");

        let result = run(&lookup, &ids(&[1, 2, 3]), 4).await.unwrap();

        assert_eq!(listed_ids(&result.listed), vec![1, 3]);
        assert!(result.messages.is_empty());
    }

    #[tokio::test]
    async fn not_found_is_skipped() {
        let lookup = InMemoryLookup::new()
            .with_creature(10, "caterpie", Some(45))
            .with_creature(30, "nidorina", Some(56));

        let records = fetch_records(&lookup, &ids(&[30, 20, 10]), 2).await;

        assert_eq!(listed_ids(&records), vec![30, 10]);
    }

    #[tokio::test]
    async fn every_id_is_queried_in_collection_order() {
        let lookup = InMemoryLookup::new()
            .with_creature(7, "squirtle", Some(43))
            .with_creature(4, "charmander", Some(65));

        let records = fetch_records(&lookup, &ids(&[7, 4]), 1).await;

        assert_eq!(lookup.queries(), vec!["7".to_string(), "4".to_string()]);
        assert!(records.iter().all(|r| !r.revealed));
        assert_eq!(records[0].speed, Some(43));
    }

    #[tokio::test]
    async fn zero_concurrency_still_fetches() {
        let lookup = InMemoryLookup::new().with_creature(1, "bulbasaur", None);
        let records = fetch_records(&lookup, &ids(&[1]), 0).await;
        assert_eq!(listed_ids(&records), vec![1]);
    }
}
