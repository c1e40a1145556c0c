//! Record source abstraction and the gallery batch fetch.
//!
//! The app crate implements [`RecordSource`] over HTTP; tests implement it
//! in memory. Futures are `?Send` because the browser build runs everything
//! on the single UI thread.

use futures::future::try_join_all;
use tracing::{info, warn};

use crate::error::FetchError;
use crate::model::{PokemonDetails, PokemonListItem};

/// Read-only access to the remote dataset.
///
/// Each call issues exactly one request. There is no retry; callers turn a
/// failure into a terminal page state.
#[async_trait::async_trait(?Send)]
pub trait RecordSource {
    /// Fetch the first-generation list of `{name, url}` entries.
    #[must_use = "Fetch failures should be handled"]
    async fn fetch_list(&self) -> Result<Vec<PokemonListItem>, FetchError>;

    /// Fetch one full record by identity.
    #[must_use = "Fetch failures should be handled"]
    async fn fetch_details(&self, id: u32) -> Result<PokemonDetails, FetchError>;

    /// Fetch one full record from a locator taken from a list entry.
    #[must_use = "Fetch failures should be handled"]
    async fn fetch_details_at(&self, url: &str) -> Result<PokemonDetails, FetchError>;
}

/// Fetches the list, then every detail record concurrently.
///
/// All-or-nothing: the first failing detail request fails the whole batch and
/// the records that did arrive are dropped. Results keep list order.
pub async fn fetch_gallery<S>(source: &S) -> Result<Vec<PokemonDetails>, FetchError>
where
    S: RecordSource + ?Sized,
{
    let items = source.fetch_list().await?;
    let requests = items
        .iter()
        .map(|item| source.fetch_details_at(&item.url));

    match try_join_all(requests).await {
        Ok(records) => {
            info!("Fetched {} gallery records", records.len());
            Ok(records)
        }
        Err(e) => {
            warn!("Gallery batch of {} requests failed: {}", items.len(), e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HasIdentity;
    use crate::test_utils::{details, starter_list};
    use std::cell::Cell;
    use std::collections::HashSet;

    struct MockSource {
        list: Vec<PokemonListItem>,
        failing: HashSet<u32>,
        detail_calls: Cell<usize>,
    }

    impl MockSource {
        fn new(list: Vec<PokemonListItem>) -> Self {
            Self {
                list,
                failing: HashSet::new(),
                detail_calls: Cell::new(0),
            }
        }

        fn failing_on(mut self, id: u32) -> Self {
            self.failing.insert(id);
            self
        }
    }

    #[async_trait::async_trait(?Send)]
    impl RecordSource for MockSource {
        async fn fetch_list(&self) -> Result<Vec<PokemonListItem>, FetchError> {
            Ok(self.list.clone())
        }

        async fn fetch_details(&self, id: u32) -> Result<PokemonDetails, FetchError> {
            self.detail_calls.set(self.detail_calls.get() + 1);
            if self.failing.contains(&id) {
                return Err(FetchError::Status(500));
            }
            self.list
                .iter()
                .find(|item| item.identity() == Some(id))
                .map(|item| details(id, &item.name, &["normal"]))
                .ok_or_else(|| FetchError::NotFound(format!("pokemon/{}", id)))
        }

        async fn fetch_details_at(&self, url: &str) -> Result<PokemonDetails, FetchError> {
            let id = crate::model::identity_from_url(url)
                .ok_or_else(|| FetchError::InvalidUrl(url.to_string()))?;
            self.fetch_details(id).await
        }
    }

    #[tokio::test]
    async fn test_gallery_keeps_list_order() {
        let source = MockSource::new(starter_list());
        let records = fetch_gallery(&source).await.unwrap();

        let ids: Vec<u32> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, (1..=9).collect::<Vec<_>>());
        assert_eq!(records[3].name, "charmander");
        assert_eq!(source.detail_calls.get(), 9);
    }

    #[tokio::test]
    async fn test_gallery_single_failure_fails_batch() {
        let source = MockSource::new(starter_list()).failing_on(5);
        let result = fetch_gallery(&source).await;

        assert_eq!(result, Err(FetchError::Status(500)));
    }

    #[tokio::test]
    async fn test_gallery_empty_list() {
        let source = MockSource::new(Vec::new());
        let records = fetch_gallery(&source).await.unwrap();
        assert!(records.is_empty());
        assert_eq!(source.detail_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_gallery_malformed_locator_fails_batch() {
        let mut list = starter_list();
        list.push(PokemonListItem {
            name: "missingno".to_string(),
            url: "https://pokeapi.co/api/v2/pokemon/".to_string(),
        });
        let source = MockSource::new(list);

        let result = fetch_gallery(&source).await;
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }
}
