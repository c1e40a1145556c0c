//! Explicit page load state.
//!
//! Every page goes through the same lifecycle: it starts loading on mount,
//! then either holds its data or ends in a terminal failure message. Keeping
//! that as one enum makes the loading / not-found / error branches
//! exhaustive at every render site.

use crate::error::FetchError;

/// Why a page could not show its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadFailure {
    /// The requested record does not exist
    NotFound,
    /// Network, status or decode failure
    Unavailable(String),
}

impl std::fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadFailure::NotFound => write!(f, "not found"),
            LoadFailure::Unavailable(reason) => write!(f, "unavailable ({})", reason),
        }
    }
}

impl From<FetchError> for LoadFailure {
    fn from(err: FetchError) -> Self {
        if err.is_not_found() {
            LoadFailure::NotFound
        } else {
            LoadFailure::Unavailable(err.to_string())
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(LoadFailure),
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(err) => LoadState::Failed(err.into()),
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// A load result tagged with the identity it was requested for.
///
/// A page that refetches when its route id changes can still be holding the
/// previous id's result for a moment. [`KeyedLoad::state_for`] hides that
/// result instead of rendering it under the new id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedLoad<T> {
    pub id: u32,
    pub state: LoadState<T>,
}

impl<T> KeyedLoad<T> {
    pub fn from_result(id: u32, result: Result<T, FetchError>) -> Self {
        Self {
            id,
            state: LoadState::from_result(result),
        }
    }

    /// State to render for the page currently showing `current`.
    ///
    /// `None` when this result belongs to another id; callers show it as
    /// loading.
    pub fn state_for(&self, current: u32) -> Option<&LoadState<T>> {
        (self.id == current).then_some(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loading() {
        let state: LoadState<Vec<u32>> = LoadState::default();
        assert_eq!(state, LoadState::Loading);
        assert!(state.loaded().is_none());
    }

    #[test]
    fn test_from_ok() {
        let state = LoadState::from_result(Ok(vec![1, 2, 3]));
        assert_eq!(state, LoadState::Loaded(vec![1, 2, 3]));
        assert_eq!(state.loaded(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn test_not_found_is_distinguished() {
        let state: LoadState<()> =
            LoadState::from_result(Err(FetchError::NotFound("pokemon/9999".to_string())));
        assert_eq!(state, LoadState::Failed(LoadFailure::NotFound));
    }

    #[test]
    fn test_other_errors_are_unavailable() {
        let state: LoadState<()> = LoadState::from_result(Err(FetchError::Status(503)));
        match state {
            LoadState::Failed(LoadFailure::Unavailable(reason)) => {
                assert!(reason.contains("503"));
            }
            other => panic!("Unexpected state: {:?}", other),
        }
    }

    #[test]
    fn test_keyed_load_matches_current_id() {
        let keyed = KeyedLoad::from_result(25, Ok("pikachu"));
        assert_eq!(keyed.state_for(25), Some(&LoadState::Loaded("pikachu")));
    }

    #[test]
    fn test_keyed_load_hides_result_for_previous_id() {
        // Fetched for #4, route has since moved on to #5
        let keyed = KeyedLoad::from_result(4, Ok("charmander"));
        assert_eq!(keyed.state_for(5), None);

        let failed: KeyedLoad<&str> =
            KeyedLoad::from_result(4, Err(FetchError::NotFound("pokemon/4".to_string())));
        assert_eq!(failed.state_for(5), None);
        assert_eq!(
            failed.state_for(4),
            Some(&LoadState::Failed(LoadFailure::NotFound))
        );
    }
}
