//! Previous/next resolution for the detail page.
//!
//! When the user opens a detail page from the list or the gallery, the page
//! they came from hands over the exact list it was showing (after search,
//! sort or type filtering) as a [`ReferenceList`]. Navigation then walks that
//! list, so "next" means "next in the view I came from".
//!
//! Direct navigation (a bookmarked URL, a reload) carries no list. In that
//! case, and when the target is not part of the carried list, the resolver
//! falls back to plain arithmetic bounded by [`MAX_POKEMON_ID`].

use tracing::debug;

use crate::config::MAX_POKEMON_ID;
use crate::model::{HasIdentity, PokemonDetails, PokemonListItem};

/// Identities of the records before and after the current one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbors {
    pub previous: Option<u32>,
    pub next: Option<u32>,
}

/// Arithmetic neighbors within `1..=MAX_POKEMON_ID`.
pub fn fallback_neighbors(id: u32) -> Neighbors {
    Neighbors {
        previous: (id > 1).then(|| id - 1),
        next: (id < MAX_POKEMON_ID).then(|| id + 1),
    }
}

/// Resolves neighbors of `target` within an ordered reference list.
///
/// The first entry whose identity equals `target` is the anchor. An adjacent
/// entry without a parseable identity produces no link on that side.
///
/// # Examples
///
/// ```
/// use pokedex_core::model::PokemonListItem;
/// use pokedex_core::neighbors::{resolve_neighbors, Neighbors};
///
/// let item = |id: u32| PokemonListItem {
///     name: format!("#{}", id),
///     url: format!("https://pokeapi.co/api/v2/pokemon/{}/", id),
/// };
/// let list = vec![item(7), item(4), item(1)];
///
/// assert_eq!(
///     resolve_neighbors(4, Some(list.as_slice())),
///     Neighbors { previous: Some(7), next: Some(1) }
/// );
/// ```
pub fn resolve_neighbors<T: HasIdentity>(target: u32, reference: Option<&[T]>) -> Neighbors {
    let Some(list) = reference else {
        debug!("No reference list for #{}, using arithmetic neighbors", target);
        return fallback_neighbors(target);
    };

    match list
        .iter()
        .position(|entry| entry.identity() == Some(target))
    {
        Some(index) => Neighbors {
            previous: index
                .checked_sub(1)
                .and_then(|prev| list.get(prev))
                .and_then(HasIdentity::identity),
            next: list.get(index + 1).and_then(HasIdentity::identity),
        },
        None => {
            debug!(
                "#{} not in reference list of {} entries, using arithmetic neighbors",
                target,
                list.len()
            );
            fallback_neighbors(target)
        }
    }
}

/// Ordered list carried from the originating page into the detail page.
///
/// The list page carries list items, the gallery carries full records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceList {
    Items(Vec<PokemonListItem>),
    Details(Vec<PokemonDetails>),
}

impl ReferenceList {
    /// Neighbors of `target` within this list (with arithmetic fallback).
    pub fn neighbors(&self, target: u32) -> Neighbors {
        match self {
            ReferenceList::Items(items) => resolve_neighbors(target, Some(items.as_slice())),
            ReferenceList::Details(records) => resolve_neighbors(target, Some(records.as_slice())),
        }
    }
}

/// Neighbors of `target` given whatever list navigation carried, if any.
pub fn neighbors_for(target: u32, reference: Option<&ReferenceList>) -> Neighbors {
    match reference {
        Some(list) => list.neighbors(target),
        None => fallback_neighbors(target),
    }
}
