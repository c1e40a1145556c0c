//! Extension traits for Dioxus signals to reduce boilerplate.
//!
//! Page state lives in plain structs (`ListQuery`, `TypeFilter`) whose
//! setters enforce the page rules. Updating one through a signal otherwise
//! needs a read-clone-modify-set dance:
//!
//! ```ignore
//! let mut value = query();
//! value.set_search(text);
//! query.set(value);
//! ```
//!
//! With [`SignalExt::mutate`]:
//!
//! ```ignore
//! query.mutate(|q| q.set_search(text));
//! ```

use dioxus::prelude::*;

/// Extension trait for Dioxus signals providing mutation helpers.
///
/// Implemented for all `Signal<T>` where `T: Clone + 'static`.
pub trait SignalExt<T: Clone + 'static> {
    /// Mutate the signal's value and write it back, notifying subscribers once.
    fn mutate<F>(&mut self, f: F)
    where
        F: FnOnce(&mut T);
}

impl<T: Clone + 'static> SignalExt<T> for Signal<T> {
    fn mutate<F>(&mut self, f: F)
    where
        F: FnOnce(&mut T),
    {
        let mut value = self.read().clone();
        f(&mut value);
        self.set(value);
    }
}

// Tests for SignalExt are omitted because they require a Dioxus runtime.
