//! List page: search, sort and a row per entry.

mod list_row;
mod list_view;
mod sort_controls;

pub use list_row::ListRow;
pub use list_view::ListView;
pub use sort_controls::SortControls;
