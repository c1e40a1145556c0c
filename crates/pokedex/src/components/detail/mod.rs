//! Detail page: one record with previous/next navigation.

mod detail_nav;
mod detail_view;
mod stat_bar;

pub use detail_nav::DetailNavigation;
pub use detail_view::DetailView;
pub use stat_bar::StatBar;
