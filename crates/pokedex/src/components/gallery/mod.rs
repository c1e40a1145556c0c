//! Gallery page: sprite cards filtered by type.

mod gallery_card;
mod gallery_view;
mod type_filter_bar;

pub use gallery_card::GalleryCard;
pub use gallery_view::GalleryView;
pub use type_filter_bar::TypeFilterBar;
