//! View models and askama templates for the image search pages.

pub mod filters;
pub mod grid;
pub mod images;
pub mod page;
pub mod search_mode;
pub mod thumbnail;

pub use filters::{BooleanField, ImageFilterForm};
pub use grid::ImageGrid;
pub use images::{render_page, ImagesPage, LocationImagesPage, PageContext, TagImagesPage};
pub use page::{ImagePage, ImageStatus, ImageSummary};
pub use search_mode::SearchMode;
pub use thumbnail::ThumbnailSize;

/// One choice in a set of links where at most one is the active option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkOption {
    pub label: String,
    pub href: String,
    pub selected: bool,
}
