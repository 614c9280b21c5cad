use askama::Template;

use crate::query::QueryParams;

use super::page::ImagePage;
use super::thumbnail::ThumbnailSize;

pub const PAGE_PARAM: &str = "page";

/// Paginated thumbnail grid.
///
/// `image_page` and `thumbnail_size` are exactly what the enclosing page
/// received; `query` is only used to build pagination links.
#[derive(Template)]
#[template(path = "paginated_image_set.html")]
pub struct ImageGrid<'a> {
    pub image_page: &'a ImagePage,
    pub thumbnail_size: Option<&'a str>,
    pub query: &'a QueryParams,
}

impl<'a> ImageGrid<'a> {
    pub fn new(
        image_page: &'a ImagePage,
        thumbnail_size: Option<&'a str>,
        query: &'a QueryParams,
    ) -> Self {
        Self {
            image_page,
            thumbnail_size,
            query,
        }
    }

    /// CSS class for thumbnails. Unknown or missing sizes use the default.
    pub fn size_class(&self) -> String {
        let size = self
            .thumbnail_size
            .and_then(ThumbnailSize::parse)
            .unwrap_or_default();
        format!("thumbnail-{size}")
    }

    pub fn previous_href(&self) -> Option<String> {
        self.image_page
            .previous_page_number()
            .map(|n| self.page_href(n))
    }

    pub fn next_href(&self) -> Option<String> {
        self.image_page.next_page_number().map(|n| self.page_href(n))
    }

    fn page_href(&self, number: u32) -> String {
        format!("?{}", self.query.with_override(PAGE_PARAM, &number.to_string()))
    }
}
