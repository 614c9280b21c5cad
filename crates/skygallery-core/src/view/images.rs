use askama::Template;

use crate::config::GalleryConfig;
use crate::error::Result;
use crate::query::QueryParams;
use crate::routes::{PageKind, RouteTable};

use super::filters::ImageFilterForm;
use super::grid::ImageGrid;
use super::page::ImagePage;
use super::search_mode::search_menu;
use super::thumbnail::{size_options, THUMBNAIL_SIZE_PARAM};
use super::LinkOption;

pub const SORT_PARAM: &str = "sort";

/// Everything the images page and its extensions render from.
pub struct PageContext<'a> {
    pub site_name: &'a str,
    pub static_url: &'a str,
    /// Target of the page title link.
    pub images_url: &'a str,
    /// Current request path, also the search form action.
    pub path: &'a str,
    pub query: &'a QueryParams,
    /// Raw `thumbnail_size` value, empty when absent.
    pub thumbnail_size: &'a str,
    /// Raw `sort` value, empty when absent.
    pub sort: &'a str,
    pub search_menu: Vec<LinkOption>,
    pub size_options: Vec<LinkOption>,
    pub form: &'a ImageFilterForm,
    pub image_page: &'a ImagePage,
}

impl<'a> PageContext<'a> {
    pub fn new(
        config: &'a GalleryConfig,
        path: &'a str,
        query: &'a QueryParams,
        form: &'a ImageFilterForm,
        image_page: &'a ImagePage,
    ) -> Self {
        let routes: &'a RouteTable = &config.routes;
        Self {
            site_name: &config.site_name,
            static_url: &config.static_url,
            images_url: &routes.images,
            path,
            query,
            thumbnail_size: query.get_or_empty(THUMBNAIL_SIZE_PARAM),
            sort: query.get_or_empty(SORT_PARAM),
            search_menu: search_menu(path, routes),
            size_options: size_options(query),
            form,
            image_page,
        }
    }

    /// The results grid, handed the page and size exactly as received.
    pub fn grid(&self) -> ImageGrid<'a> {
        ImageGrid::new(
            self.image_page,
            self.query.get(THUMBNAIL_SIZE_PARAM),
            self.query,
        )
    }
}

#[derive(Template)]
#[template(path = "images.html")]
pub struct ImagesPage<'a> {
    pub ctx: PageContext<'a>,
}

#[derive(Template)]
#[template(path = "images_by_tag.html")]
pub struct TagImagesPage<'a> {
    pub ctx: PageContext<'a>,
    pub tag_query: &'a str,
}

impl<'a> TagImagesPage<'a> {
    pub fn new(ctx: PageContext<'a>) -> Self {
        let query = ctx.query;
        Self {
            tag_query: query.get_or_empty("query"),
            ctx,
        }
    }
}

#[derive(Template)]
#[template(path = "images_by_location.html")]
pub struct LocationImagesPage<'a> {
    pub ctx: PageContext<'a>,
    pub ra: &'a str,
    pub dec: &'a str,
    pub radius: &'a str,
}

impl<'a> LocationImagesPage<'a> {
    pub fn new(ctx: PageContext<'a>) -> Self {
        let query = ctx.query;
        Self {
            ra: query.get_or_empty("ra"),
            dec: query.get_or_empty("dec"),
            radius: query.get_or_empty("radius"),
            ctx,
        }
    }
}

/// Render the template for `kind` from a path and query.
pub fn render_page(
    kind: PageKind,
    config: &GalleryConfig,
    path: &str,
    query: &QueryParams,
    form: &ImageFilterForm,
    image_page: &ImagePage,
) -> Result<String> {
    let ctx = PageContext::new(config, path, query, form, image_page);
    tracing::debug!(
        ?kind,
        path,
        thumbnail_size = ctx.thumbnail_size,
        images = image_page.images.len(),
        "rendering images page"
    );
    let html = match kind {
        PageKind::Images => ImagesPage { ctx }.render()?,
        PageKind::ByTag => TagImagesPage::new(ctx).render()?,
        PageKind::ByLocation => LocationImagesPage::new(ctx).render()?,
    };
    Ok(html)
}
