#![allow(dead_code)]

use scraper::{ElementRef, Html, Selector};
use skygallery_core::view::{render_page, ImageFilterForm, ImagePage, ImageStatus, ImageSummary};
use skygallery_core::{GalleryConfig, PageKind, QueryParams};

/// Build a page of `count` images numbered from 1.
pub fn sample_page(count: u64, number: u32, num_pages: u32) -> ImagePage {
    let images = (1..=count)
        .map(|id| ImageSummary {
            id,
            title: format!("M{id} field"),
            detail_url: format!("/user_images/{id}"),
            thumbnail_url: format!("/thumbnails/{id}.png"),
            status: match id % 3 {
                0 => ImageStatus::Failed,
                1 => ImageStatus::Calibrated,
                _ => ImageStatus::Processing,
            },
        })
        .collect();
    ImagePage::new(images, number, num_pages)
}

/// Render the page template matching `path` with the default config.
pub fn render(path: &str, query: &str) -> Html {
    render_with(path, query, &sample_page(2, 1, 1))
}

pub fn render_with(path: &str, query: &str, page: &ImagePage) -> Html {
    let config = GalleryConfig::default();
    let kind = config.routes.resolve(path).unwrap_or(PageKind::Images);
    let query = QueryParams::parse(query);
    let form = ImageFilterForm::from_query(&query);
    let html = render_page(kind, &config, path, &query, &form, page).unwrap();
    Html::parse_document(&html)
}

pub fn select<'a>(doc: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    let selector = Selector::parse(css).unwrap();
    doc.select(&selector).collect()
}

pub fn text(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

pub fn is_selected(el: &ElementRef) -> bool {
    el.value().classes().any(|c| c == "selected")
}

/// Text of every element under `css` that carries the selected marker.
pub fn selected_texts(doc: &Html, css: &str) -> Vec<String> {
    select(doc, css)
        .iter()
        .filter(|el| is_selected(el))
        .map(text)
        .collect()
}

pub fn attr(doc: &Html, css: &str, name: &str) -> Option<String> {
    select(doc, css)
        .first()
        .and_then(|el| el.value().attr(name))
        .map(str::to_string)
}
