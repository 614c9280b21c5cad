pub mod config;
pub mod render;
pub mod routes;
pub mod serve;

use std::path::Path;

use anyhow::{Context, Result};
use skygallery_core::view::ImagePage;
use skygallery_core::GalleryConfig;

/// Config from `path`, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<GalleryConfig> {
    match path {
        Some(path) => GalleryConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(GalleryConfig::default()),
    }
}

/// Result page from a TOML fixture, or an empty first page.
pub fn load_fixture(path: Option<&Path>) -> Result<ImagePage> {
    let Some(path) = path else {
        return Ok(ImagePage::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixture {}", path.display()))?;
    let page: ImagePage = toml::from_str(&contents)
        .with_context(|| format!("Invalid image page fixture {}", path.display()))?;
    tracing::debug!(path = %path.display(), images = page.images.len(), "loaded fixture");
    Ok(page)
}
