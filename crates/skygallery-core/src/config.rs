use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::routes::RouteTable;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Shown in the base layout header and `<title>`.
    #[serde(default = "default_site_name")]
    pub site_name: String,
    /// Prefix for the site stylesheet and other static assets.
    #[serde(default = "default_static_url")]
    pub static_url: String,
    /// Listen address for `serve`.
    #[serde(default = "default_addr")]
    pub addr: String,
    #[serde(default)]
    pub routes: RouteTable,
}

fn default_site_name() -> String {
    "Sky Gallery".into()
}

fn default_static_url() -> String {
    "/static/".into()
}

fn default_addr() -> String {
    "127.0.0.1:8080".into()
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            site_name: default_site_name(),
            static_url: default_static_url(),
            addr: default_addr(),
            routes: RouteTable::default(),
        }
    }
}

impl GalleryConfig {
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: GalleryConfig = toml::from_str(contents)?;
        config.routes.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        tracing::debug!(path = %path.display(), "loaded gallery config");
        Ok(config)
    }
}
