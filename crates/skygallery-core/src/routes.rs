use serde::{Deserialize, Serialize};

use crate::error::{GalleryError, Result};

pub const IMAGES: &str = "images";
pub const IMAGES_BY_TAG: &str = "images_by_tag";
pub const IMAGES_BY_LOCATION: &str = "images_by_location";

/// Liveness endpoint served next to the gallery routes.
pub const HEALTH_PATH: &str = "/healthz";

/// URL paths for the named gallery routes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    pub images: String,
    pub images_by_tag: String,
    pub images_by_location: String,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            images: "/user_images/".into(),
            images_by_tag: "/user_images/tag/".into(),
            images_by_location: "/user_images/location/".into(),
        }
    }
}

/// Which page template a request path resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Images,
    ByTag,
    ByLocation,
}

impl RouteTable {
    /// Resolve a route name to its URL path.
    pub fn reverse(&self, name: &str) -> Result<&str> {
        match name {
            IMAGES => Ok(&self.images),
            IMAGES_BY_TAG => Ok(&self.images_by_tag),
            IMAGES_BY_LOCATION => Ok(&self.images_by_location),
            other => Err(GalleryError::UnknownRoute(other.to_string())),
        }
    }

    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            (IMAGES, self.images.as_str()),
            (IMAGES_BY_TAG, self.images_by_tag.as_str()),
            (IMAGES_BY_LOCATION, self.images_by_location.as_str()),
        ]
    }

    /// Match a request path against the table. Exact comparison only.
    pub fn resolve(&self, path: &str) -> Option<PageKind> {
        if path == self.images_by_tag {
            Some(PageKind::ByTag)
        } else if path == self.images_by_location {
            Some(PageKind::ByLocation)
        } else if path == self.images {
            Some(PageKind::Images)
        } else {
            None
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, path) in self.entries() {
            if !path.starts_with('/') {
                return Err(GalleryError::InvalidConfig(format!(
                    "route {name} must start with '/', got {path:?}"
                )));
            }
            if path == HEALTH_PATH {
                return Err(GalleryError::InvalidConfig(format!(
                    "route {name} collides with {HEALTH_PATH}"
                )));
            }
            if path
                .split('/')
                .any(|segment| segment.starts_with(':') || segment.starts_with('*'))
            {
                return Err(GalleryError::InvalidConfig(format!(
                    "route {name} must be a literal path, got {path:?}"
                )));
            }
        }
        let [(_, a), (_, b), (_, c)] = self.entries();
        if a == b || a == c || b == c {
            return Err(GalleryError::InvalidConfig(
                "route paths must be distinct".into(),
            ));
        }
        Ok(())
    }
}
