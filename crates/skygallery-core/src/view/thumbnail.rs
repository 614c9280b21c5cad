use std::fmt;

use crate::query::QueryParams;

use super::LinkOption;

pub const THUMBNAIL_SIZE_PARAM: &str = "thumbnail_size";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThumbnailSize {
    Small,
    Medium,
    #[default]
    Large,
}

impl ThumbnailSize {
    pub const ALL: [ThumbnailSize; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Exact, case-sensitive match on the query value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Whether this size is the active one for a raw `thumbnail_size` value.
    /// An absent or empty value means the default size.
    pub fn is_selected_by(self, current: Option<&str>) -> bool {
        match current {
            None | Some("") => self == Self::default(),
            Some(value) => value == self.as_str(),
        }
    }
}

impl fmt::Display for ThumbnailSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size links for the current query. Each href keeps every other parameter
/// and overrides only `thumbnail_size`.
pub fn size_options(query: &QueryParams) -> Vec<LinkOption> {
    let current = query.get(THUMBNAIL_SIZE_PARAM);
    if let Some(value) = current {
        if !value.is_empty() && ThumbnailSize::parse(value).is_none() {
            tracing::warn!(thumbnail_size = value, "unknown thumbnail size, none selected");
        }
    }
    ThumbnailSize::ALL
        .iter()
        .map(|&size| LinkOption {
            label: size.as_str().to_string(),
            href: format!(
                "?{}",
                query.with_override(THUMBNAIL_SIZE_PARAM, size.as_str())
            ),
            selected: size.is_selected_by(current),
        })
        .collect()
}
