use crate::routes::RouteTable;

use super::LinkOption;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMode {
    Tag,
    Location,
}

impl SearchMode {
    pub const ALL: [SearchMode; 2] = [Self::Tag, Self::Location];

    pub fn label(self) -> &'static str {
        match self {
            Self::Tag => "By Tag",
            Self::Location => "By Location",
        }
    }

    pub fn url(self, routes: &RouteTable) -> &str {
        match self {
            Self::Tag => &routes.images_by_tag,
            Self::Location => &routes.images_by_location,
        }
    }

    /// The mode whose route equals `path`, if any.
    pub fn from_path(path: &str, routes: &RouteTable) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.url(routes) == path)
    }
}

/// Search mode links; the one whose route equals `path` is selected.
pub fn search_menu(path: &str, routes: &RouteTable) -> Vec<LinkOption> {
    SearchMode::ALL
        .into_iter()
        .map(|mode| {
            let url = mode.url(routes);
            LinkOption {
                label: mode.label().to_string(),
                href: url.to_string(),
                selected: url == path,
            }
        })
        .collect()
}
