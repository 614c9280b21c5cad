use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStatus {
    #[default]
    Calibrated,
    Processing,
    Failed,
}

impl ImageStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Calibrated => "Calibrated",
            Self::Processing => "Processing",
            Self::Failed => "Failed",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Calibrated => "status-calibrated",
            Self::Processing => "status-processing",
            Self::Failed => "status-failed",
        }
    }
}

/// One entry in a page of results, as supplied by the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageSummary {
    pub id: u64,
    pub title: String,
    pub detail_url: String,
    pub thumbnail_url: String,
    #[serde(default)]
    pub status: ImageStatus,
}

/// A page of image results. Slicing and counting happen upstream; this only
/// carries the outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImagePage {
    #[serde(default)]
    pub images: Vec<ImageSummary>,
    /// 1-based page number.
    #[serde(default = "first_page")]
    pub number: u32,
    #[serde(default = "first_page")]
    pub num_pages: u32,
}

fn first_page() -> u32 {
    1
}

impl Default for ImagePage {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            number: 1,
            num_pages: 1,
        }
    }
}

impl ImagePage {
    pub fn new(images: Vec<ImageSummary>, number: u32, num_pages: u32) -> Self {
        Self {
            images,
            number,
            num_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn previous_page_number(&self) -> Option<u32> {
        self.has_previous().then(|| self.number - 1)
    }

    pub fn next_page_number(&self) -> Option<u32> {
        self.has_next().then(|| self.number + 1)
    }
}
