pub mod config;
pub mod error;
pub mod query;
pub mod routes;
pub mod view;

pub use config::GalleryConfig;
pub use error::{GalleryError, Result};
pub use query::QueryParams;
pub use routes::{PageKind, RouteTable};
