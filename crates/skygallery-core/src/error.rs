use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template render error: {0}")]
    Render(#[from] askama::Error),

    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unknown route name: {0}")]
    UnknownRoute(String),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
