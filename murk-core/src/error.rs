use thiserror::Error;

#[derive(Error, Debug)]
pub enum MurkError {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("random sampling failed: {0}")]
    RandomSampling(String),

    #[error("font resource unavailable: {0}")]
    ResourceUnavailable(String),

    #[error("image encoding failed: {0}")]
    Encoding(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, MurkError>;
