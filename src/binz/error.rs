use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BinzError {
    #[error("file must contain valid JSON: {0}")]
    InvalidContent(#[source] serde_json::Error),

    #[error("index file must have a .json extension: {}", .0.display())]
    InvalidExtension(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed bin index: {0}")]
    MalformedIndex(#[source] serde_json::Error),

    #[error("could not build API request: {0}")]
    RequestConstruction(String),

    #[error("API request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("error decoding API response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("bin changed remotely but the local index could not be updated: {0}")]
    IndexSync(#[source] Box<BinzError>),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BinzError>;
