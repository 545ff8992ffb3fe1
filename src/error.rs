use thiserror::Error;

#[derive(Error, Debug)]
pub enum SquanchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Catalog responded with {0}")]
    Http(reqwest::StatusCode),

    #[error("Malformed character reference: {0}")]
    CharacterRef(String),
}

pub type Result<T> = std::result::Result<T, SquanchError>;
