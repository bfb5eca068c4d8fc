// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LookupError>;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("That is an empty search string... try again")]
    EmptyQuery,

    #[error("No functioning lookup API found")]
    NoEndpoint,

    #[error("There are no books found for your search query... try again")]
    NoBooks,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse search response: {0}")]
    SearchParse(String),

    #[error("Invalid selection: {0}")]
    Selection(String),
}
