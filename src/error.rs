use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Backend failure in a store implementation. The in-memory store never
    /// produces this; the variant exists for database-backed stores.
    #[error("storage error: {0}")]
    Storage(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
