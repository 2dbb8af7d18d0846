use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while loading a catalog.
///
/// The query path is total and never returns one of these: a query that
/// carries no usable signal produces an empty result list, not an error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed catalog: {0}")]
    MalformedCatalog(#[from] serde_json::Error),

    #[error("Catalog read error: {0}")]
    Io(#[from] std::io::Error),
}
