use thiserror::Error;

/// Errors that can occur when building a collection or an item
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// The input had the wrong shape (not an array, not an object, or no string `key`)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
