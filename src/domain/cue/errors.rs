//! Cue Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("fallback cue '{0}' is missing from the sound catalog")]
    MissingFallback(&'static str),

    #[error("cue '{0}' has an empty file name")]
    EmptyFile(String),

    #[error("sound base path cannot be empty")]
    EmptyBasePath,
}
