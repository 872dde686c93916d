use thiserror::Error;

/// Domain failures that callers may want to tell apart
#[derive(Debug, Error)]
pub enum WarError {
    #[error("not enough rating data: the sources share no rating year")]
    Unavailable,

    #[error("unknown gender filter: {0:?}")]
    UnknownGender(String),
}

/// Add context to query errors
pub fn query_context(what: &str) -> String {
    format!("Failed to query {}", what)
}

/// Add context to dataset errors
pub fn dataset_context(operation: &str, path: &str) -> String {
    format!("Failed to {} dataset: {}", operation, path)
}
