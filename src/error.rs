use thiserror::Error;

/// Reasons an embedded config or content block is rejected.
///
/// None of these stop the page from rendering; the caller logs the error and
/// falls back to the built-in defaults.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid JSON in #{id}: {source}")]
    Parse {
        id: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("content must list at least one feature")]
    NoFeatures,
}
