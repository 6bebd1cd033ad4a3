/// Error types for the study catalog.
///
/// The catalog itself never fails at query time: an empty filter result is a normal
/// outcome. These errors cover parsing user-supplied labels and checking the static
/// tables at startup.

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown level: '{0}' (expected one of S, S+, H, AP, IB)")]
    InvalidLevel(String),

    #[error("invalid {kind} record '{name}': {message}")]
    InvalidRecord {
        kind: &'static str,
        name: String,
        message: String,
    },
}
