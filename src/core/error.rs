use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Serialization itself is infallible: every classifier degrades unmapped
/// input to a default code, and absent optional fields render as empty
/// elements. Errors only arise while constructing a report.
#[derive(Debug, Error)]
pub enum AnnexError {
    /// A report could not be decoded from JSON.
    #[error("JSON decoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// An invalid reporting period was provided (start must be before end).
    #[error("invalid reporting period: start must be before end")]
    InvalidDates,
}
