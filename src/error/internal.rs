use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Stored Discord IDs are string-encoded snowflakes; a row that fails to
    /// parse indicates corrupted data rather than a caller mistake.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A stored activity type name does not match any known activity type.
    ///
    /// Rows are only written through the closed `ActivityType` enum, so an
    /// unknown name in the database indicates data written by another tool or
    /// a removed variant.
    #[error("Unknown activity type '{0}' stored in daily activity row")]
    UnknownActivityType(String),
}
