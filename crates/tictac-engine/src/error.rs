//! Engine configuration errors.

/// Errors from parsing engine settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The move order name is not recognized.
    #[error("unknown move order \"{found}\", expected center-first or ascending")]
    UnknownMoveOrder {
        /// The unrecognized name.
        found: String,
    },
}
