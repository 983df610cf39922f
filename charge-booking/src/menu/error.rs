//! Menu session error types.

/// Errors that end a menu session early.
///
/// User mistakes (bad dates, unknown stations, taken slots) are reported
/// on the menu itself and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
