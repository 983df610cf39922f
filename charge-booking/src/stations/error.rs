//! Station catalogue error types.

/// Errors that can occur when loading a station catalogue.
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    /// Catalogue text is not valid JSON for a station list
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// An entry has a blank name
    #[error("catalogue entry {index} has no name")]
    MissingName { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogueError::MissingName { index: 2 };
        assert_eq!(err.to_string(), "catalogue entry 2 has no name");

        let err: CatalogueError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(err.to_string().starts_with("JSON parse error: "));
    }
}
