use thiserror::Error;

#[derive(Debug, Error)]
pub enum DietError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),
}

impl DietError {
    /// Whether this error is one of the ways a catalog or search request can fail.
    ///
    /// Network failures and unparseable bodies are reported as a failed search
    /// rather than aborting the command.
    pub fn is_search_failure(&self) -> bool {
        matches!(
            self,
            DietError::Http(_) | DietError::MalformedResponse(_) | DietError::Json(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, DietError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_failure_classification() {
        assert!(DietError::MalformedResponse("not an array".to_string()).is_search_failure());
        let json_err = serde_json::from_str::<u32>("x").unwrap_err();
        assert!(DietError::Json(json_err).is_search_failure());

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!DietError::Io(io_err).is_search_failure());
        assert!(!DietError::UnknownSortKey("sugar".to_string()).is_search_failure());
    }
}
