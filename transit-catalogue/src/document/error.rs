//! Document error types.

use std::path::PathBuf;

use crate::catalogue::CatalogueError;
use crate::domain::InvalidCoordinates;
use crate::router::RoutingError;

/// Errors that stop a whole document from being processed.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Malformed JSON, or JSON that does not match the document shape
    #[error("invalid document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Responses could not be written out
    #[error("failed to write responses: {0}")]
    Output(#[source] std::io::Error),

    #[error("stop {name}: {source}")]
    InvalidStop {
        name: String,
        #[source]
        source: InvalidCoordinates,
    },

    /// A base request referenced unknown data
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    /// The journey graph could not be built
    #[error(transparent)]
    Routing(#[from] RoutingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DocumentError::from(CatalogueError::UnknownStop("Zagorie".into()));
        assert_eq!(err.to_string(), "unknown stop: Zagorie");

        let err = DocumentError::from(RoutingError::from(CatalogueError::NoDistanceData {
            from: "A".into(),
            to: "B".into(),
        }));
        assert_eq!(err.to_string(), "no distance data between A and B");

        let err = DocumentError::Io {
            path: PathBuf::from("/nonexistent/doc.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("failed to open /nonexistent/doc.json"));

        let err = DocumentError::Output(std::io::ErrorKind::BrokenPipe.into());
        assert!(err.to_string().starts_with("failed to write responses"));
    }
}
