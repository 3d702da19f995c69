//! Query error types.

use crate::catalogue::CatalogueError;

/// Why a single statistics request could not be answered.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    /// The catalogue could not answer the lookup
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    /// Both stops exist but no sequence of rides connects them
    #[error("no route from {from} to {to}")]
    Unreachable { from: String, to: String },

    /// A map was requested but no renderer is installed
    #[error("map rendering is not available")]
    MapUnavailable,
}

impl QueryError {
    /// True for misses that are reported to callers as "not found".
    ///
    /// Unknown bus or stop names and unreachable routes all count.
    pub fn is_not_found(&self) -> bool {
        match self {
            QueryError::Catalogue(err) => err.is_not_found(),
            QueryError::Unreachable { .. } => true,
            QueryError::MapUnavailable => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_classification() {
        assert!(QueryError::from(CatalogueError::BusNotFound("1".into())).is_not_found());
        assert!(QueryError::from(CatalogueError::StopNotFound("A".into())).is_not_found());
        assert!(
            QueryError::Unreachable {
                from: "A".into(),
                to: "B".into()
            }
            .is_not_found()
        );
        assert!(!QueryError::MapUnavailable.is_not_found());
        assert!(
            !QueryError::from(CatalogueError::NoDistanceData {
                from: "A".into(),
                to: "B".into()
            })
            .is_not_found()
        );
    }

    #[test]
    fn catalogue_errors_display_unchanged() {
        let err = QueryError::from(CatalogueError::StopNotFound("Marushkino".into()));
        assert_eq!(err.to_string(), "stop not found: Marushkino");
    }

    #[test]
    fn unreachable_display() {
        let err = QueryError::Unreachable {
            from: "A".into(),
            to: "B".into(),
        };
        assert_eq!(err.to_string(), "no route from A to B");
    }
}
