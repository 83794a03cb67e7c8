use std::fmt;

use crate::{Pillar, ResourceId, SessionType};

/// Result type for month1 operations
pub type Result<T> = std::result::Result<T, Error>;

/// A single consistency problem found in the static catalogue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueIssue {
    /// Event whose category has no pillar in its session group
    OrphanEvent {
        session: SessionType,
        event: ResourceId,
        category: Pillar,
    },

    /// Same pillar listed more than once in a session group
    DuplicatePillar {
        session: SessionType,
        pillar: Pillar,
    },

    /// Resource id with no entry in the string table
    MissingResource { id: ResourceId },
}

impl fmt::Display for CatalogueIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogueIssue::OrphanEvent {
                session,
                event,
                category,
            } => write!(
                f,
                "{} event '{}' has category '{}' but no such pillar in that session",
                session, event, category
            ),
            CatalogueIssue::DuplicatePillar { session, pillar } => {
                write!(f, "{} lists pillar '{}' more than once", session, pillar)
            }
            CatalogueIssue::MissingResource { id } => {
                write!(f, "resource '{}' is not defined", id)
            }
        }
    }
}

/// Error types that can occur across the month1 crates
#[derive(Debug)]
pub enum Error {
    /// Pillar name did not match any known pillar
    UnknownPillar(String),

    /// Destination name did not match any known screen
    UnknownDestination(String),

    /// Session type name did not match any known session group
    UnknownSessionType(String),

    /// Catalogue failed startup validation
    CatalogueInconsistency(Vec<CatalogueIssue>),

    /// Configuration error
    Config(String),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownPillar(name) => write!(f, "Unknown pillar: '{}'", name),
            Error::UnknownDestination(name) => write!(f, "Unknown destination: '{}'", name),
            Error::UnknownSessionType(name) => write!(f, "Unknown session type: '{}'", name),
            Error::CatalogueInconsistency(issues) => {
                write!(f, "Catalogue inconsistency ({} issue(s))", issues.len())?;
                for issue in issues {
                    write!(f, "\n  - {}", issue)?;
                }
                Ok(())
            }
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
