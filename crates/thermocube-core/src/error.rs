//! Error types for the thermocube engine.
//!
//! Every fallible operation on a lattice, a temperature field, or a
//! simulation reports one of three kinds: bad inputs at construction
//! time, a coordinate outside the cube, or an allocation failure.

use std::error::Error;
use std::fmt;

use crate::id::Coord3;

/// Errors from field construction, coefficient derivation, stepping,
/// and cell access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// Construction or coefficient inputs are unusable (size below 3,
    /// non-finite temperatures, non-positive density, ...).
    ///
    /// Not recoverable: the caller must fix the inputs and construct again.
    InvalidConfiguration {
        /// Human-readable description of the rejected input.
        reason: String,
    },
    /// A coordinate lies outside `[0, size)` on at least one axis.
    OutOfRange {
        /// The offending coordinate.
        coord: Coord3,
        /// Side length of the cube that was queried.
        size: usize,
    },
    /// A temperature buffer could not be allocated.
    ///
    /// The field that reported this is left exactly as it was before
    /// the failing call.
    ResourceExhausted {
        /// Number of cells the failed allocation asked for.
        requested: usize,
    },
}

impl FieldError {
    /// Shorthand for an [`InvalidConfiguration`](Self::InvalidConfiguration) error.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { reason } => {
                write!(f, "invalid configuration: {reason}")
            }
            Self::OutOfRange { coord, size } => {
                write!(
                    f,
                    "coordinate {coord:?} out of range for cube of size {size}"
                )
            }
            Self::ResourceExhausted { requested } => {
                write!(f, "could not allocate a buffer of {requested} cells")
            }
        }
    }
}

impl Error for FieldError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_shorthand_builds_variant() {
        let err = FieldError::invalid("size must be at least 3");
        assert_eq!(
            err,
            FieldError::InvalidConfiguration {
                reason: "size must be at least 3".to_string()
            }
        );
    }

    #[test]
    fn display_messages() {
        let msg = format!("{}", FieldError::invalid("bad"));
        assert!(msg.contains("invalid configuration"));
        assert!(msg.contains("bad"));

        let msg = format!(
            "{}",
            FieldError::OutOfRange {
                coord: [0, 5, 1],
                size: 5
            }
        );
        assert!(msg.contains("[0, 5, 1]"));
        assert!(msg.contains("size 5"));

        let msg = format!("{}", FieldError::ResourceExhausted { requested: 125 });
        assert!(msg.contains("125 cells"));
    }

    #[test]
    fn errors_are_std_errors() {
        let err: Box<dyn Error> = Box::new(FieldError::ResourceExhausted { requested: 1 });
        assert!(err.source().is_none());
    }
}
