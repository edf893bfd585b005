// Copyright 2023 the Pointer Events Authors
// SPDX-License-Identifier: Apache-2.0

//! Errors at the pointer event layer.

use std::fmt;
use std::sync::Arc;

/// Pointer event errors.
#[derive(Debug, Clone)]
pub enum Error {
    /// A string did not name a known pointer event type.
    UnknownEventType(String),
    /// Tried to remove a listener that is not registered.
    ListenerNotFound,
    /// Other miscellaneous error.
    Other(Arc<anyhow::Error>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Error::UnknownEventType(s) => {
                write!(f, "\"{s}\" is not a known pointer event type.")
            }
            Error::ListenerNotFound => {
                write!(f, "The listener this operation requires is not registered.")
            }
            Error::Other(s) => write!(f, "{s}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<anyhow::Error> for Error {
    fn from(src: anyhow::Error) -> Error {
        Error::Other(Arc::new(src))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_type() {
        let err = Error::UnknownEventType("pointerwiggle".into());
        assert!(err.to_string().contains("pointerwiggle"));
    }

    #[test]
    fn anyhow_passthrough() {
        let err: Error = anyhow::anyhow!("backend went away").into();
        assert!(matches!(err, Error::Other(_)));
        assert!(err.to_string().contains("backend went away"));
    }
}
