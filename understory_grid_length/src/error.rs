// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use alloc::string::String;
use core::fmt;

/// Error returned when a string is not a grid length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseGridLengthError {
    value: String,
}

impl ParseGridLengthError {
    pub(crate) fn new(value: &str) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the rejected input.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseGridLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid grid length value: {:?}", self.value)
    }
}

impl core::error::Error for ParseGridLengthError {}

/// Error returned when a string is not a track list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseTrackListError {
    /// The input held separators only, or nothing at all.
    Empty,
    /// An entry failed to parse.
    Entry {
        /// Position of the entry, counting non-empty entries from zero.
        index: usize,
        /// Why the entry was rejected.
        source: ParseGridLengthError,
    },
}

impl fmt::Display for ParseTrackListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("track list contains no grid lengths"),
            Self::Entry { index, source } => write!(f, "track {index}: {source}"),
        }
    }
}

impl core::error::Error for ParseTrackListError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::Entry { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use core::error::Error;

    use super::*;

    #[test]
    fn messages_quote_the_input() {
        let err = ParseGridLengthError::new("20.5kg");
        assert_eq!(err.value(), "20.5kg");
        assert_eq!(err.to_string(), r#"invalid grid length value: "20.5kg""#);
    }

    #[test]
    fn track_errors_chain_to_the_entry() {
        let err = ParseTrackListError::Entry {
            index: 2,
            source: ParseGridLengthError::new("?"),
        };
        assert_eq!(err.to_string(), r#"track 2: invalid grid length value: "?""#);
        assert!(err.source().is_some());
        assert!(ParseTrackListError::Empty.source().is_none());
    }
}
