//! Slide identifiers.
//!
//! # Format
//! ```text
//! <prefix>-<section>-<slide>
//! ```
//! Indices are 0-based. The prefix is used verbatim, may be empty and may
//! itself contain the separator, so identifiers are read from the right.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Character joining the identifier components.
pub const SEPARATOR: char = '-';

/// Structured form of a slide identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlideId {
    pub prefix: String,
    pub section: usize,
    pub slide: usize,
}

impl SlideId {
    pub fn new(prefix: impl Into<String>, section: usize, slide: usize) -> Self {
        Self {
            prefix: prefix.into(),
            section,
            slide,
        }
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            self.prefix, self.section, self.slide
        )
    }
}

impl FromStr for SlideId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidSlideId {
            value: s.to_string(),
        };

        let mut parts = s.rsplitn(3, SEPARATOR);
        let slide = parts.next().and_then(parse_index).ok_or_else(invalid)?;
        let section = parts.next().and_then(parse_index).ok_or_else(invalid)?;
        let prefix = parts.next().ok_or_else(invalid)?;

        Ok(Self::new(prefix, section, slide))
    }
}

/// Only plain ASCII digits, so that parsing is the exact inverse of `Display`.
fn parse_index(part: &str) -> Option<usize> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
