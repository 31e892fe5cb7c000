//! Violation types for message payload validation
//!
//! Copyright (c) 2026 Courier Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single field-level violation.
///
/// `path` is a JSONPath-style locator (`$.embeds[0].title`) that callers can
/// map back onto form fields; `message` is human-readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// JSONPath of the offending field
    pub path: String,
    /// Human-readable reason
    pub message: String,
}

impl Violation {
    /// Create a new violation
    pub fn new<P, M>(path: P, message: M) -> Self
    where
        P: Into<String>,
        M: Into<String>,
    {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// The full set of violations collected while validating one payload.
///
/// Validation never fails fast: every rule runs and every violation is
/// reported, so a caller can surface all of them at once.
#[derive(Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    /// Violations in document order
    pub violations: Vec<Violation>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "payload validation failed:")?;
        for violation in &self.violations {
            write!(f, "\n  - {}", violation)?;
        }
        Ok(())
    }
}

impl ValidationErrors {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// Add a violation to the collection
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Check if there are any violations
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Get the number of violations
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Iterate over the collected violations
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter()
    }

    /// Convert to a result - Ok with the accepted value if no violations exist
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl Default for ValidationErrors {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Violation> for ValidationErrors {
    fn from(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }
}

impl From<Vec<Violation>> for ValidationErrors {
    fn from(violations: Vec<Violation>) -> Self {
        Self { violations }
    }
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationErrors>;
