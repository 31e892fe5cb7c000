//! Field path tracking for validation
//!
//! Copyright (c) 2026 Courier Team
//! Licensed under the Apache-2.0 license

/// Tracks the JSONPath of the value currently being validated.
///
/// Paths are `$`-rooted and grow as validation descends into the payload:
/// `$.embeds[0].fields[3].name`.
#[derive(Debug, Clone)]
pub struct ValidationContext {
    /// Current JSON path
    pub path: String,
}

impl ValidationContext {
    /// Create a context rooted at the top of the payload
    pub fn root() -> Self {
        Self {
            path: "$".to_string(),
        }
    }

    /// Create a child context for a named field
    pub fn child<P: AsRef<str>>(&self, segment: P) -> Self {
        Self {
            path: format!("{}.{}", self.path, segment.as_ref()),
        }
    }

    /// Create a child context for an array index
    pub fn child_index(&self, index: usize) -> Self {
        Self {
            path: format!("{}[{}]", self.path, index),
        }
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_path() {
        let ctx = ValidationContext::root();
        let child = ctx.child("content");
        assert_eq!(child.path, "$.content");

        let grandchild = child.child("nested");
        assert_eq!(grandchild.path, "$.content.nested");
    }

    #[test]
    fn test_child_index_path() {
        let ctx = ValidationContext::root().child("embeds");
        let indexed = ctx.child_index(0);
        assert_eq!(indexed.path, "$.embeds[0]");

        let field = indexed.child("fields").child_index(3).child("name");
        assert_eq!(field.path, "$.embeds[0].fields[3].name");
    }
}
