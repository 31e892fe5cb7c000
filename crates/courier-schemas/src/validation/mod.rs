//! Validation module for chat webhook message payloads
//!
//! Structural and policy validation for the message composition payload a
//! builder UI produces: text content, rich embed blocks, interactive
//! button/select components, and webhook identity overrides. Rules fall into
//! a few categories:
//!
//! - **Length and range bounds**: per-field character limits and array sizes
//! - **URL shape**: template placeholders or absolute URLs with an accepted
//!   hostname
//! - **Username policy**: reserved and blocked webhook usernames
//! - **Cross-field presence**: content/embeds/components, embed visual
//!   fields, button label/emoji, emoji id/name
//! - **Discriminated shapes**: button style 1-4 vs 5
//!
//! Every rule runs on every call; violations are collected and returned as
//! data, never thrown.
//!
//! Copyright (c) 2026 Courier Team
//! Licensed under the Apache-2.0 license

pub mod context;
pub mod error;
pub mod message;
pub(crate) mod rules;

// Re-export commonly used types
pub use context::ValidationContext;
pub use error::{ValidationErrors, ValidationResult, Violation};
pub use message::MessageValidator;

/// Convenience function to create a message validator with the default
/// sequential id source
///
/// # Examples
///
/// ```rust
/// use courier_schemas::validation::create_message_validator;
/// use serde_json::json;
///
/// let validator = create_message_validator();
/// let draft = json!({
///     "content": "Deploy finished",
///     "username": "Release Bot"
/// });
///
/// assert!(validator.validate_value(&draft).is_ok());
/// ```
pub fn create_message_validator() -> MessageValidator {
    MessageValidator::new()
}
