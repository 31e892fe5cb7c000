//! Courier Schemas - validation for chat webhook message payloads
//!
//! This crate validates and normalizes the message composition payload
//! produced by a message-builder UI before it is submitted to the chat
//! platform's webhook API. It mirrors the platform's own payload limits so a
//! bad draft is rejected locally, with a violation per field, instead of
//! bouncing off the API.
//!
//! ## Features
//!
//! - **Field-level violations**: every failure carries a JSONPath
//!   (`$.embeds[0].title`) a UI can map back onto its form
//! - **Full rule evaluation**: no fail-fast; the caller always sees the
//!   complete violation set
//! - **Normalization**: defaults applied (empty content, empty collections,
//!   `tts = false`) and missing entity ids filled from an injected id source
//! - **Typed output**: an accepted draft becomes a [`model::Message`] that
//!   serializes directly to the wire shape
//!
//! ## Quick Start
//!
//! ```rust
//! use courier_schemas::create_message_validator;
//! use serde_json::json;
//!
//! let validator = create_message_validator();
//!
//! let draft = json!({
//!     "content": "Release 1.4 is live!",
//!     "username": "Release Bot",
//!     "embeds": [{
//!         "title": "Changelog",
//!         "url": "https://example.com/changelog"
//!     }]
//! });
//!
//! let message = validator.validate_value(&draft).expect("draft is valid");
//! assert_eq!(message.content, "Release 1.4 is live!");
//! assert!(!message.tts);
//!
//! let bad = json!({ "username": "discord staff" });
//! let errors = validator.validate_value(&bad).unwrap_err();
//! assert!(errors.iter().any(|v| v.path == "$.username"));
//! ```
//!
//! ## Rules
//!
//! - Content, embeds, and components cannot all be empty
//! - An embed needs at least one visually meaningful field
//! - Buttons need a label or an emoji; link buttons (style 5) need a URL
//! - Select menus carry 1-25 options; action rows 1-5 components
//! - URL fields accept `{{variable}}` placeholders or absolute URLs whose
//!   hostname is `localhost` or ends in a dot suffix of two or more letters
//! - Webhook usernames may not contain `clyde` or `discord`, nor equal
//!   `everyone` or `here`
//!
//! Copyright (c) 2026 Courier Team
//! Licensed under the Apache-2.0 license

pub mod limits;
pub mod model;
pub mod validation;

// Re-export commonly used types for convenience
pub use model::{
    ActionButton, ActionRow, AllowedMentions, Attachment, Button, ButtonStyle, Component,
    ComponentType, Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedImage, EmbedProvider,
    EmbedThumbnail, Emoji, IdSource, LinkButton, MentionParse, Message, SelectMenu,
    SelectMenuOption, SequentialIdSource, UniqueId,
};
pub use validation::{
    create_message_validator, MessageValidator, ValidationContext, ValidationErrors,
    ValidationResult, Violation,
};
