//! Typed model of a chat webhook message payload
//!
//! These types are the *accepted* form of a draft: defaults applied, ids
//! assigned, and every field named the way the downstream webhook API spells
//! it. A `Message` produced by the validator serializes directly to the wire
//! shape.
//!
//! Copyright (c) 2026 Courier Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier assigned to builder entities (embeds, fields, components).
///
/// Opaque to validation; the builder UI uses it to track entities across
/// edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniqueId(pub u64);

impl UniqueId {
    /// The raw id value
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for UniqueId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Supplier of unique ids for entities that arrive without one.
///
/// Injected into the validator so normalization stays deterministic under
/// test: with a fixed source, the accepted payload is a pure function of the
/// draft.
pub trait IdSource: Send + Sync {
    /// Produce the next unique id
    fn next_id(&self) -> UniqueId;
}

/// Monotonic counter-backed id source. The default for validators and tests.
#[derive(Debug)]
pub struct SequentialIdSource {
    next: AtomicU64,
}

impl SequentialIdSource {
    /// Create a source that starts counting at 1
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a source that starts counting at `first`
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&self) -> UniqueId {
        UniqueId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

/// Wire discriminator for interactive component objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ComponentType {
    /// A horizontal row of components
    ActionRow = 1,
    /// A clickable button
    Button = 2,
    /// A dropdown select menu
    SelectMenu = 3,
}

impl From<ComponentType> for u8 {
    fn from(value: ComponentType) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for ComponentType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ComponentType::ActionRow),
            2 => Ok(ComponentType::Button),
            3 => Ok(ComponentType::SelectMenu),
            other => Err(format!("unknown component type {}", other)),
        }
    }
}

/// Button style tag. Styles 1-4 dispatch to workflow logic; style 5 opens a
/// URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ButtonStyle {
    Primary = 1,
    Secondary = 2,
    Success = 3,
    Danger = 4,
    Link = 5,
}

impl From<ButtonStyle> for u8 {
    fn from(value: ButtonStyle) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for ButtonStyle {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ButtonStyle::Primary),
            2 => Ok(ButtonStyle::Secondary),
            3 => Ok(ButtonStyle::Success),
            4 => Ok(ButtonStyle::Danger),
            5 => Ok(ButtonStyle::Link),
            other => Err(format!("unknown button style {}", other)),
        }
    }
}

/// An accepted, normalized message payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Plain text content, empty when the message is embeds/components only
    #[serde(default)]
    pub content: String,
    /// Webhook username override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Webhook avatar override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Text-to-speech flag
    #[serde(default)]
    pub tts: bool,
    /// Uploaded assets referenced by the message
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    /// Rich content blocks
    #[serde(default)]
    pub embeds: Vec<Embed>,
    /// Mention control
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,
    /// Interactive component rows
    #[serde(default)]
    pub components: Vec<ActionRow>,
    /// Name of the thread to create when posting to a forum channel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_name: Option<String>,
}

/// Reference to a previously uploaded asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub asset_id: String,
}

/// Which mention classes the platform may resolve in this message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentionParse {
    Users,
    Roles,
    Everyone,
}

/// Mention control object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedMentions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse: Option<Vec<MentionParse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replied_user: Option<bool>,
}

/// A structured rich-content block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    pub id: UniqueId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<EmbedProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedThumbnail>,
    #[serde(default)]
    pub fields: Vec<EmbedField>,
}

/// Embed footer line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedFooter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Embed author line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedAuthor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Embed provider line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedProvider {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Large embed image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Small embed thumbnail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedThumbnail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A name/value pair inside an embed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    pub id: UniqueId,
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,
}

/// Custom or unicode emoji attached to a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emoji {
    /// Platform id of a custom emoji
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Emoji name, or the literal character for unicode emoji
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub animated: bool,
}

/// A horizontal row of interactive components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRow {
    #[serde(rename = "type")]
    pub kind: ComponentType,
    pub id: UniqueId,
    pub components: Vec<Component>,
}

/// An interactive component inside an action row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Component {
    Button(Button),
    SelectMenu(SelectMenu),
}

/// A button, shaped by its style tag.
///
/// Styles 1-4 reference workflow logic through a flow source id; style 5
/// carries a URL instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Button {
    Action(ActionButton),
    Link(LinkButton),
}

impl Button {
    /// The entity id, regardless of shape
    pub fn id(&self) -> UniqueId {
        match self {
            Button::Action(button) => button.id,
            Button::Link(button) => button.id,
        }
    }

    /// The style tag, regardless of shape
    pub fn style(&self) -> ButtonStyle {
        match self {
            Button::Action(button) => button.style,
            Button::Link(button) => button.style,
        }
    }

    /// The visible label, regardless of shape
    pub fn label(&self) -> &str {
        match self {
            Button::Action(button) => &button.label,
            Button::Link(button) => &button.label,
        }
    }
}

/// A button with style 1-4, wired to workflow logic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionButton {
    #[serde(rename = "type")]
    pub kind: ComponentType,
    pub id: UniqueId,
    pub style: ButtonStyle,
    #[serde(default)]
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<Emoji>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Opaque reference to the workflow triggered by this button
    pub flow_source_id: String,
}

/// A style-5 button that opens a URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkButton {
    #[serde(rename = "type")]
    pub kind: ComponentType,
    pub id: UniqueId,
    pub style: ButtonStyle,
    #[serde(default)]
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<Emoji>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    pub url: String,
}

/// A dropdown select menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectMenu {
    #[serde(rename = "type")]
    pub kind: ComponentType,
    pub id: UniqueId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    pub options: Vec<SelectMenuOption>,
    /// Opaque reference to the workflow triggered by a selection
    pub flow_source_id: String,
}

/// One choice inside a select menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectMenuOption {
    pub id: UniqueId,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<Emoji>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sequential_id_source_is_monotonic() {
        let ids = SequentialIdSource::new();
        assert_eq!(ids.next_id(), UniqueId(1));
        assert_eq!(ids.next_id(), UniqueId(2));
        assert_eq!(ids.next_id(), UniqueId(3));
    }

    #[test]
    fn test_component_type_wire_values() {
        assert_eq!(
            serde_json::to_value(ComponentType::Button).unwrap(),
            json!(2)
        );
        let parsed: ComponentType = serde_json::from_value(json!(3)).unwrap();
        assert_eq!(parsed, ComponentType::SelectMenu);
        assert!(serde_json::from_value::<ComponentType>(json!(9)).is_err());
    }

    #[test]
    fn test_button_style_wire_values() {
        assert_eq!(serde_json::to_value(ButtonStyle::Link).unwrap(), json!(5));
        let parsed: ButtonStyle = serde_json::from_value(json!(4)).unwrap();
        assert_eq!(parsed, ButtonStyle::Danger);
        assert!(serde_json::from_value::<ButtonStyle>(json!(0)).is_err());
    }

    #[test]
    fn test_button_serializes_with_wire_tags() {
        let button = Button::Link(LinkButton {
            kind: ComponentType::Button,
            id: UniqueId(7),
            style: ButtonStyle::Link,
            label: "Docs".to_string(),
            emoji: None,
            disabled: None,
            url: "https://example.com/docs".to_string(),
        });
        let value = serde_json::to_value(&button).unwrap();
        assert_eq!(value["type"], json!(2));
        assert_eq!(value["style"], json!(5));
        assert_eq!(value["url"], json!("https://example.com/docs"));
    }

    #[test]
    fn test_component_round_trip() {
        let row = ActionRow {
            kind: ComponentType::ActionRow,
            id: UniqueId(1),
            components: vec![Component::Button(Button::Action(ActionButton {
                kind: ComponentType::Button,
                id: UniqueId(2),
                style: ButtonStyle::Primary,
                label: "Go".to_string(),
                emoji: None,
                disabled: None,
                flow_source_id: "3".to_string(),
            }))],
        };
        let value = serde_json::to_value(&row).unwrap();
        let back: ActionRow = serde_json::from_value(value).unwrap();
        assert_eq!(back, row);
    }
}
