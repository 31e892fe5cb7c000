//! Field and collection limits enforced by the message validator
//!
//! These mirror the chat platform's own payload limits so a draft is rejected
//! locally instead of bouncing off the webhook API.
//!
//! Copyright (c) 2026 Courier Team
//! Licensed under the Apache-2.0 license

/// Limits on the top-level message payload
pub mod message {
    /// Maximum characters in message content
    pub const CONTENT_MAX: usize = 2000;
    /// Maximum characters in a webhook username override
    pub const USERNAME_MAX: usize = 80;
    /// Maximum characters in a thread name
    pub const THREAD_NAME_MAX: usize = 100;
    /// Maximum number of attachments
    pub const ATTACHMENT_MAX_COUNT: usize = 10;
    /// Maximum number of embeds
    pub const EMBED_MAX_COUNT: usize = 10;
    /// Maximum number of action rows
    pub const ACTION_ROW_MAX_COUNT: usize = 5;
}

/// Limits on embeds and their sub-objects
pub mod embed {
    /// Maximum characters in an embed title
    pub const TITLE_MAX: usize = 256;
    /// Maximum characters in an embed description
    pub const DESCRIPTION_MAX: usize = 4096;
    /// Maximum characters in footer text
    pub const FOOTER_TEXT_MAX: usize = 2048;
    /// Maximum characters in an author name
    pub const AUTHOR_NAME_MAX: usize = 256;
    /// Maximum characters in a provider name
    pub const PROVIDER_NAME_MAX: usize = 256;
    /// Maximum characters in a field name
    pub const FIELD_NAME_MAX: usize = 256;
    /// Maximum characters in a field value
    pub const FIELD_VALUE_MAX: usize = 1024;
    /// Maximum number of fields per embed
    pub const FIELD_MAX_COUNT: usize = 25;
    /// Largest valid color value (0xFFFFFF)
    pub const COLOR_MAX: u32 = 16_777_215;
}

/// Limits on interactive components
pub mod component {
    /// Maximum components per action row
    pub const ROW_COMPONENT_MAX_COUNT: usize = 5;
    /// Maximum options per select menu
    pub const SELECT_OPTION_MAX_COUNT: usize = 25;
    /// Maximum characters in a select option label
    pub const SELECT_OPTION_LABEL_MAX: usize = 100;
    /// Maximum characters in a select option description
    pub const SELECT_OPTION_DESCRIPTION_MAX: usize = 100;
    /// Maximum characters in a select menu placeholder
    pub const SELECT_PLACEHOLDER_MAX: usize = 150;
}
