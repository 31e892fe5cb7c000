//! Message payload validation and normalization
//!
//! Copyright (c) 2026 Courier Team
//! Licensed under the Apache-2.0 license

use crate::limits;
use crate::model::{
    ActionButton, ActionRow, AllowedMentions, Attachment, Button, ButtonStyle, Component,
    ComponentType, Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedImage, EmbedProvider,
    EmbedThumbnail, Emoji, IdSource, LinkButton, MentionParse, Message, SelectMenu,
    SelectMenuOption, SequentialIdSource, UniqueId,
};
use crate::validation::context::ValidationContext;
use crate::validation::error::{ValidationErrors, Violation};
use crate::validation::rules::{self, UrlRules};
use serde_json::{Map, Value};

/// Validator for chat webhook message payloads.
///
/// Takes a loosely shaped draft (`serde_json::Value`, typically straight from
/// a builder form or a stored draft) and produces either a normalized
/// [`Message`] or the complete list of field-level violations. Defaults are
/// applied and missing entity ids are filled from the injected [`IdSource`]
/// during normalization; the rules themselves never mint ids.
pub struct MessageValidator {
    ids: Box<dyn IdSource>,
    urls: UrlRules,
}

impl MessageValidator {
    /// Create a validator backed by a fresh sequential id source
    pub fn new() -> Self {
        Self::with_id_source(Box::new(SequentialIdSource::new()))
    }

    /// Create a validator with a caller-supplied id source
    pub fn with_id_source(ids: Box<dyn IdSource>) -> Self {
        Self {
            ids,
            urls: UrlRules::new(),
        }
    }

    /// Validate a draft payload.
    ///
    /// Returns the normalized message only when every rule passes; otherwise
    /// returns every violation found, each with a JSONPath locating the
    /// offending field. Malformed shapes (wrong JSON types, non-object root)
    /// are reported the same way and never raise.
    pub fn validate_value(&self, value: &Value) -> Result<Message, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let ctx = ValidationContext::root();

        match self.build_message(value, &ctx, &mut errors) {
            Some(message) => errors.into_result(message),
            None => Err(errors),
        }
    }

    /// Re-run the rule set over an already accepted message.
    ///
    /// A message returned by [`validate_value`](Self::validate_value) passes
    /// this without further violations.
    pub fn validate(&self, message: &Message) -> Result<(), ValidationErrors> {
        let value = serde_json::to_value(message).map_err(|e| {
            ValidationErrors::from(Violation::new("$", format!("not serializable: {}", e)))
        })?;
        self.validate_value(&value).map(|_| ())
    }

    fn build_message(
        &self,
        value: &Value,
        ctx: &ValidationContext,
        errors: &mut ValidationErrors,
    ) -> Option<Message> {
        let obj = object_value(value, ctx, errors)?;

        let content = optional_str(obj, "content", ctx, errors)
            .unwrap_or("")
            .to_string();
        check_max_chars(
            &content,
            limits::message::CONTENT_MAX,
            ctx.child("content"),
            errors,
        );

        let username = optional_str(obj, "username", ctx, errors).map(str::to_string);
        if let Some(name) = &username {
            check_max_chars(
                name,
                limits::message::USERNAME_MAX,
                ctx.child("username"),
                errors,
            );
            if let Some(reason) = rules::username_policy_violation(name) {
                errors.push(Violation::new(ctx.child("username").path, reason));
            }
        }

        let avatar_url = optional_str(obj, "avatar_url", ctx, errors).map(str::to_string);
        if let Some(url) = &avatar_url {
            self.check_image_url(url, ctx.child("avatar_url"), errors);
        }

        let tts = optional_bool(obj, "tts", ctx, errors).unwrap_or(false);

        let attachments = self.build_attachments(obj, ctx, errors);
        let embeds = self.build_embeds(obj, ctx, errors);
        let allowed_mentions = self.build_allowed_mentions(obj, ctx, errors);
        let components = self.build_action_rows(obj, ctx, errors);

        let thread_name = optional_str(obj, "thread_name", ctx, errors).map(str::to_string);
        if let Some(name) = &thread_name {
            check_max_chars(
                name,
                limits::message::THREAD_NAME_MAX,
                ctx.child("thread_name"),
                errors,
            );
        }

        // Attachments do not count toward the presence rule.
        if content.is_empty() && embeds.is_empty() && components.is_empty() {
            errors.push(Violation::new(
                ctx.child("content").path,
                "Content is required when no other fields are set",
            ));
        }

        Some(Message {
            content,
            username,
            avatar_url,
            tts,
            attachments,
            embeds,
            allowed_mentions,
            components,
            thread_name,
        })
    }

    fn build_attachments(
        &self,
        obj: &Map<String, Value>,
        ctx: &ValidationContext,
        errors: &mut ValidationErrors,
    ) -> Vec<Attachment> {
        let Some(items) = optional_array(obj, "attachments", ctx, errors) else {
            return Vec::new();
        };

        let list_ctx = ctx.child("attachments");
        if items.len() > limits::message::ATTACHMENT_MAX_COUNT {
            errors.push(Violation::new(
                list_ctx.path.clone(),
                format!(
                    "must contain at most {} items",
                    limits::message::ATTACHMENT_MAX_COUNT
                ),
            ));
        }

        items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let item_ctx = list_ctx.child_index(index);
                let obj = object_value(item, &item_ctx, errors)?;
                let asset_id = required_str(obj, "asset_id", &item_ctx, errors)?.to_string();
                Some(Attachment { asset_id })
            })
            .collect()
    }

    fn build_embeds(
        &self,
        obj: &Map<String, Value>,
        ctx: &ValidationContext,
        errors: &mut ValidationErrors,
    ) -> Vec<Embed> {
        let Some(items) = optional_array(obj, "embeds", ctx, errors) else {
            return Vec::new();
        };

        let list_ctx = ctx.child("embeds");
        if items.len() > limits::message::EMBED_MAX_COUNT {
            errors.push(Violation::new(
                list_ctx.path.clone(),
                format!(
                    "must contain at most {} items",
                    limits::message::EMBED_MAX_COUNT
                ),
            ));
        }

        items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| self.build_embed(item, list_ctx.child_index(index), errors))
            .collect()
    }

    fn build_embed(
        &self,
        value: &Value,
        ctx: ValidationContext,
        errors: &mut ValidationErrors,
    ) -> Option<Embed> {
        let obj = object_value(value, &ctx, errors)?;
        let id = self.unique_id(obj, &ctx, errors);

        let title = optional_str(obj, "title", &ctx, errors).map(str::to_string);
        if let Some(title) = &title {
            check_max_chars(title, limits::embed::TITLE_MAX, ctx.child("title"), errors);
        }

        let description = optional_str(obj, "description", &ctx, errors).map(str::to_string);
        if let Some(description) = &description {
            check_max_chars(
                description,
                limits::embed::DESCRIPTION_MAX,
                ctx.child("description"),
                errors,
            );
        }

        let url = optional_str(obj, "url", &ctx, errors).map(str::to_string);
        if let Some(url) = &url {
            self.check_url(url, ctx.child("url"), errors);
        }

        let timestamp = optional_str(obj, "timestamp", &ctx, errors).map(str::to_string);

        let color = match obj.get("color") {
            None | Some(Value::Null) => None,
            Some(value) => match value.as_u64() {
                Some(color) if color <= u64::from(limits::embed::COLOR_MAX) => Some(color as u32),
                _ => {
                    errors.push(Violation::new(
                        ctx.child("color").path,
                        format!(
                            "must be an integer between 0 and {}",
                            limits::embed::COLOR_MAX
                        ),
                    ));
                    None
                }
            },
        };

        let footer = optional_object(obj, "footer", &ctx, errors)
            .map(|o| self.build_embed_footer(o, ctx.child("footer"), errors));
        let author = optional_object(obj, "author", &ctx, errors)
            .map(|o| self.build_embed_author(o, ctx.child("author"), errors));
        let provider = optional_object(obj, "provider", &ctx, errors)
            .map(|o| self.build_embed_provider(o, ctx.child("provider"), errors));
        let image = optional_object(obj, "image", &ctx, errors).map(|o| {
            self.build_embed_image(o, ctx.child("image"), errors, |url| EmbedImage { url })
        });
        let thumbnail = optional_object(obj, "thumbnail", &ctx, errors).map(|o| {
            self.build_embed_image(o, ctx.child("thumbnail"), errors, |url| EmbedThumbnail { url })
        });

        let fields = self.build_embed_fields(obj, &ctx, errors);

        // Empty title/description strings count as absent here, matching how
        // the builder treats cleared form inputs.
        let has_visible_field = title.as_deref().is_some_and(|t| !t.is_empty())
            || description.as_deref().is_some_and(|d| !d.is_empty())
            || author.is_some()
            || provider.is_some()
            || footer.is_some()
            || !fields.is_empty()
            || image.is_some()
            || thumbnail.is_some();
        if !has_visible_field {
            errors.push(Violation::new(
                ctx.child("description").path,
                "Description is required when no other fields are set",
            ));
        }

        Some(Embed {
            id,
            title,
            description,
            url,
            timestamp,
            color,
            footer,
            author,
            provider,
            image,
            thumbnail,
            fields,
        })
    }

    fn build_embed_footer(
        &self,
        obj: &Map<String, Value>,
        ctx: ValidationContext,
        errors: &mut ValidationErrors,
    ) -> EmbedFooter {
        let text = optional_str(obj, "text", &ctx, errors).map(str::to_string);
        if let Some(text) = &text {
            check_max_chars(
                text,
                limits::embed::FOOTER_TEXT_MAX,
                ctx.child("text"),
                errors,
            );
        }

        let icon_url = optional_str(obj, "icon_url", &ctx, errors).map(str::to_string);
        if let Some(url) = &icon_url {
            self.check_image_url(url, ctx.child("icon_url"), errors);
        }

        EmbedFooter { text, icon_url }
    }

    fn build_embed_author(
        &self,
        obj: &Map<String, Value>,
        ctx: ValidationContext,
        errors: &mut ValidationErrors,
    ) -> EmbedAuthor {
        let name = match required_str(obj, "name", &ctx, errors) {
            Some(name) => {
                check_chars_between(
                    name,
                    1,
                    limits::embed::AUTHOR_NAME_MAX,
                    ctx.child("name"),
                    errors,
                );
                name.to_string()
            }
            None => String::new(),
        };

        let url = optional_str(obj, "url", &ctx, errors).map(str::to_string);
        if let Some(url) = &url {
            self.check_url(url, ctx.child("url"), errors);
        }

        let icon_url = optional_str(obj, "icon_url", &ctx, errors).map(str::to_string);
        if let Some(url) = &icon_url {
            self.check_image_url(url, ctx.child("icon_url"), errors);
        }

        EmbedAuthor {
            name,
            url,
            icon_url,
        }
    }

    fn build_embed_provider(
        &self,
        obj: &Map<String, Value>,
        ctx: ValidationContext,
        errors: &mut ValidationErrors,
    ) -> EmbedProvider {
        let name = match required_str(obj, "name", &ctx, errors) {
            Some(name) => {
                check_chars_between(
                    name,
                    1,
                    limits::embed::PROVIDER_NAME_MAX,
                    ctx.child("name"),
                    errors,
                );
                name.to_string()
            }
            None => String::new(),
        };

        let url = optional_str(obj, "url", &ctx, errors).map(str::to_string);
        if let Some(url) = &url {
            self.check_url(url, ctx.child("url"), errors);
        }

        EmbedProvider { name, url }
    }

    fn build_embed_image<T>(
        &self,
        obj: &Map<String, Value>,
        ctx: ValidationContext,
        errors: &mut ValidationErrors,
        make: impl FnOnce(Option<String>) -> T,
    ) -> T {
        let url = optional_str(obj, "url", &ctx, errors).map(str::to_string);
        if let Some(url) = &url {
            self.check_url(url, ctx.child("url"), errors);
        }
        make(url)
    }

    fn build_embed_fields(
        &self,
        obj: &Map<String, Value>,
        ctx: &ValidationContext,
        errors: &mut ValidationErrors,
    ) -> Vec<EmbedField> {
        let Some(items) = optional_array(obj, "fields", ctx, errors) else {
            return Vec::new();
        };

        let list_ctx = ctx.child("fields");
        if items.len() > limits::embed::FIELD_MAX_COUNT {
            errors.push(Violation::new(
                list_ctx.path.clone(),
                format!(
                    "must contain at most {} items",
                    limits::embed::FIELD_MAX_COUNT
                ),
            ));
        }

        items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                self.build_embed_field(item, list_ctx.child_index(index), errors)
            })
            .collect()
    }

    fn build_embed_field(
        &self,
        value: &Value,
        ctx: ValidationContext,
        errors: &mut ValidationErrors,
    ) -> Option<EmbedField> {
        let obj = object_value(value, &ctx, errors)?;
        let id = self.unique_id(obj, &ctx, errors);

        let name = match required_str(obj, "name", &ctx, errors) {
            Some(name) => {
                check_chars_between(
                    name,
                    1,
                    limits::embed::FIELD_NAME_MAX,
                    ctx.child("name"),
                    errors,
                );
                name.to_string()
            }
            None => String::new(),
        };

        let field_value = match required_str(obj, "value", &ctx, errors) {
            Some(value) => {
                check_chars_between(
                    value,
                    1,
                    limits::embed::FIELD_VALUE_MAX,
                    ctx.child("value"),
                    errors,
                );
                value.to_string()
            }
            None => String::new(),
        };

        let inline = optional_bool(obj, "inline", &ctx, errors);

        Some(EmbedField {
            id,
            name,
            value: field_value,
            inline,
        })
    }

    fn build_allowed_mentions(
        &self,
        obj: &Map<String, Value>,
        ctx: &ValidationContext,
        errors: &mut ValidationErrors,
    ) -> Option<AllowedMentions> {
        let inner = optional_object(obj, "allowed_mentions", ctx, errors)?;
        let mentions_ctx = ctx.child("allowed_mentions");

        let parse = optional_array(inner, "parse", &mentions_ctx, errors).map(|items| {
            let parse_ctx = mentions_ctx.child("parse");
            items
                .iter()
                .enumerate()
                .filter_map(|(index, item)| match item.as_str() {
                    Some("users") => Some(MentionParse::Users),
                    Some("roles") => Some(MentionParse::Roles),
                    Some("everyone") => Some(MentionParse::Everyone),
                    _ => {
                        errors.push(Violation::new(
                            parse_ctx.child_index(index).path,
                            "must be one of: users, roles, everyone",
                        ));
                        None
                    }
                })
                .collect()
        });

        let roles = self.string_list(inner, "roles", &mentions_ctx, errors);
        let users = self.string_list(inner, "users", &mentions_ctx, errors);
        let replied_user = optional_bool(inner, "replied_user", &mentions_ctx, errors);

        Some(AllowedMentions {
            parse,
            roles,
            users,
            replied_user,
        })
    }

    fn string_list(
        &self,
        obj: &Map<String, Value>,
        key: &str,
        ctx: &ValidationContext,
        errors: &mut ValidationErrors,
    ) -> Option<Vec<String>> {
        let items = optional_array(obj, key, ctx, errors)?;
        let list_ctx = ctx.child(key);
        Some(
            items
                .iter()
                .enumerate()
                .filter_map(|(index, item)| match item.as_str() {
                    Some(value) => Some(value.to_string()),
                    None => {
                        errors.push(Violation::new(
                            list_ctx.child_index(index).path,
                            "must be a string",
                        ));
                        None
                    }
                })
                .collect(),
        )
    }

    fn build_action_rows(
        &self,
        obj: &Map<String, Value>,
        ctx: &ValidationContext,
        errors: &mut ValidationErrors,
    ) -> Vec<ActionRow> {
        let Some(items) = optional_array(obj, "components", ctx, errors) else {
            return Vec::new();
        };

        let list_ctx = ctx.child("components");
        if items.len() > limits::message::ACTION_ROW_MAX_COUNT {
            errors.push(Violation::new(
                list_ctx.path.clone(),
                format!(
                    "must contain at most {} items",
                    limits::message::ACTION_ROW_MAX_COUNT
                ),
            ));
        }

        items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                self.build_action_row(item, list_ctx.child_index(index), errors)
            })
            .collect()
    }

    fn build_action_row(
        &self,
        value: &Value,
        ctx: ValidationContext,
        errors: &mut ValidationErrors,
    ) -> Option<ActionRow> {
        let obj = object_value(value, &ctx, errors)?;
        let id = self.unique_id(obj, &ctx, errors);

        match obj.get("type") {
            None | Some(Value::Null) => {}
            Some(kind) if kind.as_u64() == Some(1) => {}
            Some(_) => {
                errors.push(Violation::new(
                    ctx.child("type").path,
                    "must be an action row (type 1)",
                ));
            }
        }

        let components = match optional_array(obj, "components", &ctx, errors) {
            Some(items) => {
                let list_ctx = ctx.child("components");
                if items.is_empty() || items.len() > limits::component::ROW_COMPONENT_MAX_COUNT {
                    errors.push(Violation::new(
                        list_ctx.path.clone(),
                        format!(
                            "must contain between 1 and {} components",
                            limits::component::ROW_COMPONENT_MAX_COUNT
                        ),
                    ));
                }
                items
                    .iter()
                    .enumerate()
                    .filter_map(|(index, item)| {
                        self.build_component(item, list_ctx.child_index(index), errors)
                    })
                    .collect()
            }
            None => {
                errors.push(Violation::new(
                    ctx.child("components").path,
                    format!(
                        "must contain between 1 and {} components",
                        limits::component::ROW_COMPONENT_MAX_COUNT
                    ),
                ));
                Vec::new()
            }
        };

        Some(ActionRow {
            kind: ComponentType::ActionRow,
            id,
            components,
        })
    }

    fn build_component(
        &self,
        value: &Value,
        ctx: ValidationContext,
        errors: &mut ValidationErrors,
    ) -> Option<Component> {
        let obj = object_value(value, &ctx, errors)?;

        match obj.get("type").and_then(Value::as_u64) {
            Some(2) => self.build_button(obj, ctx, errors).map(Component::Button),
            Some(3) => self
                .build_select_menu(obj, ctx, errors)
                .map(Component::SelectMenu),
            _ => {
                errors.push(Violation::new(
                    ctx.child("type").path,
                    "must be a button (type 2) or a select menu (type 3)",
                ));
                None
            }
        }
    }

    fn build_button(
        &self,
        obj: &Map<String, Value>,
        ctx: ValidationContext,
        errors: &mut ValidationErrors,
    ) -> Option<Button> {
        let id = self.unique_id(obj, &ctx, errors);
        let label = optional_str(obj, "label", &ctx, errors)
            .unwrap_or("")
            .to_string();
        let emoji = match obj.get("emoji") {
            None | Some(Value::Null) => None,
            Some(value) => self.build_emoji(value, ctx.child("emoji"), errors),
        };
        let disabled = optional_bool(obj, "disabled", &ctx, errors);

        if label.is_empty() && emoji.is_none() {
            errors.push(Violation::new(
                ctx.child("label").path,
                "Label is required when no emoji is set",
            ));
        }

        let style = match obj.get("style").and_then(Value::as_u64) {
            Some(1) => ButtonStyle::Primary,
            Some(2) => ButtonStyle::Secondary,
            Some(3) => ButtonStyle::Success,
            Some(4) => ButtonStyle::Danger,
            Some(5) => ButtonStyle::Link,
            _ => {
                errors.push(Violation::new(
                    ctx.child("style").path,
                    "must be a button style between 1 and 5",
                ));
                return None;
            }
        };

        match style {
            ButtonStyle::Link => {
                let url = match obj.get("url") {
                    None | Some(Value::Null) => {
                        errors.push(Violation::new(
                            ctx.child("url").path,
                            "URL is required for link buttons",
                        ));
                        String::new()
                    }
                    Some(Value::String(url)) => {
                        self.check_url(url, ctx.child("url"), errors);
                        url.clone()
                    }
                    Some(_) => {
                        errors.push(Violation::new(ctx.child("url").path, "must be a string"));
                        String::new()
                    }
                };
                Some(Button::Link(LinkButton {
                    kind: ComponentType::Button,
                    id,
                    style,
                    label,
                    emoji,
                    disabled,
                    url,
                }))
            }
            style => {
                let flow_source_id = self.flow_source_id(obj, &ctx, errors);
                Some(Button::Action(ActionButton {
                    kind: ComponentType::Button,
                    id,
                    style,
                    label,
                    emoji,
                    disabled,
                    flow_source_id,
                }))
            }
        }
    }

    fn build_select_menu(
        &self,
        obj: &Map<String, Value>,
        ctx: ValidationContext,
        errors: &mut ValidationErrors,
    ) -> Option<SelectMenu> {
        let id = self.unique_id(obj, &ctx, errors);

        let placeholder = optional_str(obj, "placeholder", &ctx, errors).map(str::to_string);
        if let Some(placeholder) = &placeholder {
            check_max_chars(
                placeholder,
                limits::component::SELECT_PLACEHOLDER_MAX,
                ctx.child("placeholder"),
                errors,
            );
        }

        let disabled = optional_bool(obj, "disabled", &ctx, errors);

        let options = match optional_array(obj, "options", &ctx, errors) {
            Some(items) => {
                let list_ctx = ctx.child("options");
                if items.is_empty() || items.len() > limits::component::SELECT_OPTION_MAX_COUNT {
                    errors.push(Violation::new(
                        list_ctx.path.clone(),
                        format!(
                            "must contain between 1 and {} options",
                            limits::component::SELECT_OPTION_MAX_COUNT
                        ),
                    ));
                }
                items
                    .iter()
                    .enumerate()
                    .filter_map(|(index, item)| {
                        self.build_select_option(item, list_ctx.child_index(index), errors)
                    })
                    .collect()
            }
            None => {
                errors.push(Violation::new(
                    ctx.child("options").path,
                    format!(
                        "must contain between 1 and {} options",
                        limits::component::SELECT_OPTION_MAX_COUNT
                    ),
                ));
                Vec::new()
            }
        };

        let flow_source_id = self.flow_source_id(obj, &ctx, errors);

        Some(SelectMenu {
            kind: ComponentType::SelectMenu,
            id,
            placeholder,
            disabled,
            options,
            flow_source_id,
        })
    }

    fn build_select_option(
        &self,
        value: &Value,
        ctx: ValidationContext,
        errors: &mut ValidationErrors,
    ) -> Option<SelectMenuOption> {
        let obj = object_value(value, &ctx, errors)?;
        let id = self.unique_id(obj, &ctx, errors);

        let label = match required_str(obj, "label", &ctx, errors) {
            Some(label) => {
                check_chars_between(
                    label,
                    1,
                    limits::component::SELECT_OPTION_LABEL_MAX,
                    ctx.child("label"),
                    errors,
                );
                label.to_string()
            }
            None => String::new(),
        };

        let description = optional_str(obj, "description", &ctx, errors).map(str::to_string);
        if let Some(description) = &description {
            check_chars_between(
                description,
                1,
                limits::component::SELECT_OPTION_DESCRIPTION_MAX,
                ctx.child("description"),
                errors,
            );
        }

        let emoji = match obj.get("emoji") {
            None | Some(Value::Null) => None,
            Some(value) => self.build_emoji(value, ctx.child("emoji"), errors),
        };

        Some(SelectMenuOption {
            id,
            label,
            description,
            emoji,
        })
    }

    fn build_emoji(
        &self,
        value: &Value,
        ctx: ValidationContext,
        errors: &mut ValidationErrors,
    ) -> Option<Emoji> {
        let obj = object_value(value, &ctx, errors)?;

        let id = optional_str(obj, "id", &ctx, errors).map(str::to_string);
        let name = optional_str(obj, "name", &ctx, errors)
            .unwrap_or("")
            .to_string();
        let animated = optional_bool(obj, "animated", &ctx, errors).unwrap_or(false);

        if id.as_deref().map_or(true, str::is_empty) && name.is_empty() {
            errors.push(Violation::new(
                ctx.path,
                "Emoji must have either an id or a name",
            ));
        }

        Some(Emoji { id, name, animated })
    }

    /// Read an entity id, assigning a fresh one when the draft has none
    fn unique_id(
        &self,
        obj: &Map<String, Value>,
        ctx: &ValidationContext,
        errors: &mut ValidationErrors,
    ) -> UniqueId {
        match obj.get("id") {
            None | Some(Value::Null) => self.ids.next_id(),
            Some(value) => match value.as_u64() {
                Some(id) => UniqueId::from(id),
                None => {
                    errors.push(Violation::new(
                        ctx.child("id").path,
                        "must be an unsigned integer",
                    ));
                    self.ids.next_id()
                }
            },
        }
    }

    /// Read a flow source reference, defaulting it from the id source
    fn flow_source_id(
        &self,
        obj: &Map<String, Value>,
        ctx: &ValidationContext,
        errors: &mut ValidationErrors,
    ) -> String {
        match optional_str(obj, "flow_source_id", ctx, errors) {
            Some(id) => id.to_string(),
            None => self.ids.next_id().to_string(),
        }
    }

    fn check_url(&self, value: &str, ctx: ValidationContext, errors: &mut ValidationErrors) {
        if !self.urls.is_url(value) {
            errors.push(Violation::new(ctx.path, "Invalid URL"));
        }
    }

    fn check_image_url(&self, value: &str, ctx: ValidationContext, errors: &mut ValidationErrors) {
        if !self.urls.is_image_url(value) {
            errors.push(Violation::new(ctx.path, "Invalid image URL"));
        }
    }
}

impl Default for MessageValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn object_value<'a>(
    value: &'a Value,
    ctx: &ValidationContext,
    errors: &mut ValidationErrors,
) -> Option<&'a Map<String, Value>> {
    match value.as_object() {
        Some(obj) => Some(obj),
        None => {
            errors.push(Violation::new(ctx.path.clone(), "must be a JSON object"));
            None
        }
    }
}

fn optional_str<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    ctx: &ValidationContext,
    errors: &mut ValidationErrors,
) -> Option<&'a str> {
    match obj.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(value)) => Some(value),
        Some(_) => {
            errors.push(Violation::new(ctx.child(key).path, "must be a string"));
            None
        }
    }
}

fn required_str<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    ctx: &ValidationContext,
    errors: &mut ValidationErrors,
) -> Option<&'a str> {
    match obj.get(key) {
        None | Some(Value::Null) => {
            errors.push(Violation::new(ctx.child(key).path, "is required"));
            None
        }
        Some(Value::String(value)) => Some(value),
        Some(_) => {
            errors.push(Violation::new(ctx.child(key).path, "must be a string"));
            None
        }
    }
}

fn optional_bool(
    obj: &Map<String, Value>,
    key: &str,
    ctx: &ValidationContext,
    errors: &mut ValidationErrors,
) -> Option<bool> {
    match obj.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::Bool(value)) => Some(*value),
        Some(_) => {
            errors.push(Violation::new(ctx.child(key).path, "must be a boolean"));
            None
        }
    }
}

fn optional_array<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    ctx: &ValidationContext,
    errors: &mut ValidationErrors,
) -> Option<&'a Vec<Value>> {
    match obj.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(items),
        Some(_) => {
            errors.push(Violation::new(ctx.child(key).path, "must be an array"));
            None
        }
    }
}

fn optional_object<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    ctx: &ValidationContext,
    errors: &mut ValidationErrors,
) -> Option<&'a Map<String, Value>> {
    match obj.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::Object(value)) => Some(value),
        Some(_) => {
            errors.push(Violation::new(ctx.child(key).path, "must be a JSON object"));
            None
        }
    }
}

fn check_max_chars(
    value: &str,
    max: usize,
    ctx: ValidationContext,
    errors: &mut ValidationErrors,
) {
    if rules::char_count(value) > max {
        errors.push(Violation::new(
            ctx.path,
            format!("must be at most {} characters", max),
        ));
    }
}

fn check_chars_between(
    value: &str,
    min: usize,
    max: usize,
    ctx: ValidationContext,
    errors: &mut ValidationErrors,
) {
    let count = rules::char_count(value);
    if count < min || count > max {
        errors.push(Violation::new(
            ctx.path,
            format!("must be between {} and {} characters", min, max),
        ));
    }
}
