//! Outbound reply: text plus optional photo, keyboard markup, and edit target.

/// How the transport should interpret `Reply::text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFormat {
    #[default]
    Plain,
    Html,
}

/// A button on an inline keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineButton {
    /// Pressing sends the action id back as a structured action.
    Callback { label: String, action: String },
    /// Pressing opens the URL.
    Url { label: String, url: String },
}

impl InlineButton {
    pub fn callback(label: impl Into<String>, action: impl Into<String>) -> Self {
        InlineButton::Callback {
            label: label.into(),
            action: action.into(),
        }
    }

    pub fn url(label: impl Into<String>, url: impl Into<String>) -> Self {
        InlineButton::Url {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Structured content attached to a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    /// Persistent reply keyboard; pressing a button sends its label as text.
    Keyboard(Vec<Vec<String>>),
    /// Inline keyboard attached to the message.
    Inline(Vec<Vec<InlineButton>>),
}

/// What a handler wants sent back to the chat.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reply {
    pub text: String,
    pub format: TextFormat,
    /// When set the reply is sent as a photo and `text` becomes its caption.
    pub photo_url: Option<String>,
    pub markup: Option<Markup>,
    /// When set the transport edits this message instead of sending a new one.
    pub edit_message_id: Option<String>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn html(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Html,
            ..Self::default()
        }
    }

    pub fn photo(url: impl Into<String>) -> Self {
        Self {
            photo_url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn with_markup(mut self, markup: Markup) -> Self {
        self.markup = Some(markup);
        self
    }

    pub fn editing(mut self, message_id: impl Into<String>) -> Self {
        self.edit_message_id = Some(message_id.into());
        self
    }
}
