use serde::{Deserialize, Serialize};

/// Style flags carried by most inline elements. All four are independent and
/// combinable; a missing flag means unstyled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub bold: bool,
    pub italic: bool,
    pub strike: bool,
    pub code: bool,
}

/// A rich text document: the ordered top-level blocks produced by the Slack
/// message composer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextBlock {
    #[serde(default)]
    pub elements: Vec<RichTextBlockElement>,
}

/// A section: an ordered run of inline elements.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextSection {
    #[serde(default)]
    pub elements: Vec<RichTextElement>,
}

/// Block-level structural units of a document.
///
/// The tag set is closed; anything else deserializes to `Unknown`, which
/// renders as the empty string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextBlockElement {
    RichTextSection {
        #[serde(default)]
        elements: Vec<RichTextElement>,
    },
    RichTextList {
        #[serde(default)]
        elements: Vec<RichTextSection>,
        #[serde(default)]
        indent: u32,
    },
    RichTextQuote {
        #[serde(default)]
        elements: Vec<RichTextElement>,
    },
    RichTextPreformatted {
        #[serde(default)]
        elements: Vec<RichTextElement>,
    },
    #[serde(other)]
    Unknown,
}

/// Inline content units. Field names follow the composer's wire format.
///
/// Every variant except `Emoji` carries an optional [`Style`]. Unrecognized
/// types deserialize to `Unknown` and render as the empty string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextElement {
    Text {
        text: String,
        #[serde(default)]
        style: Option<Style>,
    },
    Link {
        url: String,
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        style: Option<Style>,
    },
    Emoji {
        name: String,
    },
    User {
        user_id: String,
        #[serde(default)]
        style: Option<Style>,
    },
    Channel {
        channel_id: String,
        #[serde(default)]
        style: Option<Style>,
    },
    Usergroup {
        usergroup_id: String,
        #[serde(default)]
        style: Option<Style>,
    },
    Broadcast {
        range: String,
        #[serde(default)]
        style: Option<Style>,
    },
    Date {
        timestamp: i64,
        format: String,
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        fallback: Option<String>,
        #[serde(default)]
        style: Option<Style>,
    },
    Color {
        value: String,
        #[serde(default)]
        style: Option<Style>,
    },
    Team {
        team_id: String,
        #[serde(default)]
        style: Option<Style>,
    },
    #[serde(other)]
    Unknown,
}
