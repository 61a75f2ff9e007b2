//! Slack rich-text to mrkdwn rendering.
//!
//! Slack does not provide tools out of the box for converting a rich text
//! block to mrkdwn (see slackapi/bolt-js#2087), so this crate walks the
//! composer's document tree and serializes it deterministically. Rendering is
//! pure and total: unrecognized element types degrade to the empty string
//! instead of erroring, so a partially-unsupported document still converts.

pub mod element;
pub mod render;
mod style;

pub use element::{RichTextBlock, RichTextBlockElement, RichTextElement, RichTextSection, Style};
pub use render::{
    quote_mrkdwn, render_block, render_block_element, render_element, render_list, render_section,
};
pub use style::apply_style;
