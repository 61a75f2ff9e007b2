//! Depth-first serialization of the document tree.
//!
//! Conversion follows the Slack advanced-formatting reference
//! (<https://api.slack.com/reference/surfaces/formatting#advanced>).

use crate::element::{RichTextBlock, RichTextBlockElement, RichTextElement, RichTextSection};
use crate::style::apply_style;

const LIST_INDENT_UNIT: &str = "    ";

/// Render one inline element to its mrkdwn fragment.
///
/// `color` and `team` have no native mrkdwn syntax and render as their bare
/// value; emoji never take styling. Unrecognized types render as the empty
/// string rather than erroring.
pub fn render_element(element: &RichTextElement) -> String {
    match element {
        RichTextElement::Broadcast { range, style } => {
            apply_style(&format!("<!{range}>"), style.as_ref())
        }
        RichTextElement::Channel { channel_id, style } => {
            apply_style(&format!("<#{channel_id}>"), style.as_ref())
        }
        RichTextElement::Color { value, style } => apply_style(value, style.as_ref()),
        RichTextElement::Date {
            timestamp,
            format,
            url,
            fallback,
            style,
        } => {
            let mut date_text = format!("<!date^{timestamp}^{format}");
            if let Some(url) = url {
                date_text.push('^');
                date_text.push_str(url);
            }
            if let Some(fallback) = fallback {
                date_text.push('|');
                date_text.push_str(fallback);
            }
            date_text.push('>');
            apply_style(&date_text, style.as_ref())
        }
        RichTextElement::Emoji { name } => format!(":{name}:"),
        RichTextElement::Link { url, text, style } => {
            let formatted = match text {
                Some(text) => format!("<{url}|{text}>"),
                None => url.clone(),
            };
            apply_style(&formatted, style.as_ref())
        }
        RichTextElement::Team { team_id, style } => apply_style(team_id, style.as_ref()),
        RichTextElement::Text { text, style } => apply_style(text, style.as_ref()),
        RichTextElement::User { user_id, style } => {
            apply_style(&format!("<@{user_id}>"), style.as_ref())
        }
        RichTextElement::Usergroup {
            usergroup_id,
            style,
        } => apply_style(&format!("<!subteam^{usergroup_id}>"), style.as_ref()),
        RichTextElement::Unknown => String::new(),
    }
}

/// Render a section: its inline fragments concatenated with no separator.
pub fn render_section(section: &RichTextSection) -> String {
    render_elements(&section.elements)
}

/// Render a list: one bullet line per section, indented four spaces per
/// level, every line newline-terminated.
pub fn render_list(sections: &[RichTextSection], indent: u32) -> String {
    let pad = LIST_INDENT_UNIT.repeat(indent as usize);
    let mut mrkdwn = String::new();
    for section in sections {
        mrkdwn.push_str(&pad);
        mrkdwn.push_str(" \u{2022} ");
        mrkdwn.push_str(&render_section(section));
        mrkdwn.push('\n');
    }
    mrkdwn
}

/// Prefix every line of `text` with `"> "`, the first included.
pub fn quote_mrkdwn(text: &str) -> String {
    format!("> {}", text.replace('\n', "\n> "))
}

/// Render one block-level element. Unknown block types render as the empty
/// string.
pub fn render_block_element(element: &RichTextBlockElement) -> String {
    match element {
        RichTextBlockElement::RichTextSection { elements } => render_elements(elements),
        RichTextBlockElement::RichTextList { elements, indent } => render_list(elements, *indent),
        RichTextBlockElement::RichTextPreformatted { elements } => {
            // Content passes through unescaped.
            format!("```{}```", render_elements(elements))
        }
        RichTextBlockElement::RichTextQuote { elements } => quote_mrkdwn(&render_elements(elements)),
        RichTextBlockElement::Unknown => String::new(),
    }
}

/// Render a whole document: its blocks concatenated in order, with no
/// separators beyond what each block renderer appends.
pub fn render_block(block: &RichTextBlock) -> String {
    block.elements.iter().map(render_block_element).collect()
}

fn render_elements(elements: &[RichTextElement]) -> String {
    elements.iter().map(render_element).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Style;

    fn text(s: &str) -> RichTextElement {
        RichTextElement::Text {
            text: s.to_string(),
            style: None,
        }
    }

    fn bold() -> Option<Style> {
        Some(Style {
            bold: true,
            ..Style::default()
        })
    }

    #[test]
    fn broadcast_renders_range() {
        let el = RichTextElement::Broadcast {
            range: "here".into(),
            style: None,
        };
        assert_eq!(render_element(&el), "<!here>");
    }

    #[test]
    fn channel_mention() {
        let el = RichTextElement::Channel {
            channel_id: "C024BE7LR".into(),
            style: None,
        };
        assert_eq!(render_element(&el), "<#C024BE7LR>");
    }

    #[test]
    fn user_mention() {
        let el = RichTextElement::User {
            user_id: "U123".into(),
            style: bold(),
        };
        assert_eq!(render_element(&el), "**<@U123>**");
    }

    #[test]
    fn usergroup_mention() {
        let el = RichTextElement::Usergroup {
            usergroup_id: "SAZ94GDB8".into(),
            style: None,
        };
        assert_eq!(render_element(&el), "<!subteam^SAZ94GDB8>");
    }

    #[test]
    fn color_renders_bare_value() {
        let el = RichTextElement::Color {
            value: "#FF0000".into(),
            style: None,
        };
        assert_eq!(render_element(&el), "#FF0000");
    }

    #[test]
    fn team_renders_bare_id() {
        let el = RichTextElement::Team {
            team_id: "T123".into(),
            style: bold(),
        };
        assert_eq!(render_element(&el), "**T123**");
    }

    #[test]
    fn emoji_ignores_style() {
        // Emoji carries no style field at all; styling never applies.
        let el = RichTextElement::Emoji {
            name: "smile".into(),
        };
        assert_eq!(render_element(&el), ":smile:");
    }

    #[test]
    fn link_without_display_text() {
        let el = RichTextElement::Link {
            url: "http://x".into(),
            text: None,
            style: None,
        };
        assert_eq!(render_element(&el), "http://x");
    }

    #[test]
    fn link_with_display_text() {
        let el = RichTextElement::Link {
            url: "http://x".into(),
            text: Some("X".into()),
            style: None,
        };
        assert_eq!(render_element(&el), "<http://x|X>");
    }

    #[test]
    fn date_segments_are_independent() {
        let base = RichTextElement::Date {
            timestamp: 1_392_734_382,
            format: "{date_short}".into(),
            url: None,
            fallback: None,
            style: None,
        };
        assert_eq!(render_element(&base), "<!date^1392734382^{date_short}>");

        let with_url = RichTextElement::Date {
            timestamp: 1_392_734_382,
            format: "{date_short}".into(),
            url: Some("https://example.com".into()),
            fallback: None,
            style: None,
        };
        assert_eq!(
            render_element(&with_url),
            "<!date^1392734382^{date_short}^https://example.com>"
        );

        let with_fallback = RichTextElement::Date {
            timestamp: 1_392_734_382,
            format: "{date_short}".into(),
            url: None,
            fallback: Some("Feb 18".into()),
            style: None,
        };
        assert_eq!(
            render_element(&with_fallback),
            "<!date^1392734382^{date_short}|Feb 18>"
        );

        let with_both = RichTextElement::Date {
            timestamp: 1_392_734_382,
            format: "{date_short}".into(),
            url: Some("https://example.com".into()),
            fallback: Some("Feb 18".into()),
            style: None,
        };
        assert_eq!(
            render_element(&with_both),
            "<!date^1392734382^{date_short}^https://example.com|Feb 18>"
        );
    }

    #[test]
    fn unknown_element_renders_empty() {
        assert_eq!(render_element(&RichTextElement::Unknown), "");
    }

    #[test]
    fn section_concatenates_without_separator() {
        let section = RichTextSection {
            elements: vec![text("a"), text("b")],
        };
        assert_eq!(render_section(&section), "ab");
    }

    #[test]
    fn quote_prefixes_every_line() {
        let quoted = RichTextBlockElement::RichTextQuote {
            elements: vec![text("a\n"), text("b")],
        };
        assert_eq!(render_block_element(&quoted), "> a\n> b");
    }

    #[test]
    fn preformatted_wraps_in_fences() {
        let pre = RichTextBlockElement::RichTextPreformatted {
            elements: vec![text("let x = 1;")],
        };
        assert_eq!(render_block_element(&pre), "```let x = 1;```");
    }

    #[test]
    fn preformatted_passes_backticks_through() {
        let pre = RichTextBlockElement::RichTextPreformatted {
            elements: vec![text("a`b")],
        };
        assert_eq!(render_block_element(&pre), "```a`b```");
    }

    #[test]
    fn list_indents_four_spaces_per_level() {
        let sections = vec![
            RichTextSection {
                elements: vec![text("a")],
            },
            RichTextSection {
                elements: vec![text("b")],
            },
        ];
        assert_eq!(render_list(&sections, 1), "     \u{2022} a\n     \u{2022} b\n");
        assert_eq!(render_list(&sections, 0), " \u{2022} a\n \u{2022} b\n");
    }

    #[test]
    fn unknown_block_renders_empty() {
        assert_eq!(render_block_element(&RichTextBlockElement::Unknown), "");
    }

    #[test]
    fn document_concatenates_blocks_in_order() {
        let block = RichTextBlock {
            elements: vec![
                RichTextBlockElement::RichTextSection {
                    elements: vec![
                        text("Hello, "),
                        RichTextElement::Text {
                            text: "World!".into(),
                            style: bold(),
                        },
                    ],
                },
                RichTextBlockElement::Unknown,
                RichTextBlockElement::RichTextQuote {
                    elements: vec![text("bye")],
                },
            ],
        };
        assert_eq!(render_block(&block), "Hello, **World!**> bye");
    }
}
