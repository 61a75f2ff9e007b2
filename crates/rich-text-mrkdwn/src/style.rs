use crate::element::Style;

/// Wrap a fragment in mrkdwn style markers.
///
/// Styling is skipped entirely when no style is present or when the fragment
/// starts or ends with a space: `** bold**` is not valid mrkdwn, so such
/// fragments pass through unchanged. Active markers nest in a fixed order,
/// code innermost, then strike, italic, bold.
pub fn apply_style(text: &str, style: Option<&Style>) -> String {
    let Some(style) = style else {
        return text.to_string();
    };
    if text.starts_with(' ') || text.ends_with(' ') {
        return text.to_string();
    }
    let mut out = text.to_string();
    if style.code {
        out = format!("`{out}`");
    }
    if style.strike {
        out = format!("~{out}~");
    }
    if style.italic {
        out = format!("_{out}_");
    }
    if style.bold {
        out = format!("**{out}**");
    }
    out
}
