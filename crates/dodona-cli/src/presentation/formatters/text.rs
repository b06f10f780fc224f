use owo_colors::{OwoColorize, Style};

pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Apply `style` only when color output is enabled.
pub fn paint(text: &str, style: Style, enable_color: bool) -> String {
    if enable_color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Pad to `width` display columns. `{:<width$}` counts chars, which is the
/// same thing for the Greek and Latin text used here.
pub fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}
