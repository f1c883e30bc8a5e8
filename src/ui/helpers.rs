//! Shared rendering utilities.
//!
//! Width-aware text shaping used by the view model computation and the
//! components. Widths are measured in characters, which is good enough for
//! the latin-heavy catalog titles this UI displays.

/// Truncates `text` to at most `max_width` characters, appending an ellipsis
/// when anything was cut. Widths below 2 degrade to a hard cut.
#[must_use]
pub fn truncate(text: &str, max_width: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_width {
        return text.to_string();
    }
    if max_width < 2 {
        return text.chars().take(max_width).collect();
    }
    let kept: String = text.chars().take(max_width - 1).collect();
    format!("{kept}\u{2026}")
}

/// Pads `text` with trailing spaces to exactly `width` characters,
/// truncating first when it is too long.
#[must_use]
pub fn pad_to(text: &str, width: usize) -> String {
    let shaped = truncate(text, width);
    let shaped_width = shaped.chars().count();
    format!("{shaped}{}", " ".repeat(width - shaped_width))
}
