//! Header line rendering.

use crate::ui::helpers::pad_to;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header as a single accent-colored line.
#[must_use]
pub fn render(header: &HeaderInfo, theme: &Theme, width: usize) -> String {
    theme.accent(&pad_to(&header.title, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_contains_title_and_fills_width() {
        let info = HeaderInfo {
            title: " Marquee ".to_string(),
        };

        let line = render(&info, &Theme::default(), 40);

        assert!(line.contains("Marquee"));
    }
}
