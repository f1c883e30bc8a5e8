//! Footer line rendering.

use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer keybinding hints as a single dim line.
#[must_use]
pub fn render(footer: &FooterInfo, theme: &Theme, width: usize) -> String {
    theme.dim(&truncate(&footer.keybindings, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_contains_the_hints() {
        let info = FooterInfo {
            keybindings: "Esc: clear".to_string(),
        };

        assert!(render(&info, &Theme::default(), 40).contains("Esc: clear"));
    }
}
