//! Search bar rendering.

use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

const PROMPT: &str = "Search: ";
const PLACEHOLDER: &str = "type to search movies";

/// Renders the search bar: a prompt line plus a blank spacer.
#[must_use]
pub fn render(search: &SearchBarInfo, theme: &Theme, width: usize) -> Vec<String> {
    let available = width.saturating_sub(PROMPT.len() + 1);
    let input = if search.query.is_empty() {
        theme.dim(&truncate(PLACEHOLDER, available))
    } else {
        // Trailing block glyph stands in for the cursor.
        format!(
            "{}{}",
            theme.text(&truncate(&search.query, available)),
            theme.accent("\u{2588}")
        )
    };
    vec![format!("{}{input}", theme.accent(PROMPT)), String::new()]
}
