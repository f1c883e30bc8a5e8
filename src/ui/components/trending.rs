//! Trending panel rendering.

use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TrendingItem;

/// Renders the trending panel: a title line plus one line per entry.
///
/// Returns no lines when there are no entries, so the panel disappears
/// entirely instead of showing an empty shell.
#[must_use]
pub fn render(items: &[TrendingItem], theme: &Theme, width: usize) -> Vec<String> {
    if items.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(theme.accent("Trending Searches"));
    for item in items {
        let term = truncate(&item.term, width.saturating_sub(14).max(8));
        lines.push(format!(
            "  {} {}  {}",
            theme.accent(&format!("{}.", item.rank)),
            theme.text(&term),
            theme.dim(&format!("({})", item.count)),
        ));
    }
    lines
}
