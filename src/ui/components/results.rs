//! Results area rendering: movie rows, loading, and error states.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, MovieItem};

/// Renders the results area: a title line plus the body for the current
/// query phase.
#[must_use]
pub fn render(body: &BodyView, theme: &Theme) -> Vec<String> {
    let mut lines = vec![theme.accent("All Movies")];
    match body {
        BodyView::Loading => lines.push(theme.dim("  Loading\u{2026}")),
        BodyView::Error(message) => lines.push(theme.error(&format!("  {message}"))),
        BodyView::Results(items) => {
            if items.is_empty() {
                lines.push(theme.dim("  No movies found"));
            } else {
                for item in items {
                    lines.push(render_row(item, theme));
                }
            }
        }
    }
    lines
}

fn render_row(item: &MovieItem, theme: &Theme) -> String {
    let marker = if item.is_selected { "\u{25b8} " } else { "  " };
    let tail = format!("{}  \u{2605} {}  {}", item.year, item.rating, item.language);
    if item.is_selected {
        format!(
            "{}{}  {}",
            theme.selection(marker),
            theme.selection(&item.title),
            theme.dim(&tail),
        )
    } else {
        format!("{marker}{}  {}", theme.text(&item.title), theme.dim(&tail))
    }
}
