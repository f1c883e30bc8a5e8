//! Frame composition and terminal output.
//!
//! Assembles the component lines into a full frame and writes it through
//! crossterm. Composition is split from output so tests can inspect frames as
//! plain strings.

use std::io::Write;

use crossterm::{cursor, queue, terminal};

use crate::domain::Result;
use crate::ui::components::{footer, header, results, search, trending};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UiViewModel;

/// Builds the display lines for one frame, top to bottom.
///
/// The footer is pinned to the bottom row; everything above renders in
/// document order and is clipped to the terminal height.
#[must_use]
pub fn compose_frame(vm: &UiViewModel, theme: &Theme, rows: usize, cols: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(rows);
    lines.push(header::render(&vm.header, theme, cols));
    lines.extend(search::render(&vm.search_bar, theme, cols));
    lines.extend(trending::render(&vm.trending, theme, cols));
    lines.extend(results::render(&vm.body, theme));

    if rows == 0 {
        return Vec::new();
    }
    lines.truncate(rows.saturating_sub(1));
    while lines.len() < rows.saturating_sub(1) {
        lines.push(String::new());
    }
    lines.push(footer::render(&vm.footer, theme, cols));
    lines
}

/// Writes one frame to the terminal.
///
/// # Errors
///
/// Returns an error if writing to the terminal fails.
pub fn draw(
    out: &mut impl Write,
    vm: &UiViewModel,
    theme: &Theme,
    rows: usize,
    cols: usize,
) -> Result<()> {
    let lines = compose_frame(vm, theme, rows, cols);

    queue!(
        out,
        cursor::Hide,
        cursor::MoveTo(0, 0),
        terminal::Clear(terminal::ClearType::All)
    )?;
    for (row, line) in lines.iter().enumerate() {
        queue!(out, cursor::MoveTo(0, row as u16))?;
        out.write_all(line.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}
