//! Explorer pane rendering modules
//!
//! # Pane Modules
//!
//! - [`tokens`]: Token stream of the current line, with a kind histogram
//! - [`tree`]: AST outline and parenthesized reconstruction
//! - [`diagnostics`]: Parse errors for the current line
//! - [`input`]: The prompt line being edited
//! - [`status`]: Status bar with keybindings
//!
//! Each pane module exports a `render_*` function. Panes that scroll take
//! their offset by `&mut` and clamp it to the content they draw.

pub mod diagnostics;
pub mod input;
pub mod status;
pub mod tokens;
pub mod tree;

pub use diagnostics::render_diagnostics_pane;
pub use input::render_input_line;
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;
pub use tree::render_tree_pane;

use crate::repl::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
};

/// Border style for a pane depending on focus
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp `scroll_offset` so the last page stays full, and return how many
/// rows fit inside `area` (borders excluded)
pub(crate) fn clamp_scroll(total_items: usize, area: Rect, scroll_offset: &mut usize) -> usize {
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    visible_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        let area = Rect::new(0, 0, 20, 12); // 10 rows inside the borders

        let mut scroll = 50;
        assert_eq!(clamp_scroll(25, area, &mut scroll), 10);
        assert_eq!(scroll, 15);

        let mut scroll = 3;
        clamp_scroll(5, area, &mut scroll);
        assert_eq!(scroll, 0);
    }
}
