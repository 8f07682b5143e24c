//! Prompt line rendering

use crate::repl::constants::PROMPT;
use crate::repl::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the line being edited and place the cursor after it
pub fn render_input_line(frame: &mut Frame, area: Rect, input: &str, is_recalled: bool) {
    let title = if is_recalled { " Input (history) " } else { " Input " };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.primary));

    let line = Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(DEFAULT_THEME.secondary)),
        Span::styled(input, Style::default().fg(DEFAULT_THEME.fg)),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);

    let x = area.x.saturating_add(1).saturating_add(cursor_offset(input));
    let max_x = area.right().saturating_sub(2);
    frame.set_cursor_position(Position::new(x.min(max_x), area.y + 1));
}

/// Columns taken by the prompt and `input`, saturating at `u16::MAX`
fn cursor_offset(input: &str) -> u16 {
    u16::try_from(PROMPT.len() + input.chars().count()).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_offset() {
        assert_eq!(cursor_offset(""), PROMPT.len() as u16);
        assert_eq!(cursor_offset("let x"), PROMPT.len() as u16 + 5);
        assert_eq!(cursor_offset(&"a".repeat(70_000)), u16::MAX);
    }
}
