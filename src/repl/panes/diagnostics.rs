//! Diagnostics pane rendering

use crate::parser::parse::ParseError;
use crate::repl::panes::{border_style, clamp_scroll};
use crate::repl::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the parse errors of the current line
pub fn render_diagnostics_pane(
    frame: &mut Frame,
    area: Rect,
    errors: Option<&[ParseError]>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let errors = errors.unwrap_or(&[]);

    let block = Block::default()
        .title(format!(" Diagnostics ({}) ", errors.len()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if errors.is_empty() {
        let paragraph = Paragraph::new("(no errors)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.success));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = clamp_scroll(errors.len(), area, scroll_offset);

    let items: Vec<ListItem> = errors
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|error| ListItem::new(error.to_string()).style(Style::default().fg(DEFAULT_THEME.error)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
