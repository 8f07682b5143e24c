//! Token pane rendering
//!
//! Lists every token of the current line (kind and literal, `EOF` included)
//! and shows how often each kind occurs in the pane title.

use crate::parser::token::{Token, TokenKind};
use crate::repl::panes::{border_style, clamp_scroll};
use crate::repl::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};
use rustc_hash::FxHashMap;

/// Count tokens per kind, ignoring `EOF`
pub fn kind_histogram(tokens: &[Token]) -> FxHashMap<TokenKind, usize> {
    let mut counts = FxHashMap::default();
    for token in tokens.iter().filter(|t| !t.is(TokenKind::Eof)) {
        *counts.entry(token.kind).or_insert(0) += 1;
    }
    counts
}

/// Histogram as `KIND×n` pairs, most frequent first, ties by kind order
pub fn histogram_summary(counts: &FxHashMap<TokenKind, usize>) -> String {
    let mut entries: Vec<(TokenKind, usize)> = counts.iter().map(|(k, n)| (*k, *n)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    entries
        .iter()
        .map(|(kind, count)| format!("{}×{}", kind, count))
        .collect::<Vec<_>>()
        .join(" ")
}

fn kind_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::Illegal => Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD),
        TokenKind::Eof => Style::default().fg(DEFAULT_THEME.comment),
        TokenKind::Ident => Style::default().fg(DEFAULT_THEME.identifier),
        TokenKind::Int => Style::default().fg(DEFAULT_THEME.number),
        kind if kind.is_keyword() => Style::default().fg(DEFAULT_THEME.keyword),
        _ => Style::default().fg(DEFAULT_THEME.operator),
    }
}

/// Render the token pane
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: Option<&[Token]>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = match tokens {
        Some(tokens) => {
            let summary = histogram_summary(&kind_histogram(tokens));
            if summary.is_empty() {
                " Tokens ".to_string()
            } else {
                format!(" Tokens · {} ", summary)
            }
        }
        None => " Tokens ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let tokens = match tokens {
        Some(tokens) => tokens,
        None => {
            let paragraph = Paragraph::new("(type a line and press Enter)")
                .block(block)
                .style(Style::default().fg(DEFAULT_THEME.comment));
            frame.render_widget(paragraph, area);
            return;
        }
    };

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = clamp_scroll(tokens.len(), area, scroll_offset);

    let items: Vec<ListItem> = tokens
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(i, token)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>3} ", i), Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(format!("{:<8}", token.kind.as_str()), kind_style(token.kind)),
                Span::styled(format!(" {:?}", token.literal), Style::default().fg(DEFAULT_THEME.fg)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::Lexer;

    #[test]
    fn test_kind_histogram() {
        let tokens = Lexer::new("let a = a + 1;").tokenize();
        let counts = kind_histogram(&tokens);

        assert_eq!(counts.get(&TokenKind::Ident), Some(&2));
        assert_eq!(counts.get(&TokenKind::Let), Some(&1));
        assert_eq!(counts.get(&TokenKind::Eof), None);
    }

    #[test]
    fn test_histogram_summary_order() {
        let tokens = Lexer::new("a + b + c").tokenize();
        let summary = histogram_summary(&kind_histogram(&tokens));
        assert_eq!(summary, "IDENT×3 +×2");
    }

    #[test]
    fn test_empty_histogram() {
        let tokens = Lexer::new("").tokenize();
        assert_eq!(histogram_summary(&kind_histogram(&tokens)), "");
    }
}
