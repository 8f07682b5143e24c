//! AST pane rendering
//!
//! Shows the parenthesized reconstruction of the current program followed by
//! an indented outline of its nodes.

use crate::parser::ast::{Expression, Program, Statement};
use crate::repl::panes::{border_style, clamp_scroll};
use crate::repl::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Indented one-node-per-line outline of `program`
pub fn outline(program: &Program) -> Vec<String> {
    let mut lines = vec!["Program".to_string()];

    for statement in &program.statements {
        match statement {
            Statement::Let(stmt) => {
                lines.push(format!("  Let {}", stmt.name));
                if let Some(value) = &stmt.value {
                    outline_expression(value, 2, &mut lines);
                }
            }
            Statement::Return(stmt) => {
                lines.push("  Return".to_string());
                if let Some(value) = &stmt.return_value {
                    outline_expression(value, 2, &mut lines);
                }
            }
            Statement::Expression(stmt) => {
                lines.push("  ExpressionStatement".to_string());
                match &stmt.expression {
                    Some(expression) => outline_expression(expression, 2, &mut lines),
                    None => lines.push("    (missing)".to_string()),
                }
            }
        }
    }

    lines
}

fn outline_expression(expression: &Expression, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    match expression {
        Expression::Identifier(ident) => lines.push(format!("{}Identifier {}", indent, ident.value)),
        Expression::IntegerLiteral(lit) => {
            lines.push(format!("{}IntegerLiteral {}", indent, lit.value))
        }
        Expression::Prefix(prefix) => {
            lines.push(format!("{}Prefix {}", indent, prefix.operator));
            outline_expression(&prefix.right, depth + 1, lines);
        }
        Expression::Infix(infix) => {
            lines.push(format!("{}Infix {}", indent, infix.operator));
            outline_expression(&infix.left, depth + 1, lines);
            outline_expression(&infix.right, depth + 1, lines);
        }
    }
}

/// Render the AST pane
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    program: Option<&Program>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" AST ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let program = match program {
        Some(program) if !program.statements.is_empty() => program,
        _ => {
            let paragraph = Paragraph::new("(no statements)")
                .block(block)
                .style(Style::default().fg(DEFAULT_THEME.comment));
            frame.render_widget(paragraph, area);
            return;
        }
    };

    let block = block.padding(Padding::new(1, 0, 0, 0));

    let mut all_items = vec![ListItem::new(program.to_string()).style(
        Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD),
    )];
    all_items.extend(
        outline(program)
            .into_iter()
            .map(|line| ListItem::new(line).style(Style::default().fg(DEFAULT_THEME.fg))),
    );

    let visible_height = clamp_scroll(all_items.len(), area, scroll_offset);
    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
