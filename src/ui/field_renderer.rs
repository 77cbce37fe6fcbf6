//! Field rendering utilities for the wizard form

use crate::state::{FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, required: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let content = match &field.value {
        FieldValue::Choice(_) => {
            // Choice fields show option arrows instead of a cursor
            let mut spans = Vec::new();
            if is_active {
                spans.push(Span::styled("◂ ", Style::default().fg(Color::Cyan)));
            }
            spans.push(Span::styled(display_str, style));
            if is_active {
                spans.push(Span::styled(" ▸", Style::default().fg(Color::Cyan)));
            }
            Paragraph::new(Line::from(spans))
        }
        _ => {
            let cursor = if is_active { "▌" } else { "" };
            if field.is_multiline {
                let mut lines: Vec<Line> = display_str
                    .lines()
                    .map(|l| Line::from(l.to_string()))
                    .collect();
                if is_active {
                    if let Some(last) = lines.last_mut() {
                        last.spans
                            .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
                    } else {
                        lines.push(Line::from(Span::styled(
                            cursor,
                            Style::default().fg(Color::Cyan),
                        )));
                    }
                }
                Paragraph::new(lines)
            } else {
                Paragraph::new(Line::from(vec![
                    Span::styled(display_str, style),
                    Span::styled(cursor, Style::default().fg(Color::Cyan)),
                ]))
            }
        }
    };

    let marker = if required { " *" } else { "" };
    let block = Block::default()
        .title(format!(" {}{} ", field.label, marker))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
