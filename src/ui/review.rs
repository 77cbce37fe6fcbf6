//! Review step rendering
//!
//! The summary reads straight from the live form so it can never diverge
//! from the payload a subsequent submit would build.

use crate::app::App;
use crate::state::{registry, ApplicationForm};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Label/value pairs for one data-entry step: every active field, in
/// declaration order. Inactive conditional fields are omitted.
pub fn step_entries(
    form: &ApplicationForm,
    def: &registry::StepDefinition,
) -> Vec<(&'static str, String)> {
    def.fields
        .iter()
        .filter(|spec| form.is_field_active(spec))
        .filter_map(|spec| {
            form.field(spec.name).map(|field| {
                let value = if field.is_present() {
                    field.as_text().to_string()
                } else {
                    "—".to_string()
                };
                (spec.label, value)
            })
        })
        .collect()
}

/// Draw the read-only application summary
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Please review all information carefully before final submission.",
            Style::default().fg(Color::Blue),
        )),
        Line::from("You can go back to make changes if needed."),
        Line::from(""),
    ];

    for def in registry::data_entry_steps() {
        lines.push(Line::from(Span::styled(
            format!("{}. {}", def.number, def.title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for (label, value) in step_entries(&app.state.form, def) {
            lines.push(Line::from(vec![
                Span::styled(format!("  {label}: "), Style::default().fg(Color::DarkGray)),
                Span::raw(value),
            ]));
        }
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .title(" Application Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.state.review_scroll, 0));

    frame.render_widget(paragraph, area);
}
