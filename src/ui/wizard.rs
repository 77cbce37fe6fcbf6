//! Wizard rendering: progress bar, error banner, step form, buttons row

use super::{field_renderer::draw_field, review};
use crate::app::App;
use crate::state::registry::{self, Requirement};
use crate::state::WizardStep;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

const FIELD_HEIGHT: u16 = 3;
const BUTTONS_HEIGHT: u16 = 3;

/// Draw the wizard view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let banner_height = match &app.state.error_message {
        Some(_) if !app.state.missing_fields.is_empty() => 5,
        Some(_) => 4,
        None => 0,
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Progress
            Constraint::Length(banner_height), // Error banner
            Constraint::Min(6),                // Step content
            Constraint::Length(1),             // Help text
        ])
        .split(area);

    draw_progress(frame, chunks[0], app);
    if app.state.error_message.is_some() {
        draw_error_banner(frame, chunks[1], app);
    }
    draw_step(frame, chunks[2], app);
    draw_help(frame, chunks[3], app);
}

fn draw_progress(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.state.step;
    let ratio = f64::from(step.number()) / f64::from(registry::TOTAL_STEPS);
    let label = format!(
        "Step {} of {} — {}  ({}% completed)",
        step.number(),
        registry::TOTAL_STEPS,
        step.title(),
        (ratio * 100.0).round() as u16,
    );
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Blue).bg(Color::DarkGray))
        .ratio(ratio)
        .label(label);
    frame.render_widget(gauge, area);
}

fn draw_error_banner(frame: &mut Frame, area: Rect, app: &App) {
    let message = app.state.error_message.as_deref().unwrap_or_default();

    let mut lines = vec![Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(Color::Red),
    ))];
    if !app.state.missing_fields.is_empty() {
        lines.push(Line::from(Span::styled(
            app.state.missing_fields.join(", "),
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from(Span::styled(
        "Esc: dismiss",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title(" Error ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(paragraph, area);
}

fn draw_step(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(BUTTONS_HEIGHT)])
        .split(area);

    if app.state.step.is_review() {
        review::draw(frame, chunks[0], app);
    } else {
        draw_fields(frame, chunks[0], app);
    }
    draw_buttons(frame, chunks[1], app);
}

fn draw_fields(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.state.step.number();
    let Some(def) = registry::step_definition(step) else {
        return;
    };

    let block = Block::default()
        .title(format!(" Section {}: {} ", def.number, def.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = app.state.form.active_fields(step);
    if fields.is_empty() {
        return;
    }

    // Window the fields so the active one stays visible on short terminals
    let max_visible = (inner.height / FIELD_HEIGHT).max(1) as usize;
    let active = app.state.active_field.min(fields.len().saturating_sub(1));
    let start = active.saturating_sub(max_visible.saturating_sub(1));
    let visible = &fields[start..fields.len().min(start + max_visible)];

    let constraints: Vec<Constraint> = visible
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in visible.iter().copied().enumerate() {
        let index = start + i;
        let required = def
            .fields
            .iter()
            .find(|spec| spec.name == field.name)
            .map(|spec| !matches!(spec.requirement, Requirement::Optional))
            .unwrap_or(false);
        let is_active =
            index == app.state.active_field && !app.state.is_buttons_row_active();
        draw_field(frame, rows[i], field, is_active, required);
    }
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let buttons = app.state.buttons();
    let focused = app.state.is_buttons_row_active();

    let constraints: Vec<Constraint> = buttons
        .iter()
        .map(|_| Constraint::Length(14))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, label) in buttons.iter().copied().enumerate() {
        let selected = focused && app.state.selected_button == i;
        let label = if label == "Submit" && app.state.submitting {
            "Submitting..."
        } else {
            label
        };

        let color = match label {
            "Back" => Color::Gray,
            _ => Color::Green,
        };
        let mut style = Style::default().fg(color);
        if selected {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if selected {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            });
        let paragraph = Paragraph::new(Line::from(Span::styled(label, style)))
            .centered()
            .block(block);
        frame.render_widget(paragraph, chunks[i]);
    }
}

fn draw_help(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("Shift+Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": previous  "),
    ];
    if app.state.step == WizardStep::Review {
        spans.push(Span::styled("↑/↓", Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(": scroll  "));
    } else {
        spans.push(Span::styled("←/→", Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(": select option  "));
    }
    spans.push(Span::styled("Enter", Style::default().fg(Color::Cyan)));
    spans.push(Span::raw(": activate button"));

    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
