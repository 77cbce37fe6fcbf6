//! Post-submission confirmation view

use crate::app::App;
use crate::state::CvUploadStatus;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the confirmation view shown after a successful submission
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(receipt) = &app.state.receipt else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "Application Submitted",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Reference number: {}", receipt.application_id)),
        Line::from("You will be notified by email once your application has been reviewed."),
        Line::from(""),
    ];

    match &receipt.cv_upload {
        CvUploadStatus::NotAttached => {}
        CvUploadStatus::Uploaded { url } => {
            lines.push(Line::from(Span::styled(
                format!("CV uploaded: {url}"),
                Style::default().fg(Color::DarkGray),
            )));
        }
        CvUploadStatus::Failed { reason } => {
            lines.push(Line::from(Span::styled(
                format!(
                    "Your application was recorded, but the CV upload failed: {reason}"
                ),
                Style::default().fg(Color::Yellow),
            )));
            lines.push(Line::from(Span::styled(
                "Please contact the fellowship office to attach your CV.",
                Style::default().fg(Color::Yellow),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("n", Style::default().fg(Color::Cyan)),
        Span::raw(": start a new application  "),
        Span::styled("q", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]));

    let block = Block::default()
        .title(" Fellowship Application ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
