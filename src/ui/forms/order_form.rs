//! Order form rendering

use super::field_renderer::{
    draw_checkbox_field, draw_error, draw_select_field, draw_text_field,
};
use crate::state::{FieldName, FormPhase, MountedForm};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const FORM_TITLE: &str = "If you could be any flavor...what flavor would you be?";

/// Rows used by a field's input box
fn field_height(field: FieldName) -> u16 {
    if field.is_multiline() {
        5
    } else {
        3
    }
}

/// Draw the order form with its submit panel
pub fn draw(frame: &mut Frame, area: Rect, form: &MountedForm) {
    // Split into form (left) and submit panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(36), // Submit panel
        ])
        .split(area);

    draw_fields(frame, main_chunks[0], form);
    draw_submit_panel(frame, main_chunks[1], form);
}

fn draw_fields(frame: &mut Frame, area: Rect, form: &MountedForm) {
    let block = Block::default()
        .title(" Order ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Header, then an input row plus an error row per field
    let mut constraints = vec![Constraint::Length(2)];
    for field in FieldName::ALL {
        constraints.push(Constraint::Length(field_height(field)));
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("← Home", Style::default().fg(Color::Blue)),
            Span::styled(" (Esc)", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(
            FORM_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ]);
    frame.render_widget(header, chunks[0]);

    let controller = &form.controller;
    let values = controller.values();
    let errors = controller.errors();

    for (i, field) in FieldName::ALL.into_iter().enumerate() {
        let input_area = chunks[1 + i * 2];
        let error_area = chunks[2 + i * 2];
        let is_active = form.active_field() == Some(field);
        let has_error = errors.has_error(field);

        if field.is_checkbox() {
            draw_checkbox_field(frame, input_area, field, values.terms, is_active, has_error);
        } else if field.is_text_input() {
            draw_text_field(frame, input_area, field, values.text(field), is_active, has_error);
        } else {
            draw_select_field(frame, input_area, field, values.text(field), is_active, has_error);
        }
        draw_error(frame, error_area, errors.get(field));
    }
}

fn draw_submit_panel(frame: &mut Frame, area: Rect, form: &MountedForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),                // Last response
        ])
        .split(area);

    let controller = &form.controller;
    let label = match controller.phase() {
        FormPhase::Editing => "Submit",
        FormPhase::Submitting => "Submitting...",
    };
    render_button(
        frame,
        chunks[0],
        label,
        form.is_submit_active(),
        controller.can_submit(),
    );

    let (title, body) = match controller.submission_result() {
        Some(result) => (
            format!(" Response {} ", result.received_at.format("%H:%M:%S")),
            serde_json::to_string_pretty(&result.body).unwrap_or_else(|_| result.body.to_string()),
        ),
        None => (" Response ".to_string(), "[]".to_string()),
    };

    let response = Paragraph::new(body)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(response, chunks[1]);
}
