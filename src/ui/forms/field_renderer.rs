//! Field rendering utilities for forms

use crate::state::FieldName;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn field_block(label: &str, is_active: bool, has_error: bool) -> Block<'_> {
    let style = if has_error && !is_active {
        Style::default().fg(Color::Red)
    } else {
        border_style(is_active)
    };
    Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(style)
}

fn inner_width(area: Rect) -> usize {
    usize::from(area.width.saturating_sub(2))
}

/// Draw a text input. The value is rendered verbatim so what is on screen
/// always matches the committed value; single-line values longer than the
/// box scroll left.
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    value: &str,
    is_active: bool,
    has_error: bool,
) {
    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = if is_active { CURSOR } else { "" };

    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
        }
        Paragraph::new(lines).wrap(Wrap { trim: false })
    } else {
        let line = Line::from(vec![
            Span::styled(value, text_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]);
        // Keep the tail and cursor in view once the value outgrows the box
        let overflow = line.width().saturating_sub(inner_width(area));
        let offset = u16::try_from(overflow).unwrap_or(u16::MAX);
        Paragraph::new(line).scroll((0, offset))
    };

    frame.render_widget(
        content.block(field_block(field.label(), is_active, has_error)),
        area,
    );
}

/// Draw the size selector as `< value >`
pub fn draw_select_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    value: &str,
    is_active: bool,
    has_error: bool,
) {
    let arrow_style = border_style(is_active);
    let value_span = if value.is_empty() {
        Span::styled(
            "choose a size",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(value, Style::default().fg(Color::White))
    };

    let line = Line::from(vec![
        Span::styled("< ", arrow_style),
        value_span,
        Span::styled(" >", arrow_style),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(field_block(field.label(), is_active, has_error)),
        area,
    );
}

/// Draw a checkbox as `[x] label`
pub fn draw_checkbox_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    checked: bool,
    is_active: bool,
    has_error: bool,
) {
    let mark = if checked { "[x]" } else { "[ ]" };
    let mark_style = if checked {
        Style::default().fg(Color::Green)
    } else {
        border_style(is_active)
    };

    let line = Line::from(vec![
        Span::styled(mark, mark_style),
        Span::raw(" "),
        Span::raw(field.label()),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(field_block("Terms", is_active, has_error)),
        area,
    );
}

/// Draw the validation message under a field; nothing when it is empty
pub fn draw_error(frame: &mut Frame, area: Rect, message: &str) {
    if message.is_empty() {
        return;
    }
    let line = Line::from(Span::styled(
        format!("  {message}"),
        Style::default().fg(Color::Red),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
