use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Focus, HitTarget};

const PLACEHOLDER: &str = "Add a new task...";

/// Render the add field and its [+] button
pub fn render_add_bar(frame: &mut Frame, app: &mut App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(1), // margin
            Constraint::Min(3),    // text field
            Constraint::Length(5), // button
            Constraint::Length(1), // margin
        ])
        .split(area);
    let field_area = cols[1];
    let button_area = cols[2];

    let focused = app.focus == Focus::AddInput;
    let border_color = if focused {
        app.theme.header_bg
    } else {
        app.theme.dim
    };
    let field_style = Style::default().fg(app.theme.text_bright).bg(app.theme.input_bg);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(app.theme.background))
        .style(field_style);
    let inner = block.inner(field_area);

    let value = app.add_input.value();
    let content = if value.is_empty() && !focused {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(app.theme.dim).bg(app.theme.input_bg),
        ))
    } else {
        Line::from(Span::styled(value.to_string(), field_style))
    };

    // Keep the cursor inside the field by scrolling horizontally
    let cursor_col = app.add_input.cursor_col() as u16;
    let scroll = cursor_col.saturating_sub(inner.width.saturating_sub(1));
    let paragraph = Paragraph::new(content)
        .block(block)
        .scroll((0, scroll));
    frame.render_widget(paragraph, field_area);

    if focused && inner.width > 0 {
        frame.set_cursor_position(Position::new(inner.x + cursor_col - scroll, inner.y));
    }

    let button = Paragraph::new(Line::from(Span::styled(
        " + ",
        Style::default()
            .fg(app.theme.header_fg)
            .bg(app.theme.header_bg)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.header_bg).bg(app.theme.background))
            .style(Style::default().bg(app.theme.header_bg)),
    );
    frame.render_widget(button, button_area);

    app.hit_map.push((field_area, HitTarget::AddInput));
    app.hit_map.push((button_area, HitTarget::AddButton));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn placeholder_when_empty_and_unfocused() {
        let mut app = app_with_tasks(&[]);
        let output = render_to_string(40, 3, |frame, area| {
            render_add_bar(frame, &mut app, area);
        });
        assert!(output.contains(PLACEHOLDER));
        assert!(output.contains(" + "));
    }

    #[test]
    fn typed_value_replaces_placeholder() {
        let mut app = app_with_tasks(&[]);
        app.set_focus(Focus::AddInput);
        app.add_input.insert_str("Pay rent");
        let output = render_to_string(40, 3, |frame, area| {
            render_add_bar(frame, &mut app, area);
        });
        assert!(output.contains("Pay rent"));
        assert!(!output.contains(PLACEHOLDER));
    }

    #[test]
    fn records_click_targets() {
        let mut app = app_with_tasks(&[]);
        render_to_string(40, 3, |frame, area| {
            render_add_bar(frame, &mut app, area);
        });
        assert_eq!(app.hit_test(5, 1), Some(HitTarget::AddInput));
        assert_eq!(app.hit_test(36, 1), Some(HitTarget::AddButton));
        assert_eq!(app.hit_test(0, 1), None);
    }
}
