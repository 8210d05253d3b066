use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};

/// Key hints for the current context
pub fn key_hints(app: &App) -> &'static str {
    if app.dialog.is_some() {
        return "←/→ choose  Enter select  Esc close";
    }
    match app.focus {
        Focus::List => "a add  space done  e edit  d delete  q quit",
        Focus::AddInput => "Enter add  Esc back",
        Focus::Row(_) => "Enter save  Esc cancel",
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let line = if let Some(msg) = &app.status_message {
        Line::from(Span::styled(
            format!(" {}", msg),
            Style::default().fg(app.theme.red).bg(bg),
        ))
    } else if app.show_key_hints {
        Line::from(Span::styled(
            format!(" {}", key_hints(app)),
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        Line::from("")
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
