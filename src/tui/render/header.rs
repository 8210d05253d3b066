use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::display_width;

/// "You have 3 tasks"
pub fn counter_label(count: usize) -> String {
    if count == 1 {
        "You have 1 task".to_string()
    } else {
        format!("You have {} tasks", count)
    }
}

/// Render the header bar: app name left, task counter right
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.header_bg;
    let fg = app.theme.header_fg;
    let base = Style::default().fg(fg).bg(bg);

    let name = " ticklist";
    let counter = format!("{} ", counter_label(app.store.len()));
    let width = area.width as usize;
    let used = display_width(name) + display_width(&counter);

    let mut spans = vec![Span::styled(name, base.add_modifier(Modifier::BOLD))];
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), base));
        spans.push(Span::styled(counter, base));
    }

    let lines = vec![Line::from(""), Line::from(spans), Line::from("")];
    let paragraph = Paragraph::new(lines).style(base);
    frame.render_widget(paragraph, area);
}
