use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, HitTarget};
use crate::util::unicode::display_width;

/// Render the open dialog centered over `area`
pub fn render_dialog(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(dialog) = app.dialog.as_ref() else {
        return;
    };

    let bg = app.theme.input_bg;
    let title_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let option_style = Style::default().fg(app.theme.header_bg).bg(bg);
    let selected_style = Style::default()
        .fg(app.theme.header_fg)
        .bg(app.theme.header_bg)
        .add_modifier(Modifier::BOLD);

    let popup_w: u16 = 46.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(format!(" {}", dialog.title), title_style)));
    lines.push(Line::from(""));
    for chunk in wrap_words(&dialog.message, inner_w.saturating_sub(2)) {
        lines.push(Line::from(Span::styled(format!("  {}", chunk), text_style)));
    }
    lines.push(Line::from(""));

    // Options, right-aligned
    let labels: Vec<String> = dialog
        .options
        .iter()
        .map(|opt| format!(" {} ", opt.label))
        .collect();
    let total: usize = labels.iter().map(|l| display_width(l)).sum::<usize>()
        + 2 * labels.len().saturating_sub(1);
    let lead = inner_w.saturating_sub(total + 2);
    let options_line = lines.len() as u16;

    let mut spans = vec![Span::styled(" ".repeat(lead), text_style)];
    let mut offsets = Vec::with_capacity(labels.len());
    let mut col = lead;
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", text_style));
            col += 2;
        }
        let style = if i == dialog.selected {
            selected_style
        } else {
            option_style
        };
        spans.push(Span::styled(label.clone(), style));
        offsets.push((col, display_width(label)));
        col += display_width(label);
    }
    lines.push(Line::from(spans));

    let popup_h = ((lines.len() as u16) + 2).min(area.height);
    let popup = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.header_bg).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);

    if options_line < inner.height {
        for (i, (offset, width)) in offsets.into_iter().enumerate() {
            let rect = Rect::new(
                inner.x + offset as u16,
                inner.y + options_line,
                width as u16,
                1,
            )
            .intersection(inner);
            app.hit_map.push((rect, HitTarget::DialogOption(i)));
        }
    }
}

/// Greedy word wrap by display width. Words wider than the line are
/// left whole.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && display_width(&line) + 1 + display_width(word) > width {
            out.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        out.push(line);
    }
    out
}

fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
