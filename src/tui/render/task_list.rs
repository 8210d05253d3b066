use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, HitTarget};
use crate::util::unicode::{display_width, truncate_to_width};

const MARKER_W: u16 = 5;
/// " ✎ │ ⌫ " plus a trailing margin
const ICONS_W: u16 = 8;

/// Render the task rows: done marker, title (or edit field), icons
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.rows.is_empty() {
        let empty = Paragraph::new(" No tasks yet")
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }
    if area.height == 0 {
        return;
    }

    let visible = area.height as usize;
    let scroll = app.cursor.saturating_sub(visible - 1);
    let title_w = area.width.saturating_sub(MARKER_W + ICONS_W);

    let mut targets = Vec::new();
    let mut cursor_pos = None;

    for (i, task) in app.tasks().iter().enumerate().skip(scroll).take(visible) {
        let Some(row) = app.rows.get(&task.id) else {
            continue;
        };
        let y = area.y + (i - scroll) as u16;
        let bg = if i == app.cursor {
            app.theme.selection_bg
        } else {
            app.theme.background
        };
        let base = Style::default().bg(bg);

        let marker_rect = Rect::new(area.x, y, MARKER_W.min(area.width), 1);
        let title_rect = Rect::new(marker_rect.right(), y, title_w, 1);
        let icons_rect = Rect::new(
            title_rect.right(),
            y,
            ICONS_W.min(area.width.saturating_sub(MARKER_W + title_w)),
            1,
        );

        // Done marker
        let (mark, mark_color) = if task.done {
            ("✓", app.theme.done)
        } else {
            (" ", app.theme.dim)
        };
        let marker = Line::from(vec![
            Span::styled(" [", base.fg(app.theme.dim)),
            Span::styled(mark, base.fg(mark_color).add_modifier(Modifier::BOLD)),
            Span::styled("] ", base.fg(app.theme.dim)),
        ]);
        frame.render_widget(Paragraph::new(marker).style(base), marker_rect);
        targets.push((marker_rect, HitTarget::Toggle(task.id)));

        // Title or edit field
        if row.is_editing() {
            let field = row.field();
            let field_style = Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.input_bg);
            let cursor_col = field.cursor_col() as u16;
            let hscroll = cursor_col.saturating_sub(title_w.saturating_sub(1));
            let text = Paragraph::new(Line::from(Span::styled(
                field.value().to_string(),
                field_style,
            )))
            .style(field_style)
            .scroll((0, hscroll));
            frame.render_widget(text, title_rect);
            if field.is_focused() && title_w > 0 {
                cursor_pos = Some(Position::new(title_rect.x + cursor_col - hscroll, y));
            }
            targets.push((title_rect, HitTarget::Edit(task.id)));
        } else {
            let mut style = base.fg(app.theme.title_color(task.done));
            if task.done {
                style = style.add_modifier(Modifier::CROSSED_OUT);
            }
            let title = truncate_to_width(&task.title, title_w as usize);
            let pad = (title_w as usize).saturating_sub(display_width(&title));
            let line = Line::from(vec![
                Span::styled(title, style),
                Span::styled(" ".repeat(pad), base),
            ]);
            frame.render_widget(Paragraph::new(line).style(base), title_rect);
            targets.push((title_rect, HitTarget::Toggle(task.id)));
        }

        // Icons: edit (or cancel while editing), divider, delete
        let (edit_icon, edit_target) = if row.is_editing() {
            ("✕", HitTarget::CancelEdit(task.id))
        } else {
            ("✎", HitTarget::Edit(task.id))
        };
        let delete_color = if row.can_delete() {
            app.theme.red
        } else {
            app.theme.divider
        };
        let icons = Line::from(vec![
            Span::styled(format!(" {} ", edit_icon), base.fg(app.theme.text)),
            Span::styled("│", base.fg(app.theme.divider)),
            Span::styled(" ⌫ ", base.fg(delete_color)),
            Span::styled(" ", base),
        ]);
        frame.render_widget(Paragraph::new(icons).style(base), icons_rect);

        let edit_rect = Rect::new(icons_rect.x, y, 3.min(icons_rect.width), 1);
        targets.push((edit_rect, edit_target));
        if row.can_delete() && icons_rect.width >= 7 {
            let delete_rect = Rect::new(icons_rect.x + 4, y, 3, 1);
            targets.push((delete_rect, HitTarget::Delete(task.id)));
        }
    }

    app.hit_map.extend(targets);
    if let Some(pos) = cursor_pos {
        frame.set_cursor_position(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn render_list(app: &mut App, w: u16, h: u16) -> String {
        render_to_string(w, h, |frame, area| {
            render_task_list(frame, app, area);
        })
    }

    #[test]
    fn empty_list_message() {
        let mut app = app_with_tasks(&[]);
        let output = render_list(&mut app, 30, 3);
        assert_eq!(output, " No tasks yet");
    }

    #[test]
    fn rows_show_marker_title_and_icons() {
        let mut app = app_with_tasks(&["Buy milk", "Walk dog"]);
        let id = app.tasks()[0].id;
        app.toggle_task(id);
        app.after_event();

        let output = render_list(&mut app, 30, 2);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], " [✓] Buy milk          ✎ │ ⌫");
        assert_eq!(lines[1], " [ ] Walk dog          ✎ │ ⌫");
    }

    #[test]
    fn done_titles_are_struck_through() {
        let mut app = app_with_tasks(&["Buy milk", "Walk dog"]);
        let id = app.tasks()[0].id;
        app.toggle_task(id);
        app.after_event();
        let theme = app.theme.clone();

        let buf = render_to_buffer(30, 2, |frame, area| {
            render_task_list(frame, &mut app, area);
        });

        // Title text starts after the 5-cell marker
        for x in 5u16..13 {
            let done = &buf[(x, 0)];
            assert!(done.modifier.contains(Modifier::CROSSED_OUT));
            assert_eq!(done.fg, theme.done);

            let open = &buf[(x, 1)];
            assert!(!open.modifier.contains(Modifier::CROSSED_OUT));
            assert_ne!(open.fg, theme.done);
            assert_eq!(open.fg, theme.text);
        }
    }

    #[test]
    fn long_titles_are_truncated() {
        let mut app = app_with_tasks(&["A very long task title that keeps going"]);
        let output = render_list(&mut app, 30, 1);
        assert!(output.contains("…"));
        assert!(output.ends_with("✎ │ ⌫"));
    }

    #[test]
    fn editing_row_shows_buffer_and_cancel_icon() {
        let mut app = app_with_tasks(&["Buy milk"]);
        let id = app.tasks()[0].id;
        app.start_edit(id);
        app.after_event();
        app.rows.get_mut(&id).unwrap().paste(" now");

        let output = render_list(&mut app, 30, 1);
        assert!(output.contains("Buy milk now"));
        assert!(output.contains("✕"));
        assert!(!output.contains("✎"));
    }

    #[test]
    fn delete_target_only_while_viewing() {
        let mut app = app_with_tasks(&["Buy milk"]);
        let id = app.tasks()[0].id;
        render_list(&mut app, 30, 1);
        // Columns: marker 0-4, title 5-21, icons 22-29
        assert_eq!(app.hit_test(1, 0), Some(HitTarget::Toggle(id)));
        assert_eq!(app.hit_test(23, 0), Some(HitTarget::Edit(id)));
        assert_eq!(app.hit_test(27, 0), Some(HitTarget::Delete(id)));

        app.start_edit(id);
        app.after_event();
        app.hit_map.clear();
        render_list(&mut app, 30, 1);
        assert_eq!(app.hit_test(10, 0), Some(HitTarget::Edit(id)));
        assert_eq!(app.hit_test(23, 0), Some(HitTarget::CancelEdit(id)));
        assert_eq!(app.hit_test(27, 0), None);
    }

    #[test]
    fn scrolls_to_keep_cursor_visible() {
        let mut app = app_with_tasks(&["one", "two", "three", "four"]);
        app.cursor = 3;
        let output = render_list(&mut app, 30, 2);
        assert!(!output.contains("one"));
        assert!(output.contains("three"));
        assert!(output.contains("four"));
    }
}
