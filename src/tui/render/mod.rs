pub mod add_bar;
pub mod dialog;
pub mod header;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function. Dispatches to sub-renderers and rebuilds the
/// click map for the frame
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_map.clear();
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | add bar | spacer | task list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(3), // add bar (bordered)
            Constraint::Length(1), // spacer
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    add_bar::render_add_bar(frame, app, chunks[1]);
    task_list::render_task_list(frame, app, chunks[3]);
    status_row::render_status_row(frame, app, chunks[4]);

    // Dialog (rendered on top of everything)
    if app.dialog.is_some() {
        dialog::render_dialog(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use crate::tui::dialog::Dialog;

    #[test]
    fn full_screen_layout() {
        let mut app = app_with_tasks(&["Buy milk", "Walk dog"]);
        let output = render_app(&mut app);
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[1].ends_with("You have 2 tasks"));
        assert!(lines[4].contains("Add a new task..."));
        assert!(lines[7].starts_with(" [ ] Buy milk"));
        assert!(lines[8].starts_with(" [ ] Walk dog"));
        assert_eq!(lines[TERM_H as usize - 1], " a add  space done  e edit  d delete  q quit");
    }

    #[test]
    fn dialog_draws_over_the_list() {
        let mut app = app_with_tasks(&["Buy milk"]);
        app.dialog = Some(Dialog::duplicate_task());
        let output = render_app(&mut app);
        assert!(output.contains("Task already exists"));
        assert!(output.contains("←/→ choose  Enter select  Esc close"));
    }
}
