use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::model::AppConfig;
use crate::tui::app::App;

pub const TERM_W: u16 = 60;
pub const TERM_H: u16 = 16;

/// Render into an in-memory buffer and return it, styles included.
pub fn render_to_buffer<F>(w: u16, h: u16, f: F) -> Buffer
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let buf = render_to_buffer(w, h, f);
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An app with default config holding the given titles, in order.
pub fn app_with_tasks(titles: &[&str]) -> App {
    let mut app = App::new(&AppConfig::default());
    let titles: Vec<String> = titles.iter().map(|t| t.to_string()).collect();
    app.seed_tasks(&titles);
    app
}

/// Render the whole screen at the default test size.
pub fn render_app(app: &mut App) -> String {
    render_to_string(TERM_W, TERM_H, |frame, _area| {
        super::render(frame, app);
    })
}
