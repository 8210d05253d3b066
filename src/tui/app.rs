use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use indexmap::IndexMap;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Position, Rect};
use tracing::{debug, info};

use crate::model::AppConfig;
use crate::model::task::{Task, TaskId};
use crate::ops::store::{Snapshot, TaskStore};
use crate::ops::task_ops::TaskError;

use super::dialog::{Dialog, DialogAction};
use super::input;
use super::render;
use super::row::{FocusChange, RowController};
use super::text_input::TextInput;
use super::theme::Theme;

/// Which text field receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// No field; keys navigate the list
    List,
    /// The "add a new task" field
    AddInput,
    /// The title field of an editing row
    Row(TaskId),
}

/// Clickable areas recorded during the last render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    AddInput,
    AddButton,
    Toggle(TaskId),
    Edit(TaskId),
    CancelEdit(TaskId),
    Delete(TaskId),
    DialogOption(usize),
}

/// Screen state: the store, one controller per row, and what has focus
pub struct App {
    pub store: TaskStore,
    /// Row controllers in snapshot order
    pub rows: IndexMap<TaskId, RowController>,
    pub add_input: TextInput,
    pub focus: Focus,
    /// Index of the highlighted row
    pub cursor: usize,
    pub dialog: Option<Dialog>,
    pub theme: Theme,
    pub show_key_hints: bool,
    pub status_message: Option<String>,
    pub should_quit: bool,
    pub hit_map: Vec<(Rect, HitTarget)>,
    /// The snapshot the rows were last built from
    snapshot: Snapshot,
    /// Filled by the store subscription, drained after each event
    pending: Rc<RefCell<Option<Snapshot>>>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let mut store = TaskStore::new();
        let pending = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&pending);
        store.subscribe(move |snap: &Snapshot| {
            *sink.borrow_mut() = Some(snap.clone());
        });
        let snapshot = store.snapshot();

        App {
            store,
            rows: IndexMap::new(),
            add_input: TextInput::default(),
            focus: Focus::List,
            cursor: 0,
            dialog: None,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            status_message: None,
            should_quit: false,
            hit_map: Vec::new(),
            snapshot,
            pending,
        }
    }

    /// Tasks as last rendered
    pub fn tasks(&self) -> &[Task] {
        &self.snapshot.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.snapshot.get(id)
    }

    pub fn cursor_task_id(&self) -> Option<TaskId> {
        self.tasks().get(self.cursor).map(|t| t.id)
    }

    /// Add startup tasks through the normal add path
    pub fn seed_tasks(&mut self, titles: &[String]) {
        for title in titles {
            if self.store.add_task(title).is_err() {
                self.status_message = Some(format!("skipped duplicate \"{}\"", title));
            }
        }
        self.after_event();
    }

    /// Bring rows and focus up to date after an input event
    pub fn after_event(&mut self) {
        self.apply_pending_snapshot();
        self.flush_focus_effects();
    }

    fn apply_pending_snapshot(&mut self) {
        let next = self.pending.borrow_mut().take();
        if let Some(snap) = next {
            self.sync_rows(snap);
        }
    }

    /// Rebuild the row set for a new snapshot: rows of removed tasks go
    /// away, new tasks get fresh rows, viewing rows pick up new titles.
    fn sync_rows(&mut self, snap: Snapshot) {
        let mut rows = IndexMap::with_capacity(snap.len());
        for task in snap.tasks.iter() {
            let row = match self.rows.swap_remove(&task.id) {
                Some(mut row) => {
                    row.reset_to(task);
                    row
                }
                None => RowController::new(task),
            };
            rows.insert(task.id, row);
        }
        self.rows = rows;

        if let Focus::Row(id) = self.focus
            && !self.rows.contains_key(&id)
        {
            self.focus = Focus::List;
        }
        debug!(version = snap.version, rows = snap.len(), "rows synced");
        self.snapshot = snap;
        self.clamp_cursor();
    }

    /// Run pending row focus effects and settle who owns focus
    fn flush_focus_effects(&mut self) {
        let changes: Vec<FocusChange> = self
            .rows
            .values_mut()
            .filter_map(RowController::sync_focus)
            .collect();
        for change in changes {
            match change {
                FocusChange::Acquire(id) => {
                    self.set_focus(Focus::Row(id));
                    if let Some(idx) = self.rows.get_index_of(&id) {
                        self.cursor = idx;
                    }
                }
                FocusChange::Release(id) => {
                    if self.focus == Focus::Row(id) {
                        self.set_focus(Focus::List);
                    }
                }
            }
        }
    }

    /// Move focus, blurring the previous owner
    pub fn set_focus(&mut self, target: Focus) {
        if self.focus == target {
            return;
        }
        match self.focus {
            Focus::AddInput => {
                self.add_input.blur();
            }
            Focus::Row(id) => {
                if let Some(row) = self.rows.get_mut(&id) {
                    row.blur_field();
                }
            }
            Focus::List => {}
        }
        match target {
            Focus::AddInput => {
                self.add_input.focus();
            }
            Focus::Row(id) => {
                if let Some(row) = self.rows.get_mut(&id) {
                    row.focus_field();
                }
            }
            Focus::List => {}
        }
        self.focus = target;
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.rows.len();
        self.cursor = if len == 0 { 0 } else { self.cursor.min(len - 1) };
    }

    // -----------------------------------------------------------------
    // Actions shared by keyboard and mouse

    /// Submit the add field. An empty field does nothing.
    pub fn submit_new_task(&mut self) {
        if self.add_input.is_empty() {
            return;
        }
        let title = self.add_input.value().to_string();
        self.add_input.clear();
        match self.store.add_task(&title) {
            Ok(id) => {
                self.status_message = None;
                // Row appears after the snapshot is applied; it is last
                self.cursor = self.store.len() - 1;
                debug!(%id, "cursor on new task");
            }
            Err(TaskError::DuplicateTitle(_)) => {
                self.dialog = Some(Dialog::duplicate_task());
            }
        }
    }

    pub fn toggle_task(&mut self, id: TaskId) {
        self.store.toggle_task_done(id);
    }

    /// Enter editing, or take focus back for a row already editing
    pub fn start_edit(&mut self, id: TaskId) {
        let (Some(task), Some(row)) = (self.snapshot.get(id), self.rows.get_mut(&id)) else {
            return;
        };
        if row.is_editing() {
            self.set_focus(Focus::Row(id));
        } else {
            row.start_edit(task);
        }
        if let Some(idx) = self.rows.get_index_of(&id) {
            self.cursor = idx;
        }
    }

    pub fn cancel_edit(&mut self, id: TaskId) {
        if let (Some(task), Some(row)) = (self.snapshot.get(id), self.rows.get_mut(&id)) {
            row.cancel(task);
        }
    }

    pub fn commit_edit(&mut self, id: TaskId) {
        if let Some(row) = self.rows.get_mut(&id) {
            row.commit(&mut self.store);
        }
    }

    /// Open the delete confirmation, unless the row is mid-rename
    pub fn request_delete(&mut self, id: TaskId) {
        let Some(row) = self.rows.get(&id) else {
            return;
        };
        match row.request_delete() {
            Some(dialog) => self.dialog = Some(dialog),
            None => {
                self.status_message = Some("finish editing before removing".to_string());
            }
        }
    }

    pub fn run_dialog_action(&mut self, action: Option<DialogAction>) {
        self.dialog = None;
        match action {
            Some(DialogAction::RemoveTask(id)) => self.store.remove_task(id),
            None => {}
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        let pos = Position::new(column, row);
        // Later entries are drawn on top
        self.hit_map
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, target)| *target)
    }
}

/// Run the TUI application
pub fn run(config: &AppConfig, seed: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config);
    app.seed_tasks(seed);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        original_hook(panic_info);
    }));

    info!("screen started");
    let result = run_event_loop(&mut terminal, &mut app);
    info!(tasks = app.store.len(), "screen closed");

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
