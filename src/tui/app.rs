use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::read_config;
use crate::io::kv::KvStore;
use crate::model::filter::{Filter, SortKey};
use crate::model::task::Task;
use crate::ops::select::select_tasks;
use crate::ops::sort::sort_tasks;
use crate::store::TaskStore;

use super::input;
use super::render;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing a new task title (a trailing `@YYYY-MM-DD` sets the due date)
    Insert,
    /// Retitling the task under the cursor
    Edit,
    /// Waiting for y/n on a delete
    ConfirmDelete,
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub filter: Filter,
    pub sort: SortKey,
    pub mode: Mode,
    pub should_quit: bool,
    /// Cursor index into the displayed (filtered + sorted) list
    pub cursor: usize,
    /// Text buffer for Insert/Edit modes
    pub input: String,
    /// Byte offset of the input cursor (always on a grapheme boundary)
    pub input_cursor: usize,
    /// Task being retitled in Edit mode
    pub editing_id: Option<u64>,
    /// Task pending deletion in ConfirmDelete mode
    pub delete_id: Option<u64>,
}

impl App {
    pub fn new(store: TaskStore, filter: Filter, sort: SortKey) -> Self {
        App {
            store,
            filter,
            sort,
            mode: Mode::Navigate,
            should_quit: false,
            cursor: 0,
            input: String::new(),
            input_cursor: 0,
            editing_id: None,
            delete_id: None,
        }
    }

    /// The displayed list: filter tab applied, then the sort key. Recomputed
    /// from the store on every draw, so it can never go stale.
    pub fn visible_tasks(&self) -> Vec<Task> {
        sort_tasks(&select_tasks(self.store.all_tasks(), self.filter), self.sort)
    }

    /// Id of the task under the cursor.
    pub fn cursor_task_id(&self) -> Option<u64> {
        self.visible_tasks().get(self.cursor).map(|t| t.id)
    }

    /// Keep the cursor inside the displayed list after a mutation or a
    /// filter/sort change.
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_tasks().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.clamp_cursor();
    }

    pub fn cycle_sort(&mut self) {
        self.sort = self.sort.next();
        self.clamp_cursor();
    }

    /// Reset the text buffer and leave Insert/Edit/Confirm state behind.
    pub fn reset_entry(&mut self) {
        self.mode = Mode::Navigate;
        self.input.clear();
        self.input_cursor = 0;
        self.editing_id = None;
        self.delete_id = None;
    }
}

/// Launch the TUI against the given data directory.
pub fn run(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = read_config(data_dir);
    let store = TaskStore::open(KvStore::open(data_dir.to_path_buf()));
    let mut app = App::new(store, config.default_filter(), config.default_sort());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
