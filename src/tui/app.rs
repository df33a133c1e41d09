use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::read_config;
use crate::io::slot::{FileSlot, resolve_data_dir};
use crate::model::config::AppConfig;
use crate::model::task::Category;
use crate::ops::drag::DragController;
use crate::ops::store::TaskStore;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing a new task into the input line
    Insert,
    /// Repositioning the task under the cursor
    Move,
}

/// Main application state. All mutation goes through the store and the drag
/// controller; the rest is transient view state.
pub struct App {
    pub store: TaskStore<FileSlot>,
    pub drag: DragController,
    pub config: AppConfig,
    pub mode: Mode,
    pub theme: Theme,
    pub should_quit: bool,
    /// Cursor index into the task list
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    /// Help overlay visible
    pub show_help: bool,
    /// Insert mode: text being typed
    pub input: String,
    /// Insert mode: cursor byte offset into `input`
    pub input_cursor: usize,
    /// Category for the next added task; kept across adds
    pub input_category: Category,
    /// One-line notice shown in the status row (e.g. a failed save)
    pub status_message: Option<String>,
}

impl App {
    pub fn new(store: TaskStore<FileSlot>, config: AppConfig) -> Self {
        let theme = Theme::from_config(&config.ui, store.dark_mode());
        App {
            store,
            drag: DragController::new(),
            config,
            mode: Mode::Navigate,
            theme,
            should_quit: false,
            cursor: 0,
            scroll_offset: 0,
            show_help: false,
            input: String::new(),
            input_cursor: 0,
            input_category: Category::Work,
            status_message: None,
        }
    }

    /// The id of the task under the cursor, if any.
    pub fn cursor_task_id(&self) -> Option<i64> {
        self.store.tasks().get(self.cursor).map(|t| t.id)
    }

    /// Keep the cursor inside the list after a mutation.
    pub fn clamp_cursor(&mut self) {
        let len = self.store.len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Rebuild the theme after the display-mode flag changes.
    pub fn refresh_theme(&mut self) {
        self.theme = Theme::from_config(&self.config.ui, self.store.dark_mode());
    }

    /// Record a persistence failure for the status row.
    pub fn report_save_error(&mut self, err: impl std::fmt::Display) {
        self.status_message = Some(format!("save failed: {}", err));
    }
}

/// Run the TUI application
pub fn run(data_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = resolve_data_dir(data_dir);
    let config = read_config(&dir)?;
    let store = TaskStore::load(FileSlot::new(dir));
    let mut app = App::new(store, config);

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

    // Run event loop
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
            break;
        }
    }
    Ok(())
}
