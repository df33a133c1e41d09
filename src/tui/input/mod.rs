mod edit;
mod move_mode;
mod navigate;

use crossterm::event::KeyEvent;

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Any keypress clears a stale notice
    app.status_message = None;

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::Insert => edit::handle_insert(app, key),
        Mode::Move => move_mode::handle_move(app, key),
    }
}
