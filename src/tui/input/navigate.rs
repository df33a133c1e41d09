use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) => {
            app.should_quit = true;
        }
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
        }
        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }

        // Cursor movement
        (_, KeyCode::Up | KeyCode::Char('k')) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (_, KeyCode::Down | KeyCode::Char('j')) => {
            if app.cursor + 1 < app.store.len() {
                app.cursor += 1;
            }
        }
        (_, KeyCode::Char('g') | KeyCode::Home) => {
            app.cursor = 0;
        }
        (_, KeyCode::Char('G') | KeyCode::End) => {
            app.cursor = app.store.len().saturating_sub(1);
        }

        // Toggle completed
        (_, KeyCode::Char(' ') | KeyCode::Char('x')) => {
            if let Some(id) = app.cursor_task_id()
                && let Err(e) = app.store.toggle(id)
            {
                app.report_save_error(e);
            }
        }

        // Delete
        (_, KeyCode::Char('d')) => {
            if let Some(id) = app.cursor_task_id() {
                match app.store.remove(id) {
                    Ok(_) => app.clamp_cursor(),
                    Err(e) => app.report_save_error(e),
                }
            }
        }

        // New task
        (_, KeyCode::Char('a') | KeyCode::Char('i')) => {
            app.input.clear();
            app.input_cursor = 0;
            app.mode = Mode::Insert;
        }

        // Reposition the task under the cursor
        (_, KeyCode::Char('m')) => {
            if !app.store.is_empty() {
                app.drag.begin(app.cursor);
                app.mode = Mode::Move;
            }
        }

        // Display mode
        (_, KeyCode::Char('t')) => match app.store.toggle_dark_mode() {
            Ok(_) => app.refresh_theme(),
            Err(e) => app.report_save_error(e),
        },

        _ => {}
    }
}
