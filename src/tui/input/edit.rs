use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::unicode;

pub(super) fn handle_insert(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.input.clear();
            app.input_cursor = 0;
            app.mode = Mode::Navigate;
        }

        // Commit. Empty (or whitespace-only) text adds nothing.
        (_, KeyCode::Enter) => {
            match app.store.add(&app.input, app.input_category) {
                Ok(Some(_)) => {
                    // Cursor onto the appended task
                    app.cursor = app.store.len() - 1;
                }
                Ok(None) => {}
                Err(e) => app.report_save_error(e),
            }
            app.input.clear();
            app.input_cursor = 0;
            app.mode = Mode::Navigate;
        }

        // Cycle the category for the new task
        (_, KeyCode::Tab) => {
            app.input_category = app.input_category.next();
        }

        (_, KeyCode::Backspace) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input.replace_range(prev..app.input_cursor, "");
                app.input_cursor = prev;
            }
        }

        (_, KeyCode::Left) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = next;
            }
        }
        (_, KeyCode::Home) => {
            app.input_cursor = 0;
        }
        (_, KeyCode::End) => {
            app.input_cursor = app.input.len();
        }

        (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => {
            app.input.insert(app.input_cursor, c);
            app.input_cursor += c.len_utf8();
        }

        _ => {}
    }
}
