use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

/// Move mode: each keypress is one crossing of the gesture — the record under
/// the cursor follows immediately, and every step is persisted as it happens.
/// Ending the gesture (Enter/m/Esc) just drops back to Navigate; there is
/// nothing to commit or roll back.
pub(super) fn handle_move(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('m') | KeyCode::Esc => {
            app.drag.end();
            app.mode = Mode::Navigate;
        }
        KeyCode::Up | KeyCode::Char('k') => drag_step(app, -1),
        KeyCode::Down | KeyCode::Char('j') => drag_step(app, 1),
        KeyCode::Char('g') | KeyCode::Home => drag_to_boundary(app, true),
        KeyCode::Char('G') | KeyCode::End => drag_to_boundary(app, false),
        _ => {}
    }
}

/// One crossing up or down from the record's current position.
fn drag_step(app: &mut App, direction: i32) {
    let Some(dragged) = app.drag.dragged() else {
        return;
    };
    let len = app.store.len();
    if len == 0 {
        return;
    }
    let over = (dragged as i32 + direction).clamp(0, len as i32 - 1) as usize;
    apply_drag_over(app, over);
}

/// Jump the gesture straight to the top or bottom of the list.
fn drag_to_boundary(app: &mut App, to_top: bool) {
    if !app.drag.is_dragging() || app.store.is_empty() {
        return;
    }
    let over = if to_top { 0 } else { app.store.len() - 1 };
    apply_drag_over(app, over);
}

fn apply_drag_over(app: &mut App, over: usize) {
    match app.drag.drag_over(&mut app.store, over) {
        Ok(true) => app.cursor = over,
        Ok(false) => {}
        Err(e) => app.report_save_error(e),
    }
}
