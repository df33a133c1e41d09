use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the task list content area
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.store.is_empty() {
        let empty = Paragraph::new(" No tasks — press a to add one")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    // Clamp cursor and adjust scroll to keep it visible
    app.clamp_cursor();
    let visible_height = area.height as usize;
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if visible_height > 0 && app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor - visible_height + 1;
    }

    let dragged = app.drag.dragged();
    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    for (i, task) in app
        .store
        .tasks()
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
    {
        let is_cursor = i == app.cursor;
        let is_dragged = dragged == Some(i);
        let row_bg = if is_cursor && app.mode != Mode::Insert {
            app.theme.selection_bg
        } else {
            bg
        };

        let marker = if is_dragged { " \u{21C5} " } else { "   " };
        let marker_style = Style::default().fg(app.theme.highlight).bg(row_bg);

        let checkbox = if task.completed { "[x] " } else { "[ ] " };
        let checkbox_style = if task.completed {
            Style::default().fg(app.theme.green).bg(row_bg)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };

        let label = format!(" {} ", task.category.label());
        let label_style = Style::default()
            .fg(app.theme.category_color(task.category))
            .bg(row_bg)
            .add_modifier(Modifier::BOLD);

        // marker + checkbox + text + two separating spaces + label
        let fixed = 3 + 4 + 2 + unicode::display_width(&label);
        let text_budget = width.saturating_sub(fixed);
        let text = unicode::truncate_to_width(&task.text, text_budget);
        let mut text_style = Style::default().fg(app.theme.text_bright).bg(row_bg);
        if task.completed {
            text_style = Style::default()
                .fg(app.theme.dim)
                .bg(row_bg)
                .add_modifier(Modifier::CROSSED_OUT);
        }

        let mut spans = vec![
            Span::styled(marker, marker_style),
            Span::styled(checkbox, checkbox_style),
            Span::styled(text.clone(), text_style),
            Span::styled("  ", Style::default().bg(row_bg)),
            Span::styled(label, label_style),
        ];

        // Pad the row so the selection background spans the full width
        let used = fixed + unicode::display_width(&text);
        if used < width {
            spans.push(Span::styled(
                " ".repeat(width - used),
                Style::default().bg(row_bg),
            ));
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
