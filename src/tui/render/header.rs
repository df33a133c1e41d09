use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

const BAR_WIDTH: usize = 20;

/// Render the header: title row plus completion progress.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let title_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let mode_label = if app.store.dark_mode() {
        "dark"
    } else {
        "light"
    };

    let mut title_spans = vec![Span::styled(" tick", title_style)];
    let left_width = 5;
    let right_width = mode_label.len() + 1;
    if left_width + right_width < width {
        title_spans.push(Span::styled(
            " ".repeat(width - left_width - right_width),
            Style::default().bg(bg),
        ));
        title_spans.push(Span::styled(
            format!("{} ", mode_label),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let stats = app.store.stats();
    let progress_line = if stats.total == 0 {
        Line::from(Span::styled(
            " ".repeat(width),
            Style::default().bg(bg),
        ))
    } else {
        let percent = stats.percent();
        let filled = (percent / 100.0 * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        Line::from(vec![
            Span::styled(" ", Style::default().bg(bg)),
            Span::styled(
                "\u{2588}".repeat(filled),
                Style::default().fg(app.theme.green).bg(bg),
            ),
            Span::styled(
                "\u{2591}".repeat(BAR_WIDTH - filled),
                Style::default().fg(app.theme.dim).bg(bg),
            ),
            Span::styled(
                format!("  {} / {} done  {:.0}%", stats.completed, stats.total, percent),
                Style::default().fg(app.theme.text).bg(bg),
            ),
        ])
    };

    let paragraph = Paragraph::new(vec![Line::from(title_spans), progress_line])
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
