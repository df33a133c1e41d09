use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Navigate => {
            if let Some(ref message) = app.status_message {
                with_right_hint(
                    vec![Span::styled(
                        format!(" {}", message),
                        Style::default().fg(app.theme.red).bg(bg),
                    )],
                    "any key dismiss",
                    app,
                    width,
                )
            } else {
                with_right_hint(
                    Vec::new(),
                    "a add  space done  d delete  m move  t theme  ? help  q quit",
                    app,
                    width,
                )
            }
        }
        Mode::Insert => {
            let chip_style = Style::default()
                .fg(app.theme.category_color(app.input_category))
                .bg(bg);
            let input_style = Style::default().fg(app.theme.text_bright).bg(bg);
            let before = &app.input[..app.input_cursor];
            let after = &app.input[app.input_cursor..];
            let spans = vec![
                Span::styled(
                    format!(" [{}] ", app.input_category.label()),
                    chip_style,
                ),
                Span::styled("> ", Style::default().fg(app.theme.highlight).bg(bg)),
                Span::styled(before.to_string(), input_style),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
                Span::styled(after.to_string(), input_style),
            ];
            with_right_hint(spans, "Enter add  Tab category  Esc cancel", app, width)
        }
        Mode::Move => with_right_hint(
            vec![Span::styled(
                " MOVE",
                Style::default().fg(app.theme.highlight).bg(bg),
            )],
            "j/k step  g/G ends  Enter done",
            app,
            width,
        ),
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Pad `spans` and append a dim right-aligned hint when it fits.
fn with_right_hint<'a>(
    mut spans: Vec<Span<'a>>,
    hint: &'a str,
    app: &App,
    width: usize,
) -> Line<'a> {
    let bg = app.theme.background;
    let content_width: usize = spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum();
    let hint_width = unicode::display_width(hint) + 1;
    if content_width + hint_width < width {
        spans.push(Span::styled(
            " ".repeat(width - content_width - hint_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            format!("{} ", hint),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
    Line::from(spans)
}
