/*
[INPUT]:  Last list-load error message
[OUTPUT]: Connection error banner with retry hint
[POS]:    TUI UI error banner
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub(in crate::tui) fn draw_error_banner(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    message: &str,
) {
    let red = Style::default().fg(Color::Red);
    let text = vec![
        Line::from(Span::styled(message.to_string(), red)),
        Line::from(vec![
            Span::styled("[F5]", Style::default().fg(Color::Yellow)),
            Span::raw(" Retry Connection"),
        ]),
    ];
    let banner = Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(red)
            .title(Span::styled(
                "Connection Error",
                red.add_modifier(Modifier::BOLD),
            )),
    );
    frame.render_widget(banner, area);
}
