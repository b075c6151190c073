/*
[INPUT]:  Last command output
[OUTPUT]: Command output dialog drawn over the main view
[POS]:    TUI UI modal rendering
[UPDATE]: Show the fallback text when the command printed nothing
*/

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::runtime::focused_border_style;

pub fn draw_output_modal(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, output: &str) {
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = output
        .lines()
        .map(|line| Line::from(line.to_string()))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" close"),
    ]));

    let dialog = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focused_border_style())
            .title("Command Output"),
    );
    frame.render_widget(dialog, area);
}
