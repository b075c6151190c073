/*
[INPUT]:  Current tab, focus and execute setting
[OUTPUT]: Tab bar and hotkey footer
[POS]:    TUI UI shared chrome
[UPDATE]: Footer hints follow the focused panel
*/

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

use crate::tui::app::{Focus, Tab, TuiApp};
use crate::tui::runtime::{border_style, header_style};

pub(in crate::tui) fn draw_tabs(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    current_tab: Tab,
) {
    let titles = vec![Line::from("Tasks [F1]"), Line::from("Logs [F2]")];
    let selected = match current_tab {
        Tab::Tasks => 0,
        Tab::Logs => 1,
    };

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Task Manager"),
        )
        .highlight_style(header_style())
        .select(selected);

    frame.render_widget(tabs, area);
}

pub(in crate::tui) fn draw_footer(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &TuiApp,
) {
    let hints: Vec<(&str, &str)> = match (app.current_tab, app.focus) {
        (Tab::Logs, _) => vec![("Esc", "back"), ("q", "quit")],
        (Tab::Tasks, Focus::Form) => vec![
            ("Up/Down", "field"),
            ("Enter", "create"),
            ("Tab", "next panel"),
            ("Esc", "table"),
            ("F5", "reload"),
        ],
        (Tab::Tasks, Focus::Search) => vec![("type", "filter"), ("Enter", "table")],
        (Tab::Tasks, Focus::Table) => {
            let mut hints = vec![("j/k", "select"), ("d", "delete")];
            if app.state.execute_enabled() {
                hints.push(("x", "run"));
            }
            hints.extend([("F5/r", "reload"), ("/", "search"), ("n", "new"), ("q", "quit")]);
            hints
        }
    };

    let key_style = Style::default().fg(Color::Yellow);
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(format!("[{key}]"), key_style));
        spans.push(Span::raw(format!(" {action}  ")));
    }

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style()),
    );
    frame.render_widget(footer, area);
}
