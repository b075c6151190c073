/*
[INPUT]:  AppState table body, execution state, selection
[OUTPUT]: Task table rendered into Ratatui frame
[POS]:    TUI UI task table rendering
[UPDATE]: Loading and empty rows replace the data rows
[UPDATE]: Run action only when command execution is enabled
*/

use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

use crate::app::TableBody;
use crate::tui::app::{Focus, TuiApp};
use crate::tui::runtime::{border_style, focused_border_style, header_style};

pub(in crate::tui) fn draw_task_table(frame: &mut ratatui::Frame, area: Rect, app: &mut TuiApp) {
    let execute_enabled = app.state.execute_enabled();
    let (rows, message) = match app.state.table_body() {
        TableBody::Loading => (Vec::new(), Some("Loading tasks...")),
        TableBody::Empty => (Vec::new(), Some("No tasks found")),
        TableBody::Rows(tasks) => {
            let rows = tasks
                .into_iter()
                .map(|task| {
                    let mut actions = String::from("[d] Delete");
                    if execute_enabled {
                        if app.state.list().is_executing(&task.id) {
                            actions.push_str("  Running...");
                        } else {
                            actions.push_str("  [x] Run");
                        }
                    }
                    Row::new(vec![
                        Cell::from(task.id.clone()),
                        Cell::from(task.name.clone()),
                        Cell::from(task.owner.clone()),
                        Cell::from(task.command.clone()),
                        Cell::from(actions),
                    ])
                })
                .collect::<Vec<_>>();
            (rows, None)
        }
    };

    let header = Row::new(["ID", "Name", "Owner", "Command", "Actions"]).style(header_style());
    let widths = [
        Constraint::Length(10),
        Constraint::Percentage(20),
        Constraint::Percentage(15),
        Constraint::Min(16),
        Constraint::Length(24),
    ];
    let focused = app.focus == Focus::Table;
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if focused {
                    focused_border_style()
                } else {
                    border_style()
                })
                .title("Tasks"),
        )
        .row_highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    match message {
        None => frame.render_stateful_widget(table, area, app.state.list_mut().table_state_mut()),
        Some(text) => {
            frame.render_stateful_widget(table, area, &mut TableState::default());
            // below the border and header row
            let body = Rect::new(
                area.x.saturating_add(1),
                area.y.saturating_add(2),
                area.width.saturating_sub(2),
                area.height.saturating_sub(3),
            );
            if body.height > 0 {
                let placeholder = Paragraph::new(text)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::DarkGray));
                frame.render_widget(placeholder, body);
            }
        }
    }
}
