/*
[INPUT]:  TaskForm inputs, search input, current focus
[OUTPUT]: Create-task form grid and search box with cursor placement
[POS]:    TUI UI form rendering
[UPDATE]: Show placeholders for empty inputs
*/

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tui_input::Input;

use crate::app::FormField;
use crate::tui::app::{Focus, TuiApp};
use crate::tui::runtime::{border_style, focused_border_style};

pub(in crate::tui) fn draw_task_form(frame: &mut ratatui::Frame, area: Rect, app: &TuiApp) {
    let focused = app.focus == Focus::Form;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            focused_border_style()
        } else {
            border_style()
        })
        .title("Create New Task [Enter]");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(inner);

    let form = app.state.form();
    for (index, field) in FormField::ALL.iter().copied().enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[index / 2]);
        let cell = columns[index % 2];
        if cell.height < 2 {
            continue;
        }
        let active = focused && form.focus() == field;

        let label_style = if active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let label = Paragraph::new(Span::styled(field.label(), label_style));
        frame.render_widget(label, Rect::new(cell.x, cell.y, cell.width, 1));

        let input_area = Rect::new(cell.x, cell.y.saturating_add(1), cell.width.saturating_sub(1), 1);
        draw_input(
            frame,
            input_area,
            form.input(field),
            field.placeholder(),
            active,
        );
    }
}

pub(in crate::tui) fn draw_search(frame: &mut ratatui::Frame, area: Rect, app: &TuiApp) {
    let focused = app.focus == Focus::Search;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            focused_border_style()
        } else {
            border_style()
        })
        .title("Search [/]");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    draw_input(
        frame,
        inner,
        app.state.search_input(),
        "Search tasks...",
        focused,
    );
}

fn draw_input(
    frame: &mut ratatui::Frame,
    area: Rect,
    input: &Input,
    placeholder: &str,
    active: bool,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let width = area.width as usize;
    let scroll = input.visual_scroll(width);

    let line = if input.value().is_empty() {
        Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(input.value().to_string())
    };
    let paragraph = Paragraph::new(line).scroll((0, scroll as u16));
    frame.render_widget(paragraph, area);

    if active {
        let offset = input.visual_cursor().saturating_sub(scroll) as u16;
        frame.set_cursor_position(Position::new(area.x + offset.min(area.width - 1), area.y));
    }
}
