/*
[INPUT]:  Resolved configuration, log buffer, crossterm input, AppEvents from the dispatcher
[OUTPUT]: Ratatui-based TUI run loop and top-level rendering
[POS]:    TUI runtime loop and shared helpers
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
[UPDATE]: Deliver client results through the event channel instead of awaiting in key handlers
[UPDATE]: Cancel outstanding requests on exit
*/

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::Event as CrosstermEvent;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use taskdeck_adapter::TaskClient;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::app::{Tab, TuiApp};
use super::events::handle_key_event;
use super::terminal::TerminalGuard;
use super::ui::*;
use crate::app::{AppState, Dispatcher};
use crate::config::TaskdeckConfig;
use crate::logging::LogBufferHandle;

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);

pub(crate) fn border_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub(crate) fn focused_border_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Run the terminal UI until the user quits or `shutdown` is cancelled.
pub async fn run_tui(
    config: &TaskdeckConfig,
    log_buffer: LogBufferHandle,
    shutdown: CancellationToken,
) -> Result<()> {
    let client = TaskClient::with_config(config.client_config()).context("create task client")?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let dispatcher = Dispatcher::new(Arc::new(client), event_tx, shutdown.clone());

    let mut terminal = TerminalGuard::new()?;
    let (input_tx, mut input_rx) = mpsc::unbounded_channel();
    let input_shutdown = shutdown.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                match crossterm::event::read() {
                    Ok(event) => {
                        if input_tx.send(event).is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
        }
    });

    let mut app = TuiApp::new(AppState::new(dispatcher, config.enable_execute), log_buffer);
    info!(base_url = %config.base_url, "task manager started");
    app.state.fetch_tasks();

    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    let mut should_quit = false;

    while !should_quit {
        terminal.draw(|frame| draw_ui(frame, &mut app))?;

        tokio::select! {
            _ = tick.tick() => {
                app.state.notifications_mut().prune(Instant::now());
            }
            _ = shutdown.cancelled() => {
                should_quit = true;
            }
            Some(event) = event_rx.recv() => {
                app.state.handle_event(event);
            }
            maybe_input = input_rx.recv() => {
                match maybe_input {
                    Some(CrosstermEvent::Key(key)) => {
                        if handle_key_event(&mut app, key) {
                            should_quit = true;
                        }
                    }
                    Some(_) => {}
                    None => should_quit = true,
                }
            }
        }
    }

    shutdown.cancel();
    info!("task manager closed");
    Ok(())
}

pub fn draw_ui(frame: &mut ratatui::Frame, app: &mut TuiApp) {
    let area = frame.area();
    let banner_height = if app.state.error().is_some() { 4 } else { 0 };
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(area);

    draw_tabs(frame, layout[0], app.current_tab);

    match app.current_tab {
        Tab::Tasks => {
            let content = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(banner_height),
                    Constraint::Length(6),
                    Constraint::Length(3),
                    Constraint::Min(4),
                ])
                .split(layout[1]);

            if let Some(error) = app.state.error() {
                draw_error_banner(frame, content[0], error);
            }
            draw_task_form(frame, content[1], app);
            draw_search(frame, content[2], app);
            draw_task_table(frame, content[3], app);
        }
        Tab::Logs => {
            draw_logs(frame, layout[1], &app.log_buffer);
        }
    }

    draw_footer(frame, layout[2], app);
    draw_notifications(frame, area, app.state.notifications());

    if app.state.list().output_visible() {
        let modal_area = centered_rect(area, 60, 60);
        draw_output_modal(frame, modal_area, app.state.list().output_text());
    }
}

pub(crate) fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
