/*
[INPUT]:  Crossterm key events
[OUTPUT]: Focus changes, text edits and task actions on TuiApp
[POS]:    TUI key routing
[UPDATE]: When keybindings change
*/

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tui_input::InputRequest;

use super::app::{Focus, Tab, TuiApp};

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub fn handle_key_event(app: &mut TuiApp, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    if app.state.list().output_visible() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            app.state.close_output();
        }
        return false;
    }

    match key.code {
        KeyCode::Tab => {
            app.next_focus();
            return false;
        }
        KeyCode::BackTab => {
            app.prev_focus();
            return false;
        }
        KeyCode::F(1) => {
            app.set_tab(Tab::Tasks);
            return false;
        }
        KeyCode::F(2) => {
            app.set_tab(Tab::Logs);
            return false;
        }
        KeyCode::F(5) => {
            app.state.fetch_tasks();
            return false;
        }
        _ => {}
    }

    if app.current_tab == Tab::Logs {
        return handle_logs_key(app, key);
    }

    match app.focus {
        Focus::Form => handle_form_key(app, key),
        Focus::Search => handle_search_key(app, key),
        Focus::Table => handle_table_key(app, key),
    }
}

fn handle_logs_key(app: &mut TuiApp, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => true,
        KeyCode::Esc | KeyCode::Char('1') => {
            app.set_tab(Tab::Tasks);
            false
        }
        _ => false,
    }
}

fn handle_form_key(app: &mut TuiApp, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up => app.state.form_mut().focus_prev(),
        KeyCode::Down => app.state.form_mut().focus_next(),
        KeyCode::Enter => {
            app.state.submit_form();
        }
        KeyCode::Esc => app.set_focus(Focus::Table),
        _ => {
            if let Some(request) = input_request(&key) {
                app.state.form_mut().edit(request);
            }
        }
    }
    false
}

fn handle_search_key(app: &mut TuiApp, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Down => app.set_focus(Focus::Table),
        _ => {
            if let Some(request) = input_request(&key) {
                app.state.edit_search(request);
            }
        }
    }
    false
}

fn handle_table_key(app: &mut TuiApp, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Up | KeyCode::Char('k') => app.state.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.state.move_selection(1),
        KeyCode::Char('d') | KeyCode::Delete => {
            if !app.state.delete_selected() {
                app.state.notifications_mut().warning("No task selected");
            }
        }
        KeyCode::Char('x') => {
            if app.state.execute_enabled() && !app.state.execute_selected() {
                app.state.notifications_mut().warning("No task selected");
            }
        }
        KeyCode::Char('r') => app.state.fetch_tasks(),
        KeyCode::Char('/') => app.set_focus(Focus::Search),
        KeyCode::Char('n') => app.set_focus(Focus::Form),
        KeyCode::Char('2') => app.set_tab(Tab::Logs),
        _ => {}
    }
    false
}

/// Map an editing key onto a text input request
fn input_request(key: &KeyEvent) -> Option<InputRequest> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('w') if ctrl => Some(InputRequest::DeletePrevWord),
        KeyCode::Char('u') if ctrl => Some(InputRequest::DeleteLine),
        KeyCode::Char('a') if ctrl => Some(InputRequest::GoToStart),
        KeyCode::Char('e') if ctrl => Some(InputRequest::GoToEnd),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(ch) => Some(InputRequest::InsertChar(ch)),
        KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
        KeyCode::Delete => Some(InputRequest::DeleteNextChar),
        KeyCode::Left => Some(InputRequest::GoToPrevChar),
        KeyCode::Right => Some(InputRequest::GoToNextChar),
        KeyCode::Home => Some(InputRequest::GoToStart),
        KeyCode::End => Some(InputRequest::GoToEnd),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use taskdeck_adapter::{ClientConfig, StatusCode, Task, TaskClient, TaskError};
    use tokio::sync::mpsc;
    use tokio_util::sync::CancellationToken;

    use super::*;
    use crate::app::{AppEvent, AppState, Dispatcher, FormField};
    use crate::logging::LogBuffer;

    fn offline_app(enable_execute: bool) -> TuiApp {
        let client = TaskClient::with_config(ClientConfig::default()).expect("client init");
        let (tx, _rx) = mpsc::unbounded_channel();
        let shutdown = CancellationToken::new();
        shutdown.cancel();
        let dispatcher = Dispatcher::new(Arc::new(client), tx, shutdown);
        TuiApp::new(AppState::new(dispatcher, enable_execute), LogBuffer::handle(16))
    }

    fn load(app: &mut TuiApp, tasks: Vec<Task>) {
        app.state.fetch_tasks();
        app.state.handle_event(AppEvent::TasksLoaded {
            generation: 1,
            result: Ok(tasks),
        });
    }

    fn task(id: &str, name: &str) -> Task {
        Task {
            id: id.to_string(),
            name: name.to_string(),
            owner: "alice".to_string(),
            command: "make".to_string(),
        }
    }

    fn press(app: &mut TuiApp, code: KeyCode) -> bool {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut TuiApp, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn typing_fills_focused_form_field() {
        let mut app = offline_app(false);
        type_text(&mut app, "42");
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "Build");
        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.state.form().value(FormField::Id), "42");
        assert_eq!(app.state.form().value(FormField::Name), "Buil");
    }

    #[test]
    fn q_types_in_form_but_quits_from_table() {
        let mut app = offline_app(false);
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.state.form().value(FormField::Id), "q");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, Focus::Table);
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut app = offline_app(false);
        let quit = handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(quit);
    }

    #[test]
    fn search_filters_table() {
        let mut app = offline_app(false);
        load(&mut app, vec![task("1", "Build"), task("2", "Test")]);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Search);
        type_text(&mut app, "TES");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.focus, Focus::Table);
        assert_eq!(app.state.search_query(), "TES");
        assert_eq!(app.state.selected_task().map(|t| t.id.as_str()), Some("2"));
    }

    #[test]
    fn incomplete_submit_warns() {
        let mut app = offline_app(false);
        type_text(&mut app, "1");
        press(&mut app, KeyCode::Enter);

        let latest = app.state.notifications().latest().expect("warning");
        assert_eq!(latest.message, "Task Name is required");
        assert_eq!(app.state.form().focus(), FormField::Name);
    }

    #[test]
    fn execute_key_is_inert_when_disabled() {
        let mut app = offline_app(false);
        load(&mut app, vec![task("1", "Build")]);
        app.set_focus(Focus::Table);

        press(&mut app, KeyCode::Char('x'));

        assert_eq!(app.state.list().executing(), None);
        assert!(app.state.notifications().is_empty());
    }

    #[test]
    fn execute_key_marks_row_when_enabled() {
        let mut app = offline_app(true);
        load(&mut app, vec![task("1", "Build")]);
        app.set_focus(Focus::Table);

        press(&mut app, KeyCode::Char('x'));

        assert!(app.state.list().is_executing("1"));
    }

    #[test]
    fn output_dialog_swallows_keys_until_closed() {
        let mut app = offline_app(true);
        app.state.handle_event(AppEvent::TaskExecuted {
            id: "1".to_string(),
            result: Ok("hello".to_string()),
        });
        assert!(app.state.list().output_visible());

        type_text(&mut app, "ab");
        assert_eq!(app.state.form().value(FormField::Id), "");

        press(&mut app, KeyCode::Esc);
        assert!(!app.state.list().output_visible());
    }

    #[test]
    fn retry_key_starts_reload() {
        let mut app = offline_app(false);
        app.set_focus(Focus::Table);
        press(&mut app, KeyCode::Char('r'));
        assert!(app.state.is_loading());
    }

    #[test]
    fn advertised_retry_key_reloads_from_initial_focus() {
        let mut app = offline_app(false);
        assert_eq!(app.focus, Focus::Form);
        app.state.fetch_tasks();
        app.state.handle_event(AppEvent::TasksLoaded {
            generation: 1,
            result: Err(TaskError::Server {
                status: StatusCode::SERVICE_UNAVAILABLE,
                message: "Failed to fetch tasks".to_string(),
            }),
        });
        assert!(!app.state.is_loading());

        press(&mut app, KeyCode::F(5));

        assert!(app.state.is_loading());
        assert_eq!(app.state.form().value(FormField::Id), "");
    }

    #[test]
    fn function_keys_switch_tabs() {
        let mut app = offline_app(false);
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.current_tab, Tab::Logs);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.current_tab, Tab::Tasks);
    }
}
