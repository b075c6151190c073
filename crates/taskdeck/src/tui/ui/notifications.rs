/*
[INPUT]:  Active notifications
[OUTPUT]: Toast stack in the top-right corner
[POS]:    TUI UI notification overlay
*/

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::notify::{NotificationLevel, Notifications};

const MAX_TOAST_WIDTH: u16 = 48;
const TOAST_HEIGHT: u16 = 3;

pub(in crate::tui) fn draw_notifications(
    frame: &mut ratatui::Frame,
    area: Rect,
    notifications: &Notifications,
) {
    let mut y = area.y.saturating_add(1);
    for notification in notifications.iter() {
        if y.saturating_add(TOAST_HEIGHT) > area.bottom() {
            break;
        }
        let text_width = UnicodeWidthStr::width(notification.message.as_str()) as u16;
        let width = text_width
            .saturating_add(4)
            .min(MAX_TOAST_WIDTH)
            .min(area.width);
        let x = area.right().saturating_sub(width + 1).max(area.x);
        let toast_area = Rect::new(x, y, width, TOAST_HEIGHT);

        let (title, color) = match notification.level {
            NotificationLevel::Success => ("OK", Color::Green),
            NotificationLevel::Warning => ("Warning", Color::Yellow),
            NotificationLevel::Error => ("Error", Color::Red),
        };
        let toast = Paragraph::new(notification.message.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(title),
        );
        frame.render_widget(Clear, toast_area);
        frame.render_widget(toast, toast_area);
        y = y.saturating_add(TOAST_HEIGHT);
    }
}
