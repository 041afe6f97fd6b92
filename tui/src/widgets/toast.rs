//! Toast
//!
//! A bordered notice for the last dispatch result.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use folio_core::{Notification, NotifyLevel};

use crate::theme::{ERROR_RED, NAV_BG, SUCCESS_GREEN, TEXT_WHITE};
use crate::widgets::text;

pub struct Toast<'a> {
    notification: &'a Notification,
}

impl<'a> Toast<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }

    /// Width and height the toast needs, capped at `max_width`
    pub fn size(notification: &Notification, max_width: u16) -> (u16, u16) {
        let w = text::width(&notification.message) as u16 + 4;
        (w.min(max_width), 3)
    }
}

impl Widget for Toast<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 5 || area.height < 3 {
            return;
        }

        let accent = match self.notification.level {
            NotifyLevel::Success => SUCCESS_GREEN,
            NotifyLevel::Error => ERROR_RED,
        };
        let border = Style::default().fg(accent).bg(NAV_BG);
        buf.set_style(area, Style::default().bg(NAV_BG));

        let rule = "─".repeat(area.width.saturating_sub(2) as usize);
        buf.set_string(area.x, area.y, format!("╭{rule}╮"), border);
        for y in (area.y + 1)..(area.y + area.height - 1) {
            buf.set_string(area.x, y, "│", border);
            buf.set_string(area.x + area.width - 1, y, "│", border);
        }
        buf.set_string(area.x, area.y + area.height - 1, format!("╰{rule}╯"), border);

        let message = text::truncate(&self.notification.message, area.width as usize - 4);
        buf.set_string(
            area.x + 2,
            area.y + 1,
            message,
            Style::default().fg(TEXT_WHITE).bg(NAV_BG).add_modifier(Modifier::BOLD),
        );
    }
}
