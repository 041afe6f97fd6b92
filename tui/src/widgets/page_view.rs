//! PageView Widget
//!
//! A borderless, scrollable view over pre-rendered page lines. The scroll
//! position lives in the core [`Viewport`], which this widget keeps in sync
//! with the page and area heights.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::StatefulWidget;

use folio_core::Viewport;

/// The visible slice of the page
pub struct PageView<'a> {
    lines: &'a [Line<'static>],
}

impl<'a> PageView<'a> {
    pub fn new(lines: &'a [Line<'static>]) -> Self {
        Self { lines }
    }
}

impl StatefulWidget for PageView<'_> {
    type State = Viewport;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let total = u16::try_from(self.lines.len()).unwrap_or(u16::MAX);
        state.set_dimensions(total, area.height);

        let visible = self
            .lines
            .iter()
            .skip(state.offset() as usize)
            .take(area.height as usize);

        for (i, line) in visible.enumerate() {
            let y = area.y + i as u16;
            let row = Rect::new(area.x, y, area.width, 1);
            buf.set_style(row, line.style);

            let line_width = u16::try_from(line.width()).unwrap_or(u16::MAX).min(area.width);
            let x = match line.alignment {
                Some(Alignment::Center) => area.x + (area.width - line_width) / 2,
                Some(Alignment::Right) => area.x + area.width - line_width,
                _ => area.x,
            };
            buf.set_line(x, y, line, area.x + area.width - x);
        }
    }
}
