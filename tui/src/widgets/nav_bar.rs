//! Navigation bar
//!
//! Brand on the left, section links on the right. The link under the top of
//! the viewport is highlighted.

use std::ops::Range;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use folio_core::content::{NavItem, NAV_ITEMS, PROFILE};

use crate::theme::{ACCENT, NAV_BG, TEXT_MUTED, TEXT_WHITE};
use crate::widgets::text;

const LINK_GAP: u16 = 3;

pub struct NavBar<'a> {
    active: Option<&'a str>,
}

impl<'a> NavBar<'a> {
    pub fn new(active: Option<&'a str>) -> Self {
        Self { active }
    }

    fn label(item: &NavItem) -> String {
        format!("{} {}", item.key, item.label)
    }

    /// Column range of each link for a bar `width` wide, right-aligned.
    ///
    /// Links that do not fit are dropped from the left.
    pub fn hit_ranges(width: u16) -> Vec<(Range<u16>, &'static str)> {
        let brand = text::width(PROFILE.brand) as u16 + 2;
        let mut ranges = Vec::new();
        let mut right = width.saturating_sub(1);

        for item in NAV_ITEMS.iter().rev() {
            let w = text::width(&Self::label(item)) as u16;
            let Some(start) = right.checked_sub(w) else {
                break;
            };
            if start < brand {
                break;
            }
            ranges.push((start..right, item.target));
            right = start.saturating_sub(LINK_GAP);
        }
        ranges.reverse();
        ranges
    }

    /// Section linked at column `x`; the brand links home
    pub fn target_at(width: u16, x: u16) -> Option<&'static str> {
        let brand_end = 1 + text::width(PROFILE.brand) as u16;
        if (1..brand_end).contains(&x) {
            return Some("home");
        }
        Self::hit_ranges(width)
            .into_iter()
            .find(|(range, _)| range.contains(&x))
            .map(|(_, target)| target)
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(NAV_BG));
        buf.set_string(
            area.x + 1,
            area.y,
            PROFILE.brand,
            Style::default().fg(TEXT_WHITE).add_modifier(Modifier::BOLD),
        );

        for (range, target) in Self::hit_ranges(area.width) {
            let Some(item) = NAV_ITEMS.iter().find(|i| i.target == target) else {
                continue;
            };
            let style = if self.active == Some(target) {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT_MUTED)
            };
            buf.set_string(area.x + range.start, area.y, Self::label(item), style);
        }
    }
}
