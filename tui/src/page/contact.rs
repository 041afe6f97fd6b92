//! Contact section: the form panel.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use folio_core::{ContactField, ContactForm, EntranceTransition, FormFocus, Section};

use super::{heading, Backdrop, PageBuilder, PageContext};
use crate::theme::{
    ACCENT_DEEP, BUTTON_BG, ERROR_RED, INPUT_BG, PANEL_BG, PANEL_TEXT, PLACEHOLDER, TEXT_MUTED,
    TEXT_WHITE,
};
use crate::widgets::text;

const PANEL_WIDTH: usize = 56;

/// Rows the message box shows even when empty
const MESSAGE_ROWS: usize = 5;

const CURSOR: &str = "▌";

pub(super) fn render(page: &mut PageBuilder, ctx: &PageContext<'_>) -> Backdrop {
    let backdrop = Backdrop::Gradient;
    let outer = ctx.column().min(PANEL_WIDTH);

    let mut lines = heading(Section::Contact.title());
    lines.push(Line::default());
    lines.extend(
        text::card(
            panel_rows(ctx.form, ctx.editing, outer.saturating_sub(4)),
            outer,
            Style::default().fg(ACCENT_DEEP).bg(PANEL_BG),
            Style::default().bg(PANEL_BG),
        )
        .into_iter()
        .map(Line::centered),
    );

    let hint = if ctx.editing {
        "Tab / Shift-Tab: move · Enter: next / newline · Ctrl-S: send · Esc: done"
    } else {
        "Press Tab to fill in the form"
    };
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(hint, Style::default().fg(TEXT_MUTED))).centered());

    page.blank(2);
    page.faded(lines, ctx.progress(EntranceTransition::SECTION), backdrop.base());
    page.blank(2);
    backdrop
}

fn panel_rows(form: &ContactForm, editing: bool, inner: usize) -> Vec<Vec<Span<'static>>> {
    let mut rows = Vec::new();

    for field in ContactField::ALL {
        let focused = editing && form.focus() == FormFocus::Field(field);
        let label_style = if focused {
            Style::default().fg(ACCENT_DEEP).bg(PANEL_BG).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(PANEL_TEXT).bg(PANEL_BG).add_modifier(Modifier::BOLD)
        };
        let marker = if focused { "▸ " } else { "" };
        rows.push(vec![Span::styled(format!("{marker}{}", field.label()), label_style)]);

        rows.extend(input_rows(form.values().field(field), field, focused, inner));

        if let Some(message) = form.errors().get(field) {
            rows.push(vec![Span::styled(message, Style::default().fg(ERROR_RED).bg(PANEL_BG))]);
        }
        rows.push(Vec::new());
    }

    rows.push(submit_row(form, editing && form.focus() == FormFocus::Submit, inner));
    rows
}

/// The input box for one field, padded to the panel's inner width
fn input_rows(value: &str, field: ContactField, focused: bool, inner: usize) -> Vec<Vec<Span<'static>>> {
    let text_style = Style::default().fg(PANEL_TEXT).bg(INPUT_BG);
    let fill = Style::default().bg(INPUT_BG);
    // One column stays free for the cursor.
    let room = inner.saturating_sub(1);

    let mut rows: Vec<Vec<Span<'static>>> = if value.is_empty() {
        vec![vec![Span::styled(
            text::truncate(field.placeholder(), room),
            Style::default().fg(PLACEHOLDER).bg(INPUT_BG),
        )]]
    } else if field.is_multiline() {
        value
            .split('\n')
            .flat_map(|line| text::wrap(line, room))
            .map(|row| vec![Span::styled(row, text_style)])
            .collect()
    } else {
        vec![vec![Span::styled(text::tail(value, room), text_style)]]
    };

    if focused {
        let cursor = Span::styled(CURSOR, Style::default().fg(ACCENT_DEEP).bg(INPUT_BG));
        if value.is_empty() {
            rows[0].insert(0, cursor);
            rows[0][1].content = text::truncate(field.placeholder(), room.saturating_sub(1)).into();
        } else if let Some(last) = rows.last_mut() {
            last.push(cursor);
        }
    }

    if field.is_multiline() {
        while rows.len() < MESSAGE_ROWS {
            rows.push(Vec::new());
        }
    }

    rows.into_iter()
        .map(|row| text::pad_spans(row, inner, fill))
        .collect()
}

fn submit_row(form: &ContactForm, focused: bool, inner: usize) -> Vec<Span<'static>> {
    let label = if form.is_in_flight() {
        "Sending..."
    } else {
        "Send Message"
    };
    let bg = if focused { ACCENT_DEEP } else { BUTTON_BG };
    let style = Style::default().fg(TEXT_WHITE).bg(bg).add_modifier(Modifier::BOLD);

    let left = inner.saturating_sub(text::width(label)) / 2;
    let right = inner.saturating_sub(left + text::width(label));
    vec![
        Span::styled(" ".repeat(left), style),
        Span::styled(label, style),
        Span::styled(" ".repeat(right), style),
    ]
}
