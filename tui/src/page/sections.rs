//! Static sections: skills, tools, projects, footer.
//!
//! These only fade in; none of them slide.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use folio_core::content::{PROFILE, PROJECTS, SKILLS, SOCIAL_LINKS, TOOL_CATEGORIES};
use folio_core::{EntranceTransition, Section};

use super::{heading, solid_black, Backdrop, PageBuilder, PageContext};
use crate::theme::{ACCENT, ACCENT_DEEP, BUTTON_BG, SEPARATOR, TEXT_MUTED, TEXT_WHITE};
use crate::widgets::text;

const CHIP_GAP: usize = 2;

/// Rows of padded chips, centered
fn chips(labels: &[String], column: usize, style: Style) -> Vec<Line<'static>> {
    let padded: Vec<String> = labels.iter().map(|l| format!(" {l} ")).collect();
    text::chip_rows(&padded, column, CHIP_GAP)
        .into_iter()
        .map(|row| {
            let mut spans = Vec::new();
            for (i, chip) in row.into_iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" ".repeat(CHIP_GAP)));
                }
                spans.push(Span::styled(chip, style));
            }
            Line::from(spans).centered()
        })
        .collect()
}

pub(super) fn skills(page: &mut PageBuilder, ctx: &PageContext<'_>) -> Backdrop {
    let backdrop = solid_black();
    let progress = ctx.progress(EntranceTransition::SECTION);

    let mut lines = heading(Section::Skills.title());
    lines.push(Line::default());
    let labels: Vec<String> = SKILLS.iter().map(|s| s.to_string()).collect();
    lines.extend(chips(
        &labels,
        ctx.column(),
        Style::default().fg(TEXT_WHITE).bg(BUTTON_BG),
    ));

    page.blank(2);
    page.faded(lines, progress, backdrop.base());
    page.blank(2);
    backdrop
}

pub(super) fn tools(page: &mut PageBuilder, ctx: &PageContext<'_>) -> Backdrop {
    let backdrop = solid_black();
    let progress = ctx.progress(EntranceTransition::SECTION);

    let mut lines = heading(Section::Tools.title());
    for category in TOOL_CATEGORIES {
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(
                category.name,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ))
            .centered(),
        );
        let labels: Vec<String> = category.tools.iter().map(|t| t.to_string()).collect();
        lines.extend(chips(&labels, ctx.column(), Style::default().fg(TEXT_MUTED).bg(BUTTON_BG)));
    }

    page.blank(1);
    page.faded(lines, progress, backdrop.base());
    page.blank(2);
    backdrop
}

pub(super) fn projects(page: &mut PageBuilder, ctx: &PageContext<'_>) -> Backdrop {
    let backdrop = solid_black();
    let progress = ctx.progress(EntranceTransition::SECTION);
    let outer = ctx.column();
    let inner = outer.saturating_sub(4);

    let border = Style::default().fg(ACCENT_DEEP);
    let fill = Style::default();

    let mut lines = heading(Section::Projects.title());
    for project in PROJECTS {
        lines.push(Line::default());

        let mut body = vec![vec![Span::styled(
            text::truncate(&format!("{} {}", project.icon, project.title), inner),
            Style::default().fg(TEXT_WHITE).add_modifier(Modifier::BOLD),
        )]];
        body.extend(
            text::wrap(project.description, inner)
                .into_iter()
                .map(|row| vec![Span::styled(row, Style::default().fg(TEXT_MUTED))]),
        );
        if let Some(repo) = project.repository {
            body.push(vec![Span::styled(
                text::truncate(&format!("↗ {repo}"), inner),
                Style::default().fg(ACCENT).add_modifier(Modifier::UNDERLINED),
            )]);
        }

        lines.extend(
            text::card(body, outer, border, fill)
                .into_iter()
                .map(Line::centered),
        );
    }

    page.blank(2);
    page.faded(lines, progress, backdrop.base());
    page.blank(2);
    backdrop
}

pub(super) fn footer(page: &mut PageBuilder, ctx: &PageContext<'_>) -> Backdrop {
    let backdrop = solid_black();
    let muted = Style::default().fg(TEXT_MUTED);
    let column = ctx.column();

    let mut lines = vec![
        Line::from(Span::styled("─".repeat(column), Style::default().fg(SEPARATOR))).centered(),
        Line::default(),
        Line::from(Span::styled(
            PROFILE.name,
            Style::default().fg(TEXT_WHITE).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(format!("📍 {}", PROFILE.location), muted)).centered(),
        Line::default(),
        Line::from(Span::styled(PROFILE.built_with, muted)).centered(),
        Line::default(),
    ];
    for social in SOCIAL_LINKS {
        lines.push(
            Line::from(vec![
                Span::styled(format!("{}: ", social.label), Style::default().fg(ACCENT)),
                Span::styled(text::truncate(social.url, column), muted),
            ])
            .centered(),
        );
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(PROFILE.copyright, muted)).centered());

    // No entrance transition: the footer is drawn as-is from the first frame.
    page.blank(1);
    for line in lines {
        page.push(line);
    }
    page.blank(1);
    backdrop
}
