//! Hero section: typed headline, introduction, call-to-action row.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use folio_core::content::{HERO_ACTIONS, PROFILE, SOCIAL_LINKS};
use folio_core::shell::SLIDE_ROWS;
use folio_core::EntranceTransition;

use super::{Backdrop, PageBuilder, PageContext};
use crate::theme::{ACCENT, BUTTON_BG, TEXT_MUTED, TEXT_WHITE};
use crate::widgets::text;

const BLOCK_GAP: usize = 1;

pub(super) fn render(page: &mut PageBuilder, ctx: &PageContext<'_>) -> Backdrop {
    let backdrop = Backdrop::Gradient;
    let column = ctx.column();

    let title = Style::default().fg(TEXT_WHITE).add_modifier(Modifier::BOLD);
    let mut headline = vec![Line::from(Span::styled(ctx.headline.clone(), title)).centered()];
    // The second line keeps its row even before it appears.
    headline.push(match &ctx.tagline {
        Some(tagline) => Line::from(Span::styled(tagline.clone(), title)).centered(),
        None => Line::default(),
    });

    let mut intro = Vec::new();
    for (i, paragraph) in PROFILE.intro.iter().enumerate() {
        if i > 0 {
            intro.push(Line::default());
        }
        let style = Style::default().fg(TEXT_WHITE);
        intro.extend(
            text::wrap(paragraph, column)
                .into_iter()
                .map(|row| Line::from(Span::styled(row, style)).centered()),
        );
    }

    let actions = action_rows(column);

    let content = [&headline, &intro, &actions]
        .iter()
        .map(|block| block.len() + SLIDE_ROWS as usize)
        .sum::<usize>()
        + 2 * BLOCK_GAP;
    let free = (ctx.height as usize).saturating_sub(content);
    let top = (free / 2).max(1);

    page.blank(top);
    page.block(
        headline,
        EntranceTransition::HERO,
        ctx.progress(EntranceTransition::HERO),
        backdrop.base(),
    );
    page.blank(BLOCK_GAP);
    page.block(
        intro,
        EntranceTransition::HERO_INTRO,
        ctx.progress(EntranceTransition::HERO_INTRO),
        backdrop.base(),
    );
    page.blank(BLOCK_GAP);
    page.block(
        actions,
        EntranceTransition::HERO_ACTIONS,
        ctx.progress(EntranceTransition::HERO_ACTIONS),
        backdrop.base(),
    );
    page.blank(free.saturating_sub(top).max(1));

    backdrop
}

/// Buttons, then social links; one row if it fits, stacked otherwise
fn action_rows(column: usize) -> Vec<Line<'static>> {
    let button = Style::default()
        .fg(TEXT_WHITE)
        .bg(BUTTON_BG)
        .add_modifier(Modifier::BOLD);
    let hint = Style::default().fg(TEXT_MUTED);
    let link = Style::default().fg(ACCENT).add_modifier(Modifier::UNDERLINED);

    let mut groups: Vec<Vec<Span<'static>>> = HERO_ACTIONS
        .iter()
        .map(|action| {
            vec![
                Span::styled(format!(" {} ", action.label), button),
                Span::styled(format!(" [{}]", action.key), hint),
            ]
        })
        .collect();

    let mut socials = Vec::new();
    for (i, social) in SOCIAL_LINKS.iter().enumerate() {
        if i > 0 {
            socials.push(Span::raw("  "));
        }
        socials.push(Span::styled(social.label, link));
    }
    groups.push(socials);

    let group_width = |g: &Vec<Span<'static>>| g.iter().map(|s| s.width()).sum::<usize>();
    let one_row = groups.iter().map(group_width).sum::<usize>() + 3 * (groups.len() - 1);

    if one_row <= column {
        let mut spans = Vec::new();
        for (i, group) in groups.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", hint));
            }
            spans.extend(group);
        }
        vec![Line::from(spans).centered()]
    } else {
        groups
            .into_iter()
            .map(|group| Line::from(group).centered())
            .collect()
    }
}
