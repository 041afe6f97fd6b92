//! Page Rendering
//!
//! Builds the whole portfolio as one tall column of styled lines. The app
//! keeps the result and shows a window of it through the viewport.
//!
//! Every frame the page is rebuilt from scratch: transitions, typewriters
//! and the contact form all change what the lines look like, but the row at
//! which each section starts only depends on the terminal size and the form
//! contents.

mod contact;
mod hero;
mod sections;

use std::time::Instant;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use folio_core::shell::SLIDE_ROWS;
use folio_core::{ContactForm, EntranceTransition, PageShell, Section};

use crate::theme::{self, ACCENT, GRADIENT_END, GRADIENT_MID, GRADIENT_START, PAGE_BLACK, TEXT_WHITE};

/// Widest any text column gets, however wide the terminal is
pub const MAX_COLUMN: usize = 76;

/// Everything the page needs to know to draw one frame
pub struct PageContext<'a> {
    pub width: u16,
    /// Height of the visible page area
    pub height: u16,
    pub now: Instant,
    pub shell: &'a PageShell,
    /// Current text of the first hero line
    pub headline: String,
    /// Current text of the second hero line, once it is shown
    pub tagline: Option<String>,
    pub form: &'a ContactForm,
    /// Whether keystrokes go to the form
    pub editing: bool,
}

impl PageContext<'_> {
    /// Width of the main text column
    pub fn column(&self) -> usize {
        (self.width as usize).saturating_sub(4).clamp(10, MAX_COLUMN)
    }

    pub fn progress(&self, transition: EntranceTransition) -> f32 {
        self.shell.progress(transition, self.now)
    }
}

/// The page as drawn for one frame
#[derive(Debug, Default)]
pub struct RenderedPage {
    pub lines: Vec<Line<'static>>,
    /// `(section id, first row)` for every section with an id
    pub anchors: Vec<(&'static str, u16)>,
}

impl RenderedPage {
    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }
}

/// Section background
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backdrop {
    Solid(Color),
    /// Deep-indigo diagonal gradient, approximated top to bottom
    Gradient,
}

impl Backdrop {
    /// Color content fades in from
    pub fn base(&self) -> Color {
        match self {
            Backdrop::Solid(c) => *c,
            Backdrop::Gradient => GRADIENT_MID,
        }
    }

    /// Background of `row` in a section `rows` tall
    pub fn at(&self, row: usize, rows: usize) -> Color {
        match self {
            Backdrop::Solid(c) => *c,
            Backdrop::Gradient => {
                let t = if rows > 1 {
                    row as f32 / (rows - 1) as f32
                } else {
                    0.0
                };
                if t < 0.5 {
                    theme::blend(GRADIENT_START, GRADIENT_MID, t * 2.0)
                } else {
                    theme::blend(GRADIENT_MID, GRADIENT_END, (t - 0.5) * 2.0)
                }
            }
        }
    }
}

/// Accumulates page lines section by section
#[derive(Default)]
pub struct PageBuilder {
    lines: Vec<Line<'static>>,
    anchors: Vec<(&'static str, u16)>,
    section_start: usize,
}

impl PageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn row(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    /// Start a section, recording its anchor if it has an id
    pub fn begin_section(&mut self, section: Section) {
        self.section_start = self.lines.len();
        if let Some(id) = section.id() {
            let row = self.row();
            self.anchors.push((id, row));
        }
    }

    /// Paint the background of every line since `begin_section`
    pub fn end_section(&mut self, backdrop: Backdrop) {
        let rows = self.lines.len() - self.section_start;
        for (i, line) in self.lines[self.section_start..].iter_mut().enumerate() {
            if line.style.bg.is_none() {
                line.style = line.style.bg(backdrop.at(i, rows));
            }
        }
    }

    pub fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    pub fn blank(&mut self, rows: usize) {
        for _ in 0..rows {
            self.lines.push(Line::default());
        }
    }

    /// Add `lines` as one entrance block.
    ///
    /// The block always takes `lines.len() + SLIDE_ROWS` rows; while sliding,
    /// the spare rows move from above the block to below it.
    pub fn block(&mut self, lines: Vec<Line<'static>>, transition: EntranceTransition, progress: f32, from: Color) {
        let offset = transition.row_offset(progress) as usize;
        self.blank(offset);
        self.lines
            .extend(lines.into_iter().map(|line| fade(line, from, progress)));
        self.blank(SLIDE_ROWS as usize - offset);
    }

    /// Add `lines` faded in from `from`, without reserving slide rows
    pub fn faded(&mut self, lines: Vec<Line<'static>>, progress: f32, from: Color) {
        self.lines
            .extend(lines.into_iter().map(|line| fade(line, from, progress)));
    }

    pub fn finish(self) -> RenderedPage {
        RenderedPage {
            lines: self.lines,
            anchors: self.anchors,
        }
    }
}

/// Blend every color of `line` from `from` toward its own value
fn fade(mut line: Line<'static>, from: Color, progress: f32) -> Line<'static> {
    if progress >= 1.0 {
        return line;
    }
    let fade_style = |style: Style| Style {
        fg: style.fg.map(|c| theme::blend(from, c, progress)),
        bg: style.bg.map(|c| theme::blend(from, c, progress)),
        ..style
    };
    line.style = fade_style(line.style);
    for span in line.spans.iter_mut() {
        span.style = fade_style(span.style);
    }
    line
}

/// Centered bold section heading with an accent rule underneath
pub fn heading(title: &'static str) -> Vec<Line<'static>> {
    let rule = "━".repeat(title.chars().count().min(12));
    vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(TEXT_WHITE).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(rule, Style::default().fg(ACCENT))).centered(),
    ]
}

/// Draw the whole page
pub fn render_page(ctx: &PageContext<'_>) -> RenderedPage {
    let mut page = PageBuilder::new();

    for section in Section::ALL {
        page.begin_section(section);
        let backdrop = match section {
            Section::Home => hero::render(&mut page, ctx),
            Section::Skills => sections::skills(&mut page, ctx),
            Section::Tools => sections::tools(&mut page, ctx),
            Section::Projects => sections::projects(&mut page, ctx),
            Section::Contact => contact::render(&mut page, ctx),
            Section::Footer => sections::footer(&mut page, ctx),
        };
        page.end_section(backdrop);
    }

    page.finish()
}

pub(crate) fn solid_black() -> Backdrop {
    Backdrop::Solid(PAGE_BLACK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::TEXT_MUTED;
    use crate::widgets::PageView;
    use folio_core::content::PROFILE;
    use folio_core::{ContactField, ContactFormValues, FormFocus, Typewriter, TypewriterProps, Viewport};
    use pretty_assertions::assert_eq;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::widgets::StatefulWidget;
    use std::time::Duration;

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn find_row(page: &RenderedPage, needle: &str) -> Option<usize> {
        page.lines.iter().position(|l| text_of(l).contains(needle))
    }

    fn context<'a>(shell: &'a PageShell, form: &'a ContactForm, now: Instant) -> PageContext<'a> {
        PageContext {
            width: 100,
            height: 30,
            now,
            shell,
            headline: "Hey, I'm Arslan Asad".to_string(),
            tagline: Some("A Software Engineer 💻|".to_string()),
            form,
            editing: false,
        }
    }

    #[test]
    fn test_anchors_in_page_order() {
        let shell = PageShell::new();
        let form = ContactForm::new();
        let page = render_page(&context(&shell, &form, Instant::now()));

        let ids: Vec<&str> = page.anchors.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec!["home", "skills", "projects", "contact"]);
        assert_eq!(page.anchors[0].1, 0);
        assert!(page.anchors.windows(2).all(|w| w[0].1 < w[1].1));
        assert!(page.anchors.iter().all(|(_, row)| *row < page.height()));
    }

    #[test]
    fn test_anchors_stable_across_transition() {
        let mut shell = PageShell::new();
        let form = ContactForm::new();
        let start = Instant::now();
        let before = render_page(&context(&shell, &form, start)).anchors;

        shell.mark_loaded_at(start);
        let during = render_page(&context(&shell, &form, start + Duration::from_millis(300))).anchors;
        let after = render_page(&context(&shell, &form, start + Duration::from_secs(3))).anchors;

        assert_eq!(before, during);
        assert_eq!(before, after);
    }

    #[test]
    fn test_hero_headline_slides_into_place() {
        let mut shell = PageShell::new();
        let form = ContactForm::new();
        let start = Instant::now();

        let hidden = render_page(&context(&shell, &form, start));
        shell.mark_loaded_at(start);
        let settled = render_page(&context(&shell, &form, start + Duration::from_secs(3)));

        let before = find_row(&hidden, "Hey, I'm Arslan Asad").unwrap();
        let after = find_row(&settled, "Hey, I'm Arslan Asad").unwrap();
        assert_eq!(before, after + SLIDE_ROWS as usize);
    }

    #[test]
    fn test_content_hidden_before_load() {
        let shell = PageShell::new();
        let form = ContactForm::new();
        let page = render_page(&context(&shell, &form, Instant::now()));

        let row = find_row(&page, "Skills I Have").unwrap();
        let span = &page.lines[row].spans[0];
        // Faded all the way to the black section background
        assert_eq!(span.style.fg, Some(PAGE_BLACK));
    }

    #[test]
    fn test_footer_visible_before_load() {
        let shell = PageShell::new();
        let form = ContactForm::new();
        let page = render_page(&context(&shell, &form, Instant::now()));

        let row = find_row(&page, PROFILE.copyright).unwrap();
        assert_eq!(page.lines[row].spans[0].style.fg, Some(TEXT_MUTED));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tagline_holds_column_across_cursor_blink() {
        let tagline = Typewriter::start(TypewriterProps::new(PROFILE.tagline).with_speed_ms(10));
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(tagline.is_complete());

        let on = tagline_column(tagline.display());
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(!tagline.snapshot().cursor_visible);
        let off = tagline_column(tagline.display());

        assert_eq!(on, off);
    }

    /// First drawn column of the tagline row at width 80
    fn tagline_column(tagline: String) -> u16 {
        let shell = PageShell::new();
        let form = ContactForm::new();
        let mut ctx = context(&shell, &form, Instant::now());
        ctx.width = 80;
        ctx.tagline = Some(tagline);
        let page = render_page(&ctx);

        let area = Rect::new(0, 0, 80, page.height());
        let mut buf = Buffer::empty(area);
        PageView::new(&page.lines).render(area, &mut buf, &mut Viewport::new());

        let y = find_row(&page, "Software Engineer").unwrap() as u16;
        (0..80)
            .find(|&x| buf.cell((x, y)).is_some_and(|c| c.symbol() != " "))
            .unwrap()
    }

    #[test]
    fn test_tagline_absent_until_revealed() {
        let shell = PageShell::new();
        let form = ContactForm::new();
        let mut ctx = context(&shell, &form, Instant::now());
        ctx.tagline = None;

        let page = render_page(&ctx);
        assert!(find_row(&page, "Software Engineer").is_none());
        assert!(find_row(&page, "Hey, I'm Arslan Asad").is_some());
    }

    #[test]
    fn test_every_line_has_a_background() {
        let shell = PageShell::new();
        let form = ContactForm::new();
        let page = render_page(&context(&shell, &form, Instant::now()));
        assert!(page.lines.iter().all(|l| l.style.bg.is_some()));
    }

    #[test]
    fn test_form_errors_render_inline() {
        let mut shell = PageShell::new();
        let start = Instant::now();
        shell.mark_loaded_at(start);
        let mut form = ContactForm::with_values(ContactFormValues::new("", "not-an-email", "Hi"));
        assert!(form.begin_submit().is_none());
        form.set_focus(FormFocus::Field(ContactField::Message));

        let page = render_page(&context(&shell, &form, start + Duration::from_secs(3)));

        let contact = page.anchors.iter().find(|(id, _)| *id == "contact").unwrap().1 as usize;
        let name_err = find_row(&page, "Name is required").unwrap();
        let email_err = find_row(&page, "Invalid email").unwrap();
        assert!(name_err > contact && email_err > name_err);
        assert!(find_row(&page, "Message is required").is_none());
    }

    #[test]
    fn test_gradient_runs_start_to_end() {
        assert_eq!(Backdrop::Gradient.at(0, 11), GRADIENT_START);
        assert_eq!(Backdrop::Gradient.at(5, 11), GRADIENT_MID);
        assert_eq!(Backdrop::Gradient.at(10, 11), GRADIENT_END);
    }
}
