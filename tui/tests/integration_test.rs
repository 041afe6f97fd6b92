//! Integration Tests for the Folio TUI
//!
//! Drive the app through its public surface (key events, app events, frames
//! drawn into a `TestBackend`) with a mock dispatcher standing in for the
//! email service.
//!
//! # Test Coverage
//!
//! 1. **Load Flow**: first frame hidden, transitions run after load
//! 2. **Navigation**: keys and clicks scroll sections into view
//! 3. **Contact Flow**: invalid input, slow dispatch, success and failure

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use folio_core::{
    ContactForm, DispatchError, EmailDispatcher, PageShell, TemplateParams, UiConfig,
};
use folio_tui::page::{render_page, PageContext};
use folio_tui::App;

// ============================================================================
// Mock Dispatcher
// ============================================================================

/// Mock email dispatcher with delay and error injection
struct MockDispatcher {
    calls: AtomicUsize,
    delay: Duration,
    fail: bool,
}

impl MockDispatcher {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            delay: Duration::ZERO,
            fail: false,
        }
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmailDispatcher for MockDispatcher {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn send(&self, _params: &TemplateParams) -> Result<(), DispatchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail {
            Err(DispatchError::Rejected {
                status: 500,
                body: "internal error".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn ui() -> UiConfig {
    UiConfig {
        frame_interval: Duration::from_millis(33),
        typing_speed: Duration::from_millis(80),
    }
}

fn terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).unwrap()
}

fn screen(terminal: &Terminal<TestBackend>) -> String {
    let buf = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((x, y)) {
                out.push_str(cell.symbol());
            }
        }
        out.push('\n');
    }
    out
}

fn key(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn ctrl(app: &mut App, c: char) {
    app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        key(app, KeyCode::Char(c));
    }
}

fn fill_form(app: &mut App) {
    key(app, KeyCode::Tab);
    type_text(app, "Ada");
    key(app, KeyCode::Tab);
    type_text(app, "ada@example.com");
    key(app, KeyCode::Tab);
    type_text(app, "Hello");
}

/// Tick and render until the smooth scroll settles
fn settle(app: &mut App, terminal: &mut Terminal<TestBackend>) {
    for _ in 0..200 {
        app.tick(Instant::now());
        if !app.viewport().is_scrolling() {
            break;
        }
    }
    app.render(terminal).unwrap();
}

// ============================================================================
// Load Flow
// ============================================================================

#[tokio::test]
async fn test_page_reveals_after_load() {
    let mut app = App::new(&ui(), Arc::new(MockDispatcher::new()), (90, 30));
    let mut term = terminal(90, 30);

    app.render(&mut term).unwrap();
    assert!(!app.shell().is_loaded());

    app.tick(Instant::now());
    assert!(app.shell().is_loaded());

    // Long after load every transition has finished
    let shell = app.shell();
    let form = ContactForm::new();
    let page = render_page(&PageContext {
        width: 90,
        height: 28,
        now: Instant::now() + Duration::from_secs(5),
        shell,
        headline: "Hey, I'm Arslan Asad".to_string(),
        tagline: None,
        form: &form,
        editing: false,
    });
    let ids: Vec<&str> = page.anchors.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, vec!["home", "skills", "projects", "contact"]);
}

#[tokio::test]
async fn test_unloaded_page_has_no_visible_text() {
    let shell = PageShell::new();
    let form = ContactForm::new();
    let page = render_page(&PageContext {
        width: 80,
        height: 24,
        now: Instant::now(),
        shell: &shell,
        headline: "Hey".to_string(),
        tagline: None,
        form: &form,
        editing: false,
    });

    // Before load every foreground above the footer rule equals its row background
    let is_footer_rule = |line: &&ratatui::text::Line<'_>| {
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        !text.is_empty() && text.chars().all(|c| c == '─')
    };
    let footer = page.lines.iter().position(|l| is_footer_rule(&l));
    assert!(footer.is_some());

    for line in page.lines.iter().take_while(|l| !is_footer_rule(l)) {
        for span in &line.spans {
            if let (Some(fg), Some(_)) = (span.style.fg, line.style.bg) {
                assert!(
                    fg == folio_tui::theme::PAGE_BLACK || fg == folio_tui::theme::GRADIENT_MID,
                    "span {:?} visible before load",
                    span.content
                );
            }
        }
    }
}

// ============================================================================
// Navigation
// ============================================================================

#[tokio::test]
async fn test_contact_key_brings_form_into_view() {
    let mut app = App::new(&ui(), Arc::new(MockDispatcher::new()), (90, 30));
    let mut term = terminal(90, 30);
    app.render(&mut term).unwrap();

    key(&mut app, KeyCode::Char('c'));
    settle(&mut app, &mut term);

    let shown = screen(&term);
    assert!(shown.contains("Contact Me"));
    assert!(shown.contains("Send Message"));
}

#[tokio::test]
async fn test_missing_section_is_ignored() {
    let mut app = App::new(&ui(), Arc::new(MockDispatcher::new()), (90, 30));
    let mut term = terminal(90, 30);
    app.render(&mut term).unwrap();

    key(&mut app, KeyCode::Char('x'));
    assert!(!app.viewport().is_scrolling());
    assert_eq!(app.viewport().offset(), 0);
}

// ============================================================================
// Contact Flow
// ============================================================================

#[tokio::test]
async fn test_invalid_form_shows_errors_and_sends_nothing() {
    let dispatcher = Arc::new(MockDispatcher::new());
    let mut app = App::new(&ui(), dispatcher.clone(), (90, 40));
    let mut term = terminal(90, 40);
    app.render(&mut term).unwrap();

    key(&mut app, KeyCode::Tab);
    key(&mut app, KeyCode::Tab);
    type_text(&mut app, "not-an-email");
    ctrl(&mut app, 's');
    settle(&mut app, &mut term);

    tokio::task::yield_now().await;
    assert_eq!(dispatcher.calls(), 0);
    assert_eq!(app.form().errors().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_slow_dispatch_ignores_repeat_submits() {
    let dispatcher = Arc::new(MockDispatcher::new().with_delay(Duration::from_secs(2)));
    let mut app = App::new(&ui(), dispatcher.clone(), (90, 30));

    fill_form(&mut app);
    ctrl(&mut app, 's');
    tokio::time::sleep(Duration::from_millis(500)).await;
    ctrl(&mut app, 's');
    ctrl(&mut app, 's');
    assert!(app.form().is_in_flight());

    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(dispatcher.calls(), 1);
}

#[tokio::test]
async fn test_failed_dispatch_keeps_form_and_warns() {
    let dispatcher = Arc::new(MockDispatcher::new().failing());
    let mut app = App::new(&ui(), dispatcher.clone(), (90, 30));
    let mut term = terminal(90, 30);

    fill_form(&mut app);
    ctrl(&mut app, 's');

    // Wait for the dispatch result by polling frames, like the event loop would
    let deadline = Instant::now() + Duration::from_secs(5);
    while app.form().is_in_flight() && Instant::now() < deadline {
        tokio::time::sleep(Duration::from_millis(5)).await;
        app.pump_events();
    }

    assert_eq!(dispatcher.calls(), 1);
    assert_eq!(app.form().values().name, "Ada");
    app.render(&mut term).unwrap();
    assert!(screen(&term).contains("Failed to send message."));
}
