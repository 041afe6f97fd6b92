//! Main Application
//!
//! The App struct owns the portfolio's state and drives the TUI lifecycle:
//! - Event loop (keyboard, mouse, resize, frame tick)
//! - Background results (typewriter completion, email dispatch)
//! - Layered rendering through the compositor
//!
//! # Frame cycle
//!
//! 1. Wait for a terminal event, an [`AppEvent`] or the frame timer
//! 2. Tick: flip the load flag after the first frame, step smooth scrolling,
//!    expire the toast
//! 3. Rebuild the page and draw every layer

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{StatefulWidget, Widget};
use ratatui::Terminal;
use tokio::sync::mpsc;

use folio_core::content::{HERO_ACTIONS, NAV_ITEMS, PROFILE};
use folio_core::{
    ContactField, ContactForm, EmailDispatcher, FormFocus, PageShell, Typewriter, TypewriterProps,
    UiConfig, Viewport,
};

use crate::compositor::{Compositor, LayerId};
use crate::events::AppEvent;
use crate::page::{render_page, PageContext, RenderedPage};
use crate::theme::{ACCENT, NAV_BG, TEXT_MUTED};
use crate::widgets::{NavBar, PageView, Toast};

/// Rows moved per mouse-wheel notch
const WHEEL_ROWS: i32 = 3;

/// Where keystrokes go
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    /// Keys navigate and scroll the page
    Browse,
    /// Keys edit the contact form
    Form,
}

/// Main application state
pub struct App {
    // === Core State ===
    /// Is the app still running?
    running: bool,
    shell: PageShell,
    viewport: Viewport,
    /// First hero line, typed on start
    headline: Typewriter,
    /// Second hero line, started once the headline completes
    tagline: Option<Typewriter>,
    form: ContactForm,
    mode: InputMode,

    // === Background Work ===
    dispatcher: Arc<dyn EmailDispatcher>,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
    typing_speed: Duration,
    frame_interval: Duration,

    // === UI Components ===
    /// The layered compositor
    compositor: Compositor,
    /// Layer assignments
    layers: AppLayers,
    /// Page as drawn on the last frame
    page: RenderedPage,
    frames_drawn: u64,
    /// Terminal size
    size: (u16, u16),
}

/// Layer IDs for UI regions
struct AppLayers {
    page: LayerId,
    nav: LayerId,
    status: LayerId,
    toast: LayerId,
}

impl App {
    /// Create the app and start the headline typewriter.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(ui: &UiConfig, dispatcher: Arc<dyn EmailDispatcher>, size: (u16, u16)) -> Self {
        let area = Rect::new(0, 0, size.0, size.1);
        let mut compositor = Compositor::new(area);

        // Create layers with z-ordering
        let page = compositor.create_layer(page_bounds(area), 0);
        let nav = compositor.create_layer(Rect::new(0, 0, area.width, 1), 10);
        let status = compositor.create_layer(status_bounds(area), 10);
        let toast = compositor.create_layer(Rect::new(0, 0, 0, 0), 50);
        compositor.set_visible(toast, false);

        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let headline_tx = events_tx.clone();
        let headline = Typewriter::start(
            TypewriterProps::new(PROFILE.headline)
                .with_speed(ui.typing_speed)
                .without_cursor()
                .on_complete(move || {
                    let _ = headline_tx.send(AppEvent::HeadlineTyped);
                }),
        );

        tracing::info!(dispatcher = dispatcher.name(), width = size.0, height = size.1, "app started");

        Self {
            running: true,
            shell: PageShell::new(),
            viewport: Viewport::new(),
            headline,
            tagline: None,
            form: ContactForm::new(),
            mode: InputMode::Browse,
            dispatcher,
            events_tx,
            events_rx,
            typing_speed: ui.typing_speed,
            frame_interval: ui.frame_interval,
            compositor,
            layers: AppLayers {
                page,
                nav,
                status,
                toast,
            },
            page: RenderedPage::default(),
            frames_drawn: 0,
            size,
        }
    }

    /// Main event loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        // Create async event stream for non-blocking terminal events
        let mut event_stream = EventStream::new();

        // Render initial frame immediately; the load flag flips on the next tick
        self.render(terminal)?;

        while self.running {
            tokio::select! {
                biased;

                // Terminal events - highest priority
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_terminal_event(event),
                    Some(Err(e)) => tracing::warn!(error = %e, "terminal event error"),
                    None => self.running = false,
                },

                // Results from background tasks
                Some(event) = self.events_rx.recv() => self.handle_app_event(event),

                // Frame tick
                _ = tokio::time::sleep(self.frame_interval) => {}
            }

            self.pump_events();
            self.tick(Instant::now());
            self.render(terminal)?;
        }

        tracing::info!(frames = self.frames_drawn, "app stopped");
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn shell(&self) -> &PageShell {
        &self.shell
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    fn handle_terminal_event(&mut self, event: Event) {
        match event {
            // Only handle Press events (not Release or Repeat)
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(w, h) => self.handle_resize(w, h),
            _ => {}
        }
    }

    /// Apply a message from a background task
    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::HeadlineTyped => {
                self.shell.reveal_second_line();
                if self.tagline.is_none() {
                    self.tagline = Some(Typewriter::start(
                        TypewriterProps::new(PROFILE.tagline).with_speed(self.typing_speed),
                    ));
                }
            }
            AppEvent::DispatchFinished(result) => {
                let outcome = self.form.finish_submit(result, Instant::now());
                tracing::debug!(?outcome, "dispatch finished");
            }
        }
    }

    /// Apply every queued app event without waiting; returns how many ran
    pub fn pump_events(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_app_event(event);
            handled += 1;
        }
        handled
    }

    /// Per-frame state updates
    pub fn tick(&mut self, now: Instant) {
        // Loaded one frame after the first paint, so the hidden state is seen first
        if self.frames_drawn > 0 && !self.shell.is_loaded() {
            self.shell.mark_loaded_at(now);
        }
        self.viewport.step();
        self.form.expire_notification(now);
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        match self.mode {
            InputMode::Browse => self.handle_browse_key(key),
            InputMode::Form => self.handle_form_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        let page_rows = i32::from(self.viewport.height().saturating_sub(1).max(1));

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,

            // Section shortcuts
            KeyCode::Char(c) if navigation_target(c).is_some() => {
                if let Some(target) = navigation_target(c) {
                    self.viewport.scroll_to_section(target);
                }
            }

            // Manual scrolling
            KeyCode::Up | KeyCode::Char('k') => self.viewport.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.viewport.scroll_by(1),
            KeyCode::PageUp => self.viewport.scroll_by(-page_rows),
            KeyCode::PageDown | KeyCode::Char(' ') => self.viewport.scroll_by(page_rows),
            KeyCode::Home => self.viewport.scroll_by(-i32::from(u16::MAX)),
            KeyCode::End => self.viewport.scroll_by(i32::from(u16::MAX)),

            // Jump into the form
            KeyCode::Tab => {
                self.mode = InputMode::Form;
                self.form.set_focus(FormFocus::Field(ContactField::Name));
                self.viewport.scroll_to_section("contact");
            }

            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.mode = InputMode::Browse,
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Tab => self.form.focus_next(),
            KeyCode::BackTab => self.form.focus_prev(),
            KeyCode::Enter if self.form.focus() == FormFocus::Submit => self.submit(),
            KeyCode::Enter => self.form.enter(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.insert_char(c)
            }
            KeyCode::PageUp => self.viewport.scroll_by(-i32::from(self.viewport.height() / 2)),
            KeyCode::PageDown => self.viewport.scroll_by(i32::from(self.viewport.height() / 2)),
            _ => {}
        }
    }

    /// Validate and spawn the dispatch; the result comes back as an AppEvent
    fn submit(&mut self) {
        let Some(params) = self.form.begin_submit() else {
            return;
        };

        let dispatcher = Arc::clone(&self.dispatcher);
        let tx = self.events_tx.clone();
        tracing::debug!(dispatcher = dispatcher.name(), "dispatching contact message");
        tokio::spawn(async move {
            let result = dispatcher.send(&params).await;
            let _ = tx.send(AppEvent::DispatchFinished(result));
        });
    }

    /// Handle mouse input
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.viewport.scroll_by(-WHEEL_ROWS),
            MouseEventKind::ScrollDown => self.viewport.scroll_by(WHEEL_ROWS),
            MouseEventKind::Down(MouseButton::Left) => {
                if self.compositor.layer_at(mouse.column, mouse.row) == Some(self.layers.nav) {
                    if let Some(target) = NavBar::target_at(self.size.0, mouse.column) {
                        self.viewport.scroll_to_section(target);
                    }
                }
            }
            _ => {}
        }
    }

    /// Handle terminal resize
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        let area = Rect::new(0, 0, width, height);

        self.compositor.resize(area);
        self.compositor.place_layer(self.layers.page, page_bounds(area));
        self.compositor
            .place_layer(self.layers.nav, Rect::new(0, 0, width, 1));
        self.compositor
            .place_layer(self.layers.status, status_bounds(area));
    }

    /// Render the UI
    pub fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let now = Instant::now();
        self.render_page(now);
        self.render_nav();
        self.render_status();
        self.render_toast(now);

        terminal.draw(|frame| {
            let output = self.compositor.composite();
            let area = frame.area();
            let buf = frame.buffer_mut();

            for y in 0..area.height.min(output.area.height) {
                for x in 0..area.width.min(output.area.width) {
                    if let Some(cell) = output.cell((x, y)) {
                        buf[(x, y)] = cell.clone();
                    }
                }
            }
        })?;

        self.frames_drawn += 1;
        Ok(())
    }

    /// Rebuild the page and draw the visible part of it
    fn render_page(&mut self, now: Instant) {
        let Some(bounds) = self.compositor.bounds(self.layers.page) else {
            return;
        };

        let tagline = if self.shell.shows_second_line() {
            self.tagline.as_ref().map(Typewriter::display)
        } else {
            None
        };
        let ctx = PageContext {
            width: bounds.width,
            height: bounds.height,
            now,
            shell: &self.shell,
            headline: self.headline.display(),
            tagline,
            form: &self.form,
            editing: self.mode == InputMode::Form,
        };
        self.page = render_page(&ctx);
        self.viewport.set_anchors(self.page.anchors.iter().copied());

        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.page) {
            buf.reset();
            let area = buf.area;
            PageView::new(&self.page.lines).render(area, buf, &mut self.viewport);
        }
    }

    /// Render navigation layer
    fn render_nav(&mut self) {
        let active = self.viewport.current_anchor();
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.nav) {
            buf.reset();
            let area = buf.area;
            NavBar::new(active).render(area, buf);
        }
    }

    /// Render status bar
    fn render_status(&mut self) {
        let help = match self.mode {
            InputMode::Browse => " 1-4 jump · c contact · p projects · ↑↓ PgUp/PgDn scroll · Tab form · q quit",
            InputMode::Form => " Editing contact form · Ctrl-S send · Esc done",
        };
        let sending = self.form.is_in_flight();

        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.status) {
            buf.reset();
            let area = buf.area;
            buf.set_style(area, Style::default().bg(NAV_BG));
            buf.set_string(area.x, area.y, help, Style::default().fg(TEXT_MUTED).bg(NAV_BG));

            if sending {
                let label = "Sending... ";
                let x = area.width.saturating_sub(label.len() as u16);
                buf.set_string(x, area.y, label, Style::default().fg(ACCENT).bg(NAV_BG));
            }
        }
    }

    /// Render the toast layer, or hide it when there is nothing to show
    fn render_toast(&mut self, now: Instant) {
        let Some(note) = self.form.notification(now) else {
            self.compositor.set_visible(self.layers.toast, false);
            return;
        };

        let (w, h) = Toast::size(note, self.size.0.saturating_sub(2));
        let bounds = Rect::new(self.size.0.saturating_sub(w + 1), 2, w, h);
        self.compositor.place_layer(self.layers.toast, bounds);
        self.compositor.set_visible(self.layers.toast, true);

        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.toast) {
            buf.reset();
            let area = buf.area;
            Toast::new(note).render(area, buf);
        }
    }
}

/// Section a navigation or call-to-action key jumps to
fn navigation_target(key: char) -> Option<&'static str> {
    NAV_ITEMS
        .iter()
        .chain(HERO_ACTIONS)
        .find(|item| item.key == key)
        .map(|item| item.target)
}

/// Page area between the nav bar and the status line
fn page_bounds(area: Rect) -> Rect {
    Rect::new(0, 1, area.width, area.height.saturating_sub(2))
}

fn status_bounds(area: Rect) -> Rect {
    Rect::new(0, area.height.saturating_sub(1), area.width, 1)
}
