//! Page Shell
//!
//! The page-level state shared by every section:
//!
//! - a one-way load flag (`NotLoaded -> Loaded`), flipped one frame after the
//!   first render, that drives the entrance transitions
//! - the list of sections and their anchor identifiers
//! - the viewport, which scrolls smoothly to a section when asked
//!
//! Entrance transitions are computed from the time elapsed since load, so a
//! renderer can ask for the progress of any block on any frame.

use std::time::{Duration, Instant};

/// Rows a sliding block travels during its entrance
pub const SLIDE_ROWS: u16 = 2;

/// Length of every entrance transition
pub const TRANSITION_DURATION: Duration = Duration::from_millis(1000);

// ============================================================================
// Load flag
// ============================================================================

/// The page's load phase. Only ever moves forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    NotLoaded,
    Loaded { at: Instant },
}

/// Page-level state owned by the app
#[derive(Debug)]
pub struct PageShell {
    phase: LoadPhase,
    show_second_line: bool,
}

impl Default for PageShell {
    fn default() -> Self {
        Self::new()
    }
}

impl PageShell {
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::NotLoaded,
            show_second_line: false,
        }
    }

    /// Flip to `Loaded` at `at`. Returns false if the page was already loaded.
    pub fn mark_loaded_at(&mut self, at: Instant) -> bool {
        match self.phase {
            LoadPhase::NotLoaded => {
                self.phase = LoadPhase::Loaded { at };
                tracing::debug!("page loaded, entrance transitions started");
                true
            }
            LoadPhase::Loaded { .. } => false,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.phase, LoadPhase::Loaded { .. })
    }

    /// Time since load, or `None` before the page is loaded
    pub fn elapsed_at(&self, now: Instant) -> Option<Duration> {
        match self.phase {
            LoadPhase::NotLoaded => None,
            LoadPhase::Loaded { at } => Some(now.saturating_duration_since(at)),
        }
    }

    /// Progress of `transition` at `now`, in `0.0..=1.0`
    pub fn progress(&self, transition: EntranceTransition, now: Instant) -> f32 {
        transition.progress(self.elapsed_at(now))
    }

    /// Reveal the second hero line (after the headline finishes typing)
    pub fn reveal_second_line(&mut self) {
        self.show_second_line = true;
    }

    pub fn shows_second_line(&self) -> bool {
        self.show_second_line
    }
}

// ============================================================================
// Entrance transitions
// ============================================================================

/// How a block enters the page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Fade in place
    Fade,
    /// Fade while sliding up into place
    FadeSlide,
}

/// A one-time hidden-to-visible transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntranceTransition {
    pub delay: Duration,
    pub duration: Duration,
    pub motion: Motion,
}

impl EntranceTransition {
    /// Hero headline block
    pub const HERO: Self = Self::new(Duration::ZERO, Motion::FadeSlide);
    /// Hero introduction paragraphs
    pub const HERO_INTRO: Self = Self::new(Duration::from_millis(500), Motion::FadeSlide);
    /// Hero action buttons and links
    pub const HERO_ACTIONS: Self = Self::new(Duration::from_millis(700), Motion::FadeSlide);
    /// Every other section
    pub const SECTION: Self = Self::new(Duration::ZERO, Motion::Fade);

    pub const fn new(delay: Duration, motion: Motion) -> Self {
        Self {
            delay,
            duration: TRANSITION_DURATION,
            motion,
        }
    }

    /// Eased progress given the time since load (`None` = not loaded)
    pub fn progress(&self, elapsed: Option<Duration>) -> f32 {
        let Some(elapsed) = elapsed else {
            return 0.0;
        };
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if running >= self.duration {
            return 1.0;
        }
        let t = running.as_secs_f32() / self.duration.as_secs_f32();
        ease_out_cubic(t)
    }

    /// Rows still to travel at `progress`
    pub fn row_offset(&self, progress: f32) -> u16 {
        match self.motion {
            Motion::Fade => 0,
            Motion::FadeSlide => {
                let remaining = (1.0 - progress.clamp(0.0, 1.0)) * SLIDE_ROWS as f32;
                remaining.round() as u16
            }
        }
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

// ============================================================================
// Sections
// ============================================================================

/// Sections of the page, top to bottom
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Skills,
    Tools,
    Projects,
    Contact,
    Footer,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Skills,
        Section::Tools,
        Section::Projects,
        Section::Contact,
        Section::Footer,
    ];

    /// Anchor identifier, for sections that can be navigated to
    pub fn id(&self) -> Option<&'static str> {
        match self {
            Section::Home => Some("home"),
            Section::Skills => Some("skills"),
            Section::Projects => Some("projects"),
            Section::Contact => Some("contact"),
            Section::Tools | Section::Footer => None,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == Some(id))
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Skills => "Skills I Have",
            Section::Tools => "Tools I Use",
            Section::Projects => "Projects",
            Section::Contact => "Contact Me",
            Section::Footer => "",
        }
    }
}

// ============================================================================
// Viewport
// ============================================================================

/// Vertical scroll position over the rendered page
#[derive(Debug, Default)]
pub struct Viewport {
    offset: u16,
    target: Option<u16>,
    anchors: Vec<(&'static str, u16)>,
    content_height: u16,
    height: u16,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where each section starts in the rendered page
    pub fn set_anchors(&mut self, anchors: impl IntoIterator<Item = (&'static str, u16)>) {
        self.anchors = anchors.into_iter().collect();
    }

    /// Update page and viewport heights, clamping the position
    pub fn set_dimensions(&mut self, content_height: u16, height: u16) {
        self.content_height = content_height;
        self.height = height;
        let max = self.max_offset();
        self.offset = self.offset.min(max);
        if let Some(target) = self.target.as_mut() {
            *target = (*target).min(max);
        }
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.height)
    }

    pub fn is_scrolling(&self) -> bool {
        self.target.is_some()
    }

    pub fn anchor(&self, id: &str) -> Option<u16> {
        self.anchors
            .iter()
            .find(|(anchor, _)| *anchor == id)
            .map(|(_, row)| *row)
    }

    /// Smoothly scroll the section `id` into view. Unknown ids are ignored.
    pub fn scroll_to_section(&mut self, id: &str) {
        let Some(row) = self.anchor(id) else {
            tracing::debug!(id, "scroll target not found");
            return;
        };
        let target = row.min(self.max_offset());
        tracing::debug!(id, target, "scrolling to section");
        self.target = Some(target);
    }

    /// Manual scroll; cancels any smooth scroll in progress
    pub fn scroll_by(&mut self, delta: i32) {
        self.target = None;
        let next = (self.offset as i32 + delta).clamp(0, self.max_offset() as i32);
        self.offset = next as u16;
    }

    /// Advance a smooth scroll by one frame
    pub fn step(&mut self) {
        let Some(target) = self.target else {
            return;
        };
        let distance = target.abs_diff(self.offset);
        let stride = (distance / 4).max(1);
        self.offset = if self.offset < target {
            (self.offset + stride).min(target)
        } else {
            self.offset.saturating_sub(stride).max(target)
        };
        if self.offset == target {
            self.target = None;
        }
    }

    /// Section whose anchor is the last one at or above the top row
    pub fn current_anchor(&self) -> Option<&'static str> {
        self.anchors
            .iter()
            .filter(|(_, row)| *row <= self.offset)
            .last()
            .map(|(id, _)| *id)
    }
}
