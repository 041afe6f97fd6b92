//! Typewriter
//!
//! Reveals a string one character at a time at a fixed delay, with an
//! independently blinking cursor.
//!
//! Two timers drive a [`Typewriter`]:
//!
//! ```text
//! reveal task:  sleep(speed) -> append char -> sleep(speed) -> ... -> on_complete()
//! cursor task:  every 500ms  -> toggle cursor (until the typewriter is dropped)
//! ```
//!
//! Both tasks write into a `watch` channel that the render loop reads with
//! [`Typewriter::snapshot`]. Dropping the typewriter aborts both tasks.
//!
//! Changing props through [`Typewriter::update`] restarts the reveal from the
//! first character. The cursor task keeps its cadence across restarts.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Default delay between reveal ticks
pub const DEFAULT_SPEED: Duration = Duration::from_millis(100);

/// Cursor blink half-period
pub const CURSOR_BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Glyph drawn for the cursor
pub const CURSOR_GLYPH: char = '|';

/// Drawn in place of the cursor while it is blinked off
pub const CURSOR_GAP: char = ' ';

/// Callback fired once the whole text is revealed
pub type CompletionCallback = Box<dyn FnOnce() + Send + 'static>;

/// Inputs of a typewriter
pub struct TypewriterProps {
    /// Source text to reveal
    pub text: String,
    /// Delay per character
    pub speed: Duration,
    /// Fired exactly once when the reveal finishes
    pub on_complete: Option<CompletionCallback>,
    /// Whether [`Typewriter::display`] appends the blinking cursor
    pub show_cursor: bool,
}

impl TypewriterProps {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            speed: DEFAULT_SPEED,
            on_complete: None,
            show_cursor: true,
        }
    }

    /// Set the per-character delay in milliseconds (zero is clamped to 1ms)
    pub fn with_speed_ms(mut self, ms: u64) -> Self {
        self.speed = Duration::from_millis(ms.max(1));
        self
    }

    /// Set the per-character delay
    pub fn with_speed(mut self, speed: Duration) -> Self {
        self.speed = speed.max(Duration::from_millis(1));
        self
    }

    /// Register the completion callback
    pub fn on_complete(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn without_cursor(mut self) -> Self {
        self.show_cursor = false;
        self
    }
}

impl fmt::Debug for TypewriterProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypewriterProps")
            .field("text", &self.text)
            .field("speed", &self.speed)
            .field("on_complete", &self.on_complete.is_some())
            .field("show_cursor", &self.show_cursor)
            .finish()
    }
}

/// Progress of a reveal
///
/// `revealed_text` always holds the first `next_index` characters of the
/// source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationState {
    pub revealed_text: String,
    pub next_index: usize,
    pub cursor_visible: bool,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            revealed_text: String::new(),
            next_index: 0,
            cursor_visible: true,
        }
    }
}

/// Animation state tagged with the reveal run that owns it
#[derive(Debug, Default)]
struct Frame {
    generation: u64,
    state: AnimationState,
}

/// A running text-reveal animation
///
/// Must be created inside a tokio runtime.
pub struct Typewriter {
    frames: Arc<watch::Sender<Frame>>,
    char_count: usize,
    show_cursor: bool,
    generation: u64,
    reveal: Option<JoinHandle<()>>,
    cursor: JoinHandle<()>,
}

impl Typewriter {
    /// Start revealing `props.text`
    pub fn start(props: TypewriterProps) -> Self {
        let (tx, _rx) = watch::channel(Frame::default());
        let frames = Arc::new(tx);
        let cursor = tokio::spawn(blink_cursor(Arc::clone(&frames)));

        let mut typewriter = Self {
            frames,
            char_count: 0,
            show_cursor: props.show_cursor,
            generation: 0,
            reveal: None,
            cursor,
        };
        typewriter.run(props);
        typewriter
    }

    /// Replace the props, restarting the reveal from the first character
    pub fn update(&mut self, props: TypewriterProps) {
        if let Some(handle) = self.reveal.take() {
            handle.abort();
        }
        self.generation += 1;
        let generation = self.generation;
        self.frames.send_modify(|frame| {
            frame.generation = generation;
            frame.state.revealed_text.clear();
            frame.state.next_index = 0;
        });
        tracing::debug!(generation, "typewriter restarted");
        self.run(props);
    }

    fn run(&mut self, props: TypewriterProps) {
        let chars: Arc<[char]> = props.text.chars().collect();
        self.char_count = chars.len();
        self.show_cursor = props.show_cursor;

        if chars.is_empty() {
            // Nothing to reveal: no timer, completion fires right away.
            if let Some(callback) = props.on_complete {
                callback();
            }
            return;
        }

        self.reveal = Some(tokio::spawn(reveal(
            chars,
            props.speed,
            self.generation,
            Arc::clone(&self.frames),
            props.on_complete,
        )));
    }

    /// Copy of the current animation state
    pub fn snapshot(&self) -> AnimationState {
        self.frames.borrow().state.clone()
    }

    /// Text to draw: the revealed prefix plus the cursor.
    ///
    /// A blinked-off cursor still takes its column, so centered text holds
    /// still.
    pub fn display(&self) -> String {
        let frame = self.frames.borrow();
        let mut out = frame.state.revealed_text.clone();
        if self.show_cursor {
            out.push(if frame.state.cursor_visible {
                CURSOR_GLYPH
            } else {
                CURSOR_GAP
            });
        }
        out
    }

    /// Whether every character of the source has been revealed
    pub fn is_complete(&self) -> bool {
        self.frames.borrow().state.next_index >= self.char_count
    }

    /// Number of characters in the source text
    pub fn char_count(&self) -> usize {
        self.char_count
    }
}

impl Drop for Typewriter {
    fn drop(&mut self) {
        if let Some(handle) = self.reveal.take() {
            handle.abort();
        }
        self.cursor.abort();
    }
}

impl fmt::Debug for Typewriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Typewriter")
            .field("state", &self.snapshot())
            .field("char_count", &self.char_count)
            .field("generation", &self.generation)
            .finish()
    }
}

/// One reveal run. Each tick is armed only after the previous one fired.
async fn reveal(
    chars: Arc<[char]>,
    speed: Duration,
    generation: u64,
    frames: Arc<watch::Sender<Frame>>,
    on_complete: Option<CompletionCallback>,
) {
    for (index, &ch) in chars.iter().enumerate() {
        tokio::time::sleep(speed).await;

        let applied = frames.send_if_modified(|frame| {
            if frame.generation != generation || frame.state.next_index != index {
                return false;
            }
            frame.state.revealed_text.push(ch);
            frame.state.next_index += 1;
            true
        });

        // Superseded by a restart: the callback is dropped unfired.
        if !applied {
            return;
        }
    }

    tracing::trace!(generation, chars = chars.len(), "typewriter reveal complete");
    if let Some(callback) = on_complete {
        callback();
    }
}

async fn blink_cursor(frames: Arc<watch::Sender<Frame>>) {
    let mut interval =
        tokio::time::interval_at(Instant::now() + CURSOR_BLINK_INTERVAL, CURSOR_BLINK_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;
        frames.send_modify(|frame| {
            frame.state.cursor_visible = !frame.state.cursor_visible;
        });
    }
}
