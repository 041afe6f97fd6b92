//! Folio TUI - the portfolio as a full-screen terminal app
//!
//! # Architecture
//!
//! - **Compositor**: Layered rendering with z-ordering (page under nav bar,
//!   status line and toast)
//! - **Page**: Every section rendered into one tall column with anchors
//! - **Widgets**: Page view, nav bar, toast, text helpers
//! - **App**: Event loop feeding the headless state in `folio-core`

pub mod app;
pub mod compositor;
pub mod events;
pub mod page;
pub mod theme;
pub mod widgets;

pub use app::{App, InputMode};
