//! Folio Core - headless state for the terminal portfolio
//!
//! Everything here is independent of the terminal toolkit. A surface (the
//! `folio-tui` crate) owns these values, feeds them input and draws them.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────── surface (ratatui) ───────────────────────────┐
//! │  key / mouse / resize        frame tick              dispatch results    │
//! └───────┬──────────────────────────┬─────────────────────────┬─────────────┘
//!         │                          │                         │
//! ┌───────┴──────────────────────────┴─────────────────────────┴─────────────┐
//! │  PageShell + Viewport     Typewriter (reveal + cursor tasks)             │
//! │  ContactForm ──begin_submit──> EmailDispatcher ──finish_submit──>        │
//! └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`Typewriter`]: text-reveal animation with a blinking cursor
//! - [`PageShell`]: one-way load flag driving the entrance transitions
//! - [`Viewport`]: smooth scroll-to-section over the rendered page
//! - [`ContactForm`]: field values, validation and the submit flow
//! - [`EmailDispatcher`] / [`EmailJsDispatcher`]: outbound email delivery
//! - [`FolioConfig`]: settings from file and environment

pub mod config;
pub mod contact;
pub mod content;
pub mod dispatch;
pub mod notification;
pub mod shell;
pub mod typewriter;

pub use config::{load_config, ConfigError, ConfigSource, EmailConfig, FolioConfig, UiConfig};
pub use contact::{
    ContactField, ContactForm, ContactFormValues, FormFocus, SubmitOutcome, TemplateParams,
    ValidationErrors,
};
pub use dispatch::{DispatchError, EmailDispatcher, EmailJsDispatcher};
pub use notification::{Notification, NotifyLevel};
pub use shell::{EntranceTransition, LoadPhase, Motion, PageShell, Section, Viewport};
pub use typewriter::{AnimationState, Typewriter, TypewriterProps};
