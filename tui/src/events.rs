//! App Events
//!
//! Messages from background tasks back to the event loop. Terminal input
//! arrives separately through crossterm's event stream.

use folio_core::DispatchError;

#[derive(Debug)]
pub enum AppEvent {
    /// The first hero line has finished typing
    HeadlineTyped,
    /// A contact-form dispatch has returned
    DispatchFinished(Result<(), DispatchError>),
}
