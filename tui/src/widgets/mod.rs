//! Widgets
//!
//! - [`PageView`]: the scrolling page behind everything else
//! - [`NavBar`]: fixed navigation strip at the top
//! - [`Toast`]: success / failure notice in the top-right corner
//! - [`text`]: width-aware wrapping, padding and card borders

pub mod nav_bar;
pub mod page_view;
pub mod text;
pub mod toast;

pub use nav_bar::NavBar;
pub use page_view::PageView;
pub use toast::Toast;
