//! Terminal UI components
//!
//! Built with ratatui. Pure data-to-widgets rendering: nothing in here
//! touches the network or storage.

pub mod cards;
pub mod detail;
pub mod theme;

pub use theme::Palette;
