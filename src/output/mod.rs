//! User-facing output: the before/after preview and the terminal renderer.

pub mod preview;
pub mod terminal;

pub use preview::{Preview, truncate_line};
pub use terminal::{TerminalRenderer, WriteReport};
