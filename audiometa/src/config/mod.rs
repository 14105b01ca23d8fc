//! Various configuration options to control audiometa

mod global_options;
mod parse_options;

pub use global_options::{GlobalOptions, Id3v2Version, apply_global_options};
pub use parse_options::ParsingMode;

pub(crate) use global_options::global_options;
