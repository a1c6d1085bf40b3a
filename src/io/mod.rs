//! I/O module: line sources feeding the delimited-text reader
//!
//! The reader never touches files or decompression directly; it pulls lines
//! through the [`LineSource`] trait, which any `BufRead` satisfies.

mod line_source;

pub use line_source::LineSource;
