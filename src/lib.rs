//! delimstream: streaming reader for delimited tabular text
//!
//! # Overview
//!
//! delimstream reads line-oriented, single-character-delimited formats
//! (BED/VCF-style files) one record at a time with constant memory: it skips
//! and accumulates the leading comment/header block, enforces an exact
//! field-count contract on every data line, and indexes delimiter positions
//! so fields come back as zero-copy slices.
//!
//! ## Key Features
//!
//! - **Streaming**: one record buffered at a time, any file size
//! - **Zero-copy fields**: accessors return slices of the reader's buffer,
//!   with the borrow checker enforcing their lifetime
//! - **Header accumulation**: the initial comment block is collected once;
//!   later comment-shaped lines are skipped as commented-out records
//! - **Fail-fast on corrupt input**: a wrong field count is a distinguished
//!   fatal error, not a silently skipped line
//! - **Transparent gzip**: compressed inputs via `flate2`
//!
//! ## Quick Start
//!
//! ```no_run
//! use delimstream::{abort_on_malformed, DelimTextReader};
//!
//! # fn main() -> delimstream::Result<()> {
//! // Six-field BED, tab-delimited
//! let mut reader = DelimTextReader::from_path("regions.bed", 6, b'\t')?;
//!
//! loop {
//!     match reader.read_entry() {
//!         Ok(true) => {
//!             let chrom = reader.field(0);
//!             let start = reader.field_coord(1)?;
//!             println!("{chrom}:{start}");
//!         }
//!         Ok(false) => break, // end of input
//!         Err(err) if err.is_fatal() => abort_on_malformed(&err),
//!         Err(err) => return Err(err),
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`formats`]: the delimited-record reader, VCF SVLEN derivation, and
//!   field parsing helpers
//! - [`io`]: the [`LineSource`] input abstraction
//! - [`error`]: error types and the fatal-diagnostic exit path

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod formats;
pub mod io;

// Re-export commonly used types
pub use error::{abort_on_malformed, DelimError, Result};
pub use formats::delimited::{DelimTextReader, HeaderState};
pub use formats::vcf::{SV_LEN_NOT_FOUND, VCF_INFO_FIELD, VCF_POS_FIELD};
pub use io::LineSource;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
