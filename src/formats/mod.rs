//! Tabular text format support.
//!
//! - [`delimited`]: the core streaming reader for single-character-delimited
//!   records (BED, VCF, and anything of that shape)
//! - [`vcf`]: structural-variant length derivation from the VCF INFO column
//! - [`fields`]: field-level parsing helpers (genomic coordinates)

pub mod delimited;
pub mod fields;
pub mod vcf;

// Re-export commonly used types
pub use delimited::{hash_comment, DelimTextReader, HeaderMatcher, HeaderState};
pub use vcf::{SV_LEN_NOT_FOUND, VCF_INFO_FIELD, VCF_POS_FIELD};
