//! # wordpack
//!
//! Decides how to pack named bit fields of mixed widths into fixed-size
//! transmission words, each starting with a constant-width header.
//!
//! Fields are sorted widest-first (stable), optionally reordered with swap and
//! insert directives, then placed first-fit. A field too wide for any single
//! word is split across consecutive words, most-significant bits first.
//!
//! ## Example
//!
//! ```
//! use wordpack::design::Design;
//! use wordpack::field::{Field, FieldCatalog};
//! use wordpack::params::PackingParameters;
//!
//! let catalog = FieldCatalog::new(vec![
//!     Field::new("time", 8),
//!     Field::new("ext_temp", 14),
//!     Field::new("int_temp", 12),
//! ])
//! .unwrap();
//! let params = PackingParameters::new(32, 4).unwrap();
//!
//! let layout = Design::new(catalog, params).pack().unwrap();
//! assert_eq!(layout.word_count(), 2);
//! assert_eq!(
//!     layout.report().lines()[1],
//!     "Bucket 2: (4, HEADER_FIELD) (8, time)"
//! );
//! ```

pub mod allocator;
pub mod design;
pub mod diagram;
pub mod errors;
pub mod field;
pub mod fragment;
pub mod layout;
pub mod params;
pub mod report;
pub mod sequencer;
#[cfg(feature = "serde")]
pub mod serde;
pub mod word;

pub use errors::{LayoutError, Result};
