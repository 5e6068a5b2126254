//! JSON-deserializable design description.
//!
//! These types describe a packing session as it is written in a design file
//! and are converted into core `wordpack` types with `Design::try_from`.
//!
//! ```json
//! {
//!   "capacity": 32,
//!   "header_width": 4,
//!   "fields": [
//!     { "name": "time", "width": 8, "type": 5 },
//!     { "name": "external temp", "width": 14 }
//!   ],
//!   "reorder": { "swap_first": true, "swaps": [[0, 1]], "inserts": [] }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Top-level design: word parameters, fields and optional reordering.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DesignDef {
    /// Bits per word.
    pub capacity: usize,
    /// Bits reserved at the start of every word.
    #[serde(default)]
    pub header_width: usize,
    /// Fields in catalog order.
    pub fields: Vec<FieldDef>,
    #[serde(default)]
    pub reorder: Option<ReorderDef>,
}

/// A single catalog entry.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FieldDef {
    pub name: String,
    /// Width in bits.
    pub width: usize,
    /// Diagram color group; ignored by the allocator.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<u32>,
}

/// Swap and insert directives applied after the width sort.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReorderDef {
    #[serde(default = "default_swap_first")]
    pub swap_first: bool,
    /// `[i, j]` pairs.
    #[serde(default)]
    pub swaps: Vec<(usize, usize)>,
    /// `[source, dest]` pairs.
    #[serde(default)]
    pub inserts: Vec<(usize, usize)>,
}

fn default_swap_first() -> bool {
    true
}

impl From<ReorderDef> for crate::sequencer::Sequencer {
    fn from(value: ReorderDef) -> Self {
        crate::sequencer::Sequencer {
            swaps: value.swaps,
            inserts: value.inserts,
            swap_first: value.swap_first,
        }
    }
}
