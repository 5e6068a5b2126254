//! The portion of a field placed in one word.

/// Name of the synthetic pseudo-field that opens every word.
pub const HEADER_NAME: &str = "HEADER_FIELD";

/// `width` bits of `field_name`, starting `offset_bits` below the field's MSB.
///
/// Split fields are emitted most-significant part first: the fragment in the
/// earliest word has offset 0, and each later fragment continues where the
/// previous one stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub field_name: String,
    pub width: usize,
    pub offset_bits: usize,
}

impl Fragment {
    pub fn new(field_name: impl Into<String>, width: usize) -> Self {
        Fragment {
            field_name: field_name.into(),
            width,
            offset_bits: 0,
        }
    }

    pub fn new_with_offset(field_name: impl Into<String>, width: usize, offset_bits: usize) -> Self {
        Fragment {
            field_name: field_name.into(),
            width,
            offset_bits,
        }
    }

    pub fn header(width: usize) -> Self {
        Fragment::new(HEADER_NAME, width)
    }

    pub fn is_header(&self) -> bool {
        self.field_name == HEADER_NAME
    }

    /// Offset just past this fragment within its field.
    pub fn end_bits(&self) -> usize {
        self.offset_bits + self.width
    }
}
