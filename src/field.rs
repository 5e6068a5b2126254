//! Named bit fields and the ordered catalog they are declared in.

use std::collections::BTreeSet;

use crate::{
    errors::{FieldIssue, LayoutError, Result},
    fragment::HEADER_NAME,
};

/// A single named value to be transmitted, e.g. a temperature or a GPS axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Unique within a catalog.
    pub name: String,
    /// Declared width in bits.
    pub width: usize,
    /// Presentation tag passed through to the diagram renderer (color group).
    pub kind: Option<u32>,
}

impl Field {
    pub fn new(name: impl Into<String>, width: usize) -> Self {
        Field {
            name: name.into(),
            width,
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: u32) -> Self {
        self.kind = Some(kind);
        self
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::FieldDef> for Field {
    fn from(value: crate::serde::FieldDef) -> Self {
        Field {
            name: value.name,
            width: value.width,
            kind: value.kind,
        }
    }
}

/// Ordered, validated set of fields.
///
/// Catalog order is the tie-break key when fields share a width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldCatalog {
    fields: Vec<Field>,
}

impl FieldCatalog {
    /// Validates `fields` and keeps them in the given order.
    ///
    /// Rejects zero widths, empty or reserved names and duplicate names.
    pub fn new(fields: Vec<Field>) -> Result<Self> {
        let mut seen = BTreeSet::new();

        for field in &fields {
            let issue = if field.name.is_empty() {
                Some(FieldIssue::EmptyName)
            } else if field.name == HEADER_NAME {
                Some(FieldIssue::ReservedName)
            } else if field.width == 0 {
                Some(FieldIssue::ZeroWidth)
            } else if !seen.insert(field.name.as_str()) {
                Some(FieldIssue::Duplicate)
            } else {
                None
            };

            if let Some(reason) = issue {
                return Err(LayoutError::InvalidField {
                    name: field.name.clone(),
                    reason,
                });
            }
        }

        Ok(FieldCatalog { fields })
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Sum of all declared widths.
    pub fn total_bits(&self) -> usize {
        self.fields.iter().map(|field| field.width).sum()
    }
}

impl TryFrom<Vec<Field>> for FieldCatalog {
    type Error = LayoutError;

    fn try_from(value: Vec<Field>) -> Result<Self> {
        FieldCatalog::new(value)
    }
}

impl<'a> IntoIterator for &'a FieldCatalog {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
