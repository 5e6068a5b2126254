//! Register description consumed by an external bit-field diagram renderer.
//!
//! Each fragment becomes one `{name, bits, type}` entry in word order, and the
//! renderer draws `lanes` rows of `bits` columns. The `type` tag selects a color
//! group and comes from the field catalog, so split fields keep one color.

use crate::{field::FieldCatalog, fragment::HEADER_NAME, layout::Layout};

/// One box in the diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DiagramEntry {
    pub name: String,
    pub bits: usize,
    #[cfg_attr(feature = "serde", serde(rename = "type", skip_serializing_if = "Option::is_none"))]
    pub kind: Option<u32>,
}

/// Renderer options derived from the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DiagramOptions {
    /// Bits per lane.
    pub bits: usize,
    /// One lane per word.
    pub lanes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagram {
    #[cfg_attr(feature = "serde", serde(rename = "reg"))]
    pub entries: Vec<DiagramEntry>,
    pub options: DiagramOptions,
}

/// Builds a [`Diagram`] from a layout and the catalog it was packed from.
#[derive(Debug, Clone)]
pub struct DiagramBuilder<'a> {
    layout: &'a Layout,
    catalog: &'a FieldCatalog,
    header_label: String,
    header_kind: Option<u32>,
}

impl<'a> DiagramBuilder<'a> {
    pub fn new(layout: &'a Layout, catalog: &'a FieldCatalog) -> Self {
        DiagramBuilder {
            layout,
            catalog,
            header_label: HEADER_NAME.to_string(),
            header_kind: None,
        }
    }

    /// Label drawn in each word's header box, e.g. `Frag #`.
    pub fn set_header_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.header_label = label.into();
        self
    }

    pub fn set_header_kind(&mut self, kind: u32) -> &mut Self {
        self.header_kind = Some(kind);
        self
    }

    pub fn build(&self) -> Diagram {
        let mut entries = Vec::new();

        for word in self.layout.words() {
            for fragment in word.fragments() {
                let entry = if fragment.is_header() {
                    DiagramEntry {
                        name: self.header_label.clone(),
                        bits: fragment.width,
                        kind: self.header_kind,
                    }
                } else {
                    DiagramEntry {
                        name: fragment.field_name.clone(),
                        bits: fragment.width,
                        kind: self
                            .catalog
                            .get(&fragment.field_name)
                            .and_then(|field| field.kind),
                    }
                };
                entries.push(entry);
            }
        }

        Diagram {
            entries,
            options: DiagramOptions {
                bits: self.layout.capacity(),
                lanes: self.layout.word_count(),
            },
        }
    }
}
