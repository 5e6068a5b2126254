//! A complete packing session: catalog, word parameters and reorder overrides.

use crate::{
    allocator::Allocator,
    errors::Result,
    field::{Field, FieldCatalog},
    layout::Layout,
    params::PackingParameters,
    sequencer::Sequencer,
};

/// Everything needed to produce a [`Layout`]. Use [`Design::pack`] to run the
/// sequencer and allocator in one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Design {
    pub catalog: FieldCatalog,
    pub params: PackingParameters,
    pub sequencer: Sequencer,
}

impl Design {
    pub fn new(catalog: FieldCatalog, params: PackingParameters) -> Self {
        Design {
            catalog,
            params,
            sequencer: Sequencer::default(),
        }
    }

    pub fn with_sequencer(mut self, sequencer: Sequencer) -> Self {
        self.sequencer = sequencer;
        self
    }

    /// Allocation order after sorting and reordering.
    pub fn working_sequence(&self) -> Result<Vec<Field>> {
        self.sequencer.sequence(&self.catalog)
    }

    pub fn pack(&self) -> Result<Layout> {
        self.params.validate()?;
        let working = self.working_sequence()?;

        let layout = Allocator::new(self.params).allocate(&working)?;
        tracing::debug!(
            fields = self.catalog.len(),
            words = layout.word_count(),
            padding = layout.padding_bits(),
            "packed design"
        );

        Ok(layout)
    }
}

#[cfg(feature = "serde")]
impl TryFrom<crate::serde::DesignDef> for Design {
    type Error = crate::errors::LayoutError;

    fn try_from(value: crate::serde::DesignDef) -> Result<Self> {
        let catalog = FieldCatalog::new(value.fields.into_iter().map(Into::into).collect())?;
        let params = PackingParameters::new(value.capacity, value.header_width)?;
        let sequencer = value.reorder.map(Into::into).unwrap_or_default();

        Ok(Design {
            catalog,
            params,
            sequencer,
        })
    }
}
