//! Word size and header reservation.

use crate::errors::{LayoutError, Result};

/// Bits per word and bits reserved at the start of every word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackingParameters {
    pub capacity: usize,
    pub header_width: usize,
}

impl PackingParameters {
    /// Builds parameters, failing if no word could ever be produced.
    pub fn new(capacity: usize, header_width: usize) -> Result<Self> {
        let params = PackingParameters {
            capacity,
            header_width,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(LayoutError::ZeroCapacity);
        }

        if self.header_width > self.capacity {
            return Err(LayoutError::CapacityExceeded {
                header_width: self.header_width,
                capacity: self.capacity,
            });
        }

        Ok(())
    }

    /// Payload bits available in an empty word.
    pub fn payload_bits(&self) -> usize {
        self.capacity.saturating_sub(self.header_width)
    }
}
