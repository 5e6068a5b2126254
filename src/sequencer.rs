//! Working-sequence construction: descending-width sort plus caller overrides.
//!
//! The default order is a stable sort by width, widest first, so fields of
//! equal width keep their catalog order. Swap and insert directives then let a
//! designer nudge the greedy allocator toward a more readable layout.

use std::fmt;

use crate::{
    errors::{LayoutError, Result},
    field::{Field, FieldCatalog},
};

/// One edit applied to the working sequence.
///
/// Indices address the sequence as it stands just before the directive runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderDirective {
    /// Exchange the elements at the two positions.
    Swap(usize, usize),
    /// Remove the element at `source` and reinsert it at `dest`.
    Insert { source: usize, dest: usize },
}

impl fmt::Display for ReorderDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReorderDirective::Swap(i, j) => write!(f, "swap({i}, {j})"),
            ReorderDirective::Insert { source, dest } => write!(f, "insert({source}, {dest})"),
        }
    }
}

impl ReorderDirective {
    /// Applies the directive in place, leaving `fields` untouched on error.
    pub fn apply<T>(&self, fields: &mut Vec<T>) -> Result<()> {
        let len = fields.len();
        let in_range = match *self {
            ReorderDirective::Swap(i, j) => i < len && j < len,
            // After removal the valid insertion points are 0..=len-1.
            ReorderDirective::Insert { source, dest } => source < len && dest < len,
        };

        if !in_range {
            return Err(LayoutError::InvalidDirective {
                directive: *self,
                len,
            });
        }

        match *self {
            ReorderDirective::Swap(i, j) => fields.swap(i, j),
            ReorderDirective::Insert { source, dest } => {
                let field = fields.remove(source);
                fields.insert(dest, field);
            }
        }

        Ok(())
    }
}

/// Produces the allocation order for a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequencer {
    pub swaps: Vec<(usize, usize)>,
    pub inserts: Vec<(usize, usize)>,
    /// When true all swaps run before all inserts; otherwise inserts first.
    pub swap_first: bool,
}

impl Default for Sequencer {
    fn default() -> Self {
        Sequencer {
            swaps: Vec::new(),
            inserts: Vec::new(),
            swap_first: true,
        }
    }
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn swap(&mut self, i: usize, j: usize) -> &mut Self {
        self.swaps.push((i, j));
        self
    }

    pub fn insert(&mut self, source: usize, dest: usize) -> &mut Self {
        self.inserts.push((source, dest));
        self
    }

    pub fn set_swap_first(&mut self, swap_first: bool) -> &mut Self {
        self.swap_first = swap_first;
        self
    }

    pub fn is_identity(&self) -> bool {
        self.swaps.is_empty() && self.inserts.is_empty()
    }

    /// Directives in the order they will be applied.
    pub fn directives(&self) -> Vec<ReorderDirective> {
        let swaps = self.swaps.iter().map(|&(i, j)| ReorderDirective::Swap(i, j));
        let inserts = self
            .inserts
            .iter()
            .map(|&(source, dest)| ReorderDirective::Insert { source, dest });

        if self.swap_first {
            swaps.chain(inserts).collect()
        } else {
            inserts.chain(swaps).collect()
        }
    }

    /// Sorts the catalog widest-first (stable) and applies every directive.
    pub fn sequence(&self, catalog: &FieldCatalog) -> Result<Vec<Field>> {
        let mut working = sort_by_width(catalog);

        for directive in self.directives() {
            directive.apply(&mut working)?;
            tracing::trace!(%directive, "applied reorder directive");
        }

        Ok(working)
    }
}

/// Stable descending-width order of the catalog.
pub fn sort_by_width(catalog: &FieldCatalog) -> Vec<Field> {
    let mut sorted = catalog.fields().to_vec();
    sorted.sort_by(|a, b| b.width.cmp(&a.width));
    sorted
}

#[cfg(test)]
mod tests {
    use crate::field::Field;

    use super::*;

    fn names(fields: &[Field]) -> Vec<&str> {
        fields.iter().map(|f| f.name.as_str()).collect()
    }

    fn catalog() -> FieldCatalog {
        FieldCatalog::new(vec![
            Field::new("time", 8),
            Field::new("int_temp_avbay", 12),
            Field::new("ext_temp", 14),
            Field::new("int_temp_engine", 12),
            Field::new("gyro", 10),
        ])
        .unwrap()
    }

    #[test]
    fn test_sort_is_descending_and_stable() {
        let sorted = sort_by_width(&catalog());
        assert_eq!(
            names(&sorted),
            vec!["ext_temp", "int_temp_avbay", "int_temp_engine", "gyro", "time"]
        );
    }

    #[test]
    fn test_no_directives_is_plain_sort() {
        let sequencer = Sequencer::new();
        assert!(sequencer.is_identity());
        assert_eq!(
            sequencer.sequence(&catalog()).unwrap(),
            sort_by_width(&catalog())
        );
    }

    #[test]
    fn test_swap() {
        let mut sequencer = Sequencer::new();
        sequencer.swap(0, 4);
        let working = sequencer.sequence(&catalog()).unwrap();
        assert_eq!(
            names(&working),
            vec!["time", "int_temp_avbay", "int_temp_engine", "gyro", "ext_temp"]
        );
    }

    #[test]
    fn test_insert_shifts_intervening() {
        let mut sequencer = Sequencer::new();
        sequencer.insert(4, 1);
        let working = sequencer.sequence(&catalog()).unwrap();
        assert_eq!(
            names(&working),
            vec!["ext_temp", "time", "int_temp_avbay", "int_temp_engine", "gyro"]
        );
    }

    #[test]
    fn test_insert_to_last_position() {
        let mut sequencer = Sequencer::new();
        sequencer.insert(0, 4);
        let working = sequencer.sequence(&catalog()).unwrap();
        assert_eq!(
            names(&working),
            vec!["int_temp_avbay", "int_temp_engine", "gyro", "time", "ext_temp"]
        );
    }

    #[test]
    fn test_directive_order_matters() {
        let mut swap_first = Sequencer::new();
        swap_first.swap(0, 1).insert(0, 4);
        let mut insert_first = swap_first.clone();
        insert_first.set_swap_first(false);

        let a = swap_first.sequence(&catalog()).unwrap();
        let b = insert_first.sequence(&catalog()).unwrap();

        assert_eq!(
            names(&a),
            vec!["ext_temp", "int_temp_engine", "gyro", "time", "int_temp_avbay"]
        );
        assert_eq!(
            names(&b),
            vec!["int_temp_engine", "int_temp_avbay", "gyro", "time", "ext_temp"]
        );
    }

    #[test]
    fn test_directives_see_previous_edits() {
        let mut sequencer = Sequencer::new();
        sequencer.swap(0, 1).swap(1, 2);
        let working = sequencer.sequence(&catalog()).unwrap();
        assert_eq!(
            names(&working),
            vec!["int_temp_avbay", "int_temp_engine", "ext_temp", "gyro", "time"]
        );
    }

    #[test]
    fn test_out_of_range_swap() {
        let mut sequencer = Sequencer::new();
        sequencer.swap(0, 5);
        assert_eq!(
            sequencer.sequence(&catalog()),
            Err(LayoutError::InvalidDirective {
                directive: ReorderDirective::Swap(0, 5),
                len: 5
            })
        );
    }

    #[test]
    fn test_out_of_range_insert() {
        let mut sequencer = Sequencer::new();
        sequencer.insert(2, 5);
        assert_eq!(
            sequencer.sequence(&catalog()),
            Err(LayoutError::InvalidDirective {
                directive: ReorderDirective::Insert { source: 2, dest: 5 },
                len: 5
            })
        );
    }

    #[test]
    fn test_directive_display() {
        assert_eq!(ReorderDirective::Swap(1, 2).to_string(), "swap(1, 2)");
        assert_eq!(
            ReorderDirective::Insert { source: 3, dest: 0 }.to_string(),
            "insert(3, 0)"
        );
    }
}
