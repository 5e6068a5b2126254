//! A fixed-width transmission word and the fragments packed into it.

use crate::fragment::Fragment;

/// Append-only list of fragments; the first is always the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    fragments: Vec<Fragment>,
    used: usize,
}

impl Word {
    /// Opens a word holding only the header fragment.
    pub fn new(header_width: usize) -> Self {
        Word {
            fragments: vec![Fragment::header(header_width)],
            used: header_width,
        }
    }

    pub(crate) fn push(&mut self, fragment: Fragment) {
        self.used += fragment.width;
        self.fragments.push(fragment);
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Fragments after the header.
    pub fn payload(&self) -> &[Fragment] {
        &self.fragments[1..]
    }

    /// Bits occupied, header included.
    pub fn used(&self) -> usize {
        self.used
    }

    pub fn remaining(&self, capacity: usize) -> usize {
        capacity.saturating_sub(self.used)
    }

    pub fn is_full(&self, capacity: usize) -> bool {
        self.used >= capacity
    }

    pub fn contains(&self, field_name: &str) -> bool {
        self.payload().iter().any(|f| f.field_name == field_name)
    }

    /// Each fragment paired with its starting bit, counted from the word's MSB.
    pub fn placements(&self) -> impl Iterator<Item = (usize, &Fragment)> + '_ {
        self.fragments.iter().scan(0usize, |start, fragment| {
            let at = *start;
            *start += fragment.width;
            Some((at, fragment))
        })
    }
}
