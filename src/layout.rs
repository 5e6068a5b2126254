//! The allocator's output: ordered words plus the parameters they were packed with.

use crate::{fragment::Fragment, params::PackingParameters, word::Word};

/// Ordered words, each holding its fragments header-first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    params: PackingParameters,
    words: Vec<Word>,
}

impl Layout {
    pub(crate) fn new(params: PackingParameters, words: Vec<Word>) -> Self {
        Layout { params, words }
    }

    pub fn params(&self) -> PackingParameters {
        self.params
    }

    pub fn capacity(&self) -> usize {
        self.params.capacity
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Every fragment of `field_name` with the index of the word holding it,
    /// in increasing word order.
    pub fn fragments_of<'a>(
        &'a self,
        field_name: &'a str,
    ) -> impl Iterator<Item = (usize, &'a Fragment)> + 'a {
        self.words.iter().enumerate().flat_map(move |(index, word)| {
            word.payload()
                .iter()
                .filter(move |f| f.field_name == field_name)
                .map(move |f| (index, f))
        })
    }

    /// Total bits emitted for `field_name` across all words.
    pub fn field_bits(&self, field_name: &str) -> usize {
        self.fragments_of(field_name).map(|(_, f)| f.width).sum()
    }

    pub fn is_split(&self, field_name: &str) -> bool {
        self.fragments_of(field_name).nth(1).is_some()
    }

    /// Bits occupied across all words, headers included.
    pub fn used_bits(&self) -> usize {
        self.words.iter().map(Word::used).sum()
    }

    /// Unused bits across all words.
    pub fn padding_bits(&self) -> usize {
        self.word_count() * self.params.capacity - self.used_bits()
    }

    /// Names of fields in first-appearance order.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for word in &self.words {
            for fragment in word.payload() {
                if !names.contains(&fragment.field_name.as_str()) {
                    names.push(&fragment.field_name);
                }
            }
        }
        names
    }

    /// Textual bucket listing.
    pub fn report(&self) -> crate::report::Report<'_> {
        crate::report::Report::new(self)
    }
}
