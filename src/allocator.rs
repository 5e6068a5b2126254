//! First-fit word allocation with forced splitting.
//!
//! Fields are taken in working-sequence order. A field goes whole into the
//! first word (in creation order) with enough room. If none has room but the
//! field fits an empty word, a new word is opened for it. Only fields wider
//! than a word's payload are split: they top up the most recent word and
//! continue into fresh words.

use crate::{
    errors::{FieldIssue, LayoutError, Result},
    field::Field,
    fragment::Fragment,
    layout::Layout,
    params::PackingParameters,
    word::Word,
};

#[derive(Debug, Clone, Copy)]
pub struct Allocator {
    params: PackingParameters,
}

impl Allocator {
    pub fn new(params: PackingParameters) -> Self {
        Allocator { params }
    }

    pub fn params(&self) -> PackingParameters {
        self.params
    }

    /// Packs `fields` in the given order into as many words as needed.
    pub fn allocate(&self, fields: &[Field]) -> Result<Layout> {
        self.params.validate()?;

        let mut words = vec![Word::new(self.params.header_width)];

        for field in fields {
            if field.width == 0 {
                return Err(LayoutError::InvalidField {
                    name: field.name.clone(),
                    reason: FieldIssue::ZeroWidth,
                });
            }

            if let Some(index) = self.first_fit(&words, field.width) {
                tracing::debug!(field = %field.name, width = field.width, word = index, "placed whole");
                words[index].push(Fragment::new(field.name.as_str(), field.width));
                continue;
            }

            if field.width <= self.params.payload_bits() {
                let mut word = Word::new(self.params.header_width);
                word.push(Fragment::new(field.name.as_str(), field.width));
                words.push(word);
                tracing::debug!(field = %field.name, width = field.width, word = words.len() - 1, "placed whole in new word");
                continue;
            }

            self.split(&mut words, field)?;
        }

        Ok(Layout::new(self.params, words))
    }

    fn first_fit(&self, words: &[Word], width: usize) -> Option<usize> {
        words
            .iter()
            .position(|word| word.remaining(self.params.capacity) >= width)
    }

    fn split(&self, words: &mut Vec<Word>, field: &Field) -> Result<()> {
        let capacity = self.params.capacity;
        let mut remaining = field.width;
        let mut offset = 0;

        while remaining > 0 {
            let needs_word = words.last().is_none_or(|word| word.is_full(capacity));
            if needs_word {
                words.push(Word::new(self.params.header_width));
                tracing::debug!(word = words.len() - 1, "opened word");
            }

            let index = words.len() - 1;
            let current = &mut words[index];
            let take = current.remaining(capacity).min(remaining);

            if take == 0 {
                return Err(LayoutError::AllocationStalled {
                    field: field.name.clone(),
                    remaining,
                    word: index,
                });
            }

            current.push(Fragment::new_with_offset(field.name.as_str(), take, offset));
            tracing::debug!(field = %field.name, width = take, offset, word = index, "placed fragment");

            remaining -= take;
            offset += take;
        }

        Ok(())
    }
}
