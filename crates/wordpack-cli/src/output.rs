//! Serializable view of a packed layout for `--format json`.

use serde::Serialize;
use wordpack::{layout::Layout, word::Word};

#[derive(Debug, Serialize)]
pub struct LayoutOut {
    pub capacity: usize,
    pub header_width: usize,
    pub padding_bits: usize,
    pub words: Vec<WordOut>,
}

#[derive(Debug, Serialize)]
pub struct WordOut {
    pub bucket: usize,
    pub used: usize,
    pub fragments: Vec<FragmentOut>,
}

/// A fragment and where its bits sit in both the word and the field.
#[derive(Debug, Serialize)]
pub struct FragmentOut {
    pub name: String,
    pub width: usize,
    /// First bit within the word, counted from the MSB.
    pub word_bit: usize,
    /// First bit within the field, counted from the MSB.
    pub field_bit: usize,
}

impl From<&Layout> for LayoutOut {
    fn from(layout: &Layout) -> Self {
        LayoutOut {
            capacity: layout.capacity(),
            header_width: layout.params().header_width,
            padding_bits: layout.padding_bits(),
            words: layout
                .words()
                .iter()
                .enumerate()
                .map(|(index, word)| word_out(index + 1, word))
                .collect(),
        }
    }
}

fn word_out(bucket: usize, word: &Word) -> WordOut {
    WordOut {
        bucket,
        used: word.used(),
        fragments: word
            .placements()
            .map(|(word_bit, fragment)| FragmentOut {
                name: fragment.field_name.clone(),
                width: fragment.width,
                word_bit,
                field_bit: fragment.offset_bits,
            })
            .collect(),
    }
}
