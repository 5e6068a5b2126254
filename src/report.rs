//! Human-readable bucket listing for transcription into protocol documents.
//!
//! ```text
//! Arrange your 32 bit words according to the buckets shown below:
//! ---------------------------------------------------------------
//! Bucket 1: (4, HEADER_FIELD) (14, ext_temp) (12, int_temp)
//! Bucket 2: (4, HEADER_FIELD) (8, time)
//! ```

use std::fmt;

use crate::{layout::Layout, word::Word};

/// Borrowing view of a [`Layout`] that renders as the listing above.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    layout: &'a Layout,
}

impl<'a> Report<'a> {
    pub fn new(layout: &'a Layout) -> Self {
        Report { layout }
    }

    /// One line per word, without the title.
    pub fn lines(&self) -> Vec<String> {
        self.layout
            .words()
            .iter()
            .enumerate()
            .map(|(index, word)| bucket_line(index + 1, word))
            .collect()
    }
}

fn bucket_line(bucket: usize, word: &Word) -> String {
    let pairs: Vec<String> = word
        .fragments()
        .iter()
        .map(|f| format!("({}, {})", f.width, f.field_name))
        .collect();

    format!("Bucket {}: {}", bucket, pairs.join(" "))
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = format!(
            "Arrange your {} bit words according to the buckets shown below:",
            self.layout.capacity()
        );
        writeln!(f, "{title}")?;
        writeln!(f, "{}", "-".repeat(title.len()))?;

        for line in self.lines() {
            writeln!(f, "{line}")?;
        }

        Ok(())
    }
}
