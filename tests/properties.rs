//! Property-based checks of the packing invariants.
//!
//! Catalogs are generated with unique names and positive widths, including
//! widths larger than a word's payload so that splitting is exercised.

use proptest::prelude::*;
use wordpack::{
    design::Design,
    field::{Field, FieldCatalog},
    params::PackingParameters,
    sequencer::{Sequencer, sort_by_width},
};

fn params_strategy() -> impl Strategy<Value = PackingParameters> {
    (1usize..=64).prop_flat_map(|capacity| {
        (Just(capacity), 0..capacity).prop_map(|(capacity, header_width)| PackingParameters {
            capacity,
            header_width,
        })
    })
}

fn catalog_strategy() -> impl Strategy<Value = FieldCatalog> {
    prop::collection::vec(1usize..=96, 0..24).prop_map(|widths| {
        let fields = widths
            .into_iter()
            .enumerate()
            .map(|(i, width)| Field::new(format!("f{i}"), width))
            .collect();
        FieldCatalog::new(fields).expect("generated names are unique")
    })
}

fn sequencer_strategy(len: usize) -> impl Strategy<Value = Sequencer> {
    let index = 0..len.max(1);
    let pair = (index.clone(), index);
    (
        prop::collection::vec(pair.clone(), 0..4),
        prop::collection::vec(pair, 0..4),
        any::<bool>(),
    )
        .prop_map(|(swaps, inserts, swap_first)| Sequencer {
            swaps,
            inserts,
            swap_first,
        })
}

fn design_strategy() -> impl Strategy<Value = Design> {
    (catalog_strategy(), params_strategy()).prop_flat_map(|(catalog, params)| {
        let len = catalog.len();
        sequencer_strategy(len).prop_filter_map("empty catalog with directives", move |sequencer| {
            if len == 0 && !sequencer.is_identity() {
                return None;
            }
            Some(Design::new(catalog.clone(), params).with_sequencer(sequencer))
        })
    })
}

proptest! {
    #[test]
    fn conservation(design in design_strategy()) {
        let layout = design.pack().unwrap();
        for field in design.catalog.fields() {
            prop_assert_eq!(layout.field_bits(&field.name), field.width);
        }
    }

    #[test]
    fn capacity_respected(design in design_strategy()) {
        let layout = design.pack().unwrap();
        for word in layout.words() {
            let total: usize = word.fragments().iter().map(|f| f.width).sum();
            prop_assert!(total <= design.params.capacity);
            prop_assert!(word.fragments()[0].is_header());
            prop_assert_eq!(word.fragments()[0].width, design.params.header_width);
        }
    }

    #[test]
    fn deterministic(design in design_strategy()) {
        let first = design.pack().unwrap();
        let second = design.clone().pack().unwrap();
        prop_assert_eq!(first.report().to_string(), second.report().to_string());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn split_offsets_contiguous(design in design_strategy()) {
        let layout = design.pack().unwrap();
        for field in design.catalog.fields() {
            let mut expected = 0;
            let mut last_word = None;
            for (word, fragment) in layout.fragments_of(&field.name) {
                prop_assert_eq!(fragment.offset_bits, expected);
                prop_assert!(fragment.width > 0);
                prop_assert!(last_word.is_none_or(|w| w < word));
                expected = fragment.end_bits();
                last_word = Some(word);
            }
        }
    }

    #[test]
    fn only_oversized_fields_split(design in design_strategy()) {
        let layout = design.pack().unwrap();
        for field in design.catalog.fields() {
            if field.width <= design.params.payload_bits() {
                prop_assert!(!layout.is_split(&field.name));
            }
        }
    }

    #[test]
    fn stable_sort(catalog in catalog_strategy()) {
        let sorted = sort_by_width(&catalog);
        let position = |name: &str| catalog.fields().iter().position(|f| f.name == name);
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].width >= pair[1].width);
            if pair[0].width == pair[1].width {
                prop_assert!(position(&pair[0].name) < position(&pair[1].name));
            }
        }
    }
}
