use criterion::{Criterion, criterion_group, criterion_main};
use wordpack::{
    design::Design,
    field::{Field, FieldCatalog},
    params::PackingParameters,
};

fn gen_design(field_count: usize, capacity: usize) -> Design {
    let mut fields = Vec::with_capacity(field_count);

    // Deterministic mix of narrow flags and fields wider than a word
    for i in 0..field_count {
        fields.push(Field::new(format!("f{}", i), 1 + (i * 37) % (capacity + 16)));
    }

    let catalog = FieldCatalog::new(fields).unwrap();
    Design::new(catalog, PackingParameters::new(capacity, 4).unwrap())
}

fn bench_allocate(c: &mut Criterion) {
    for &capacity in &[32usize, 64] {
        for &field_count in &[10usize, 100, 1000] {
            let design = gen_design(field_count, capacity);

            c.bench_function(&format!("pack_{}_fields_{}_bit", field_count, capacity), |b| {
                b.iter(|| {
                    let _ = design.pack().unwrap();
                })
            });
        }
    }
}

criterion_group!(benches, bench_allocate);
criterion_main!(benches);
