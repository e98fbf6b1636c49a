use criterion::{criterion_group, criterion_main, Criterion};
use gtoform::{
    basis::Triad,
    generation::{write_family, Dialect, Generator, GENERATION_CASES},
    integrals::{nuclear::primitive_nuclear, Family},
};

fn bench_nuclear_expansion(c: &mut Criterion) {
    let simplifier = Family::NuclearAttraction.simplifier();
    let (a, b) = (Triad(1, 1, 1), Triad(0, 1, 2));

    c.bench_function("Nuclear expansion f-f", |bench| {
        bench.iter(|| simplifier.simplify(primitive_nuclear(a, b)))
    });
}

fn bench_cases(c: &mut Criterion) {
    for family in Family::ALL {
        let generator = Generator::new(family);

        c.bench_function(&format!("Generate {}", family.description()), |bench| {
            bench.iter(|| generator.generate_all(&GENERATION_CASES))
        });
    }
}

fn bench_emit(c: &mut Criterion) {
    let dialect = Dialect::default();
    let outputs = Generator::new(Family::KineticEnergy).generate_all(&GENERATION_CASES);

    c.bench_function("Emit kinetic energy", |bench| {
        bench.iter(|| {
            let mut buffer = Vec::new();
            write_family(&mut buffer, Family::KineticEnergy, &outputs, &dialect)
                .map(|_| buffer.len())
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_nuclear_expansion, bench_cases, bench_emit
}
criterion_main!(benches);
