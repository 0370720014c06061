use criterion::{criterion_group, criterion_main, Criterion};
use picshape::{
    analyzer::Quantity,
    distributions::Uniform,
    histogram::{histogram, histogram2d},
    reader::{DummyReader, ParticleReader},
    shape::ParticleShape,
};
use strum::IntoEnumIterator;

fn criterion_deposition_1d(c: &mut Criterion) {
    let reader = DummyReader::new(100_000, 1, Some(1), &Uniform::default()).unwrap();
    let x = reader.quantity("electron", Quantity::X).unwrap();
    for shape in ParticleShape::iter() {
        c.bench_function(&format!("deposition_1d_order{shape}"), |b| {
            b.iter(|| histogram(&x, None, 300, Some((0.0, 1.0)), shape))
        });
    }
}

fn criterion_deposition_2d(c: &mut Criterion) {
    let reader = DummyReader::new(9000, 2, Some(1), &Uniform::default()).unwrap();
    let x = reader.quantity("electron", Quantity::X).unwrap();
    let y = reader.quantity("electron", Quantity::Y).unwrap();
    c.bench_function("deposition_2d_order2", |b| {
        b.iter(|| {
            histogram2d(
                &x,
                &y,
                None,
                (300, 30),
                (Some((0.0, 1.0)), Some((0.0, 1.0))),
                ParticleShape::Quadratic,
            )
        })
    });
}

criterion_group!(benches, criterion_deposition_1d, criterion_deposition_2d);
criterion_main!(benches);
