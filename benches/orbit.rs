#[macro_use]
extern crate criterion;
extern crate nebulabrot;
extern crate rand;

use criterion::Criterion;
use nebulabrot::exclusion::{CardioidBulb, Exclusion};
use nebulabrot::orbit::{orbital_length, Point};
use nebulabrot::sampler::Sampler;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn escape_time(c: &mut Criterion) {
    c.bench_function("orbital_length near the boundary", |b| {
        b.iter(|| orbital_length(Point::new(-0.7453, 0.1127), 8000))
    });
}

fn exclusion(c: &mut Criterion) {
    c.bench_function("cardioid and bulb test", |b| {
        b.iter(|| CardioidBulb.admits(Point::new(-0.3, 0.4)))
    });
}

fn sampling(c: &mut Criterion) {
    c.bench_function("rejection sampled candidate", |b| {
        let mut sampler = Sampler::new(2.0, &CardioidBulb, StdRng::seed_from_u64(17));
        b.iter(|| sampler.candidate())
    });
}

criterion_group!(benches, escape_time, exclusion, sampling);
criterion_main!(benches);
