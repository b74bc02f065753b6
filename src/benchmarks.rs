extern crate rand;
extern crate rand_chacha;
use criterion::{criterion_group, criterion_main, Criterion};
use karatsuba::karatsuba::karatsuba_mul;
use karatsuba::schoolbook_mul::schoolbook_mul;
use karatsuba::{BigInt, KaratsubaConfig};
use rand::{Rng, SeedableRng};

fn random_bigint(rng: &mut rand_chacha::ChaCha8Rng, size: usize) -> BigInt {
    let digits = (0..size).map(|_| rng.gen_range(0..10)).collect();
    BigInt::from_digits(digits, false).expect("digits are drawn from 0..10")
}
fn bench_schoolbook_mul(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_bigint(&mut rng, 1000);
    let b = random_bigint(&mut rng, 1000);
    c.bench_function("schoolbook_mul_1k", |bench| {
        bench.iter(|| schoolbook_mul(&a, &b))
    });
}
fn bench_karatsuba_mul(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_bigint(&mut rng, 1000);
    let b = random_bigint(&mut rng, 1000);
    let config = KaratsubaConfig::default();
    c.bench_function("karatsuba_mul_1k", |bench| {
        bench.iter(|| karatsuba_mul(&a, &b, &config));
    });
}
fn bench_karatsuba_mul_tuned(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_bigint(&mut rng, 1000);
    let b = random_bigint(&mut rng, 1000);
    let config = KaratsubaConfig::default().with_base_case_digits(32);
    c.bench_function("karatsuba_mul_1k_base32", |bench| {
        bench.iter(|| karatsuba_mul(&a, &b, &config));
    });
}
fn bench_karatsuba_mul_10k(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_bigint(&mut rng, 10000);
    let b = random_bigint(&mut rng, 10000);
    let config = KaratsubaConfig::default().with_base_case_digits(32);
    c.bench_function("karatsuba_mul_10k_base32", |bench| {
        bench.iter(|| karatsuba_mul(&a, &b, &config));
    });
}
fn bench_add_assign(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let mut a = random_bigint(&mut rng, 1000);
    let b = random_bigint(&mut rng, 1000);
    c.bench_function("add_assign", |bench| {
        bench.iter(|| a += &b);
    });
}

fn configured() -> Criterion {
    Criterion::default().sample_size(10)
}
criterion_group!(
    name = benches;
    config = configured();
    targets =
        bench_schoolbook_mul,
        bench_karatsuba_mul,
        bench_karatsuba_mul_tuned,
        bench_karatsuba_mul_10k,
        bench_add_assign,
);
criterion_main!(benches);
