use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use merkle_proof::hash_impl::Sha256;
use merkle_proof::MerkleTree;

fn leaves(n: usize) -> Vec<[u8; 32]> {
    (0..n)
        .map(|i| {
            let mut x = [0u8; 32];
            x[..8].copy_from_slice(&(i as u64).to_le_bytes());
            x
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for n in [127usize, 1024, 16 * 1024] {
        let data = leaves(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| MerkleTree::new(black_box(data), Sha256::new()).unwrap())
        });
    }
    group.finish();
}

fn bench_proofs(c: &mut Criterion) {
    let data = leaves(16 * 1024 - 1);
    let tree = MerkleTree::new(&data, Sha256::new()).unwrap();
    let last = tree.leafs() - 1;

    c.bench_function("gen_proof", |b| {
        b.iter(|| tree.gen_proof(black_box(last)).unwrap())
    });

    let proof = tree.gen_proof(last).unwrap();
    c.bench_function("validate_proof", |b| {
        b.iter(|| tree.validate_proof(black_box(&proof)).unwrap())
    });
}

fn bench_append(c: &mut Criterion) {
    let data = leaves(1024);
    c.bench_function("append_1024", |b| {
        b.iter_with_setup(
            || MerkleTree::new(&data, Sha256::new()).unwrap(),
            |mut tree| tree.append(black_box(&data[..1])).unwrap(),
        )
    });
}

criterion_group!(benches, bench_build, bench_proofs, bench_append);
criterion_main!(benches);
