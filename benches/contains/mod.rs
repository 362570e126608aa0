use std::hint::black_box;

use avlset::AvlSet;
use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};

use crate::Lfsr;

/// Map the next LFSR output onto the even keys stored in the tree.
fn stored_key(rand: &mut Lfsr) -> u32 {
    u32::from(rand.next()) * 2
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("contains");

    for n_values in [1_000, 10_000] {
        bench_param(&mut g, n_values, 1_000);
    }
}

/// Probe a tree of `n_values` even keys with `n_lookups` keys that are all
/// present, then with `n_lookups` odd keys that never are.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize, n_lookups: usize)
where
    M: Measurement,
{
    let mut rand = Lfsr::default();
    let mut present = Vec::with_capacity(n_values);
    let mut t = AvlSet::default();

    for _i in 0..n_values {
        let key = stored_key(&mut rand);
        t.insert(key);
        present.push(key);
    }

    // Cycle through the stored keys so every lookup hits, and shift each by
    // one for a lookup that always misses.
    let hits = present.iter().copied().cycle().take(n_lookups).collect::<Vec<_>>();
    let misses = hits.iter().map(|v| v + 1).collect::<Vec<_>>();

    for (name, keys, want) in [("hits", &hits, true), ("misses", &misses, false)] {
        g.throughput(Throughput::Elements(keys.len() as _));
        g.bench_function(BenchmarkId::new(name, n_values), |b| {
            b.iter(|| {
                for key in keys {
                    assert_eq!(black_box(t.contains(key)), want);
                }
            })
        });
    }
}
