use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hopflow_basis::graph::HoppingGraph;
use hopflow_basis::rotational_currents;
use std::hint::black_box;
use std::time::Duration;

fn square_lattice(w: usize, l: usize) -> HoppingGraph {
    let idx = |x: usize, y: usize| x * w + y;
    let mut pairs = Vec::new();
    for x in 0..l {
        for y in 0..w {
            if x + 1 < l {
                pairs.push((idx(x, y), idx(x + 1, y)));
            }
            if y + 1 < w {
                pairs.push((idx(x, y), idx(x, y + 1)));
            }
        }
    }
    match HoppingGraph::from_hoppings(w * l, pairs) {
        Ok(g) => g,
        Err(err) => panic!("invalid lattice: {err}"),
    }
}

fn bench_rotational_currents(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotational_currents");
    group.measurement_time(Duration::from_secs(5));

    for &(w, l) in &[(3, 10), (5, 20), (8, 30)] {
        let g = square_lattice(w, l);
        group.bench_with_input(BenchmarkId::new("square", format!("{w}x{l}")), &g, |b, g| {
            b.iter(|| rotational_currents(black_box(g)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rotational_currents);
criterion_main!(benches);
