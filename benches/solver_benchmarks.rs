use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tilescape::{
    landscape::Landscape,
    solver::engine::{SearchOutcome, Solver},
};

// Four regions with mutually distinct unique placements; exercises the
// full select/order/propagate cycle without backtracking.
const FOUR_REGION_MIX: &str = "\
# landscape
. . . . 3 . . 3
. 1 . . . 3 . .
. . 1 . . . . .
. . . . 3 . . 3
2 . . . . . . 4
. . . . . . . .
. . . . . . . .
. . . . . . . .
# tiles
FULL_BLOCK=1 OUTER_BOUNDARY=1 EL_SHAPE=2
# targets
0 0 0 0 0
1 0 0 1 0
2 0 1 0 0
3 0 0 0 1
";

/// A landscape of `side x side` regions where every region accepts any
/// tile, so the search leans on the heuristics and the pool bookkeeping.
fn open_landscape(side: usize) -> String {
    let cells = side * 4;
    let mut text = String::from("# landscape\n");
    for _ in 0..cells {
        let row = vec!["."; cells];
        text.push_str(&row.join(" "));
        text.push('\n');
    }
    let regions = side * side;
    let full = regions / 2;
    text.push_str("# tiles\n");
    text.push_str(&format!(
        "FULL_BLOCK={} OUTER_BOUNDARY=0 EL_SHAPE={}\n",
        full,
        regions - full,
    ));
    text.push_str("# targets\n");
    for region in 0..regions {
        text.push_str(&format!("{region} 0 0 0 0\n"));
    }
    text
}

fn mixed_regions_benchmark(c: &mut Criterion) {
    let pristine = Landscape::build(FOUR_REGION_MIX).unwrap();

    c.bench_function("four regions, unique placements", |b| {
        b.iter(|| {
            let mut landscape = black_box(pristine.clone());
            let (outcome, _stats) = Solver::new(&mut landscape).solve();
            assert!(matches!(outcome, SearchOutcome::Solved(_)));
        })
    });
}

fn open_landscape_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("open landscape");

    for side in [2usize, 3].iter() {
        let pristine = Landscape::build(&open_landscape(*side)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(side), side, |b, _| {
            b.iter(|| {
                let mut landscape = black_box(pristine.clone());
                let (outcome, _stats) = Solver::new(&mut landscape).solve();
                assert!(matches!(outcome, SearchOutcome::Solved(_)));
            })
        });
    }

    group.finish();
}

criterion_group!(benches, mixed_regions_benchmark, open_landscape_benchmark);
criterion_main!(benches);
