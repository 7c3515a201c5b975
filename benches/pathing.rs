use criterion::{criterion_group, criterion_main, Criterion};
use meltmaze::{
    cells::Cartesian2DCoordinate,
    generators::MazeBuilder,
    pathing::{self, Distances},
    units::{Height, Width},
};

fn bench_find_route_41(c: &mut Criterion) {
    let mut builder = MazeBuilder::new(42);
    let grid = builder
        .build("dfs", Width(41), Height(41))
        .expect("dfs is a known method");
    let start = Cartesian2DCoordinate::new(1, 1);
    let end = Cartesian2DCoordinate::new(39, 39);

    c.bench_function("find_route_41", move |b| {
        b.iter(|| pathing::find_route(&grid, start, end))
    });
}

fn bench_flood_fill_distances_41(c: &mut Criterion) {
    let mut builder = MazeBuilder::new(42);
    let grid = builder
        .build("prim", Width(41), Height(41))
        .expect("prim is a known method");
    let start = Cartesian2DCoordinate::new(1, 1);

    c.bench_function("flood_fill_distances_41", move |b| {
        b.iter(|| Distances::<u32>::new(&grid, start))
    });
}

criterion_group!(benches, bench_find_route_41, bench_flood_fill_distances_41);
criterion_main!(benches);
