use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hotel_room_allocation::{allocate, topology::generate, OccupancyStore, Room};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

// One free room per floor forces the cross-floor search
fn one_room_per_floor() -> Vec<Room> {
    let mut rng = StdRng::seed_from_u64(11);
    (1..=10u32)
        .map(|floor| {
            let max = if floor == 10 { 7 } else { 10 };
            let positions: Vec<u32> = (1..=max).collect();
            Room::new(floor, *positions.choose(&mut rng).unwrap_or(&1))
        })
        .collect()
}

pub fn single_floor_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_floor_allocation");
    let rooms = generate();

    for num_rooms in [1usize, 3, 5].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_rooms), num_rooms, |b, &n| {
            b.iter(|| black_box(allocate(black_box(&rooms), n)))
        });
    }

    group.finish();
}

pub fn cross_floor_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("cross_floor_allocation");
    let rooms = one_room_per_floor();

    for num_rooms in [2usize, 3, 5].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_rooms), num_rooms, |b, &n| {
            b.iter(|| black_box(allocate(black_box(&rooms), n)))
        });
    }

    group.finish();
}

pub fn store_benchmark(c: &mut Criterion) {
    c.bench_function("random_occupancy_then_book", |b| {
        let mut store = OccupancyStore::new();
        let mut rng = StdRng::seed_from_u64(3);
        b.iter(|| {
            store.random_occupancy_with_rng(0.3, &mut rng);
            black_box(store.book(3))
        })
    });
}

criterion_group!(benches, single_floor_benchmark, cross_floor_benchmark, store_benchmark);
criterion_main!(benches);
