use kindex::{KdTree, LinearScan};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn matches_brute_force_2d() {
    let mut rng = StdRng::seed_from_u64(0);
    let points: Vec<[f64; 2]> = (0..1000)
        .map(|_| [rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)])
        .collect();

    let tree = KdTree::build(points.clone());
    let linear = LinearScan::new(points);

    for _ in 0..200 {
        let query = [rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)];
        let nearest = tree.nearest(&query).unwrap();
        let (_, expected_distance) = linear.nearest(&query).unwrap();
        assert_eq!(nearest.distance_squared, expected_distance);
        assert!(nearest.visited >= 1 && nearest.visited <= tree.len());
    }
}

#[test]
fn matches_brute_force_3d() {
    let mut rng = StdRng::seed_from_u64(42);
    let points: Vec<[f64; 3]> = (0..1000)
        .map(|_| [rng.gen(), rng.gen(), rng.gen()])
        .collect();

    let tree = KdTree::build(points.clone());
    let linear = LinearScan::new(points);

    let query = [rng.gen(), rng.gen(), rng.gen()];
    let nearest = tree.nearest(&query).unwrap();
    let (_, expected_distance) = linear.nearest(&query).unwrap();
    assert_eq!(nearest.distance_squared, expected_distance);

    // Pruning should cut out most of a uniform cloud.
    assert!(nearest.visited < tree.len());
}

#[test]
fn result_point_is_always_a_stored_point() {
    let mut rng = StdRng::seed_from_u64(7);
    let points: Vec<[f64; 2]> = (0..256)
        .map(|_| [rng.gen_range(0.0..10.0), rng.gen_range(0.0..10.0)])
        .collect();
    let tree = KdTree::build(points.clone());

    for _ in 0..100 {
        let query = [rng.gen_range(0.0..10.0), rng.gen_range(0.0..10.0)];
        let nearest = tree.nearest(&query).unwrap();
        assert!(points.contains(&nearest.point));
    }
}

#[test]
fn stored_queries_short_circuit() {
    let mut rng = StdRng::seed_from_u64(13);
    let points: Vec<[f64; 3]> = (0..500)
        .map(|_| [rng.gen(), rng.gen(), rng.gen()])
        .collect();
    let tree = KdTree::build_with(
        {
            let mut iter = points.iter().copied();
            move || iter.next().unwrap()
        },
        points.len(),
    );

    for point in points.iter().step_by(25) {
        let nearest = tree.nearest(point).unwrap();
        assert_eq!(nearest.distance_squared, 0.0);
        assert_eq!(nearest.point, *point);
    }
}
