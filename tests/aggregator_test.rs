//! Tests for the distance aggregator against known values and a brute-force reference

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rstest::rstest;

use treedist::compute_distance_sums;
use treedist::domain::{
    brute_force_distance_sums, check_against_brute_force, check_edge_identity, Adjacency,
    DistanceAggregator, Edge, TreeBuilder,
};
use treedist::util::testing;

fn edges(pairs: &[(i64, i64)]) -> Vec<Edge> {
    pairs.iter().copied().map(Edge::from).collect()
}

fn path_edges(node_count: usize) -> Vec<Edge> {
    (1..node_count as i64).map(|v| Edge(v - 1, v)).collect()
}

/// Uniformly attached random tree with shuffled labels, edge order and edge direction.
fn random_tree(rng: &mut StdRng, node_count: usize) -> Vec<Edge> {
    let mut labels: Vec<i64> = (0..node_count as i64).collect();
    labels.shuffle(rng);

    let mut edges: Vec<Edge> = (1..node_count)
        .map(|v| {
            let parent = rng.gen_range(0..v);
            let (a, b) = (labels[parent], labels[v]);
            if rng.gen_bool(0.5) {
                Edge(a, b)
            } else {
                Edge(b, a)
            }
        })
        .collect();
    edges.shuffle(rng);
    edges
}

fn build(node_count: usize, edges: &[Edge]) -> Adjacency {
    TreeBuilder::new().build(node_count, edges).unwrap()
}

// ============================================================
// Concrete scenarios
// ============================================================

#[rstest]
#[case(1, vec![], vec![0])]
#[case(2, vec![(0, 1)], vec![1, 1])]
#[case(6, vec![(0, 1), (0, 2), (2, 3), (2, 4), (2, 5)], vec![8, 12, 6, 10, 10, 10])]
#[case(3, vec![(2, 1), (1, 0)], vec![3, 2, 3])]
#[case(5, vec![(0, 1), (0, 2), (0, 3), (0, 4)], vec![4, 7, 7, 7, 7])]
fn given_known_tree_when_computing_then_returns_expected_sums(
    #[case] node_count: usize,
    #[case] pairs: Vec<(i64, i64)>,
    #[case] expected: Vec<u64>,
) {
    testing::init_test_setup();
    assert_eq!(
        compute_distance_sums(node_count, &edges(&pairs)).unwrap(),
        expected
    );
}

// ============================================================
// Path graphs
// ============================================================

#[rstest]
#[case(2)]
#[case(3)]
#[case(10)]
#[case(101)]
fn given_path_graph_when_computing_then_matches_absolute_differences(#[case] node_count: usize) {
    let sums = compute_distance_sums(node_count, &path_edges(node_count)).unwrap();

    let expected: Vec<u64> = (0..node_count)
        .map(|i| (0..node_count).map(|j| i.abs_diff(j) as u64).sum())
        .collect();
    assert_eq!(sums, expected);
}

#[test]
fn given_deep_path_when_computing_then_iterative_passes_do_not_overflow_stack() {
    let node_count = 30_000usize;
    let sums = compute_distance_sums(node_count, &path_edges(node_count)).unwrap();

    // sum(i) = i(i+1)/2 + (n-1-i)(n-i)/2
    let closed_form = |i: u64| {
        let n = node_count as u64;
        i * (i + 1) / 2 + (n - 1 - i) * (n - i) / 2
    };
    assert_eq!(sums.len(), node_count);
    for i in [0u64, 1, 14_999, 15_000, 29_998, 29_999] {
        assert_eq!(sums[i as usize], closed_form(i), "node {i}");
    }
    assert_eq!(sums[0], 449_985_000);
}

#[test]
fn given_deep_path_rooted_at_far_end_when_aggregating_then_identity_holds() {
    let node_count = 30_000;
    let adjacency = build(node_count, &path_edges(node_count));
    let aggregation = DistanceAggregator::with_root(node_count - 1)
        .aggregate(&adjacency)
        .unwrap();
    check_edge_identity(&aggregation).unwrap();
    assert_eq!(aggregation.subtree_size(0), Some(1));
}

// ============================================================
// Random trees vs brute force
// ============================================================

#[test]
fn given_random_small_trees_when_computing_then_equals_brute_force() {
    testing::init_test_setup();
    for seed in 0..200u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let node_count = rng.gen_range(1..=200);
        let edges = random_tree(&mut rng, node_count);

        let adjacency = build(node_count, &edges);
        let aggregation = DistanceAggregator::new().aggregate(&adjacency).unwrap();

        assert_eq!(
            aggregation.distance_sums(),
            brute_force_distance_sums(&adjacency).as_slice(),
            "seed {seed}, n {node_count}"
        );
        check_edge_identity(&aggregation).unwrap();
    }
}

#[test]
fn given_random_tree_when_rooting_anywhere_then_results_are_identical() {
    let mut rng = StdRng::seed_from_u64(7);
    let node_count = 64;
    let adjacency = build(node_count, &random_tree(&mut rng, node_count));
    let baseline = DistanceAggregator::new().aggregate(&adjacency).unwrap();

    for root in 0..node_count {
        let rerooted = DistanceAggregator::with_root(root)
            .aggregate(&adjacency)
            .unwrap();
        assert_eq!(rerooted.distance_sums(), baseline.distance_sums(), "root {root}");
        check_against_brute_force(&adjacency, &rerooted).unwrap();
    }
}

#[test]
fn given_large_random_tree_when_computing_then_identity_holds() {
    let mut rng = StdRng::seed_from_u64(42);
    let node_count = 30_000;
    let adjacency = build(node_count, &random_tree(&mut rng, node_count));
    let aggregation = DistanceAggregator::new().aggregate(&adjacency).unwrap();

    assert_eq!(aggregation.total(), aggregation.edge_identity_total());
    assert!(aggregation.distance_sums().iter().all(|&sum| sum >= (node_count - 1) as u64));
}

// ============================================================
// Structure of the aggregation
// ============================================================

#[test]
fn given_caterpillar_when_aggregating_then_subtree_sizes_sum_to_depths() {
    // spine 0-1-2-3 with one leaf hanging off each spine node
    let pairs = [(0, 1), (1, 2), (2, 3), (0, 4), (1, 5), (2, 6), (3, 7)];
    let adjacency = build(8, &edges(&pairs));
    let aggregation = DistanceAggregator::new().aggregate(&adjacency).unwrap();

    // root sum equals the sum of subtree sizes of all non-root nodes
    let non_root_sizes: usize = (1..8).filter_map(|v| aggregation.subtree_size(v)).sum();
    assert_eq!(aggregation.distance_sum(0), Some(non_root_sizes as u64));
    assert_eq!(aggregation.subtree_sizes(), &[8, 6, 4, 2, 1, 1, 1, 1]);
    assert_eq!(aggregation.parent(7), Some(3));
}
