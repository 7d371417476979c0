//! Independent checks for aggregator output.

use std::collections::VecDeque;

use tracing::{debug, instrument};

use crate::domain::adjacency::Adjacency;
use crate::domain::entities::{Aggregation, DistanceSum};
use crate::domain::error::{DomainError, DomainResult};

/// Reference distance sums by breadth-first search from every node. O(N²).
///
/// Nodes unreachable from a source contribute nothing to its sum.
#[instrument(level = "debug", skip(adjacency), fields(nodes = adjacency.node_count()))]
pub fn brute_force_distance_sums(adjacency: &Adjacency) -> Vec<DistanceSum> {
    let node_count = adjacency.node_count();
    let mut distance = vec![usize::MAX; node_count];
    let mut queue = VecDeque::with_capacity(node_count);

    (0..node_count)
        .map(|source| {
            distance.fill(usize::MAX);
            distance[source] = 0;
            queue.clear();
            queue.push_back(source);

            let mut sum: DistanceSum = 0;
            while let Some(node) = queue.pop_front() {
                sum += distance[node] as DistanceSum;
                for &next in adjacency.neighbors(node) {
                    if distance[next] == usize::MAX {
                        distance[next] = distance[node] + 1;
                        queue.push_back(next);
                    }
                }
            }
            sum
        })
        .collect()
}

/// Check `Σ sum(i) == 2 * Σ_edges size * (N - size)`.
#[instrument(level = "debug", skip(aggregation))]
pub fn check_edge_identity(aggregation: &Aggregation) -> DomainResult<()> {
    let total = aggregation.total();
    let expected = aggregation.edge_identity_total();
    debug!("edge identity: total={} expected={}", total, expected);
    if total != expected {
        return Err(DomainError::IdentityViolated { total, expected });
    }
    Ok(())
}

/// Compare every node against [`brute_force_distance_sums`].
#[instrument(level = "debug", skip_all)]
pub fn check_against_brute_force(
    adjacency: &Adjacency,
    aggregation: &Aggregation,
) -> DomainResult<()> {
    let reference = brute_force_distance_sums(adjacency);
    let mismatch = reference
        .iter()
        .zip(aggregation.distance_sums())
        .position(|(expected, actual)| expected != actual);

    match mismatch {
        Some(node) => Err(DomainError::BruteForceMismatch {
            node,
            expected: reference[node],
            actual: aggregation.distance_sums()[node],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DistanceAggregator, Edge, TreeBuilder};

    fn star(leaves: i64) -> Adjacency {
        let edges: Vec<Edge> = (1..=leaves).map(|leaf| Edge(0, leaf)).collect();
        TreeBuilder::new()
            .build(leaves as usize + 1, &edges)
            .unwrap()
    }

    #[test]
    fn given_star_when_brute_forcing_then_center_is_leaf_count() {
        let sums = brute_force_distance_sums(&star(4));
        // center: 4 * 1; leaf: 1 + 3 * 2
        assert_eq!(sums, vec![4, 7, 7, 7, 7]);
    }

    #[test]
    fn given_aggregated_star_when_checking_then_passes() {
        let adjacency = star(5);
        let aggregation = DistanceAggregator::new().aggregate(&adjacency).unwrap();
        check_edge_identity(&aggregation).unwrap();
        check_against_brute_force(&adjacency, &aggregation).unwrap();
    }

    #[test]
    fn given_tampered_sums_when_checking_then_reports_mismatch() {
        let adjacency = star(3);
        let mut aggregation = DistanceAggregator::new().aggregate(&adjacency).unwrap();
        aggregation.distance_sums[2] += 1;

        assert_eq!(
            check_edge_identity(&aggregation),
            Err(DomainError::IdentityViolated {
                total: 19,
                expected: 18
            })
        );
        assert_eq!(
            check_against_brute_force(&adjacency, &aggregation),
            Err(DomainError::BruteForceMismatch {
                node: 2,
                expected: 5,
                actual: 6
            })
        );
    }
}
