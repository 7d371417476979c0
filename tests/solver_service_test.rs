//! Tests for SolverService: problem files, limits and checks

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use treedist::application::{
    format_distance_sums, ApplicationError, OutputStyle, Problem, SolverService,
};
use treedist::config::Settings;
use treedist::domain::{DomainError, Edge};
use treedist::util::testing;

fn write_problem(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write problem file");
    path
}

#[test]
fn given_problem_file_when_solving_then_prints_original_format() {
    // Arrange
    testing::init_test_setup();
    let temp = TempDir::new().unwrap();
    let path = write_problem(
        &temp,
        "reference.toml",
        "node_count = 6\nedges = [[0, 1], [0, 2], [2, 3], [2, 4], [2, 5]]\n",
    );

    // Act
    let problem = Problem::load(&path).unwrap();
    let solution = SolverService::new(Settings::default())
        .solve(&problem)
        .unwrap();

    // Assert
    assert_eq!(
        format_distance_sums(OutputStyle::Plain, &solution.distance_sums),
        "Output: [8 12 6 10 10 10]"
    );
}

#[test]
fn given_single_node_file_without_edges_when_solving_then_zero() {
    let temp = TempDir::new().unwrap();
    let path = write_problem(&temp, "single.toml", "node_count = 1\n");

    let problem = Problem::load(&path).unwrap();
    let solution = SolverService::new(Settings::default())
        .solve(&problem)
        .unwrap();

    assert_eq!(solution.distance_sums, vec![0]);
}

#[test]
fn given_missing_file_when_loading_then_operation_failed() {
    let temp = TempDir::new().unwrap();
    let result = Problem::load(&temp.path().join("nope.toml"));
    assert!(matches!(result, Err(ApplicationError::OperationFailed { .. })));
}

#[test]
fn given_malformed_file_when_loading_then_invalid_problem() {
    let temp = TempDir::new().unwrap();
    let path = write_problem(&temp, "bad.toml", "node_count = -2\nedges = []\n");
    let result = Problem::load(&path);
    assert!(matches!(result, Err(ApplicationError::InvalidProblem { .. })));
}

#[test]
fn given_negative_label_in_file_when_solving_then_out_of_range() {
    let temp = TempDir::new().unwrap();
    let path = write_problem(&temp, "neg.toml", "node_count = 2\nedges = [[0, -1]]\n");

    let problem = Problem::load(&path).unwrap();
    let err = SolverService::new(Settings::default())
        .solve(&problem)
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::OutOfRangeNode {
            edge: Edge(0, -1),
            ..
        })
    ));
}

#[test]
fn given_node_count_above_limit_when_solving_then_out_of_range() {
    let settings = Settings {
        max_nodes: 3,
        ..Settings::default()
    };
    let problem = Problem::new(4, vec![Edge(0, 1), Edge(1, 2), Edge(2, 3)]);

    let err = SolverService::new(settings).solve(&problem).unwrap_err();

    assert_eq!(
        err.to_string(),
        "n must be between 1 and 3, got 4"
    );
}

#[test]
fn given_literals_when_checking_then_report_matches_identity() {
    let problem = Problem::from_literals("6", "[[0,1],[0,2],[2,3],[2,4],[2,5]]").unwrap();

    let report = SolverService::new(Settings::default())
        .with_root(4)
        .check(&problem)
        .unwrap();

    assert_eq!(report.node_count, 6);
    assert_eq!(report.total, 56);
    assert_eq!(report.identity_total, 56);
}

#[test]
fn given_root_outside_tree_when_solving_then_invalid_root() {
    let problem = Problem::new(2, vec![Edge(0, 1)]);
    let err = SolverService::new(Settings::default())
        .with_root(5)
        .solve(&problem)
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::InvalidRoot { root: 5, .. })
    ));
}

#[test]
fn given_small_tree_when_rendering_then_root_line_first() {
    let problem = Problem::new(3, vec![Edge(0, 1), Edge(0, 2)]);
    let tree = SolverService::new(Settings::default())
        .with_root(1)
        .render(&problem)
        .unwrap()
        .to_string();

    let first_line = tree.lines().next().unwrap();
    assert_eq!(first_line, "1 (size=3, sum=3)");
    assert!(tree.contains("2 (size=1, sum=3)"));
}
