//! Input adapter: parses the textual `n` and `[[a,b],[c,d],...]` edge literal.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::Edge;

const PAIR: &str = r"\[\s*(-?\d+)\s*,\s*(-?\d+)\s*\]";

static EDGE_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\[\s*(?:{PAIR}(?:\s*,\s*{PAIR})*)?\s*\]$")).expect("edge list regex")
});

static EDGE_PAIR: LazyLock<Regex> = LazyLock::new(|| Regex::new(PAIR).expect("edge pair regex"));

/// Parse the node count. Range checks are left to the solver, which knows the limit.
#[instrument(level = "trace")]
pub fn parse_node_count(input: &str) -> ApplicationResult<usize> {
    let trimmed = input.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| ApplicationError::parse(trimmed, "n must be a non-negative integer"))
}

/// Parse a bracketed edge literal such as `[[0,1],[1,2]]`.
///
/// Empty input and `[]` both mean "no edges". Endpoints may be negative; the
/// tree builder rejects them with the offending edge in the message.
#[instrument(level = "trace")]
pub fn parse_edges(input: &str) -> ApplicationResult<Vec<Edge>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if !EDGE_LIST.is_match(trimmed) {
        return Err(ApplicationError::parse(
            trimmed,
            "expected edges in the form [[a,b],[c,d],...]",
        ));
    }

    let edges = EDGE_PAIR
        .captures_iter(trimmed)
        .map(|caps| -> ApplicationResult<Edge> {
            Ok(Edge(parse_label(&caps[1])?, parse_label(&caps[2])?))
        })
        .collect::<ApplicationResult<Vec<_>>>()?;
    debug!("parsed {} edges", edges.len());
    Ok(edges)
}

fn parse_label(digits: &str) -> ApplicationResult<i64> {
    digits
        .parse::<i64>()
        .map_err(|_| ApplicationError::parse(digits, "node label does not fit in 64 bits"))
}
