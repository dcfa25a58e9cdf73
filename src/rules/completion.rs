//! Box-completion evaluation.
//!
//! Only the boxes bounded by the newest edge can change completion
//! status, so [`completed_by`] checks at most two boxes. The exhaustive
//! [`completed_boxes_full_scan`] gives the same answer by rescanning the
//! whole board and exists to cross-check the scoped version.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::instrument;

use crate::core::{BoardTopology, Edge, GridBox, Player};

/// Check if all four bounding edges of a box are claimed.
#[must_use]
pub fn is_complete(grid_box: GridBox, claimed_edges: &FxHashMap<Edge, Player>) -> bool {
    grid_box
        .edges()
        .iter()
        .all(|edge| claimed_edges.contains_key(edge))
}

/// Boxes newly completed by `edge`, which must already be in `claimed_edges`.
///
/// Boxes already in `claimed_boxes` are skipped. The result is in
/// [`BoardTopology::boxes_bounded_by`] order.
#[instrument(level = "trace", skip(topology, claimed_edges, claimed_boxes))]
pub fn completed_by(
    topology: &BoardTopology,
    edge: Edge,
    claimed_edges: &FxHashMap<Edge, Player>,
    claimed_boxes: &FxHashMap<GridBox, Player>,
) -> SmallVec<[GridBox; 2]> {
    topology
        .boxes_bounded_by(edge)
        .into_iter()
        .filter(|grid_box| !claimed_boxes.contains_key(grid_box))
        .filter(|&grid_box| is_complete(grid_box, claimed_edges))
        .collect()
}

/// Every complete box not yet in `claimed_boxes`, in row-major order.
#[must_use]
pub fn completed_boxes_full_scan(
    topology: &BoardTopology,
    claimed_edges: &FxHashMap<Edge, Player>,
    claimed_boxes: &FxHashMap<GridBox, Player>,
) -> Vec<GridBox> {
    topology
        .boxes()
        .filter(|grid_box| !claimed_boxes.contains_key(grid_box))
        .filter(|&grid_box| is_complete(grid_box, claimed_edges))
        .collect()
}
