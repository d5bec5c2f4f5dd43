//! Graphs whose vertices sit evenly spaced on a circle.

use crate::graph::Graph;
use gdraw_common::{Coord, VertexId};
use std::f64::consts::TAU;

/// Builder for a graph with vertices `1..=n` on a circle of radius `radius`.
///
/// Edges start empty; labels, when enabled, point radially outward.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGraph {
    n: usize,
    radius: f64,
    phi: Option<f64>,
    label_distance: f64,
    vertex_labels: bool,
}

impl RadialGraph {
    /// Creates a builder for `n` vertices on a circle of the given radius.
    pub const fn new(n: usize, radius: f64) -> Self {
        Self {
            n,
            radius,
            phi: None,
            label_distance: 0.5,
            vertex_labels: true,
        }
    }

    /// Angle of the first vertex in degrees. By default the first vertex sits half a step
    /// counter-clockwise from the positive x-axis.
    #[must_use]
    pub fn phi(mut self, degrees: f64) -> Self {
        self.phi = Some(degrees);
        self
    }

    /// Distance from each vertex to its label.
    #[must_use]
    pub fn label_distance(mut self, distance: f64) -> Self {
        self.label_distance = distance;
        self
    }

    /// Whether to generate label offsets.
    #[must_use]
    pub fn vertex_labels(mut self, enabled: bool) -> Self {
        self.vertex_labels = enabled;
        self
    }

    /// Angle in radians of the `k`-th vertex (zero based).
    #[allow(clippy::cast_precision_loss)]
    fn angle(&self, k: usize) -> f64 {
        let step = TAU / self.n as f64;
        let start = self.phi.map_or(step / 2.0, f64::to_radians);
        (k as f64).mul_add(step, start)
    }

    /// Builds the graph.
    #[allow(clippy::cast_possible_wrap)]
    pub fn build(&self) -> Graph {
        let mut graph = Graph::new();

        for k in 0..self.n {
            let vertex = (k + 1) as VertexId;
            let theta = self.angle(k);

            graph
                .vertices
                .insert(vertex, Coord::ORIGIN.polar_offset(self.radius, theta));

            if self.vertex_labels {
                graph
                    .label_positions
                    .insert(vertex, Coord::ORIGIN.polar_offset(self.label_distance, theta));
            }
        }

        tracing::debug!(
            "Placed {} vertices on a circle of radius {}",
            self.n,
            self.radius
        );
        graph
    }
}

impl From<RadialGraph> for Graph {
    fn from(builder: RadialGraph) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdraw_common::test_utils::assert_approx_eq;

    #[test]
    fn test_vertices_on_circle() {
        let graph = RadialGraph::new(12, 3.0).build();

        assert_eq!(graph.vertex_count(), 12);
        assert_eq!(graph.label_positions.len(), 12);
        assert!(graph.edges.is_empty());

        for at in graph.vertices.values() {
            assert_approx_eq(at.x.hypot(at.y), 3.0, 1e-9);
        }
        for offset in graph.label_positions.values() {
            assert_approx_eq(offset.x.hypot(offset.y), 0.5, 1e-9);
        }
    }

    #[test]
    fn test_default_start_angle_is_half_step() {
        let graph = RadialGraph::new(4, 2.0).build();
        let first = graph.vertex(1).unwrap();

        // 45 degrees for four vertices
        assert_approx_eq(first.x, 2.0_f64.sqrt(), 1e-9);
        assert_approx_eq(first.y, 2.0_f64.sqrt(), 1e-9);
    }

    #[test]
    fn test_phi_and_labels() {
        let graph = RadialGraph::new(4, 1.0)
            .phi(90.0)
            .label_distance(0.25)
            .build();

        let first = graph.vertex(1).unwrap();
        assert_approx_eq(first.x, 0.0, 1e-9);
        assert_approx_eq(first.y, 1.0, 1e-9);

        let second = graph.vertex(2).unwrap();
        assert_approx_eq(second.x, -1.0, 1e-9);
        assert_approx_eq(second.y, 0.0, 1e-9);

        let label = graph.label_positions[&1];
        assert_approx_eq(label.y, 0.25, 1e-9);
    }

    #[test]
    fn test_without_labels() {
        let graph: Graph = RadialGraph::new(8, 2.0).vertex_labels(false).into();
        assert_eq!(graph.vertex_count(), 8);
        assert!(graph.label_positions.is_empty());
    }

    #[test]
    fn test_zero_vertices() {
        let graph = RadialGraph::new(0, 1.0).build();
        assert_eq!(graph, Graph::new());
    }
}
