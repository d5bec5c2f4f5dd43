//! Graph data model: vertices at fixed coordinates, edges, and label offsets.
//!
//! A [`Graph`] is a plain value with public fields. Nothing is validated when
//! fields are assigned directly; references to unknown vertices surface when
//! the graph is drawn, or earlier through [`Graph::validate`].

use gdraw_common::{to_subscript, Coord, GDrawError, Result, Rgb, VertexId};
use std::collections::BTreeMap;

/// An unordered pair of vertex identifiers.
pub type Edge = (VertexId, VertexId);

/// Edge storage: a flat list of pairs or per-vertex neighbour lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edges {
    /// Ordered sequence of vertex pairs.
    List(Vec<Edge>),
    /// Neighbour lists keyed by vertex; each key/neighbour pair is one edge.
    Adjacency(BTreeMap<VertexId, Vec<VertexId>>),
}

impl Default for Edges {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl Edges {
    /// Iterates every edge as a `(u, v)` pair, in storage order.
    pub fn pairs(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        match self {
            Self::List(list) => Box::new(list.iter().copied()),
            Self::Adjacency(neighbours) => Box::new(
                neighbours
                    .iter()
                    .flat_map(|(&u, vs)| vs.iter().map(move |&v| (u, v))),
            ),
        }
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        match self {
            Self::List(list) => list.len(),
            Self::Adjacency(neighbours) => neighbours.values().map(Vec::len).sum(),
        }
    }

    /// Whether there are no edges.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<Edge>> for Edges {
    fn from(list: Vec<Edge>) -> Self {
        Self::List(list)
    }
}

impl From<BTreeMap<VertexId, Vec<VertexId>>> for Edges {
    fn from(neighbours: BTreeMap<VertexId, Vec<VertexId>>) -> Self {
        Self::Adjacency(neighbours)
    }
}

/// How a vertex identifier is turned into label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
    /// The identifier itself, e.g. `12`.
    #[default]
    Raw,
    /// `v` with the identifier as a subscript, e.g. `v₁₂`.
    Indexed,
}

impl LabelStyle {
    /// Label text for `vertex`.
    pub fn format(self, vertex: VertexId) -> String {
        match self {
            Self::Raw => vertex.to_string(),
            Self::Indexed => format!("v{}", to_subscript(vertex)),
        }
    }
}

/// Free text placed at an absolute position, e.g. the name of the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphLabel {
    /// Text to draw.
    pub text: String,
    /// Anchor of the text centre.
    pub at: Coord,
}

impl GraphLabel {
    /// Creates a new graph label.
    pub fn new(text: impl Into<String>, at: impl Into<Coord>) -> Self {
        Self {
            text: text.into(),
            at: at.into(),
        }
    }
}

/// A graph with explicit vertex coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    /// Vertex positions.
    pub vertices: BTreeMap<VertexId, Coord>,
    /// Edges between vertices.
    pub edges: Edges,
    /// Label offsets relative to each labelled vertex.
    pub label_positions: BTreeMap<VertexId, Coord>,
    /// Label text format.
    pub label_style: LabelStyle,
    /// Per-vertex marker colours.
    pub node_colors: BTreeMap<VertexId, Rgb>,
    /// Free-standing text.
    pub graph_labels: Vec<GraphLabel>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from vertex positions and an edge list.
    pub fn from_parts<V, C>(vertices: V, edges: impl Into<Edges>) -> Self
    where
        V: IntoIterator<Item = (VertexId, C)>,
        C: Into<Coord>,
    {
        Self {
            vertices: vertices.into_iter().map(|(id, at)| (id, at.into())).collect(),
            edges: edges.into(),
            ..Self::default()
        }
    }

    /// Sets label offsets, replacing any existing ones.
    #[must_use]
    pub fn with_label_positions<L, C>(mut self, offsets: L) -> Self
    where
        L: IntoIterator<Item = (VertexId, C)>,
        C: Into<Coord>,
    {
        self.label_positions = offsets.into_iter().map(|(id, at)| (id, at.into())).collect();
        self
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Position of `vertex`, if defined.
    pub fn vertex(&self, vertex: VertexId) -> Option<Coord> {
        self.vertices.get(&vertex).copied()
    }

    /// Position of `vertex`, or an [`GDrawError::UnknownVertex`] naming `context`.
    pub(crate) fn lookup(&self, vertex: VertexId, context: impl FnOnce() -> String) -> Result<Coord> {
        self.vertex(vertex)
            .ok_or_else(|| GDrawError::unknown_vertex(vertex, context()))
    }

    /// Label text for `vertex` under the graph's label style.
    pub fn label_text(&self, vertex: VertexId) -> String {
        self.label_style.format(vertex)
    }

    /// Adds `vertex` at `pos`, or at `pos` relative to the existing vertex `relative_to`.
    pub fn add_vertex(
        &mut self,
        vertex: VertexId,
        pos: impl Into<Coord>,
        relative_to: Option<VertexId>,
    ) -> Result<()> {
        if self.vertices.contains_key(&vertex) {
            return Err(GDrawError::DuplicateVertex { vertex });
        }

        let anchor = match relative_to {
            Some(anchor) => self.lookup(anchor, || format!("placement of vertex {vertex}"))?,
            None => Coord::ORIGIN,
        };

        self.vertices.insert(vertex, anchor + pos.into());
        Ok(())
    }

    /// Adds `vertex` at distance `radius` and angle `theta` (degrees, counter-clockwise)
    /// from the existing vertex `anchor`.
    pub fn radd_vertex(
        &mut self,
        vertex: VertexId,
        radius: f64,
        theta: f64,
        anchor: VertexId,
    ) -> Result<()> {
        if self.vertices.contains_key(&vertex) {
            return Err(GDrawError::DuplicateVertex { vertex });
        }

        let origin = self.lookup(anchor, || format!("placement of vertex {vertex}"))?;
        self.vertices
            .insert(vertex, origin.polar_offset(radius, theta.to_radians()));
        Ok(())
    }

    /// Translates every vertex by `(dx, dy)`.
    pub fn shift_vertices(&mut self, dx: f64, dy: f64) {
        let shift = Coord::new(dx, dy);
        for at in self.vertices.values_mut() {
            *at = *at + shift;
        }
    }

    /// Adds the edge `{u, v}`. Both endpoints must already be vertices.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        for endpoint in [u, v] {
            self.lookup(endpoint, || format!("edge ({u}, {v})"))?;
        }

        match &mut self.edges {
            Edges::List(list) => list.push((u, v)),
            Edges::Adjacency(neighbours) => neighbours.entry(u).or_default().push(v),
        }
        Ok(())
    }

    /// Adds several edges, stopping at the first one with an unknown endpoint.
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = Edge>) -> Result<()> {
        edges.into_iter().try_for_each(|(u, v)| self.add_edge(u, v))
    }

    /// Checks that edges, label offsets, and node colours only reference known vertices.
    pub fn validate(&self) -> Result<()> {
        for (u, v) in self.edges.pairs() {
            for endpoint in [u, v] {
                self.lookup(endpoint, || format!("edge ({u}, {v})"))?;
            }
        }

        for &vertex in self.label_positions.keys() {
            self.lookup(vertex, || "label position".to_string())?;
        }

        for &vertex in self.node_colors.keys() {
            self.lookup(vertex, || "node colour".to_string())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdraw_common::test_utils::assert_approx_eq;

    fn path_graph() -> Graph {
        Graph::from_parts([(1, (0.0, 0.0)), (2, (1.0, 1.0)), (3, (2.0, 0.0))], vec![(1, 2), (2, 3)])
    }

    #[test]
    fn test_edges_pairs() {
        let list = Edges::List(vec![(1, 2), (2, 3), (1, 2)]);
        assert_eq!(list.pairs().collect::<Vec<_>>(), vec![(1, 2), (2, 3), (1, 2)]);
        assert_eq!(list.len(), 3);

        let adjacency = Edges::Adjacency(BTreeMap::from([(2, vec![3]), (1, vec![2, 3])]));
        assert_eq!(
            adjacency.pairs().collect::<Vec<_>>(),
            vec![(1, 2), (1, 3), (2, 3)]
        );
        assert_eq!(adjacency.len(), 3);

        assert!(Edges::default().is_empty());
        assert!(Edges::Adjacency(BTreeMap::from([(1, vec![])])).is_empty());
    }

    #[test]
    fn test_label_style() {
        assert_eq!(LabelStyle::default(), LabelStyle::Raw);
        assert_eq!(LabelStyle::Raw.format(12), "12");
        assert_eq!(LabelStyle::Indexed.format(12), "v₁₂");
    }

    #[test]
    fn test_add_vertex() {
        let mut graph = Graph::new();
        graph.add_vertex(6, (3.0, 0.0), None).unwrap();
        graph.add_vertex(7, (-1.0, 1.75), Some(6)).unwrap();

        assert_eq!(graph.vertex(7), Some(Coord::new(2.0, 1.75)));
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn test_add_vertex_errors() {
        let mut graph = path_graph();

        let duplicate = graph.add_vertex(1, (5.0, 5.0), None).unwrap_err();
        assert!(matches!(duplicate, GDrawError::DuplicateVertex { vertex: 1 }));
        assert_eq!(graph.vertex(1), Some(Coord::ORIGIN));

        let unknown = graph.add_vertex(4, (1.0, 0.0), Some(9)).unwrap_err();
        assert!(matches!(unknown, GDrawError::UnknownVertex { vertex: 9, .. }));
        assert!(graph.vertex(4).is_none());
    }

    #[test]
    fn test_radd_vertex() {
        let mut graph = Graph::new();
        graph.add_vertex(1, (1.0, 1.0), None).unwrap();
        graph.radd_vertex(2, 2.0, 90.0, 1).unwrap();
        graph.radd_vertex(3, 1.0, 180.0, 1).unwrap();

        let two = graph.vertex(2).unwrap();
        assert_approx_eq(two.x, 1.0, 1e-12);
        assert_approx_eq(two.y, 3.0, 1e-12);

        let three = graph.vertex(3).unwrap();
        assert_approx_eq(three.x, 0.0, 1e-12);
        assert_approx_eq(three.y, 1.0, 1e-12);

        assert!(matches!(
            graph.radd_vertex(2, 1.0, 0.0, 1),
            Err(GDrawError::DuplicateVertex { vertex: 2 })
        ));
        assert!(matches!(
            graph.radd_vertex(4, 1.0, 0.0, 8),
            Err(GDrawError::UnknownVertex { vertex: 8, .. })
        ));
    }

    #[test]
    fn test_shift_vertices() {
        let mut graph = path_graph();
        graph.shift_vertices(1.0, -2.0);

        assert_eq!(graph.vertex(1), Some(Coord::new(1.0, -2.0)));
        assert_eq!(graph.vertex(3), Some(Coord::new(3.0, -2.0)));
    }

    #[test]
    fn test_add_edge() {
        let mut graph = path_graph();
        graph.add_edge(1, 3).unwrap();
        assert_eq!(graph.edge_count(), 3);

        let error = graph.add_edge(1, 42).unwrap_err();
        assert_eq!(error.to_string(), "Unknown vertex 42 referenced by edge (1, 42)");
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_add_edge_to_adjacency() {
        let mut graph = path_graph();
        graph.edges = Edges::Adjacency(BTreeMap::new());
        graph.add_edges([(1, 2), (1, 3), (2, 3)]).unwrap();

        assert_eq!(
            graph.edges,
            Edges::Adjacency(BTreeMap::from([(1, vec![2, 3]), (2, vec![3])]))
        );
    }

    #[test]
    fn test_add_edges_stops_at_first_error() {
        let mut graph = path_graph();
        let result = graph.add_edges([(1, 3), (3, 99), (2, 1)]);

        assert!(matches!(result, Err(GDrawError::UnknownVertex { vertex: 99, .. })));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_clone_is_deep() {
        let original = path_graph();
        let mut copy = original.clone();
        copy.shift_vertices(10.0, 10.0);
        copy.add_edge(1, 3).unwrap();

        assert_eq!(original.vertex(1), Some(Coord::ORIGIN));
        assert_eq!(original.edge_count(), 2);
    }

    #[test]
    fn test_validate() {
        let graph = path_graph().with_label_positions([(1, (0.1, 0.1))]);
        assert!(graph.validate().is_ok());

        let mut bad_edge = graph.clone();
        bad_edge.edges = Edges::List(vec![(1, 5)]);
        assert!(matches!(
            bad_edge.validate(),
            Err(GDrawError::UnknownVertex { vertex: 5, .. })
        ));

        let bad_label = graph.clone().with_label_positions([(7, (0.0, 0.0))]);
        let error = bad_label.validate().unwrap_err();
        assert_eq!(error.to_string(), "Unknown vertex 7 referenced by label position");

        let mut bad_color = graph;
        bad_color.node_colors.insert(8, Rgb::BLACK);
        assert!(matches!(
            bad_color.validate(),
            Err(GDrawError::UnknownVertex { vertex: 8, .. })
        ));
    }
}
