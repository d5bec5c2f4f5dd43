//! In-memory canvas: the drawing primitives produced from graphs.
//!
//! The canvas is backend independent. It is turned into pixels or SVG only
//! when the drawer renders it, so one canvas can be exported many times.

use crate::graph::{Edge, Graph};
use gdraw_common::{Coord, Result, Rgb, VertexId};
use std::ops::Range;

/// A vertex marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Vertex the marker stands for.
    pub vertex: VertexId,
    /// Marker centre.
    pub at: Coord,
    /// Colour override; `None` uses the configured vertex colour.
    pub color: Option<Rgb>,
}

/// A straight edge segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Edge the segment stands for.
    pub edge: Edge,
    /// Start point.
    pub from: Coord,
    /// End point.
    pub to: Coord,
}

/// A text label centred on its anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Text to draw.
    pub text: String,
    /// Anchor of the text centre.
    pub at: Coord,
    /// Labelled vertex, `None` for free-standing graph labels.
    pub vertex: Option<VertexId>,
}

/// Drawing primitives in paint order groups: segments, markers, labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canvas {
    segments: Vec<Segment>,
    markers: Vec<Marker>,
    labels: Vec<Label>,
}

impl Canvas {
    /// Creates an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Translates a graph into primitives.
    ///
    /// Fails on the first edge, node colour, or label that references a vertex
    /// missing from `graph.vertices`.
    pub fn from_graph(graph: &Graph) -> Result<Self> {
        let mut canvas = Self::new();

        for (u, v) in graph.edges.pairs() {
            let from = graph.lookup(u, || format!("edge ({u}, {v})"))?;
            let to = graph.lookup(v, || format!("edge ({u}, {v})"))?;
            canvas.segments.push(Segment { edge: (u, v), from, to });
        }

        for &vertex in graph.node_colors.keys() {
            graph.lookup(vertex, || "node colour".to_string())?;
        }

        canvas
            .markers
            .extend(graph.vertices.iter().map(|(&vertex, &at)| Marker {
                vertex,
                at,
                color: graph.node_colors.get(&vertex).copied(),
            }));

        for (&vertex, &offset) in &graph.label_positions {
            let at = graph.lookup(vertex, || "label position".to_string())?;
            canvas.labels.push(Label {
                text: graph.label_text(vertex),
                at: at + offset,
                vertex: Some(vertex),
            });
        }

        canvas
            .labels
            .extend(graph.graph_labels.iter().map(|label| Label {
                text: label.text.clone(),
                at: label.at,
                vertex: None,
            }));

        Ok(canvas)
    }

    /// Edge segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Vertex markers.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Text labels.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// The label drawn for `vertex`, if any.
    pub fn label_for(&self, vertex: VertexId) -> Option<&Label> {
        self.labels.iter().find(|label| label.vertex == Some(vertex))
    }

    /// Whether nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.markers.is_empty() && self.labels.is_empty()
    }

    /// Removes every primitive.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.markers.clear();
        self.labels.clear();
    }

    /// Draws `other` on top of `self`.
    pub fn append(&mut self, mut other: Self) {
        self.segments.append(&mut other.segments);
        self.markers.append(&mut other.markers);
        self.labels.append(&mut other.labels);
    }

    /// Smallest box containing every primitive anchor, or [`Bounds::UNIT`] when empty.
    pub fn bounds(&self) -> Bounds {
        let points = self
            .segments
            .iter()
            .flat_map(|s| [s.from, s.to])
            .chain(self.markers.iter().map(|m| m.at))
            .chain(self.labels.iter().map(|l| l.at));

        Bounds::enclosing(points).unwrap_or(Bounds::UNIT)
    }
}

/// Axis-aligned box in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Left edge.
    pub x_min: f64,
    /// Right edge.
    pub x_max: f64,
    /// Bottom edge.
    pub y_min: f64,
    /// Top edge.
    pub y_max: f64,
}

impl Bounds {
    /// The square `[-1, 1]²`.
    pub const UNIT: Self = Self {
        x_min: -1.0,
        x_max: 1.0,
        y_min: -1.0,
        y_max: 1.0,
    };

    /// Smallest box containing `points`; `None` if there are none.
    pub fn enclosing(points: impl IntoIterator<Item = Coord>) -> Option<Self> {
        points.into_iter().fold(None, |bounds, p| {
            Some(match bounds {
                None => Self {
                    x_min: p.x,
                    x_max: p.x,
                    y_min: p.y,
                    y_max: p.y,
                },
                Some(b) => Self {
                    x_min: b.x_min.min(p.x),
                    x_max: b.x_max.max(p.x),
                    y_min: b.y_min.min(p.y),
                    y_max: b.y_max.max(p.y),
                },
            })
        })
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Centre point.
    pub fn center(&self) -> Coord {
        Coord::new(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Grows every side by `fraction` of the larger extent; a single point grows by 1.
    #[must_use]
    pub fn padded(self, fraction: f64) -> Self {
        let span = self.width().max(self.height());
        let pad = if span > 0.0 { span * fraction } else { 1.0 };

        Self {
            x_min: self.x_min - pad,
            x_max: self.x_max + pad,
            y_min: self.y_min - pad,
            y_max: self.y_max + pad,
        }
    }

    /// Widens one axis so a unit in x and a unit in y cover the same number of pixels
    /// on a `pixel_width` by `pixel_height` area. The centre is kept.
    #[must_use]
    pub fn equal_aspect(self, pixel_width: u32, pixel_height: u32) -> Self {
        let pw = f64::from(pixel_width.max(1));
        let ph = f64::from(pixel_height.max(1));

        let scale = (pw / self.width()).min(ph / self.height());
        if !scale.is_finite() || scale <= 0.0 {
            return self;
        }

        let half_w = pw / scale / 2.0;
        let half_h = ph / scale / 2.0;
        let c = self.center();

        Self {
            x_min: c.x - half_w,
            x_max: c.x + half_w,
            y_min: c.y - half_h,
            y_max: c.y + half_h,
        }
    }

    /// Horizontal range.
    pub fn x_range(&self) -> Range<f64> {
        self.x_min..self.x_max
    }

    /// Vertical range.
    pub fn y_range(&self) -> Range<f64> {
        self.y_min..self.y_max
    }
}
