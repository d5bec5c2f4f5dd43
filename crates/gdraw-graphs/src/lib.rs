//! # gdraw Graphs
//!
//! Graph model and drawing for gdraw.
//!
//! A [`Graph`] holds vertices at explicit coordinates, the edges between them,
//! and optional label offsets. A [`GraphDrawer`] draws one or more graphs onto
//! a fixed-size canvas and saves it as PNG, JPEG, BMP, or SVG using plotters.
//!
//! ```no_run
//! use gdraw_graphs::{Graph, GraphDrawer};
//!
//! # fn main() -> gdraw_common::Result<()> {
//! let graph = Graph::from_parts([(1, (0.0, 0.0)), (2, (1.0, 1.0))], vec![(1, 2)])
//!     .with_label_positions([(1, (0.1, 0.1)), (2, (-0.1, -0.1))]);
//!
//! let mut drawer = GraphDrawer::new((4.0, 4.0));
//! drawer.draw(&graph)?;
//! drawer.save("sample-graph.png")?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod canvas;
pub mod drawer;
pub mod format;
pub mod graph;
pub mod radial;
pub mod renderer;

pub use canvas::*;
pub use drawer::GraphDrawer;
pub use format::ImageFormat;
pub use graph::*;
pub use radial::RadialGraph;
pub use renderer::CanvasRenderer;

pub use gdraw_config::{DrawerConfig, FigSize, StyleConfig};
