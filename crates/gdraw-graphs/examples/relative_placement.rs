//! Builds a graph one vertex at a time, each placed relative to an earlier one,
//! with edges given as neighbour lists.
//!
//! Usage: `cargo run -p gdraw-graphs --example relative_placement [OUTPUT_DIR]`

use anyhow::Result;
use gdraw_graphs::{Edges, Graph, GraphDrawer};
use std::collections::BTreeMap;
use std::path::PathBuf;

fn main() -> Result<()> {
    gdraw_common::init_default_logging()?;

    let out_dir = std::env::args().nth(1).map_or_else(|| PathBuf::from("."), PathBuf::from);
    std::fs::create_dir_all(&out_dir)?;

    let mut graph = Graph::new();
    graph.add_vertex(6, (3.0, 0.0), None)?;

    // (vertex, offset, anchor)
    let placements = [
        (7, (-1.0, 1.75), 6),
        (8, (-2.0, 0.0), 7),
        (11, (-0.25, 2.5), 8),
        (5, (1.0, 1.0), 7),
        (4, (1.75, -0.5), 5),
        (9, (-0.75, 1.75), 5),
        (10, (1.0, 1.0), 11),
        (12, (-0.5, 1.5), 10),
        (1, (2.5, 0.25), 12),
        (2, (1.0, -2.0), 1),
        (3, (2.0, -0.5), 2),
    ];
    for (vertex, offset, anchor) in placements {
        graph.add_vertex(vertex, offset, Some(anchor))?;
    }

    let dx = 0.4;
    graph = graph.with_label_positions([
        (12, (-dx, dx)),
        (11, (-1.5 * dx, 0.0)),
        (8, (-1.5 * dx, 0.0)),
        (10, (dx, dx)),
        (9, (-dx, -dx)),
        (7, (-dx / 2.0, dx)),
        (5, (dx, dx)),
        (6, (1.5 * dx, 0.0)),
        (4, (1.5 * dx, 0.0)),
        (3, (dx, 0.0)),
        (2, (dx, -dx)),
        (1, (dx, dx / 2.0)),
    ]);

    graph.edges = Edges::Adjacency(BTreeMap::from([
        (1, vec![2, 3, 12]),
        (2, vec![3, 9]),
        (3, vec![4]),
        (4, vec![5, 6]),
        (5, vec![7, 9]),
        (6, vec![7, 8]),
        (7, vec![8]),
        (8, vec![11]),
        (9, vec![10]),
        (10, vec![11, 12]),
        (11, vec![12]),
    ]));
    graph.validate()?;

    let mut drawer = GraphDrawer::new((10.0, 7.0));
    drawer.draw(&graph)?;

    for path in drawer.save(out_dir.join("sample-graph-2.svg"))? {
        println!("wrote {}", path.display());
    }
    Ok(())
}
