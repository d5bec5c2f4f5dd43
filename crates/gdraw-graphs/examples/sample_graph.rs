//! Draws a small planar graph with hand-placed labels.
//!
//! Usage: `cargo run -p gdraw-graphs --example sample_graph [OUTPUT_DIR]`

use anyhow::Result;
use gdraw_graphs::{Graph, GraphDrawer};
use std::path::PathBuf;

fn main() -> Result<()> {
    gdraw_common::init_default_logging()?;

    let out_dir = std::env::args().nth(1).map_or_else(|| PathBuf::from("."), PathBuf::from);
    std::fs::create_dir_all(&out_dir)?;

    let (dx, dy) = (0.3, 0.3);
    let graph = Graph::from_parts(
        [
            (1, (0.0, 2.0)),
            (2, (1.0, 3.0)),
            (3, (1.0, 1.0)),
            (4, (2.0, 2.0)),
            (5, (2.0, 0.0)),
            (6, (3.0, 1.0)),
            (7, (4.0, 0.0)),
            (8, (5.0, 2.0)),
            (9, (3.0, 3.0)),
            (10, (3.0, 4.0)),
            (11, (2.0, 4.0)),
        ],
        vec![
            (1, 2), (1, 3), (2, 4), (3, 4), (4, 6),
            (5, 6), (5, 7), (4, 8), (4, 9), (6, 7),
            (6, 8), (6, 9), (7, 9), (8, 9), (9, 10),
        ],
    )
    .with_label_positions([
        (1, (-0.25, dy)),
        (2, (0.0, dy)),
        (3, (0.0, -dy)),
        (4, (0.0, 2.0 * dy)),
        (5, (0.0, -dy)),
        (6, (-2.0 * dx, 0.0)),
        (7, (0.0, -dy)),
        (8, (dx, dy)),
        (9, (2.0 * dx, 0.25 * dy)),
        (10, (2.0 * dx, 0.0)),
        (11, (0.0, dy)),
    ]);

    let mut drawer = GraphDrawer::new((6.0, 6.0));
    drawer.draw(&graph)?;

    for path in drawer.save(out_dir.join("sample-graph"))? {
        println!("wrote {}", path.display());
    }
    Ok(())
}
