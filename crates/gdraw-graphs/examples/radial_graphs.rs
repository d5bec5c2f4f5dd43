//! Graphs with vertices evenly spaced on a circle.
//!
//! Usage: `cargo run -p gdraw-graphs --example radial_graphs [OUTPUT_DIR]`

use anyhow::Result;
use gdraw_graphs::{Graph, GraphDrawer, RadialGraph};
use std::path::PathBuf;

const fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// `{u, v}` is an edge iff `gcd(u, v) >= 2`.
fn gcd_graph(n: i64) -> Result<Graph> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut graph = RadialGraph::new(n as usize, 3.0).build();

    let edges = (1..=n)
        .flat_map(|u| (u + 1..=n).map(move |v| (u, v)))
        .filter(|&(u, v)| gcd(u, v) >= 2);
    graph.add_edges(edges)?;
    Ok(graph)
}

fn main() -> Result<()> {
    gdraw_common::init_default_logging()?;

    let out_dir = std::env::args().nth(1).map_or_else(|| PathBuf::from("."), PathBuf::from);
    std::fs::create_dir_all(&out_dir)?;

    let mut drawer = GraphDrawer::new((7.0, 7.0));
    drawer.draw(&gcd_graph(12)?)?;
    drawer.save(out_dir.join("gcd-graph.svg"))?;

    let mut octagon = RadialGraph::new(8, 2.0).build();
    octagon.add_edges([
        (1, 7),
        (2, 3),
        (4, 1),
        (7, 2),
        (5, 8),
        (6, 2),
        (5, 2),
        (4, 7),
        (1, 6),
    ])?;

    let mut drawer = GraphDrawer::new((4.0, 4.0));
    drawer.draw(&octagon)?;
    drawer.save(out_dir.join("radial-8.svg"))?;

    println!("wrote radial graphs to {}", out_dir.display());
    Ok(())
}
