//! Prints converged scores for a handful of reference networks.
//!
//! Each network is built through the public API and solved independently,
//! then its scores are listed in registration order.

use webrank::{Graph, PageRank};

fn main() {
    let networks: Vec<(&str, Vec<(&str, &str)>)> = vec![
        ("Network 1", vec![("A1", "B1"), ("B1", "A1")]),
        ("Network 2", vec![("A2", "C2"), ("C2", "B2"), ("B2", "A2")]),
        (
            "Network 3",
            vec![("A3", "B3"), ("B3", "A3"), ("B3", "C3"), ("C3", "A3")],
        ),
        ("Network 4", vec![("A4", "B4"), ("B4", "C4")]),
    ];

    let solver = PageRank::new();

    for (name, links) in networks {
        let mut graph = Graph::new();
        for (from, to) in links {
            let from = graph.add_node(from);
            let to = graph.add_node(to);
            graph.add_edge(from, to);
        }

        let report = solver.solve(&mut graph);

        println!("{name} ({} sweeps):", report.sweeps);
        for (_, node) in graph.nodes() {
            println!("  {}: {:.4}", node.id(), node.score());
        }
        println!();
    }
}
