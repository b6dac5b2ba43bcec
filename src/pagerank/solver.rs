//! Damped power-iteration solver.
//!
//! Implements the classic PageRank fixed-point iteration: every node pulls
//! score from its incoming links, damped toward a uniform teleport floor,
//! until the largest per-node change falls below the tolerance.

use super::observer::{NoopObserver, SolveObserver};
use super::SolveReport;
use crate::graph::{Graph, NodeId};

/// Enter a tracing span for a solve run (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! solve_span {
    ($graph:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pagerank_solve", nodes = $graph.len()).entered();
    };
}

/// PageRank solver configuration.
#[derive(Debug, Clone)]
pub struct PageRank {
    /// Damping factor (typically 0.85).
    pub damping: f64,
    /// Convergence tolerance: the solver stops once no node's score changes
    /// by this much between sweeps.
    pub tolerance: f64,
}

impl Default for PageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: 1e-4,
        }
    }
}

impl PageRank {
    /// Create a new solver with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the convergence tolerance.
    ///
    /// A tolerance of zero or below may never be satisfied under
    /// floating-point rounding; choosing a terminating value is the caller's
    /// responsibility.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Run the solver to convergence, writing scores back into the graph.
    ///
    /// Scores are fully re-initialized to `1/N` on every call, so repeated
    /// runs over unchanged topology reconverge to the same result. An empty
    /// graph returns immediately with no state change.
    ///
    /// There is no iteration cap: for `0 < damping < 1` the update is a
    /// contraction and converges geometrically on any finite graph.
    pub fn solve(&self, graph: &mut Graph) -> SolveReport {
        self.solve_with(graph, &mut NoopObserver)
    }

    /// Run the solver with an observer notified after every sweep.
    pub fn solve_with(
        &self,
        graph: &mut Graph,
        observer: &mut dyn SolveObserver,
    ) -> SolveReport {
        solve_span!(graph);

        let n = graph.len();
        if n == 0 {
            return SolveReport::new(0, 0.0);
        }

        graph.reset_scores(1.0 / n as f64);

        let teleport = (1.0 - self.damping) / n as f64;
        let mut new_scores = vec![0.0; n];
        let mut sweeps = 0;

        loop {
            sweeps += 1;

            // Read pass: every new score is computed from the previous
            // sweep's snapshot before any node is overwritten (Jacobi-style).
            for (id, node) in graph.nodes() {
                let rank_sum: f64 = node
                    .incoming()
                    .iter()
                    // q appears in an incoming list only because an edge
                    // q -> p was inserted, so q.out_degree() >= 1.
                    .map(|&q| graph.score(q) / graph.out_degree(q) as f64)
                    .sum();
                new_scores[id.index()] = teleport + self.damping * rank_sum;
            }

            // Write pass.
            let mut max_change = 0.0f64;
            for (i, &next) in new_scores.iter().enumerate() {
                let id = NodeId::from_index(i);
                let change = (next - graph.score(id)).abs();
                max_change = max_change.max(change);
                graph.set_score(id, next);
            }

            observer.on_sweep(sweeps, max_change);
            #[cfg(feature = "tracing")]
            tracing::debug!(sweep = sweeps, max_change, "sweep complete");

            if max_change < self.tolerance {
                return SolveReport::new(sweeps, max_change);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagerank::ConvergenceTrace;

    /// A <-> B.
    fn build_two_cycle() -> Graph {
        let mut graph = Graph::new();
        let a = graph.add_node("A");
        let b = graph.add_node("B");
        graph.add_edge(a, b);
        graph.add_edge(b, a);
        graph
    }

    /// A -> C -> B -> A.
    fn build_triangle() -> Graph {
        let mut graph = Graph::new();
        let a = graph.add_node("A");
        let b = graph.add_node("B");
        let c = graph.add_node("C");
        graph.add_edge(a, c);
        graph.add_edge(c, b);
        graph.add_edge(b, a);
        graph
    }

    /// A -> B, B -> A, B -> C, C -> A: A has two incoming contributors.
    fn build_cycle_with_fan() -> Graph {
        let mut graph = Graph::new();
        let a = graph.add_node("A");
        let b = graph.add_node("B");
        let c = graph.add_node("C");
        graph.add_edge(a, b);
        graph.add_edge(b, a);
        graph.add_edge(b, c);
        graph.add_edge(c, a);
        graph
    }

    fn scores(graph: &Graph) -> Vec<f64> {
        graph.nodes().map(|(_, n)| n.score()).collect()
    }

    #[test]
    fn test_two_cycle_splits_evenly() {
        let mut graph = build_two_cycle();
        PageRank::new().solve(&mut graph);

        for (_, node) in graph.nodes() {
            assert!((node.score() - 0.5).abs() < 0.01);
        }
    }

    #[test]
    fn test_fan_target_ranks_highest() {
        let mut graph = build_cycle_with_fan();
        PageRank::new().solve(&mut graph);

        let a = graph.get("A").unwrap();
        let top = graph.top_n(3);
        assert_eq!(top[0].0, a);
        for (_, node) in graph.nodes() {
            assert!(graph.score(a) >= node.score());
        }
    }

    #[test]
    fn test_scores_sum_to_one() {
        let mut graph = build_triangle();
        let report = PageRank::new().solve(&mut graph);

        let sum: f64 = scores(&graph).iter().sum();
        assert!((sum - 1.0).abs() < 0.01);
        assert!(report.max_change < 1e-4);
    }

    #[test]
    fn test_scores_within_bounds() {
        // Mixed topology: a cycle, a fan, and a dangling chain.
        let mut graph = build_cycle_with_fan();
        let c = graph.get("C").unwrap();
        let d = graph.add_node("D");
        let e = graph.add_node("E");
        graph.add_edge(d, e);
        graph.add_edge(c, d);
        PageRank::new().solve(&mut graph);

        for (_, node) in graph.nodes() {
            assert!(node.score() >= 0.0);
            assert!(node.score() <= 1.0);
        }
    }

    #[test]
    fn test_isolated_node_gets_teleport_floor() {
        let mut graph = build_two_cycle();
        let isolated = graph.add_node("D");
        PageRank::new().solve(&mut graph);

        // No incoming contribution: the score is the teleport term exactly.
        assert_eq!(graph.score(isolated), (1.0 - 0.85) / 3.0);
        assert!(graph.score(isolated) > 0.01);
    }

    #[test]
    fn test_empty_graph_is_noop() {
        let mut graph = Graph::new();
        let report = PageRank::new().solve(&mut graph);

        assert_eq!(report.sweeps, 0);
        assert_eq!(report.max_change, 0.0);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let mut first = build_cycle_with_fan();
        let mut second = build_cycle_with_fan();

        PageRank::new().solve(&mut first);
        PageRank::new().solve(&mut second);

        assert_eq!(scores(&first), scores(&second));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut graph = build_cycle_with_fan();
        let solver = PageRank::new();

        solver.solve(&mut graph);
        let first = scores(&graph);

        solver.solve(&mut graph);
        assert_eq!(scores(&graph), first);
    }

    #[test]
    fn test_damping_changes_scores() {
        let mut graph = build_cycle_with_fan();
        PageRank::new().with_damping(0.85).solve(&mut graph);
        let a_85 = graph.score(graph.get("A").unwrap());

        PageRank::new().with_damping(0.5).solve(&mut graph);
        let a_50 = graph.score(graph.get("A").unwrap());

        assert!((a_85 - a_50).abs() > 1e-3);
    }

    #[test]
    fn test_scores_stabilize_as_tolerance_shrinks() {
        let mut graph = build_cycle_with_fan();
        PageRank::new().with_tolerance(1e-3).solve(&mut graph);
        let loose = scores(&graph);

        PageRank::new().with_tolerance(1e-7).solve(&mut graph);
        let tight = scores(&graph);

        for (l, t) in loose.iter().zip(&tight) {
            assert!((l - t).abs() < 1e-3);
        }
    }

    #[test]
    fn test_observer_sees_every_sweep() {
        let mut graph = build_cycle_with_fan();
        let mut trace = ConvergenceTrace::new();
        let report = PageRank::new().solve_with(&mut graph, &mut trace);

        assert_eq!(trace.sweeps(), report.sweeps);
        assert_eq!(trace.final_change(), Some(report.max_change));
        assert!(trace.final_change().unwrap() < 1e-4);
    }

    #[test]
    fn test_tighter_tolerance_takes_more_sweeps() {
        let mut graph = build_cycle_with_fan();
        let loose = PageRank::new().with_tolerance(1e-2).solve(&mut graph);
        let tight = PageRank::new().with_tolerance(1e-8).solve(&mut graph);

        assert!(tight.sweeps > loose.sweeps);
    }
}
