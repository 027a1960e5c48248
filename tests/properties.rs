use proptest::prelude::*;
use std::collections::HashSet;
use topsort::{Algorithm, Error, Graph};

const LABELS: u8 = 10;

fn label(n: u8) -> String {
    format!("n{n}")
}

/// Edges that only point from a lower to a higher number, so never a cycle.
fn acyclic_edges() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0..LABELS, 0..LABELS), 0..30).prop_map(|pairs| {
        pairs
            .into_iter()
            .filter(|(a, b)| a != b)
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect()
    })
}

fn build(edges: &[(u8, u8)], isolated: &[u8]) -> Graph {
    let mut graph = Graph::new();
    for &n in isolated {
        graph.ensure_node(&label(n));
    }
    for &(a, b) in edges {
        graph.add_edge(&label(a), &label(b));
    }
    graph
}

fn position(order: &[String], label: &str) -> usize {
    order.iter().position(|l| l == label).unwrap()
}

proptest! {
    #[test]
    fn both_algorithms_return_a_permutation(
        edges in acyclic_edges(),
        isolated in prop::collection::vec(0..LABELS, 0..5),
    ) {
        let graph = build(&edges, &isolated);
        let nodes: HashSet<&str> = graph.nodes().collect();

        for algorithm in [Algorithm::TopSort, Algorithm::DepthFirst] {
            let order = graph.sort(algorithm).unwrap();
            prop_assert_eq!(order.len(), graph.node_count());
            let seen: HashSet<&str> = order.iter().map(String::as_str).collect();
            prop_assert_eq!(&seen, &nodes);
        }
    }

    #[test]
    fn edges_are_respected(edges in acyclic_edges()) {
        let graph = build(&edges, &[]);
        let kahn = graph.sort(Algorithm::TopSort).unwrap();
        let dfs = graph.sort(Algorithm::DepthFirst).unwrap();

        for (source, target) in graph.edges() {
            prop_assert!(position(&kahn, source) < position(&kahn, target));
            prop_assert!(position(&dfs, target) < position(&dfs, source));
        }
    }

    #[test]
    fn sorting_is_deterministic(edges in acyclic_edges()) {
        let graph = build(&edges, &[]);
        let copy = graph.clone();
        for algorithm in [Algorithm::TopSort, Algorithm::DepthFirst] {
            prop_assert_eq!(graph.sort(algorithm).unwrap(), graph.sort(algorithm).unwrap());
            prop_assert_eq!(graph.sort(algorithm).unwrap(), copy.sort(algorithm).unwrap());
        }
    }

    #[test]
    fn duplicate_edges_are_invisible(edges in acyclic_edges()) {
        let once = build(&edges, &[]);
        let doubled: Vec<(u8, u8)> = edges.iter().flat_map(|&e| [e, e]).collect();
        let twice = build(&doubled, &[]);

        prop_assert_eq!(&once, &twice);
        for algorithm in [Algorithm::TopSort, Algorithm::DepthFirst] {
            prop_assert_eq!(once.sort(algorithm).unwrap(), twice.sort(algorithm).unwrap());
        }
    }

    #[test]
    fn reversed_edge_is_always_a_cycle(edges in acyclic_edges(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!edges.is_empty());
        let (a, b) = edges[pick.index(edges.len())];
        let mut graph = build(&edges, &[]);
        graph.add_edge(&label(b), &label(a));

        for algorithm in [Algorithm::TopSort, Algorithm::DepthFirst] {
            let is_cycle = matches!(graph.sort(algorithm), Err(Error::Cycle { .. }));
            prop_assert!(is_cycle);
        }
    }

    #[test]
    fn self_edge_is_always_a_cycle(edges in acyclic_edges(), node in 0..LABELS) {
        let mut graph = build(&edges, &[]);
        graph.add_edge(&label(node), &label(node));

        for algorithm in [Algorithm::TopSort, Algorithm::DepthFirst] {
            match graph.sort(algorithm) {
                Err(Error::Cycle { path, .. }) => {
                    prop_assert!(path.path.len() >= 2);
                    prop_assert_eq!(path.path.first(), path.path.last());
                }
                other => prop_assert!(false, "expected cycle, got {:?}", other),
            }
        }
    }

    #[test]
    fn algorithms_agree_on_cycles(edges in prop::collection::vec((0..LABELS, 0..LABELS), 0..20)) {
        let graph = build(&edges, &[]);
        let kahn = graph.sort(Algorithm::TopSort);
        let dfs = graph.sort(Algorithm::DepthFirst);
        prop_assert_eq!(kahn.is_ok(), dfs.is_ok());

        // Every reported cycle is a real closed walk.
        for result in [kahn, dfs] {
            if let Err(Error::Cycle { path, .. }) = result {
                prop_assert_eq!(path.path.first(), path.path.last());
                for pair in path.path.windows(2) {
                    prop_assert!(graph.has_edge(&pair[0], &pair[1]));
                }
            }
        }
    }
}
