//! Path search tests: BFS, DFS, cycle safety, determinism.

use dotgraph::graph::{search, Algorithm, DotGraph};

fn chain() -> DotGraph {
    let mut graph = DotGraph::new();
    graph.add_edge("A", "B");
    graph.add_edge("B", "C");
    graph
}

// ==================== Shared Contract ====================

#[test]
fn test_bfs_finds_chain_path() {
    let graph = chain();
    let path = search(&graph, "A", "C", Algorithm::BreadthFirst).unwrap();
    assert_eq!(path.nodes(), ["A", "B", "C"]);
    assert_eq!(path.edge_count(), 2);
}

#[test]
fn test_dfs_finds_chain_path() {
    let graph = chain();
    let path = search(&graph, "A", "C", Algorithm::DepthFirst).unwrap();
    assert_eq!(path.nodes(), ["A", "B", "C"]);
}

#[test]
fn test_no_edge_means_no_path() {
    let mut graph = DotGraph::new();
    graph.add_nodes(["A", "B"]);

    assert!(search(&graph, "A", "B", Algorithm::BreadthFirst).is_none());
    assert!(search(&graph, "A", "B", Algorithm::DepthFirst).is_none());
}

#[test]
fn test_unknown_endpoints_are_absent_not_errors() {
    let mut graph = DotGraph::new();
    graph.add_node("A");

    assert!(search(&graph, "A", "Z", Algorithm::BreadthFirst).is_none());
    assert!(search(&graph, "Z", "A", Algorithm::BreadthFirst).is_none());
    assert!(search(&graph, "A", "Z", Algorithm::DepthFirst).is_none());
    assert!(search(&graph, "Z", "A", Algorithm::DepthFirst).is_none());
}

#[test]
fn test_source_equals_target() {
    let graph = chain();
    for algorithm in [Algorithm::BreadthFirst, Algorithm::DepthFirst] {
        let path = search(&graph, "B", "B", algorithm).unwrap();
        assert_eq!(path.nodes(), ["B"]);
        assert_eq!(path.edge_count(), 0);
    }
}

#[test]
fn test_edges_are_directed() {
    let graph = chain();
    assert!(search(&graph, "C", "A", Algorithm::BreadthFirst).is_none());
    assert!(search(&graph, "C", "A", Algorithm::DepthFirst).is_none());
}

#[test]
fn test_disconnected_components() {
    let mut graph = DotGraph::new();
    graph.add_edge("A", "B");
    graph.add_edge("X", "Y");

    assert!(search(&graph, "A", "Y", Algorithm::BreadthFirst).is_none());
    assert!(search(&graph, "A", "Y", Algorithm::DepthFirst).is_none());
}

// ==================== Cycle Safety ====================

#[test]
fn test_three_node_cycle_terminates() {
    let mut graph = DotGraph::new();
    graph.add_edge("A", "B");
    graph.add_edge("B", "C");
    graph.add_edge("C", "A");

    for algorithm in [Algorithm::BreadthFirst, Algorithm::DepthFirst] {
        let path = search(&graph, "A", "C", algorithm).unwrap();
        assert_eq!(path.nodes(), ["A", "B", "C"]);
    }
}

#[test]
fn test_self_loop_does_not_trap_search() {
    let mut graph = DotGraph::new();
    graph.add_edge("A", "A");
    graph.add_edge("A", "B");

    for algorithm in [Algorithm::BreadthFirst, Algorithm::DepthFirst] {
        let path = search(&graph, "A", "B", algorithm).unwrap();
        assert_eq!(path.nodes(), ["A", "B"]);
    }
}

#[test]
fn test_unreachable_target_in_cyclic_graph() {
    let mut graph = DotGraph::new();
    graph.add_edge("A", "B");
    graph.add_edge("B", "A");
    graph.add_node("C");

    assert!(search(&graph, "A", "C", Algorithm::BreadthFirst).is_none());
    assert!(search(&graph, "A", "C", Algorithm::DepthFirst).is_none());
}

// ==================== Algorithm-Specific Shape ====================

#[test]
fn test_bfs_finds_fewest_edges() {
    // Long way round A -> B -> C -> D plus a direct A -> D shortcut,
    // inserted after the long way so adjacency order favors the detour.
    let mut graph = DotGraph::new();
    graph.add_edge("A", "B");
    graph.add_edge("B", "C");
    graph.add_edge("C", "D");
    graph.add_edge("A", "D");

    let path = search(&graph, "A", "D", Algorithm::BreadthFirst).unwrap();
    assert_eq!(path.nodes(), ["A", "D"]);
}

#[test]
fn test_dfs_may_take_the_long_way() {
    let mut graph = DotGraph::new();
    graph.add_edge("A", "B");
    graph.add_edge("B", "C");
    graph.add_edge("C", "D");
    graph.add_edge("A", "D");

    // DFS explores B first (adjacency order) and commits to the chain.
    let path = search(&graph, "A", "D", Algorithm::DepthFirst).unwrap();
    assert_eq!(path.nodes(), ["A", "B", "C", "D"]);
}

#[test]
fn test_bfs_never_longer_than_dfs() {
    let mut graph = DotGraph::new();
    graph.add_edge("A", "B");
    graph.add_edge("B", "C");
    graph.add_edge("C", "D");
    graph.add_edge("A", "C");
    graph.add_edge("B", "D");

    let bfs = search(&graph, "A", "D", Algorithm::BreadthFirst).unwrap();
    let dfs = search(&graph, "A", "D", Algorithm::DepthFirst).unwrap();
    assert!(bfs.edge_count() <= dfs.edge_count());
}

#[test]
fn test_bfs_tie_broken_by_adjacency_order() {
    // Two equal-length routes to D; the one through B was discovered
    // first, so it wins.
    let mut graph = DotGraph::new();
    graph.add_edge("A", "B");
    graph.add_edge("A", "C");
    graph.add_edge("B", "D");
    graph.add_edge("C", "D");

    let path = search(&graph, "A", "D", Algorithm::BreadthFirst).unwrap();
    assert_eq!(path.nodes(), ["A", "B", "D"]);
}

#[test]
fn test_dfs_backtracks_out_of_dead_ends() {
    let mut graph = DotGraph::new();
    graph.add_edge("A", "B"); // dead end
    graph.add_edge("A", "C");
    graph.add_edge("C", "D");

    let path = search(&graph, "A", "D", Algorithm::DepthFirst).unwrap();
    assert_eq!(path.nodes(), ["A", "C", "D"]);
}

#[test]
fn test_path_has_no_repeated_labels() {
    let mut graph = DotGraph::new();
    graph.add_edge("A", "B");
    graph.add_edge("B", "A");
    graph.add_edge("B", "C");

    for algorithm in [Algorithm::BreadthFirst, Algorithm::DepthFirst] {
        let path = search(&graph, "A", "C", algorithm).unwrap();
        let mut seen = std::collections::HashSet::new();
        assert!(path.nodes().iter().all(|label| seen.insert(label)));
    }
}

// ==================== NodePath ====================

#[test]
fn test_path_display_joins_with_arrows() {
    let graph = chain();
    let path = search(&graph, "A", "C", Algorithm::BreadthFirst).unwrap();
    assert_eq!(path.to_string(), "A -> B -> C");
}

#[test]
fn test_search_result_survives_graph_mutation() {
    let mut graph = chain();
    let path = search(&graph, "A", "C", Algorithm::BreadthFirst).unwrap();

    graph.remove_node("B").unwrap();

    // Labels were copied out, not aliased.
    assert_eq!(path.nodes(), ["A", "B", "C"]);
}

#[test]
fn test_algorithm_name_roundtrip() {
    for algorithm in [Algorithm::BreadthFirst, Algorithm::DepthFirst] {
        assert_eq!(Algorithm::from_name(algorithm.name()), Some(algorithm));
    }
    assert_eq!(Algorithm::from_name("dijkstra"), None);
}
