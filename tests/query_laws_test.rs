/// Structural guarantees of `build_network` over seeded random snapshots.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use taxnet::graph::{Category, Edge, EdgeType, FieldName, GraphIndex, Node, NodeType};
use taxnet::{MatchLogic, Network, NetworkQuery, QueryEngine, RankingMode};

const WORDS: [&str; 6] = ["interest", "wages", "dividends", "credit", "depreciation", "rent"];

fn random_index(seed: u64, node_count: usize, edge_count: usize) -> GraphIndex {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut nodes = Vec::with_capacity(node_count);

    for i in 0..node_count {
        let word = WORDS[rng.gen_range(0..WORDS.len())];
        let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
        let node = match rng.gen_range(0..5) {
            0 => Node::form(category, format!("F{}", i)),
            1 => Node::line_item(category, format!("F{}:{}", i, word)),
            2 => Node::section(format!("{}", i)),
            3 => Node::regulation(format!("1.{}", i)),
            _ => Node::index(format!("{} {}", word, i)),
        };
        nodes.push(node.with_full_name(format!("{} schedule {}", word, i)));
    }

    let mut edges = Vec::with_capacity(edge_count);
    for _ in 0..edge_count {
        let source = nodes[rng.gen_range(0..node_count)].id.clone();
        let target = nodes[rng.gen_range(0..node_count)].id.clone();
        let edge_type = EdgeType::ALL[rng.gen_range(0..EdgeType::ALL.len())];
        edges.push(Edge::new(source, target, edge_type));
    }
    GraphIndex::new(nodes, edges)
}

fn random_query(rng: &mut StdRng) -> NetworkQuery {
    let mut query = NetworkQuery::new()
        .fields([FieldName::Name, FieldName::FullName])
        .logic(if rng.gen_bool(0.5) { MatchLogic::Or } else { MatchLogic::And })
        .depth(rng.gen_range(0..4))
        .max_neighbors_per_step(rng.gen_range(1..6))
        .max_total_nodes(rng.gen_range(0..40))
        .ranking(if rng.gen_bool(0.5) { RankingMode::Global } else { RankingMode::Subgraph })
        .edge_types(EdgeType::ALL.iter().copied().filter(|_| rng.gen_bool(0.7)))
        .node_types(NodeType::ALL.iter().copied().filter(|_| rng.gen_bool(0.7)));
    if rng.gen_bool(0.8) {
        let terms: Vec<&str> = WORDS.iter().copied().filter(|_| rng.gen_bool(0.3)).collect();
        query = query.search(terms);
    }
    query
}

fn check_shape(network: &Network, query: &NetworkQuery) {
    let ids: HashSet<&str> = network.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids.len(), network.nodes.len(), "duplicate node in result");

    assert!(network.nodes.len() <= query.max_total_nodes);
    assert!(network.nodes.len() <= network.matched_count);
    assert_eq!(network.truncated, network.matched_count > query.max_total_nodes);

    for edge in &network.edges {
        assert!(ids.contains(edge.source.as_str()));
        assert!(ids.contains(edge.target.as_str()));
        assert!(query.allowed_edge_types.contains(&edge.edge_type));
    }
}

#[test]
fn test_random_queries_respect_result_shape() {
    let mut rng = StdRng::seed_from_u64(7);
    for seed in 0..20 {
        let index = random_index(seed, 60, 120);
        let engine = QueryEngine::new(&index);
        for _ in 0..10 {
            let query = random_query(&mut rng);
            let network = engine.build_network(&query);
            check_shape(&network, &query);
        }
    }
}

#[test]
fn test_build_network_is_repeatable() {
    let mut rng = StdRng::seed_from_u64(11);
    let index = random_index(3, 80, 200);
    let engine = QueryEngine::new(&index);
    for _ in 0..25 {
        let query = random_query(&mut rng);
        assert_eq!(engine.build_network(&query), engine.build_network(&query));
    }
}

#[test]
fn test_untruncated_expansion_has_no_isolates() {
    let mut rng = StdRng::seed_from_u64(5);
    let index = random_index(9, 60, 150);
    for _ in 0..40 {
        let query = random_query(&mut rng).depth(2).max_total_nodes(1_000);
        let network = QueryEngine::new(&index).build_network(&query);
        assert!(!network.truncated);
        for node in &network.nodes {
            assert!(
                network.edges.iter().any(|e| e.touches(&node.id)),
                "{} has no edge in the result",
                node.id
            );
        }
    }
}

#[test]
fn test_empty_edge_types_with_expansion_blocks_everything() {
    let index = random_index(1, 50, 100);
    let query = NetworkQuery::new()
        .search(["interest"])
        .fields([FieldName::FullName])
        .edge_types([])
        .depth(2);
    assert_eq!(QueryEngine::new(&index).build_network(&query), Network::empty());
}

#[test]
fn test_empty_node_types_blocks_every_seed() {
    let index = random_index(2, 50, 100);
    let query = NetworkQuery::new()
        .search(["interest", "wages"])
        .fields([FieldName::FullName])
        .node_types([])
        .depth(1);
    let network = QueryEngine::new(&index).build_network(&query);
    assert!(network.is_empty());
    assert_eq!(network.matched_count, 0);
}
