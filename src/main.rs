use taxnet::graph::{Category, Edge, EdgeType, GraphIndex, Node};
use taxnet::{EngineConfig, GraphSession, QueryRequest};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Taxnet v{}", taxnet::version());
    println!("==========================================");
    println!();

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    let session = GraphSession::new(sample_snapshot());
    let stats = session.snapshot().stats();
    println!("Snapshot: {} nodes, {} edges", stats.node_count, stats.edge_count);
    for (node_type, count) in &stats.nodes_by_type {
        println!("  {:<12} {}", node_type, count);
    }

    demo_query(&session, &config, "Keyword search with expansion", r#"{
        "search_terms": ["wages"],
        "search_fields": ["name", "full_name"],
        "expansion_depth": 1
    }"#)?;

    demo_query(&session, &config, "Matched terms only", r#"{
        "search_terms": ["income"],
        "search_fields": ["full_name"],
        "edge_types": [],
        "expansion_depth": 0
    }"#)?;

    demo_query(&session, &config, "Budgeted full graph", r#"{
        "max_total_nodes": 3,
        "ranking": "global"
    }"#)?;

    Ok(())
}

fn demo_query(session: &GraphSession, config: &EngineConfig, title: &str, json: &str) -> anyhow::Result<()> {
    println!("\n=== {} ===", title);
    let query = QueryRequest::from_json(json)?.validate(config)?;
    let network = session.build_network(&query);

    println!(
        "  matched {} / returned {} nodes, {} edges{}",
        network.matched_count,
        network.nodes.len(),
        network.edges.len(),
        if network.truncated { " (truncated)" } else { "" }
    );
    for node in &network.nodes {
        println!("  - {}", node.id);
        for (key, value) in &node.metadata {
            println!("      {} = {}", key, value);
        }
    }
    Ok(())
}

fn sample_snapshot() -> GraphIndex {
    let nodes = vec![
        Node::form(Category::Individual, "1040")
            .with_full_name("U.S. Individual Income Tax Return")
            .with_metadata("filings", 160_000_000i64),
        Node::line_item(Category::Individual, "1040:1a")
            .with_full_name("Total amount from Form(s) W-2, box 1 (wages)")
            .with_metadata("amount", 9_022_000_000_000i64),
        Node::form(Category::Individual, "W-2").with_full_name("Wage and Tax Statement"),
        Node::form(Category::Corporation, "1120").with_full_name("U.S. Corporation Income Tax Return"),
        Node::line_item(Category::Corporation, "1120:1a").with_full_name("Gross receipts or sales"),
        Node::section("61").with_full_name("Gross income defined"),
        Node::section("3401").with_full_name("Wages defined for withholding"),
        Node::regulation("1.61-2").with_full_name("Compensation for services"),
        Node::index("wages").with_definition("Pay for services performed by an employee"),
    ];

    let edges = vec![
        Edge::new("form:individual:1040", "line_item:individual:1040:1a", EdgeType::FormLine),
        Edge::new("line_item:individual:1040:1a", "form:individual:W-2", EdgeType::CitesForm),
        Edge::new("line_item:individual:1040:1a", "section:61", EdgeType::CitesSection),
        Edge::new("form:individual:W-2", "section:3401", EdgeType::CitesSection),
        Edge::new("form:corporation:1120", "line_item:corporation:1120:1a", EdgeType::FormLine),
        Edge::new("line_item:corporation:1120:1a", "section:61", EdgeType::CitesSection),
        Edge::new("section:61", "regulation:1.61-2", EdgeType::CitesRegulation),
        Edge::new("index:wages", "section:3401", EdgeType::IndexEntry),
        Edge::new("index:wages", "line_item:individual:1040:1a", EdgeType::IndexEntry),
    ];

    GraphIndex::new(nodes, edges)
}
