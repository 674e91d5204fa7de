use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use taxnet::graph::{Category, Edge, EdgeType, FieldName, GraphIndex, Node};
use taxnet::{NetworkQuery, QueryEngine, RankingMode};

/// Forms with four line items each; line items cite a rotating pool of sections.
fn synthetic_index(forms: usize) -> GraphIndex {
    let sections = (forms / 10).max(1);
    let mut nodes = Vec::with_capacity(forms * 5 + sections);
    let mut edges = Vec::with_capacity(forms * 8);

    for s in 0..sections {
        nodes.push(Node::section(format!("{}", s)).with_full_name(format!("Section {} income rules", s)));
    }
    for f in 0..forms {
        let category = if f % 2 == 0 { Category::Individual } else { Category::Corporation };
        let form = Node::form(category, format!("F{}", f)).with_full_name(format!("Return {}", f));
        for l in 0..4 {
            let line = Node::line_item(category, format!("F{}:{}", f, l))
                .with_full_name(if l == 0 { "Interest income".to_string() } else { format!("Line {}", l) });
            edges.push(Edge::new(form.id.clone(), line.id.clone(), EdgeType::FormLine));
            edges.push(Edge::new(
                line.id.clone(),
                format!("section:{}", (f + l) % sections),
                EdgeType::CitesSection,
            ));
            nodes.push(line);
        }
        nodes.push(form);
    }
    GraphIndex::new(nodes, edges)
}

/// Benchmark snapshot indexing
fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| criterion::black_box(synthetic_index(size).node_count()));
        });
    }
    group.finish();
}

/// Benchmark keyword search with one expansion step
fn bench_search_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_expand");

    for size in [100, 1000, 10_000].iter() {
        let index = synthetic_index(*size);
        let query = NetworkQuery::new()
            .search(["interest"])
            .fields([FieldName::FullName])
            .depth(1)
            .max_total_nodes(200);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let network = QueryEngine::new(&index).build_network(&query);
                criterion::black_box(network.nodes.len());
            });
        });
    }
    group.finish();
}

/// Benchmark full-graph mode with degree truncation
fn bench_full_graph_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_graph_ranking");

    for size in [100, 1000, 10_000].iter() {
        let index = synthetic_index(*size);
        for mode in [RankingMode::Global, RankingMode::Subgraph] {
            let query = NetworkQuery::new().max_total_nodes(100).ranking(mode);
            group.bench_with_input(BenchmarkId::new(mode.to_string(), size), size, |b, _| {
                b.iter(|| {
                    let network = QueryEngine::new(&index).build_network(&query);
                    criterion::black_box(network.edges.len());
                });
            });
        }
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_index_build,
    bench_search_expand,
    bench_full_graph_ranking,
);
criterion_main!(benches);
