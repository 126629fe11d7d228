use criterion::{black_box, criterion_group, criterion_main, Criterion};
use labgraph::{algorithm::*, graph::*};
use rand::Rng;
use static_init::dynamic;

#[dynamic]
static VERTEX_SIZE: usize = std::env::var("VERTEX_SIZE")
    .unwrap_or("1000".to_string())
    .parse()
    .unwrap();
#[dynamic]
static EDGE_SIZE: usize = std::env::var("EDGE_SIZE")
    .unwrap_or("10000".to_string())
    .parse()
    .unwrap();

criterion_group!(benches, adjacency, petgraph_backed);
criterion_main!(benches);

fn adjacency(c: &mut Criterion) {
    cases::<AdjacencyGraph>(c, "adjacency");
}

fn petgraph_backed(c: &mut Criterion) {
    cases::<PetgraphBackedGraph>(c, "petgraph_backed");
}

fn cases<G>(c: &mut Criterion, prefix: &str)
where
    G: GrowableGraph + QueryableGraph,
{
    let vertex_size = *VERTEX_SIZE;
    println!("VERTEX_SIZE: {}", vertex_size);
    let edge_size = *EDGE_SIZE;
    println!("EDGE_SIZE: {}", edge_size);

    let mut g = G::new();
    let mut vertices = vec![];
    for _ in 0..vertex_size {
        let vid = g.add_vertex();
        vertices.push(vid);
    }
    for _ in 0..edge_size {
        let v0 = vertices[rand::thread_rng().gen::<usize>() % vertices.len()];
        let v1 = vertices[rand::thread_rng().gen::<usize>() % vertices.len()];
        g.add_edge(v0, v1);
    }
    let start = vertices[0];
    let goal = vertices[rand::thread_rng().gen::<usize>() % vertices.len()];

    c.bench_function(&(prefix.to_string() + "/bft"), |b| {
        b.iter(|| black_box(g.bft(&start).unwrap()))
    });
    c.bench_function(&(prefix.to_string() + "/dft"), |b| {
        b.iter(|| black_box(g.dft(&start).unwrap()))
    });
    c.bench_function(&(prefix.to_string() + "/dft_recursive"), |b| {
        b.iter(|| black_box(g.dft_recursive(&start).unwrap()))
    });
    c.bench_function(&(prefix.to_string() + "/bfs"), |b| {
        b.iter(|| black_box(g.bfs(&start, &goal).unwrap()))
    });
    c.bench_function(&(prefix.to_string() + "/dfs"), |b| {
        b.iter(|| black_box(g.dfs(&start, &goal).unwrap()))
    });
}
