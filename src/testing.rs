//! Fixtures and brute-force oracles shared by the unit tests.

use itertools::Itertools;
use rand::Rng;

use crate::prelude::*;

fn with_vertices(labels: &[&str]) -> Graph {
    let mut graph = Graph::new();
    graph.add_vertices(labels).unwrap();
    graph
}

/// Ten vertices `A..J`; `I` cannot be reached from `A`
pub fn demo_unweighted() -> Graph {
    let mut graph = with_vertices(&["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]);
    for (u, v) in [
        ("A", "B"),
        ("A", "D"),
        ("A", "E"),
        ("B", "C"),
        ("B", "D"),
        ("C", "G"),
        ("C", "H"),
        ("D", "F"),
        ("E", "D"),
        ("E", "F"),
        ("F", "J"),
        ("H", "G"),
        ("I", "G"),
        ("I", "H"),
    ] {
        graph.add_unit_edge(u, v).unwrap();
    }
    graph
}

/// Five vertices `S, U, X, V, Y` with positive weights
pub fn demo_weighted() -> Graph {
    let mut graph = with_vertices(&["S", "U", "X", "V", "Y"]);
    for (u, v, w) in [
        ("S", "U", 10),
        ("S", "X", 5),
        ("U", "V", 1),
        ("U", "X", 2),
        ("X", "U", 3),
        ("X", "V", 9),
        ("X", "Y", 2),
        ("Y", "S", 7),
        ("Y", "V", 6),
    ] {
        graph.add_edge(u, v, w).unwrap();
    }
    graph
}

/// [`demo_weighted`] plus `V -> Y` with weight 4
pub fn demo_weighted_with_v_to_y() -> Graph {
    let mut graph = demo_weighted();
    graph.add_edge("V", "Y", 4).unwrap();
    graph
}

/// Connected graph on `A..I` whose edges all come in equally weighted pairs; MST weight 37
pub fn demo_symmetric_weighted() -> Graph {
    let mut graph = with_vertices(&["A", "B", "C", "D", "E", "F", "G", "H", "I"]);
    for (u, v, w) in [
        ("A", "B", 4),
        ("A", "H", 8),
        ("B", "C", 8),
        ("B", "H", 11),
        ("C", "D", 7),
        ("C", "F", 4),
        ("C", "I", 2),
        ("D", "E", 9),
        ("D", "F", 14),
        ("E", "F", 10),
        ("F", "G", 2),
        ("G", "H", 1),
        ("G", "I", 6),
        ("H", "I", 7),
    ] {
        graph.add_edge(u, v, (w, w)).unwrap();
    }
    graph
}

fn random_vertices(n: usize) -> Graph {
    let mut graph = Graph::new();
    graph.add_vertices((0..n).map(Label::from_index)).unwrap();
    graph
}

/// `n` vertices and `m` uniformly drawn directed edges; duplicates and loops may occur
pub fn random_graph<R: Rng>(rng: &mut R, n: usize, m: usize, max_weight: Weight) -> Graph {
    let mut graph = random_vertices(n);
    for _ in 0..m {
        let u = Label::from_index(rng.random_range(0..n));
        let v = Label::from_index(rng.random_range(0..n));
        let w = rng.random_range(1..=max_weight);
        graph.add_edge(u.as_str(), v.as_str(), w).unwrap();
    }
    graph
}

/// Like [`random_graph`], but every draw adds `u -> v` and `v -> u` with the same weight
pub fn random_symmetric_graph<R: Rng>(
    rng: &mut R,
    n: usize,
    m: usize,
    max_weight: Weight,
) -> Graph {
    let mut graph = random_vertices(n);
    for _ in 0..m {
        let u = Label::from_index(rng.random_range(0..n));
        let v = Label::from_index(rng.random_range(0..n));
        let w = rng.random_range(1..=max_weight);
        graph.add_edge(u.as_str(), v.as_str(), (w, w)).unwrap();
    }
    graph
}

fn add(a: Distance, b: Distance) -> Distance {
    match (a, b) {
        (Distance::Finite(x), Distance::Finite(y)) => Distance::Finite(x + y),
        _ => Distance::Infinite,
    }
}

/// Floyd–Warshall over edge weights, indexed by vertex id
pub fn all_pairs_shortest_paths(graph: &Graph) -> Vec<Vec<Distance>> {
    let n = graph.len();
    let mut dist = vec![vec![Distance::Infinite; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = Distance::ZERO;
    }
    for e in graph.edges() {
        let (u, v) = (e.source() as usize, e.destination() as usize);
        dist[u][v] = dist[u][v].min(Distance::Finite(e.weight()));
    }

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let via = add(dist[i][k], dist[k][j]);
                if via < dist[i][j] {
                    dist[i][j] = via;
                }
            }
        }
    }
    dist
}

/// Kahn's algorithm: a directed cycle (loops included) remains iff some vertex is never freed
pub fn has_cycle(graph: &Graph) -> bool {
    let mut in_degree = vec![0usize; graph.len()];
    for e in graph.edges() {
        in_degree[e.destination() as usize] += 1;
    }

    let mut ready = (0..graph.len()).filter(|&v| in_degree[v] == 0).collect_vec();
    let mut freed = 0;
    while let Some(u) = ready.pop() {
        freed += 1;
        for e in graph.vertex_by_id(u as VertexId).unwrap().edges() {
            let v = e.destination() as usize;
            in_degree[v] -= 1;
            if in_degree[v] == 0 {
                ready.push(v);
            }
        }
    }
    freed < graph.len()
}

fn undirected_adjacency(graph: &Graph) -> Vec<Vec<usize>> {
    let mut adj = vec![Vec::new(); graph.len()];
    for e in graph.edges() {
        adj[e.source() as usize].push(e.destination() as usize);
        adj[e.destination() as usize].push(e.source() as usize);
    }
    adj
}

/// Number of connected components when edge directions are ignored; isolated vertices count
pub fn undirected_components(graph: &Graph) -> usize {
    let adj = undirected_adjacency(graph);
    let mut seen = vec![false; graph.len()];
    let mut components = 0;

    for root in 0..graph.len() {
        if seen[root] {
            continue;
        }
        components += 1;
        seen[root] = true;
        let mut stack = vec![root];
        while let Some(u) = stack.pop() {
            for &v in &adj[u] {
                if !seen[v] {
                    seen[v] = true;
                    stack.push(v);
                }
            }
        }
    }
    components
}

fn find(parent: &[usize], mut x: usize) -> usize {
    while parent[x] != x {
        x = parent[x];
    }
    x
}

/// Weight of a minimum spanning forest (directions ignored), found by trying every edge subset
/// of the right size. Only feasible for a handful of vertices.
pub fn brute_force_msf_weight(graph: &Graph) -> Weight {
    let n = graph.len();
    let pairs = graph
        .edges()
        .filter(|e| !e.is_loop())
        .map(|e| (e.summary().normalized_endpoints(), e.weight()))
        .into_grouping_map()
        .min()
        .into_iter()
        .collect_vec();
    let k = n - undirected_components(graph);

    pairs
        .iter()
        .combinations(k)
        .filter(|subset| {
            let mut parent = (0..n).collect_vec();
            subset.iter().all(|((u, v), _)| {
                let (ru, rv) = (find(&parent, *u as usize), find(&parent, *v as usize));
                parent[ru] = rv;
                ru != rv
            })
        })
        .map(|subset| subset.iter().map(|(_, w)| *w).sum::<Weight>())
        .min()
        .unwrap_or(0)
}
