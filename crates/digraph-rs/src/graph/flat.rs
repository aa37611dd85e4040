use std::hash::Hash;

use log::info;
use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};

use crate::{Graph, graph::Endpoints, input::edgelist::EdgeList};

/// Unindexed representation. A vertex set and one endpoint map, nothing
/// else; every per-vertex query is a scan over the edges.
///
/// Endpoints are not registered as vertices and removing a vertex leaves its
/// incident edges in place. Dangling endpoints are legal state here and all
/// queries stay well-defined over them. In return the value types only need
/// `Eq + Hash`, each value is stored exactly once and mutation never touches
/// more than one entry.
#[derive(Debug)]
pub struct FlatGraph<V, E> {
    vertices: FxHashSet<V>,
    edges: FxHashMap<E, Endpoints<V>>,
}

impl<V, E> FlatGraph<V, E> {
    pub fn new() -> FlatGraph<V, E> {
        FlatGraph {
            vertices: FxHashSet::default(),
            edges: FxHashMap::default(),
        }
    }

    pub fn with_capacity(vertices: usize, edges: usize) -> FlatGraph<V, E> {
        FlatGraph {
            vertices: FxHashSet::with_capacity_and_hasher(vertices, FxBuildHasher),
            edges: FxHashMap::with_capacity_and_hasher(edges, FxBuildHasher),
        }
    }
}

impl<V, E> Default for FlatGraph<V, E> {
    fn default() -> Self {
        FlatGraph::new()
    }
}

impl<V, E> PartialEq for FlatGraph<V, E>
where
    V: Eq + Hash,
    E: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.vertices.eq(&other.vertices) && self.edges.eq(&other.edges)
    }
}

impl<V, E> Graph for FlatGraph<V, E>
where
    V: Eq + Hash,
    E: Eq + Hash,
{
    type Vertex = V;
    type Edge = E;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn vertices<'a>(&'a self) -> impl Iterator<Item = &'a V>
    where
        V: 'a,
    {
        self.vertices.iter()
    }

    fn edges<'a>(&'a self) -> impl Iterator<Item = &'a E>
    where
        E: 'a,
    {
        self.edges.keys()
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    fn has_edge(&self, edge: &E) -> bool {
        self.edges.contains_key(edge)
    }

    fn endpoints(&self, edge: &E) -> Option<&Endpoints<V>> {
        self.edges.get(edge)
    }

    fn out_edges<'a>(&'a self, vertex: &'a V) -> impl Iterator<Item = &'a E>
    where
        E: 'a,
    {
        self.edges
            .iter()
            .filter(move |(_, endpoints)| endpoints.source() == vertex)
            .map(|(edge, _)| edge)
    }

    fn in_edges<'a>(&'a self, vertex: &'a V) -> impl Iterator<Item = &'a E>
    where
        E: 'a,
    {
        self.edges
            .iter()
            .filter(move |(_, endpoints)| endpoints.destination() == Some(vertex))
            .map(|(edge, _)| edge)
    }

    fn out_degree(&self, vertex: &V) -> usize {
        self.edges
            .values()
            .filter(|endpoints| endpoints.source() == vertex)
            .count()
    }

    fn in_degree(&self, vertex: &V) -> usize {
        self.edges
            .values()
            .filter(|endpoints| endpoints.destination() == Some(vertex))
            .count()
    }

    fn are_adjacent(&self, a: &V, b: &V) -> bool {
        self.edges.values().any(|endpoints| {
            (endpoints.source() == a && endpoints.destination() == Some(b))
                || (endpoints.source() == b && endpoints.destination() == Some(a))
        })
    }

    fn add_vertex(&mut self, vertex: V) -> Option<V> {
        if self.vertices.contains(&vertex) {
            return Some(vertex);
        }

        self.vertices.insert(vertex);
        None
    }

    fn add_edge(&mut self, source: V, destination: Option<V>, edge: E) -> Option<E> {
        if self.edges.contains_key(&edge) {
            return Some(edge);
        }

        self.edges.insert(edge, Endpoints::new(source, destination));

        None
    }

    fn remove_vertex(&mut self, vertex: &V) -> Option<V> {
        self.vertices.take(vertex)
    }

    fn remove_edge(&mut self, edge: &E) -> Option<E> {
        self.edges.remove_entry(edge).map(|(edge, _)| edge)
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }
}

impl<V, E> From<EdgeList<V, E>> for FlatGraph<V, E>
where
    V: Eq + Hash,
    E: Eq + Hash,
{
    fn from(edge_list: EdgeList<V, E>) -> Self {
        let (vertices, edges) = edge_list.into_parts();
        let mut graph = FlatGraph::with_capacity(vertices.len(), edges.len());

        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        for (source, destination, edge) in edges {
            graph.add_edge(source, destination, edge);
        }

        info!(
            "Created flat graph (vertex_count: {:?}, edge_count = {:?})",
            graph.vertex_count(),
            graph.edge_count()
        );

        graph
    }
}
