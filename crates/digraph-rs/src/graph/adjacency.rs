use std::hash::Hash;

use log::{debug, info};
use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};

use crate::{Graph, graph::Endpoints, input::edgelist::EdgeList};

/// Indexed representation. Next to the vertex set and the endpoint map it
/// keeps one outgoing and one incoming edge row per vertex, so degrees and
/// edge lookups never scan the whole edge set.
///
/// Referential integrity is maintained by construction: `add_edge` registers
/// both endpoints as vertices and `remove_vertex` removes all incident
/// edges.
#[derive(Debug)]
pub struct AdjacencyGraph<V, E> {
    vertices: FxHashSet<V>,
    endpoints: FxHashMap<E, Endpoints<V>>,
    out: FxHashMap<V, Vec<E>>,
    inc: FxHashMap<V, Vec<E>>,
}

impl<V, E> AdjacencyGraph<V, E> {
    pub fn new() -> AdjacencyGraph<V, E> {
        AdjacencyGraph {
            vertices: FxHashSet::default(),
            endpoints: FxHashMap::default(),
            out: FxHashMap::default(),
            inc: FxHashMap::default(),
        }
    }

    pub fn with_capacity(vertices: usize, edges: usize) -> AdjacencyGraph<V, E> {
        AdjacencyGraph {
            vertices: FxHashSet::with_capacity_and_hasher(vertices, FxBuildHasher),
            endpoints: FxHashMap::with_capacity_and_hasher(edges, FxBuildHasher),
            out: FxHashMap::with_capacity_and_hasher(vertices, FxBuildHasher),
            inc: FxHashMap::with_capacity_and_hasher(vertices, FxBuildHasher),
        }
    }
}

impl<V, E> Default for AdjacencyGraph<V, E> {
    fn default() -> Self {
        AdjacencyGraph::new()
    }
}

// Row contents depend on insertion order; equality is defined on the vertex
// set and the endpoint map, which the rows mirror.
impl<V, E> PartialEq for AdjacencyGraph<V, E>
where
    V: Eq + Hash,
    E: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.vertices.eq(&other.vertices) && self.endpoints.eq(&other.endpoints)
    }
}

impl<V, E> Graph for AdjacencyGraph<V, E>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    type Vertex = V;
    type Edge = E;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.endpoints.len()
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
        self.endpoints.keys()
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    fn has_edge(&self, edge: &E) -> bool {
        self.endpoints.contains_key(edge)
    }

    fn endpoints(&self, edge: &E) -> Option<&Endpoints<V>> {
        self.endpoints.get(edge)
    }

    fn out_edges<'a>(&'a self, vertex: &'a V) -> impl Iterator<Item = &'a E>
    where
        E: 'a,
    {
        self.out
            .get(vertex)
            .map(|row| row.as_slice())
            .unwrap_or(&[])
            .iter()
    }

    fn in_edges<'a>(&'a self, vertex: &'a V) -> impl Iterator<Item = &'a E>
    where
        E: 'a,
    {
        self.inc
            .get(vertex)
            .map(|row| row.as_slice())
            .unwrap_or(&[])
            .iter()
    }

    fn out_degree(&self, vertex: &V) -> usize {
        self.out.get(vertex).map_or(0, Vec::len)
    }

    fn in_degree(&self, vertex: &V) -> usize {
        self.inc.get(vertex).map_or(0, Vec::len)
    }

    fn are_adjacent(&self, a: &V, b: &V) -> bool {
        let connects = |from: &V, to: &V| {
            self.out
                .get(from)
                .into_iter()
                .flatten()
                .filter_map(|edge| self.endpoints.get(edge))
                .any(|endpoints| endpoints.destination() == Some(to))
        };

        connects(a, b) || connects(b, a)
    }

    fn add_vertex(&mut self, vertex: V) -> Option<V> {
        if self.vertices.contains(&vertex) {
            return Some(vertex);
        }

        self.vertices.insert(vertex);
        None
    }

    fn add_edge(&mut self, source: V, destination: Option<V>, edge: E) -> Option<E> {
        if self.endpoints.contains_key(&edge) {
            return Some(edge);
        }

        self.vertices.insert(source.clone());
        self.out.entry(source.clone()).or_default().push(edge.clone());

        if let Some(destination) = destination.clone() {
            self.vertices.insert(destination.clone());
            self.inc.entry(destination).or_default().push(edge.clone());
        }

        self.endpoints.insert(edge, Endpoints::new(source, destination));

        None
    }

    fn remove_vertex(&mut self, vertex: &V) -> Option<V> {
        if !self.vertices.contains(vertex) {
            return None;
        }

        let incident: Vec<E> = self
            .out
            .get(vertex)
            .into_iter()
            .flatten()
            .chain(self.inc.get(vertex).into_iter().flatten())
            .cloned()
            .collect();

        debug!("Removing vertex with {} incident edge entries", incident.len());

        // A self-loop shows up in both rows; its second removal is a no-op.
        for edge in &incident {
            self.remove_edge(edge);
        }

        self.out.remove(vertex);
        self.inc.remove(vertex);
        self.vertices.take(vertex)
    }

    fn remove_edge(&mut self, edge: &E) -> Option<E> {
        let (edge, endpoints) = self.endpoints.remove_entry(edge)?;

        if let Some(row) = self.out.get_mut(endpoints.source()) {
            row.retain(|e| *e != edge);
        }
        if let Some(destination) = endpoints.destination() {
            if let Some(row) = self.inc.get_mut(destination) {
                row.retain(|e| *e != edge);
            }
        }

        Some(edge)
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.endpoints.clear();
        self.out.clear();
        self.inc.clear();
    }
}

impl<V, E> From<EdgeList<V, E>> for AdjacencyGraph<V, E>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    fn from(edge_list: EdgeList<V, E>) -> Self {
        let (vertices, edges) = edge_list.into_parts();

        // Every edge can introduce at most two new vertices.
        let mut graph =
            AdjacencyGraph::with_capacity(vertices.len() + 2 * edges.len(), edges.len());

        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        for (source, destination, edge) in edges {
            graph.add_edge(source, destination, edge);
        }

        info!(
            "Created adjacency graph (vertex_count: {:?}, edge_count = {:?})",
            graph.vertex_count(),
            graph.edge_count()
        );

        graph
    }
}
