use std::cell::Cell;

use digraph_rs::{Graph, graph::Endpoints, input::edgelist::EdgeList};

/// One edge list covering every interesting shape at once: parallel edges,
/// a self-loop, a half-open edge and an isolated vertex.
pub fn edges() -> EdgeList<&'static str, &'static str> {
    EdgeList::with_vertices(
        vec!["e"],
        vec![
            ("a", Some("b"), "a-b"),
            ("a", Some("c"), "a-c"),
            ("b", Some("c"), "b-c1"),
            ("b", Some("c"), "b-c2"),
            ("c", Some("c"), "c-loop"),
            ("d", None, "d-out"),
        ],
    )
}

/// Delegating graph that counts how often any primitive is entered.
pub struct Spy<G> {
    inner: G,
    calls: Cell<usize>,
}

impl<G> Spy<G> {
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn record(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl<G: Graph> Graph for Spy<G> {
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    fn vertex_count(&self) -> usize {
        self.record();
        self.inner.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.record();
        self.inner.edge_count()
    }

    fn vertices<'a>(&'a self) -> impl Iterator<Item = &'a G::Vertex>
    where
        G::Vertex: 'a,
    {
        self.record();
        self.inner.vertices()
    }

    fn edges<'a>(&'a self) -> impl Iterator<Item = &'a G::Edge>
    where
        G::Edge: 'a,
    {
        self.record();
        self.inner.edges()
    }

    fn has_vertex(&self, vertex: &G::Vertex) -> bool {
        self.record();
        self.inner.has_vertex(vertex)
    }

    fn has_edge(&self, edge: &G::Edge) -> bool {
        self.record();
        self.inner.has_edge(edge)
    }

    fn endpoints(&self, edge: &G::Edge) -> Option<&Endpoints<G::Vertex>> {
        self.record();
        self.inner.endpoints(edge)
    }

    fn out_edges<'a>(&'a self, vertex: &'a G::Vertex) -> impl Iterator<Item = &'a G::Edge>
    where
        G::Edge: 'a,
    {
        self.record();
        self.inner.out_edges(vertex)
    }

    fn in_edges<'a>(&'a self, vertex: &'a G::Vertex) -> impl Iterator<Item = &'a G::Edge>
    where
        G::Edge: 'a,
    {
        self.record();
        self.inner.in_edges(vertex)
    }

    fn out_degree(&self, vertex: &G::Vertex) -> usize {
        self.record();
        self.inner.out_degree(vertex)
    }

    fn in_degree(&self, vertex: &G::Vertex) -> usize {
        self.record();
        self.inner.in_degree(vertex)
    }

    fn are_adjacent(&self, a: &G::Vertex, b: &G::Vertex) -> bool {
        self.record();
        self.inner.are_adjacent(a, b)
    }

    fn add_vertex(&mut self, vertex: G::Vertex) -> Option<G::Vertex> {
        self.record();
        self.inner.add_vertex(vertex)
    }

    fn add_edge(
        &mut self,
        source: G::Vertex,
        destination: Option<G::Vertex>,
        edge: G::Edge,
    ) -> Option<G::Edge> {
        self.record();
        self.inner.add_edge(source, destination, edge)
    }

    fn remove_vertex(&mut self, vertex: &G::Vertex) -> Option<G::Vertex> {
        self.record();
        self.inner.remove_vertex(vertex)
    }

    fn remove_edge(&mut self, edge: &G::Edge) -> Option<G::Edge> {
        self.record();
        self.inner.remove_edge(edge)
    }

    fn clear(&mut self) {
        self.record();
        self.inner.clear();
    }
}
