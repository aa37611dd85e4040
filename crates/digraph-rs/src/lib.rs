use std::{error::Error, fmt::Display, hash::Hash};

use graph::Endpoints;

pub mod builder;
pub mod graph;
pub mod input;
pub mod ops;
pub mod validate;

#[derive(Debug, PartialEq, Eq)]
pub enum GraphError {
    MissingVertex,
    MissingEdge,
}

impl Error for GraphError {}

impl Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingVertex => write!(f, "vertex must not be absent"),
            Self::MissingEdge => write!(f, "edge must not be absent"),
        }
    }
}

/// Primitive surface of a directed multigraph.
///
/// A representation stores opaque vertex and edge identities together with
/// the endpoint pair of every edge. Self-loops, parallel edges (distinct
/// identities over the same endpoint pair) and isolated vertices are all
/// permitted. Whether the endpoints of an edge have to be present as
/// vertices is left to the representation; every query below stays
/// well-defined over dangling endpoints.
pub trait Graph {
    type Vertex: Eq + Hash;
    type Edge: Eq + Hash;

    fn vertex_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    fn vertices<'a>(&'a self) -> impl Iterator<Item = &'a Self::Vertex>
    where
        Self::Vertex: 'a;

    fn edges<'a>(&'a self) -> impl Iterator<Item = &'a Self::Edge>
    where
        Self::Edge: 'a;

    fn has_vertex(&self, vertex: &Self::Vertex) -> bool;

    fn has_edge(&self, edge: &Self::Edge) -> bool;

    /// Endpoint pair of `edge`, or `None` if the edge is not present.
    fn endpoints(&self, edge: &Self::Edge) -> Option<&Endpoints<Self::Vertex>>;

    /// All edges whose source is `vertex`. Empty for unknown vertices.
    fn out_edges<'a>(&'a self, vertex: &'a Self::Vertex) -> impl Iterator<Item = &'a Self::Edge>
    where
        Self::Edge: 'a;

    /// All edges whose destination is `vertex`. Empty for unknown vertices.
    fn in_edges<'a>(&'a self, vertex: &'a Self::Vertex) -> impl Iterator<Item = &'a Self::Edge>
    where
        Self::Edge: 'a;

    fn out_degree(&self, vertex: &Self::Vertex) -> usize;

    fn in_degree(&self, vertex: &Self::Vertex) -> usize;

    /// True iff some edge connects `a` to `b` in either direction.
    fn are_adjacent(&self, a: &Self::Vertex, b: &Self::Vertex) -> bool;

    /// Inserts `vertex` and returns `None`, or hands the value back as
    /// `Some` when an equal vertex is already present.
    fn add_vertex(&mut self, vertex: Self::Vertex) -> Option<Self::Vertex>;

    /// Inserts `edge` with the given endpoint pair. The destination may be
    /// absent. When an edge with an equal identity is already present the
    /// identity is handed back as `Some` and the endpoint pair is dropped;
    /// duplicates are detected by edge identity only, so parallel edges are
    /// always accepted.
    fn add_edge(
        &mut self,
        source: Self::Vertex,
        destination: Option<Self::Vertex>,
        edge: Self::Edge,
    ) -> Option<Self::Edge>;

    /// Removes `vertex` and returns the stored value, or `None` if it was
    /// not present. Whether incident edges are removed as well is a
    /// representation decision.
    fn remove_vertex(&mut self, vertex: &Self::Vertex) -> Option<Self::Vertex>;

    /// Removes `edge` and returns the stored identity, or `None` if it was
    /// not present.
    fn remove_edge(&mut self, edge: &Self::Edge) -> Option<Self::Edge>;

    /// Removes all vertices and edges. Both counts are zero afterwards.
    fn clear(&mut self);
}
