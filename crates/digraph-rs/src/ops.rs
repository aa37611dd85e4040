use rustc_hash::FxHashSet;

use crate::{Graph, GraphError, validate};

/// Queries derived from the [`Graph`] primitives alone, available on every
/// representation through the blanket impl. This layer holds no state and
/// never reaches into a representation.
///
/// Arguments arrive as `Option` and are validated up front; an absent
/// argument fails with [`GraphError`] before any primitive is called.
/// Dangling state never fails: unknown vertices and unresolvable edges
/// produce empty sequences or absent results.
pub trait GraphQuery: Graph {
    /// Total degree of `vertex`, outgoing plus incoming. A self-loop
    /// contributes to both directions and therefore counts twice.
    fn degree(&self, vertex: Option<&Self::Vertex>) -> Result<usize, GraphError> {
        let vertex = validate::vertex(vertex)?;

        Ok(self.out_degree(vertex) + self.in_degree(vertex))
    }

    /// Union of the outgoing and incoming edges of `vertex`, deduplicated
    /// by edge identity. A self-loop appears exactly once.
    fn incident_edges<'a>(
        &'a self,
        vertex: Option<&'a Self::Vertex>,
    ) -> Result<impl Iterator<Item = &'a Self::Edge>, GraphError>
    where
        Self::Edge: 'a,
    {
        let vertex = validate::vertex(vertex)?;
        let mut seen: FxHashSet<&Self::Edge> = FxHashSet::default();

        Ok(self
            .out_edges(vertex)
            .chain(self.in_edges(vertex))
            .filter(move |&edge| seen.insert(edge)))
    }

    /// The opposite vertex of every outgoing edge of `vertex`, in edge
    /// order. Parallel edges yield their destination once per edge and an
    /// entry is `None` where resolution fails, so the sequence is neither
    /// deduplicated nor compacted.
    fn neighbors<'a>(
        &'a self,
        vertex: Option<&'a Self::Vertex>,
    ) -> Result<impl Iterator<Item = Option<&'a Self::Vertex>>, GraphError>
    where
        Self::Vertex: 'a,
        Self::Edge: 'a,
    {
        let vertex = validate::vertex(vertex)?;

        Ok(self.out_edges(vertex).map(move |edge| opposite(self, vertex, edge)))
    }

    /// Destination of `edge` if `vertex` is its source, `None` otherwise.
    /// `None` also covers edges that cannot be resolved at all; a vertex is
    /// never fabricated.
    fn opposite_vertex<'a>(
        &'a self,
        vertex: Option<&'a Self::Vertex>,
        edge: Option<&'a Self::Edge>,
    ) -> Result<Option<&'a Self::Vertex>, GraphError> {
        let vertex = validate::vertex(vertex)?;
        let edge = validate::edge(edge)?;

        Ok(opposite(self, vertex, edge))
    }
}

impl<G: Graph> GraphQuery for G {}

fn opposite<'a, G>(graph: &'a G, vertex: &G::Vertex, edge: &G::Edge) -> Option<&'a G::Vertex>
where
    G: Graph + ?Sized,
{
    let endpoints = graph.endpoints(edge)?;

    if endpoints.source() == vertex {
        endpoints.destination()
    } else {
        None
    }
}
