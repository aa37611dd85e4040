pub mod adjacency;
pub mod flat;

pub use adjacency::AdjacencyGraph;
pub use flat::FlatGraph;

/// Ordered endpoint pair of an edge. The destination may be absent, which
/// leaves the edge half-open; no further meaning is attached to that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints<V> {
    source: V,
    destination: Option<V>,
}

impl<V> Endpoints<V> {
    pub fn new(source: V, destination: Option<V>) -> Endpoints<V> {
        Self {
            source,
            destination,
        }
    }

    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn destination(&self) -> Option<&V> {
        self.destination.as_ref()
    }
}
