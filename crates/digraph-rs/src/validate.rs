use crate::GraphError;

/// Checks that the vertex argument of a derived query is present.
///
/// Every derived operation runs its optional arguments through these
/// helpers, so absent arguments are rejected identically everywhere and
/// before any graph access happens.
pub fn vertex<V>(vertex: Option<&V>) -> Result<&V, GraphError> {
    vertex.ok_or(GraphError::MissingVertex)
}

pub fn edge<E>(edge: Option<&E>) -> Result<&E, GraphError> {
    edge.ok_or(GraphError::MissingEdge)
}
