use std::slice::Iter;

/// Staging buffer for bulk construction. Holds `(source, destination, edge)`
/// triples plus any vertices that appear in no triple, and is consumed by
/// the `From<EdgeList>` impl of a representation.
#[derive(Debug)]
pub struct EdgeList<V, E> {
    vertices: Box<[V]>,
    edges: Box<[(V, Option<V>, E)]>,
}

impl<V, E> EdgeList<V, E> {
    pub fn new(edges: Vec<(V, Option<V>, E)>) -> Self {
        Self {
            vertices: Box::default(),
            edges: edges.into_boxed_slice(),
        }
    }

    pub fn with_vertices(vertices: Vec<V>, edges: Vec<(V, Option<V>, E)>) -> Self {
        Self {
            vertices: vertices.into_boxed_slice(),
            edges: edges.into_boxed_slice(),
        }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> Iter<'_, V> {
        self.vertices.iter()
    }

    pub fn edges(&self) -> Iter<'_, (V, Option<V>, E)> {
        self.edges.iter()
    }

    pub fn into_parts(self) -> (Vec<V>, Vec<(V, Option<V>, E)>) {
        (self.vertices.into_vec(), self.edges.into_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::EdgeList;

    #[test]
    fn triples_keep_their_order() {
        let edge_list = EdgeList::new(vec![(1, Some(2), 5), (1, Some(4), 3), (2, None, 1)]);

        assert_eq!(edge_list.edge_count(), 3);
        assert_eq!(edge_list.vertices().count(), 0);
        assert_eq!(
            edge_list.edges().collect::<Vec<_>>(),
            vec![&(1, Some(2), 5), &(1, Some(4), 3), &(2, None, 1)]
        );
    }

    #[test]
    fn isolated_vertices_ride_along() {
        let edge_list = EdgeList::with_vertices(vec![7, 9], vec![(1, Some(2), 0)]);

        assert_eq!(edge_list.vertices().collect::<Vec<_>>(), vec![&7, &9]);

        let (vertices, edges) = edge_list.into_parts();
        assert_eq!(vertices, vec![7, 9]);
        assert_eq!(edges, vec![(1, Some(2), 0)]);
    }
}
