use crate::input::edgelist::EdgeList;

pub struct Uninitialized {}

pub struct FromEdgeList<V, E> {
    vertices: Vec<V>,
    edges: Vec<(V, Option<V>, E)>,
}

#[derive(Debug)]
pub struct GraphBuilder<State> {
    state: State,
}

impl GraphBuilder<Uninitialized> {
    pub fn new() -> Self {
        Self {
            state: Uninitialized {},
        }
    }

    pub fn edge_list<V, E>(self, edge_list: EdgeList<V, E>) -> GraphBuilder<FromEdgeList<V, E>> {
        let (vertices, edges) = edge_list.into_parts();

        GraphBuilder {
            state: FromEdgeList { vertices, edges },
        }
    }

    pub fn edges<V, E>(self, edges: Vec<(V, Option<V>, E)>) -> GraphBuilder<FromEdgeList<V, E>> {
        self.edge_list(EdgeList::new(edges))
    }
}

impl<V, E> GraphBuilder<FromEdgeList<V, E>> {
    /// Stages vertices that appear in no edge.
    pub fn vertices(mut self, vertices: impl IntoIterator<Item = V>) -> Self {
        self.state.vertices.extend(vertices);
        self
    }

    pub fn build<DirectedGraph>(self) -> DirectedGraph
    where
        DirectedGraph: From<EdgeList<V, E>>,
    {
        DirectedGraph::from(EdgeList::with_vertices(self.state.vertices, self.state.edges))
    }
}
