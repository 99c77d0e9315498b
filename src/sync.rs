//! Coarse-grained shared graph wrapper.
//!
//! Structural invariants (matrix symmetry, row integrity, free-list state)
//! span multiple fields, so concurrent callers must not update them
//! piecemeal. One exclusive lock guards the whole facade.

use crate::graph::{AdjacencyStore, EdgeStore, Graph, MatrixStore};
use parking_lot::{Mutex, MutexGuard};
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

/// A graph instance shared across threads behind a single exclusive lock.
pub struct SharedGraph<T: Eq + Hash, S> {
    inner: Arc<Mutex<Graph<T, S>>>,
}

/// Shared undirected graph.
pub type SharedUndirectedGraph<T> = SharedGraph<T, MatrixStore>;

/// Shared directed graph.
pub type SharedDirectedGraph<T> = SharedGraph<T, AdjacencyStore>;

impl<T, S> SharedGraph<T, S>
where
    T: Eq + Hash + Clone + Debug,
    S: EdgeStore,
{
    /// Wrap a graph for shared use.
    pub fn new(graph: Graph<T, S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(graph)),
        }
    }

    /// Acquire the lock, blocking until it is available.
    pub fn lock(&self) -> MutexGuard<'_, Graph<T, S>> {
        self.inner.lock()
    }
}

impl<T: Eq + Hash, S> Clone for SharedGraph<T, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;

    #[test]
    fn test_shared_graph_across_threads() {
        let shared = SharedDirectedGraph::new(DirectedGraph::with_capacity(64));

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    for i in 0..8 {
                        shared.lock().add_vertex(t * 8 + i).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let graph = shared.lock();
        assert_eq!(graph.total_vertices(), 32);
        for v in 0..32 {
            assert!(graph.has_vertex(&v));
        }
    }

    #[test]
    fn test_shared_graph_edge_ops() {
        let shared = SharedUndirectedGraph::new(crate::graph::UndirectedGraph::new());
        {
            let mut graph = shared.lock();
            graph.add_vertex("a").unwrap();
            graph.add_vertex("b").unwrap();
            graph.add_edge(&"a", &"b", 5).unwrap();
        }

        let clone = shared.clone();
        assert_eq!(clone.lock().get_edge(&"b", &"a"), 5);
    }
}
