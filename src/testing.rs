
#[cfg(test)]
pub(crate) use logs::captured_logs;

/// Every graph representation should behave like an adjacency matrix built from the same edges
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $undirected:literal, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{edge::*, node::*, ops::*, repr::*, testing::test_graph_ops};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a list of at most `m_ub` random edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                let mut edges: Vec<Edge> = (0..m_ub).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);

                    if $undirected {
                        Edge(u, v).normalized()
                    } else {
                        Edge(u, v)
                    }
                }).collect_vec();
                edges.sort_unstable();
                edges.dedup();

                edges
            }

            /// Bitset rows of the adjacency matrix of `edges`
            fn adjacency_matrix(n: NumNodes, edges: &[Edge]) -> Vec<NodeBitSet> {
                let mut matrix = vec![NodeBitSet::new_unset(n); n as usize];
                for &Edge(u, v) in edges {
                    matrix[u as usize].set_bit(v);
                    if $undirected {
                        matrix[v as usize].set_bit(u);
                    }
                }
                matrix
            }

            $(
                test_graph_ops!($graph<$undirected>: $trait);
            )*
        }
    };
    ($graph:ident<$undirected:literal>: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 1..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
            }
        }
    };
    ($graph:ident<$undirected:literal>: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);
                        let adj_matrix = adjacency_matrix(n, &edges);

                        let graph = <$graph>::from_edges(n, edges.iter().copied());

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());

                        assert_eq!(edges, graph.ordered_edges($undirected));

                        for u in 0..n {
                            assert_eq!(
                                graph.neighbors_of(u).sorted().collect_vec(),
                                adj_matrix[u as usize].iter_set_bits().collect_vec()
                            );
                            assert_eq!(graph.degree_of(u), adj_matrix[u as usize].cardinality());
                        }
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);
                        let mut adj_matrix = adjacency_matrix(n, &edges);

                        let mut graph = <$graph>::new(n);
                        for &Edge(u, v) in &edges {
                            assert!(!graph.try_add_edge(u, v));
                            assert!(graph.try_add_edge(u, v));
                        }
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);

                        let rng = &mut Pcg64Mcg::seed_from_u64(4);

                        let mut m = graph.number_of_edges();
                        for _ in 0..(m / 2) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            if adj_matrix[u as usize].clear_bit(v) {
                                assert!(graph.try_remove_edge(u, v));
                                m -= 1;

                                if $undirected && u != v {
                                    assert!(adj_matrix[v as usize].clear_bit(u));
                                }
                            } else {
                                assert!(!graph.try_remove_edge(u, v));
                            }

                            assert_eq!(m, graph.number_of_edges());
                        }

                        for Edge(u, v) in graph.ordered_edges($undirected) {
                            graph.remove_edge(u, v);
                        }
                        assert!(graph.is_singleton_graph());
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;

/// Runs the same LIFO suite against a [`Stack`](crate::collections::Stack) implementation
macro_rules! test_stack {
    ($env:ident, $stack:ident) => {
        mod $env {
            use crate::collections::{$stack, Stack};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            #[test]
            fn lifo_order() {
                let mut stack = $stack::new();
                assert!(stack.is_empty());

                for val in 1..=3 {
                    stack.push(val);
                }
                assert_eq!(stack.size(), 3);
                assert_eq!(stack.peek(), Some(&3));

                assert_eq!(stack.pop(), Some(3));
                assert_eq!(stack.pop(), Some(2));
                assert_eq!(stack.peek(), Some(&1));
                assert_eq!(stack.pop(), Some(1));
                assert_eq!(stack.pop(), None);
                assert_eq!(stack.peek(), None);
                assert!(stack.is_empty());
            }

            #[test]
            fn matches_vec() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);
                let mut stack = $stack::new();
                let mut reference = Vec::new();

                for _ in 0..2000 {
                    if rng.random_bool(0.55) {
                        let val: u32 = rng.random();
                        stack.push(val);
                        reference.push(val);
                    } else {
                        assert_eq!(stack.pop(), reference.pop());
                    }
                    assert_eq!(stack.peek(), reference.last());
                    assert_eq!(stack.size(), reference.len());
                }
            }
        }
    };
}

pub(crate) use test_stack;

/// Runs the same FIFO and overflow suite against a
/// [`BoundedQueue`](crate::collections::BoundedQueue) implementation
macro_rules! test_bounded_queue {
    ($env:ident, $queue:ident) => {
        mod $env {
            use crate::{
                collections::{$queue, BoundedQueue},
                error::Error,
                testing::captured_logs,
            };

            #[test]
            fn fifo_order() {
                let mut queue = $queue::new(3).unwrap();
                assert!(queue.is_empty());
                assert_eq!(queue.capacity(), 3);

                for val in 1..=3 {
                    queue.enqueue(val).unwrap();
                }
                assert_eq!(queue.peek(), Some(&1));
                assert_eq!(queue.dequeue(), Some(1));
                assert_eq!(queue.dequeue(), Some(2));
                assert_eq!(queue.size(), 1);
                assert_eq!(queue.dequeue(), Some(3));
                assert_eq!(queue.dequeue(), None);
                assert_eq!(queue.peek(), None);
            }

            #[test]
            fn rejects_when_full() {
                let mut queue = $queue::new(3).unwrap();
                for val in 1..=3 {
                    queue.enqueue(val).unwrap();
                }
                assert!(queue.is_full());
                assert_eq!(queue.enqueue(4), Err(Error::CapacityExceeded { capacity: 3 }));
                assert_eq!(queue.size(), 3);

                assert_eq!(queue.dequeue(), Some(1));
                queue.enqueue(4).unwrap();
                let drained: Vec<u32> = std::iter::from_fn(|| queue.dequeue()).collect();
                assert_eq!(drained, vec![2, 3, 4]);
            }

            #[test]
            fn overflow_is_logged() {
                let logs = captured_logs(|| {
                    let mut queue = $queue::new(1).unwrap();
                    queue.enqueue('a').unwrap();
                    assert!(queue.enqueue('b').is_err());
                });
                assert!(logs.contains("queue is full"));
            }

            #[test]
            fn wraps_around() {
                let mut queue = $queue::new(2).unwrap();
                for val in 0..100u32 {
                    queue.enqueue(val).unwrap();
                    if val > 0 {
                        assert_eq!(queue.dequeue(), Some(val - 1));
                    }
                    assert!(queue.size() <= 2);
                }
                assert_eq!(queue.dequeue(), Some(99));
            }

            #[test]
            fn zero_capacity() {
                assert_eq!($queue::<u32>::new(0).unwrap_err(), Error::ZeroCapacity);
            }
        }
    };
}

pub(crate) use test_bounded_queue;

/// Runs the same fixtures against a sorting function given as `Fn(Vec<i64>) -> Vec<i64>`
macro_rules! test_sort {
    ($env:ident, $sort:expr) => {
        mod $env {
            use super::*;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use rstest::rstest;

            fn sorted(values: Vec<i64>) -> Vec<i64> {
                let sort = $sort;
                sort(values)
            }

            #[rstest]
            #[case::empty(vec![], vec![])]
            #[case::single(vec![7], vec![7])]
            #[case::duplicates(vec![3, 1, 3, 2, 1], vec![1, 1, 2, 3, 3])]
            #[case::negatives(vec![0, -5, 12, -1, 3], vec![-5, -1, 0, 3, 12])]
            #[case::sorted(vec![1, 2, 3, 4, 5], vec![1, 2, 3, 4, 5])]
            #[case::reversed(vec![5, 4, 3, 2, 1], vec![1, 2, 3, 4, 5])]
            #[case::all_equal(vec![2, 2, 2, 2], vec![2, 2, 2, 2])]
            #[case::mixed(vec![64, 34, 25, 12, 22, 11, 90], vec![11, 12, 22, 25, 34, 64, 90])]
            fn fixtures(#[case] values: Vec<i64>, #[case] expected: Vec<i64>) {
                assert_eq!(sorted(values), expected);
            }

            #[test]
            fn matches_std_sort() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);
                for len in [2usize, 3, 10, 33, 100, 500] {
                    for _ in 0..10 {
                        let values: Vec<i64> = (0..len).map(|_| rng.random_range(-50..50)).collect();
                        let mut expected = values.clone();
                        expected.sort();
                        assert_eq!(sorted(values), expected);
                    }
                }
            }
        }
    };
}

pub(crate) use test_sort;
