#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::graph::{AdjacencyGraph, CsrGraph, Graph, NodeId};
    use crate::scoring::{
        adamic_adar, common_neighbours, eligible_candidates, rank, score, Method, Recommendation,
        ScoreError,
    };

    // the graph from the worked example: 4 is the only candidate for 1
    fn house_graph() -> AdjacencyGraph {
        AdjacencyGraph::from_edges(&[(1, 2), (1, 3), (2, 3), (2, 4)])
    }

    fn random_graph(n: NodeId, avg_degree: usize, seed: u64) -> AdjacencyGraph {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut edges = Vec::new();
        for u in 0..n {
            for _ in 0..avg_degree / 2 {
                let v = rng.random_range(0..n);
                if v != u {
                    edges.push((u, v));
                }
            }
        }
        AdjacencyGraph::from_parts(0..n, &edges)
    }

    #[test]
    fn test_eligible_candidates_exclude_self_and_neighbors() {
        let graph = house_graph();

        // 2 and 3 are already connected to 1
        assert_eq!(eligible_candidates(&graph, 1).unwrap(), vec![4]);
        // 4 only knows 2
        assert_eq!(eligible_candidates(&graph, 4).unwrap(), vec![1, 3]);
    }

    #[test]
    fn test_invalid_query_node() {
        let graph = house_graph();

        assert_eq!(
            eligible_candidates(&graph, 99).unwrap_err(),
            ScoreError::InvalidQueryNode(99)
        );
        assert_eq!(
            score(&graph, 99, Method::CommonNeighbours, 10).unwrap_err(),
            ScoreError::InvalidQueryNode(99)
        );
        assert_eq!(
            score(&graph, 99, Method::AdamicAdar, 10).unwrap_err(),
            ScoreError::InvalidQueryNode(99)
        );
    }

    #[test]
    fn test_common_neighbours_literal() {
        let graph = house_graph();

        // candidate 4 shares exactly one neighbor with 1 (node 2)
        let recs = common_neighbours(&graph, 1, 10).unwrap();
        assert_eq!(
            recs,
            vec![Recommendation {
                candidate: 4,
                score: 1.0
            }]
        );
    }

    #[test]
    fn test_adamic_adar_literal() {
        let graph = house_graph();

        // shared neighbor 2 has degree 3, so the score is 1/log2(3)
        let recs = adamic_adar(&graph, 1, 10).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].candidate, 4);
        assert!((recs[0].score - 1.0 / 3f64.log2()).abs() < 1e-12);
    }

    #[test]
    fn test_zero_score_candidates_kept() {
        // two disjoint edges: nothing shares a neighbor with anything
        let graph = AdjacencyGraph::from_edges(&[(1, 2), (3, 4)]);

        let recs = common_neighbours(&graph, 1, 10).unwrap();
        assert_eq!(
            recs,
            vec![
                Recommendation {
                    candidate: 3,
                    score: 0.0
                },
                Recommendation {
                    candidate: 4,
                    score: 0.0
                },
            ]
        );

        let recs = adamic_adar(&graph, 1, 10).unwrap();
        assert_eq!(recs.len(), 2);
        assert!(recs.iter().all(|r| r.score == 0.0));
    }

    #[test]
    fn test_tie_break_ascending_id() {
        // query 5 shares two neighbors with 4 and one with each of 1, 2, 3
        let graph = AdjacencyGraph::from_edges(&[
            (5, 0),
            (0, 1),
            (0, 2),
            (0, 3),
            (0, 4),
            (5, 6),
            (6, 4),
        ]);

        let recs = common_neighbours(&graph, 5, 10).unwrap();
        let order: Vec<NodeId> = recs.iter().map(|r| r.candidate).collect();
        assert_eq!(order, vec![4, 1, 2, 3]);
        assert_eq!(recs[0].score, 2.0);
        assert!(recs[1..].iter().all(|r| r.score == 1.0));
    }

    #[test]
    fn test_rank_zero_n() {
        let scores = vec![
            Recommendation {
                candidate: 1,
                score: 3.0,
            },
            Recommendation {
                candidate: 2,
                score: 5.0,
            },
        ];
        assert!(rank(scores, 0).is_empty());

        let graph = house_graph();
        assert!(score(&graph, 1, Method::CommonNeighbours, 0)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_limit_exceeds_candidates() {
        let graph = house_graph();

        // only two eligible candidates for 4; asking for 10 returns both
        let recs = common_neighbours(&graph, 4, 10).unwrap();
        assert_eq!(
            recs,
            vec![
                Recommendation {
                    candidate: 1,
                    score: 1.0
                },
                Recommendation {
                    candidate: 3,
                    score: 1.0
                },
            ]
        );
    }

    #[test]
    fn test_empty_candidate_set() {
        let graph = AdjacencyGraph::from_parts([7], &[]);

        for method in [Method::CommonNeighbours, Method::AdamicAdar] {
            assert!(score(&graph, 7, method, 10).unwrap().is_empty());
            assert!(score(&graph, 7, method, 0).unwrap().is_empty());
        }
    }

    #[test]
    fn test_determinism() {
        let graph = random_graph(200, 8, 42);
        let query = graph.node_ids()[0];

        for method in [Method::CommonNeighbours, Method::AdamicAdar] {
            let first = score(&graph, query, method, 10).unwrap();
            let second = score(&graph, query, method, 10).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_monotonic_truncation() {
        let graph = random_graph(100, 6, 7);
        let query = graph.node_ids()[3];

        for method in [Method::CommonNeighbours, Method::AdamicAdar] {
            let full = score(&graph, query, method, graph.n()).unwrap();
            for n in 0..=full.len() {
                let truncated = score(&graph, query, method, n).unwrap();
                assert_eq!(truncated, full[..n], "n = {} is not a prefix", n);
            }
        }
    }

    #[test]
    fn test_exclusion_invariant() {
        let graph = random_graph(120, 10, 3);

        for &query in graph.node_ids() {
            for method in [Method::CommonNeighbours, Method::AdamicAdar] {
                for rec in score(&graph, query, method, graph.n()).unwrap() {
                    assert_ne!(rec.candidate, query);
                    assert!(
                        !graph.has_edge(query, rec.candidate),
                        "candidate {} is already adjacent to {}",
                        rec.candidate,
                        query
                    );
                    assert!(rec.score >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_representation_agnostic() {
        let adjacency = house_graph();
        let csr = CsrGraph::from(&adjacency);

        for &query in adjacency.node_ids() {
            for method in [Method::CommonNeighbours, Method::AdamicAdar] {
                assert_eq!(
                    score(&adjacency, query, method, 10).unwrap(),
                    score(&csr, query, method, 10).unwrap()
                );
            }
        }
    }

    // Graph stub whose neighbor lists are not symmetric, so a shared neighbor
    // can report degree 1. Impossible for the normalized representations, but
    // the scorer has to stay total over any Graph impl.
    struct DegreeOneStub {
        ids: Vec<NodeId>,
        neighborhoods: Vec<Vec<NodeId>>,
    }

    impl Graph for DegreeOneStub {
        fn node_ids(&self) -> &[NodeId] {
            &self.ids
        }

        fn neighbors(&self, v: NodeId) -> &[NodeId] {
            &self.neighborhoods[v as usize]
        }

        fn contains(&self, v: NodeId) -> bool {
            (v as usize) < self.ids.len()
        }
    }

    #[test]
    fn test_degree_one_neighbor_contributes_zero() {
        let graph = DegreeOneStub {
            ids: vec![0, 1, 2],
            neighborhoods: vec![vec![2], vec![2], vec![0]],
        };

        // 0 and 1 share neighbor 2, which has degree 1: the term is skipped
        let recs = adamic_adar(&graph, 0, 10).unwrap();
        assert_eq!(
            recs,
            vec![Recommendation {
                candidate: 1,
                score: 0.0
            }]
        );

        // common neighbours still counts the shared node
        let recs = common_neighbours(&graph, 0, 10).unwrap();
        assert_eq!(recs[0].score, 1.0);
    }
}
