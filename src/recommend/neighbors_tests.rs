pub(crate) use super::*;

fn matrix(rows: Vec<Vec<Option<f64>>>) -> UtilityMatrix {
    Matrix::from_rows(rows).expect("test matrix is rectangular")
}

fn sample() -> UtilityMatrix {
    matrix(vec![
        vec![Some(5.0), Some(3.0), Some(4.0), Some(4.0), None],
        vec![Some(3.0), Some(1.0), Some(2.0), Some(3.0), Some(3.0)],
        vec![Some(4.0), Some(3.0), Some(4.0), Some(3.0), Some(5.0)],
        vec![Some(3.0), Some(3.0), Some(1.0), Some(5.0), Some(4.0)],
        vec![Some(1.0), Some(5.0), Some(5.0), Some(2.0), Some(1.0)],
    ])
}

#[test]
fn test_similarity_matrix_zero_diagonal_and_symmetric() {
    for metric in SimilarityMetric::ALL {
        let ranking = compute_similarities(&sample(), metric, None);
        let sims = &ranking.similarities;
        assert_eq!(sims.shape(), (5, 5));
        for i in 0..5 {
            assert_eq!(sims.get(i, i), 0.0);
        }
        assert!(sims.is_symmetric(), "metric {metric}");
    }
}

#[test]
fn test_similarity_matrix_matches_metric() {
    let m = sample();
    let ranking = compute_similarities(&m, SimilarityMetric::Pearson, None);
    let expected = SimilarityMetric::Pearson.similarity(m.row(0), m.row(3));
    assert_eq!(ranking.similarities.get(0, 3), expected);
    assert_eq!(ranking.similarities.get(3, 0), expected);
}

#[test]
fn test_neighbors_sorted_descending_without_self() {
    let ranking = compute_similarities(&sample(), SimilarityMetric::Pearson, None);
    for (user, list) in ranking.neighbors.iter().enumerate() {
        assert_eq!(list.len(), 4);
        assert!(list.iter().all(|n| n.index != user));
        assert!(list.windows(2).all(|w| w[0].similarity >= w[1].similarity));
    }
}

#[test]
fn test_neighbors_truncated_to_k() {
    let ranking = compute_similarities(&sample(), SimilarityMetric::Cosine, Some(2));
    assert!(ranking.neighbors.iter().all(|list| list.len() == 2));

    let full = compute_similarities(&sample(), SimilarityMetric::Cosine, None);
    for (short, long) in ranking.neighbors.iter().zip(&full.neighbors) {
        assert_eq!(short.as_slice(), &long[..2]);
    }
}

#[test]
fn test_k_larger_than_population_keeps_everyone() {
    let ranking = compute_similarities(&sample(), SimilarityMetric::Euclidean, Some(50));
    assert!(ranking.neighbors.iter().all(|list| list.len() == 4));
}

#[test]
fn test_k_zero_yields_empty_lists() {
    let ranking = compute_similarities(&sample(), SimilarityMetric::Euclidean, Some(0));
    assert!(ranking.neighbors.iter().all(Vec::is_empty));
}

#[test]
fn test_ties_keep_index_order() {
    // Users 1, 2, 3 never overlap with user 0: all similarities are 0.
    let m = matrix(vec![
        vec![Some(1.0), None],
        vec![None, Some(2.0)],
        vec![None, Some(3.0)],
        vec![None, Some(4.0)],
    ]);
    let ranking = compute_similarities(&m, SimilarityMetric::Cosine, None);
    let order: Vec<usize> = ranking.neighbors[0].iter().map(|n| n.index).collect();
    assert_eq!(order, vec![1, 2, 3]);
}

#[test]
fn test_negative_similarities_rank_last() {
    let m = matrix(vec![
        vec![Some(1.0), Some(2.0), Some(3.0)],
        vec![Some(3.0), Some(2.0), Some(1.0)],
        vec![Some(2.0), Some(4.0), Some(6.0)],
    ]);
    let ranking = compute_similarities(&m, SimilarityMetric::Pearson, None);
    let order: Vec<usize> = ranking.neighbors[0].iter().map(|n| n.index).collect();
    assert_eq!(order, vec![2, 1]);
    assert!(ranking.neighbors[0][1].similarity < 0.0);
}

#[test]
fn test_single_user() {
    let m = matrix(vec![vec![Some(3.0), None]]);
    let ranking = compute_similarities(&m, SimilarityMetric::Pearson, Some(3));
    assert_eq!(ranking.similarities.to_rows(), vec![vec![0.0]]);
    assert_eq!(ranking.neighbors, vec![Vec::<Neighbor>::new()]);
}

#[test]
fn test_no_users() {
    let m = matrix(Vec::new());
    let ranking = compute_similarities(&m, SimilarityMetric::Cosine, None);
    assert_eq!(ranking.similarities.shape(), (0, 0));
    assert!(ranking.neighbors.is_empty());
}

// 60 users; every third one rates on a 1e200 scale.
fn extreme_ratings() -> UtilityMatrix {
    let rows = (0..60)
        .map(|u| {
            let scale = if u % 3 == 0 { 1e200 } else { 1.0 };
            vec![
                Some(scale * (1 + u % 5) as f64),
                Some(scale * (1 + u % 3) as f64),
                if u % 2 == 0 { None } else { Some(scale * 4.0) },
            ]
        })
        .collect();
    matrix(rows)
}

#[test]
fn test_extreme_ratings_rank_without_panicking() {
    let m = extreme_ratings();
    for metric in SimilarityMetric::ALL {
        for k in [None, Some(5)] {
            let ranking = compute_similarities(&m, metric, k);
            assert!(
                ranking.similarities.as_slice().iter().all(|s| s.is_finite()),
                "metric {metric}"
            );
            for list in &ranking.neighbors {
                assert_eq!(list.len(), k.unwrap_or(59));
                assert!(list.windows(2).all(|w| w[0].similarity >= w[1].similarity));
            }
        }
    }
}
