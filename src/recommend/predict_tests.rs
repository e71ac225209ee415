pub(crate) use super::*;
use crate::primitives::Matrix;

fn matrix(rows: Vec<Vec<Option<f64>>>) -> UtilityMatrix {
    Matrix::from_rows(rows).expect("test matrix is rectangular")
}

fn nb(index: usize, similarity: f64) -> Neighbor {
    Neighbor { index, similarity }
}

// user 0 is missing item 2
fn ratings() -> UtilityMatrix {
    matrix(vec![
        vec![Some(4.0), Some(2.0), None],
        vec![Some(5.0), Some(3.0), Some(4.0)],
        vec![Some(1.0), None, Some(2.0)],
        vec![Some(3.0), Some(3.0), None],
    ])
}

#[test]
fn test_simple_weighted_average() {
    let neighbors = [nb(1, 0.8), nb(2, 0.2)];
    let detail = predict_cell(&ratings(), 0, 2, &neighbors, PredictionFormula::Simple, RatingBounds::unbounded());
    let expected = (0.8 * 4.0 + 0.2 * 2.0) / (0.8 + 0.2);
    assert!((detail.raw_prediction - expected).abs() < 1e-12);
    assert_eq!(detail.final_prediction, detail.raw_prediction);
    assert_eq!(detail.formula, PredictionFormula::Simple);
    assert_eq!((detail.user, detail.item), (0, 2));
}

#[test]
fn test_simple_uses_absolute_similarity_in_denominator() {
    let neighbors = [nb(1, 0.5), nb(2, -0.5)];
    let detail = predict_cell(&ratings(), 0, 2, &neighbors, PredictionFormula::Simple, RatingBounds::unbounded());
    let expected = (0.5 * 4.0 - 0.5 * 2.0) / 1.0;
    assert!((detail.raw_prediction - expected).abs() < 1e-12);
}

#[test]
fn test_only_neighbors_with_a_rating_contribute() {
    let neighbors = [nb(3, 0.9), nb(1, 0.7), nb(2, 0.1)];
    let detail = predict_cell(&ratings(), 0, 2, &neighbors, PredictionFormula::Simple, RatingBounds::unbounded());
    let used: Vec<usize> = detail.neighbors_used.iter().map(|c| c.index).collect();
    assert_eq!(used, vec![1, 2]);
    assert_eq!(detail.neighbors_used[0].rating, 4.0);
    assert_eq!(detail.neighbors_used[0].similarity, 0.7);
    assert!(detail.neighbors_used.iter().all(|c| c.neighbor_mean.is_none()));
}

#[test]
fn test_mean_diff_formula() {
    let m = ratings();
    let neighbors = [nb(1, 0.8), nb(2, 0.2)];
    let detail = predict_cell(&m, 0, 2, &neighbors, PredictionFormula::MeanDiff, RatingBounds::unbounded());

    let user_mean = 3.0;
    let mean_1 = 4.0;
    let mean_2 = 1.5;
    let expected = user_mean + (0.8 * (4.0 - mean_1) + 0.2 * (2.0 - mean_2)) / 1.0;
    assert!((detail.raw_prediction - expected).abs() < 1e-12);
    assert_eq!(detail.formula, PredictionFormula::MeanDiff);
    assert_eq!(detail.neighbors_used[0].neighbor_mean, Some(mean_1));
    assert_eq!(detail.neighbors_used[1].neighbor_mean, Some(mean_2));
}

#[test]
fn test_no_rated_neighbor_falls_back_to_user_mean() {
    let neighbors = [nb(3, 1.0)];
    for formula in PredictionFormula::ALL {
        let detail = predict_cell(&ratings(), 0, 2, &neighbors, formula, RatingBounds::unbounded());
        assert!(detail.neighbors_used.is_empty());
        assert_eq!(detail.raw_prediction, 3.0, "formula {formula}");
    }
}

#[test]
fn test_empty_neighbor_list_falls_back_to_user_mean() {
    let detail = predict_cell(&ratings(), 3, 2, &[], PredictionFormula::MeanDiff, RatingBounds::unbounded());
    assert_eq!(detail.raw_prediction, 3.0);
}

#[test]
fn test_all_zero_similarities_fall_back_to_user_mean() {
    let neighbors = [nb(1, 0.0), nb(2, 0.0)];
    for formula in PredictionFormula::ALL {
        let detail = predict_cell(&ratings(), 0, 2, &neighbors, formula, RatingBounds::unbounded());
        assert_eq!(detail.neighbors_used.len(), 2);
        assert_eq!(detail.raw_prediction, 3.0, "formula {formula}");
    }
}

#[test]
fn test_user_without_ratings_falls_back_to_zero() {
    let m = matrix(vec![vec![None, None], vec![None, Some(4.0)]]);
    let detail = predict_cell(&m, 0, 0, &[nb(1, 0.0)], PredictionFormula::Simple, RatingBounds::unbounded());
    assert_eq!(detail.raw_prediction, 0.0);

    let clamped = predict_cell(&m, 0, 0, &[], PredictionFormula::Simple, RatingBounds::new(1.0, 5.0));
    assert_eq!(clamped.raw_prediction, 0.0);
    assert_eq!(clamped.final_prediction, 1.0);
}

#[test]
fn test_clamping_keeps_raw_prediction() {
    let m = matrix(vec![vec![Some(1.0), None], vec![Some(1.0), Some(9.0)]]);
    let detail = predict_cell(&m, 0, 1, &[nb(1, 1.0)], PredictionFormula::Simple, RatingBounds::new(1.0, 5.0));
    assert_eq!(detail.raw_prediction, 9.0);
    assert_eq!(detail.final_prediction, 5.0);
}

#[test]
fn test_clamp_min_only_and_max_only() {
    let min_only = RatingBounds { min: Some(2.0), max: None };
    assert_eq!(min_only.clamp(-3.0), 2.0);
    assert_eq!(min_only.clamp(7.0), 7.0);

    let max_only = RatingBounds { min: None, max: Some(4.0) };
    assert_eq!(max_only.clamp(7.0), 4.0);
    assert_eq!(max_only.clamp(-3.0), -3.0);

    assert_eq!(RatingBounds::unbounded().clamp(42.5), 42.5);
}

#[test]
fn test_clamp_inverted_bounds_apply_min_then_max() {
    let inverted = RatingBounds::new(5.0, 1.0);
    assert_eq!(inverted.clamp(0.0), 1.0);
    assert_eq!(inverted.clamp(3.0), 1.0);
    assert_eq!(inverted.clamp(9.0), 1.0);
}

#[test]
fn test_formula_from_str_and_display() {
    for formula in PredictionFormula::ALL {
        let parsed: PredictionFormula = formula.to_string().parse().expect("round trip name");
        assert_eq!(parsed, formula);
    }
    assert_eq!("mean_diff".parse::<PredictionFormula>().expect("alias"), PredictionFormula::MeanDiff);
    assert!("median".parse::<PredictionFormula>().is_err());
}

#[test]
fn test_formula_serde_names() {
    let json = serde_json::to_string(&PredictionFormula::MeanDiff).expect("serialize");
    assert_eq!(json, "\"mean-diff\"");
    let back: PredictionFormula = serde_json::from_str("\"simple\"").expect("deserialize");
    assert_eq!(back, PredictionFormula::Simple);
}

#[test]
fn test_contribution_serde_omits_missing_mean() {
    let c = NeighborContribution { index: 2, similarity: 0.5, rating: 4.0, neighbor_mean: None };
    let json = serde_json::to_string(&c).expect("serialize");
    assert!(!json.contains("neighbor_mean"));
    let back: NeighborContribution = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, c);
}

#[test]
fn test_overflowing_weighted_sum_falls_back_to_user_mean() {
    let m = matrix(vec![
        vec![Some(2.0), None],
        vec![Some(1.0), Some(1e308)],
        vec![Some(1.0), Some(1e308)],
    ]);
    let neighbors = [nb(1, 1.0), nb(2, 1.0)];
    let detail = predict_cell(&m, 0, 1, &neighbors, PredictionFormula::Simple, RatingBounds::unbounded());
    assert_eq!(detail.neighbors_used.len(), 2);
    assert_eq!(detail.raw_prediction, 2.0);
    assert_eq!(detail.final_prediction, 2.0);
}

#[test]
fn test_overflowing_user_mean_falls_back_to_zero() {
    let m = matrix(vec![vec![Some(1e308), Some(1e308), None]]);
    let detail = predict_cell(&m, 0, 2, &[], PredictionFormula::MeanDiff, RatingBounds::unbounded());
    assert_eq!(detail.raw_prediction, 0.0);
}
