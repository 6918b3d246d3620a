// Classification properties and the safe/warning end-to-end scenario

use vibemap::core::{Bounds, Category, Embedding, LabeledBehavior, Point2D, ReferenceDataset};
use vibemap::processing::score;

fn behavior(text: &str, label: &str, embedding: Vec<f32>) -> LabeledBehavior {
    LabeledBehavior::new(text, Category::new(label).unwrap(), Embedding::new(embedding))
}

fn dataset(behaviors: Vec<LabeledBehavior>, coords: &[(f32, f32)]) -> ReferenceDataset {
    let coordinates: Vec<Point2D> = coords.iter().map(|(x, y)| Point2D::new(*x, *y)).collect();
    let bounds = Bounds::from_points(&coordinates).unwrap();
    ReferenceDataset {
        behaviors,
        coordinates,
        bounds,
    }
}

fn safe_warning_dataset() -> ReferenceDataset {
    dataset(
        vec![
            behavior("helps", "safe", vec![1.0, 0.0]),
            behavior("listens", "safe", vec![0.9, 0.1]),
            behavior("ignores no", "warning", vec![-1.0, 0.0]),
            behavior("manipulates", "warning", vec![-0.9, -0.1]),
        ],
        &[(0.1, 0.1), (0.2, 0.1), (0.9, 0.9), (0.8, 0.9)],
    )
}

#[test]
fn classifies_near_the_safe_cluster() {
    let ds = safe_warning_dataset();
    let user = Embedding::new(vec![0.95, 0.05]);

    let result = score(&user, Point2D::new(0.15, 0.1), &ds);

    assert_eq!(result.category.as_str(), "safe");
    assert!(
        result.confidence > 0.99,
        "expected confidence near the safe cluster cosine, got {}",
        result.confidence
    );

    let warning_score = result
        .per_category
        .iter()
        .find(|(c, _)| c.as_str() == "warning")
        .map(|(_, s)| *s)
        .unwrap();
    assert!(
        warning_score < 0.0,
        "expected a negative warning similarity, got {}",
        warning_score
    );
}

#[test]
fn scores_stay_in_cosine_range() {
    let ds = safe_warning_dataset();
    let user = Embedding::new(vec![0.3, -0.7]);

    let result = score(&user, Point2D::new(0.5, 0.5), &ds);

    for (category, value) in &result.per_category {
        assert!(
            *value >= -1.0 - 1e-6 && *value <= 1.0 + 1e-6,
            "{} score out of range: {}",
            category,
            value
        );
    }
}

#[test]
fn confidence_is_the_maximum_category_score() {
    let ds = safe_warning_dataset();
    let user = Embedding::new(vec![0.95, 0.05]);

    let result = score(&user, Point2D::new(0.15, 0.1), &ds);

    let max = result
        .per_category
        .iter()
        .map(|(_, s)| *s)
        .fold(f32::NEG_INFINITY, f32::max);
    assert_eq!(result.confidence, max);
}

#[test]
fn category_is_from_the_reference_label_set() {
    let ds = safe_warning_dataset();
    let user = Embedding::new(vec![-0.5, 0.5]);

    let result = score(&user, Point2D::new(0.5, 0.5), &ds);
    assert!(ds.categories().contains(&result.category));
}

#[test]
fn isolation_metrics_are_consistent() {
    let ds = safe_warning_dataset();
    let user = Embedding::new(vec![0.95, 0.05]);

    let result = score(&user, Point2D::new(0.15, 0.1), &ds);

    assert!(result.mean_isolation >= 0.0);
    assert!(result.nearest_distance >= 0.0);
    assert!(result.nearest_distance <= result.mean_isolation);
}

#[test]
fn exact_ties_keep_the_first_encountered_label() {
    // Identical embeddings under two labels: both means are equal
    let ds = dataset(
        vec![
            behavior("first", "alpha", vec![1.0, 0.0]),
            behavior("second", "beta", vec![1.0, 0.0]),
        ],
        &[(0.0, 0.0), (1.0, 1.0)],
    );
    let user = Embedding::new(vec![1.0, 0.0]);

    let result = score(&user, Point2D::new(0.5, 0.5), &ds);
    assert_eq!(result.category.as_str(), "alpha");
}

#[test]
fn per_category_scores_follow_discovery_order() {
    let ds = dataset(
        vec![
            behavior("one", "beta", vec![1.0, 0.0]),
            behavior("two", "alpha", vec![0.0, 1.0]),
            behavior("three", "beta", vec![0.5, 0.5]),
        ],
        &[(0.0, 0.0), (0.5, 0.5), (1.0, 1.0)],
    );
    let user = Embedding::new(vec![1.0, 1.0]);

    let result = score(&user, Point2D::new(0.5, 0.5), &ds);

    let order: Vec<&str> = result.per_category.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(order, vec!["beta", "alpha"]);
}
