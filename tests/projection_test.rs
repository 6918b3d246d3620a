// Projection model contract: fit/transform, seeding, error cases

use vibemap::core::Embedding;
use vibemap::error::VibemapError;
use vibemap::processing::{ProjectionConfig, ProjectionModel};

/// Two loose clusters, deterministic (no RNG in tests)
fn synthetic_embeddings(n: usize, dim: usize) -> Vec<Embedding> {
    (0..n)
        .map(|i| {
            let base = if i < n / 2 { 2.0 } else { -2.0 };
            let data = (0..dim)
                .map(|j| base + 0.1 * (((i * 7 + j * 3) % 13) as f32))
                .collect();
            Embedding::new(data)
        })
        .collect()
}

fn test_config() -> ProjectionConfig {
    ProjectionConfig {
        n_neighbors: 4,
        ..Default::default()
    }
}

#[test]
fn transform_before_fit_is_an_error() {
    let model = ProjectionModel::new(test_config());
    let vector = Embedding::new(vec![1.0; 8]);

    match model.transform(&vector) {
        Err(VibemapError::NotFitted) => {}
        other => panic!("expected NotFitted, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn fit_rejects_too_few_vectors() {
    let mut model = ProjectionModel::new(test_config());
    let vectors = synthetic_embeddings(1, 8);

    match model.fit(&vectors) {
        Err(VibemapError::InsufficientData { actual: 1, .. }) => {}
        other => panic!("expected InsufficientData, got {:?}", other.map(|v| v.len())),
    }
}

#[test]
fn fit_returns_one_point_per_vector() {
    let mut model = ProjectionModel::new(test_config());
    let vectors = synthetic_embeddings(12, 8);

    let layout = model.fit(&vectors).unwrap();
    assert_eq!(layout.len(), 12);
}

#[test]
fn same_seed_produces_the_same_layout() {
    let vectors = synthetic_embeddings(12, 8);

    let mut first = ProjectionModel::new(test_config());
    let mut second = ProjectionModel::new(test_config());

    let layout_a = first.fit(&vectors).unwrap();
    let layout_b = second.fit(&vectors).unwrap();

    for (a, b) in layout_a.iter().zip(layout_b.iter()) {
        assert_eq!(a.x, b.x, "layouts diverged on x");
        assert_eq!(a.y, b.y, "layouts diverged on y");
    }
}

#[test]
fn transform_is_deterministic_and_does_not_mutate_the_fit() {
    let vectors = synthetic_embeddings(12, 8);
    let mut model = ProjectionModel::new(test_config());
    let layout = model.fit(&vectors).unwrap();

    let probe = Embedding::new(vec![1.5; 8]);
    let first = model.transform(&probe).unwrap();
    let second = model.transform(&probe).unwrap();

    assert_eq!(first, second);
    assert_eq!(model.fitted().unwrap().layout, layout);
}

#[test]
fn transform_of_a_training_vector_lands_on_its_layout_point() {
    let vectors = synthetic_embeddings(12, 8);
    let mut model = ProjectionModel::new(test_config());
    let layout = model.fit(&vectors).unwrap();

    let placed = model.transform(&vectors[3]).unwrap();
    assert_eq!(placed, layout[3]);
}

#[test]
fn transform_stays_within_the_layout_bounding_box() {
    let vectors = synthetic_embeddings(12, 8);
    let mut model = ProjectionModel::new(test_config());
    let layout = model.fit(&vectors).unwrap();

    // A probe near the first cluster must land inside the layout's overall
    // bounding box: it is a convex combination of layout points
    let probe = Embedding::new(vec![2.05; 8]);
    let placed = model.transform(&probe).unwrap();

    let min_x = layout.iter().map(|p| p.x).fold(f32::INFINITY, f32::min);
    let max_x = layout.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max);
    let min_y = layout.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
    let max_y = layout.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);

    assert!(placed.x >= min_x && placed.x <= max_x);
    assert!(placed.y >= min_y && placed.y <= max_y);
}
