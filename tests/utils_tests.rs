//! Unit tests for configuration loading and utility functions.

use indirect_tsp::utils::{grid_nodes, random_nodes, seeded_rng};
use indirect_tsp::{Config, Convergence, Node, TspError};
use rand::Rng;

#[test]
fn test_config_defaults() {
    let config = Config::new();

    assert_eq!(config.convergence, Convergence::LocalOptimum);
    assert_eq!(config.max_sweeps, None);
    assert!(!config.parallel);
    assert_eq!(config.seed, None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_builder() {
    let config = Config::new()
        .with_convergence(Convergence::SingleStep)
        .with_max_sweeps(10)
        .with_parallel(true)
        .with_seed(99);

    assert_eq!(config.convergence, Convergence::SingleStep);
    assert_eq!(config.max_sweeps, Some(10));
    assert!(config.parallel);
    assert_eq!(config.seed, Some(99));
}

#[test]
fn test_config_from_json() {
    let config = Config::from_json(r#"{ "convergence": "SingleStep", "seed": 5 }"#).unwrap();
    assert_eq!(config.convergence, Convergence::SingleStep);
    assert_eq!(config.seed, Some(5));
    // Missing fields fall back to defaults
    assert_eq!(config.max_sweeps, None);
    assert!(!config.parallel);

    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn test_config_from_json_errors() {
    assert!(matches!(
        Config::from_json(r#"{ "max_sweeps": 0 }"#),
        Err(TspError::InvalidConfig(_))
    ));
    assert!(matches!(
        Config::from_json(r#"{ "convergence": "Sometimes" }"#),
        Err(TspError::InvalidConfig(_))
    ));
    assert!(matches!(
        Config::from_json("not json"),
        Err(TspError::InvalidConfig(_))
    ));
}

#[test]
fn test_seeded_rng_is_reproducible() {
    let mut a = seeded_rng(Some(123));
    let mut b = seeded_rng(Some(123));

    for _ in 0..10 {
        assert_eq!(a.gen::<u64>(), b.gen::<u64>());
    }
}

#[test]
fn test_random_nodes_in_square() {
    let mut rng = seeded_rng(Some(8));
    let nodes = random_nodes(50, 10.0, &mut rng).unwrap();

    assert_eq!(nodes.len(), 50);
    for node in &nodes {
        assert!((0.0..10.0).contains(&node.x));
        assert!((0.0..10.0).contains(&node.y));
    }
}

#[test]
fn test_random_nodes_rejects_unusable_side() {
    let mut rng = seeded_rng(Some(8));

    for side in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            random_nodes(3, side, &mut rng),
            Err(TspError::InvalidConfig(_))
        ));
    }
    assert!(random_nodes(0, 1.0, &mut rng).unwrap().is_empty());
}

#[test]
fn test_grid_nodes_layout() {
    let nodes = grid_nodes(6, 5.0);

    // Three columns, two rows
    assert_eq!(nodes.len(), 6);
    assert_eq!(nodes[0], Node::new(0.0, 0.0));
    assert_eq!(nodes[2], Node::new(10.0, 0.0));
    assert_eq!(nodes[3], Node::new(0.0, 5.0));
    assert_eq!(nodes[5], Node::new(10.0, 5.0));

    assert!(grid_nodes(0, 1.0).is_empty());
}

#[test]
fn test_error_messages() {
    assert_eq!(
        TspError::EmptyInstance.to_string(),
        "zero nodes were given as input"
    );
    assert_eq!(
        TspError::NonFiniteCoordinate { index: 2 }.to_string(),
        "node 2 has a non-finite coordinate"
    );
    assert_eq!(
        TspError::DimensionMismatch {
            expected: 3,
            got: 2
        }
        .to_string(),
        "decision vector has 2 values, expected 3"
    );
}
