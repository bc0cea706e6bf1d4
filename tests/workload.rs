//! Properties of generated workloads and the containers built from them.

use lookup_scaling::{
    create_lookup_values, create_test_values, seeded_rng, Container, HarnessError,
};

#[test]
fn pools_and_probes_share_a_domain() {
    let mut rng = seeded_rng(Some(12));
    for size in [1, 10, 1000, 4096] {
        let pool = create_test_values(&mut rng, size).unwrap();
        let probes = create_lookup_values(&mut rng, size, size.min(25)).unwrap();

        let [linear, hashed, _] = Container::build_all(&pool);
        for probe in probes {
            assert!(linear.contains(probe).unwrap());
            assert!(hashed.contains(probe).unwrap());
        }
    }
}

#[test]
fn containers_from_one_pool_hold_identical_values() {
    let pool = create_test_values(&mut seeded_rng(None), 2048).unwrap();
    let containers = Container::build_all(&pool);

    let reference = containers[0].members();
    assert_eq!(reference.len(), 2048);
    for container in &containers[1..] {
        assert_eq!(container.members(), reference);
    }
}

#[test]
fn oversized_lookup_batches_are_rejected() {
    let mut rng = seeded_rng(Some(0));
    let err = create_lookup_values(&mut rng, 10, 11).unwrap_err();
    assert!(matches!(err, HarnessError::InvalidArgument(_)));
    assert!(err.to_string().contains("cannot draw 11 unique lookups"));
}
