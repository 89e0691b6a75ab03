//! End-to-end runs on a three-region directed ring.
//!
//! The ring is small enough to pin exact trajectory values for every
//! transport setting: symmetric blend, pure retrograde, and pure
//! anterograde. Values were computed independently at high precision
//! from the eigenstructure of the assembled system matrix.

use approx::assert_relative_eq;
use nalgebra::DVector;

use tangle_engine::{Model, ModelConfig};
use tangle_propagate::Evaluation;
use tangle_test_utils::{ones_column, ring3, seed_origin};

fn ring_config(directionality: bool, times: Vec<f64>) -> ModelConfig {
    ModelConfig {
        connectome: ring3(),
        covariates: ones_column(3),
        seed: seed_origin(3),
        times,
        directionality,
        volume_correction: false,
        evaluation: Evaluation::Sequential,
    }
}

#[test]
fn symmetric_blend_spreads_evenly() {
    let model = Model::new(ring_config(false, vec![0.0, 1.0])).unwrap();
    let trajectory = model.simulate(&[0.0, 1.0, 1.0, 0.0, 0.0, 0.0]).unwrap();

    assert_relative_eq!(
        trajectory.state(0),
        DVector::from_vec(vec![1.0, 0.0, 0.0]),
        epsilon = 1e-14
    );
    // With the ring blended to symmetry, the two non-seeded regions are
    // interchangeable and receive identical load.
    assert_relative_eq!(
        trajectory.state(1),
        DVector::from_vec(vec![
            0.48208677343228655,
            0.25895661328385672,
            0.25895661328385672,
        ]),
        epsilon = 1e-12
    );
}

#[test]
fn direction_slot_is_ignored_without_directionality() {
    let model = Model::new(ring_config(false, vec![1.0])).unwrap();

    let pinned = model.simulate(&[0.0, 1.0, 1.0, 0.0, 0.0, 0.0]).unwrap();
    let slotted = model.simulate(&[0.0, 1.0, 1.0, 0.9, 0.0, 0.0]).unwrap();

    assert_eq!(pinned.values(), slotted.values());
}

#[test]
fn retrograde_transport_follows_incoming_edges() {
    let model = Model::new(ring_config(true, vec![1.0])).unwrap();
    let trajectory = model.simulate(&[0.0, 1.0, 1.0, 1.0, 0.0, 0.0]).unwrap();

    assert_relative_eq!(
        trajectory.state(0),
        DVector::from_vec(vec![
            0.42970463958039036,
            0.18701451580993637,
            0.38328084460967327,
        ]),
        epsilon = 1e-12
    );
}

#[test]
fn anterograde_transport_follows_outgoing_edges() {
    let model = Model::new(ring_config(true, vec![1.0])).unwrap();
    let trajectory = model.simulate(&[0.0, 1.0, 1.0, 0.0, 0.0, 0.0]).unwrap();

    assert_relative_eq!(
        trajectory.state(0),
        DVector::from_vec(vec![
            0.42970463958039036,
            0.38328084460967327,
            0.18701451580993637,
        ]),
        epsilon = 1e-12
    );
}

#[test]
fn pure_directions_mirror_each_other_on_the_ring() {
    let model = Model::new(ring_config(true, vec![1.0])).unwrap();

    let retro = model.simulate(&[0.0, 1.0, 1.0, 1.0, 0.0, 0.0]).unwrap();
    let antero = model.simulate(&[0.0, 1.0, 1.0, 0.0, 0.0, 0.0]).unwrap();

    // Reversing every edge of a cycle relabels its two neighbours.
    assert_relative_eq!(retro.state(0)[0], antero.state(0)[0], epsilon = 1e-12);
    assert_relative_eq!(retro.state(0)[1], antero.state(0)[2], epsilon = 1e-12);
    assert_relative_eq!(retro.state(0)[2], antero.state(0)[1], epsilon = 1e-12);
}

#[test]
fn transport_conserves_total_mass() {
    let times = vec![0.0, 0.5, 1.0, 2.0, 5.0];
    let model = Model::new(ring_config(false, times.clone())).unwrap();
    let trajectory = model.simulate(&[0.0, 1.0, 1.0, 0.0, 0.0, 0.0]).unwrap();

    for sample in 0..times.len() {
        assert_relative_eq!(trajectory.total(sample), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn parallel_scheduling_reproduces_the_golden_values() {
    let mut config = ring_config(false, vec![0.0, 1.0]);
    config.evaluation = Evaluation::Parallel { workers: 2 };

    let model = Model::new(config).unwrap();
    let trajectory = model.simulate(&[0.0, 1.0, 1.0, 0.0, 0.0, 0.0]).unwrap();

    assert_relative_eq!(
        trajectory.state(1),
        DVector::from_vec(vec![
            0.48208677343228655,
            0.25895661328385672,
            0.25895661328385672,
        ]),
        epsilon = 1e-12
    );
}
