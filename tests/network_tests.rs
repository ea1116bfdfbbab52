#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use drivesim::simulation::controls::{ControlType, Controls, Intents};
use drivesim::simulation::error::SimError;
use drivesim::simulation::network::{Level, Network};
use ndarray::{Array1, Array2, arr1, arr2};

#[test]
fn test_layout() {
    let network = Network::new(&[5, 6, 4]);

    assert_eq!(network.levels.len(), 2);
    assert_eq!(network.levels[0].weights.dim(), (6, 5));
    assert_eq!(network.levels[1].weights.dim(), (4, 6));
    assert_eq!(network.input_size(), 5);
    assert_eq!(network.output_size(), 4);
}

#[test]
fn test_random_weights_in_range() {
    let network = Network::new(&[5, 6, 4]);
    for level in &network.levels {
        assert!(level.weights.iter().all(|w| (-1.0..=1.0).contains(w)));
        assert!(level.biases.iter().all(|b| (-1.0..=1.0).contains(b)));
    }
}

#[test]
fn test_outputs_are_binary() {
    let network = Network::new(&[5, 6, 4]);
    let outputs = network.feed_forward(&arr1(&[0.1, 0.0, 0.9, 0.5, 0.3]));

    assert_eq!(outputs.len(), 4);
    assert!(outputs.iter().all(|&o| o == 0.0 || o == 1.0));
}

#[test]
fn test_step_activation() {
    let level = Level {
        weights: arr2(&[[1.0, 0.0], [0.0, 1.0], [0.5, 0.5]]),
        biases: arr1(&[0.5, 0.5, 0.5]),
    };

    let outputs = level.feed_forward(&arr1(&[1.0, 0.0]));
    // sum must strictly exceed the bias
    assert_eq!(outputs, arr1(&[1.0, 0.0, 0.0]));
}

#[test]
fn test_evaluation_leaves_network_untouched() {
    let network = Network::new(&[3, 4]);
    let before = network.clone();
    let _ = network.feed_forward(&Array1::ones(3));
    assert_eq!(network, before);
}

#[test]
fn test_save_and_load() {
    let network = Network::new(&[5, 6, 4]);
    let path = std::env::temp_dir().join("drivesim_network_roundtrip.json");
    let path = path.to_str().expect("temp path is utf-8");

    network.save_to_file(path).expect("Failed to save network");
    let loaded = Network::load_from_file(path).expect("Failed to load network");

    assert_eq!(loaded, network);
    let _ = std::fs::remove_file(path);
}

#[test]
fn test_load_missing_file() {
    let result = Network::load_from_file("/nonexistent/drivesim/brain.json");
    assert!(matches!(result, Err(SimError::Io(_))));
}

#[test]
fn test_load_malformed_file() {
    let path = std::env::temp_dir().join("drivesim_network_malformed.json");
    std::fs::write(&path, "{ not json").expect("write temp file");

    let result = Network::load_from_file(path.to_str().expect("temp path is utf-8"));
    assert!(matches!(result, Err(SimError::Json(_))));
    let _ = std::fs::remove_file(path);
}

#[test]
fn test_validate_accepts_chained_levels() {
    assert!(Network::new(&[5, 6, 4]).validate().is_ok());
    assert!(Network::new(&[5]).validate().is_ok());
}

#[test]
fn test_load_rejects_unchained_levels() {
    let network = Network {
        levels: vec![Level::new_random(5, 6), Level::new_random(3, 4)],
    };
    let path = std::env::temp_dir().join("drivesim_network_unchained.json");
    let path = path.to_str().expect("temp path is utf-8");
    // saving does not check the layout, loading does
    network.save_to_file(path).expect("Failed to save network");

    let result = Network::load_from_file(path);
    assert!(matches!(
        result,
        Err(SimError::NetworkShape {
            expected: (6, 4),
            found: (3, 4)
        })
    ));
    let _ = std::fs::remove_file(path);
}

#[test]
fn test_validate_rejects_bias_mismatch() {
    let network = Network {
        levels: vec![Level {
            weights: Array2::zeros((4, 5)),
            biases: Array1::zeros(3),
        }],
    };

    assert!(matches!(
        network.validate(),
        Err(SimError::NetworkShape {
            expected: (5, 4),
            found: (5, 3)
        })
    ));
}

#[test]
fn test_outputs_map_to_intents_in_order() {
    let mut controls = Controls::new(ControlType::Ai);
    controls.apply_network_outputs(&[1.0, 0.0, 1.0, 0.0]);

    assert_eq!(
        controls.intents(),
        Intents {
            forward: true,
            left: false,
            right: true,
            reverse: false,
        }
    );
}

#[test]
fn test_outputs_ignored_without_ai_control() {
    let mut controls = Controls::new(ControlType::Keys);
    controls.apply_network_outputs(&[1.0, 1.0, 1.0, 1.0]);
    assert_eq!(controls.intents(), Intents::default());

    let mut dummy = Controls::new(ControlType::Dummy);
    dummy.apply_network_outputs(&[0.0, 1.0, 1.0, 1.0]);
    assert!(dummy.intents().forward);
    assert!(!dummy.intents().left);
}

#[test]
fn test_short_outputs_read_as_inactive() {
    let mut controls = Controls::new(ControlType::Ai);
    controls.apply_network_outputs(&[1.0]);

    assert!(controls.intents().forward);
    assert!(!controls.intents().reverse);
}
