//! End-to-end scenarios: configuration files, seeding, and cycle detection.

use std::io::Write;

use life_ca::{
    ConfigError, CycleDetector, Model, ModelError, Pattern, Seed, SimulationConfig, Terrain,
};

fn write_config(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn live_cells(terrain: &Terrain) -> Vec<(usize, usize)> {
    (0..terrain.height())
        .flat_map(|y| (0..terrain.width()).map(move |x| (x, y)))
        .filter(|&(x, y)| terrain.is_alive(x, y))
        .collect()
}

#[test]
fn test_blinker_from_config_file() {
    let file = write_config(
        r#"{
            "width": 5,
            "height": 5,
            "rule": {"type": "Conway"},
            "seed": {"pattern": {"type": "Custom", "cells": [[1, 2, 1], [2, 2, 1], [3, 2, 1]]}}
        }"#,
    );

    let config = SimulationConfig::from_json_file(file.path()).unwrap();
    let mut model = config.build().unwrap();
    assert_eq!(model.generation(), 0);

    model.advance();
    let terrain = model.terrain();
    assert_eq!(live_cells(&terrain), vec![(2, 1), (2, 2), (2, 3)]);
    assert_eq!(terrain.get(2, 1), Some(1));
    assert_eq!(terrain.get(2, 3), Some(1));
    assert_eq!(terrain.to_string(), ".....\n..#..\n..#..\n..#..\n.....\n");
}

#[test]
fn test_config_round_trip_through_file() {
    let config = SimulationConfig {
        width: 20,
        height: 10,
        density: 0.25,
        seed: Seed {
            pattern: Pattern::Random {
                density: None,
                seed: Some(11),
            },
        },
        ..Default::default()
    };
    let file = write_config(&serde_json::to_string_pretty(&config).unwrap());

    let loaded = SimulationConfig::from_json_file(file.path()).unwrap();
    assert_eq!(loaded.width, 20);
    assert_eq!(loaded.height, 10);

    let mut a = config.build().unwrap();
    let mut b = loaded.build().unwrap();
    a.run(5);
    b.run(5);
    assert_eq!(a.terrain(), b.terrain());
    assert_eq!(a.checksum(), b.checksum());
}

#[test]
fn test_missing_and_malformed_config() {
    let dir = tempfile::tempdir().unwrap();
    let missing = SimulationConfig::from_json_file(dir.path().join("nope.json"));
    assert!(matches!(missing, Err(ConfigError::Io(_))));

    let file = write_config("{ not json");
    assert!(matches!(
        SimulationConfig::from_json_file(file.path()),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_invalid_config_file_rejected_on_build() {
    let file = write_config(r#"{"width": 0, "height": 5}"#);
    let config = SimulationConfig::from_json_file(file.path()).unwrap();
    assert!(matches!(config.build(), Err(ConfigError::InvalidDimensions)));
}

#[test]
fn test_full_grid_dies_off() {
    let mut model = Model::with_size(4, 4).unwrap();
    model.populate(1.0).unwrap();
    model.advance();
    assert!(live_cells(&model.terrain()).is_empty());
    assert_eq!(model.generation(), 1);
}

#[test]
fn test_empty_grid_stays_empty() {
    let mut model = Model::with_size(9, 7).unwrap();
    model.populate(0.0).unwrap();
    let checksum = model.checksum();
    for generation in 1..=20 {
        model.advance();
        assert_eq!(model.generation(), generation);
        assert_eq!(model.checksum(), checksum);
    }
    assert!(live_cells(&model.terrain()).is_empty());
}

#[test]
fn test_direct_edit_invalidates_checksum() {
    let mut model = Model::with_size(16, 16).unwrap();
    model.populate(0.5).unwrap();
    let before = model.checksum();

    let alive = model.is_alive(3, 7).unwrap();
    model.set_alive(3, 7, !alive).unwrap();
    let after = model.checksum();
    assert_ne!(after, before);
    assert_eq!(after, model.terrain().checksum());
}

#[test]
fn test_out_of_range_edit_is_an_error() {
    let mut model = Model::with_size(5, 4).unwrap();
    let err = model.set_cell(5, 0).unwrap_err();
    assert_eq!(
        err,
        ModelError::OutOfRange {
            x: 5,
            y: 0,
            width: 5,
            height: 4
        }
    );
    assert_eq!(err.to_string(), "Cell (5, 0) is outside the 5x4 grid");
}

#[test]
fn test_block_is_still_life_once_saturated() {
    let mut model = Model::with_size(8, 8).unwrap();
    for (x, y) in [(3, 3), (4, 3), (3, 4), (4, 4)] {
        model.set_cell(x, y).unwrap();
    }
    let mut detector = CycleDetector::new(8).unwrap();
    detector.observe(model.generation(), model.checksum());

    let mut found = None;
    for _ in 0..200 {
        model.advance();
        if let Some(cycle) = detector.observe(model.generation(), model.checksum()) {
            found = Some(cycle);
            break;
        }
    }

    // Ages climb to 127 at generation 126; the next generation repeats it.
    let cycle = found.unwrap();
    assert_eq!(cycle.period, 1);
    assert_eq!(cycle.first_seen, 126);
    assert_eq!(model.age(3, 3).unwrap(), 127);
}

#[test]
fn test_shared_model_behind_mutex() {
    use std::sync::{Arc, Mutex};
    use std::thread;

    let model = Arc::new(Mutex::new(Model::with_size(32, 32).unwrap()));
    model.lock().unwrap().populate(0.4).unwrap();

    let worker = {
        let model = Arc::clone(&model);
        thread::spawn(move || {
            for _ in 0..50 {
                model.lock().unwrap().advance();
            }
        })
    };

    for _ in 0..50 {
        let mut guard = model.lock().unwrap();
        let terrain = guard.terrain();
        let checksum = guard.checksum();
        drop(guard);
        assert_eq!(terrain.checksum(), checksum);
    }

    worker.join().unwrap();
    assert_eq!(model.lock().unwrap().generation(), 50);
}
