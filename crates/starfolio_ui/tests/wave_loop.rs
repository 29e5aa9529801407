//! # Wave Greeting Integration Test
//!
//! Runs the greeting tween on a manual frame host.

use std::cell::RefCell;
use std::rc::Rc;

use starfolio_shared::GreetingConfig;
use starfolio_ui::{rotation_at, AnimationTask, FrameTime, ManualFrames, WaveGreeting, WavePhase};

fn at(timestamp_ms: f64) -> FrameTime {
    FrameTime::new(timestamp_ms, 0.0)
}

/// Runs a fresh greeting over `timestamps`, returning the rotation after each frame.
fn run(timestamps: &[f64]) -> Vec<f64> {
    let host = ManualFrames::new();
    let greeting = Rc::new(RefCell::new(WaveGreeting::default()));
    let _task = AnimationTask::start(host.clone(), Rc::clone(&greeting)).unwrap();

    timestamps
        .iter()
        .map(|&ts| {
            host.fire(at(ts));
            greeting.borrow().rotation()
        })
        .collect()
}

/// Test: the gesture runs to completion and stops scheduling on its own.
#[test]
fn test_wave_runs_to_completion() {
    let host = ManualFrames::new();
    let greeting = Rc::new(RefCell::new(WaveGreeting::default()));
    let task = AnimationTask::start(host.clone(), Rc::clone(&greeting)).unwrap();

    let start = 1234.0;
    let mut ts = start;
    while host.fire(at(ts)) > 0 {
        let rotation = greeting.borrow().rotation();
        assert!((-15.0..=15.0).contains(&rotation), "{ts}: {rotation}");
        ts += 16.0;
    }

    assert!(task.is_finished());
    assert!(!task.is_scheduled());
    assert_eq!(greeting.borrow().phase(), WavePhase::Done);
    assert_eq!(greeting.borrow().rotation().to_bits(), 0.0_f64.to_bits());
    assert!(ts - start >= 3000.0);
}

/// Test: identical elapsed sequences give identical rotation sequences.
#[test]
fn test_wave_is_deterministic() {
    let elapsed: Vec<f64> = (0..200).map(|i| f64::from(i) * 16.7).collect();
    let from_zero: Vec<f64> = elapsed.clone();
    let from_later: Vec<f64> = elapsed.iter().map(|e| e + 98_765.4).collect();

    let a = run(&from_zero);
    let b = run(&from_zero);
    assert_eq!(a, b);

    let c = run(&from_later);
    for (x, y) in a.iter().zip(&c) {
        assert!((x - y).abs() < 1e-9, "{x} vs {y}");
    }

    let config = GreetingConfig::default();
    for (rotation, ms) in a.iter().zip(&elapsed) {
        assert!((rotation - rotation_at(*ms, &config)).abs() < 1e-12);
    }
}

/// Test: unmounting mid-gesture cancels the pending frame.
#[test]
fn test_unmount_mid_animation() {
    let host = ManualFrames::new();
    let greeting = Rc::new(RefCell::new(WaveGreeting::default()));
    let task = AnimationTask::start(host.clone(), Rc::clone(&greeting)).unwrap();

    host.fire(at(0.0));
    host.fire(at(500.0));
    let frozen = greeting.borrow().rotation();
    assert_eq!(host.pending(), 1);

    drop(task);

    assert_eq!(host.pending(), 0);
    assert_eq!(host.fire(at(1000.0)), 0);
    assert!(matches!(greeting.borrow().phase(), WavePhase::Running { .. }));
    assert_eq!(greeting.borrow().rotation().to_bits(), frozen.to_bits());
}
