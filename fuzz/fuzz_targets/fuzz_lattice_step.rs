#![no_main]

use bezier_lattice_engine::{CapacityPolicy, Lattice, UpdateEngine};
use glam::Vec2;
use libfuzzer_sys::fuzz_target;

/// Obergrenze für Schritte; die Kurve muss vorher fertig sein.
const MAX_STEPS: usize = 10_000;

fuzz_target!(|data: &[u8]| {
    // Erstes Byte wählt die Lock-Schwelle, danach je 2 Bytes ein Anker auf
    // einer 256x256-Fläche, höchstens 8 Anker
    let Some((&epsilon_byte, coordinates)) = data.split_first() else {
        return;
    };
    let epsilon = [0.99, 0.5, 0.25][usize::from(epsilon_byte) % 3];
    let anchors: Vec<Vec2> = coordinates
        .chunks_exact(2)
        .take(8)
        .map(|c| Vec2::new(f32::from(c[0]), f32::from(c[1])))
        .collect();

    let Ok(mut lattice) = Lattice::build(&anchors, CapacityPolicy::default()) else {
        return;
    };
    let Ok(mut engine) = UpdateEngine::new(epsilon) else {
        return;
    };
    let mut steps = 0;
    while !lattice.is_finished() && steps < MAX_STEPS {
        engine.advance(&mut lattice);
        steps += 1;
    }

    assert!(
        lattice.is_finished(),
        "{:?} eps={} nach {} Schritten nicht fertig",
        anchors,
        epsilon,
        steps
    );
    for node in lattice.nodes() {
        assert!(node.position().is_finite());
    }
});
