//! Handler für Aufbau, Schritt und Reset der Animation.

use crate::app::{AppState, GesturePhase};
use anyhow::Context;

/// Baut Lattice und Kurve aus den aktuellen Ankern neu auf.
///
/// Bei weniger als 2 Ankern werden Lattice und Kurve geleert; Rückgabe `false`.
/// Die laufende Geste endet in jedem Fall.
pub fn rebuild(state: &mut AppState) -> anyhow::Result<bool> {
    state.gesture = GesturePhase::Idle;
    state.frame = 0;
    state.last_step = None;

    if !state.anchors.can_build_lattice() {
        state.lattice.clear();
        state.trace.clear();
        log::debug!("Lattice verworfen: {} Anker", state.anchors.len());
        return Ok(false);
    }

    state
        .lattice
        .rebuild(state.anchors.as_slice())
        .context("Lattice konnte nicht aufgebaut werden")?;

    if let Some(terminal) = state.lattice.terminal() {
        state
            .trace
            .reset(terminal.position())
            .context("Kurven-Array konnte nicht angelegt werden")?;
    }
    Ok(true)
}

/// Baut die Lattice aus den aktuellen Ankern und startet die Animation.
pub fn start(state: &mut AppState) -> anyhow::Result<()> {
    if !rebuild(state)? {
        log::warn!(
            "Animation nicht gestartet: mindestens 2 Anker benötigt, vorhanden: {}",
            state.anchors.len()
        );
        return Ok(());
    }

    state.gesture = if state.lattice.is_finished() {
        GesturePhase::Finished
    } else {
        GesturePhase::Animating
    };
    log::info!(
        "Animation gestartet: {} Anker, {} Nodes",
        state.lattice.order(),
        state.lattice.len()
    );
    Ok(())
}

/// Führt einen synchronisierten Engine-Schritt aus und verlängert die Kurve.
pub fn step(state: &mut AppState) -> anyhow::Result<()> {
    if !state.is_animating() {
        return Ok(());
    }

    let report = state.engine.advance(&mut state.lattice);
    state.frame += 1;
    state.last_step = Some(report);
    log::debug!(
        "Frame {}: norm={:.3}, bewegt={}, gesperrt={}",
        state.frame,
        report.normalization,
        report.moved,
        report.newly_locked
    );
    if report.degenerate > 0 {
        log::debug!("Frame {}: {} degenerierte Segmente gesperrt", state.frame, report.degenerate);
    }

    if report.finished {
        state.gesture = GesturePhase::Finished;
        log::info!(
            "Kurve fertig nach {} Frames, {} Kurvenpunkte",
            state.frame,
            state.trace.len()
        );
        return Ok(());
    }

    if let Some(terminal) = state.lattice.terminal() {
        state
            .trace
            .record(terminal.position())
            .context("Kurvenpunkt konnte nicht gespeichert werden")?;
    }
    Ok(())
}

/// Setzt die Geste auf den Ausgangszustand der aktuellen Anker zurück.
pub fn reset(state: &mut AppState) -> anyhow::Result<()> {
    rebuild(state)?;
    log::info!("Animation zurückgesetzt");
    Ok(())
}
