//! Handler für Anker-Bearbeitung.
//!
//! Jede Änderung beendet die laufende Geste und baut die Lattice im selben
//! Command neu auf, sodass nie ein Schritt auf einer veralteten Lattice läuft.

use super::animation;
use crate::app::AppState;
use anyhow::Context;
use glam::Vec2;

/// Hängt einen Anker an.
pub fn add(state: &mut AppState, position: Vec2) -> anyhow::Result<()> {
    if !position.is_finite() {
        log::warn!("Anker mit ungültiger Position verworfen: {}", position);
        return Ok(());
    }
    let index = state
        .anchors
        .add(position)
        .context("Anker konnte nicht hinzugefügt werden")?;
    log::debug!("Anker {} gesetzt bei {}", index, position);
    animation::rebuild(state)?;
    Ok(())
}

/// Entfernt den nächstgelegenen Anker im Radius. Kein Treffer: No-op.
pub fn remove_nearest(state: &mut AppState, position: Vec2, max_distance: f32) -> anyhow::Result<()> {
    let Some(index) = state.anchors.nearest(position, max_distance) else {
        log::debug!("Kein Anker innerhalb {} um {}", max_distance, position);
        return Ok(());
    };
    state.anchors.remove(index);
    log::debug!("Anker {} entfernt", index);
    animation::rebuild(state)?;
    Ok(())
}

/// Verschiebt einen Anker. Ungültiger Index: No-op.
pub fn move_anchor(state: &mut AppState, index: usize, position: Vec2) -> anyhow::Result<()> {
    if !position.is_finite() || !state.anchors.move_anchor(index, position) {
        return Ok(());
    }
    animation::rebuild(state)?;
    Ok(())
}

/// Entfernt den zuletzt gesetzten Anker.
pub fn remove_last(state: &mut AppState) -> anyhow::Result<()> {
    if state.anchors.remove_last().is_none() {
        return Ok(());
    }
    animation::rebuild(state)?;
    Ok(())
}

/// Entfernt alle Anker und verwirft Lattice und Kurve.
pub fn clear(state: &mut AppState) -> anyhow::Result<()> {
    state.anchors.clear();
    animation::rebuild(state)?;
    Ok(())
}
