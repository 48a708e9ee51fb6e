//! Handler für Options-Änderungen zur Laufzeit.

use super::animation;
use crate::app::AppState;
use crate::shared::AnimatorOptions;
use anyhow::Context;
use bezier_lattice_engine::{AnchorSet, CurveTrace, Lattice};

/// Übernimmt neue Optionen. Ungültige Optionen lassen den State unverändert.
///
/// Eine geänderte Kapazitäts-Politik legt alle drei Arrays neu an und beendet
/// die laufende Geste.
pub fn apply(state: &mut AppState, options: AnimatorOptions) -> anyhow::Result<()> {
    if let Err(e) = options.validate() {
        log::warn!("Optionen abgelehnt: {:#}", e);
        return Err(e.context("Optionen ungültig"));
    }

    state
        .engine
        .set_lock_epsilon(options.lock_epsilon)
        .context("Lock-Epsilon ungültig")?;

    let policy_changed = options.capacity != state.options.capacity;
    state.options = options;

    if policy_changed {
        let policy = state.options.capacity;
        state.anchors = AnchorSet::from_points(state.anchors.as_slice(), policy)
            .context("Anker konnten nicht übernommen werden")?;
        state.lattice = Lattice::new(policy);
        state.trace = CurveTrace::new(policy);
        animation::rebuild(state)?;
        log::info!("Kapazitäts-Politik geändert, Lattice neu aufgebaut");
    }
    Ok(())
}
