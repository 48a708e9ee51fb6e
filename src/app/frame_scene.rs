//! Builder für Frame-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::FrameScene;

/// Baut eine FrameScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> FrameScene<'_> {
    FrameScene {
        anchors: state.anchors.as_slice(),
        lattice: &state.lattice,
        trace: &state.trace,
        options: &state.options,
        frame: state.frame,
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use glam::Vec2;

    #[test]
    fn build_borrows_current_session() {
        let mut state = AppState::new();
        state.anchors.add(Vec2::new(1.0, 1.0)).unwrap();
        state.frame = 7;

        let scene = build(&state);

        assert_eq!(scene.anchors, &[Vec2::new(1.0, 1.0)]);
        assert!(!scene.has_lattice());
        assert!(!scene.is_finished());
        assert_eq!(scene.frame, 7);
    }
}
