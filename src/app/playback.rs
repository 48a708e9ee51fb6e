//! Wiedergabe einer Geste: Frame-Ticks bis zum Ende, je ein Render-Pass pro Frame.

use super::{build_frame_scene, AppController, AppIntent, AppState};
use crate::render::{render_frame, Renderer};

/// Ergebnis einer Wiedergabe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSummary {
    /// Ausgeführte Schritte
    pub frames: u64,
    /// True wenn der Terminal-Node gesperrt wurde
    pub finished: bool,
    /// Punkte der gezeichneten Kurve
    pub trace_points: usize,
}

/// Tickt die laufende Animation bis zum Ende oder bis `options.max_frames`.
///
/// Vor dem ersten Tick und nach jedem Tick wird ein Frame gerendert;
/// `on_frame` erhält die Frame-Nummer und den fertig gezeichneten Renderer.
pub fn play<R, F>(
    controller: &mut AppController,
    state: &mut AppState,
    renderer: &mut R,
    mut on_frame: F,
) -> anyhow::Result<PlaybackSummary>
where
    R: Renderer + ?Sized,
    F: FnMut(u64, &R) -> anyhow::Result<()>,
{
    let max_frames = state.options.max_frames;
    render_frame(renderer, &build_frame_scene(state));

    while state.is_animating() && state.frame < max_frames {
        controller.handle_intent(state, AppIntent::FrameTick)?;
        render_frame(renderer, &build_frame_scene(state));
        on_frame(state.frame, renderer)?;
    }

    if state.is_animating() {
        log::warn!(
            "Frame-Limit {} erreicht, Kurve unvollständig ({} Punkte)",
            max_frames,
            state.trace.len()
        );
    }

    Ok(PlaybackSummary {
        frames: state.frame,
        finished: state.is_finished(),
        trace_points: state.trace.len(),
    })
}
