use super::{render_frame, Renderer};
use crate::app::{build_frame_scene, AppState};
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Call {
    Clear,
    Dot(Vec2),
    Line(Vec2, Vec2),
    Pixel(Vec2),
}

#[derive(Default)]
struct RecordingRenderer {
    calls: Vec<Call>,
}

impl RecordingRenderer {
    fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }

    fn lines(&self) -> usize {
        self.count(|c| matches!(c, Call::Line(..)))
    }

    fn dots(&self) -> usize {
        self.count(|c| matches!(c, Call::Dot(_)))
    }

    fn pixels(&self) -> usize {
        self.count(|c| matches!(c, Call::Pixel(_)))
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self, _color: [f32; 4]) {
        self.calls.push(Call::Clear);
    }

    fn draw_dot(&mut self, center: Vec2, _size: u32, _color: [f32; 4]) {
        self.calls.push(Call::Dot(center));
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2, _color: [f32; 4]) {
        self.calls.push(Call::Line(start, end));
    }

    fn draw_pixel(&mut self, point: Vec2, _color: [f32; 4]) {
        self.calls.push(Call::Pixel(point));
    }
}

fn demo_state() -> AppState {
    let mut state = AppState::new();
    for point in state.options.initial_anchor_points() {
        state.anchors.add(point).unwrap();
    }
    state.lattice.rebuild(state.anchors.as_slice()).unwrap();
    let seed = state.lattice.terminal().unwrap().position();
    state.trace.reset(seed).unwrap();
    state
}

#[test]
fn test_initial_frame_draws_edges_nodes_and_seed() {
    let state = demo_state();
    let mut renderer = RecordingRenderer::default();

    render_frame(&mut renderer, &build_frame_scene(&state));

    assert_eq!(renderer.calls.first(), Some(&Call::Clear));
    // Reihen mit 4, 3, 2, 1 Nodes → 3 + 2 + 1 Kanten
    assert_eq!(renderer.lines(), 6);
    assert_eq!(renderer.dots(), 10);
    assert_eq!(renderer.pixels(), 1);
    assert_eq!(
        renderer.calls.get(1),
        Some(&Call::Line(Vec2::new(10.0, 100.0), Vec2::new(70.0, 50.0)))
    );
}

#[test]
fn test_edges_precede_dots_and_dots_precede_trace() {
    let state = demo_state();
    let mut renderer = RecordingRenderer::default();

    render_frame(&mut renderer, &build_frame_scene(&state));

    let last_line = renderer
        .calls
        .iter()
        .rposition(|c| matches!(c, Call::Line(..)))
        .unwrap();
    let first_dot = renderer
        .calls
        .iter()
        .position(|c| matches!(c, Call::Dot(_)))
        .unwrap();
    let last_dot = renderer
        .calls
        .iter()
        .rposition(|c| matches!(c, Call::Dot(_)))
        .unwrap();
    let first_pixel = renderer
        .calls
        .iter()
        .position(|c| matches!(c, Call::Pixel(_)))
        .unwrap();
    assert!(last_line < first_dot);
    assert!(last_dot < first_pixel);
}

#[test]
fn test_finished_frame_hides_edges() {
    let mut state = demo_state();
    while !state.lattice.is_finished() {
        state.engine.advance(&mut state.lattice);
        if let Some(terminal) = state.lattice.terminal() {
            let position = terminal.position();
            state.trace.record(position).unwrap();
        }
    }
    let mut renderer = RecordingRenderer::default();

    render_frame(&mut renderer, &build_frame_scene(&state));

    assert_eq!(renderer.lines(), 0);
    assert_eq!(renderer.dots(), 10);
    assert_eq!(renderer.pixels(), state.trace.len());
}

#[test]
fn test_without_lattice_only_anchor_dots() {
    let mut state = AppState::new();
    state.anchors.add(Vec2::new(42.0, 17.0)).unwrap();
    let mut renderer = RecordingRenderer::default();

    render_frame(&mut renderer, &build_frame_scene(&state));

    assert_eq!(
        renderer.calls,
        vec![Call::Clear, Call::Dot(Vec2::new(42.0, 17.0))]
    );
}

#[test]
fn test_empty_session_only_clears() {
    let state = AppState::new();
    let mut renderer = RecordingRenderer::default();

    render_frame(&mut renderer, &build_frame_scene(&state));

    assert_eq!(renderer.calls, vec![Call::Clear]);
}
