use bezier_lattice_animator::{
    canvas_for, play, AnimatorOptions, AppController, AppIntent, AppState, Renderer,
};
use glam::Vec2;

/// Zählt Zeichenaufrufe des zuletzt gerenderten Frames.
#[derive(Default)]
struct CountingRenderer {
    frames: usize,
    lines: usize,
    dots: usize,
    pixels: usize,
}

impl Renderer for CountingRenderer {
    fn clear(&mut self, _color: [f32; 4]) {
        self.frames += 1;
        self.lines = 0;
        self.dots = 0;
        self.pixels = 0;
    }

    fn draw_dot(&mut self, _center: Vec2, _size: u32, _color: [f32; 4]) {
        self.dots += 1;
    }

    fn draw_line(&mut self, _start: Vec2, _end: Vec2, _color: [f32; 4]) {
        self.lines += 1;
    }

    fn draw_pixel(&mut self, _point: Vec2, _color: [f32; 4]) {
        self.pixels += 1;
    }
}

fn started_state(options: AnimatorOptions) -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::with_options(options).expect("Optionen sollten gültig sein");
    for position in state.options.initial_anchor_points() {
        controller
            .handle_intent(&mut state, AppIntent::AnchorPlaced { position })
            .expect("AnchorPlaced sollte ohne Fehler durchlaufen");
    }
    controller
        .handle_intent(&mut state, AppIntent::AnimationStartRequested)
        .expect("Start sollte ohne Fehler durchlaufen");
    (controller, state)
}

#[test]
fn test_play_renders_every_frame_until_finished() {
    let (mut controller, mut state) = started_state(AnimatorOptions::default());
    let mut renderer = CountingRenderer::default();
    let mut seen = Vec::new();

    let summary = play(&mut controller, &mut state, &mut renderer, |frame, r| {
        seen.push((frame, r.lines));
        Ok(())
    })
    .expect("Wiedergabe sollte ohne Fehler durchlaufen");

    assert!(summary.finished);
    assert_eq!(summary.frames, state.frame);
    assert_eq!(summary.trace_points, state.trace.len());
    // Startbild + ein Bild pro Frame
    assert_eq!(renderer.frames as u64, summary.frames + 1);
    assert_eq!(seen.len() as u64, summary.frames);
    assert_eq!(seen.first(), Some(&(1, 6)));
    // Im finalen Bild keine Kanten mehr
    assert_eq!(seen.last().map(|&(_, lines)| lines), Some(0));
    assert_eq!(renderer.dots, 10);
    assert_eq!(renderer.pixels, summary.trace_points);
}

#[test]
fn test_play_stops_at_frame_limit() {
    let options = AnimatorOptions {
        max_frames: 25,
        ..AnimatorOptions::default()
    };
    let (mut controller, mut state) = started_state(options);
    let mut renderer = CountingRenderer::default();

    let summary = play(&mut controller, &mut state, &mut renderer, |_, _| Ok(()))
        .expect("Wiedergabe sollte ohne Fehler durchlaufen");

    assert_eq!(summary.frames, 25);
    assert!(!summary.finished);
    assert!(state.is_animating());
    assert_eq!(summary.trace_points, 26);
}

#[test]
fn test_play_propagates_frame_callback_error() {
    let (mut controller, mut state) = started_state(AnimatorOptions::default());
    let mut renderer = CountingRenderer::default();

    let result = play(&mut controller, &mut state, &mut renderer, |frame, _| {
        if frame == 3 {
            anyhow::bail!("Ausgabe voll");
        }
        Ok(())
    });

    assert!(result.is_err());
    assert_eq!(state.frame, 3);
}

#[test]
fn test_play_without_animation_renders_once() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut renderer = CountingRenderer::default();

    let summary = play(&mut controller, &mut state, &mut renderer, |_, _| Ok(()))
        .expect("Wiedergabe sollte ohne Fehler durchlaufen");

    assert_eq!(summary.frames, 0);
    assert_eq!(renderer.frames, 1);
}

#[test]
fn test_final_frame_written_as_png() {
    let (mut controller, mut state) = started_state(AnimatorOptions::default());
    let mut canvas = canvas_for(&state.options);

    play(&mut controller, &mut state, &mut canvas, |_, _| Ok(()))
        .expect("Wiedergabe sollte ohne Fehler durchlaufen");

    let path = std::env::temp_dir()
        .join("bezier_lattice_animator_tests")
        .join("final_frame.png");
    canvas.save_png(&path).expect("PNG sollte schreibbar sein");

    let written = std::fs::metadata(&path).expect("PNG sollte existieren");
    assert!(written.len() > 0);
    assert_eq!((canvas.width(), canvas.height()), (200, 200));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_play_finishes_with_small_lock_epsilon() {
    let options = AnimatorOptions {
        lock_epsilon: 0.25,
        ..AnimatorOptions::default()
    };
    let (mut controller, mut state) = started_state(options);
    let mut renderer = CountingRenderer::default();

    let summary = play(&mut controller, &mut state, &mut renderer, |_, _| Ok(()))
        .expect("Wiedergabe sollte ohne Fehler durchlaufen");

    assert!(summary.finished);
    assert!(summary.frames < 1000, "frames: {}", summary.frames);
    let last = state.trace.last().expect("Kurve sollte Punkte enthalten");
    assert!(last.distance(Vec2::new(190.0, 100.0)) < 5.0);
}
