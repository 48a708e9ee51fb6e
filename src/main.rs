//! Bezier Lattice Animator.
//!
//! Setzt die konfigurierten Anker, spielt die Geste Frame für Frame ab und
//! schreibt den finalen Frame (optional auch Zwischenframes) als PNG.

use std::path::{Path, PathBuf};

use anyhow::Context;
use bezier_lattice_animator::{
    canvas_for, play, AnimatorOptions, AppController, AppIntent, AppState, PlaybackSummary,
};

fn main() -> anyhow::Result<()> {
    AnimationRunner::run()
}

struct AnimationRunner;

impl AnimationRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Bezier Lattice Animator v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (erstes Argument oder Datei neben der Binary)
        let config_path = std::env::args_os()
            .nth(1)
            .map(PathBuf::from)
            .unwrap_or_else(AnimatorOptions::config_path);
        let options = AnimatorOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(options)?;
        let mut controller = AppController::new();

        let result = Self::animate(&mut controller, &mut state);
        if let Err(e) = &result {
            log::error!("Animation fehlgeschlagen: {:#}", e);
        }

        controller.handle_intent(&mut state, AppIntent::ExitRequested)?;
        result.map(|_| ())
    }

    fn animate(
        controller: &mut AppController,
        state: &mut AppState,
    ) -> anyhow::Result<PlaybackSummary> {
        for position in state.options.initial_anchor_points() {
            controller.handle_intent(state, AppIntent::AnchorPlaced { position })?;
        }
        controller.handle_intent(state, AppIntent::AnimationStartRequested)?;

        let output_path = PathBuf::from(&state.options.output_path);
        let dump_interval = state.options.frame_dump_interval;
        let mut canvas = canvas_for(&state.options);

        let summary = play(controller, state, &mut canvas, |frame, canvas| {
            if dump_interval > 0 && frame % dump_interval == 0 {
                canvas.save_png(frame_dump_path(&output_path, frame))?;
            }
            Ok(())
        })?;

        canvas
            .save_png(&output_path)
            .with_context(|| format!("Finaler Frame nicht geschrieben: {}", output_path.display()))?;

        log::info!(
            "{} Frames ({} Schritte im Log), {} Kurvenpunkte, fertig: {} → {}",
            summary.frames,
            state.command_log.step_count(),
            summary.trace_points,
            summary.finished,
            output_path.display()
        );
        Ok(summary)
    }
}

/// `out/curve.png` + Frame 12 → `out/curve_0012.png`
fn frame_dump_path(output: &Path, frame: u64) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string());
    let extension = output
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "png".to_string());
    output.with_file_name(format!("{stem}_{frame:04}.{extension}"))
}
