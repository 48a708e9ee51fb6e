//! Zentrale Konfiguration für den Bezier Lattice Animator.
//!
//! `AnimatorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::{bail, ensure, Context};
use bezier_lattice_engine::{CapacityPolicy, DEFAULT_LOCK_EPSILON};
use glam::Vec2;
use serde::{Deserialize, Serialize};

// ── Zeichenfläche ───────────────────────────────────────────────────

/// Standard-Breite der Zeichenfläche in Pixeln.
pub const SURFACE_WIDTH: u32 = 200;
/// Standard-Höhe der Zeichenfläche in Pixeln.
pub const SURFACE_HEIGHT: u32 = 200;
/// Obergrenze der Zeichenfläche pro Achse.
pub const SURFACE_MAX_EXTENT: u32 = 16_384;

// ── Farben ──────────────────────────────────────────────────────────

/// Hintergrund (RGBA: Schwarz).
pub const BACKGROUND_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Kanten zwischen benachbarten Lattice-Nodes (RGBA: Weiß).
pub const EDGE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Lattice-Nodes (RGBA: Hellblau).
pub const DOT_COLOR: [f32; 4] = [0.0, 0.667, 1.0, 1.0];
/// Gezeichnete Kurve (RGBA: Rot).
pub const TRACE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

// ── Darstellung & Eingabe ───────────────────────────────────────────

/// Kantenlänge der Node-Punkte in Pixeln.
pub const DOT_SIZE: u32 = 5;
/// Radius, in dem ein Klick einen Anker trifft.
pub const PICK_RADIUS: f32 = 6.0;

// ── Animation ───────────────────────────────────────────────────────

/// Harte Obergrenze an Frames pro Geste.
pub const MAX_FRAMES: u64 = 10_000;
/// Standard-Ausgabedatei des finalen Frames.
pub const OUTPUT_PATH: &str = "bezier_curve.png";

/// Anker der Demo-Kurve (kubisch, vier Punkte).
pub const DEMO_ANCHORS: [[f32; 2]; 4] = [[10.0, 100.0], [70.0, 50.0], [130.0, 150.0], [190.0, 100.0]];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Animator-Optionen.
/// Wird als `bezier_lattice_animator.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimatorOptions {
    // ── Fläche ──────────────────────────────────────────────────
    /// Breite der Zeichenfläche in Pixeln
    pub surface_width: u32,
    /// Höhe der Zeichenfläche in Pixeln
    pub surface_height: u32,

    // ── Farben ──────────────────────────────────────────────────
    /// Hintergrundfarbe
    pub background_color: [f32; 4],
    /// Farbe der Lattice-Kanten
    pub edge_color: [f32; 4],
    /// Farbe der Lattice-Nodes
    pub dot_color: [f32; 4],
    /// Farbe der Kurve
    pub trace_color: [f32; 4],
    /// Node-Punktgröße (gerade Werte werden aufgerundet)
    pub dot_size: u32,

    // ── Animation ───────────────────────────────────────────────
    /// Distanz, ab der ein Node als angekommen gilt
    pub lock_epsilon: f32,
    /// Maximale Anzahl Frames pro Geste
    pub max_frames: u64,
    /// Jeden n-ten Frame zusätzlich als PNG ablegen (0 = nur finaler Frame)
    pub frame_dump_interval: u64,
    /// Ausgabepfad des finalen Frames
    pub output_path: String,

    // ── Eingabe ─────────────────────────────────────────────────
    /// Pick-Radius für Anker-Entfernen
    pub pick_radius: f32,
    /// Anker, die der Runner beim Start setzt
    pub initial_anchors: Vec<[f32; 2]>,

    // ── Kapazität ───────────────────────────────────────────────
    /// Wachstums-/Schrumpf-Politik der Anker-, Node- und Kurven-Arrays
    pub capacity: CapacityPolicy,
}

impl Default for AnimatorOptions {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,

            background_color: BACKGROUND_COLOR,
            edge_color: EDGE_COLOR,
            dot_color: DOT_COLOR,
            trace_color: TRACE_COLOR,
            dot_size: DOT_SIZE,

            lock_epsilon: DEFAULT_LOCK_EPSILON,
            max_frames: MAX_FRAMES,
            frame_dump_interval: 0,
            output_path: OUTPUT_PATH.to_string(),

            pick_radius: PICK_RADIUS,
            initial_anchors: DEMO_ANCHORS.to_vec(),

            capacity: CapacityPolicy::default(),
        }
    }
}

impl AnimatorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => match opts.validate() {
                    Ok(()) => {
                        log::info!("Optionen geladen aus: {}", path.display());
                        opts
                    }
                    Err(e) => {
                        log::warn!("Optionen ungültig, verwende Standardwerte: {:#}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen konnten nicht nach {} geschrieben werden", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier-lattice-animator"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_lattice_animator.toml")
    }

    /// Prüft alle Werte, die Engine oder Zeichenfläche nicht verarbeiten können.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.lock_epsilon.is_finite() || self.lock_epsilon <= 0.0 {
            bail!("lock_epsilon muss endlich und positiv sein, ist {}", self.lock_epsilon);
        }
        self.capacity
            .validate()
            .context("Kapazitäts-Politik ungültig")?;
        ensure!(
            (1..=SURFACE_MAX_EXTENT).contains(&self.surface_width)
                && (1..=SURFACE_MAX_EXTENT).contains(&self.surface_height),
            "Zeichenfläche {}x{} außerhalb von 1..={}",
            self.surface_width,
            self.surface_height,
            SURFACE_MAX_EXTENT
        );
        ensure!(
            self.pick_radius.is_finite() && self.pick_radius >= 0.0,
            "pick_radius muss endlich und nicht negativ sein"
        );
        ensure!(
            self.initial_anchors
                .iter()
                .all(|[x, y]| x.is_finite() && y.is_finite()),
            "initial_anchors enthält nicht-endliche Koordinaten"
        );
        Ok(())
    }

    /// Start-Anker als Punkte.
    pub fn initial_anchor_points(&self) -> Vec<Vec2> {
        self.initial_anchors.iter().map(|&p| Vec2::from(p)).collect()
    }
}
