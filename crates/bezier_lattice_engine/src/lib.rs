//! `bezier_lattice_engine`: Dreiecks-Lattice und Update-Engine für animierte Bézier-Kurven.
//!
//! Die Kurve wird nicht parametrisch ausgewertet. Stattdessen wandert jeder
//! Zwischenpunkt pro Schritt mit konstanter, synchronisierter Geschwindigkeit
//! auf seinen zweiten Elternpunkt zu; die Spur des Terminal-Nodes ergibt die Kurve.
//!
//! # Beispiel
//! ```
//! use bezier_lattice_engine::{CapacityPolicy, Lattice, Point, UpdateEngine};
//!
//! let anchors = [Point::new(0.0, 0.0), Point::new(50.0, 80.0), Point::new(100.0, 0.0)];
//! let mut lattice = Lattice::build(&anchors, CapacityPolicy::default())?;
//! let mut engine = UpdateEngine::default();
//! while !lattice.is_finished() {
//!     engine.advance(&mut lattice);
//! }
//! # Ok::<(), bezier_lattice_engine::LatticeError>(())
//! ```

pub mod anchors;
pub mod capacity;
pub mod engine;
pub mod error;
pub mod lattice;
pub mod node;
pub mod trace;

pub use anchors::AnchorSet;
pub use capacity::{CapacityPolicy, PolicyVec};
pub use engine::{StepReport, UpdateEngine, DEFAULT_LOCK_EPSILON};
pub use error::{CapacityError, LatticeError};
pub use lattice::{row_offset, triangle_number, Lattice};
pub use node::{derive_segment, Direction, LineEquation, Node, NodeId};
pub use trace::CurveTrace;

/// 2D-Punkt der Engine (Bildschirm-Koordinaten, y nach unten).
pub type Point = glam::Vec2;
