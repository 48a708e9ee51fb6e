//! Bezier Lattice Animator Library.
//! Sitzungslogik, Render-Pass und Optionen als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod render;
pub mod shared;

pub use app::{
    build_frame_scene, play, AppCommand, AppController, AppIntent, AppState, GesturePhase,
    PlaybackSummary,
};
pub use bezier_lattice_engine::{
    AnchorSet, CapacityPolicy, CurveTrace, Lattice, LatticeError, Node, NodeId, Point, StepReport,
    UpdateEngine,
};
pub use render::{canvas_for, render_frame, Renderer};
pub use shared::{AnimatorOptions, FrameScene};
