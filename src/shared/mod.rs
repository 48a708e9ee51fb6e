//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod frame_scene;
pub mod options;

pub use frame_scene::FrameScene;
pub use options::AnimatorOptions;
