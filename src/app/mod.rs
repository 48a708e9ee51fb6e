//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod frame_scene;
pub mod handlers;
mod intent_mapping;
pub mod playback;
/// Application State
///
/// Explizites Sitzungsobjekt: Anker, Lattice, Kurve und Engine einer Geste.
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use frame_scene::build as build_frame_scene;
pub use playback::{play, PlaybackSummary};
pub use state::{AppState, GesturePhase};
