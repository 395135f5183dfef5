//! Earth Defender session layer.
//!
//! Wires the headless simulation engine to its collaborators: a frame
//! scheduler driving ticks, a presentation surface, an optional network
//! transport, and the fixed keyboard bindings.

pub mod collaborators;
pub mod input;
pub mod scheduler;
pub mod session;

pub use defender_core as core;
pub use session::{Session, SessionConfig, SessionError};
