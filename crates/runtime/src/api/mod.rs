//! Public runtime API surface.
//!
//! This module gathers the collaborator traits and error types exposed to
//! consumers of the runtime crate.

pub mod errors;
pub mod providers;
pub mod renderer;

pub use errors::{Component, Result, RuntimeError};
pub use providers::{PlayerInput, ScriptedInput};
pub use renderer::Renderer;
