//! Gameplay loop for the dungeon crawl.
//!
//! This crate drives [`game_core`] encounters round by round. Presentation and
//! input are collaborators supplied by the client:
//! - [`runtime`] hosts the loop controller and its builder
//! - [`api`] exposes the collaborator traits and error types
//! - [`view`] builds read-only snapshots for renderers
//! - [`status`] tracks the session status and the continue/quit decision
pub mod api;
pub mod runtime;
pub mod status;
pub mod view;

pub use api::{Component, PlayerInput, Renderer, Result, RuntimeError, ScriptedInput};
pub use runtime::{Runtime, RuntimeBuilder};
pub use status::{Decision, DecisionError, GameStatus};
pub use view::{ClearedView, EnemyView, GameView, PlayerView, RoomDetail, RoomView};
