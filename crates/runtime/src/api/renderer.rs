//! Presentation seam.
use game_core::ActionOutcome;

use super::errors::Result;
use crate::status::GameStatus;
use crate::view::{ClearedView, GameView};

/// Receives everything the player should see, in order.
pub trait Renderer {
    /// Current state at the start of a round.
    fn render_state(&mut self, view: &GameView) -> Result<()>;

    /// Result of one action by either side.
    fn render_outcome(&mut self, outcome: &ActionOutcome) -> Result<()>;

    /// An answer was rejected; the same prompt follows.
    fn render_rejection(&mut self, reason: &str) -> Result<()>;

    /// The room was just cleared. Rewards are about to be handed out.
    fn render_cleared(&mut self, view: &ClearedView) -> Result<()>;

    /// The loop ended.
    fn render_status(&mut self, status: GameStatus) -> Result<()>;
}
