//! Pluggable decisions.
//!
//! The game makes two choices without player input: which neighbor room comes
//! next, and which action an enemy takes. Both default to fixed, deterministic
//! picks; alternative policies can be swapped in without touching the engine.

use crate::combat::ActionMenu;
use crate::kinds::RoomKind;
use crate::state::Neighbors;

/// Chooses the kind of the next room from the current room's neighbor slots.
pub trait NeighborPolicy {
    fn choose_neighbor(&self, neighbors: &Neighbors) -> RoomKind;
}

/// Always takes neighbor slot 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstNeighbor;

impl NeighborPolicy for FirstNeighbor {
    fn choose_neighbor(&self, neighbors: &Neighbors) -> RoomKind {
        neighbors[0].clone()
    }
}

impl<F> NeighborPolicy for F
where
    F: Fn(&Neighbors) -> RoomKind,
{
    fn choose_neighbor(&self, neighbors: &Neighbors) -> RoomKind {
        self(neighbors)
    }
}

/// Chooses a 1-based entry of an enemy's action menu.
///
/// Returning `None`, or an index outside the menu, makes the enemy pass.
pub trait EnemyActionPolicy {
    fn choose_action(&self, menu: &ActionMenu) -> Option<usize>;
}

/// Always picks menu entry 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstAction;

impl EnemyActionPolicy for FirstAction {
    fn choose_action(&self, menu: &ActionMenu) -> Option<usize> {
        (!menu.is_empty()).then_some(1)
    }
}

impl<F> EnemyActionPolicy for F
where
    F: Fn(&ActionMenu) -> Option<usize>,
{
    fn choose_action(&self, menu: &ActionMenu) -> Option<usize> {
        self(menu)
    }
}
