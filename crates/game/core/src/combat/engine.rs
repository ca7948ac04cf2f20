//! Turn-based encounter state machine.
//!
//! ```text
//! AwaitingPlayerAction -> ResolvingPlayerAction -> Cleared
//!                                               -> AwaitingEnemyAction
//! AwaitingEnemyAction  -> ResolvingEnemyAction  -> PlayerDefeated
//!                                               -> AwaitingPlayerAction
//! ```
//!
//! The enemy never acts once the player's action has brought its hp to zero.

use crate::combat::{
    ActionEffect, ActionMenu, ActionOutcome, ActionSlot, CombatError, RoundReport,
};
use crate::policy::EnemyActionPolicy;
use crate::state::{Actor, Combatant, Enemy, Item, Player};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum CombatPhase {
    AwaitingPlayerAction,
    ResolvingPlayerAction,
    AwaitingEnemyAction,
    ResolvingEnemyAction,
    /// The enemy is defeated. Terminal.
    Cleared,
    /// The player is defeated. Terminal.
    PlayerDefeated,
}

impl CombatPhase {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Cleared | Self::PlayerDefeated)
    }
}

/// Resolves actions between the player and one enemy.
///
/// The engine borrows both participants for the duration of an encounter
/// step; all hp and inventory changes are applied to them directly.
pub struct CombatEngine<'a> {
    player: &'a mut Player,
    enemy: &'a mut Enemy,
    phase: CombatPhase,
}

impl<'a> CombatEngine<'a> {
    pub fn new(player: &'a mut Player, enemy: &'a mut Enemy) -> Self {
        let phase = if enemy.actor().is_defeated() {
            CombatPhase::Cleared
        } else if player.actor().is_defeated() {
            CombatPhase::PlayerDefeated
        } else {
            CombatPhase::AwaitingPlayerAction
        };

        Self {
            player,
            enemy,
            phase,
        }
    }

    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    pub fn player_menu(&self) -> ActionMenu {
        ActionMenu::from_inventory(self.player.actor().inventory())
    }

    pub fn enemy_menu(&self) -> ActionMenu {
        ActionMenu::from_inventory(self.enemy.actor().inventory())
    }

    /// Uses the item in `slot` of the player's inventory.
    ///
    /// Weapons hit the enemy, buffs apply to the player.
    pub fn resolve_player_action(&mut self, slot: ActionSlot) -> Result<ActionOutcome, CombatError> {
        self.expect_phase(CombatPhase::AwaitingPlayerAction)?;
        self.phase = CombatPhase::ResolvingPlayerAction;

        match perform(self.player.actor_mut(), self.enemy.actor_mut(), slot) {
            Ok(outcome) => {
                self.phase = if self.enemy.actor().is_defeated() {
                    CombatPhase::Cleared
                } else {
                    CombatPhase::AwaitingEnemyAction
                };
                Ok(outcome)
            }
            Err(err) => {
                self.phase = CombatPhase::AwaitingPlayerAction;
                Err(err)
            }
        }
    }

    /// Hands the turn to the enemy without acting. Used when the player has
    /// nothing to act with.
    pub fn pass_player_turn(&mut self) -> Result<(), CombatError> {
        self.expect_phase(CombatPhase::AwaitingPlayerAction)?;
        self.phase = CombatPhase::AwaitingEnemyAction;
        Ok(())
    }

    /// Lets the enemy act with the menu entry `policy` picks.
    ///
    /// Weapons hit the player, buffs apply to the enemy. Returns `None` when
    /// the policy passes.
    pub fn resolve_enemy_action(
        &mut self,
        policy: &dyn EnemyActionPolicy,
    ) -> Result<Option<ActionOutcome>, CombatError> {
        self.expect_phase(CombatPhase::AwaitingEnemyAction)?;
        self.phase = CombatPhase::ResolvingEnemyAction;

        let menu = self.enemy_menu();
        let slot = policy
            .choose_action(&menu)
            .and_then(|index| menu.select(index).ok());

        let outcome = match slot {
            Some(slot) => match perform(self.enemy.actor_mut(), self.player.actor_mut(), slot) {
                Ok(outcome) => Some(outcome),
                Err(err) => {
                    self.phase = CombatPhase::AwaitingEnemyAction;
                    return Err(err);
                }
            },
            None => None,
        };

        self.phase = if self.player.actor().is_defeated() {
            CombatPhase::PlayerDefeated
        } else {
            CombatPhase::AwaitingPlayerAction
        };
        Ok(outcome)
    }

    /// Runs a full round: the player's action, then the enemy's if it survived.
    pub fn play_round(
        &mut self,
        slot: ActionSlot,
        policy: &dyn EnemyActionPolicy,
    ) -> Result<RoundReport, CombatError> {
        let player = self.resolve_player_action(slot)?;
        let enemy = if self.phase == CombatPhase::AwaitingEnemyAction {
            self.resolve_enemy_action(policy)?
        } else {
            None
        };

        Ok(RoundReport {
            player: Some(player),
            enemy,
            phase: self.phase,
        })
    }

    fn expect_phase(&self, expected: CombatPhase) -> Result<(), CombatError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(CombatError::PhaseMismatch {
                expected,
                actual: self.phase,
            })
        }
    }
}

/// Applies the item in `slot` of `user`'s inventory, then drops it if single-use.
fn perform(
    user: &mut Actor,
    opponent: &mut Actor,
    slot: ActionSlot,
) -> Result<ActionOutcome, CombatError> {
    match slot {
        ActionSlot::Weapon(position) => {
            let weapon = user
                .inventory()
                .weapons()
                .get(position)
                .cloned()
                .ok_or(CombatError::EmptySlot { slot })?;

            let amount = weapon.apply_damage(user, opponent);
            let consumed = weapon.is_single_use()
                && user
                    .inventory_mut()
                    .remove(weapon.category(), weapon.kind(), weapon.name());

            Ok(ActionOutcome {
                actor: user.name().to_owned(),
                label: weapon.action_label(),
                effect: ActionEffect::Damage {
                    target: opponent.name().to_owned(),
                    amount,
                    remaining_hp: opponent.hp(),
                },
                consumed,
            })
        }
        ActionSlot::Buff(position) => {
            let buff = user
                .inventory()
                .buffs()
                .get(position)
                .cloned()
                .ok_or(CombatError::EmptySlot { slot })?;

            let amount = buff.apply_buff(user);
            let consumed = buff.is_single_use()
                && user
                    .inventory_mut()
                    .remove(buff.category(), buff.kind(), buff.name());

            Ok(ActionOutcome {
                actor: user.name().to_owned(),
                label: buff.action_label(),
                effect: ActionEffect::Buff {
                    verb: buff.verb().to_owned(),
                    target: user.name().to_owned(),
                    amount,
                    resulting_hp: user.hp(),
                },
                consumed,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::Factories;
    use crate::kinds::{EnemyKind, ItemKind};
    use crate::policy::FirstAction;

    fn encounter() -> (Player, Enemy) {
        let factories = Factories::standard();
        (
            factories.create_player(),
            factories.create_enemy(&EnemyKind::Goblin),
        )
    }

    #[test]
    fn player_attack_then_goblin_attack() {
        let (mut player, mut goblin) = encounter();
        let mut engine = CombatEngine::new(&mut player, &mut goblin);

        let report = engine.play_round(ActionSlot::Weapon(0), &FirstAction).unwrap();
        assert_eq!(report.phase, CombatPhase::AwaitingPlayerAction);
        assert_eq!(
            report.player.unwrap().effect,
            ActionEffect::Damage {
                target: "Goblin".into(),
                amount: 5,
                remaining_hp: 5,
            }
        );
        assert_eq!(
            report.enemy.unwrap().effect,
            ActionEffect::Damage {
                target: "Player".into(),
                amount: 6,
                remaining_hp: 94,
            }
        );
    }

    #[test]
    fn defeated_enemy_never_acts() {
        let (mut player, mut goblin) = encounter();
        let mut engine = CombatEngine::new(&mut player, &mut goblin);

        engine.play_round(ActionSlot::Weapon(0), &FirstAction).unwrap();
        let report = engine.play_round(ActionSlot::Weapon(0), &FirstAction).unwrap();

        assert_eq!(report.phase, CombatPhase::Cleared);
        assert!(report.enemy.is_none());
        assert_eq!(player.actor().hp(), 94);
        assert_eq!(goblin.actor().hp(), 0);
    }

    #[test]
    fn potion_is_consumed_and_uncapped() {
        let (mut player, mut goblin) = encounter();
        let mut engine = CombatEngine::new(&mut player, &mut goblin);

        let outcome = engine.resolve_player_action(ActionSlot::Buff(0)).unwrap();
        assert!(outcome.consumed);
        assert_eq!(engine.phase(), CombatPhase::AwaitingEnemyAction);

        assert_eq!(player.actor().hp(), 120);
        assert_eq!(player.actor().inventory().total_items(), 1);
        assert_eq!(player.actor().inventory().count_of(&ItemKind::HealthPotion), 0);
    }

    #[test]
    fn sword_is_kept_after_use() {
        let (mut player, mut goblin) = encounter();
        let mut engine = CombatEngine::new(&mut player, &mut goblin);

        let outcome = engine.resolve_player_action(ActionSlot::Weapon(0)).unwrap();
        assert!(!outcome.consumed);
        assert_eq!(player.actor().inventory().total_items(), 2);
    }

    #[test]
    fn out_of_order_calls_are_rejected() {
        let (mut player, mut goblin) = encounter();
        let mut engine = CombatEngine::new(&mut player, &mut goblin);

        assert_eq!(
            engine.resolve_enemy_action(&FirstAction),
            Err(CombatError::PhaseMismatch {
                expected: CombatPhase::AwaitingEnemyAction,
                actual: CombatPhase::AwaitingPlayerAction,
            })
        );
    }

    #[test]
    fn stale_slot_keeps_player_turn() {
        let (mut player, mut goblin) = encounter();
        let mut engine = CombatEngine::new(&mut player, &mut goblin);

        let slot = ActionSlot::Buff(4);
        assert_eq!(
            engine.resolve_player_action(slot),
            Err(CombatError::EmptySlot { slot })
        );
        assert_eq!(engine.phase(), CombatPhase::AwaitingPlayerAction);
    }

    #[test]
    fn passing_policy_skips_enemy_action() {
        let (mut player, mut goblin) = encounter();
        let mut engine = CombatEngine::new(&mut player, &mut goblin);
        let idle = |_: &ActionMenu| -> Option<usize> { None };

        let report = engine.play_round(ActionSlot::Weapon(0), &idle).unwrap();
        assert!(report.enemy.is_none());
        assert_eq!(player.actor().hp(), 100);
    }

    #[test]
    fn player_can_be_defeated() {
        let factories = Factories::standard();
        let mut player = factories.create_player();
        player.actor_mut().take_damage(95);
        let mut goblin = factories.create_enemy(&EnemyKind::Goblin);
        let mut engine = CombatEngine::new(&mut player, &mut goblin);

        let report = engine.play_round(ActionSlot::Weapon(0), &FirstAction).unwrap();
        assert_eq!(report.phase, CombatPhase::PlayerDefeated);
        assert_eq!(player.actor().hp(), -1);
    }
}
