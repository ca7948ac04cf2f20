//! Gameplay loop controller.
//!
//! [`Runtime`] owns the player, the map and the collaborators it was built
//! with. Each [`step`](Runtime::step) renders the current state, plays one
//! combat round against the current room and, once the room is cleared, hands
//! out rewards and asks whether to continue.

use tracing::{debug, info};

use game_core::{
    ActionMenu, ActionSlot, ActorCatalog, CombatEngine, CombatPhase, EnemyActionPolicy,
    Factories, FirstAction, GameConfig, GameError, ItemCatalog, Map, NeighborPolicy, Player, Room,
};

use crate::api::{Component, PlayerInput, Renderer, Result, RuntimeError};
use crate::status::{Decision, GameStatus};
use crate::view::{ClearedView, GameView};

/// Drives rounds until the player quits or is defeated.
pub struct Runtime {
    factories: Factories,
    map: Map,
    player: Player,
    renderer: Box<dyn Renderer>,
    input: Box<dyn PlayerInput>,
    enemy_policy: Box<dyn EnemyActionPolicy>,
    status: GameStatus,
    round: u64,
    rooms_cleared: u64,
}

impl Runtime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    /// Rounds played so far.
    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn rooms_cleared(&self) -> u64 {
        self.rooms_cleared
    }

    /// Runs the loop to completion and renders the final status.
    pub fn run(&mut self) -> Result<GameStatus> {
        info!(room = self.map.room_name(), "session started");

        while !self.status.is_over() {
            self.step()?;
        }

        self.renderer.render_status(self.status)?;
        info!(
            status = %self.status,
            rounds = self.round,
            rooms_cleared = self.rooms_cleared,
            "session finished"
        );
        Ok(self.status)
    }

    /// Plays a single round. Does nothing once the session is over.
    pub fn step(&mut self) -> Result<GameStatus> {
        if self.status.is_over() {
            return Ok(self.status);
        }

        let Self {
            factories,
            map,
            player,
            renderer,
            input,
            enemy_policy,
            status,
            round,
            rooms_cleared,
        } = self;

        *round += 1;
        debug!(round = *round, room = map.room_name(), "round started");
        renderer.render_state(&GameView::capture(*round, player, map))?;

        let (phase, acted) = match map.current_room_mut() {
            Room::Enemy(room) => {
                let mut engine = CombatEngine::new(player, room.enemy_mut());
                fight_round(
                    &mut engine,
                    &mut **renderer,
                    &mut **input,
                    &**enemy_policy,
                )?
            }
        };

        match phase {
            CombatPhase::AwaitingPlayerAction if !acted => {
                info!(round = *round, "neither side can act, ending session");
                *status = GameStatus::Gameover;
            }
            CombatPhase::PlayerDefeated => {
                info!(round = *round, "player defeated");
                *status = GameStatus::Gameover;
            }
            CombatPhase::Cleared => {
                renderer.render_cleared(&ClearedView::capture(
                    *round,
                    player,
                    map,
                    factories.items(),
                ))?;
                let granted = map.bestow_rewards(player, factories.items());
                *rooms_cleared += 1;
                info!(room = map.room_name(), granted, "room cleared");

                match prompt_decision(&mut **renderer, &mut **input)? {
                    Decision::Continue => {
                        let next = map.advance(factories);
                        info!(room = next.name(), kind = %next.kind(), "advanced");
                    }
                    Decision::Quit => *status = GameStatus::Gameover,
                }
            }
            _ => {}
        }

        Ok(*status)
    }
}

/// Player action (or pass), then the enemy action if the enemy survived.
///
/// Also reports whether either side acted; a round where both pass changes
/// nothing and would repeat forever.
fn fight_round(
    engine: &mut CombatEngine<'_>,
    renderer: &mut dyn Renderer,
    input: &mut dyn PlayerInput,
    enemy_policy: &dyn EnemyActionPolicy,
) -> Result<(CombatPhase, bool)> {
    if engine.phase().is_terminal() {
        return Ok((engine.phase(), false));
    }

    let mut acted = false;
    let menu = engine.player_menu();
    if menu.is_empty() {
        debug!("player has nothing to act with, passing");
        engine.pass_player_turn()?;
    } else {
        let slot = prompt_action(&menu, renderer, input)?;
        let outcome = engine.resolve_player_action(slot)?;
        debug!(label = %outcome.label, consumed = outcome.consumed, "player acted");
        renderer.render_outcome(&outcome)?;
        acted = true;
    }

    if engine.phase() == CombatPhase::AwaitingEnemyAction {
        match engine.resolve_enemy_action(enemy_policy)? {
            Some(outcome) => {
                debug!(label = %outcome.label, "enemy acted");
                renderer.render_outcome(&outcome)?;
                acted = true;
            }
            None => debug!("enemy passed"),
        }
    }

    Ok((engine.phase(), acted))
}

fn prompt_action(
    menu: &ActionMenu,
    renderer: &mut dyn Renderer,
    input: &mut dyn PlayerInput,
) -> Result<ActionSlot> {
    loop {
        let answer = input.read_action(menu)?;
        match menu.parse(&answer) {
            Ok(slot) => return Ok(slot),
            Err(err) => {
                debug!(
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    "action rejected"
                );
                renderer.render_rejection(&err.to_string())?;
            }
        }
    }
}

fn prompt_decision(renderer: &mut dyn Renderer, input: &mut dyn PlayerInput) -> Result<Decision> {
    loop {
        let answer = input.read_decision()?;
        match Decision::parse(&answer) {
            Ok(decision) => return Ok(decision),
            Err(err) => renderer.render_rejection(&err.to_string())?,
        }
    }
}

/// Builder for [`Runtime`].
///
/// A renderer and an input source are required. Everything else defaults to
/// the built-in presets and the fixed first-choice policies.
pub struct RuntimeBuilder {
    config: GameConfig,
    factories: Option<Factories>,
    renderer: Option<Box<dyn Renderer>>,
    input: Option<Box<dyn PlayerInput>>,
    enemy_policy: Box<dyn EnemyActionPolicy>,
    neighbor_policy: Option<Box<dyn NeighborPolicy>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: GameConfig::default(),
            factories: None,
            renderer: None,
            input: None,
            enemy_policy: Box::new(FirstAction),
            neighbor_policy: None,
        }
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Factories used for the player, every room and every reward.
    ///
    /// Without this, factories are built from the default catalogs and the
    /// configured enemy spawn.
    pub fn factories(mut self, factories: Factories) -> Self {
        self.factories = Some(factories);
        self
    }

    pub fn renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    pub fn input(mut self, input: impl PlayerInput + 'static) -> Self {
        self.input = Some(Box::new(input));
        self
    }

    pub fn enemy_policy(mut self, policy: impl EnemyActionPolicy + 'static) -> Self {
        self.enemy_policy = Box::new(policy);
        self
    }

    pub fn neighbor_policy(mut self, policy: impl NeighborPolicy + 'static) -> Self {
        self.neighbor_policy = Some(Box::new(policy));
        self
    }

    pub fn build(self) -> Result<Runtime> {
        let renderer = self.renderer.ok_or(RuntimeError::MissingComponent {
            component: Component::Renderer,
        })?;
        let input = self.input.ok_or(RuntimeError::MissingComponent {
            component: Component::Input,
        })?;

        let factories = self.factories.unwrap_or_else(|| {
            Factories::from_catalogs(ItemCatalog::default(), ActorCatalog::default(), &self.config)
        });

        let player = factories.create_player();
        let room = factories.create_room(&self.config.starting_room);
        let map = match self.neighbor_policy {
            Some(policy) => Map::with_boxed_policy(room, policy),
            None => Map::new(room),
        };

        Ok(Runtime {
            factories,
            map,
            player,
            renderer,
            input,
            enemy_policy: self.enemy_policy,
            status: GameStatus::Ongoing,
            round: 0,
            rooms_cleared: 0,
        })
    }
}
