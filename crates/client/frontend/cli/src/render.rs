//! Line-oriented console renderer.
use std::io::Write;

use game_core::{ActionEffect, ActionOutcome};
use runtime::{ClearedView, GameStatus, GameView, Renderer, RoomDetail, Result};

use crate::art::enemy_art;
use crate::config::CliConfig;
use crate::theme::{Theme, Tone};

pub struct ConsoleRenderer<W: Write> {
    out: W,
    theme: Theme,
    show_art: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, config: CliConfig) -> Self {
        Self {
            out,
            theme: Theme::new(config.color),
            show_art: config.show_art,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_room(&mut self, view: &GameView) -> Result<()> {
        let room = &view.room;
        match &room.detail {
            RoomDetail::Enemy(enemy) => {
                if self.show_art {
                    writeln!(self.out, "{}", enemy_art(&enemy.kind))?;
                }
                writeln!(
                    self.out,
                    "{}  HP {}  STR {}  SPD {}  AGI {}",
                    self.theme.paint(Tone::Enemy, &enemy.name),
                    enemy.hp,
                    enemy.strength,
                    enemy.speed,
                    enemy.agility,
                )?;
            }
        }
        writeln!(self.out, "Doors ahead: {}", room.neighbor_count)?;
        Ok(())
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render_state(&mut self, view: &GameView) -> Result<()> {
        let banner = format!(
            "=== Round {} : {} ({}) ===",
            view.round, view.room.name, view.room.kind
        );
        writeln!(self.out)?;
        writeln!(self.out, "{}", self.theme.paint(Tone::Banner, &banner))?;

        let player = &view.player;
        writeln!(
            self.out,
            "{}  HP {}  STR {}  SPD {}  AGI {}  Items {}",
            self.theme.paint(Tone::Player, &player.name),
            player.hp,
            player.strength,
            player.speed,
            player.agility,
            player.item_count,
        )?;

        self.write_room(view)?;
        self.out.flush()?;
        Ok(())
    }

    fn render_outcome(&mut self, outcome: &ActionOutcome) -> Result<()> {
        let line = match &outcome.effect {
            ActionEffect::Damage {
                target,
                amount,
                remaining_hp,
            } => format!(
                "{} uses {}: {} takes {} damage (HP {}).",
                outcome.actor,
                outcome.label,
                target,
                self.theme.paint(Tone::Damage, &amount.to_string()),
                remaining_hp,
            ),
            ActionEffect::Buff {
                verb,
                target,
                amount,
                resulting_hp,
            } => format!(
                "{} uses {}: {} {} +{} (HP {}).",
                outcome.actor,
                outcome.label,
                verb,
                target,
                self.theme.paint(Tone::Heal, &amount.to_string()),
                resulting_hp,
            ),
        };
        writeln!(self.out, "{line}")?;
        if outcome.consumed {
            writeln!(self.out, "  ({} is used up.)", outcome.label)?;
        }
        Ok(())
    }

    fn render_rejection(&mut self, reason: &str) -> Result<()> {
        let line = format!("Invalid choice: {reason}. Try again.");
        writeln!(self.out, "{}", self.theme.paint(Tone::Warning, &line))?;
        Ok(())
    }

    fn render_cleared(&mut self, view: &ClearedView) -> Result<()> {
        let banner = format!("*** {} cleared! ***", view.view.room.name);
        writeln!(self.out)?;
        writeln!(self.out, "{}", self.theme.paint(Tone::Banner, &banner))?;
        if view.rewards.is_empty() {
            writeln!(self.out, "The enemy left nothing behind.")?;
        } else {
            writeln!(self.out, "Rewards: {}", view.rewards.join(", "))?;
        }
        Ok(())
    }

    fn render_status(&mut self, status: GameStatus) -> Result<()> {
        let line = match status {
            GameStatus::Ongoing => return Ok(()),
            GameStatus::Victory => "Victory!",
            GameStatus::Gameover => "Game over.",
        };
        writeln!(self.out, "{}", self.theme.paint(Tone::Banner, line))?;
        self.out.flush()?;
        Ok(())
    }
}
